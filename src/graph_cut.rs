use ahash::AHashSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, NodeIndexable};
use crate::error::OracleError;
use crate::oracle::SetFunction;

type CutGraphType = petgraph::graph::UnGraph<usize, f64>;

/// cut function of a weighted undirected graph: f(A) = total weight of the edges with exactly one
/// endpoint in A (symmetric and submodular for non-negative weights)
/// -> the ground set consists of the vertex IDs 0..n-1
#[derive(Clone, Debug)]
pub struct GraphCut {
    g: CutGraphType,
}

impl GraphCut {
    /// creates a graph with 'n' vertices and no edges
    pub fn new(n: usize) -> Self {
        let mut g = CutGraphType::with_capacity(n, 0);
        for v in 0..n {
            g.add_node(v);
        }
        GraphCut { g }
    }

    /// creates a graph with 'n' vertices and the weighted edges 'edges'
    pub fn from_edges(n: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut g = GraphCut::new(n);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    /// returns the number of vertices
    pub fn size(&self) -> usize {
        self.g.node_count()
    }

    /// returns the number of (distinct) edges
    pub fn edge_count(&self) -> usize {
        self.g.edge_count()
    }

    /// adds weight 'w' to edge {u,v} (the edge is created if it does not exist yet)
    /// panics if 'u' or 'v' is not a vertex of the graph
    pub fn add_edge(&mut self, u: usize, v: usize, w: f64) {
        debug_assert!(w.is_finite() && w >= 0.0);
        let (a, b) = (self.g.from_index(u), self.g.from_index(v));
        match self.g.find_edge(a, b) {
            Some(e) => self.g[e] += w,
            None => { self.g.add_edge(a, b, w); },
        }
    }

    /// returns the weight of edge {u,v} (0 if there is no such edge)
    pub fn weight(&self, u: usize, v: usize) -> f64 {
        self.g.find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .map_or(0.0, |e| self.g[e])
    }

    /// returns the ground set (all vertex IDs in increasing order)
    pub fn ground_set(&self) -> Vec<usize> {
        self.g.node_indices().map(|v| self.g[v]).collect()
    }

    /// returns the total weight of all edges leaving 'subset'
    pub fn cut_value(&self, subset: &[usize]) -> f64 {
        let inside: AHashSet<usize> = subset.iter().copied().collect();
        let mut value = 0.0;
        for e in self.g.edge_references() {
            if inside.contains(&self.g[e.source()]) != inside.contains(&self.g[e.target()]) {
                value += *e.weight();
            }
        }
        value
    }
}

impl<P: ?Sized> SetFunction<P> for GraphCut {
    fn evaluate(&self, subset: &[usize], _ground: &[usize], _params: &P) -> Result<f64, OracleError> {
        Ok(self.cut_value(subset))
    }
}
