use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;
use crate::graph_cut::GraphCut;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error, more details: {0}")]
    Io(#[from] io::Error),
    #[error("did not find the number of vertices")]
    MissingHeader,
    #[error("line {line}: invalid edge '{content}'")]
    InvalidEdge { line: usize, content: String },
    #[error("line {line}: vertex {vertex} is out of range 1..={n}")]
    VertexOutOfRange { line: usize, vertex: usize, n: usize },
    #[error("line {line}: weight {weight} is not a finite non-negative number")]
    InvalidWeight { line: usize, weight: f64 },
}

/// reads a weighted graph (see 'parse_graph') from 'file'
pub fn read_graph_from_file(file: impl AsRef<Path>) -> Result<GraphCut, ParseError> {
    let f = File::open(file)?;                              // open file or return error
    parse_graph(io::BufReader::new(f))
}

/// parses a weighted graph in (extended) DIMACS format:
/// 'c ...' comment lines, a header 'p <descriptor> <n> <m>' or '# <n>', then one edge 'u v [w]'
/// per line with vertex IDs 1..=n and an optional weight (default 1)
/// -> vertex 'u' of the file becomes ground set element u-1
pub fn parse_graph(reader: impl BufRead) -> Result<GraphCut, ParseError> {
    let mut lines = reader.lines().enumerate();
    let mut n: Option<usize> = None;
    for (_, line) in lines.by_ref() {
        let line = line?;
        match line.bytes().next() {
            None | Some(b'c') => continue,                           // ignore comments
            Some(b'p') => {
                // descriptor line --> dimacs format from PACE 2021
                n = line.split_whitespace().nth(2).and_then(|s| s.parse().ok());
                break;
            },
            Some(b'#') => {
                // number of vertices --> format from other instances
                n = line.split_whitespace().nth(1).and_then(|s| s.parse().ok());
                break;
            },
            _ => return Err(ParseError::MissingHeader),
        }
    }
    let n = n.ok_or(ParseError::MissingHeader)?;

    let mut g = GraphCut::new(n);
    for (i, line) in lines {
        let line = line?;
        let line_no = i + 1;
        if line.starts_with('c') || line.starts_with('#') || line.trim().is_empty() {
            continue;                                                // ignore comments
        }
        let (u, v, w) = parse_edge(&line).ok_or_else(|| ParseError::InvalidEdge {
            line: line_no,
            content: line.clone(),
        })?;
        for vertex in [u, v] {
            if vertex == 0 || vertex > n {
                return Err(ParseError::VertexOutOfRange { line: line_no, vertex, n });
            }
        }
        if !w.is_finite() || w < 0.0 {
            return Err(ParseError::InvalidWeight { line: line_no, weight: w });
        }
        g.add_edge(u - 1, v - 1, w);  // index shift --> first vertex has ID 0
    }
    Ok(g)
}

fn parse_edge(line: &str) -> Option<(usize, usize, f64)> {
    let edge: Vec<&str> = line.split_whitespace().collect();
    let w = match edge.len() {
        2 => 1.0,
        3 => edge[2].parse().ok()?,
        _ => return None,
    };
    Some((edge[0].parse().ok()?, edge[1].parse().ok()?, w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_instances_test() {
        let c4 = read_graph_from_file("test_instances/c4.dimacs").unwrap();
        assert_eq!(c4.size(), 4);
        assert_eq!(c4.edge_count(), 4);
        assert_eq!(c4.cut_value(&[0]), 2.0);

        let g = read_graph_from_file("test_instances/barbell.dimacs").unwrap();
        assert_eq!(g.size(), 8);
        assert_eq!(g.weight(3, 4), 0.5);
        assert_eq!(g.weight(0, 1), 2.0);
    }

    #[test]
    fn parse_test() {
        let g = parse_graph("c comment\n# 3\n1 2\n\n2 3 2.5\nc another\n".as_bytes()).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.weight(0, 1), 1.0);
        assert_eq!(g.weight(1, 2), 2.5);
    }

    #[test]
    fn malformed_instances() {
        assert!(matches!(parse_graph("1 2\n".as_bytes()), Err(ParseError::MissingHeader)));
        assert!(matches!(parse_graph("c only comments\n".as_bytes()), Err(ParseError::MissingHeader)));
        assert!(matches!(parse_graph("p cep x 1\n".as_bytes()), Err(ParseError::MissingHeader)));
        assert!(matches!(parse_graph("p cep 3 1\n1 2 3 4\n".as_bytes()),
                         Err(ParseError::InvalidEdge { line: 2, .. })));
        assert!(matches!(parse_graph("p cep 3 1\n1 4\n".as_bytes()),
                         Err(ParseError::VertexOutOfRange { vertex: 4, .. })));
        assert!(matches!(parse_graph("p cep 3 1\n0 1\n".as_bytes()),
                         Err(ParseError::VertexOutOfRange { vertex: 0, .. })));
        assert!(matches!(parse_graph("p cep 3 1\n1 2 -1\n".as_bytes()),
                         Err(ParseError::InvalidWeight { .. })));
        assert!(matches!(read_graph_from_file("test_instances/missing.dimacs"), Err(ParseError::Io(_))));
    }
}
