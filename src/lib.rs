//! Minimization of symmetric submodular set functions with Queyranne's algorithm
//! (M. Queyranne, "Minimizing symmetric submodular functions", Mathematical Programming, 1998).

pub mod aggregation;
pub mod brute_force;
pub mod error;
pub mod graph_cut;
pub mod instance_parser;
pub mod minimizer;
pub mod oracle;
pub mod pendent_pair;
pub mod set_ops;
pub mod verify;

pub use error::{OracleError, SfmError, SfmResult};
pub use minimizer::{minimize, Bipartition, Minimum};
pub use oracle::SetFunction;
pub use pendent_pair::{find_pendent_pair, PendentPair};
pub use set_ops::set_difference;
