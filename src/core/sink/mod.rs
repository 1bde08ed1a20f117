//! Terminal consumers of resolved `KEY=VALUE` pairs.
//!
//! - `process`: exec-replace a target program with the pairs in its environment
//! - `cluster`: create or update a Kubernetes Secret holding the pairs

pub mod cluster;
pub mod process;
