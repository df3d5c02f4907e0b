//! Deterministic local fallback algorithms.
//!
//! Dependency-light stand-ins used when no remote backend is configured or
//! the remote call fails:
//!
//! - `summarize` — truncating join, no semantic compression
//! - `qa` — keyword-overlap sentence retrieval
//! - `graph` — capitalized-token adjacency graph

pub mod graph;
pub mod qa;
pub mod summarize;

pub use graph::{build_graph, ConceptGraph};
pub use qa::answer;
pub use summarize::summarize;
