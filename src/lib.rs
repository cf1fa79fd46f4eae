//! Senda loads a directed graph from a small line-oriented text format and
//! answers point-to-point reachability queries, alongside the companion
//! word-length report over plain text files.

#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod graph;
pub mod model;
pub mod words;

pub use error::{LoadError, WordsError};
pub use graph::{load_path, load_str, reachable, Graph, Reachability};
pub use model::VertexId;
pub use words::WordReport;
