//! Directed graph storage, loading, and reachability queries.

mod loader;
mod reach;
mod store;


pub use loader::{load_path, load_str};
pub use reach::{reachable, Reachability};
pub use store::{Graph, Neighbors};
