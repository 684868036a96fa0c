//! # Codeintel Callgraph
//!
//! Call-graph construction and queries for the structure engine.
//!
//! ## Architecture
//!
//! ```text
//! (relative_path, text)[] per language
//!     │
//!     ├──> Pass 1: collect every symbol, its body span and its short
//!     │    name; build the short-name index (barrier before pass 2)
//!     │
//!     ├──> Pass 2: scan bodies for call sites, resolve callees by
//!     │    exact short name or `.suffix` fallback
//!     │
//!     ├──> Per-language adjacency maps
//!     │         │
//!     │         └──> merge (union on collision) + imported edge list
//!     │
//!     └──> Unified CallGraph ──> find_path (BFS, shortest)
//! ```
//!
//! Callee resolution is deliberately permissive: a bare `method()` call
//! links to every `Class.method` sharing the short name. Over-linking is
//! the intended bias; dependency chains are a recall signal for review.

mod builder;
mod error;
mod loader;
mod path;
mod types;

pub use builder::CallGraphBuilder;
pub use error::{GraphError, Result};
pub use loader::{load_adjacency_json, load_edge_list, parse_edge_list, save_adjacency_json};
pub use path::{align_node_name, find_path};
pub use types::{node_id, CallGraph};
