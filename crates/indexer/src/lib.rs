//! # Codeintel Indexer
//!
//! Incremental, content-hash-driven indexing for the structure engine.
//!
//! ## Pipeline
//!
//! ```text
//! (relative_path, text)[]
//!     │
//!     ├──> FileSnapshot (sha256 per file)
//!     │       │
//!     │       └──> diff vs persisted baseline
//!     │              ├─> files_to_reextract = added ∪ modified
//!     │              └─> files_to_purge     = removed ∪ modified
//!     │
//!     ├──> Symbol extraction for the reextract set
//!     │
//!     ├──> Call graphs per grammar-driven language, merged with the
//!     │    imported privileged-language edge list
//!     │
//!     └──> Unified graph published as an atomic Arc snapshot
//! ```
//!
//! A missing baseline is treated as an empty one (first run). The current
//! snapshot is written back as the new baseline only once the run has
//! produced it; an earlier abort re-diffs against the older baseline next
//! time, which is safe and at worst redundant.

mod diff;
mod error;
mod indexer;
mod snapshot;
mod stats;

pub use diff::SnapshotDiff;
pub use error::{IndexerError, Result};
pub use indexer::{IndexOptions, IndexOutcome, StructureIndexer};
pub use snapshot::{snapshot_hash, FileSnapshot};
pub use stats::IndexStats;
