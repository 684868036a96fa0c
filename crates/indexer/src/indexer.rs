use crate::diff::SnapshotDiff;
use crate::error::Result;
use crate::snapshot::FileSnapshot;
use crate::stats::IndexStats;
use codeintel_callgraph::{load_edge_list, save_adjacency_json, CallGraph, CallGraphBuilder};
use codeintel_extractor::{extract_many, SymbolRecord};
use codeintel_languages::registry;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for one indexing run.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Ignore the persisted baseline and treat every file as added.
    pub full_rebuild: bool,
    /// Where the baseline hash map is persisted. `None` disables
    /// persistence (every run behaves like a first run).
    pub baseline_path: Option<PathBuf>,
    /// Externally generated edge list for the privileged language,
    /// merged into the unified graph when present.
    pub edge_list_path: Option<PathBuf>,
    /// Directory for per-language adjacency JSON files; skipped when
    /// `None`.
    pub graph_dir: Option<PathBuf>,
}

/// Everything one run hands to the downstream consumers: the re-extracted
/// symbols (for embedding), the purge set (via `diff`), and the unified
/// graph snapshot.
#[derive(Debug)]
pub struct IndexOutcome {
    pub stats: IndexStats,
    pub diff: SnapshotDiff,
    pub symbols: Vec<SymbolRecord>,
    pub graph: Arc<CallGraph>,
}

/// Drives the structure pipeline: snapshot, diff, extract, build, merge,
/// publish.
///
/// The merged graph is published as an `Arc` snapshot swap; queries in
/// flight keep traversing the previous snapshot and never observe a graph
/// being mutated.
pub struct StructureIndexer {
    options: IndexOptions,
    graph: Arc<CallGraph>,
}

impl StructureIndexer {
    pub fn new(options: IndexOptions) -> Self {
        Self {
            options,
            graph: Arc::new(CallGraph::new()),
        }
    }

    /// The most recently published graph snapshot.
    pub fn graph(&self) -> Arc<CallGraph> {
        Arc::clone(&self.graph)
    }

    /// Run one indexing pass over externally supplied
    /// `(relative_path, text_content)` pairs.
    ///
    /// Symbols are extracted only for the changed subset; the call graphs
    /// are rebuilt over every current file of each language, because pass-2
    /// callee resolution needs the complete short-name index.
    pub fn run(&mut self, files: &[(String, String)]) -> Result<IndexOutcome> {
        let current = FileSnapshot::compute(files);
        let previous = self.load_baseline()?;
        let diff = SnapshotDiff::between(&previous, &current);

        let reextract = diff.files_to_reextract();
        let changed: Vec<(String, String)> = files
            .iter()
            .filter(|(path, _)| reextract.contains(path))
            .cloned()
            .collect();
        let symbols = extract_many(&changed);

        let merged = self.build_graphs(files)?;

        let stats = IndexStats {
            files: current.len(),
            unchanged: diff.unchanged.len(),
            reextracted: reextract.len(),
            purged: diff.files_to_purge().len(),
            symbols: symbols.len(),
            graph_nodes: merged.node_count(),
            graph_edges: merged.edge_count(),
        };
        log::info!(
            "Indexed {} files ({} unchanged, {} reextracted): {} symbols, graph {}n/{}e",
            stats.files,
            stats.unchanged,
            stats.reextracted,
            stats.symbols,
            stats.graph_nodes,
            stats.graph_edges
        );

        // Atomic snapshot swap before the baseline write; a run that
        // aborts earlier re-diffs against the older baseline next time.
        self.graph = Arc::new(merged);
        if let Some(path) = &self.options.baseline_path {
            current.save(path)?;
        }

        Ok(IndexOutcome {
            stats,
            diff,
            symbols,
            graph: self.graph(),
        })
    }

    fn load_baseline(&self) -> Result<FileSnapshot> {
        if self.options.full_rebuild {
            log::info!("Full rebuild: ignoring persisted baseline");
            return Ok(FileSnapshot::new());
        }
        match &self.options.baseline_path {
            Some(path) => FileSnapshot::load(path),
            None => Ok(FileSnapshot::new()),
        }
    }

    /// Build one graph per grammar-driven language, persist it when
    /// configured, and merge everything with the imported edge list.
    fn build_graphs(&self, files: &[(String, String)]) -> Result<CallGraph> {
        let mut by_language: BTreeMap<&'static str, Vec<(String, String)>> = BTreeMap::new();
        for (path, content) in files {
            if let Some(descriptor) = registry().detect(path) {
                if descriptor.is_grammar_driven() {
                    by_language
                        .entry(descriptor.name)
                        .or_default()
                        .push((path.clone(), content.clone()));
                }
            }
        }

        let mut merged = CallGraph::new();
        for (language, language_files) in &by_language {
            let Some(descriptor) = registry().get(language) else {
                continue;
            };
            let graph = CallGraphBuilder::new(descriptor)?.build(language_files);
            if let Some(dir) = &self.options.graph_dir {
                save_adjacency_json(dir.join(format!("{language}_call_graph.json")), &graph)?;
            }
            merged.merge(graph);
        }

        if let Some(path) = &self.options.edge_list_path {
            merged.merge(load_edge_list(path)?);
        }
        Ok(merged)
    }
}
