use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Content hash used for change detection between indexing runs.
/// Not a security boundary; it only needs to avoid accidental collisions
/// on ordinary source text.
pub fn snapshot_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Map of relative file path to content hash, persisted between runs as
/// a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSnapshot {
    hashes: BTreeMap<String, String>,
}

impl FileSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash every supplied file into a fresh snapshot.
    pub fn compute(files: &[(String, String)]) -> Self {
        let hashes = files
            .iter()
            .map(|(path, content)| (path.clone(), snapshot_hash(content)))
            .collect();
        Self { hashes }
    }

    /// Load the persisted baseline. A missing file is an empty baseline,
    /// equivalent to a first run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No baseline at {}, treating as first run", path.display());
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Persist this snapshot as the baseline for the next run.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.hashes.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.hashes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hash_is_stable_and_content_sensitive() {
        assert_eq!(snapshot_hash("abc"), snapshot_hash("abc"));
        assert_ne!(snapshot_hash("abc"), snapshot_hash("abd"));
    }

    #[test]
    fn compute_hashes_every_file() {
        let files = vec![
            ("a.c".to_string(), "int a;".to_string()),
            ("b.c".to_string(), "int b;".to_string()),
        ];
        let snapshot = FileSnapshot::compute(&files);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("a.c"), Some(snapshot_hash("int a;").as_str()));
    }

    #[test]
    fn missing_baseline_is_empty() {
        let snapshot = FileSnapshot::load("/nonexistent/baseline.json").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn baseline_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("hashes.json");

        let files = vec![("src/x.py".to_string(), "def x():\n    pass\n".to_string())];
        let snapshot = FileSnapshot::compute(&files);
        snapshot.save(&path).unwrap();

        let loaded = FileSnapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }
}
