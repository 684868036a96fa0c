use crate::snapshot::FileSnapshot;
use std::collections::BTreeSet;

/// Outcome of diffing the previous baseline against the current snapshot.
///
/// A modified file's stale symbols must be purged before re-insertion, so
/// modified paths appear in both derived sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub added: BTreeSet<String>,
    pub removed: BTreeSet<String>,
    pub modified: BTreeSet<String>,
    pub unchanged: BTreeSet<String>,
}

impl SnapshotDiff {
    pub fn between(previous: &FileSnapshot, current: &FileSnapshot) -> Self {
        let mut diff = Self::default();

        for path in current.paths() {
            match previous.get(path) {
                None => {
                    diff.added.insert(path.to_string());
                }
                Some(old_hash) if Some(old_hash) != current.get(path) => {
                    diff.modified.insert(path.to_string());
                }
                Some(_) => {
                    diff.unchanged.insert(path.to_string());
                }
            }
        }
        for path in previous.paths() {
            if current.get(path).is_none() {
                diff.removed.insert(path.to_string());
            }
        }
        diff
    }

    /// added ∪ modified: files whose symbols must be (re)extracted.
    pub fn files_to_reextract(&self) -> BTreeSet<String> {
        self.added.union(&self.modified).cloned().collect()
    }

    /// removed ∪ modified: files whose stale symbols must be purged.
    pub fn files_to_purge(&self) -> BTreeSet<String> {
        self.removed.union(&self.modified).cloned().collect()
    }

    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn snapshot(entries: &[(&str, &str)]) -> FileSnapshot {
        let files: Vec<(String, String)> = entries
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect();
        FileSnapshot::compute(&files)
    }

    #[test]
    fn classifies_added_modified_removed() {
        let previous = snapshot(&[("a", "one"), ("gone", "x")]);
        let current = snapshot(&[("a", "two"), ("b", "three")]);

        let diff = SnapshotDiff::between(&previous, &current);
        assert_eq!(diff.added, set(&["b"]));
        assert_eq!(diff.modified, set(&["a"]));
        assert_eq!(diff.removed, set(&["gone"]));
        assert_eq!(diff.unchanged, set(&[]));

        assert_eq!(diff.files_to_reextract(), set(&["a", "b"]));
        assert_eq!(diff.files_to_purge(), set(&["a", "gone"]));
    }

    #[test]
    fn modified_only_when_hash_differs() {
        let previous = snapshot(&[("a", "same")]);
        let current = snapshot(&[("a", "same")]);

        let diff = SnapshotDiff::between(&previous, &current);
        assert_eq!(diff.unchanged, set(&["a"]));
        assert!(diff.is_clean());
    }

    #[test]
    fn diff_is_idempotent_on_unchanged_set() {
        let files = snapshot(&[("a", "1"), ("b", "2")]);

        let first = SnapshotDiff::between(&files, &files);
        let second = SnapshotDiff::between(&files, &files);
        assert!(first.files_to_reextract().is_empty());
        assert!(first.files_to_purge().is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_baseline_marks_everything_added() {
        let current = snapshot(&[("a", "1"), ("b", "2")]);
        let diff = SnapshotDiff::between(&FileSnapshot::new(), &current);

        assert_eq!(diff.added, set(&["a", "b"]));
        assert!(diff.files_to_purge().is_empty());
    }
}
