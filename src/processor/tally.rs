use std::collections::BTreeMap;
use std::path::Path;

/// Occurrence counts of file basenames across a batch
#[derive(Debug, Default)]
pub struct NameTally {
    counts: BTreeMap<String, usize>,
}

impl NameTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a file with the same basename was already recorded
    pub fn contains(&self, path: &Path) -> bool {
        self.counts.contains_key(&Self::basename(path))
    }

    pub fn record(&mut self, path: &Path) {
        *self.counts.entry(Self::basename(path)).or_insert(0) += 1;
    }

    /// Basenames recorded more than once, with their counts
    pub fn duplicates(&self) -> Vec<(&str, usize)> {
        self.counts
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(name, &count)| (name.as_str(), count))
            .collect()
    }

    fn basename(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
