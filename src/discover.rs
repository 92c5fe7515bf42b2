use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as text input
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "csv", "json", "xml", "html", "htm"];

/// Check whether a path carries one of the supported extensions
///
/// Matching is exact, so `notes.TXT` is not picked up.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Collect supported text files under a directory
///
/// Without `recursive` only direct children are considered. The result
/// is deduplicated and sorted by path.
pub fn collect_text_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).follow_links(true).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = BTreeSet::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };

        if entry.file_type().is_file() && is_supported(entry.path()) {
            files.insert(entry.into_path());
        }
    }

    tracing::debug!("Discovered {} text files under {}", files.len(), dir.display());
    files.into_iter().collect()
}
