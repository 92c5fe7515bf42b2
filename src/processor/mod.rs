mod error;
mod tally;


pub use error::ProcessError;
pub use tally::NameTally;

use crate::discover::collect_text_files;
use crate::output::{ensure_output_dir, unique_output_path, write_word_list};
use crate::segmenter::{Segmenter, extract_chinese_words};
use anyhow::Result;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback base name when a path has no usable final component
const FALLBACK_BASE_NAME: &str = "output";

/// A word list that was written to disk
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub output_path: PathBuf,
    pub words: BTreeSet<String>,
}

impl FileOutcome {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// How a directory batch is processed
#[derive(Debug, Clone, Copy)]
pub struct DirectoryOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Union every file into one output instead of one output per file
    pub merge: bool,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            merge: true,
        }
    }
}

/// Read a file as UTF-8 and trim surrounding whitespace
pub fn read_content(path: &Path) -> Result<String, ProcessError> {
    let bytes = fs::read(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| ProcessError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    Ok(text.trim().to_string())
}

/// Read a file and extract its unique Chinese words
///
/// Fails when the file is unreadable, not UTF-8, blank, or yields no
/// Chinese words at all.
pub fn extract_file_words(
    segmenter: &dyn Segmenter,
    path: &Path,
) -> Result<BTreeSet<String>, ProcessError> {
    let content = read_content(path)?;
    if content.is_empty() {
        return Err(ProcessError::Empty {
            path: path.to_path_buf(),
        });
    }

    let words = extract_chinese_words(segmenter, &content);
    if words.is_empty() {
        return Err(ProcessError::NoChineseWords {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("{}: {} unique Chinese words", path.display(), words.len());
    Ok(words)
}

/// Process a single file into `{output_dir}/{stem}_segmented[_N].txt`
///
/// Failures are logged before being returned, so callers running a
/// batch can simply move on.
pub fn process_file(
    segmenter: &dyn Segmenter,
    path: &Path,
    output_dir: &Path,
) -> Result<FileOutcome, ProcessError> {
    let result = try_process_file(segmenter, path, output_dir);
    match &result {
        Ok(outcome) => tracing::info!(
            "Processed {} -> {} ({} words)",
            path.display(),
            outcome.output_path.display(),
            outcome.word_count()
        ),
        Err(e) => log_failure(e),
    }
    result
}

fn try_process_file(
    segmenter: &dyn Segmenter,
    path: &Path,
    output_dir: &Path,
) -> Result<FileOutcome, ProcessError> {
    let words = extract_file_words(segmenter, path)?;

    let base_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_BASE_NAME.to_string());

    let output_path = write_words(output_dir, &base_name, &words).map_err(|source| {
        ProcessError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(FileOutcome { output_path, words })
}

fn write_words(output_dir: &Path, base_name: &str, words: &BTreeSet<String>) -> Result<PathBuf> {
    ensure_output_dir(output_dir)?;
    let output_path = unique_output_path(output_dir, base_name);
    write_word_list(&output_path, words)?;
    Ok(output_path)
}

fn log_failure(error: &ProcessError) {
    if error.is_warning() {
        tracing::warn!("Skipping: {}", error);
    } else {
        tracing::error!("Skipping: {}", error);
    }
}

/// Process every supported text file in a directory
///
/// Returns one outcome in merge mode, one per successful file otherwise.
/// An empty list means nothing was written. Individual file failures
/// are logged and skipped; only output directory or merged write
/// failures abort the batch.
pub fn process_directory(
    segmenter: &dyn Segmenter,
    dir: &Path,
    output_dir: &Path,
    options: DirectoryOptions,
) -> Result<Vec<FileOutcome>> {
    let files = collect_text_files(dir, options.recursive);
    if files.is_empty() {
        tracing::warn!("No supported text files found in {}", dir.display());
        return Ok(Vec::new());
    }

    tracing::info!("Found {} text files", files.len());
    ensure_output_dir(output_dir)?;

    if options.merge {
        process_merged(segmenter, dir, &files, output_dir)
    } else {
        Ok(process_separate(segmenter, &files, output_dir))
    }
}

fn process_merged(
    segmenter: &dyn Segmenter,
    dir: &Path,
    files: &[PathBuf],
    output_dir: &Path,
) -> Result<Vec<FileOutcome>> {
    let mut merged = BTreeSet::new();
    let mut tally = NameTally::new();
    let mut succeeded = 0usize;

    for path in files {
        match extract_file_words(segmenter, path) {
            Ok(words) => {
                tracing::info!("Processed {} ({} words)", path.display(), words.len());
                merged.extend(words);
                tally.record(path);
                succeeded += 1;
            }
            Err(e) => log_failure(&e),
        }
    }

    if merged.is_empty() {
        tracing::error!("No Chinese words extracted from any file");
        return Ok(Vec::new());
    }

    let base_name = format!("{}_merged", directory_label(dir));
    let output_path = write_words(output_dir, &base_name, &merged)?;

    tracing::info!(
        "Merged {}/{} files, {} unique words -> {}",
        succeeded,
        files.len(),
        merged.len(),
        output_path.display()
    );
    report_duplicates(&tally, "merged");

    Ok(vec![FileOutcome {
        output_path,
        words: merged,
    }])
}

fn process_separate(
    segmenter: &dyn Segmenter,
    files: &[PathBuf],
    output_dir: &Path,
) -> Vec<FileOutcome> {
    let mut outcomes = Vec::new();
    let mut tally = NameTally::new();

    for path in files {
        if tally.contains(path) {
            tracing::info!(
                "Duplicate file name {}, saving under a distinct output name",
                path.display()
            );
        }

        if let Ok(outcome) = process_file(segmenter, path, output_dir) {
            tally.record(path);
            outcomes.push(outcome);
        }
    }

    report_duplicates(&tally, "saved separately");
    outcomes
}

fn report_duplicates(tally: &NameTally, handling: &str) {
    let duplicates = tally.duplicates();
    if duplicates.is_empty() {
        return;
    }

    tracing::info!(
        "Found {} duplicate file names, {}:",
        duplicates.len(),
        handling
    );
    for (name, count) in duplicates {
        tracing::info!("  {}: {} versions", name, count);
    }
}

/// Name used for merged output: the directory's own name
fn directory_label(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            dir.canonicalize()
                .ok()
                .and_then(|abs| abs.file_name().map(|name| name.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| FALLBACK_BASE_NAME.to_string())
}
