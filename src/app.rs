use crate::processor::{DirectoryOptions, FileOutcome, process_directory, process_file};
use crate::segmenter::Segmenter;
use std::path::PathBuf;
use thiserror::Error;

/// Settings for a single run
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub output_dir: PathBuf,
    pub recursive: bool,
    pub merge: bool,
    pub verbose: bool,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Path '{0}' does not exist")]
    MissingPath(PathBuf),

    #[error("'{0}' is neither a file nor a directory")]
    NotFileOrDirectory(PathBuf),

    #[error("Failed to process file '{0}'")]
    FileFailed(PathBuf),

    #[error("No files were processed successfully under '{0}'")]
    NothingProcessed(PathBuf),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// What a successful run produced
#[derive(Debug)]
pub enum RunSummary {
    File(FileOutcome),
    Merged(FileOutcome),
    Separate {
        outcomes: Vec<FileOutcome>,
        output_dir: PathBuf,
    },
}

impl RunSummary {
    /// Number of output files written
    pub fn output_count(&self) -> usize {
        match self {
            Self::File(_) | Self::Merged(_) => 1,
            Self::Separate { outcomes, .. } => outcomes.len(),
        }
    }

    /// Word count summed across outputs
    pub fn total_words(&self) -> usize {
        match self {
            Self::File(outcome) | Self::Merged(outcome) => outcome.word_count(),
            Self::Separate { outcomes, .. } => outcomes.iter().map(FileOutcome::word_count).sum(),
        }
    }
}

/// Dispatch a run to the file or directory processor
pub fn run(config: &Config, segmenter: &dyn Segmenter) -> Result<RunSummary, AppError> {
    let path = &config.path;
    if !path.exists() {
        return Err(AppError::MissingPath(path.clone()));
    }

    if path.is_file() {
        tracing::info!("Processing file: {}", path.display());
        return process_file(segmenter, path, &config.output_dir)
            .map(RunSummary::File)
            .map_err(|_| AppError::FileFailed(path.clone()));
    }

    if !path.is_dir() {
        return Err(AppError::NotFileOrDirectory(path.clone()));
    }

    tracing::info!("Processing directory: {}", path.display());
    if config.recursive {
        tracing::info!("Recursive mode enabled");
    }
    if config.merge {
        tracing::info!("Merged output: all results go to one file");
    } else {
        tracing::info!("Separate output: one file per input");
    }

    let options = DirectoryOptions {
        recursive: config.recursive,
        merge: config.merge,
    };
    let mut outcomes = process_directory(segmenter, path, &config.output_dir, options)?;

    if outcomes.is_empty() {
        return Err(AppError::NothingProcessed(path.clone()));
    }

    if config.merge {
        Ok(RunSummary::Merged(outcomes.remove(0)))
    } else {
        Ok(RunSummary::Separate {
            outcomes,
            output_dir: config.output_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::JiebaSegmenter;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn config(path: &Path, output_dir: &Path) -> Config {
        Config {
            path: path.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            recursive: false,
            merge: true,
            verbose: false,
        }
    }

    #[test]
    fn test_missing_path() {
        let dir = tempdir().unwrap();
        let cfg = config(&dir.path().join("nope.txt"), &dir.path().join("raw"));

        let err = run(&cfg, &JiebaSegmenter::new()).unwrap_err();
        assert!(matches!(err, AppError::MissingPath(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_single_file_summary() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("a.txt");
        fs::write(&input, "你好,hello,世界!你好").unwrap();

        let summary = run(&config(&input, &dir.path().join("raw")), &JiebaSegmenter::new()).unwrap();
        assert!(matches!(summary, RunSummary::File(_)));
        assert_eq!(summary.output_count(), 1);
        assert_eq!(summary.total_words(), 2);
    }

    #[test]
    fn test_single_empty_file_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        fs::write(&input, "").unwrap();

        let err = run(&config(&input, &dir.path().join("raw")), &JiebaSegmenter::new()).unwrap_err();
        assert!(matches!(err, AppError::FileFailed(_)));
        assert!(!dir.path().join("raw").exists());
    }

    #[test]
    fn test_directory_without_results_fails() {
        let dir = tempdir().unwrap();
        let corpus = dir.path().join("corpus");
        fs::create_dir_all(&corpus).unwrap();
        fs::write(corpus.join("english.txt"), "no chinese here").unwrap();

        let err = run(&config(&corpus, &dir.path().join("raw")), &JiebaSegmenter::new()).unwrap_err();
        assert!(matches!(err, AppError::NothingProcessed(_)));
    }

    #[test]
    fn test_directory_separate_summary() {
        let dir = tempdir().unwrap();
        let corpus = dir.path().join("corpus");
        fs::create_dir_all(&corpus).unwrap();
        fs::write(corpus.join("one.txt"), "测试 甲").unwrap();
        fs::write(corpus.join("two.txt"), "测试 乙").unwrap();

        let mut cfg = config(&corpus, &dir.path().join("raw"));
        cfg.merge = false;

        let summary = run(&cfg, &JiebaSegmenter::new()).unwrap();
        assert_eq!(summary.output_count(), 2);
        assert_eq!(summary.total_words(), 4);
    }

    #[test]
    fn test_directory_merged_summary() {
        let dir = tempdir().unwrap();
        let corpus = dir.path().join("corpus");
        fs::create_dir_all(&corpus).unwrap();
        fs::write(corpus.join("one.txt"), "测试 甲").unwrap();
        fs::write(corpus.join("two.txt"), "测试 乙").unwrap();

        let summary = run(&config(&corpus, &dir.path().join("raw")), &JiebaSegmenter::new()).unwrap();
        assert!(matches!(summary, RunSummary::Merged(_)));
        assert_eq!(summary.total_words(), 3);
    }
}
