// Public API exports
pub mod app;
pub mod cli;
pub mod discover;
pub mod filter;
pub mod output;
pub mod processor;
pub mod segmenter;

// Re-export main types for convenience
pub use app::{AppError, Config, RunSummary, run};
pub use cli::Cli;

pub use filter::is_chinese_word;

pub use segmenter::{JiebaSegmenter, Segmenter, extract_chinese_words};

pub use processor::{
    DirectoryOptions, FileOutcome, NameTally, ProcessError, process_directory, process_file,
};
