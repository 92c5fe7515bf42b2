use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use zhseg::{Cli, JiebaSegmenter, RunSummary, run};

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    // RUST_LOG wins over the verbosity flag
    let level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("zhseg={}", level))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let start_time = Instant::now();
    let segmenter = JiebaSegmenter::new();

    match run(&config, &segmenter) {
        Ok(summary) => {
            print_summary(&summary);
            tracing::debug!("Finished in {:.2}s", start_time.elapsed().as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_summary(summary: &RunSummary) {
    match summary {
        RunSummary::File(outcome) => {
            println!("✓ Extracted {} Chinese words", outcome.word_count());
            println!("Saved to: {}", outcome.output_path.display());
        }
        RunSummary::Merged(outcome) => {
            println!(
                "\n✓ Done: {} merged file, {} Chinese words",
                summary.output_count(),
                outcome.word_count()
            );
            println!("Saved to: {}", outcome.output_path.display());
        }
        RunSummary::Separate { output_dir, .. } => {
            println!(
                "\n✓ Done: {} files, {} Chinese words in total",
                summary.output_count(),
                summary.total_words()
            );
            println!("All results saved to: {}/", output_dir.display());
        }
    }
}
