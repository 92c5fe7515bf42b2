use crate::app::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "zhseg",
    version,
    about = "Segment Chinese text, keep pure-Chinese words, and export deduplicated word lists",
    after_help = "Examples:
  zhseg document.txt                 Process one file into raw/
  zhseg docs/                        Process a directory, merged into one file
  zhseg input.txt -o custom_output/  Choose the output directory
  zhseg docs/ -r -o results/         Include subdirectories, merged output
  zhseg docs/ --no-merge             One output file per input file"
)]
pub struct Cli {
    /// Input path (file or directory)
    pub path: PathBuf,

    /// Output directory
    #[arg(short, long = "output", value_name = "DIR", default_value = "raw")]
    pub output_dir: PathBuf,

    /// Descend into subdirectories (directory input only)
    #[arg(short, long)]
    pub recursive: bool,

    /// Write one output file per input instead of merging (directory input only)
    #[arg(long)]
    pub no_merge: bool,

    /// Show per-file details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            path: self.path,
            output_dir: self.output_dir,
            recursive: self.recursive,
            merge: !self.no_merge,
            verbose: self.verbose,
        }
    }
}
