use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const OUTPUT_EXTENSION: &str = "txt";

/// Create the output directory and any missing parents
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .context(format!("Failed to create output directory: {}", dir.display()))
}

/// Pick an output path that does not clobber an existing file
///
/// Tries `{base}_segmented.txt` first, then `{base}_segmented_1.txt`,
/// `{base}_segmented_2.txt` and so on.
pub fn unique_output_path(dir: &Path, base_name: &str) -> PathBuf {
    let mut path = dir.join(format!("{}_segmented.{}", base_name, OUTPUT_EXTENSION));

    let mut counter = 1u32;
    while path.exists() {
        path = dir.join(format!(
            "{}_segmented_{}.{}",
            base_name, counter, OUTPUT_EXTENSION
        ));
        counter += 1;
    }

    path
}

/// Write one word per line, LF-terminated, in set order
pub fn write_word_list(path: &Path, words: &BTreeSet<String>) -> Result<()> {
    let file = File::create(path)
        .context(format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer
        .flush()
        .context(format!("Failed to write output file: {}", path.display()))
}
