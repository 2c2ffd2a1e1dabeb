//! Conventional input/output directories for file-based commands.
//!
//! File commands take bare file names; [`FileLayout`] resolves them against
//! an input directory (default `data`) and an output directory (default
//! `filtered`). Absolute paths pass through unchanged.

use std::path::{Path, PathBuf};

/// Default directory that input files are read from.
pub const DEFAULT_INPUT_DIR: &str = "data";

/// Default directory that output files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "filtered";

/// Where file-based commands read inputs and write outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileLayout {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl FileLayout {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Resolve an input file name against the input directory.
    pub fn resolve_input(&self, name: impl AsRef<Path>) -> PathBuf {
        resolve(&self.input_dir, name.as_ref())
    }

    /// Resolve an output file name against the output directory.
    pub fn resolve_output(&self, name: impl AsRef<Path>) -> PathBuf {
        resolve(&self.output_dir, name.as_ref())
    }
}

impl Default for FileLayout {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR)
    }
}

fn resolve(dir: &Path, name: &Path) -> PathBuf {
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directories() {
        let layout = FileLayout::default();
        assert_eq!(layout.resolve_input("reads.fastq"), Path::new("data/reads.fastq"));
        assert_eq!(
            layout.resolve_output("kept.fastq"),
            Path::new("filtered/kept.fastq")
        );
    }

    #[test]
    fn absolute_paths_pass_through() {
        let layout = FileLayout::new("in", "out");
        let abs = std::env::temp_dir().join("reads.fastq");
        assert_eq!(layout.resolve_input(&abs), abs);
        assert_eq!(layout.resolve_output(&abs), abs);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let layout = FileLayout::new("raw", "clean");
        let json = serde_json::to_string(&layout).unwrap();
        let back: FileLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }
}
