//! File conversions that sit next to the SeqVision sequence model.
//!
//! - **FASTA** — rewrap multiline FASTA records onto one sequence line
//!   ([`convert_multiline_fasta_to_oneline`])
//! - **BLAST** — pull hit descriptions out of a plain-text BLAST report
//!   ([`parse_blast_output`])

pub mod blast;
pub mod fasta;

pub use blast::{parse_blast_descriptions, parse_blast_output};
pub use fasta::convert_multiline_fasta_to_oneline;

use std::fs::{File, OpenOptions};
use std::path::Path;

use seqvision_core::{Result, SeqVisionError};

fn with_path(path: &Path, e: std::io::Error) -> SeqVisionError {
    SeqVisionError::Io(std::io::Error::new(
        e.kind(),
        format!("{}: {}", path.display(), e),
    ))
}

pub(crate) fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| with_path(path, e))
}

pub(crate) fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| with_path(path, e))
}
