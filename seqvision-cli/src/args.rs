use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input FASTQ file (relative to the input directory)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output FASTQ file (relative to the output directory); appended to
    #[arg(short, long)]
    pub output: PathBuf,

    /// GC content bounds in percent: MIN MAX, or a single MAX
    ///
    /// A single value is an upper bound: `--gc 40` keeps reads with at most 40% GC.
    #[arg(long, num_args = 1..=2, value_names = ["MIN", "MAX"])]
    pub gc: Option<Vec<f64>>,

    /// Read length bounds in bases: MIN MAX, or a single MAX
    #[arg(long, num_args = 1..=2, value_names = ["MIN", "MAX"])]
    pub length: Option<Vec<u64>>,

    /// Minimum mean Phred+33 quality
    #[arg(short, long, default_value_t = defaults::QUALITY_THRESHOLD)]
    pub quality: f64,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file (relative to the input directory)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (relative to the output directory); appended to
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DnaOperation {
    Complement,
    Reverse,
    Revcomp,
    Transcribe,
    Slice,
    Palindrome,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RnaOperation {
    Complement,
    Reverse,
    Revcomp,
    ReverseTranscribe,
    Palindrome,
}

#[derive(Args, Debug)]
pub struct DnaArgs {
    /// DNA sequence (case-insensitive, ACGT only)
    #[arg(short, long)]
    pub seq: String,

    /// Operation to apply; prints the normalized sequence if omitted
    #[arg(long)]
    pub operation: Option<DnaOperation>,

    /// Slice range for `--operation slice`; negative values count from the end
    #[arg(long, num_args = 2, value_names = ["START", "END"], allow_negative_numbers = true)]
    pub slice: Option<Vec<isize>>,
}

#[derive(Args, Debug)]
pub struct RnaArgs {
    /// RNA sequence (case-insensitive, ACGU only)
    #[arg(short, long)]
    pub seq: String,

    /// Operation to apply; prints the normalized sequence if omitted
    #[arg(long)]
    pub operation: Option<RnaOperation>,
}

#[derive(Args, Debug)]
pub struct ProteinArgs {
    /// Protein sequence (20 standard amino acids, uppercase)
    #[arg(short, long)]
    pub seq: String,
}
