//! Default values shared by the CLI arguments.

pub use seqvision_core::layout::{DEFAULT_INPUT_DIR as INPUT_DIR, DEFAULT_OUTPUT_DIR as OUTPUT_DIR};

pub const GC_MIN: f64 = 0.0;
pub const GC_MAX: f64 = 100.0;

pub const LENGTH_MIN: u64 = 0;
pub const LENGTH_MAX: u64 = seqvision_seq::filter::DEFAULT_MAX_LENGTH;

pub const QUALITY_THRESHOLD: f64 = 0.0;

pub const INPUT_DIR_ENV: &str = "SEQVISION_INPUT_DIR";
pub const OUTPUT_DIR_ENV: &str = "SEQVISION_OUTPUT_DIR";
