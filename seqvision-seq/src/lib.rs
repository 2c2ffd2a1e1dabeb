//! Biological sequence types and FASTQ read filtering for SeqVision.
//!
//! Provides strongly-typed, validated sequence values plus a streaming
//! quality filter for sequencing reads:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`], [`ProteinAlphabet`]
//! - **Sequences** — [`DnaSequence`], [`RnaSequence`], [`ProteinSequence`], and
//!   the run-time tagged [`AnySequence`]
//! - **Quality scores** — Phred+33 decoding via [`mean_phred_quality`]
//! - **FASTQ** — [`FastqRecord`], [`FastqStream`], [`FastqWriter`]
//! - **Filtering** — GC content, length, and quality criteria via
//!   [`filter_fastq`] (in memory) and [`filter_fastq_file`] (streaming)
//!
//! # Example
//!
//! ```
//! use seqvision_seq::{DnaSequence, RnaSequence, ProteinSequence};
//!
//! // Lowercase nucleotide input is normalized
//! let dna = DnaSequence::new("atgc").unwrap();
//! assert_eq!(dna.to_string(), "ATGC");
//!
//! assert_eq!(dna.complement().to_string(), "TACG");
//! assert_eq!(dna.reverse_complement().to_string(), "GCAT");
//!
//! let rna: RnaSequence = dna.transcribe();
//! assert_eq!(rna.to_string(), "UACG");
//!
//! let protein = ProteinSequence::new("MKWV").unwrap();
//! assert!((protein.molecular_weight() - 616.78).abs() < 1e-9);
//! ```

pub mod alphabet;
pub mod any;
pub mod fastq;
pub mod filter;
pub mod quality;
pub mod reads;
pub mod seq;
pub mod types;

// Re-export alphabet types
pub use alphabet::{Alphabet, DnaAlphabet, NucleicAlphabet, ProteinAlphabet, RnaAlphabet};

// Re-export the generic and concrete sequence types
pub use seq::ValidatedSeq;
pub use types::{DnaSequence, ProteinSequence, RnaSequence};
pub use any::{AnySequence, SequenceKind};

// Re-export quality helpers
pub use quality::{mean_phred_quality, phred33_score};

// Re-export FASTQ types
pub use fastq::{read_fastq_file, write_fastq, FastqRecord, FastqStream, FastqWriter, LineEnding};
pub use reads::{Read, ReadSet};

// Re-export the filter engine
pub use filter::{
    filter_by_gc, filter_by_length, filter_by_quality, filter_fastq, filter_fastq_file, Bounds,
    Criterion, FilterReport, FilterSettings,
};
