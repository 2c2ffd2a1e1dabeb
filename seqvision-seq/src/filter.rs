//! Read admission predicates and the FASTQ filter engine.
//!
//! A read is kept only if it passes all three criteria:
//!
//! 1. **GC content** — percentage of `G`/`C` (case-insensitive) within [`Bounds<f64>`]
//! 2. **Length** — number of bases within [`Bounds<u64>`]
//! 3. **Quality** — mean Phred+33 score at or above a threshold
//!
//! Empty reads have no defined GC content or mean quality and are always
//! rejected. A bare number given as a bound is an *upper* limit: `50.0`
//! means `[0, 50]`, never "at least 50".
//!
//! # Example
//!
//! ```
//! use seqvision_seq::filter::filter_fastq;
//! use seqvision_seq::ReadSet;
//!
//! let reads: ReadSet = [
//!     ("r1", ("GCGCAT", "IIIIII")),
//!     ("r2", ("GGGGGG", "IIIIII")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let kept = filter_fastq(&reads, (20.0, 80.0), 100, 30.0);
//! assert_eq!(kept.ids().collect::<Vec<_>>(), vec!["r1"]);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use seqvision_core::{Result, SeqVisionError};
use tracing::{debug, info, warn};

use crate::fastq::{FastqStream, FastqWriter};
use crate::quality::mean_phred_quality;
use crate::reads::{Read, ReadSet};

/// Default upper length bound: 2^32 bases.
pub const DEFAULT_MAX_LENGTH: u64 = 1 << 32;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// An inclusive `[min, max]` admission range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy + fmt::Display> Bounds<T> {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(SeqVisionError::InvalidInput(format!(
                "lower bound {} exceeds upper bound {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Bounds<f64> {
    /// `[0, max]`.
    pub fn up_to(max: f64) -> Self {
        Self { min: 0.0, max }
    }
}

impl Bounds<u64> {
    /// `[0, max]`.
    pub fn up_to(max: u64) -> Self {
        Self { min: 0, max }
    }
}

impl From<f64> for Bounds<f64> {
    fn from(max: f64) -> Self {
        Bounds::<f64>::up_to(max)
    }
}

/// An inverted pair admits nothing; use [`Bounds::new`] to reject it instead.
impl From<(f64, f64)> for Bounds<f64> {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<u64> for Bounds<u64> {
    fn from(max: u64) -> Self {
        Bounds::<u64>::up_to(max)
    }
}

impl From<(u64, u64)> for Bounds<u64> {
    fn from((min, max): (u64, u64)) -> Self {
        Self { min, max }
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// GC content of `sequence` as a percentage in `[0, 100]`.
///
/// Returns `None` for an empty sequence.
pub fn gc_content_percent(sequence: &str) -> Option<f64> {
    let mut total: u64 = 0;
    let mut gc: u64 = 0;
    for c in sequence.chars() {
        total += 1;
        if matches!(c, 'G' | 'g' | 'C' | 'c') {
            gc += 1;
        }
    }
    if total == 0 {
        return None;
    }
    Some(100.0 * gc as f64 / total as f64)
}

/// Whether the GC percentage lies within `bounds`. Empty sequences fail.
pub fn passes_gc(sequence: &str, bounds: &Bounds<f64>) -> bool {
    gc_content_percent(sequence).is_some_and(|gc| bounds.contains(gc))
}

/// Whether the number of bases lies within `bounds`.
pub fn passes_length(sequence: &str, bounds: &Bounds<u64>) -> bool {
    bounds.contains(sequence.chars().count() as u64)
}

/// Whether the mean Phred+33 quality is at least `threshold`. Empty quality
/// strings fail.
pub fn passes_quality(quality: &str, threshold: f64) -> bool {
    mean_phred_quality(quality).is_some_and(|q| q >= threshold)
}

/// The admission criterion a read failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    GcContent,
    Length,
    Quality,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Criterion::GcContent => "GC content",
            Criterion::Length => "length",
            Criterion::Quality => "quality",
        })
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The three admission criteria applied together.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSettings {
    pub gc_bounds: Bounds<f64>,
    pub length_bounds: Bounds<u64>,
    pub quality_threshold: f64,
}

impl Default for FilterSettings {
    /// Admit every non-empty read: GC `[0, 100]`, length `[0, 2^32]`, quality ≥ 0.
    fn default() -> Self {
        Self {
            gc_bounds: Bounds::from((0.0, 100.0)),
            length_bounds: Bounds::from((0, DEFAULT_MAX_LENGTH)),
            quality_threshold: 0.0,
        }
    }
}

impl FilterSettings {
    pub fn new(
        gc_bounds: impl Into<Bounds<f64>>,
        length_bounds: impl Into<Bounds<u64>>,
        quality_threshold: f64,
    ) -> Self {
        Self {
            gc_bounds: gc_bounds.into(),
            length_bounds: length_bounds.into(),
            quality_threshold,
        }
    }

    /// The first criterion (GC, length, quality) the read fails, if any.
    pub fn rejection(&self, sequence: &str, quality: &str) -> Option<Criterion> {
        if !passes_gc(sequence, &self.gc_bounds) {
            Some(Criterion::GcContent)
        } else if !passes_length(sequence, &self.length_bounds) {
            Some(Criterion::Length)
        } else if !passes_quality(quality, self.quality_threshold) {
            Some(Criterion::Quality)
        } else {
            None
        }
    }

    /// Whether a read passes all three criteria.
    pub fn admits(&self, sequence: &str, quality: &str) -> bool {
        self.rejection(sequence, quality).is_none()
    }

    /// A new [`ReadSet`] holding the admitted reads in their original order.
    pub fn apply(&self, reads: &ReadSet) -> ReadSet {
        reads.select(|read| self.admits(&read.sequence, &read.quality))
    }

    /// Stream FASTQ records from `reader` to `writer`, copying admitted
    /// records unchanged.
    ///
    /// Stops at the first malformed record; records admitted before it have
    /// already been written.
    pub fn filter_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<FilterReport> {
        let mut report = FilterReport::default();
        let mut out = FastqWriter::new(writer);
        for record in FastqStream::from_reader(reader) {
            let record = record?;
            report.records_read += 1;
            match self.rejection(record.sequence(), record.quality()) {
                None => {
                    out.write_record(&record)?;
                    report.records_kept += 1;
                }
                Some(criterion) => {
                    debug!(id = record.id(), %criterion, "read rejected");
                }
            }
        }
        out.flush()?;
        Ok(report)
    }
}

/// Counts from one streaming filter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub records_read: u64,
    pub records_kept: u64,
}

impl FilterReport {
    pub fn records_rejected(&self) -> u64 {
        self.records_read - self.records_kept
    }
}

// ---------------------------------------------------------------------------
// Mapping mode
// ---------------------------------------------------------------------------

/// Keep the reads that pass all three criteria.
///
/// The input is left untouched; survivors keep their relative order.
pub fn filter_fastq(
    reads: &ReadSet,
    gc_bounds: impl Into<Bounds<f64>>,
    length_bounds: impl Into<Bounds<u64>>,
    quality_threshold: f64,
) -> ReadSet {
    FilterSettings::new(gc_bounds, length_bounds, quality_threshold).apply(reads)
}

/// Keep the reads whose GC content lies within `gc_bounds`.
pub fn filter_by_gc(reads: &ReadSet, gc_bounds: impl Into<Bounds<f64>>) -> ReadSet {
    let bounds = gc_bounds.into();
    reads.select(|read: &Read| passes_gc(&read.sequence, &bounds))
}

/// Keep the reads whose length lies within `length_bounds`.
pub fn filter_by_length(reads: &ReadSet, length_bounds: impl Into<Bounds<u64>>) -> ReadSet {
    let bounds = length_bounds.into();
    reads.select(|read: &Read| passes_length(&read.sequence, &bounds))
}

/// Keep the reads whose mean quality is at least `threshold`.
pub fn filter_by_quality(reads: &ReadSet, threshold: f64) -> ReadSet {
    reads.select(|read: &Read| passes_quality(&read.quality, threshold))
}

// ---------------------------------------------------------------------------
// File mode
// ---------------------------------------------------------------------------

/// Stream `input` through the filter, appending admitted records to `output`.
///
/// The output file is created if missing and appended to otherwise. Both
/// files are closed before this returns, on success and on error.
pub fn filter_fastq_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    gc_bounds: impl Into<Bounds<f64>>,
    length_bounds: impl Into<Bounds<u64>>,
    quality_threshold: f64,
) -> Result<FilterReport> {
    let settings = FilterSettings::new(gc_bounds, length_bounds, quality_threshold);
    settings.filter_file(input, output)
}

impl FilterSettings {
    /// File-mode counterpart of [`FilterSettings::filter_stream`].
    pub fn filter_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<FilterReport> {
        let input = input.as_ref();
        let output = output.as_ref();
        if self.gc_bounds.min() > self.gc_bounds.max()
            || self.length_bounds.min() > self.length_bounds.max()
        {
            warn!(gc = %self.gc_bounds, length = %self.length_bounds, "inverted bounds admit no reads");
        }

        let file = File::open(input).map_err(|e| {
            SeqVisionError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", input.display(), e),
            ))
        })?;
        let writer = FastqWriter::append_to(output)?.into_inner();

        let report = self.filter_stream(BufReader::new(file), writer)?;
        info!(
            input = %input.display(),
            output = %output.display(),
            read = report.records_read,
            kept = report.records_kept,
            "filtered FASTQ file"
        );
        Ok(report)
    }
}
