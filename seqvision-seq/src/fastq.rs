//! FASTQ records, a streaming line-based reader, and a writer.
//!
//! A record is exactly four lines: `@` header, sequence, `+` separator,
//! quality. [`FastqRecord`] keeps all four lines verbatim, each with its own
//! line terminator, so admitted records can be written back byte for byte.
//! [`FastqStream`] reads one record at a time and treats any framing error
//! as fatal: once a record is malformed, nothing after it can be aligned.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use seqvision_core::{Annotated, Result, Scored, SeqVisionError, Sequence, Summarizable};

use crate::quality::mean_phred_quality;
use crate::reads::{Read, ReadSet};

/// Terminator that ended a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    /// `\n`, also used for a final line that had no terminator.
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A single FASTQ record, stored as its four raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastqRecord {
    header: String,
    sequence: String,
    separator: String,
    quality: String,
    /// Terminators of the header, sequence, separator and quality lines.
    endings: [LineEnding; 4],
}

impl FastqRecord {
    /// Build a record from an id, sequence, and quality string.
    ///
    /// Returns an error if the sequence and quality lengths don't match.
    pub fn new(
        id: impl AsRef<str>,
        sequence: impl Into<String>,
        quality: impl Into<String>,
    ) -> Result<Self> {
        let sequence = sequence.into();
        let quality = quality.into();
        if sequence.chars().count() != quality.chars().count() {
            return Err(SeqVisionError::InvalidInput(format!(
                "sequence length ({}) does not match quality length ({})",
                sequence.chars().count(),
                quality.chars().count()
            )));
        }
        Ok(Self {
            header: format!("@{}", id.as_ref()),
            sequence,
            separator: "+".to_string(),
            quality,
            endings: [LineEnding::Lf; 4],
        })
    }

    /// Full header text after the `@`.
    pub fn id(&self) -> &str {
        &self.header[1..]
    }

    pub fn header_line(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn separator_line(&self) -> &str {
        &self.separator
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// Line terminators as read, in header/sequence/separator/quality order.
    pub fn line_endings(&self) -> [LineEnding; 4] {
        self.endings
    }

    /// Mean Phred+33 quality, or `None` for an empty record.
    pub fn mean_quality(&self) -> Option<f64> {
        mean_phred_quality(&self.quality)
    }

    /// Drop the framing and keep the `(id, read)` pair.
    pub fn into_read(self) -> (String, Read) {
        let id = self.header[1..].to_string();
        (id, Read::new(self.sequence, self.quality))
    }
}

impl Sequence for FastqRecord {
    fn as_bytes(&self) -> &[u8] {
        self.sequence.as_bytes()
    }
}

impl Annotated for FastqRecord {
    fn name(&self) -> &str {
        let id = self.id();
        id.split_once(char::is_whitespace).map_or(id, |(name, _)| name)
    }

    fn description(&self) -> Option<&str> {
        self.id()
            .split_once(char::is_whitespace)
            .map(|(_, desc)| desc.trim())
            .filter(|desc| !desc.is_empty())
    }
}

impl Scored for FastqRecord {
    fn score(&self) -> f64 {
        self.mean_quality().unwrap_or(0.0)
    }
}

impl Summarizable for FastqRecord {
    fn summary(&self) -> String {
        format!(
            "FASTQ {} ({} bp, mean Q{:.1})",
            self.name(),
            self.sequence.len(),
            self.score()
        )
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Streaming FASTQ reader yielding one [`FastqRecord`] at a time.
///
/// Blank lines are tolerated only at the end of the input. Any framing
/// problem yields [`SeqVisionError::MalformedRecord`] and ends the stream.
pub struct FastqStream<R: BufRead> {
    reader: R,
    line: String,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> FastqStream<R> {
    /// Create a new FASTQ stream from a buffered reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(256),
            line_number: 0,
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line split from its terminator; `None` at end of input.
    fn next_line(&mut self) -> Result<Option<(String, LineEnding)>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let (content, ending) = match self.line.strip_suffix('\n') {
            Some(l) => match l.strip_suffix('\r') {
                Some(l) => (l, LineEnding::CrLf),
                None => (l, LineEnding::Lf),
            },
            None => (self.line.as_str(), LineEnding::Lf),
        };
        Ok(Some((content.to_string(), ending)))
    }

    fn malformed(&self, line: usize, msg: impl Into<String>) -> SeqVisionError {
        SeqVisionError::MalformedRecord {
            line,
            msg: msg.into(),
        }
    }

    fn read_record(&mut self) -> Result<Option<FastqRecord>> {
        let mut skipped_blank = false;
        let (header, header_end) = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some((line, _)) if line.trim().is_empty() => skipped_blank = true,
                Some(line) => break line,
            }
        };
        let header_line = self.line_number;
        if skipped_blank {
            return Err(self.malformed(header_line, "blank line before record"));
        }
        if !header.starts_with('@') {
            return Err(self.malformed(
                header_line,
                format!("expected '@' at start of header, got {:?}", first_char(&header)),
            ));
        }

        let (sequence, sequence_end) = self
            .next_line()?
            .ok_or_else(|| self.malformed(header_line, "unexpected end of file after header"))?;

        let (separator, separator_end) = self.next_line()?.ok_or_else(|| {
            self.malformed(self.line_number, "unexpected end of file after sequence")
        })?;
        if !separator.starts_with('+') {
            return Err(self.malformed(
                self.line_number,
                format!("expected '+' at start of separator, got {:?}", first_char(&separator)),
            ));
        }

        let (quality, quality_end) = self.next_line()?.ok_or_else(|| {
            self.malformed(self.line_number, "unexpected end of file after separator")
        })?;

        let seq_len = sequence.chars().count();
        let qual_len = quality.chars().count();
        if seq_len != qual_len {
            return Err(self.malformed(
                self.line_number,
                format!("sequence length ({}) != quality length ({})", seq_len, qual_len),
            ));
        }

        Ok(Some(FastqRecord {
            header,
            sequence,
            separator,
            quality,
            endings: [header_end, sequence_end, separator_end, quality_end],
        }))
    }
}

fn first_char(line: &str) -> String {
    line.chars().next().map(String::from).unwrap_or_default()
}

impl FastqStream<BufReader<File>> {
    /// Open a FASTQ file for streaming.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            SeqVisionError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.as_ref().display(), e),
            ))
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for FastqStream<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Load every record of a FASTQ file into a [`ReadSet`] keyed by header id.
pub fn read_fastq_file(path: impl AsRef<Path>) -> Result<ReadSet> {
    let mut reads = ReadSet::new();
    for record in FastqStream::from_path(path)? {
        let (id, read) = record?.into_read();
        reads.insert(id, read);
    }
    Ok(reads)
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Writes [`FastqRecord`]s as four lines each, using the terminators the
/// record was read with.
pub struct FastqWriter<W: Write> {
    writer: W,
}

impl<W: Write> FastqWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_record(&mut self, record: &FastqRecord) -> Result<()> {
        let lines = [
            &record.header,
            &record.sequence,
            &record.separator,
            &record.quality,
        ];
        for (line, ending) in lines.iter().zip(record.endings) {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(ending.as_str().as_bytes())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl FastqWriter<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn append_to(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .map_err(|e| {
                SeqVisionError::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.as_ref().display(), e),
                ))
            })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

/// Write every read of a [`ReadSet`] as a FASTQ record with a bare `+` separator.
pub fn write_fastq<W: Write>(reads: &ReadSet, writer: W) -> Result<()> {
    let mut out = FastqWriter::new(writer);
    for (id, read) in reads.iter() {
        out.write_record(&FastqRecord::new(id, read.sequence.as_str(), read.quality.as_str())?)?;
    }
    out.flush()
}
