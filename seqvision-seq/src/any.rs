//! Runtime-tagged sequences for callers that only learn the kind at run time.
//!
//! The concrete types in [`crate::types`] gate nucleic-acid and protein
//! operations at compile time. [`AnySequence`] wraps one of them behind a
//! single value; capability-specific operations on the wrong variant fail
//! with [`SeqVisionError::UnsupportedOperation`] instead of doing nothing.

use std::fmt;
use std::str::FromStr;

use seqvision_core::{Result, SeqVisionError, Sequence};

use crate::types::{DnaSequence, ProteinSequence, RnaSequence};

/// The closed set of sequence kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    Dna,
    Rna,
    Protein,
}

impl SequenceKind {
    pub fn name(self) -> &'static str {
        match self {
            SequenceKind::Dna => "DNA",
            SequenceKind::Rna => "RNA",
            SequenceKind::Protein => "Protein",
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SequenceKind {
    type Err = SeqVisionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(SequenceKind::Dna),
            "rna" => Ok(SequenceKind::Rna),
            "protein" | "aa" | "amino" => Ok(SequenceKind::Protein),
            other => Err(SeqVisionError::InvalidInput(format!(
                "unknown sequence kind '{}'",
                other
            ))),
        }
    }
}

/// A DNA, RNA, or protein sequence chosen at run time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnySequence {
    Dna(DnaSequence),
    Rna(RnaSequence),
    Protein(ProteinSequence),
}

impl AnySequence {
    /// Validate `text` as a sequence of the given kind.
    pub fn new(kind: SequenceKind, text: impl AsRef<[u8]>) -> Result<Self> {
        Ok(match kind {
            SequenceKind::Dna => AnySequence::Dna(DnaSequence::new(text)?),
            SequenceKind::Rna => AnySequence::Rna(RnaSequence::new(text)?),
            SequenceKind::Protein => AnySequence::Protein(ProteinSequence::new(text)?),
        })
    }

    /// Classify text as DNA, then RNA, then protein, taking the first kind
    /// whose alphabet accepts it.
    ///
    /// Text made only of `A`, `C` and `G` is therefore reported as DNA.
    pub fn detect(text: impl AsRef<[u8]>) -> Result<Self> {
        let text = text.as_ref();
        if let Ok(dna) = DnaSequence::new(text) {
            return Ok(AnySequence::Dna(dna));
        }
        if let Ok(rna) = RnaSequence::new(text) {
            return Ok(AnySequence::Rna(rna));
        }
        ProteinSequence::new(text).map(AnySequence::Protein)
    }

    pub fn kind(&self) -> SequenceKind {
        match self {
            AnySequence::Dna(_) => SequenceKind::Dna,
            AnySequence::Rna(_) => SequenceKind::Rna,
            AnySequence::Protein(_) => SequenceKind::Protein,
        }
    }

    /// Letter at `index`; negative indices count back from the end.
    pub fn get(&self, index: isize) -> Option<char> {
        match self {
            AnySequence::Dna(s) => s.get(index),
            AnySequence::Rna(s) => s.get(index),
            AnySequence::Protein(s) => s.get(index),
        }
    }

    /// Sub-sequence `[start, end)` of the same kind.
    pub fn slice(&self, start: isize, end: isize) -> Result<Self> {
        Ok(match self {
            AnySequence::Dna(s) => AnySequence::Dna(s.slice(start, end)?),
            AnySequence::Rna(s) => AnySequence::Rna(s.slice(start, end)?),
            AnySequence::Protein(s) => AnySequence::Protein(s.slice(start, end)?),
        })
    }

    pub fn complement(&self) -> Result<Self> {
        match self {
            AnySequence::Dna(s) => Ok(AnySequence::Dna(s.complement())),
            AnySequence::Rna(s) => Ok(AnySequence::Rna(s.complement())),
            AnySequence::Protein(_) => Err(self.unsupported("complement")),
        }
    }

    pub fn reverse(&self) -> Result<Self> {
        match self {
            AnySequence::Dna(s) => Ok(AnySequence::Dna(s.reverse())),
            AnySequence::Rna(s) => Ok(AnySequence::Rna(s.reverse())),
            AnySequence::Protein(_) => Err(self.unsupported("reverse")),
        }
    }

    pub fn reverse_complement(&self) -> Result<Self> {
        match self {
            AnySequence::Dna(s) => Ok(AnySequence::Dna(s.reverse_complement())),
            AnySequence::Rna(s) => Ok(AnySequence::Rna(s.reverse_complement())),
            AnySequence::Protein(_) => Err(self.unsupported("reverse complement")),
        }
    }

    pub fn is_palindrome(&self) -> Result<bool> {
        match self {
            AnySequence::Dna(s) => Ok(s.is_palindrome()),
            AnySequence::Rna(s) => Ok(s.is_palindrome()),
            AnySequence::Protein(_) => Err(self.unsupported("palindrome check")),
        }
    }

    /// DNA → RNA; any other kind is unsupported.
    pub fn transcribe(&self) -> Result<Self> {
        match self {
            AnySequence::Dna(s) => Ok(AnySequence::Rna(s.transcribe())),
            _ => Err(self.unsupported("transcription")),
        }
    }

    /// RNA → DNA; any other kind is unsupported.
    pub fn reverse_transcribe(&self) -> Result<Self> {
        match self {
            AnySequence::Rna(s) => Ok(AnySequence::Dna(s.reverse_transcribe())),
            _ => Err(self.unsupported("reverse transcription")),
        }
    }

    /// Protein molecular weight in Daltons; any other kind is unsupported.
    pub fn molecular_weight(&self) -> Result<f64> {
        match self {
            AnySequence::Protein(s) => Ok(s.molecular_weight()),
            _ => Err(self.unsupported("molecular weight")),
        }
    }

    fn unsupported(&self, operation: &'static str) -> SeqVisionError {
        SeqVisionError::UnsupportedOperation {
            operation,
            kind: self.kind().name(),
        }
    }
}

impl Sequence for AnySequence {
    fn as_bytes(&self) -> &[u8] {
        match self {
            AnySequence::Dna(s) => s.as_bytes(),
            AnySequence::Rna(s) => s.as_bytes(),
            AnySequence::Protein(s) => s.as_bytes(),
        }
    }
}

impl fmt::Display for AnySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnySequence::Dna(s) => fmt::Display::fmt(s, f),
            AnySequence::Rna(s) => fmt::Display::fmt(s, f),
            AnySequence::Protein(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<DnaSequence> for AnySequence {
    fn from(seq: DnaSequence) -> Self {
        AnySequence::Dna(seq)
    }
}

impl From<RnaSequence> for AnySequence {
    fn from(seq: RnaSequence) -> Self {
        AnySequence::Rna(seq)
    }
}

impl From<ProteinSequence> for AnySequence {
    fn from(seq: ProteinSequence) -> Self {
        AnySequence::Protein(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefers_dna() {
        assert_eq!(AnySequence::detect("ACGT").unwrap().kind(), SequenceKind::Dna);
        assert_eq!(AnySequence::detect("ACG").unwrap().kind(), SequenceKind::Dna);
        assert_eq!(AnySequence::detect("acgu").unwrap().kind(), SequenceKind::Rna);
        assert_eq!(AnySequence::detect("MKWV").unwrap().kind(), SequenceKind::Protein);
    }

    #[test]
    fn detect_rejects_unknown_text() {
        assert!(matches!(
            AnySequence::detect("12"),
            Err(SeqVisionError::InvalidAlphabet { kind: "Protein", .. })
        ));
    }

    #[test]
    fn nucleic_operations_on_dna() {
        let seq = AnySequence::new(SequenceKind::Dna, "ATGC").unwrap();
        assert_eq!(seq.complement().unwrap().to_string(), "TACG");
        assert_eq!(seq.reverse_complement().unwrap().to_string(), "GCAT");
        let rna = seq.transcribe().unwrap();
        assert_eq!(rna.kind(), SequenceKind::Rna);
        assert_eq!(rna.to_string(), "UACG");
    }

    #[test]
    fn protein_rejects_nucleic_operations() {
        let seq = AnySequence::new(SequenceKind::Protein, "MKWV").unwrap();
        for result in [seq.complement(), seq.reverse(), seq.reverse_complement(), seq.transcribe()] {
            assert!(matches!(
                result,
                Err(SeqVisionError::UnsupportedOperation { kind: "Protein", .. })
            ));
        }
        assert!((seq.molecular_weight().unwrap() - 616.78).abs() < 1e-9);
    }

    #[test]
    fn nucleic_rejects_molecular_weight() {
        let seq = AnySequence::new(SequenceKind::Rna, "AUGC").unwrap();
        let err = seq.molecular_weight().unwrap_err();
        assert_eq!(err.to_string(), "molecular weight is not supported for RNA sequences");
        assert!(seq.transcribe().is_err());
        assert_eq!(seq.reverse_transcribe().unwrap().to_string(), "ATGC");
    }

    #[test]
    fn common_operations_on_every_kind() {
        let seq = AnySequence::new(SequenceKind::Protein, "MKWV").unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.get(-1), Some('V'));
        assert_eq!(seq.slice(1, 3).unwrap().to_string(), "KW");
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("DNA".parse::<SequenceKind>().unwrap(), SequenceKind::Dna);
        assert_eq!("protein".parse::<SequenceKind>().unwrap(), SequenceKind::Protein);
        assert!("xna".parse::<SequenceKind>().is_err());
    }
}
