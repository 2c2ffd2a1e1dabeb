//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction normalizes case (for
//! case-insensitive alphabets) and validates every byte. Instances are never
//! mutated; every transformation builds a new value.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use seqvision_core::{Result, SeqVisionError, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated biological sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA, etc.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw text.
    ///
    /// Returns [`SeqVisionError::InvalidAlphabet`] listing every distinct
    /// offending character if any byte falls outside the alphabet.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data: Vec<u8> = bytes.as_ref().iter().map(|&b| A::normalize(b)).collect();
        if data.iter().all(|&b| A::is_valid(b)) {
            return Ok(Self::from_validated(data));
        }
        let invalid: BTreeSet<char> = String::from_utf8_lossy(&data)
            .chars()
            .filter(|&c| !(c.is_ascii() && A::is_valid(c as u8)))
            .collect();
        Err(SeqVisionError::InvalidAlphabet {
            kind: A::NAME,
            invalid,
        })
    }

    /// Create a sequence from bytes already known to belong to `A`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Name of this sequence's kind (e.g. "DNA").
    pub fn kind(&self) -> &'static str {
        A::NAME
    }

    /// Letter at `index`; negative indices count back from the end.
    pub fn get(&self, index: isize) -> Option<char> {
        let i = resolve_index(index, self.data.len())?;
        self.data.get(i).map(|&b| b as char)
    }

    /// Sub-sequence `[start, end)` as a new sequence of the same kind.
    ///
    /// Negative bounds count back from the end and out-of-range bounds are
    /// clamped, so `slice(-3, isize::MAX)` yields the last three letters. An
    /// inverted range yields an empty sequence.
    pub fn slice(&self, start: isize, end: isize) -> Result<Self> {
        let len = self.data.len();
        let start = clamp_index(start, len);
        let end = clamp_index(end, len).max(start);
        Self::new(&self.data[start..end])
    }

    /// The letters as a string slice.
    pub fn as_str(&self) -> &str {
        // Every alphabet is ASCII, so this never falls back.
        std::str::from_utf8(&self.data).unwrap_or("")
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    }
}

fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> std::str::FromStr for ValidatedSeq<A> {
    type Err = SeqVisionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = &self.as_str()[..preview_len];
        let unit = if A::CASE_INSENSITIVE { "nt" } else { "aa" };
        if self.data.len() > 20 {
            format!("{} sequence ({} {}): {}...", A::NAME, self.data.len(), unit, preview)
        } else {
            format!("{} sequence ({} {}): {}", A::NAME, self.data.len(), unit, preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self.as_str())
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DnaAlphabet, ProteinAlphabet};

    type DnaSeq = ValidatedSeq<DnaAlphabet>;
    type ProteinSeq = ValidatedSeq<ProteinAlphabet>;

    #[test]
    fn stores_uppercase() {
        let seq = DnaSeq::new("acgt").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT");
    }

    #[test]
    fn empty_sequence_ok() {
        let seq = DnaSeq::new("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn protein_case_is_significant() {
        assert!(ProteinSeq::new("MKWV").is_ok());
        assert!(ProteinSeq::new("mkwv").is_err());
    }

    #[test]
    fn rejects_invalid_bytes_with_character_set() {
        match DnaSeq::new("ATGCXX-") {
            Err(SeqVisionError::InvalidAlphabet { kind, invalid }) => {
                assert_eq!(kind, "DNA");
                assert_eq!(invalid.into_iter().collect::<String>(), "-X");
            }
            other => panic!("expected InvalidAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn reports_non_ascii_characters_whole() {
        match DnaSeq::new("ATé") {
            Err(SeqVisionError::InvalidAlphabet { invalid, .. }) => {
                assert!(invalid.contains(&'é'));
            }
            other => panic!("expected InvalidAlphabet, got {:?}", other),
        }
    }

    #[test]
    fn get_supports_negative_indices() {
        let seq = DnaSeq::new("ATGC").unwrap();
        assert_eq!(seq.get(0), Some('A'));
        assert_eq!(seq.get(-1), Some('C'));
        assert_eq!(seq.get(-4), Some('A'));
        assert_eq!(seq.get(-5), None);
        assert_eq!(seq.get(4), None);
    }

    #[test]
    fn deref_to_slice() {
        let seq = DnaSeq::new("ACGT").unwrap();
        assert_eq!(seq[0], b'A');
        assert_eq!(&seq[1..3], b"CG");
    }

    #[test]
    fn slice_returns_same_kind() {
        let seq = DnaSeq::new("AATTGGCC").unwrap();
        let sub = seq.slice(2, 6).unwrap();
        assert_eq!(sub.to_string(), "TTGG");
        assert_eq!(sub.kind(), "DNA");
    }

    #[test]
    fn slice_clamps_and_counts_from_end() {
        let seq = DnaSeq::new("AATTGGCC").unwrap();
        assert_eq!(seq.slice(-2, isize::MAX).unwrap().to_string(), "CC");
        assert_eq!(seq.slice(0, 100).unwrap().to_string(), "AATTGGCC");
        assert!(seq.slice(6, 2).unwrap().is_empty());
        assert_eq!(seq.slice(-100, 2).unwrap().to_string(), "AA");
    }

    #[test]
    fn display_and_debug() {
        let seq = DnaSeq::new("atgc").unwrap();
        assert_eq!(seq.to_string(), "ATGC");
        assert_eq!(format!("{:?}", seq), "DNA(\"ATGC\")");
    }

    #[test]
    fn summary_truncates_long_sequences() {
        let seq = DnaSeq::new("A".repeat(30)).unwrap();
        assert_eq!(
            seq.summary(),
            format!("DNA sequence (30 nt): {}...", "A".repeat(20))
        );
    }

    #[test]
    fn parses_from_str() {
        let seq: DnaSeq = "gattaca".parse().unwrap();
        assert_eq!(seq.as_str(), "GATTACA");
    }
}
