//! Alphabet definitions for biological sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes for a sequence type. Nucleotide alphabets
//! also implement [`NucleicAlphabet`], which supplies the base-pairing table.

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid bytes. When `CASE_INSENSITIVE`
/// is set, sequence constructors uppercase input before validating it.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid bytes.
    const VALID_BYTES: &'static [u8];

    /// Whether input is uppercased before validation.
    const CASE_INSENSITIVE: bool;

    /// Check whether a byte (after normalization) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Apply this alphabet's case normalization to a single byte.
    fn normalize(b: u8) -> u8 {
        if Self::CASE_INSENSITIVE {
            b.to_ascii_uppercase()
        } else {
            b
        }
    }
}

/// A nucleotide alphabet with a total complement map over its letters.
pub trait NucleicAlphabet: Alphabet {
    /// Base-pairing partner of a valid uppercase letter.
    fn complement(b: u8) -> u8;
}

/// Unambiguous DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
    const CASE_INSENSITIVE: bool = true;
}

impl NucleicAlphabet for DnaAlphabet {
    fn complement(b: u8) -> u8 {
        match b {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            other => other,
        }
    }
}

/// Unambiguous RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
    const CASE_INSENSITIVE: bool = true;
}

impl NucleicAlphabet for RnaAlphabet {
    fn complement(b: u8) -> u8 {
        match b {
            b'A' => b'U',
            b'U' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            other => other,
        }
    }
}

/// The 20 standard amino acids. Case is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";
    const CASE_INSENSITIVE: bool = false;
}
