//! Concrete sequence type aliases and their biologically meaningful operations.
//!
//! - [`DnaSequence`] / [`RnaSequence`] — complement, reverse, reverse complement,
//!   palindrome check
//! - [`DnaSequence::transcribe`] and [`RnaSequence::reverse_transcribe`]
//! - [`ProteinSequence`] — molecular weight

use crate::alphabet::{DnaAlphabet, NucleicAlphabet, ProteinAlphabet, RnaAlphabet};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence over `ACGT`.
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence over `ACGU`.
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

/// A validated sequence of the 20 standard amino acids.
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

// ---------------------------------------------------------------------------
// Nucleic acid methods (DNA and RNA)
// ---------------------------------------------------------------------------

impl<A: NucleicAlphabet> ValidatedSeq<A> {
    /// Replace every base by its pairing partner.
    pub fn complement(&self) -> Self {
        let data: Vec<u8> = self.iter().map(|&b| A::complement(b)).collect();
        Self::from_validated(data)
    }

    /// The same bases in reverse order.
    pub fn reverse(&self) -> Self {
        let data: Vec<u8> = self.iter().rev().copied().collect();
        Self::from_validated(data)
    }

    /// Reverse, then complement each base.
    pub fn reverse_complement(&self) -> Self {
        let data: Vec<u8> = self.iter().rev().map(|&b| A::complement(b)).collect();
        Self::from_validated(data)
    }

    /// Whether the sequence has even length and its first half reads the
    /// same as its second half reversed.
    pub fn is_palindrome(&self) -> bool {
        let len = self.len();
        if len % 2 != 0 {
            return false;
        }
        let (head, tail) = self.split_at(len / 2);
        head.iter().eq(tail.iter().rev())
    }
}

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

/// Transcription table: A→U, T→A, C→G, G→C.
///
/// This pairs each base with its RNA complement (template-strand reading),
/// so `ATGC` transcribes to `UACG` rather than `AUGC`.
fn transcribe_base(b: u8) -> u8 {
    match b {
        b'A' => b'U',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

impl DnaSequence {
    /// Transcribe DNA to RNA using the template-strand table.
    pub fn transcribe(&self) -> RnaSequence {
        let rna: Vec<u8> = self.iter().map(|&b| transcribe_base(b)).collect();
        RnaSequence::from_validated(rna)
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl RnaSequence {
    /// Reverse-transcribe RNA to DNA (U → T, other bases unchanged).
    pub fn reverse_transcribe(&self) -> DnaSequence {
        let dna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'U' { b'T' } else { b })
            .collect();
        DnaSequence::from_validated(dna)
    }
}

// ---------------------------------------------------------------------------
// Protein methods
// ---------------------------------------------------------------------------

/// Molecular weight (Da) of each free amino acid.
fn amino_acid_weight(aa: u8) -> Option<f64> {
    let weight = match aa {
        b'A' => 89.09, b'R' => 174.20, b'N' => 132.12, b'D' => 133.10,
        b'C' => 121.16, b'E' => 147.13, b'Q' => 146.15, b'G' => 75.07,
        b'H' => 155.16, b'I' => 131.17, b'L' => 131.17, b'K' => 146.19,
        b'M' => 149.21, b'F' => 165.19, b'P' => 115.13, b'S' => 105.09,
        b'T' => 119.12, b'W' => 204.23, b'Y' => 181.19, b'V' => 117.15,
        _ => return None,
    };
    Some(weight)
}

impl ProteinSequence {
    /// Molecular weight in Daltons: the plain sum of residue weights.
    pub fn molecular_weight(&self) -> f64 {
        self.iter().filter_map(|&aa| amino_acid_weight(aa)).sum()
    }
}
