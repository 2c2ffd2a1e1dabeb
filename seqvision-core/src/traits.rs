//! Traits implemented by sequence values and sequencing records.

/// Anything backed by a run of sequence letters: a validated DNA/RNA/protein
/// value or the sequence line of a read.
pub trait Sequence {
    /// The letters as bytes.
    fn as_bytes(&self) -> &[u8];

    /// Number of letters.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A value with a single headline score, e.g. a read's mean quality.
pub trait Scored {
    fn score(&self) -> f64;
}

/// A record carrying an identifier and optional free-text description.
pub trait Annotated {
    /// The identifier, up to the first whitespace.
    fn name(&self) -> &str;

    /// Whatever follows the identifier, if anything.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// One-line human-readable description, used in logs.
pub trait Summarizable {
    fn summary(&self) -> String;
}
