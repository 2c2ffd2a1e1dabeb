//! Phred+33 quality decoding for raw FASTQ quality strings.
//!
//! Each quality character encodes `score = code_point - 33`. Characters below
//! `!` are not rejected; they simply decode to negative scores.

/// Offset between a quality character's code point and its Phred score.
pub const PHRED33_OFFSET: i64 = 33;

/// Decode a single Phred+33 quality character.
pub fn phred33_score(c: char) -> i64 {
    c as i64 - PHRED33_OFFSET
}

/// Arithmetic mean of the decoded Phred scores.
///
/// Returns `None` for an empty quality string, where the mean is undefined.
pub fn mean_phred_quality(quality: &str) -> Option<f64> {
    let mut count: u64 = 0;
    let mut sum: i64 = 0;
    for c in quality.chars() {
        sum += phred33_score(c);
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(sum as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_phred33() {
        // '!' = 33 → Q0, 'I' = 73 → Q40
        assert_eq!(phred33_score('!'), 0);
        assert_eq!(phred33_score('I'), 40);
    }

    #[test]
    fn mean_of_mixed_scores() {
        let mean = mean_phred_quality("!I").unwrap();
        assert!((mean - 20.0).abs() < 1e-10);
    }

    #[test]
    fn empty_quality_has_no_mean() {
        assert_eq!(mean_phred_quality(""), None);
    }

    #[test]
    fn all_zero_scores() {
        assert_eq!(mean_phred_quality("!!!!"), Some(0.0));
    }

    #[test]
    fn below_offset_goes_negative() {
        assert_eq!(phred33_score(' '), -1);
    }
}
