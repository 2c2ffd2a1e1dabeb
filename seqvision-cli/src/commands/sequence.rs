//! Sequence subcommands: `dna`, `rna`, `protein`.

use anyhow::{Context, Result};
use seqvision_core::Summarizable;
use seqvision_seq::{DnaSequence, ProteinSequence, RnaSequence};
use tracing::debug;

use crate::args::{DnaArgs, DnaOperation, ProteinArgs, RnaArgs, RnaOperation};

pub fn dna(args: &DnaArgs) -> Result<String> {
    let dna = DnaSequence::new(&args.seq)?;
    debug!(summary = %dna.summary(), "parsed sequence");
    let out = match args.operation {
        None => dna.to_string(),
        Some(DnaOperation::Complement) => dna.complement().to_string(),
        Some(DnaOperation::Reverse) => dna.reverse().to_string(),
        Some(DnaOperation::Revcomp) => dna.reverse_complement().to_string(),
        Some(DnaOperation::Transcribe) => dna.transcribe().to_string(),
        Some(DnaOperation::Palindrome) => dna.is_palindrome().to_string(),
        Some(DnaOperation::Slice) => {
            let range = args
                .slice
                .as_deref()
                .context("--operation slice requires --slice START END")?;
            match range {
                [start, end] => dna.slice(*start, *end)?.to_string(),
                _ => anyhow::bail!("--slice takes exactly two values"),
            }
        }
    };
    Ok(out)
}

pub fn rna(args: &RnaArgs) -> Result<String> {
    let rna = RnaSequence::new(&args.seq)?;
    debug!(summary = %rna.summary(), "parsed sequence");
    let out = match args.operation {
        None => rna.to_string(),
        Some(RnaOperation::Complement) => rna.complement().to_string(),
        Some(RnaOperation::Reverse) => rna.reverse().to_string(),
        Some(RnaOperation::Revcomp) => rna.reverse_complement().to_string(),
        Some(RnaOperation::ReverseTranscribe) => rna.reverse_transcribe().to_string(),
        Some(RnaOperation::Palindrome) => rna.is_palindrome().to_string(),
    };
    Ok(out)
}

pub fn protein(args: &ProteinArgs) -> Result<String> {
    let protein = ProteinSequence::new(&args.seq)?;
    debug!(summary = %protein.summary(), "parsed sequence");
    Ok(format!("{:.2}", protein.molecular_weight()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna_args(seq: &str, operation: Option<DnaOperation>, slice: Option<Vec<isize>>) -> DnaArgs {
        DnaArgs {
            seq: seq.to_string(),
            operation,
            slice,
        }
    }

    #[test]
    fn dna_operations() {
        assert_eq!(dna(&dna_args("atgc", None, None)).unwrap(), "ATGC");
        assert_eq!(dna(&dna_args("ATGC", Some(DnaOperation::Revcomp), None)).unwrap(), "GCAT");
        assert_eq!(
            dna(&dna_args("ATGC", Some(DnaOperation::Slice), Some(vec![1, -1]))).unwrap(),
            "TG"
        );
    }

    #[test]
    fn slice_without_range_fails() {
        assert!(dna(&dna_args("ATGC", Some(DnaOperation::Slice), None)).is_err());
    }

    #[test]
    fn protein_weight_is_formatted() {
        let args = ProteinArgs {
            seq: "MKWV".to_string(),
        };
        assert_eq!(protein(&args).unwrap(), "616.78");
    }

    #[test]
    fn invalid_rna_is_reported() {
        let args = RnaArgs {
            seq: "AUGT".to_string(),
            operation: None,
        };
        let err = rna(&args).unwrap_err();
        assert!(err.to_string().contains("'T'"));
    }
}
