//! Description scraping for plain-text BLAST reports.
//!
//! The "Sequences producing significant alignments" table of a text report
//! starts after a header line containing `Description` and ends at the first
//! blank line. Each row is cut at its first `...`, the rows are sorted, and
//! each is written back followed by `...`.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use seqvision_core::Result;
use tracing::{info, warn};

use crate::{open_append, open_input};

/// Collect the description column of the first description table, sorted.
pub fn parse_blast_descriptions<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut descriptions = Vec::new();
    let mut in_table = false;
    for line in reader.lines() {
        let line = line?;
        if !in_table {
            in_table = line.contains("Description");
            continue;
        }
        if line.is_empty() {
            break;
        }
        let description = line.split("...").next().unwrap_or(line.as_str());
        descriptions.push(description.to_string());
    }
    if !in_table {
        warn!("no Description table found in BLAST report");
    }
    descriptions.sort();
    Ok(descriptions)
}

/// Scrape `input` and append one `<description>...` line per hit to `output`.
///
/// Returns the number of descriptions written.
pub fn parse_blast_output(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();
    let descriptions = parse_blast_descriptions(BufReader::new(open_input(input)?))?;

    let mut writer = BufWriter::new(open_append(output)?);
    for description in &descriptions {
        writeln!(writer, "{}...", description)?;
    }
    writer.flush()?;

    info!(input = %input.display(), output = %output.display(), hits = descriptions.len(), "parsed BLAST report");
    Ok(descriptions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    const REPORT: &str = "\
BLASTP 2.14.0+
Query= test protein

Sequences producing significant alignments:
Description                                   Scientific Name
zinc finger protein [Homo sapiens]...          Homo sapiens   512
ABC transporter [Mus musculus]...              Mus musculus   300
hypothetical protein...                        Unknown        120

>zinc finger protein
Description of something else
";

    #[test]
    fn extracts_and_sorts_descriptions() {
        let descriptions = parse_blast_descriptions(Cursor::new(REPORT)).unwrap();
        assert_eq!(
            descriptions,
            vec![
                "ABC transporter [Mus musculus]",
                "hypothetical protein",
                "zinc finger protein [Homo sapiens]",
            ]
        );
    }

    #[test]
    fn report_without_table_yields_nothing() {
        let descriptions = parse_blast_descriptions(Cursor::new("no hits\n")).unwrap();
        assert!(descriptions.is_empty());
    }

    #[test]
    fn table_running_to_eof_is_complete() {
        let text = "Description\nbeta...\nalpha...";
        let descriptions = parse_blast_descriptions(Cursor::new(text)).unwrap();
        assert_eq!(descriptions, vec!["alpha", "beta"]);
    }

    #[test]
    fn writes_each_description_with_suffix() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("blast.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, REPORT).unwrap();

        assert_eq!(parse_blast_output(&input, &output).unwrap(), 3);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "ABC transporter [Mus musculus]...\nhypothetical protein...\nzinc finger protein [Homo sapiens]...\n"
        );
    }
}
