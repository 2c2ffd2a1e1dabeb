//! Multiline → one-line FASTA conversion.

use std::io::{BufWriter, Write};
use std::path::Path;

use seqvision_core::{Result, SeqVisionError};
use tracing::info;

use crate::{open_append, open_input};

/// Rewrite every record of `input` as a header line followed by its whole
/// sequence on a single line, appending the result to `output`.
///
/// Sequence letters are copied as-is; nothing is validated. Returns the
/// number of records written. An empty input writes nothing.
pub fn convert_multiline_fasta_to_oneline(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<u64> {
    let input = input.as_ref();
    let output = output.as_ref();
    let file = open_input(input)?;
    if file.metadata()?.len() == 0 {
        return Ok(0);
    }

    let mut reader =
        needletail::parse_fastx_reader(file).map_err(|e| SeqVisionError::Parse(e.to_string()))?;
    let mut writer = BufWriter::new(open_append(output)?);

    let mut count: u64 = 0;
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| SeqVisionError::Parse(e.to_string()))?;
        writer.write_all(b">")?;
        writer.write_all(record.id())?;
        writer.write_all(b"\n")?;
        writer.write_all(&record.seq())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;

    info!(input = %input.display(), output = %output.display(), records = count, "converted FASTA");
    Ok(count)
}
