//! File-based subcommands: FASTQ filtering, FASTA conversion, BLAST scraping.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use seqvision_core::FileLayout;
use seqvision_seq::filter::{Bounds, FilterSettings};
use tracing::debug;

use crate::args::{ConvertArgs, FilterArgs};
use crate::defaults;

/// Turn a 1- or 2-value CLI bound into [`Bounds`]: one value is the maximum.
fn bounds_from_values<T>(values: Option<&[T]>, default_min: T, default_max: T) -> Result<Bounds<T>>
where
    T: PartialOrd + Copy + std::fmt::Display + Default,
{
    let bounds = match values {
        None => Bounds::new(default_min, default_max),
        Some([max]) => Bounds::new(T::default(), *max),
        Some([min, max]) => Bounds::new(*min, *max),
        Some(other) => anyhow::bail!("expected one or two bound values, got {}", other.len()),
    };
    Ok(bounds?)
}

fn resolve_paths(layout: &FileLayout, input: &Path, output: &Path) -> Result<(PathBuf, PathBuf)> {
    let input = layout.resolve_input(input);
    let output = layout.resolve_output(output);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!(dir = %parent.display(), "creating output directory");
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    Ok((input, output))
}

pub fn filter_fastq(layout: &FileLayout, args: &FilterArgs) -> Result<()> {
    let settings = FilterSettings {
        gc_bounds: bounds_from_values(args.gc.as_deref(), defaults::GC_MIN, defaults::GC_MAX)
            .context("invalid --gc")?,
        length_bounds: bounds_from_values(
            args.length.as_deref(),
            defaults::LENGTH_MIN,
            defaults::LENGTH_MAX,
        )
        .context("invalid --length")?,
        quality_threshold: args.quality,
    };
    let (input, output) = resolve_paths(layout, &args.input, &args.output)?;
    debug!(?settings, "filtering FASTQ");

    let report = settings
        .filter_file(&input, &output)
        .with_context(|| format!("filtering {}", input.display()))?;

    println!(
        "Kept {} of {} reads ({} rejected) -> {}",
        report.records_kept,
        report.records_read,
        report.records_rejected(),
        output.display()
    );
    Ok(())
}

pub fn convert_fasta(layout: &FileLayout, args: &ConvertArgs) -> Result<()> {
    let (input, output) = resolve_paths(layout, &args.input, &args.output)?;
    let count = seqvision_io::convert_multiline_fasta_to_oneline(&input, &output)
        .with_context(|| format!("converting {}", input.display()))?;
    println!("Converted {} records -> {}", count, output.display());
    Ok(())
}

pub fn parse_blast(layout: &FileLayout, args: &ConvertArgs) -> Result<()> {
    let (input, output) = resolve_paths(layout, &args.input, &args.output)?;
    let count = seqvision_io::parse_blast_output(&input, &output)
        .with_context(|| format!("parsing {}", input.display()))?;
    println!("Wrote {} descriptions -> {}", count, output.display());
    Ok(())
}
