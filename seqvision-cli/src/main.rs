mod args;
mod commands;
pub mod defaults;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{ConvertArgs, DnaArgs, FilterArgs, ProteinArgs, RnaArgs};
use commands::{files, sequence};
use seqvision_core::FileLayout;

/// SeqVision: a biological sequence toolkit
///
/// Transforms DNA, RNA, and protein sequences and filters FASTQ reads by GC
/// content, length, and mean quality.
#[derive(Parser, Debug)]
#[command(name = "seqvision")]
#[command(author, version, about = "Biological sequence toolkit", long_about = None)]
struct Cli {
    /// Directory that input file names are resolved against
    #[arg(long, global = true, env = defaults::INPUT_DIR_ENV, default_value = defaults::INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory that output file names are resolved against
    #[arg(long, global = true, env = defaults::OUTPUT_DIR_ENV, default_value = defaults::OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Log per-read decisions (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter FASTQ reads by GC content, length, and quality
    FilterFastq(FilterArgs),

    /// Convert multiline FASTA to one sequence line per record
    ConvertFasta(ConvertArgs),

    /// Extract and sort hit descriptions from a text BLAST report
    ParseBlast(ConvertArgs),

    /// DNA sequence operations
    Dna(DnaArgs),

    /// RNA sequence operations
    Rna(RnaArgs),

    /// Protein molecular weight
    Protein(ProteinArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let layout = FileLayout::new(cli.input_dir, cli.output_dir);

    match cli.command {
        Commands::FilterFastq(args) => files::filter_fastq(&layout, &args)?,
        Commands::ConvertFasta(args) => files::convert_fasta(&layout, &args)?,
        Commands::ParseBlast(args) => files::parse_blast(&layout, &args)?,
        Commands::Dna(args) => println!("{}", sequence::dna(&args)?),
        Commands::Rna(args) => println!("{}", sequence::rna(&args)?),
        Commands::Protein(args) => println!("{}", sequence::protein(&args)?),
    }

    Ok(())
}
