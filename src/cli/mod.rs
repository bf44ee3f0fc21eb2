//! Command-line interface for varmotif.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **scan**: Report motif occurrences created or destroyed by variants
//! - **motifs**: Compile and display a motif list without scanning
//!
//! ## Usage
//!
//! ```text
//! # Scan a VCF against a reference for two motifs
//! varmotif scan --vcf sample.vcf --reference chr1.fa --motif ACGT,GANTC
//!
//! # Motifs from a file, one per line
//! varmotif scan --vcf sample.vcf.gz --reference chr1.fa.gz --motifs motifs.txt
//!
//! # TSV output for scripting
//! varmotif scan --vcf sample.vcf --reference chr1.fa --motif ACGT --format tsv
//!
//! # Validate a motif file
//! varmotif motifs --motifs motifs.txt --alphabet aa
//! ```

use clap::{Parser, Subcommand};

pub mod motifs;
pub mod scan;

#[derive(Parser)]
#[command(name = "varmotif")]
#[command(version)]
#[command(about = "Detect motif occurrences created or destroyed by genetic variants")]
#[command(
    long_about = "varmotif compares motif occurrence counts between a reference sequence and the same sequence with variants applied.\n\nMotifs are plain sequences of literal symbols and IUPAC ambiguity codes; DNA motifs are also matched on the opposite strand via their reverse complement. Variants close enough for a single motif window to span several of them are analyzed together as one neighborhood."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan variants for motif gains and losses
    Scan(scan::ScanArgs),

    /// Compile and display a motif list
    Motifs(motifs::MotifsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
