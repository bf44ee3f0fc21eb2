use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::alphabet::Alphabet;
use crate::engine::scan::{MotifReport, ScanEngine};
use crate::motif::compile::compile_all;
use crate::parsing;
use crate::parsing::vcf::VcfSource;

#[derive(Args)]
pub struct ScanArgs {
    /// VCF file of variants, ordered by position (plain or gzipped)
    #[arg(long, value_name = "FILE")]
    pub vcf: PathBuf,

    /// Reference FASTA file (plain or gzipped); the first sequence is used
    #[arg(short, long, value_name = "FILE")]
    pub reference: PathBuf,

    /// File with one motif definition per line
    #[arg(short = 'm', long, value_name = "FILE", conflicts_with = "motif")]
    pub motifs: Option<PathBuf>,

    /// Comma-separated motif definitions
    #[arg(long, value_name = "LIST")]
    pub motif: Option<String>,

    /// Motif alphabet
    #[arg(short, long, value_enum, default_value = "dna")]
    pub alphabet: Alphabet,
}

/// Execute scan subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be parsed, a motif definition
/// is invalid, or no valid motifs remain.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let definitions = load_definitions(&args)?;
    let compiled = compile_all(&definitions, args.alphabet)?;

    if verbose {
        eprintln!(
            "Compiled {} of {} motif definitions ({})",
            compiled.len(),
            definitions.len(),
            args.alphabet
        );
    }

    let reference = parsing::fasta::read_reference(&args.reference)?;
    if verbose {
        eprintln!("Loaded reference {} ({} bp)", reference.name(), reference.len());
    }

    let source = VcfSource::new(&args.vcf);
    let engine = ScanEngine::new(&reference);
    let reports = engine.scan(&source, &compiled)?;

    match format {
        OutputFormat::Text => print_text_results(&reports),
        OutputFormat::Json => print_json_results(&reports)?,
        OutputFormat::Tsv => print_tsv_results(&reports),
    }

    Ok(())
}

fn load_definitions(args: &ScanArgs) -> anyhow::Result<Vec<String>> {
    match (&args.motifs, &args.motif) {
        (Some(path), _) => Ok(parsing::motifs::read_motif_file(path)?),
        (None, Some(list)) => Ok(parsing::motifs::parse_motif_list(list)),
        (None, None) => anyhow::bail!("provide motif definitions via --motifs or --motif"),
    }
}

fn print_text_results(reports: &[MotifReport]) {
    let total_rows: usize = reports
        .iter()
        .map(|r| r.positions.values().map(Vec::len).sum::<usize>())
        .sum();
    if total_rows == 0 {
        eprintln!("No motif changes detected.");
        return;
    }

    println!(
        "{:<12} {:<6} {:>10} {:>10} {:>8}",
        "motif", "strand", "position", "reference", "variant"
    );
    for report in reports {
        for (position, rows) in &report.positions {
            for row in rows {
                println!(
                    "{:<12} {:<6} {:>10} {:>10} {:>8}",
                    report.motif, row.strand, position, row.reference, row.variant
                );
            }
        }
    }
}

fn print_json_results(reports: &[MotifReport]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = reports
        .iter()
        .map(|report| {
            let sites: Vec<serde_json::Value> = report
                .positions
                .iter()
                .flat_map(|(position, rows)| {
                    rows.iter().map(move |row| {
                        serde_json::json!({
                            "position": position,
                            "strand": row.strand.to_string(),
                            "reference": row.reference,
                            "variant": row.variant,
                        })
                    })
                })
                .collect();

            serde_json::json!({
                "motif": report.motif,
                "sites": sites,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(reports: &[MotifReport]) {
    println!("motif\tstrand\tposition\treference\tvariant");
    for report in reports {
        for (position, rows) in &report.positions {
            for row in rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    report.motif, row.strand, position, row.reference, row.variant
                );
            }
        }
    }
}
