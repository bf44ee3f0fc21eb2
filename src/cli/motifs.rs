use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::alphabet::Alphabet;
use crate::motif::compile::{compile_all, CompiledMotif};
use crate::parsing;

#[derive(Args)]
pub struct MotifsArgs {
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

/// Execute motifs subcommand: compile a motif list and show what each
/// definition turned into.
///
/// # Errors
///
/// Returns an error if a definition is invalid or nothing compiles.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MotifsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let definitions = match (&args.motifs, &args.motif) {
        (Some(path), _) => parsing::motifs::read_motif_file(path)?,
        (None, Some(list)) => parsing::motifs::parse_motif_list(list),
        (None, None) => anyhow::bail!("provide motif definitions via --motifs or --motif"),
    };

    let compiled = compile_all(&definitions, args.alphabet)?;

    if verbose {
        eprintln!(
            "Compiled {} of {} motif definitions ({})",
            compiled.len(),
            definitions.len(),
            args.alphabet
        );
    }

    match format {
        OutputFormat::Text => print_text(&compiled),
        OutputFormat::Json => print_json(&compiled)?,
        OutputFormat::Tsv => print_tsv(&compiled),
    }

    Ok(())
}

fn print_text(motifs: &[CompiledMotif]) {
    println!(
        "{:<12} {:>6} {:<20} {:<20} {}",
        "motif", "length", "pattern", "partner", "strands"
    );
    for m in motifs {
        println!(
            "{:<12} {:>6} {:<20} {:<20} {}",
            m.definition(),
            m.length(),
            m.pattern_text(),
            m.partner_text().unwrap_or("-"),
            if m.is_stranded() { "+/-" } else { "." },
        );
    }
}

fn print_json(motifs: &[CompiledMotif]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = motifs
        .iter()
        .map(|m| {
            serde_json::json!({
                "motif": m.definition(),
                "length": m.length(),
                "pattern": m.pattern_text(),
                "partner": m.partner_text(),
                "stranded": m.is_stranded(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(motifs: &[CompiledMotif]) {
    println!("motif\tlength\tpattern\tpartner\tstranded");
    for m in motifs {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            m.definition(),
            m.length(),
            m.pattern_text(),
            m.partner_text().unwrap_or("-"),
            m.is_stranded(),
        );
    }
}
