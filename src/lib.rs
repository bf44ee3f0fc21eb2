//! # varmotif
//!
//! A library for detecting sequence motif occurrences created or
//! destroyed by genetic variants.
//!
//! Given a reference sequence, a stream of variants, and a set of motif
//! definitions (literal symbols plus IUPAC ambiguity codes), `varmotif`
//! compares motif occurrence counts between the reference and the
//! variant-mutated sequence, strand-aware for DNA motifs.
//!
//! ## How it works
//!
//! - Each motif definition is compiled into a matchable pattern; DNA
//!   motifs also get their reverse-complement partner, unless the motif
//!   is self-complementary (then matches are reported unstranded).
//! - Variants are clustered into neighborhoods: runs where adjacent
//!   positions are within `motif_length - 1` of each other, so a single
//!   motif window can span several of them. Each motif re-clusters the
//!   stream with its own radius.
//! - Per neighborhood, the local reference window (with motif-sized
//!   flanks) and its variant-mutated counterpart are rebuilt, and
//!   occurrences are counted in both.
//!
//! ## Example
//!
//! ```rust
//! use varmotif::{compile_all, Alphabet, MemorySource, ReferenceSequence, ScanEngine, Variant};
//!
//! let motifs = compile_all(&["ACGT".to_string()], Alphabet::Dna).unwrap();
//! let reference = ReferenceSequence::new("chr1", "ACGTACGT");
//! let source = MemorySource::new(vec![Variant::new(5, "A", "G")]);
//!
//! let engine = ScanEngine::new(&reference);
//! let reports = engine.scan(&source, &motifs).unwrap();
//!
//! // The variant destroys the single (unstranded) ACGT occurrence.
//! let rows = &reports[0].positions[&5];
//! assert_eq!((rows[0].reference, rows[0].variant), (1, 0));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alphabets, variants, strands, and reference sequences
//! - [`motif`]: Motif compilation into matchable patterns
//! - [`engine`]: Clustering, segment building, counting, orchestration
//! - [`parsing`]: VCF variant streams, FASTA references, motif lists
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod engine;
pub mod motif;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::alphabet::Alphabet;
pub use crate::core::reference::ReferenceSequence;
pub use crate::core::strand::Strand;
pub use crate::core::variant::Variant;
pub use crate::engine::scan::{MotifReport, ScanEngine, ScanError, StrandCounts};
pub use crate::motif::compile::{compile_all, CompiledMotif, MotifError};
pub use crate::parsing::{MemorySource, VariantSource};
