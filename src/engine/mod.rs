//! The motif-variant analysis engine.
//!
//! For each motif: variants are clustered into proximity neighborhoods
//! ([`cluster`]), reference and variant-mutated segments are rebuilt per
//! neighborhood ([`segment`]), strand-aware occurrence counts are taken
//! on both ([`count`]), and [`scan`] assembles the per-position results.

pub mod cluster;
pub mod count;
pub mod scan;
pub mod segment;

pub use cluster::{cluster, Neighborhood};
pub use scan::{MotifReport, ScanEngine, ScanError, StrandCounts};
