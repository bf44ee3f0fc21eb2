//! Motif compilation: ambiguity-aware definitions into matchable patterns.

pub mod compile;

pub use compile::{compile_all, CompiledMotif, MotifError};
