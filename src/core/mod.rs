//! Core data types for alphabets, variants, strands, and reference sequences.

pub mod alphabet;
pub mod reference;
pub mod strand;
pub mod variant;
