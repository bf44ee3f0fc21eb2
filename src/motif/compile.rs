//! Compiles motif definitions into matchable patterns.
//!
//! A definition is a plain sequence of literal symbols and ambiguity
//! codes; no quantifiers, grouping, or other regex syntax is accepted.
//! Each ambiguity code is translated to a character class listing its
//! literal symbols (`ARC` becomes `A[AG]C`). For DNA motifs the
//! reverse-complement partner pattern is compiled alongside, unless it is
//! identical to the original (self-complementary motif), in which case
//! matches are reported unstranded instead of double-counted.

use regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::warn;

use crate::core::alphabet::Alphabet;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("invalid motif definition(s): {}", .0.join(", "))]
    InvalidDefinitions(Vec<String>),

    #[error("no valid motifs remain after validation")]
    NoValidMotifs,
}

/// A motif definition compiled into its matchable form.
#[derive(Debug, Clone)]
pub struct CompiledMotif {
    definition: String,
    pattern: Regex,
    pattern_text: String,
    partner: Option<Regex>,
    partner_text: Option<String>,
    length: usize,
    alphabet: Alphabet,
}

impl CompiledMotif {
    /// The uppercased raw definition (e.g. `ARC`).
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The translated pattern matched on the forward strand.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn pattern_text(&self) -> &str {
        &self.pattern_text
    }

    /// Reverse-complement partner pattern, absent for amino-acid and
    /// self-complementary motifs.
    #[must_use]
    pub fn partner(&self) -> Option<&Regex> {
        self.partner.as_ref()
    }

    #[must_use]
    pub fn partner_text(&self) -> Option<&str> {
        self.partner_text.as_deref()
    }

    /// Number of alphabet positions the motif spans. An ambiguity group
    /// counts as one position regardless of its expansion size.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Neighborhood radius for this motif: `length - 1`.
    #[must_use]
    pub fn radius(&self) -> u64 {
        (self.length - 1) as u64
    }

    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Stranded motifs have a distinct partner and report under `+`/`-`;
    /// unstranded motifs report under `.`.
    #[must_use]
    pub fn is_stranded(&self) -> bool {
        self.partner.is_some()
    }
}

/// Compile a batch of motif definitions.
///
/// Definitions containing characters outside the alphabet's literal and
/// ambiguity sets are a fatal batch error listing every offender. A
/// definition whose translation fails to compile is dropped with a
/// warning; if nothing survives the batch fails with `NoValidMotifs`.
///
/// # Errors
///
/// Returns `MotifError::InvalidDefinitions` or `MotifError::NoValidMotifs`
/// as described above.
pub fn compile_all(definitions: &[String], alphabet: Alphabet) -> Result<Vec<CompiledMotif>, MotifError> {
    let invalid: Vec<String> = definitions
        .iter()
        .filter(|d| !is_valid_definition(d, alphabet))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(MotifError::InvalidDefinitions(invalid));
    }

    let motifs: Vec<CompiledMotif> = definitions
        .iter()
        .filter_map(|d| compile_one(d, alphabet))
        .collect();
    if motifs.is_empty() {
        return Err(MotifError::NoValidMotifs);
    }
    Ok(motifs)
}

/// Every character must be a literal symbol or ambiguity code of the
/// alphabet (case-insensitive); an empty definition is invalid.
#[must_use]
pub fn is_valid_definition(definition: &str, alphabet: Alphabet) -> bool {
    !definition.is_empty()
        && definition
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .all(|c| alphabet.is_literal(c) || alphabet.is_ambiguity_code(c))
}

fn compile_one(definition: &str, alphabet: Alphabet) -> Option<CompiledMotif> {
    let definition = definition.to_uppercase();
    let pattern_text = expand(&definition, alphabet);

    let pattern = match build_pattern(&pattern_text) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(motif = %definition, error = %e, "motif translates to an invalid pattern, dropping");
            return None;
        }
    };

    let length = collapsed_length(&pattern_text, alphabet);

    let (partner, partner_text) = match partner_pattern_text(&definition, alphabet) {
        Some(text) if text != pattern_text => match build_pattern(&text) {
            Ok(partner) => (Some(partner), Some(text)),
            Err(e) => {
                warn!(motif = %definition, error = %e, "partner translates to an invalid pattern, dropping");
                return None;
            }
        },
        _ => (None, None),
    };

    Some(CompiledMotif {
        definition,
        pattern,
        pattern_text,
        partner,
        partner_text,
        length,
        alphabet,
    })
}

fn build_pattern(text: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(text).case_insensitive(true).build()
}

/// Translate a definition into its alternation form: each ambiguity code
/// becomes a character class of its literal symbols.
#[must_use]
pub fn expand(definition: &str, alphabet: Alphabet) -> String {
    let mut out = String::with_capacity(definition.len());
    for c in definition.chars().map(|c| c.to_ascii_uppercase()) {
        match alphabet.expansion(c) {
            Some(symbols) => {
                out.push('[');
                out.push_str(symbols);
                out.push(']');
            }
            None => out.push(c),
        }
    }
    out
}

/// Motif length of a translated pattern: collapse each alternation group
/// back to its single-code placeholder and count characters.
#[must_use]
pub fn collapsed_length(pattern_text: &str, alphabet: Alphabet) -> usize {
    let mut collapsed = String::with_capacity(pattern_text.len());
    let mut chars = pattern_text.chars();
    while let Some(c) = chars.next() {
        if c == '[' {
            let group: String = chars.by_ref().take_while(|&g| g != ']').collect();
            collapsed.push(alphabet.code_for(&group).unwrap_or('?'));
        } else {
            collapsed.push(c);
        }
    }
    collapsed.chars().count()
}

/// Translated reverse-complement of a DNA definition, or None for
/// non-DNA alphabets.
fn partner_pattern_text(definition: &str, alphabet: Alphabet) -> Option<String> {
    if alphabet != Alphabet::Dna {
        return None;
    }
    let complemented: Option<String> = definition
        .chars()
        .rev()
        .map(|c| alphabet.complement(c))
        .collect();
    complemented.map(|rc| expand(&rc, alphabet))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_expand_plain_and_ambiguous() {
        assert_eq!(expand("AGC", Alphabet::Dna), "AGC");
        assert_eq!(expand("ARC", Alphabet::Dna), "A[AG]C");
        assert_eq!(expand("nn", Alphabet::Dna), "[ACGT][ACGT]");
        assert_eq!(expand("MB", Alphabet::AminoAcid), "M[DN]");
    }

    #[test]
    fn test_length_ignores_group_size() {
        let motifs = compile_all(&defs(&["AGC", "ARC", "ANC"]), Alphabet::Dna).unwrap();
        assert!(motifs.iter().all(|m| m.length() == 3));
        assert!(motifs.iter().all(|m| m.radius() == 2));
    }

    #[test]
    fn test_invalid_characters_are_fatal() {
        let err = compile_all(&defs(&["AGC", "A{2}C"]), Alphabet::Dna).unwrap_err();
        match err {
            MotifError::InvalidDefinitions(bad) => assert_eq!(bad, vec!["A{2}C".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_regex_metacharacters() {
        for bad in ["AG(C)", "A.C", "A\\dC", "AGC+", "AG C"] {
            assert!(!is_valid_definition(bad, Alphabet::Dna), "{bad}");
        }
        assert!(!is_valid_definition("", Alphabet::Dna));
    }

    #[test]
    fn test_empty_batch_is_fatal() {
        assert!(matches!(
            compile_all(&[], Alphabet::Dna),
            Err(MotifError::NoValidMotifs)
        ));
    }

    #[test]
    fn test_partner_is_reverse_complement() {
        let motifs = compile_all(&defs(&["AGGT"]), Alphabet::Dna).unwrap();
        assert_eq!(motifs[0].partner_text(), Some("ACCT"));
        assert!(motifs[0].is_stranded());
    }

    #[test]
    fn test_partner_complements_ambiguity_codes() {
        // revcomp(ARC) = G Y T: complement C->G, R->Y, A->T then reverse
        let motifs = compile_all(&defs(&["ARC"]), Alphabet::Dna).unwrap();
        assert_eq!(motifs[0].partner_text(), Some("G[CT]T"));
    }

    #[test]
    fn test_self_complementary_motif_has_no_partner() {
        for def in ["ACGT", "WW", "GCGC"] {
            let motifs = compile_all(&defs(&[def]), Alphabet::Dna).unwrap();
            assert!(!motifs[0].is_stranded(), "{def}");
            assert_eq!(motifs[0].partner_text(), None);
        }
    }

    #[test]
    fn test_amino_acid_motifs_are_unstranded() {
        let motifs = compile_all(&defs(&["MKXZ"]), Alphabet::AminoAcid).unwrap();
        assert!(!motifs[0].is_stranded());
        assert_eq!(motifs[0].length(), 4);
    }

    #[test]
    fn test_definitions_are_uppercased() {
        let motifs = compile_all(&defs(&["agc"]), Alphabet::Dna).unwrap();
        assert_eq!(motifs[0].definition(), "AGC");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let motifs = compile_all(&defs(&["ARC"]), Alphabet::Dna).unwrap();
        assert!(motifs[0].pattern().is_match("ttagctt"));
        assert!(motifs[0].pattern().is_match("TTAACTT"));
    }
}
