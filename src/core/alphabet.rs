//! Sequence alphabets and their IUPAC ambiguity tables.
//!
//! The ambiguity tables are process-wide static configuration: fixed,
//! ordered lists of (code, expansion) pairs. Expansions are stored in
//! sorted order so that set comparisons (e.g. when complementing a code)
//! reduce to string equality.

/// DNA ambiguity codes and the literal bases they stand for.
pub const DNA_AMBIGUITY: &[(char, &str)] = &[
    ('R', "AG"),
    ('Y', "CT"),
    ('S', "CG"),
    ('W', "AT"),
    ('K', "GT"),
    ('M', "AC"),
    ('B', "CGT"),
    ('D', "AGT"),
    ('H', "ACT"),
    ('V', "ACG"),
    ('N', "ACGT"),
];

/// Amino-acid ambiguity codes: B (Asx), Z (Glx), X (any).
pub const AA_AMBIGUITY: &[(char, &str)] = &[
    ('B', "DN"),
    ('Z', "EQ"),
    ('X', "ACDEFGHIKLMNPQRSTVWY"),
];

const DNA_LITERALS: &str = "ACGT";
const AA_LITERALS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Sequence alphabet a motif definition is interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Alphabet {
    /// Nucleotide motifs: ACGT plus IUPAC codes R,Y,S,W,K,M,B,D,H,V,N
    #[default]
    #[value(name = "dna")]
    Dna,
    /// Amino-acid motifs: the 20 standard residues plus B, X, Z
    #[value(name = "aa")]
    AminoAcid,
}

impl Alphabet {
    /// Literal symbols of this alphabet (uppercase).
    #[must_use]
    pub fn literals(self) -> &'static str {
        match self {
            Self::Dna => DNA_LITERALS,
            Self::AminoAcid => AA_LITERALS,
        }
    }

    /// Ordered (code, expansion) ambiguity table for this alphabet.
    #[must_use]
    pub fn ambiguity_table(self) -> &'static [(char, &'static str)] {
        match self {
            Self::Dna => DNA_AMBIGUITY,
            Self::AminoAcid => AA_AMBIGUITY,
        }
    }

    #[must_use]
    pub fn is_literal(self, c: char) -> bool {
        self.literals().contains(c)
    }

    #[must_use]
    pub fn is_ambiguity_code(self, c: char) -> bool {
        self.expansion(c).is_some()
    }

    /// The literal symbols an ambiguity code stands for, if `c` is one.
    #[must_use]
    pub fn expansion(self, c: char) -> Option<&'static str> {
        self.ambiguity_table()
            .iter()
            .find(|(code, _)| *code == c)
            .map(|(_, expansion)| *expansion)
    }

    /// Inverse lookup: the ambiguity code whose expansion is exactly
    /// `symbols` (sorted uppercase literals).
    #[must_use]
    pub fn code_for(self, symbols: &str) -> Option<char> {
        self.ambiguity_table()
            .iter()
            .find(|(_, expansion)| *expansion == symbols)
            .map(|(code, _)| *code)
    }

    /// Complement a single symbol (literal or ambiguity code).
    ///
    /// Only defined for DNA; ambiguity codes are complemented by
    /// complementing the set of bases they stand for.
    #[must_use]
    pub fn complement(self, c: char) -> Option<char> {
        if self != Self::Dna {
            return None;
        }
        if let Some(base) = complement_base(c) {
            return Some(base);
        }
        let expansion = self.expansion(c)?;
        let mut complemented: Vec<char> = expansion.chars().filter_map(complement_base).collect();
        if complemented.len() != expansion.len() {
            return None;
        }
        complemented.sort_unstable();
        let key: String = complemented.into_iter().collect();
        self.code_for(&key)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dna => write!(f, "dna"),
            Self::AminoAcid => write!(f, "aa"),
        }
    }
}

/// Watson-Crick complement of a literal base.
#[must_use]
pub fn complement_base(c: char) -> Option<char> {
    match c {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}
