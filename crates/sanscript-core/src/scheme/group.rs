use std::fmt;

/// Semantic role of a run of graphemes inside a [`Scheme`](super::Scheme).
///
/// The `Dravidian*` roles hold the letters only some scripts have (short e/o,
/// the alveolar consonants). A scheme without them omits the group, and the
/// group is then skipped when mapping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Vowels,
    DravidianVowels,
    Marks,
    DravidianMarks,
    Virama,
    Other,
    Consonants,
    DravidianConsonants,
    Symbols,
    /// Any other key found in scheme data. Mapped like [`Group::Other`].
    Unrecognized(String),
}

/// Lookup table(s) a group's pairs are registered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bucket {
    Marks,
    Virama,
    /// `vowels` and `other`.
    Vowels,
    /// `consonants` and `other`.
    Consonants,
    Other,
}

impl Group {
    pub fn from_name(name: &str) -> Self {
        match name {
            "vowels" => Self::Vowels,
            "dravidian_vowels" => Self::DravidianVowels,
            "marks" => Self::Marks,
            "dravidian_marks" => Self::DravidianMarks,
            "virama" => Self::Virama,
            "other" => Self::Other,
            "consonants" => Self::Consonants,
            "dravidian_consonants" => Self::DravidianConsonants,
            "symbols" => Self::Symbols,
            _ => Self::Unrecognized(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Vowels => "vowels",
            Self::DravidianVowels => "dravidian_vowels",
            Self::Marks => "marks",
            Self::DravidianMarks => "dravidian_marks",
            Self::Virama => "virama",
            Self::Other => "other",
            Self::Consonants => "consonants",
            Self::DravidianConsonants => "dravidian_consonants",
            Self::Symbols => "symbols",
            Self::Unrecognized(name) => name,
        }
    }

    pub(crate) fn bucket(&self) -> Bucket {
        match self {
            Self::Marks | Self::DravidianMarks => Bucket::Marks,
            Self::Virama => Bucket::Virama,
            Self::Vowels | Self::DravidianVowels => Bucket::Vowels,
            Self::Consonants | Self::DravidianConsonants => Bucket::Consonants,
            Self::Other | Self::Symbols | Self::Unrecognized(_) => Bucket::Other,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
