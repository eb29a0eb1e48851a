//! Small Harvard-Kyoto / Devanagari / IAST style schemes for engine tests.

use crate::scheme::{Group, Scheme};

pub(crate) fn hk() -> Scheme {
    Scheme::new(true)
        .with_group(Group::Vowels, ["a", "A", "i", "I", "u", "e", "ai"])
        .with_group(Group::Marks, ["A", "i", "I", "u", "e", "ai"])
        .with_group(Group::Virama, [""])
        .with_group(Group::Other, ["M", "H"])
        .with_group(
            Group::Consonants,
            ["k", "kh", "g", "c", "t", "th", "d", "n", "m", "y", "r", "S", "s", "h", "kS"],
        )
        .with_group(Group::Symbols, ["|", "||"])
        .with_synonyms("|", ["."])
}

pub(crate) fn devanagari() -> Scheme {
    Scheme::new(false)
        .with_group(Group::Vowels, ["अ", "आ", "इ", "ई", "उ", "ए", "ऐ"])
        .with_group(Group::Marks, ["ा", "ि", "ी", "ु", "े", "ै"])
        .with_group(Group::Virama, ["्"])
        .with_group(Group::Other, ["ं", "ः"])
        .with_group(
            Group::Consonants,
            ["क", "ख", "ग", "च", "त", "थ", "द", "न", "म", "य", "र", "ष", "स", "ह", "क्ष"],
        )
        .with_group(Group::Symbols, ["।", "॥"])
}

pub(crate) fn iast() -> Scheme {
    Scheme::new(true)
        .with_group(Group::Vowels, ["a", "ā", "i", "ī", "u", "e", "ai"])
        .with_group(Group::Marks, ["ā", "i", "ī", "u", "e", "ai"])
        .with_group(Group::Virama, [""])
        .with_group(Group::Other, ["ṃ", "ḥ"])
        .with_group(
            Group::Consonants,
            ["k", "kh", "g", "c", "t", "th", "d", "n", "m", "y", "r", "ṣ", "s", "h", "kṣ"],
        )
        .with_group(Group::Symbols, ["।", "॥"])
}
