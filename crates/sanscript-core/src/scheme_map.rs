//! Grapheme lookup tables derived from a (from, to) scheme pair.

use std::collections::HashMap;

use tracing::{debug, debug_span, warn};

use crate::scheme::{Bucket, Group, Scheme};

/// A group whose two sides had different lengths. Only the shared prefix
/// was mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    pub group: Group,
    pub from_len: usize,
    pub to_len: usize,
}

/// Read-only mapping from source graphemes to target graphemes.
///
/// Built once per scheme pair and safe to share between any number of
/// transduction calls.
#[derive(Debug, Clone, Default)]
pub struct SchemeMap {
    marks: HashMap<String, String>,
    virama: HashMap<String, String>,
    vowels: HashMap<String, String>,
    consonants: HashMap<String, String>,
    other: HashMap<String, String>,
    virama_out: String,
    from_roman: bool,
    to_roman: bool,
    longest: usize,
    truncations: Vec<Truncation>,
}

impl SchemeMap {
    /// Pair up every group present in both schemes position by position.
    ///
    /// Groups missing from either side are skipped. When a shared group has
    /// different lengths the extra trailing graphemes are left unmapped and
    /// the pair is recorded in [`SchemeMap::truncations`].
    pub fn new(from: &Scheme, to: &Scheme) -> Self {
        let _span = debug_span!(
            "scheme_map",
            from_roman = from.is_roman(),
            to_roman = to.is_roman()
        )
        .entered();

        let mut map = Self {
            from_roman: from.is_roman(),
            to_roman: to.is_roman(),
            longest: from.longest(),
            ..Self::default()
        };
        let mut virama_out = None;

        for (group, from_graphemes) in from.groups() {
            let Some(to_graphemes) = to.group(group) else {
                continue;
            };
            if from_graphemes.len() != to_graphemes.len() {
                warn!(
                    group = group.name(),
                    from_len = from_graphemes.len(),
                    to_len = to_graphemes.len(),
                    "group lengths differ, truncating"
                );
                map.truncations.push(Truncation {
                    group: group.clone(),
                    from_len: from_graphemes.len(),
                    to_len: to_graphemes.len(),
                });
            }

            let mut sub_map = HashMap::new();
            for (k, v) in from_graphemes.iter().zip(to_graphemes) {
                sub_map.insert(k.clone(), v.clone());
                for k_syn in from.synonyms_of(k) {
                    sub_map.insert(k_syn.clone(), v.clone());
                }
            }

            match group.bucket() {
                Bucket::Marks => map.marks.extend(sub_map),
                Bucket::Virama => {
                    if virama_out.is_none() {
                        virama_out = to_graphemes.first().cloned();
                    }
                    map.virama = sub_map;
                }
                Bucket::Vowels => {
                    map.vowels.extend(sub_map.clone());
                    map.other.extend(sub_map);
                }
                Bucket::Consonants => {
                    map.consonants.extend(sub_map.clone());
                    map.other.extend(sub_map);
                }
                Bucket::Other => map.other.extend(sub_map),
            }
        }
        map.virama_out = virama_out.unwrap_or_default();

        debug!(
            longest = map.longest,
            other = map.other.len(),
            marks = map.marks.len(),
            truncations = map.truncations.len()
        );
        map
    }

    pub fn marks(&self) -> &HashMap<String, String> {
        &self.marks
    }

    pub fn virama(&self) -> &HashMap<String, String> {
        &self.virama
    }

    pub fn vowels(&self) -> &HashMap<String, String> {
        &self.vowels
    }

    pub fn consonants(&self) -> &HashMap<String, String> {
        &self.consonants
    }

    /// Everything except marks and virama: consonants, independent vowels,
    /// punctuation and symbols.
    pub fn other(&self) -> &HashMap<String, String> {
        &self.other
    }

    /// Target grapheme that ends a Roman-source consonant's implicit vowel.
    pub fn virama_out(&self) -> &str {
        &self.virama_out
    }

    pub fn from_roman(&self) -> bool {
        self.from_roman
    }

    pub fn to_roman(&self) -> bool {
        self.to_roman
    }

    /// Longest source grapheme in characters.
    pub fn longest(&self) -> usize {
        self.longest
    }

    pub fn truncations(&self) -> &[Truncation] {
        &self.truncations
    }
}
