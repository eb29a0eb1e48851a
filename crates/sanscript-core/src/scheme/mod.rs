//! Immutable description of one writing system's character inventory.
//!
//! A [`Scheme`] partitions its graphemes into [`Group`]s. Two schemes are
//! mapped onto each other position by position inside each shared group, so
//! index `i` of a group must denote the same phoneme in every scheme.

mod config;
mod group;

use std::collections::{BTreeMap, HashMap};

pub use config::{parse_scheme_toml, SchemeConfigError};
pub use group::Group;
pub(crate) use group::Bucket;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    groups: BTreeMap<Group, Vec<String>>,
    synonyms: HashMap<String, Vec<String>>,
    is_roman: bool,
}

impl Scheme {
    /// An empty scheme. `is_roman` selects the transduction engine used when
    /// this scheme is the source.
    pub fn new(is_roman: bool) -> Self {
        Self {
            groups: BTreeMap::new(),
            synonyms: HashMap::new(),
            is_roman,
        }
    }

    /// Set (or replace) the graphemes of `group`.
    pub fn with_group<I, S>(mut self, group: Group, graphemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .insert(group, graphemes.into_iter().map(Into::into).collect());
        self
    }

    /// Accept each of `alternates` as input spelling of `canonical`.
    pub fn with_synonyms<I, S>(mut self, canonical: impl Into<String>, alternates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms
            .entry(canonical.into())
            .or_default()
            .extend(alternates.into_iter().map(Into::into));
        self
    }

    pub fn is_roman(&self) -> bool {
        self.is_roman
    }

    pub fn group(&self, group: &Group) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Groups in role order.
    pub fn groups(&self) -> impl Iterator<Item = (&Group, &[String])> {
        self.groups.iter().map(|(g, v)| (g, v.as_slice()))
    }

    /// Alternate input spellings registered for `grapheme`.
    pub fn synonyms_of(&self, grapheme: &str) -> &[String] {
        self.synonyms
            .get(grapheme)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Length in characters of the longest grapheme in any group.
    pub fn longest(&self) -> usize {
        self.groups
            .values()
            .flatten()
            .map(|g| g.chars().count())
            .max()
            .unwrap_or(0)
    }
}
