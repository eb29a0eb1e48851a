//! Transduction engines.
//!
//! The source scheme decides the algorithm: Roman input is tokenized greedily
//! into multi-character graphemes, Brahmic input is read one character at a
//! time. Each engine keeps its state local to a single [`Engine::run`] call.

mod brahmic;
mod roman;
#[cfg(test)]
pub(crate) mod testutil;

#[cfg(test)]
mod tests;

pub use brahmic::{BrahmicEngine, INHERENT_VOWEL};
pub use roman::RomanEngine;

use crate::options::Options;
use crate::scheme_map::SchemeMap;

/// Engine selected once per call from [`SchemeMap::from_roman`].
#[derive(Debug, Clone, Copy)]
pub enum Engine<'a> {
    Roman(RomanEngine<'a>),
    Brahmic(BrahmicEngine<'a>),
}

impl<'a> Engine<'a> {
    pub fn new(map: &'a SchemeMap, options: &'a Options) -> Self {
        if map.from_roman() {
            Self::Roman(RomanEngine::new(map, options))
        } else {
            Self::Brahmic(BrahmicEngine::new(map))
        }
    }

    pub fn run(&self, input: &str) -> String {
        match self {
            Self::Roman(engine) => engine.run(input),
            Self::Brahmic(engine) => engine.run(input),
        }
    }
}
