use tracing::{debug, debug_span};

use crate::scheme_map::SchemeMap;

/// Written after a Brahmic consonant that carries its implicit vowel when
/// the target is Roman.
pub const INHERENT_VOWEL: &str = "a";

/// Character-at-a-time transducer for Brahmic source schemes.
#[derive(Debug, Clone, Copy)]
pub struct BrahmicEngine<'a> {
    map: &'a SchemeMap,
}

impl<'a> BrahmicEngine<'a> {
    pub fn new(map: &'a SchemeMap) -> Self {
        Self { map }
    }

    pub fn run(&self, input: &str) -> String {
        let _span = debug_span!("brahmic", bytes = input.len()).entered();
        let map = self.map;

        let mut out = String::with_capacity(input.len() * 2);
        let mut had_consonant = false;
        let mut buf = [0u8; 4];

        for c in input.chars() {
            let key: &str = c.encode_utf8(&mut buf);
            if let Some(mark) = map.marks().get(key) {
                out.push_str(mark);
            } else if let Some(virama) = map.virama().get(key) {
                out.push_str(virama);
            } else {
                if had_consonant {
                    out.push_str(INHERENT_VOWEL);
                }
                match map.other().get(key) {
                    Some(mapped) => out.push_str(mapped),
                    None => out.push(c),
                }
            }
            had_consonant = map.to_roman() && map.consonants().contains_key(key);
        }
        if had_consonant {
            out.push_str(INHERENT_VOWEL);
        }

        debug!(out_bytes = out.len());
        out
    }
}
