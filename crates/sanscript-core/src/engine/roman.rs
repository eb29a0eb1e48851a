use tracing::{debug, debug_span};

use crate::options::Options;
use crate::scheme_map::SchemeMap;

/// Greedy longest-match transducer for Roman source schemes.
#[derive(Debug, Clone, Copy)]
pub struct RomanEngine<'a> {
    map: &'a SchemeMap,
    options: &'a Options,
}

#[derive(Default)]
struct State {
    /// Last emitted unit was a bare consonant whose vowel is still open.
    had_consonant: bool,
    /// Inside a toggler span. The toggler itself is dropped.
    toggled: bool,
    /// Inside a suspend span. The markers are kept.
    suspended: bool,
}

impl<'a> RomanEngine<'a> {
    pub fn new(map: &'a SchemeMap, options: &'a Options) -> Self {
        Self { map, options }
    }

    pub fn run(&self, input: &str) -> String {
        let _span = debug_span!("roman", bytes = input.len()).entered();

        // Byte offset of every char boundary, including the end.
        let bounds: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        let char_count = bounds.len() - 1;
        let window = self.map.longest().max(self.options.longest_toggler());

        let mut out = String::with_capacity(input.len() * 3);
        let mut state = State::default();
        let mut i = 0;

        while i < char_count {
            match self.match_at(input, &bounds[i..], window, &mut state, &mut out) {
                Some(len) => i += len,
                None => {
                    // Unknown character: close any open consonant and copy it.
                    if state.had_consonant {
                        out.push_str(self.map.virama_out());
                    }
                    out.push_str(&input[bounds[i]..bounds[i + 1]]);
                    state.had_consonant = false;
                    i += 1;
                }
            }
        }
        if state.had_consonant {
            out.push_str(self.map.virama_out());
        }

        debug!(out_bytes = out.len());
        out
    }

    /// Try every token length from `window` down to 1 at the position
    /// `bounds[0]`. Returns the number of characters consumed.
    fn match_at(
        &self,
        input: &str,
        bounds: &[usize],
        window: usize,
        state: &mut State,
        out: &mut String,
    ) -> Option<usize> {
        let mut len = window.min(bounds.len() - 1);
        while len > 0 {
            let token = &input[bounds[0]..bounds[len]];

            if self.options.togglers.contains(token) {
                state.toggled = !state.toggled;
                return Some(len);
            }

            if let Some(c) = single_char(token) {
                if self.options.suspend_on.contains(&c) {
                    state.suspended = true;
                } else if self.options.suspend_off.contains(&c) {
                    state.suspended = false;
                }
            }

            if !(state.toggled || state.suspended) && self.emit(token, state, out) {
                return Some(len);
            }
            len -= 1;
        }
        None
    }

    fn emit(&self, token: &str, state: &mut State, out: &mut String) -> bool {
        let map = self.map;

        // Consonant + vowel: the vowel becomes a dependent mark. The inherent
        // "a" has no mark, so nothing is written for it on Brahmic targets.
        if state.had_consonant {
            if let Some(vowel) = map.vowels().get(token) {
                match map.marks().get(token) {
                    Some(mark) if !mark.is_empty() => out.push_str(mark),
                    _ if map.to_roman() => out.push_str(vowel),
                    _ => {}
                }
                state.had_consonant = map.consonants().contains_key(token);
                return true;
            }
        }

        if let Some(mapped) = map.other().get(token) {
            if state.had_consonant {
                out.push_str(map.virama_out());
            }
            out.push_str(mapped);
            state.had_consonant = map.consonants().contains_key(token);
            return true;
        }

        false
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
