//! Transliteration between Indic scripts and their romanizations.
//!
//! ```
//! use sanscript::{transliterate, Options, table};
//!
//! let out = transliterate("namaste", table::HK, table::DEVANAGARI, &Options::default()).unwrap();
//! assert_eq!(out, "नमस्ते");
//! ```
//!
//! Each [`transliterate`] call builds a fresh [`SchemeMap`]. Callers that
//! convert many strings between the same pair should build the map once and
//! use [`transliterate_with_map`], or keep a [`Transliterator`], which caches
//! maps per scheme pair.

pub mod error;
pub mod registry;
pub mod table;
pub mod trace_init;
mod transliterator;

pub use error::{RegistryError, TransliterateError};
pub use registry::{Mismatch, SchemeRegistry};
pub use sanscript_core::{
    parse_scheme_toml, Engine, Group, Options, OptionsError, Scheme, SchemeConfigError, SchemeMap,
    Truncation,
};
pub use transliterator::Transliterator;

use tracing::debug_span;

/// Convert `text` from scheme `from` to scheme `to`, both looked up in the
/// built-in registry.
pub fn transliterate(
    text: &str,
    from: &str,
    to: &str,
    options: &Options,
) -> Result<String, TransliterateError> {
    let _span = debug_span!("transliterate", from, to).entered();
    let registry = SchemeRegistry::global();
    let map = SchemeMap::new(registry.get(from)?, registry.get(to)?);
    Ok(transliterate_with_map(text, &map, options))
}

/// Convert `text` with a precomputed map.
pub fn transliterate_with_map(text: &str, map: &SchemeMap, options: &Options) -> String {
    Engine::new(map, options).run(text)
}

#[cfg(test)]
mod tests;
