use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use sanscript_core::{Options, SchemeMap};
use tracing::debug;

use crate::error::TransliterateError;
use crate::registry::SchemeRegistry;
use crate::transliterate_with_map;

/// Registry-backed front end that memoizes one [`SchemeMap`] per scheme pair.
///
/// Safe to share between threads; maps are built at most once per pair
/// (modulo a race where two threads build the same map concurrently and one
/// result is discarded).
pub struct Transliterator<'r> {
    registry: &'r SchemeRegistry,
    options: Options,
    cache: RwLock<HashMap<(String, String), Arc<SchemeMap>>>,
}

impl Transliterator<'static> {
    /// Uses the built-in registry and default options.
    pub fn builtin() -> Self {
        Self::new(SchemeRegistry::global())
    }
}

impl<'r> Transliterator<'r> {
    pub fn new(registry: &'r SchemeRegistry) -> Self {
        Self {
            registry,
            options: Options::default(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn registry(&self) -> &'r SchemeRegistry {
        self.registry
    }

    /// Cached map for `(from, to)`, built on first use.
    pub fn scheme_map(&self, from: &str, to: &str) -> Result<Arc<SchemeMap>, TransliterateError> {
        let key = (from.to_string(), to.to_string());
        if let Some(map) = self
            .cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
        {
            return Ok(Arc::clone(map));
        }

        let map = Arc::new(SchemeMap::new(
            self.registry.get(from)?,
            self.registry.get(to)?,
        ));
        debug!(from, to, "scheme map cached");
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        Ok(Arc::clone(cache.entry(key).or_insert(map)))
    }

    pub fn transliterate(&self, text: &str, from: &str, to: &str) -> Result<String, TransliterateError> {
        let map = self.scheme_map(from, to)?;
        Ok(transliterate_with_map(text, &map, &self.options))
    }

    /// Number of cached scheme pairs.
    pub fn cached_pairs(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
