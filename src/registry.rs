//! Scheme lookup by identifier.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use sanscript_core::{parse_scheme_toml, Scheme, SchemeMap, Truncation};
use tracing::{debug, debug_span};

use crate::error::{RegistryError, TransliterateError};
use crate::table::BUILTIN;

/// A positional truncation found between two registered schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub from: String,
    pub to: String,
    pub truncation: Truncation,
}

#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: BTreeMap<String, Arc<Scheme>>,
}

impl SchemeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in scheme.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (id, toml) in BUILTIN {
            let (_, scheme) = parse_scheme_toml(toml).map_err(|source| RegistryError::Config {
                origin: format!("builtin {id}"),
                source,
            })?;
            registry.register(*id, scheme);
        }
        Ok(registry)
    }

    /// Get or initialize the shared built-in registry.
    pub fn global() -> &'static SchemeRegistry {
        static INSTANCE: OnceLock<SchemeRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::builtin().expect("built-in scheme tables must be valid"))
    }

    /// Add or replace the scheme stored under `id`.
    pub fn register(&mut self, id: impl Into<String>, scheme: Scheme) {
        self.schemes.insert(id.into(), Arc::new(scheme));
    }

    /// Parse a scheme table and register it under its `name`.
    pub fn load_toml(&mut self, toml_str: &str) -> Result<String, RegistryError> {
        let (name, scheme) = parse_scheme_toml(toml_str).map_err(|source| RegistryError::Config {
            origin: "<inline>".to_string(),
            source,
        })?;
        self.register(name.clone(), scheme);
        Ok(name)
    }

    /// Register every `*.toml` file in `dir`. Returns the number loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, RegistryError> {
        let _span = debug_span!("load_dir", dir = %dir.display()).entered();
        let io_err = |path: &Path, source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
            let path = entry.map_err(|e| io_err(dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let content = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
            let (name, scheme) =
                parse_scheme_toml(&content).map_err(|source| RegistryError::Config {
                    origin: path.display().to_string(),
                    source,
                })?;
            debug!(name = %name, path = %path.display(), "scheme loaded");
            self.register(name, scheme);
        }
        Ok(paths.len())
    }

    pub fn get(&self, id: &str) -> Result<&Arc<Scheme>, TransliterateError> {
        self.schemes
            .get(id)
            .ok_or_else(|| TransliterateError::UnknownScheme(id.to_string()))
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Every ordered scheme pair whose map would drop graphemes because a
    /// shared group has different lengths on the two sides.
    pub fn mismatches(&self) -> Vec<Mismatch> {
        let mut out = Vec::new();
        for (from_id, from) in &self.schemes {
            for (to_id, to) in &self.schemes {
                for truncation in SchemeMap::new(from, to).truncations() {
                    out.push(Mismatch {
                        from: from_id.clone(),
                        to: to_id.clone(),
                        truncation: truncation.clone(),
                    });
                }
            }
        }
        out
    }
}
