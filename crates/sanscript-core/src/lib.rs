//! Scheme model, cross-scheme mapping and the two transduction engines.
//!
//! This crate knows nothing about any concrete script. Character tables are
//! supplied by the caller as [`Scheme`] values, usually parsed from TOML with
//! [`parse_scheme_toml`].

pub mod engine;
pub mod options;
pub mod scheme;
pub mod scheme_map;

pub use engine::{BrahmicEngine, Engine, RomanEngine};
pub use options::{Options, OptionsError};
pub use scheme::{parse_scheme_toml, Group, Scheme, SchemeConfigError};
pub use scheme_map::{SchemeMap, Truncation};
