use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Group, Scheme};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemeConfig {
    name: String,
    roman: bool,
    groups: BTreeMap<String, GroupSpec>,
    #[serde(default)]
    synonyms: BTreeMap<String, Vec<String>>,
}

/// A group is either a whitespace-separated string or an explicit list.
/// Only the list form can carry empty graphemes.
#[derive(Deserialize)]
#[serde(untagged)]
enum GroupSpec {
    Words(String),
    List(Vec<String>),
}

impl GroupSpec {
    fn into_graphemes(self) -> Vec<String> {
        match self {
            Self::Words(s) => s.split_whitespace().map(str::to_string).collect(),
            Self::List(v) => v,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("scheme name is empty")]
    EmptyName,
}

/// Parse a scheme table. Returns the scheme's `name` alongside the scheme.
pub fn parse_scheme_toml(toml_str: &str) -> Result<(String, Scheme), SchemeConfigError> {
    let config: SchemeConfig =
        toml::from_str(toml_str).map_err(|e| SchemeConfigError::Parse(e.to_string()))?;

    if config.name.trim().is_empty() {
        return Err(SchemeConfigError::EmptyName);
    }

    let mut scheme = Scheme::new(config.roman);
    for (name, spec) in config.groups {
        scheme = scheme.with_group(Group::from_name(&name), spec.into_graphemes());
    }
    for (canonical, alternates) in config.synonyms {
        scheme = scheme.with_synonyms(canonical, alternates);
    }

    Ok((config.name, scheme))
}
