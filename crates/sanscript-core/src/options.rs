//! Per-call transduction options.
//!
//! There is no process-wide option state: every call receives an
//! [`Options`] value, and [`Options::default`] rebuilds the constant defaults.

use std::collections::BTreeSet;

use serde::Deserialize;

pub const DEFAULT_TOGGLER: &str = "##";
pub const DEFAULT_SUSPEND_ON: char = '<';
pub const DEFAULT_SUSPEND_OFF: char = '>';

const KEYS: [&str; 3] = ["togglers", "suspend_on", "suspend_off"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Options {
    /// Paired tokens that switch translation off and on. Dropped from output.
    pub togglers: BTreeSet<String>,
    /// Markers that switch translation off. Kept in output.
    pub suspend_on: BTreeSet<char>,
    /// Markers that switch translation back on. Kept in output.
    pub suspend_off: BTreeSet<char>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            togglers: BTreeSet::from([DEFAULT_TOGGLER.to_string()]),
            suspend_on: BTreeSet::from([DEFAULT_SUSPEND_ON]),
            suspend_off: BTreeSet::from([DEFAULT_SUSPEND_OFF]),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("unrecognized option: {0}")]
    UnknownKey(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("TOML parse error: {0}")]
    Parse(String),
}

impl Options {
    /// Build options from `(key, values)` pairs on top of the defaults.
    ///
    /// Each given key replaces its default set entirely.
    pub fn from_pairs<I, K, V, S>(pairs: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, values) in pairs {
            options.set(key.as_ref(), values)?;
        }
        Ok(options)
    }

    /// Replace the set named `key` with `values`.
    pub fn set<V, S>(&mut self, key: &str, values: V) -> Result<(), OptionsError>
    where
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = values.into_iter().map(|s| s.as_ref().to_string()).collect();
        match key {
            "togglers" => self.togglers = values.into_iter().collect(),
            "suspend_on" => self.suspend_on = to_markers(key, &values)?,
            "suspend_off" => self.suspend_off = to_markers(key, &values)?,
            _ => return Err(OptionsError::UnknownKey(key.to_string())),
        }
        self.validate()
    }

    /// Parse options from TOML. Omitted keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, OptionsError> {
        let table: toml::Table =
            toml::from_str(toml_str).map_err(|e| OptionsError::Parse(e.to_string()))?;
        if let Some(key) = table.keys().find(|k| !KEYS.contains(&k.as_str())) {
            return Err(OptionsError::UnknownKey(key.clone()));
        }
        let options: Self = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| OptionsError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Length in characters of the longest toggler.
    pub fn longest_toggler(&self) -> usize {
        self.togglers
            .iter()
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if self.togglers.iter().any(String::is_empty) {
            return Err(OptionsError::InvalidValue {
                field: "togglers".to_string(),
                reason: "toggler must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn to_markers(field: &str, values: &[String]) -> Result<BTreeSet<char>, OptionsError> {
    values
        .iter()
        .map(|v| {
            let mut chars = v.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(OptionsError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("marker must be a single character, got {v:?}"),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = Options::default();
        assert_eq!(o.togglers, BTreeSet::from(["##".to_string()]));
        assert_eq!(o.suspend_on, BTreeSet::from(['<']));
        assert_eq!(o.suspend_off, BTreeSet::from(['>']));
        assert_eq!(o.longest_toggler(), 2);
    }

    #[test]
    fn pairs_replace_whole_set() {
        let o = Options::from_pairs([("suspend_on", vec!["{", "["])]).unwrap();
        assert_eq!(o.suspend_on, BTreeSet::from(['{', '[']));
        assert_eq!(o.suspend_off, BTreeSet::from(['>']));
        assert_eq!(o.togglers, BTreeSet::from(["##".to_string()]));
    }

    #[test]
    fn pairs_can_clear_a_set() {
        let o = Options::from_pairs([("togglers", Vec::<&str>::new())]).unwrap();
        assert!(o.togglers.is_empty());
        assert_eq!(o.longest_toggler(), 0);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Options::from_pairs([("toggler", vec!["##"])]).unwrap_err();
        assert!(matches!(err, OptionsError::UnknownKey(ref k) if k == "toggler"));
    }

    #[test]
    fn multi_char_marker_is_rejected() {
        let err = Options::from_pairs([("suspend_off", vec![">>"])]).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue { .. }));
    }

    #[test]
    fn empty_toggler_is_rejected() {
        let err = Options::from_pairs([("togglers", vec![""])]).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue { .. }));
    }

    #[test]
    fn from_toml_partial() {
        let o = Options::from_toml("togglers = [\"%%\", \"@@@\"]\n").unwrap();
        assert_eq!(o.togglers.len(), 2);
        assert_eq!(o.longest_toggler(), 3);
        assert_eq!(o.suspend_on, BTreeSet::from(['<']));
    }

    #[test]
    fn from_toml_markers() {
        let o = Options::from_toml("suspend_on = [\"{\"]\nsuspend_off = [\"}\"]\n").unwrap();
        assert_eq!(o.suspend_on, BTreeSet::from(['{']));
        assert_eq!(o.suspend_off, BTreeSet::from(['}']));
    }

    #[test]
    fn from_toml_unknown_key() {
        let err = Options::from_toml("verbose = true\n").unwrap_err();
        assert!(matches!(err, OptionsError::UnknownKey(ref k) if k == "verbose"));
    }

    #[test]
    fn from_toml_bad_marker() {
        let err = Options::from_toml("suspend_on = [\"<<\"]\n").unwrap_err();
        assert!(matches!(err, OptionsError::Parse(_)));
    }

    #[test]
    fn from_toml_invalid() {
        let err = Options::from_toml("togglers = ").unwrap_err();
        assert!(matches!(err, OptionsError::Parse(_)));
    }
}
