//! Built-in scheme tables, embedded at compile time.
//!
//! Pairs that lose information: Bengali writes va and ba alike, Gurmukhi has
//! one letter for sha and ssa and no vocalic r/l signs, Tamil collapses the
//! aspirated and voiced stops. Round trips through these are not exact.

pub const BENGALI: &str = "bengali";
pub const DEVANAGARI: &str = "devanagari";
pub const GRANTHA: &str = "grantha";
pub const GUJARATI: &str = "gujarati";
pub const GURMUKHI: &str = "gurmukhi";
pub const KANNADA: &str = "kannada";
pub const MALAYALAM: &str = "malayalam";
pub const ORIYA: &str = "oriya";
pub const TAMIL: &str = "tamil";
pub const TELUGU: &str = "telugu";

pub const HK: &str = "hk";
pub const IAST: &str = "iast";
pub const ITRANS: &str = "itrans";
pub const SLP1: &str = "slp1";
pub const VELTHUIS: &str = "velthuis";
pub const WX: &str = "wx";

pub(crate) const BUILTIN: &[(&str, &str)] = &[
    (BENGALI, include_str!("schemes/bengali.toml")),
    (DEVANAGARI, include_str!("schemes/devanagari.toml")),
    (GRANTHA, include_str!("schemes/grantha.toml")),
    (GUJARATI, include_str!("schemes/gujarati.toml")),
    (GURMUKHI, include_str!("schemes/gurmukhi.toml")),
    (KANNADA, include_str!("schemes/kannada.toml")),
    (MALAYALAM, include_str!("schemes/malayalam.toml")),
    (ORIYA, include_str!("schemes/oriya.toml")),
    (TAMIL, include_str!("schemes/tamil.toml")),
    (TELUGU, include_str!("schemes/telugu.toml")),
    (HK, include_str!("schemes/hk.toml")),
    (IAST, include_str!("schemes/iast.toml")),
    (ITRANS, include_str!("schemes/itrans.toml")),
    (SLP1, include_str!("schemes/slp1.toml")),
    (VELTHUIS, include_str!("schemes/velthuis.toml")),
    (WX, include_str!("schemes/wx.toml")),
];

/// Returns the embedded TOML table for a built-in scheme.
pub fn builtin_toml(id: &str) -> Option<&'static str> {
    BUILTIN
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, toml)| *toml)
}
