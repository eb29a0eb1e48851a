use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use sanscript::{transliterate_with_map, Options, SchemeRegistry, Transliterator};

use super::die;

/// Split a `key=v1,v2` argument into its key and values.
pub fn parse_option_arg(arg: &str) -> Result<(&str, Vec<&str>), String> {
    let (key, values) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {arg:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in {arg:?}"));
    }
    Ok((key, values.split(',').collect()))
}

/// Options from an optional TOML file, then each `key=values` override.
pub fn build_options(file: Option<&str>, overrides: &[String]) -> Result<Options, String> {
    let mut options = match file {
        Some(path) => {
            let content =
                fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
            Options::from_toml(&content).map_err(|e| format!("{path}: {e}"))?
        }
        None => Options::default(),
    };
    for arg in overrides {
        let (key, values) = parse_option_arg(arg)?;
        options.set(key, values).map_err(|e| e.to_string())?;
    }
    Ok(options)
}

/// Built-in schemes plus every table found in `scheme_dir`.
pub fn open_registry(scheme_dir: Option<&str>) -> SchemeRegistry {
    let mut registry = die!(SchemeRegistry::builtin(), "Error loading built-in schemes: {}");
    if let Some(dir) = scheme_dir {
        let n = die!(
            registry.load_dir(Path::new(dir)),
            "Error loading schemes from {dir}: {}"
        );
        eprintln!("Loaded {n} scheme(s) from {dir}");
    }
    registry
}

pub fn convert_cmd(
    registry: &SchemeRegistry,
    options: Options,
    from: &str,
    to: &str,
    text: Option<&str>,
) {
    let transliterator = Transliterator::new(registry).with_options(options);
    let map = die!(transliterator.scheme_map(from, to), "Error: {}");

    if let Some(text) = text {
        println!("{}", transliterate_with_map(text, &map, transliterator.options()));
        return;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in io::stdin().lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        let converted = transliterate_with_map(&line, &map, transliterator.options());
        die!(writeln!(out, "{converted}"), "Error writing output: {}");
    }
    die!(out.flush(), "Error writing output: {}");
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn option_arg_splits_values() {
        let (key, values) = parse_option_arg("togglers=%%,@@").unwrap();
        assert_eq!(key, "togglers");
        assert_eq!(values, ["%%", "@@"]);
    }

    #[test]
    fn option_arg_needs_equals() {
        assert!(parse_option_arg("togglers").is_err());
        assert!(parse_option_arg("=x").is_err());
    }

    #[test]
    fn overrides_apply_after_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "togglers = [\"%%\"]\nsuspend_on = [\"[\"]").unwrap();
        let path = file.path().to_str().unwrap();

        let options = build_options(Some(path), &["suspend_on={".to_string()]).unwrap();
        assert!(options.togglers.contains("%%"));
        assert!(options.suspend_on.contains(&'{'));
        assert!(!options.suspend_on.contains(&'['));
    }

    #[test]
    fn unknown_override_key_is_rejected() {
        let err = build_options(None, &["toggle=%%".to_string()]).unwrap_err();
        assert!(err.contains("toggle"));
    }
}
