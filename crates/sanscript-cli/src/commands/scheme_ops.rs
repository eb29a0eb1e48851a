use std::fs;
use std::process;

use serde::Serialize;

use sanscript::{parse_scheme_toml, table, Mismatch, SchemeRegistry};

use super::die;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SchemeSummary {
    pub id: String,
    pub kind: &'static str,
}

pub fn summaries(registry: &SchemeRegistry) -> Vec<SchemeSummary> {
    registry
        .ids()
        .filter_map(|id| {
            let scheme = registry.get(id).ok()?;
            Some(SchemeSummary {
                id: id.to_string(),
                kind: if scheme.is_roman() { "roman" } else { "brahmic" },
            })
        })
        .collect()
}

pub fn list_cmd(registry: &SchemeRegistry, json: bool) {
    let list = summaries(registry);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&list), "JSON serialization failed: {}")
        );
        return;
    }
    for s in &list {
        println!("{:<12} {}", s.id, s.kind);
    }
}

pub fn export_cmd(id: &str) {
    match table::builtin_toml(id) {
        Some(toml) => print!("{toml}"),
        None => {
            eprintln!("Error: no built-in scheme named {id:?}");
            process::exit(1);
        }
    }
}

pub fn validate_cmd(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let (name, scheme) = die!(parse_scheme_toml(&content), "Error: {}");
    let kind = if scheme.is_roman() { "roman" } else { "brahmic" };
    println!("OK: {name} ({kind})");
    for (group, graphemes) in scheme.groups() {
        println!("  {:<22} {}", group.name(), graphemes.len());
    }
}

/// One line per truncating pair, grouped as `from -> to`.
pub fn format_mismatches(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(|m| {
            format!(
                "{} -> {}: {} has {} vs {}\n",
                m.from,
                m.to,
                m.truncation.group.name(),
                m.truncation.from_len,
                m.truncation.to_len
            )
        })
        .collect()
}

pub fn check_cmd(registry: &SchemeRegistry) {
    let mismatches = registry.mismatches();
    if mismatches.is_empty() {
        println!("OK: {} schemes, all groups aligned", registry.len());
        return;
    }
    print!("{}", format_mismatches(&mismatches));
    eprintln!("{} truncating group pair(s)", mismatches.len());
    process::exit(1);
}
