use std::fs;
use std::path::Path;

fn main() {
    // Validate embedded scheme tables at compile time.
    let dir = Path::new("src/schemes");
    println!("cargo:rerun-if-changed={}", dir.display());
    let entries = fs::read_dir(dir).unwrap_or_else(|e| panic!("{}: {e}", dir.display()));
    for entry in entries {
        let path = entry.expect("readable scheme directory entry").path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
            validate_toml(&path, &content);
        }
    }
}

fn validate_toml(path: &Path, content: &str) {
    let value = match content.parse::<toml::Table>() {
        Ok(v) => v,
        Err(e) => panic!("{} contains invalid TOML: {e}", path.display()),
    };
    for key in ["name", "roman", "groups"] {
        if !value.contains_key(key) {
            panic!("{} is missing `{key}`", path.display());
        }
    }
}
