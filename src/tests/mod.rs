
use crate::{transliterate, Options};

fn tr(text: &str, from: &str, to: &str) -> String {
    transliterate(text, from, to, &Options::default()).unwrap()
}
