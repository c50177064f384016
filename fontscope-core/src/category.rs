//! Keyword-based category guessing for family names

use std::sync::OnceLock;

use regex::Regex;

use crate::font::Category;

/// Ordered rule table; the first list with a hit decides the category.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Serif,
        &[
            "serif",
            "georgia",
            "times",
            "garamond",
            "baskerville",
            "didot",
            "bodoni",
            "caslon",
            "playfair",
            "merriweather",
        ],
    ),
    (
        Category::Monospace,
        &[
            "mono",
            "code",
            "console",
            "terminal",
            "courier",
            "fira code",
            "source code",
            "menlo",
            "consolas",
        ],
    ),
    (
        Category::Display,
        &["display", "black", "poster", "headline", "decorative"],
    ),
    (
        Category::Handwriting,
        &[
            "script",
            "hand",
            "brush",
            "calligraphy",
            "cursive",
            "dancing",
            "pacifico",
        ],
    ),
];

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s+_\-]+").expect("static separator pattern"))
}

/// Lower-case a family name and collapse `+`, `_`, `-` and whitespace runs
/// into single spaces.
pub fn normalize_family(name: &str) -> String {
    let lowered = name.to_lowercase();
    separators()
        .replace_all(lowered.trim(), " ")
        .trim()
        .to_string()
}

/// Guess the category of a family name. Falls back to sans-serif.
pub fn classify(family: &str) -> Category {
    let normalized = normalize_family(family);
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}

/// The keywords tested for `category`, in table order. Sans-serif has none.
pub fn keywords(category: Category) -> &'static [&'static str] {
    RULES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, k)| *k)
        .unwrap_or(&[])
}
