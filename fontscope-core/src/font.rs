//! Font records decoded from a stylesheet URL

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Weight used whenever a `family` parameter carries no explicit list.
pub const DEFAULT_WEIGHT: &str = "400";

/// Coarse typographic bucket, doubling as the CSS generic fallback family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Serif,
    #[default]
    SansSerif,
    Monospace,
    Display,
    Handwriting,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Serif,
        Category::SansSerif,
        Category::Monospace,
        Category::Display,
        Category::Handwriting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Serif => "serif",
            Category::SansSerif => "sans-serif",
            Category::Monospace => "monospace",
            Category::Display => "display",
            Category::Handwriting => "handwriting",
        }
    }

    /// Short hint on where faces of this category tend to work.
    pub fn recommended_usage(self) -> &'static str {
        match self {
            Category::Serif => "Headings, editorial content, traditional or formal contexts",
            Category::SansSerif => "Body text, interfaces, modern and clean designs",
            Category::Display => "Large headings, logos, and decorative elements",
            Category::Handwriting => "Signatures, informal notes, creative contexts",
            Category::Monospace => "Code snippets, technical content, tabular data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeight {
    /// Literal token from the URL, usually `100`..`900`.
    pub weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl FontWeight {
    pub fn new(weight: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            style: None,
        }
    }

    /// Numeric value of the token, if it is one.
    pub fn numeric(&self) -> Option<u16> {
        self.weight.trim().parse().ok()
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    pub family: String,
    pub weights: Vec<FontWeight>,
    pub category: Category,
}

impl FontRecord {
    /// Weights ordered numerically; tokens that are not numbers keep their
    /// relative order and go last.
    pub fn sorted_weights(&self) -> Vec<&FontWeight> {
        let mut sorted: Vec<&FontWeight> = self.weights.iter().collect();
        sorted.sort_by(|a, b| match (a.numeric(), b.numeric()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        sorted
    }

    /// Middle weight of the sorted list, used for headings.
    pub fn mid_weight(&self) -> u16 {
        let numeric: Vec<u16> = self
            .sorted_weights()
            .iter()
            .filter_map(|w| w.numeric())
            .collect();
        if numeric.is_empty() {
            return 400;
        }
        numeric[numeric.len() / 2]
    }

    /// Regular if available, else whatever sits closest to it.
    pub fn body_weight(&self) -> u16 {
        self.weights
            .iter()
            .filter_map(FontWeight::numeric)
            .min_by_key(|w| (i32::from(*w) - 400).abs())
            .unwrap_or(400)
    }

    /// `font-family` declaration with the category as generic fallback.
    pub fn css_declaration(&self) -> String {
        format!("font-family: '{}', {};", self.family, self.category)
    }

    /// Stylesheet `<link>` that loads exactly this family and its weights.
    pub fn link_tag(&self) -> String {
        format!(
            "<link href=\"https://fonts.googleapis.com/css2?family={}&display=swap\" rel=\"stylesheet\">",
            self.family_param()
        )
    }

    /// The `family` query value for this record (`Name+Words:wght@a;b`).
    ///
    /// Family and weight tokens are form-encoded so reserved characters
    /// (`&`, `#`, `%`, `;`, `=`) survive a decode of the built URL.
    pub fn family_param(&self) -> String {
        let weights: Vec<String> = self.weights.iter().map(|w| form_encode(&w.weight)).collect();
        format!("{}:wght@{}", form_encode(&self.family), weights.join(";"))
    }
}

fn form_encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Human label for a weight token.
pub fn weight_description(weight: &FontWeight) -> &'static str {
    let Some(value) = weight.numeric() else {
        return "Custom weight";
    };
    match value {
        0..=299 => "Light / Thin weight",
        300..=399 => "Light weight",
        400..=499 => "Regular weight",
        500..=599 => "Medium weight",
        600..=699 => "Semi-bold weight",
        700..=799 => "Bold weight",
        _ => "Extra bold / Black weight",
    }
}
