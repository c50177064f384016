//! Standalone HTML preview pages
//!
//! The page loads the submitted stylesheet itself, so the browser does the
//! actual font rendering; we only lay out family cards, weight samples and a
//! small type scale around the decoded records.

use url::form_urlencoded;

use crate::config::DEFAULT_SAMPLE_TEXT;
use crate::font::{weight_description, FontRecord};
use crate::presets::{Preset, EXAMPLE_URL};
use crate::settings::Theme;

/// Shown on weight cards when the user left the sample text empty.
pub const WEIGHT_PLACEHOLDER: &str = "Aa Bb Cc 123";

const TYPE_SCALE: [(&str, &str, ScaleWeight); 7] = [
    ("H1", "3rem", ScaleWeight::Heading),
    ("H2", "2.25rem", ScaleWeight::Heading),
    ("H3", "1.875rem", ScaleWeight::Heading),
    ("H4", "1.5rem", ScaleWeight::Heading),
    ("H5", "1.25rem", ScaleWeight::Heading),
    ("Body", "1rem", ScaleWeight::Body),
    ("Small", "0.875rem", ScaleWeight::Body),
];

#[derive(Clone, Copy)]
enum ScaleWeight {
    Heading,
    Body,
}

#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Stylesheet to `<link>`; `None` renders with fallbacks only.
    pub stylesheet_url: Option<String>,
    pub sample_text: String,
    pub theme: Theme,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            stylesheet_url: None,
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            theme: Theme::Light,
        }
    }
}

impl PreviewOptions {
    fn sample(&self) -> &str {
        if self.sample_text.trim().is_empty() {
            DEFAULT_SAMPLE_TEXT
        } else {
            &self.sample_text
        }
    }
}

/// Render the full preview document for `records`.
pub fn render_preview(records: &[FontRecord], opts: &PreviewOptions) -> String {
    let mut body = String::new();
    if records.is_empty() {
        body.push_str("<p class=\"empty\">No font families found in that URL.</p>\n");
    }
    for record in records {
        body.push_str(&render_family(record, opts));
    }

    let head_link = opts
        .stylesheet_url
        .as_deref()
        .map(|href| format!("<link rel=\"stylesheet\" href=\"{}\">\n", escape_html(href)))
        .unwrap_or_default();

    page("FontScope preview", opts.theme, &head_link, &body)
}

/// Landing page: URL form plus the preset catalogue.
pub fn render_index(presets: &[Preset], theme: Theme) -> String {
    let mut body = String::new();
    body.push_str("<form action=\"/preview\" method=\"get\">\n");
    body.push_str(&format!(
        "<label for=\"url\">Google Fonts URL</label>\n<input id=\"url\" name=\"url\" type=\"text\" placeholder=\"{}\">\n",
        escape_html("https://fonts.googleapis.com/css2?family=...")
    ));
    body.push_str(&format!(
        "<input name=\"text\" type=\"text\" value=\"{}\">\n<button type=\"submit\">Preview</button>\n</form>\n",
        escape_html(DEFAULT_SAMPLE_TEXT)
    ));
    body.push_str(&format!(
        "<p>Paste a Google Fonts URL like: <code>{}</code></p>\n",
        escape_html(&truncate(EXAMPLE_URL, 60))
    ));

    body.push_str("<h2>Classic Font Combinations</h2>\n<ul class=\"presets\">\n");
    for preset in presets {
        body.push_str(&format!(
            "<li><a href=\"/preview?url={}\">{}</a><div>{}</div></li>\n",
            encode_query(preset.url),
            escape_html(preset.name),
            escape_html(preset.description)
        ));
    }
    body.push_str("</ul>\n");

    page("FontScope", theme, "", &body)
}

fn render_family(record: &FontRecord, opts: &PreviewOptions) -> String {
    let face = escape_html(&font_stack(record));
    let family = escape_html(&record.family);
    let sorted = record.sorted_weights();
    let available: Vec<&str> = sorted.iter().map(|w| w.weight.as_str()).collect();

    let mut out = String::new();
    out.push_str("<section class=\"family\">\n");
    out.push_str(&format!("<h2 style=\"font-family: {face}\">{family}</h2>\n"));
    out.push_str(&format!(
        "<ul class=\"info\"><li><strong>Family:</strong> {family}</li><li><strong>Available weights:</strong> {}</li><li><strong>Recommended usage:</strong> {}</li></ul>\n",
        escape_html(&available.join(", ")),
        record.category.recommended_usage()
    ));
    out.push_str(&format!(
        "<pre class=\"snippet\"><code>{}</code>\n<code>{}</code></pre>\n",
        escape_html(&record.link_tag()),
        escape_html(&record.css_declaration())
    ));
    out.push_str(&format!(
        "<p class=\"sample\" style=\"font-family: {face}\">{}</p>\n",
        escape_html(opts.sample())
    ));

    out.push_str("<div class=\"weights\">\n");
    for weight in &sorted {
        let sample = if opts.sample_text.trim().is_empty() {
            WEIGHT_PLACEHOLDER.to_string()
        } else {
            truncate(&opts.sample_text, 30)
        };
        let value = escape_html(&weight.weight);
        out.push_str(&format!(
            "<div class=\"weight\"><div class=\"label\">Weight: {value}</div><div style=\"font-family: {face}; font-weight: {value}\">{}</div><div class=\"desc\">{}</div></div>\n",
            escape_html(&sample),
            weight_description(weight)
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"scale\">\n");
    for (idx, (label, size, kind)) in TYPE_SCALE.iter().enumerate() {
        let weight = match kind {
            ScaleWeight::Heading => record.mid_weight(),
            ScaleWeight::Body => record.body_weight(),
        };
        let max_len = 50usize.saturating_sub(idx * 5).max(10);
        out.push_str(&format!(
            "<div class=\"step\"><span class=\"label\">{label}</span><div style=\"font-family: {face}; font-size: {size}; font-weight: {weight}\">{}</div></div>\n",
            escape_html(&truncate(opts.sample(), max_len))
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn font_stack(record: &FontRecord) -> String {
    format!("'{}', {}", escape_css_string(&record.family), record.category)
}

/// Make `input` safe inside a single-quoted CSS string. HTML escaping alone
/// is not enough in a `style` attribute: entities are decoded before CSS
/// parsing.
fn escape_css_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars().filter(|c| !c.is_control()) {
        if matches!(ch, '\'' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn page(title: &str, theme: Theme, head_extra: &str, body: &str) -> String {
    let class = if theme.is_dark() { " class=\"dark\"" } else { "" };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"{class}>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{head_extra}<style>{STYLE}</style>\n</head>\n<body>\n<header><h1>FontScope</h1><p>Visualize and explore Google Fonts with ease</p></header>\n<main>\n{body}</main>\n<footer><p>FontScope - A beautiful way to preview and explore Google Fonts</p></footer>\n</body>\n</html>\n",
        escape_html(title)
    )
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0 auto;max-width:960px;padding:1rem;background:#fff;color:#111}\
html.dark body{background:#111827;color:#f3f4f6}\
.family{border-radius:8px;box-shadow:0 1px 4px rgba(0,0,0,.15);padding:1rem;margin:1.5rem 0}\
.weights{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:.75rem}\
.label,.desc{font-size:.8rem;opacity:.7}\
.snippet{overflow-x:auto;font-size:.75rem}";

/// Cut `text` to `max` characters, appending `...` when something was dropped.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max).collect();
    format!("{kept}...")
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn encode_query(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
