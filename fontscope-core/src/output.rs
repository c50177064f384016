//! Streaming output helpers

use std::io::Write;

use anyhow::Result;

use crate::font::FontRecord;

/// Write records as prettified JSON array.
pub fn write_json_pretty(records: &[FontRecord], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Write records as newline-delimited JSON (NDJSON).
pub fn write_ndjson(records: &[FontRecord], mut w: impl Write) -> Result<()> {
    for item in records {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// One line per record: `Family  [category]  400, 700`.
pub fn write_plain(records: &[FontRecord], mut w: impl Write, color: bool) -> Result<()> {
    for item in records {
        let family = apply_color(&item.family, color, AnsiColor::Cyan);
        let category = apply_color(&format!("[{}]", item.category), color, AnsiColor::Yellow);
        writeln!(w, "{family}  {category}  {}", joined_weights(item))?;
    }
    Ok(())
}

/// Padded columns, widths clamped so one silly family name cannot blow up a row.
pub fn write_columns(records: &[FontRecord], mut w: impl Write, color: bool) -> Result<()> {
    let family_width = records
        .iter()
        .map(|r| r.family.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(0, 60);
    let category_width = records
        .iter()
        .map(|r| r.category.as_str().len())
        .max()
        .unwrap_or(0);

    for item in records {
        let padded_family = format!("{:<family_width$}", item.family);
        let padded_category = format!("{:<category_width$}", item.category.as_str());
        let weights = format!("{:<2} weights: {}", item.weights.len(), joined_weights(item));

        let rendered_family = apply_color(&padded_family, color, AnsiColor::Cyan);
        let rendered_category = apply_color(&padded_category, color, AnsiColor::Yellow);
        let rendered_weights = apply_color(&weights, color, AnsiColor::Green);

        writeln!(w, "{rendered_family}  {rendered_category}  {rendered_weights}")?;
    }

    Ok(())
}

fn joined_weights(record: &FontRecord) -> String {
    record
        .weights
        .iter()
        .map(|w| w.weight.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
