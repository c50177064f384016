//! Google Fonts stylesheet URL decoding

use rayon::prelude::*;
use thiserror::Error;
use url::Url;

use crate::category::classify;
use crate::font::{FontRecord, FontWeight};

/// Base used when re-encoding records into a stylesheet link.
pub const CSS2_ENDPOINT: &str = "https://fonts.googleapis.com/css2";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed font URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Decode every `family` parameter of `input`, in URL order.
///
/// Malformed input is logged and yields no records.
pub fn decode_font_url(input: &str) -> Vec<FontRecord> {
    match try_decode_font_url(input) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!("error parsing font URL: {err}");
            Vec::new()
        }
    }
}

/// Like [`decode_font_url`] but hands the parse failure back to the caller.
pub fn try_decode_font_url(input: &str) -> Result<Vec<FontRecord>, DecodeError> {
    let url = Url::parse(input.trim()).map_err(|source| DecodeError::InvalidUrl {
        input: input.to_string(),
        source,
    })?;

    let records: Vec<FontRecord> = url
        .query_pairs()
        .filter(|(key, _)| key == "family")
        .map(|(_, value)| decode_family_param(&value))
        .collect();

    tracing::debug!(families = records.len(), "decoded font URL");
    Ok(records)
}

/// Decode a single `family` value such as `Roboto+Mono:wght@400;700`.
pub fn decode_family_param(value: &str) -> FontRecord {
    let (family_token, weight_spec) = match value.split_once(':') {
        Some((family, spec)) => (family, Some(spec)),
        None => (value, None),
    };

    let family = family_token.replace('+', " ");

    let mut weights: Vec<FontWeight> = weight_spec
        .and_then(|spec| spec.split('@').nth(1))
        .map(|list| {
            list.split(';')
                .filter(|token| !token.is_empty())
                .map(FontWeight::new)
                .collect()
        })
        .unwrap_or_default();

    if weights.is_empty() {
        weights.push(FontWeight::default());
    }

    let category = classify(&family);
    FontRecord {
        family,
        weights,
        category,
    }
}

/// Decode a batch of URLs in parallel; the result lines up with `inputs`.
pub fn decode_many(inputs: &[String]) -> Vec<Vec<FontRecord>> {
    inputs.par_iter().map(|u| decode_font_url(u)).collect()
}

/// Re-encode records into one css2 stylesheet URL with `display=swap`.
pub fn build_stylesheet_url(records: &[FontRecord]) -> String {
    let mut out = String::from(CSS2_ENDPOINT);
    for (i, record) in records.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        out.push_str("family=");
        out.push_str(&record.family_param());
    }
    out.push(if records.is_empty() { '?' } else { '&' });
    out.push_str("display=swap");
    out
}
