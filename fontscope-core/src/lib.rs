//! fontscope-core: reading the fine print of a Google Fonts link
//!
//! A css2 stylesheet URL already says everything about the fonts it loads:
//! which families, which weights, in which order. This library reads that
//! fine print back out, guesses what kind of face each family is, and lays
//! the result out as a preview page you can open in any browser.
//!
//! ## What lives here
//!
//! - **Decoding** ([`decode`]): `family=` parameters become [`FontRecord`]s,
//!   in URL order, always with at least one weight
//! - **Classification** ([`category`]): a keyword table maps family names
//!   to serif, monospace, display, handwriting or the sans-serif default
//! - **Presentation** ([`preview`], [`output`]): HTML pages, plain lines,
//!   columns, JSON and NDJSON
//! - **Presets** ([`presets`]): classic pairings ready to preview
//! - **Settings** ([`settings`], [`config`]): the theme flag and a small
//!   TOML config
//! - **Loading** (`stylesheet`, with the `fetch` feature): the stylesheet
//!   fetch raced against a timeout
//!
//! ## A quick look
//!
//! ```rust
//! use fontscope_core::category::classify;
//! use fontscope_core::decode::decode_font_url;
//! use fontscope_core::font::Category;
//!
//! let fonts = decode_font_url(
//!     "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700&family=Roboto+Mono&display=swap",
//! );
//!
//! assert_eq!(fonts.len(), 2);
//! assert_eq!(fonts[0].family, "Playfair Display");
//! assert_eq!(fonts[0].category, Category::Serif);
//! assert_eq!(fonts[1].weights[0].weight, "400");
//! assert_eq!(classify("Dancing Script"), Category::Handwriting);
//! ```
//!
//! Malformed URLs never panic: [`decode::decode_font_url`] logs them and
//! hands back an empty list, while [`decode::try_decode_font_url`] returns
//! the error for callers that want to show it.
//!
//! [`FontRecord`]: font::FontRecord

pub mod category;
pub mod config;
pub mod decode;
pub mod font;
pub mod output;
pub mod presets;
pub mod preview;
pub mod settings;
#[cfg(feature = "fetch")]
pub mod stylesheet;
