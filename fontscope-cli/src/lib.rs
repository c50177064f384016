//! fontscope CLI

use std::env;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use serde::Serialize;

use fontscope_core::category::classify;
use fontscope_core::config;
use fontscope_core::decode::{build_stylesheet_url, decode_font_url, decode_many};
use fontscope_core::font::{Category, FontRecord};
use fontscope_core::output::{write_columns, write_json_pretty, write_ndjson, write_plain};
use fontscope_core::presets::{find_preset, presets, Preset};
use fontscope_core::preview::{render_preview, PreviewOptions};
use fontscope_core::settings::{load_theme, set_theme, toggle_theme, Theme, TomlSettingsStore};

pub mod logging;
pub mod server;

/// Set to `1` or `true` when the desktop prefers a dark colour scheme.
pub const PREFERS_DARK_ENV: &str = "FONTSCOPE_PREFERS_DARK";

/// CLI entrypoint for fontscope.
#[derive(Debug, Parser)]
#[command(
    name = "fontscope",
    version,
    about = "Decode, classify and preview Google Fonts stylesheet URLs"
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode stylesheet URLs into families, weights and categories
    Decode(DecodeArgs),
    /// Guess the category of family names
    Classify(ClassifyArgs),
    /// List the built-in font pairings
    Presets(PresetsArgs),
    /// Render an HTML preview page
    Preview(PreviewArgs),
    /// Print a normalized stylesheet URL plus per-family CSS snippets
    Link(LinkArgs),
    /// Show or change the persisted light/dark theme
    Theme(ThemeArgs),
    /// Serve previews over HTTP for a local browser
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct DecodeArgs {
    /// Stylesheet URLs (`-` reads newline-delimited URLs from STDIN)
    #[arg(value_hint = ValueHint::Url, required_unless_present = "stdin_urls")]
    urls: Vec<String>,

    /// Read newline-delimited URLs from STDIN
    #[arg(long = "stdin", action = ArgAction::SetTrue)]
    stdin_urls: bool,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with_all = ["ndjson", "columns"])]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue, conflicts_with = "columns")]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    /// Family names, e.g. "Roboto Mono" or Roboto+Mono
    #[arg(required = true)]
    names: Vec<String>,

    /// Emit a JSON array of {name, category}
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct PresetsArgs {
    /// Emit a JSON array
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct PreviewArgs {
    /// Stylesheet URL to preview
    #[arg(value_hint = ValueHint::Url, required_unless_present = "preset", conflicts_with = "preset")]
    url: Option<String>,

    /// Preview a built-in pairing by name instead of a URL
    #[arg(short = 'p', long = "preset")]
    preset: Option<String>,

    /// Sample text (defaults to the configured pangram)
    #[arg(short = 't', long = "text")]
    text: Option<String>,

    /// Write the page here instead of STDOUT
    #[arg(short = 'o', long = "output", value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Load the stylesheet first and report how that went
    #[arg(long = "fetch", action = ArgAction::SetTrue)]
    fetch: bool,

    /// Give up waiting for the stylesheet after this many milliseconds
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,

    /// Force a theme instead of the persisted one
    #[arg(long = "theme", value_enum)]
    theme: Option<ThemeChoice>,
}

#[derive(Debug, Args)]
struct LinkArgs {
    /// Stylesheet URL to normalize
    #[arg(value_hint = ValueHint::Url)]
    url: String,
}

#[derive(Debug, Args)]
struct ThemeArgs {
    #[arg(value_enum, default_value_t = ThemeAction::Show)]
    action: ThemeAction,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to bind (defaults to the configured one)
    #[arg(short = 'b', long = "bind")]
    bind: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

#[derive(Debug, Serialize)]
struct Classified<'a> {
    name: &'a str,
    category: Category,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Decode(args) => run_decode(args),
        Command::Classify(args) => run_classify(args),
        Command::Presets(args) => run_presets(args),
        Command::Preview(args) => run_preview(args),
        Command::Link(args) => run_link(args),
        Command::Theme(args) => run_theme(args),
        Command::Serve(args) => run_serve(args),
    }
}

fn run_decode(args: DecodeArgs) -> Result<()> {
    let stdin = io::stdin();
    let urls = gather_urls(&args.urls, args.stdin_urls, stdin.lock())?;
    let records = decode_all(&urls);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.ndjson {
        write_ndjson(&records, &mut handle)?;
    } else if args.json {
        write_json_pretty(&records, &mut handle)?;
    } else if args.columns {
        write_columns(&records, &mut handle, use_color)?;
    } else {
        write_plain(&records, &mut handle, use_color)?;
    }

    Ok(())
}

/// Decode every URL and concatenate the records, keeping input order.
fn decode_all(urls: &[String]) -> Vec<FontRecord> {
    if let [single] = urls {
        return decode_font_url(single);
    }
    decode_many(urls).into_iter().flatten().collect()
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let classified: Vec<Classified<'_>> = args
        .names
        .iter()
        .map(|name| Classified {
            name,
            category: classify(name),
        })
        .collect();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut handle, &classified)?;
        writeln!(handle)?;
    } else {
        for item in &classified {
            writeln!(handle, "{}\t{}", item.name, item.category)?;
        }
    }
    Ok(())
}

fn run_presets(args: PresetsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_presets(presets(), args.json, &mut handle)
}

fn write_presets(list: &[Preset], json: bool, mut w: impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut w, list)?;
        writeln!(w)?;
        return Ok(());
    }
    for preset in list {
        writeln!(w, "{}\n  {}\n  {}", preset.name, preset.description, preset.url)?;
    }
    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    let cfg = config::load_or_init()?;
    let url = resolve_preview_url(&args)?;

    let fetch = args.fetch || cfg.fetch_stylesheets;
    if fetch {
        fetch_stylesheet(&url, args.timeout_ms.unwrap_or(cfg.load_timeout_ms))?;
    }

    let records = decode_font_url(&url);
    let theme = match args.theme {
        Some(choice) => choice.into(),
        None => {
            let store = TomlSettingsStore::in_dir(&config::config_dir()?);
            load_theme(&store, system_prefers_dark())?
        }
    };

    let opts = PreviewOptions {
        stylesheet_url: Some(url),
        sample_text: args.text.clone().unwrap_or_else(|| cfg.sample_text.clone()),
        theme,
    };
    let html = render_preview(&records, &opts);

    match &args.output {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(families = records.len(), "wrote preview to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(html.as_bytes())?;
        }
    }
    Ok(())
}

fn resolve_preview_url(args: &PreviewArgs) -> Result<String> {
    if let Some(name) = &args.preset {
        return find_preset(name)
            .map(|p| p.url.to_string())
            .ok_or_else(|| anyhow!("unknown preset: {name} (see `fontscope presets`)"));
    }
    args.url
        .clone()
        .ok_or_else(|| anyhow!("a stylesheet URL or --preset is required"))
}

#[cfg(feature = "fetch")]
fn fetch_stylesheet(url: &str, timeout_ms: u64) -> Result<()> {
    use fontscope_core::stylesheet::StylesheetLoader;
    use std::time::Duration;

    let loader = StylesheetLoader::new(Duration::from_millis(timeout_ms))?;
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let outcome = runtime.block_on(loader.load(url));

    // Decoding goes ahead either way; only the log level differs.
    if outcome.proceed() {
        tracing::info!(outcome = outcome.label(), "{}", describe_load(&outcome, timeout_ms));
    } else {
        tracing::warn!(outcome = outcome.label(), "{}", describe_load(&outcome, timeout_ms));
    }
    Ok(())
}

#[cfg(feature = "fetch")]
fn describe_load(outcome: &fontscope_core::stylesheet::LoadOutcome, timeout_ms: u64) -> String {
    use fontscope_core::stylesheet::LoadOutcome;

    match outcome {
        LoadOutcome::Loaded { status, bytes } => {
            format!("stylesheet loaded (HTTP {status}, {bytes} bytes)")
        }
        LoadOutcome::TimedOut => {
            format!("stylesheet still loading after {timeout_ms} ms, previewing anyway")
        }
        LoadOutcome::Failed(reason) => {
            format!("stylesheet failed to load: {reason}; previewing anyway")
        }
    }
}

#[cfg(not(feature = "fetch"))]
fn fetch_stylesheet(_url: &str, _timeout_ms: u64) -> Result<()> {
    tracing::warn!("built without the fetch feature; skipping stylesheet load");
    Ok(())
}

fn run_link(args: LinkArgs) -> Result<()> {
    let records = decode_font_url(&args.url);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_link(&records, &mut handle)
}

fn write_link(records: &[FontRecord], mut w: impl Write) -> Result<()> {
    if records.is_empty() {
        return Err(anyhow!("no font families found in that URL"));
    }
    writeln!(w, "{}", build_stylesheet_url(records))?;
    for record in records {
        writeln!(w)?;
        writeln!(w, "{}", record.link_tag())?;
        writeln!(w, "{}", record.css_declaration())?;
    }
    Ok(())
}

fn run_theme(args: ThemeArgs) -> Result<()> {
    let dir = config::config_dir()?;
    let mut store = TomlSettingsStore::in_dir(&dir);
    let prefers_dark = system_prefers_dark();

    let theme = match args.action {
        ThemeAction::Show => load_theme(&store, prefers_dark)?,
        ThemeAction::Toggle => toggle_theme(&mut store, prefers_dark)?,
        ThemeAction::Light => {
            set_theme(&mut store, Theme::Light)?;
            Theme::Light
        }
        ThemeAction::Dark => {
            set_theme(&mut store, Theme::Dark)?;
            Theme::Dark
        }
    };

    println!("{theme}");
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let cfg = config::load_or_init()?;
    let bind = args.bind.clone().unwrap_or_else(|| cfg.bind.clone());
    let store = TomlSettingsStore::in_dir(&config::config_dir()?);
    let theme = load_theme(&store, system_prefers_dark())?;

    let state = server::AppState::new(&cfg, theme);
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(server::serve(&bind, state))
}

fn gather_urls(
    raw_urls: &[String],
    read_stdin: bool,
    mut stdin: impl BufRead,
) -> Result<Vec<String>> {
    let mut urls = Vec::new();

    if read_stdin {
        urls.extend(read_lines_from(&mut stdin)?);
    }

    for url in raw_urls {
        if url == "-" {
            urls.extend(read_lines_from(&mut stdin)?);
        } else {
            urls.push(url.clone());
        }
    }

    if urls.is_empty() {
        return Err(anyhow!("no stylesheet URLs provided"));
    }

    Ok(urls)
}

fn read_lines_from(reader: &mut impl BufRead) -> Result<Vec<String>> {
    let mut buf = String::new();
    let mut lines = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }

        let trimmed = buf.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    Ok(lines)
}

fn system_prefers_dark() -> bool {
    env::var(PREFERS_DARK_ENV)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "dark")
}

#[cfg(test)]
mod tests;
