use super::*;
use std::io::Cursor;

const PAIR: &str = "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700&family=Roboto+Mono&display=swap";

#[test]
fn parses_decode_args() {
    let cli = Cli::try_parse_from(["fontscope", "decode", "--json", PAIR]).expect("parse cli");

    let Command::Decode(args) = cli.command else {
        panic!("expected decode command");
    };
    assert!(args.json);
    assert!(!args.ndjson);
    assert_eq!(args.urls, vec![PAIR.to_string()]);
}

#[test]
fn json_and_ndjson_conflict() {
    let parse = Cli::try_parse_from(["fontscope", "decode", "--json", "--ndjson", PAIR]);
    assert!(parse.is_err());
}

#[test]
fn decode_requires_a_url_or_stdin() {
    assert!(Cli::try_parse_from(["fontscope", "decode"]).is_err());
    assert!(Cli::try_parse_from(["fontscope", "decode", "--stdin"]).is_ok());
}

#[test]
fn verbose_flag_is_global_and_counted() {
    let cli = Cli::try_parse_from(["fontscope", "classify", "-vv", "Inter"]).expect("parse");
    assert_eq!(cli.verbose, 2);
}

#[test]
fn preview_takes_url_or_preset_not_both() {
    assert!(Cli::try_parse_from(["fontscope", "preview"]).is_err());
    assert!(Cli::try_parse_from(["fontscope", "preview", "--preset", "Raleway + Lato"]).is_ok());
    assert!(Cli::try_parse_from(["fontscope", "preview", "--preset", "Raleway + Lato", PAIR]).is_err());
}

#[test]
fn resolves_preset_urls() {
    let cli = Cli::try_parse_from(["fontscope", "preview", "-p", "roboto + roboto mono"])
        .expect("parse");
    let Command::Preview(args) = cli.command else {
        panic!("expected preview command");
    };
    let url = resolve_preview_url(&args).expect("preset url");
    assert!(url.contains("family=Roboto+Mono"));

    let cli = Cli::try_parse_from(["fontscope", "preview", "-p", "nope"]).expect("parse");
    let Command::Preview(args) = cli.command else {
        panic!("expected preview command");
    };
    assert!(resolve_preview_url(&args).is_err());
}

#[test]
fn theme_action_defaults_to_show() {
    let cli = Cli::try_parse_from(["fontscope", "theme"]).expect("parse");
    let Command::Theme(args) = cli.command else {
        panic!("expected theme command");
    };
    assert_eq!(args.action, ThemeAction::Show);
}

#[test]
fn gathers_urls_from_stdin_when_flagged() {
    let mut stdin = Cursor::new(b"https://a.example/css2?family=A\n\nhttps://b.example/css2?family=B\n".to_vec());
    let urls = gather_urls(&[], true, &mut stdin).expect("urls");

    assert_eq!(
        urls,
        vec![
            "https://a.example/css2?family=A".to_string(),
            "https://b.example/css2?family=B".to_string()
        ]
    );
}

#[test]
fn dash_reads_stdin_in_place() {
    let mut stdin = Cursor::new(b"https://b.example/css2?family=B\n".to_vec());
    let urls = gather_urls(
        &["https://a.example/css2?family=A".to_string(), "-".to_string()],
        false,
        &mut stdin,
    )
    .expect("urls");
    assert_eq!(urls.len(), 2);
    assert!(urls[1].ends_with("family=B"));
}

#[test]
fn empty_input_is_an_error() {
    let mut stdin = Cursor::new(Vec::new());
    assert!(gather_urls(&[], true, &mut stdin).is_err());
}

#[test]
fn decode_all_concatenates_in_order_and_skips_garbage() {
    let urls = vec![
        "https://fonts.googleapis.com/css2?family=Lora".to_string(),
        "garbage".to_string(),
        PAIR.to_string(),
    ];
    let families: Vec<String> = decode_all(&urls).into_iter().map(|r| r.family).collect();
    assert_eq!(families, vec!["Lora", "Playfair Display", "Roboto Mono"]);
}

#[test]
fn link_output_lists_each_family() {
    let mut buf = Cursor::new(Vec::new());
    write_link(&decode_font_url(PAIR), &mut buf).expect("write");
    let output = String::from_utf8(buf.into_inner()).expect("utf8");

    let mut lines = output.lines();
    assert_eq!(
        lines.next(),
        Some("https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700&family=Roboto+Mono:wght@400&display=swap")
    );
    assert!(output.contains("font-family: 'Roboto Mono', monospace;"));

    let mut empty = Cursor::new(Vec::new());
    assert!(write_link(&[], &mut empty).is_err());
}

#[test]
fn presets_plain_output_has_three_lines_each() {
    let mut buf = Cursor::new(Vec::new());
    write_presets(&presets()[..2], false, &mut buf).expect("write");
    let output = String::from_utf8(buf.into_inner()).expect("utf8");
    assert_eq!(output.lines().count(), 6);
    assert!(output.starts_with("Playfair Display + Source Sans Pro\n"));
}

#[test]
fn parses_dark_preference_flags() {
    for raw in ["1", "true", " TRUE ", "dark"] {
        assert!(parse_flag(raw), "{raw}");
    }
    for raw in ["", "0", "false", "light"] {
        assert!(!parse_flag(raw), "{raw}");
    }
}

#[cfg(feature = "fetch")]
#[test]
fn load_outcomes_are_described_for_the_log() {
    use fontscope_core::stylesheet::LoadOutcome;

    let loaded = LoadOutcome::Loaded { status: 200, bytes: 512 };
    assert!(loaded.proceed());
    assert_eq!(describe_load(&loaded, 2000), "stylesheet loaded (HTTP 200, 512 bytes)");

    assert!(LoadOutcome::TimedOut.proceed());
    assert!(describe_load(&LoadOutcome::TimedOut, 1500).contains("after 1500 ms"));

    let failed = LoadOutcome::Failed("GET x returned HTTP 404".to_string());
    assert!(!failed.proceed());
    assert_eq!(
        describe_load(&failed, 2000),
        "stylesheet failed to load: GET x returned HTTP 404; previewing anyway"
    );
}
