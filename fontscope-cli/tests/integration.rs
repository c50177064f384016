use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::tempdir;

const PAIR: &str = "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700&family=Roboto+Mono&display=swap";

fn fontscope(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fontscope"));
    cmd.env("FONTSCOPE_CONFIG_DIR", config_dir)
        .env_remove("FONTSCOPE_PREFERS_DARK")
        .env_remove("FONTSCOPE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn decode_prints_one_line_per_family() {
    let dir = tempdir().unwrap();
    let output = fontscope(dir.path())
        .args(["decode", "--color", "always", PAIR])
        .output()
        .expect("run fontscope");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout:\n{stdout}");
    assert!(lines[0].contains("Playfair Display"));
    assert!(lines[0].contains("400, 700"));
    assert!(lines[1].contains("[monospace]"));
}

#[test]
fn decode_json_matches_record_shape() {
    let dir = tempdir().unwrap();
    let output = fontscope(dir.path())
        .args(["decode", "--json", PAIR])
        .output()
        .expect("run fontscope");
    assert_success(&output);

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("parse json output");
    let arr = parsed.as_array().expect("decode --json returns a JSON array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["family"], "Playfair Display");
    assert_eq!(arr[0]["category"], "serif");
    assert_eq!(arr[1]["weights"][0]["weight"], "400");
    assert!(arr[1]["weights"][0].get("style").is_none());
}

#[test]
fn malformed_url_is_logged_not_fatal() {
    let dir = tempdir().unwrap();
    let output = fontscope(dir.path())
        .args(["decode", "--ndjson", "fonts.googleapis.com/css2?family=Inter"])
        .output()
        .expect("run fontscope");
    assert_success(&output);

    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error parsing font URL"), "stderr: {stderr}");
}

#[test]
fn decode_reads_urls_from_stdin() {
    let dir = tempdir().unwrap();
    let mut child = fontscope(dir.path())
        .args(["decode", "--ndjson", "--stdin"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn fontscope");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        writeln!(stdin, "https://fonts.googleapis.com/css2?family=Lora").unwrap();
        writeln!(stdin, "{PAIR}").unwrap();
    }
    let output = child.wait_with_output().expect("wait");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let families: Vec<String> = stdout
        .lines()
        .map(|line| {
            let v: Value = serde_json::from_str(line).expect("json line");
            v["family"].as_str().unwrap_or_default().to_string()
        })
        .collect();
    assert_eq!(families, vec!["Lora", "Playfair Display", "Roboto Mono"]);
}

#[test]
fn classify_prints_tab_separated_categories() {
    let dir = tempdir().unwrap();
    let output = fontscope(dir.path())
        .args(["classify", "Roboto Mono", "Dancing+Script", "Inter"])
        .output()
        .expect("run fontscope");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Roboto Mono\tmonospace\nDancing+Script\thandwriting\nInter\tsans-serif\n"
    );
}

#[test]
fn presets_json_lists_all_pairings() {
    let dir = tempdir().unwrap();
    let output = fontscope(dir.path())
        .args(["presets", "--json"])
        .output()
        .expect("run fontscope");
    assert_success(&output);

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(20));
}

#[test]
fn preview_writes_html_file_with_persisted_theme() {
    let dir = tempdir().unwrap();
    let page = dir.path().join("preview.html");

    let toggled = fontscope(dir.path())
        .args(["theme", "toggle"])
        .output()
        .expect("run fontscope");
    assert_success(&toggled);
    assert_eq!(String::from_utf8_lossy(&toggled.stdout).trim(), "dark");

    let output = fontscope(dir.path())
        .args(["preview", "--text", "Sphinx of black quartz"])
        .arg("--output")
        .arg(&page)
        .arg(PAIR)
        .output()
        .expect("run fontscope");
    assert_success(&output);

    let html = fs::read_to_string(&page).expect("preview written");
    assert!(html.contains("<html lang=\"en\" class=\"dark\">"));
    assert!(html.contains("Sphinx of black quartz"));
    assert!(html.contains("Roboto Mono"));
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn theme_follows_system_until_set() {
    let dir = tempdir().unwrap();

    let shown = fontscope(dir.path())
        .env("FONTSCOPE_PREFERS_DARK", "1")
        .args(["theme"])
        .output()
        .expect("run fontscope");
    assert_success(&shown);
    assert_eq!(String::from_utf8_lossy(&shown.stdout).trim(), "dark");

    let set = fontscope(dir.path())
        .args(["theme", "light"])
        .output()
        .expect("run fontscope");
    assert_success(&set);

    let shown = fontscope(dir.path())
        .env("FONTSCOPE_PREFERS_DARK", "1")
        .args(["theme", "show"])
        .output()
        .expect("run fontscope");
    assert_eq!(String::from_utf8_lossy(&shown.stdout).trim(), "light");

    let settings = fs::read_to_string(dir.path().join("settings.toml")).expect("settings");
    assert!(settings.contains("darkMode = \"false\""));
}

#[test]
fn unknown_preset_fails_with_message() {
    let dir = tempdir().unwrap();
    let output = fontscope(dir.path())
        .args(["preview", "--preset", "Comic Sans + Papyrus"])
        .output()
        .expect("run fontscope");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset"), "stderr: {stderr}");
}
