//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use onedark_palette::models::{Palette, PaletteSet};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// The two-color "dark" palette used in the end-to-end scenarios.
pub const DARK_PALETTE_JSON: &str = r##"{"dark":{"red":"#E06C75","bg0":"#282C34"}}"##;

/// A palette whose red entry is not a valid hex color.
pub const BAD_RED_PALETTE_JSON: &str = r##"{"dark":{"red":"#ZZZZZZ","bg0":"#282C34"}}"##;

/// A fuller OneDark palette covering every role plus an unmapped key.
pub fn onedark_palette() -> Palette {
    [
        ("black", "#181A1F"),
        ("bg0", "#282C34"),
        ("bg1", "#31353F"),
        ("bg2", "#393F4A"),
        ("bg3", "#3B3F4C"),
        ("bg_d", "#21252B"),
        ("bg_blue", "#73B8F1"),
        ("diff_add", "#31392B"),
        ("diff_change", "#1C3448"),
        ("diff_text", "#2C5372"),
        ("fg", "#ABB2BF"),
        ("purple", "#C678DD"),
        ("green", "#98C379"),
        ("orange", "#D19A66"),
        ("blue", "#61AFEF"),
        ("yellow", "#E5C07B"),
        ("cyan", "#56B6C2"),
        ("red", "#E86671"),
        ("grey", "#5C6370"),
        ("light_grey", "#848B98"),
        ("dark_cyan", "#2B6F77"),
        ("dark_red", "#993939"),
        ("dark_yellow", "#93691D"),
        ("dark_purple", "#8A3FA0"),
    ]
    .into_iter()
    .collect()
}

/// Serializes a palette set the way the tools expect to read it.
pub fn palette_set_json(set: &PaletteSet) -> String {
    serde_json::to_string(set).expect("Failed to serialize palettes")
}

/// Writes `json` to a temp file and returns its path with the owning dir.
pub fn create_temp_palette_file(json: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("palettes.json");
    fs::write(&path, json).expect("Failed to write palette file");
    (path, temp_dir)
}

/// Runs `bin` with `args` in `cwd`, feeding `stdin` to the process.
pub fn run_with_stdin(bin: &str, args: &[&str], cwd: &std::path::Path, stdin: &str) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}
