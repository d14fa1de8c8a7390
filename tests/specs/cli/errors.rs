//! Error reporting specs
//!
//! Failures print `Error: ...` to stderr and exit 1.

use crate::prelude::*;

#[test]
fn unknown_language_lists_known_codes() {
    let run = cli()
        .args(&["format", BASE, "-l", "xx"])
        .fails()
        .stderr_has("Error: unknown language: xx")
        .stderr_has("en, fr, zh, pt, de, tr, ru, es");
    assert_eq!(run.code(), Some(1));
    assert_eq!(run.stdout(), "");
}

#[test]
fn invalid_time_argument() {
    cli()
        .args(&["format", "yesterday"])
        .fails()
        .stderr_has("Error: invalid time: yesterday");
}

#[test]
fn invalid_reference_time() {
    cli()
        .args(&["format", BASE, "--now", "2013-13-45"])
        .fails()
        .stderr_has("invalid time: 2013-13-45");
}

#[test]
fn bad_max_suffix() {
    cli()
        .args(&["format", BASE, "--max", "5w"])
        .fails()
        .stderr_has("Error: invalid max: unknown duration suffix");
}

#[test]
fn missing_explicit_config_file() {
    cli()
        .args(&["format", BASE, "--now", BASE])
        .env("TIMEAGO_CONFIG", "/nonexistent/timeago.toml")
        .fails()
        .stderr_has("failed to read /nonexistent/timeago.toml");
}

#[test]
fn unknown_key_in_config_file() {
    cli()
        .args(&["format", BASE, "--now", BASE])
        .config_file("colour = true\n")
        .fails()
        .stderr_has("TOML parse error");
}
