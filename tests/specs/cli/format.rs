//! `timeago format` output specs

use crate::prelude::*;

#[test]
fn same_instant_is_about_a_second_ago() {
    cli()
        .args(&["format", BASE, "--now", BASE])
        .passes()
        .stdout_eq("about a second ago\n");
}

#[test]
fn thirty_six_hours_is_two_days() {
    cli()
        .args(&["format", BASE, "--now", "2013-09-01T00:00:00Z"])
        .passes()
        .stdout_eq("2 days ago\n");
}

#[test]
fn turkish_future_day() {
    cli()
        .args(&["format", "2013-08-31T12:00:00Z", "--now", BASE, "-l", "tr"])
        .passes()
        .stdout_eq("bir gün içinde\n");
}

#[test]
fn german_548_days() {
    // 548 days after the base instant
    cli()
        .args(&["format", BASE, "--now", "2015-03-01T12:00:00Z", "--lang", "de"])
        .passes()
        .stdout_eq("vor 2 Jahren\n");
}

#[test]
fn unix_seconds_input() {
    cli()
        .args(&["format", "@1377864000", "--now", "1377867600", "-l", "ru"])
        .passes()
        .stdout_eq("около часа назад\n");
}

#[test]
fn max_switches_to_absolute_date() {
    cli()
        .args(&[
            "format",
            BASE,
            "--now",
            "2013-08-30T13:30:00Z",
            "--max",
            "90m",
            "--layout",
            "2006-01-02",
        ])
        .passes()
        .stdout_eq("2013-08-30\n");
}

#[test]
fn max_without_layout_uses_language_default() {
    cli()
        .args(&["format", BASE, "--now", "2013-08-30T13:30:00Z", "--max", "90m", "-l", "de"])
        .passes()
        .stdout_eq("30.08.2013\n");
}

#[test]
fn empty_layout_keeps_relative_phrase() {
    cli()
        .args(&[
            "format",
            BASE,
            "--now",
            "2013-08-30T13:30:00Z",
            "--max",
            "90m",
            "--layout",
            "",
        ])
        .passes()
        .stdout_eq("2 hours ago\n");
}

#[test]
fn json_output() {
    let out = cli()
        .args(&["-o", "json", "format", BASE, "--now", BASE, "-l", "pt"])
        .passes()
        .stdout();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "phrase": "há menos de um segundo",
            "language": "pt",
        })
    );
}

#[test]
fn env_language_applies() {
    cli()
        .args(&["format", BASE, "--now", "2013-08-30T12:05:00Z"])
        .env("TIMEAGO_LANG", "es")
        .passes()
        .stdout_eq("hace 5 minutos\n");
}

#[test]
fn flag_beats_env_language() {
    cli()
        .args(&["format", BASE, "--now", "2013-08-30T12:05:00Z", "-l", "fr"])
        .env("TIMEAGO_LANG", "es")
        .passes()
        .stdout_eq("il y a 5 minutes\n");
}
