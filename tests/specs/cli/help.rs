//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("format")
        .stdout_has("languages");
}

#[test]
fn format_help_shows_flags() {
    cli()
        .args(&["format", "--help"])
        .passes()
        .stdout_has("--lang")
        .stdout_has("--max")
        .stdout_has("--layout")
        .stdout_has("--now");
}

#[test]
fn version_flag() {
    cli().args(&["--version"]).passes().stdout_has("timeago");
}
