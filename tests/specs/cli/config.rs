//! Settings file specs
//!
//! Precedence: file, then environment, then flags.

use crate::prelude::*;

const LATER: &str = "2013-08-30T14:00:00Z";

#[test]
fn file_sets_language() {
    cli()
        .args(&["format", BASE, "--now", LATER])
        .config_file("language = \"zh\"\n")
        .passes()
        .stdout_eq("2 小时前\n");
}

#[test]
fn file_accepts_lang_alias() {
    cli()
        .args(&["format", BASE, "--now", LATER])
        .config_file("lang = \"French\"\n")
        .passes()
        .stdout_eq("il y a 2 heures\n");
}

#[test]
fn file_max_and_layout() {
    cli()
        .args(&["format", BASE, "--now", LATER])
        .config_file("max = \"1h\"\nlayout = \"Jan 2, 2006\"\n")
        .passes()
        .stdout_eq("Aug 30, 2013\n");
}

#[test]
fn env_overrides_file() {
    cli()
        .args(&["format", BASE, "--now", LATER])
        .config_file("language = \"zh\"\n")
        .env("TIMEAGO_LANG", "de")
        .passes()
        .stdout_eq("vor 2 Stunden\n");
}

#[test]
fn empty_layout_flag_disables_file_cutoff() {
    cli()
        .args(&["format", BASE, "--now", LATER, "--layout", ""])
        .config_file("max = \"1h\"\n")
        .passes()
        .stdout_eq("2 hours ago\n");
}

#[test]
#[cfg(target_os = "linux")]
fn user_config_dir_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("timeago");
    std::fs::create_dir_all(&conf).unwrap();
    std::fs::write(conf.join("config.toml"), "language = \"tr\"\n").unwrap();

    cli()
        .args(&["format", BASE, "--now", LATER])
        .env("XDG_CONFIG_HOME", dir.path())
        .passes()
        .stdout_eq("2 saat önce\n");
}

#[test]
fn ambient_settings_are_cleared() {
    let cmd = cli().command();
    let envs: Vec<_> = cmd.get_envs().collect();
    for var in ISOLATED_ENV {
        assert!(
            envs.iter().any(|(k, v)| *k == std::ffi::OsStr::new(var) && v.is_none()),
            "{} is not removed",
            var
        );
    }
}

#[test]
fn explicit_config_file_still_wins_over_cleared_env() {
    let cmd = cli().config_file("language = \"es\"\n").command();
    let config = cmd
        .get_envs()
        .find(|(k, _)| *k == std::ffi::OsStr::new("TIMEAGO_CONFIG"))
        .and_then(|(_, v)| v);
    assert!(config.is_some());
}
