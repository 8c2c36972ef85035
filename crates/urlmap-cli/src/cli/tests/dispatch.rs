//! Dispatch tests: exit codes and which commands read the config.

use super::parse;
use crate::cli::{exit_code, run};
use anyhow::Result;
use std::path::{Path, PathBuf};
use urlmap_core::config::UrlMapConfig;

fn no_config() -> Result<(UrlMapConfig, Option<PathBuf>)> {
    panic!("config must not be read by this command")
}

fn broken_config() -> Result<(UrlMapConfig, Option<PathBuf>)> {
    anyhow::bail!("parse config: unknown variant `yaml`")
}

fn write_map(dir: &Path) -> String {
    let path = dir.join("urlmap.js");
    std::fs::write(&path, "baseURLs = [ [ 'GLib', 'https://docs.gtk.org/glib/' ] ]\n").unwrap();
    path.display().to_string()
}

#[test]
fn lookup_found_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let map = write_map(dir.path());
    let result = run(parse(&["urlmap", "--map", &map, "lookup", "GLib"]), no_config);
    assert_eq!(exit_code(&result), 0);
}

#[test]
fn lookup_missing_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let map = write_map(dir.path());
    let result = run(parse(&["urlmap", "--map", &map, "lookup", "GLib", "Qt"]), no_config);
    assert_eq!(exit_code(&result), 1);
}

#[test]
fn lookup_bad_map_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("urlmap.json");
    std::fs::write(&path, r#"[["GLib", "not a url"]]"#).unwrap();
    let map = path.display().to_string();
    let result = run(parse(&["urlmap", "--map", &map, "lookup", "GLib"]), no_config);
    assert_eq!(exit_code(&result), 2);
}

#[test]
fn broken_config_fails_lookup_without_map() {
    let result = run(parse(&["urlmap", "lookup", "GLib"]), broken_config);
    assert_eq!(exit_code(&result), 2);
}

#[test]
fn lookup_without_map_uses_config() {
    let result = run(parse(&["urlmap", "lookup", "Gio"]), || {
        Ok((UrlMapConfig::default(), None))
    });
    assert_eq!(exit_code(&result), 0);
}

#[test]
fn check_and_convert_ignore_config() {
    let dir = tempfile::tempdir().unwrap();
    let map = write_map(dir.path());
    let out = dir.path().join("urlmap.json").display().to_string();

    assert_eq!(exit_code(&run(parse(&["urlmap", "check", &map]), no_config)), 0);
    let convert = run(
        parse(&["urlmap", "convert", &map, "--to", "json", "-o", &out]),
        no_config,
    );
    assert_eq!(exit_code(&convert), 0);
}

#[test]
fn man_ignores_config() {
    assert_eq!(exit_code(&run(parse(&["urlmap", "man"]), no_config)), 0);
}
