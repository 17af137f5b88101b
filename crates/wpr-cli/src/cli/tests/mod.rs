//! CLI parse and output tests.

use super::output::EventPrinter;
use super::Cli;
use clap::Parser;
use std::path::Path;
use tempfile::tempdir;
use wpr_core::remover::{EventSink, RemovalEvent};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_positional_paths() {
    let cli = parse(&["wp-remover", "accs.csv", "posts.txt"]);
    assert_eq!(cli.accs_path, Path::new("accs.csv"));
    assert_eq!(cli.posts_path, Path::new("posts.txt"));
    assert!(cli.config.is_none());
    assert!(cli.timeout_secs.is_none());
    assert!(!cli.ordered);
}

#[test]
fn cli_parse_flags() {
    let cli = parse(&[
        "wp-remover",
        "--timeout-secs",
        "5",
        "--ordered",
        "--config",
        "/tmp/wpr.toml",
        "accs",
        "posts",
    ]);
    assert_eq!(cli.timeout_secs, Some(5));
    assert!(cli.ordered);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/wpr.toml")));
}

#[test]
fn cli_requires_both_paths() {
    assert!(Cli::try_parse_from(["wp-remover", "accs.csv"]).is_err());
}

#[test]
fn flags_override_config_file() {
    let dir = tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "request_timeout_secs = 60\nshuffle_posts = true\n").unwrap();

    let cli = parse(&[
        "wp-remover",
        "--config",
        cfg_path.to_str().unwrap(),
        "--timeout-secs",
        "3",
        "--ordered",
        "a",
        "b",
    ]);
    let cfg = cli.resolve_config().unwrap();
    assert_eq!(cfg.request_timeout_secs, 3);
    assert!(!cfg.shuffle_posts);
    assert_eq!(cfg.xmlrpc_path, "xmlrpc.php");
}

#[test]
fn cli_rejects_zero_timeout() {
    assert!(Cli::try_parse_from(["wp-remover", "--timeout-secs", "0", "a", "b"]).is_err());
}

#[test]
fn zero_timeout_in_config_file_is_rejected() {
    let dir = tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "request_timeout_secs = 0\n").unwrap();

    let cli = parse(&["wp-remover", "--config", cfg_path.to_str().unwrap(), "a", "b"]);
    assert!(cli.resolve_config().is_err());
}

#[test]
fn event_lines() {
    let mut printer = EventPrinter::new(Vec::new());
    printer.on_event(RemovalEvent::Begin {
        post_url: "http://b/?page_id=1".into(),
    });
    printer.on_event(RemovalEvent::Error {
        post_url: "http://b/?page_id=1".into(),
        message: "fail".into(),
    });
    printer.on_event(RemovalEvent::Done {
        post_url: "http://b/?page_id=2".into(),
    });
    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(
        out,
        "http://b/?page_id=1: begin\nhttp://b/?page_id=1: error: fail\nhttp://b/?page_id=2: done\n"
    );
}
