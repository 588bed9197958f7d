//! Integration tests: run the full pipeline against a local HTTP server and
//! check which outcome is reported and what ends up in the result files.

mod common;

use common::page_server::{self, Route};
use link_sieve::checker::RawLink;
use link_sieve::{run, Config, Outcome};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use tempfile::tempdir;

const LINK_PAGE: &str = r#"
<html><body>
  <a href="{base}/ok">fine</a>
  <a href="{base}/missing">gone</a>
  <a href="/about">relative</a>
  <a>no href</a>
  <a href="{base}/no-content">empty answer</a>
</body></html>
"#;

fn start_site() -> String {
    page_server::start(&[
        ("/", Route::ok(LINK_PAGE)),
        ("/ok", Route::ok("<p>ok</p>")),
        ("/about", Route::ok("<p>about</p>")),
        ("/no-content", Route::status(204)),
        ("/plain", Route::ok("<p>no anchors here</p>")),
        ("/error", Route::status(500)),
    ])
}

fn config_in(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

#[tokio::test]
async fn checks_every_link_and_writes_both_files() {
    let base = start_site();
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let outcome = run(&config, &format!("{}/", base)).await.unwrap();

    let report = match outcome {
        Outcome::Completed(report) => report,
        other => panic!("expected a completed run, got {:?}", other),
    };
    assert_eq!(report.links.valid, vec![RawLink::Present(format!("{}/ok", base))]);
    assert_eq!(
        report.links.broken,
        vec![
            RawLink::Present(format!("{}/missing", base)),
            RawLink::from("/about"),
            RawLink::Absent,
            RawLink::Present(format!("{}/no-content", base)),
        ]
    );
    assert!(report.write_failures.is_empty());

    let valid = fs::read_to_string(config.valid_links_path()).unwrap();
    assert_eq!(valid, format!("{}/ok\n", base));

    let broken = fs::read_to_string(config.broken_links_path()).unwrap();
    assert_eq!(
        broken,
        format!("{base}/missing\n/about\n\n{base}/no-content\n", base = base)
    );
}

#[tokio::test]
async fn resolve_relative_turns_relative_links_valid() {
    let base = start_site();
    let dir = tempdir().unwrap();
    let config = Config {
        resolve_relative: true,
        ..config_in(dir.path())
    };

    let outcome = run(&config, &format!("{}/", base)).await.unwrap();

    let Outcome::Completed(report) = outcome else {
        panic!("expected a completed run, got {:?}", outcome);
    };
    assert_eq!(
        report.links.valid,
        vec![
            RawLink::Present(format!("{}/ok", base)),
            RawLink::Present(format!("{}/about", base)),
        ]
    );
    assert_eq!(report.links.broken.len(), 3);
}

#[tokio::test]
async fn concurrent_run_matches_sequential_run() {
    let base = start_site();
    let target = format!("{}/", base);

    let sequential_dir = tempdir().unwrap();
    let sequential = run(&config_in(sequential_dir.path()), &target).await.unwrap();

    let concurrent_dir = tempdir().unwrap();
    let config = Config {
        concurrency: NonZeroUsize::new(8).unwrap(),
        ..config_in(concurrent_dir.path())
    };
    let concurrent = run(&config, &target).await.unwrap();

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn rerun_overwrites_previous_results() {
    let base = start_site();
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(config.valid_links_path(), "stale\nstale\nstale\n").unwrap();

    run(&config, &format!("{}/", base)).await.unwrap();

    let valid = fs::read_to_string(config.valid_links_path()).unwrap();
    assert_eq!(valid, format!("{}/ok\n", base));
}

#[tokio::test]
async fn invalid_target_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    for target in ["", "example.com", "mailto:someone@example.com"] {
        let outcome = run(&config, target).await.unwrap();
        assert_eq!(outcome, Outcome::InvalidUrl, "target {:?}", target);
    }

    assert!(!config.valid_links_path().exists());
    assert!(!config.broken_links_path().exists());
}

#[tokio::test]
async fn failed_page_fetch_is_not_reported_as_no_links() {
    let base = start_site();
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let outcome = run(&config, &format!("{}/error", base)).await.unwrap();
    assert_eq!(outcome, Outcome::FetchFailed);

    let outcome = run(&config, &format!("{}/does-not-exist", base)).await.unwrap();
    assert_eq!(outcome, Outcome::FetchFailed);

    assert!(!config.valid_links_path().exists());
    assert!(!config.broken_links_path().exists());
}

#[tokio::test]
async fn unreachable_target_is_a_fetch_failure() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let outcome = run(&config, "http://127.0.0.1:1/").await.unwrap();

    assert_eq!(outcome, Outcome::FetchFailed);
    assert!(!config.valid_links_path().exists());
}

#[tokio::test]
async fn page_without_anchors_reports_no_links() {
    let base = start_site();
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let outcome = run(&config, &format!("{}/plain", base)).await.unwrap();

    assert_eq!(outcome, Outcome::NoLinks);
    assert!(!config.valid_links_path().exists());
    assert!(!config.broken_links_path().exists());
}

#[tokio::test]
async fn unwritable_output_is_reported_but_run_completes() {
    let base = start_site();
    let dir = tempdir().unwrap();
    let config = config_in(&dir.path().join("missing-dir"));

    let outcome = run(&config, &format!("{}/", base)).await.unwrap();

    let Outcome::Completed(report) = outcome else {
        panic!("expected a completed run, got {:?}", outcome);
    };
    // Both writes were attempted and both failed
    assert_eq!(report.write_failures.len(), 2);
    assert_eq!(report.links.valid.len(), 1);
}
