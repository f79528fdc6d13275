//! End-to-end tests for the page metrics sampler against a local mock server

use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::process::Output;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Sample</title></head>
  <body>
    <h1>Sample page</h1>
    <p>First <a href="/one">one</a></p>
    <p>Second <a href="/two">two</a></p>
    <p>Third</p>
    <p>Fourth <a>no href</a></p>
    <p>Fifth</p>
  </body>
</html>"#;

const ENV_VARS: [&str; 5] = ["OUTPUT_DIR", "LOG_DIR", "LOG_LEVEL", "TIMEOUT_SECONDS", "ENABLE_COLOR"];

async fn serve(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

fn measure_cmd(workdir: &TempDir, args: &[String], stdin: &str) -> Command {
    let mut cmd = Command::cargo_bin("opsamples").unwrap();
    cmd.current_dir(workdir.path())
        .env("NO_COLOR", "1")
        .arg("--no-color")
        .arg("measure")
        .args(args)
        .arg("--log-dir")
        .arg(workdir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.write_stdin(stdin.to_string());
    cmd
}

/// Run the binary off the runtime so the mock server keeps answering
async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_measure_two_pages_from_flags() {
    let server = MockServer::start().await;
    serve(&server, "/a", ResponseTemplate::new(200).set_body_string(PAGE)).await;
    serve(&server, "/b", ResponseTemplate::new(200).set_body_string(PAGE)).await;

    let dir = TempDir::new().unwrap();
    let args = vec![
        "--url".to_string(), format!("{}/a", server.uri()),
        "--url".to_string(), format!("{}/b", server.uri()),
    ];
    let output = run(measure_cmd(&dir, &args, "")).await;

    output.clone().assert().success();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(stdout.matches("There are 3 links on this page").count(), 2);
    assert_eq!(stdout.matches("There are 1 H1 headers on this page").count(), 2);
    assert_eq!(stdout.matches("There are 5 paragraphs on this page").count(), 2);
    assert_eq!(stdout.matches("links=3 headers=1 paragraphs=5").count(), 2);

    let timing = Regex::new(r"(?m)^(\w+) executed in \d+\.\d{3} seconds$").unwrap();
    let operations: Vec<&str> = timing
        .captures_iter(&stdout)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let per_page = ["fetch_url", "collect_all_links", "collect_all_h1_headers", "count_paragraphs", "process_page"];
    for op in per_page {
        assert_eq!(operations.iter().filter(|o| **o == op).count(), 2, "operation {}", op);
    }
    assert_eq!(operations.last(), Some(&"measure_pages"));

    let log = fs::read_to_string(dir.path().join("pagemetrics_debug.log")).unwrap();
    assert!(log.contains("Starting performance sample session..."));
    assert!(log.contains("Performance sample session completed!"));
    assert!(log.contains("fetch_url executed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_measure_prompts_for_urls() {
    let server = MockServer::start().await;
    serve(&server, "/page", ResponseTemplate::new(200).set_body_string(PAGE)).await;

    let dir = TempDir::new().unwrap();
    let url = format!("{}/page", server.uri());
    let stdin = format!("not a url\n{url}\n{url}\n");
    let output = run(measure_cmd(&dir, &[], &stdin)).await;

    output.clone().assert().success();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Please, enter the URL for the first page:"));
    assert!(stdout.contains("Please, enter the URL for the second page:"));
    assert!(stdout.contains("Oops! This doesn't appear to be an URL... Please try again!"));

    let log = fs::read_to_string(dir.path().join("pagemetrics_debug.log")).unwrap();
    assert!(log.contains("[WARNING]: Invalid URL string provided by the user"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_measure_http_error_exit_code() {
    let server = MockServer::start().await;
    serve(&server, "/missing", ResponseTemplate::new(404)).await;

    let dir = TempDir::new().unwrap();
    let url = format!("{}/missing", server.uri());
    let args = vec!["--url".to_string(), url.clone(), "--url".to_string(), url];
    let output = run(measure_cmd(&dir, &args, "")).await;

    output
        .clone()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("404"))
        .stderr(predicate::str::contains("Network troubleshooting:"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("on this page"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_measure_timeout_exit_code() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/slow",
        ResponseTemplate::new(200).set_body_string(PAGE).set_delay(Duration::from_secs(5)),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let url = format!("{}/slow", server.uri());
    let args = vec![
        "--url".to_string(), url.clone(),
        "--url".to_string(), url,
        "--timeout".to_string(), "1".to_string(),
    ];
    let output = run(measure_cmd(&dir, &args, "")).await;

    output.assert().code(3).stderr(predicate::str::contains("Timeout help:"));
}

#[test]
fn test_too_many_urls_rejected() {
    let dir = TempDir::new().unwrap();
    let args: Vec<String> = ["a", "b", "c"]
        .iter()
        .flat_map(|host| ["--url".to_string(), format!("https://{host}.example")])
        .collect();

    measure_cmd(&dir, &args, "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("At most 2 --url values"));
}

#[test]
fn test_timeout_out_of_range_rejected() {
    let dir = TempDir::new().unwrap();
    let args = vec!["--timeout".to_string(), "0".to_string()];

    measure_cmd(&dir, &args, "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--timeout"));
}
