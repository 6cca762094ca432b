use assert_cmd::prelude::*;
use assert_fs::{prelude::*, TempDir};
use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    process::Command,
    thread,
};

// Nothing listens on the discard port locally, so requests fail fast with a refused connection.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfind")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

#[test]
fn blank_query_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfind")?;

    cmd.args(["--base-url", UNREACHABLE_API, "   "]);
    cmd.assert().success().stdout("");

    Ok(())
}

#[test]
fn unreachable_api_prints_error_panel() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfind")?;

    cmd.args(["-q", "--base-url", UNREACHABLE_API, "tolkien"]);
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(Some(1), output.status.code());
    assert!(stdout.contains("Sorry, something went wrong. Please try again later."));
    assert!(stdout.contains(r#"<p class="error-details">Error: Network"#));
    assert!(!stdout.contains("book-card"));

    Ok(())
}

/// Serves a single request with `status_line` and an empty body, returning the base URL to reach
/// it on.
fn serve_once(status_line: &'static str) -> Result<String, Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let base_url = format!("http://{}", listener.local_addr()?);

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("Cannot accept test connection");
        let mut reader = BufReader::new(stream);

        // read the request head up to the blank line
        let mut line = String::new();
        while reader.read_line(&mut line).map_or(false, |n| n > 0) && line != "\r\n" {
            line.clear();
        }

        let response =
            format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        reader
            .get_mut()
            .write_all(response.as_bytes())
            .expect("Cannot write test response");
    });

    Ok(base_url)
}

#[test]
fn non_success_status_prints_error_panel() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = serve_once("HTTP/1.1 500 Internal Server Error")?;
    let mut cmd = Command::cargo_bin("bookfind")?;

    cmd.args(["-q", "--base-url", &base_url, "tolkien"]);
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(Some(1), output.status.code());
    assert!(
        stdout.contains("Error: Network response was not ok: 500"),
        "{stdout}"
    );
    assert!(!stdout.contains("book-card"));

    Ok(())
}

#[test]
fn error_panel_is_written_to_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = dir.child("results.html");

    let mut cmd = Command::cargo_bin("bookfind")?;
    cmd.args(["-q", "--page", "--base-url", UNREACHABLE_API, "-o"])
        .arg(file.path())
        .arg("tolkien");
    cmd.assert().code(1).stdout("");

    let content = std::fs::read_to_string(file.path())?;
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains(r#"<div class="error">"#));

    Ok(())
}

#[test]
fn interactive_mode_ignores_blank_lines() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let file = dir.child("results.html");

    let mut cmd = assert_cmd::Command::cargo_bin("bookfind")?;
    cmd.args(["-i", "--base-url", UNREACHABLE_API, "-o"])
        .arg(file.path())
        .write_stdin("\n   \n\t\n");
    cmd.assert().success().stdout("");

    // no query was submitted so the results area was never touched
    assert!(!file.path().exists());

    Ok(())
}

#[test]
fn interactive_mode_survives_failed_searches() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("bookfind")?;

    cmd.args(["-i", "-q", "--base-url", UNREACHABLE_API])
        .write_stdin("tolkien\n\nasimov\n");
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(2, stdout.matches(r#"<div class="error">"#).count());

    Ok(())
}

#[test]
fn missing_query_without_interact_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookfind")?;

    cmd.arg("-v");
    cmd.assert().code(2);

    Ok(())
}
