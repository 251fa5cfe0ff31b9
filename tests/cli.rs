//! End-to-end tests: the real binary against a loopback gateway stand-in.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Single-shot HTTP responder standing in for the gateway.
///
/// Returns the endpoint URL and a channel carrying the request line of the
/// one request it served (if any).
fn mock_gateway(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            loop {
                match stream.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            let request = String::from_utf8_lossy(&request);
            let request_line = request.lines().next().unwrap_or_default().to_owned();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{addr}/sms/send"), rx)
}

/// An address nothing listens on, for provoking connection failures.
fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/sms/send")
}

fn home_with_credential(token: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".smssendrc"), token).unwrap();
    home
}

fn smssend(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("smssend").unwrap();
    cmd.env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env_remove("SMSSEND_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn accepted_reply_exits_zero() {
    let home = home_with_credential("file-token-1234\n");
    let (url, _rx) = mock_gateway("200 OK", "100\n12345");

    smssend(&home)
        .args(["--to", "79251234567", "--message", "hello", "--api-url", &url])
        .assert()
        .success();
}

#[test]
fn service_error_exits_one() {
    let home = home_with_credential("file-token-1234\n");
    let (url, _rx) = mock_gateway("200 OK", "200");

    smssend(&home)
        .args(["--to", "79251234567", "--message", "hello", "--api-url", &url])
        .assert()
        .code(1);
}

#[test]
fn connection_refused_exits_two() {
    let home = home_with_credential("file-token-1234\n");
    let url = refused_endpoint();

    smssend(&home)
        .args(["--to", "79251234567", "--message", "hello", "--api-url", &url])
        .assert()
        .code(2);
}

#[test]
fn connection_refused_exits_two_in_debug_mode_as_well() {
    let home = home_with_credential("file-token-1234\n");
    let url = refused_endpoint();

    smssend(&home)
        .args([
            "--to",
            "79251234567",
            "--message",
            "hello",
            "--debug",
            "--api-url",
            &url,
        ])
        .assert()
        .code(2);
}

#[test]
fn malformed_reply_exits_two() {
    let home = home_with_credential("file-token-1234\n");
    let (url, _rx) = mock_gateway("200 OK", "<html>maintenance</html>");

    smssend(&home)
        .args(["--to", "79251234567", "--message", "hello", "--api-url", &url])
        .assert()
        .code(2);
}

#[test]
fn missing_credential_exits_three_before_any_network_call() {
    let home = TempDir::new().unwrap();
    let (url, rx) = mock_gateway("200 OK", "100\n1");

    smssend(&home)
        .args(["--to", "79251234567", "--message", "hello", "--api-url", &url])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(".smssendrc"));

    assert!(rx.try_recv().is_err(), "no request should have been made");
}

#[test]
fn short_credential_file_exits_three() {
    let home = home_with_credential("short");
    let (url, rx) = mock_gateway("200 OK", "100\n1");

    smssend(&home)
        .args(["--to", "79251234567", "--message", "hello", "--api-url", &url])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("shorter than 10"));

    assert!(rx.try_recv().is_err(), "no request should have been made");
}

#[test]
fn explicit_api_id_wins_over_a_bad_credential_file() {
    let home = home_with_credential("short");
    let (url, rx) = mock_gateway("200 OK", "100\n1");

    smssend(&home)
        .args([
            "--api-id",
            "explicit-token",
            "--to",
            "79251234567",
            "--message",
            "hello",
            "--api-url",
            &url,
        ])
        .assert()
        .success();

    let request_line = rx.recv().unwrap();
    assert!(request_line.contains("api_id=explicit-token"));
}

#[test]
fn stdin_is_the_message_body_when_no_flag_is_given() {
    let home = home_with_credential("file-token-1234\n");
    let (url, rx) = mock_gateway("200 OK", "100\n1");

    smssend(&home)
        .args(["--to", "79251234567", "--api-url", &url])
        .write_stdin("Hello from stdin")
        .assert()
        .success();

    let request_line = rx.recv().unwrap();
    assert!(
        request_line.contains("text=Hello+from+stdin"),
        "unexpected request line: {request_line}"
    );
}

#[test]
fn minimal_query_contains_only_the_fixed_parameters() {
    let home = home_with_credential("file-token-1234\n");
    let (url, rx) = mock_gateway("200 OK", "100\n1");

    smssend(&home)
        .args(["--to", "79251234567", "--message", "hello", "--api-url", &url])
        .assert()
        .success();

    let request_line = rx.recv().unwrap();
    assert!(request_line.starts_with("GET /sms/send?"));
    assert!(request_line.contains("api_id=file-token-1234"));
    assert!(request_line.contains("to=79251234567"));
    assert!(request_line.contains("text=hello"));
    assert!(request_line.contains("partner_id=3805"));
    assert!(!request_line.contains("test="));
    assert!(!request_line.contains("from="));
    assert!(!request_line.contains("time="));
    assert!(!request_line.contains("translit="));
}

#[test]
fn optional_flags_shape_the_query() {
    let home = home_with_credential("file-token-1234\n");
    let (url, rx) = mock_gateway("200 OK", "100\n1");

    smssend(&home)
        .args([
            "--to",
            "79251234567",
            "--message",
            "hello",
            "--from",
            "acme",
            "--time",
            "1700000000",
            "--translit",
            "--debug",
            "--api-url",
            &url,
        ])
        .assert()
        .success();

    let request_line = rx.recv().unwrap();
    assert!(request_line.contains("test=1"));
    assert!(request_line.contains("from=acme"));
    assert!(request_line.contains("time=1700000000"));
    assert!(request_line.contains("translit=1"));
}

#[test]
fn missing_recipient_is_a_usage_error() {
    let home = home_with_credential("file-token-1234\n");

    smssend(&home)
        .args(["--message", "hello"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn help_exits_zero_and_documents_the_exit_codes() {
    let home = home_with_credential("file-token-1234\n");

    smssend(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"));
}
