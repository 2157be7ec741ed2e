//! The tool server driven through the binary's stdin/stdout

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Stdio};

fn run_session(messages: &[Value]) -> Vec<Value> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_component-builder"))
        .arg("mcp")
        .env("CBUILD_LOG_LEVEL", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn tool server");

    {
        let mut stdin = child.stdin.take().unwrap();
        for message in messages {
            writeln!(stdin, "{message}").unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_stdio_session() {
    let replies = run_session(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {
            "protocolVersion": "2025-06-18",
            "clientInfo": {"name": "test-client", "version": "1.0"}
        }}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {
            "name": "generate_component",
            "arguments": {"name": "ProfileCard", "type": "card"}
        }}),
    ]);

    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0]["result"]["serverInfo"]["name"], "component-builder");
    assert_eq!(replies[1]["result"]["tools"].as_array().unwrap().len(), 5);
    let text = replies[2]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("# Generated Component: ProfileCard"));
    assert!(text.contains("const ProfileCardHeader = React.forwardRef"));
}

#[test]
fn test_stdio_errors() {
    let replies = run_session(&[
        json!("not an object"),
        json!({"jsonrpc": "2.0", "id": 5, "method": "prompts/list"}),
    ]);
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["error"]["code"], -32600);
    assert_eq!(replies[1]["error"]["code"], -32601);
}
