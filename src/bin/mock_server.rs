//! Mock MCP server binary for integration testing
//!
//! Implements just enough of a stdio MCP server to exercise the smoke
//! runner without a real tool server. The first argument selects the
//! behavior:
//!
//! - `echo` (default): copy stdin to stdout verbatim
//! - `stderr`: drain stdin, write a diagnostic line to stderr only
//! - `reply`: answer each request line with a `tools/call` result envelope

use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Read, Write};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "echo".to_string());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match mode.as_str() {
        "echo" => {
            let mut input = String::new();
            stdin.lock().read_to_string(&mut input).unwrap();
            let mut writer = stdout.lock();
            writer.write_all(input.as_bytes()).unwrap();
            writer.flush().unwrap();
        }
        "stderr" => {
            let mut input = String::new();
            stdin.lock().read_to_string(&mut input).unwrap();
            eprintln!("mock server: refusing request");
        }
        "reply" => {
            let reader = BufReader::new(stdin.lock());
            let mut writer = stdout.lock();
            for line in reader.lines() {
                let line = line.unwrap();
                if line.trim().is_empty() {
                    continue;
                }
                let request: Value = match serde_json::from_str(&line) {
                    Ok(v) => v,
                    Err(_) => continue,
                };
                writeln!(writer, "{}", build_reply(&request)).unwrap();
            }
            writer.flush().unwrap();
        }
        other => {
            eprintln!("unknown mode: {other}");
            std::process::exit(2);
        }
    }
}

fn build_reply(request: &Value) -> Value {
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let tool = request
        .pointer("/params/name")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": {
            "content": [
                { "type": "text", "text": format!("mock result for {tool}") }
            ]
        }
    })
}
