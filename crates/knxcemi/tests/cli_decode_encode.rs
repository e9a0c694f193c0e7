#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn knxcemi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_knxcemi"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("knxcemi should run")
}

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout should be utf-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be json"))
        .collect()
}

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "knxcemi-{tag}-{}-{}.txt",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn decode_busmon_frame_as_json() {
    let output = knxcemi(&["--format", "json", "decode", "2b010203"]);
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["code"], 0x2B);
    assert_eq!(lines[0]["code_name"], "LBusmonInd");
    assert_eq!(lines[0]["frame_size"], 4);
    assert_eq!(lines[0]["payload"], "010203");
    assert!(lines[0].get("info").is_none());
}

#[test]
fn decode_multiple_frames_including_unknown_code() {
    let output = knxcemi(&["--format", "json", "decode", "2902030 1bce0", "fc000001"]);
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["code_name"], "LDataInd");
    assert_eq!(lines[0]["info"], "0301");
    assert_eq!(lines[0]["payload"], "bce0");
    assert_eq!(lines[1]["code_name"], "0xfc");
    assert_eq!(lines[1]["supported"], false);
    assert_eq!(lines[1]["payload"], "000001");
}

#[test]
fn decode_truncated_frame_exits_with_data_invalid() {
    let output = knxcemi(&["--format", "json", "decode", "1104aa"]);
    assert_eq!(output.status.code(), Some(60));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("truncated frame"));
}

#[test]
fn decode_keep_going_reports_and_continues() {
    let output = knxcemi(&["--format", "json", "decode", "--keep-going", "11", "2b01"]);
    assert_eq!(output.status.code(), Some(60));
    assert_eq!(json_lines(&output).len(), 1);
}

#[test]
fn decode_frames_from_file() {
    let path = unique_temp_file("frames");
    std::fs::write(&path, "# bus monitor capture\n2b0102\n\n2d b0 11 01\n")
        .expect("frame file should be writable");

    let output = knxcemi(&[
        "--format",
        "json",
        "decode",
        "--file",
        path.to_str().expect("temp path should be utf-8"),
    ]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    let lines = json_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["code_name"], "LBusmonInd");
    assert_eq!(lines[1]["code_name"], "LRawInd");
    assert_eq!(lines[1]["payload"], "b01101");
}

#[test]
fn decode_frames_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_knxcemi"))
        .args(["--log-level", "error", "--format", "json", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("knxcemi should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"2e00bce0\n")
        .expect("stdin should accept frames");

    let output = child.wait_with_output().expect("knxcemi should exit");
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines[0]["code_name"], "LDataCon");
    assert_eq!(lines[0]["info"], "");
}

#[test]
fn encode_ldata_request_as_hex() {
    let output = knxcemi(&[
        "--format",
        "pretty",
        "encode",
        "--code",
        "LDataReq",
        "--data",
        "bce0110a0a030100 81",
    ]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "1100bce0110a0a03010081"
    );
}

#[test]
fn encode_raw_output_is_binary_frame() {
    let output = knxcemi(&[
        "--format", "raw", "encode", "--code", "0x2b", "--data", "010203",
    ]);
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x2B, 0x01, 0x02, 0x03]);
}

#[test]
fn encode_rejects_info_for_busmon() {
    let output = knxcemi(&["encode", "--code", "LBusmonInd", "--info", "01"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn codes_lists_registered_codes() {
    let output = knxcemi(&["--format", "json", "codes"]);
    assert!(output.status.success());

    let codes: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("codes output should be json");
    let names: Vec<&str> = codes
        .as_array()
        .expect("codes should be an array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "LRawReq",
            "LDataReq",
            "LDataInd",
            "LBusmonInd",
            "LRawInd",
            "LDataCon",
            "LRawCon",
        ]
    );
}
