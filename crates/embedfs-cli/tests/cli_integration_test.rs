//! Integration tests running the `embedfs` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn embedfs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_embedfs"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("EMBEDFS_ID")
        .env_remove("EMBEDFS_OUT")
        .env_remove("EMBEDFS_DIR")
        .env_remove("EMBEDFS_MODULE")
        .env_remove("EMBEDFS_CRATE_PATH")
        .output()
        .unwrap()
}

fn assets() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "hi").unwrap();
    fs::write(dir.path().join("b.bin"), [0x00, 0xFF]).unwrap();
    fs::create_dir(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css/site.css"), "body {}\n").unwrap();
    dir
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_generate_writes_source_and_reports_json() {
    let src = assets();
    let out = TempDir::new().unwrap();
    let out_path = out.path().join("assets.rs");

    let output = embedfs(&[
        "generate",
        "--dir",
        path_str(src.path()),
        "--out",
        path_str(&out_path),
        "--id",
        "SITE",
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["files"], 3);
    assert_eq!(summary["raw_files"], 1);

    let source = fs::read_to_string(&out_path).unwrap();
    assert!(source.contains("pub static SITE:"));
    assert!(source.contains("\"/css/site.css\""));
}

#[test]
fn test_generate_reads_environment() {
    let src = assets();
    let out = TempDir::new().unwrap();
    let out_path = out.path().join("env.rs");

    let output = Command::new(env!("CARGO_BIN_EXE_embedfs"))
        .args(["generate", "--format", "text"])
        .env("EMBEDFS_ID", "FROM_ENV")
        .env("EMBEDFS_DIR", src.path())
        .env("EMBEDFS_OUT", &out_path)
        .env_remove("EMBEDFS_MODULE")
        .env_remove("EMBEDFS_CRATE_PATH")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(fs::read_to_string(&out_path).unwrap().contains("pub static FROM_ENV:"));
}

#[test]
fn test_generate_invalid_id_exits_2() {
    let src = assets();
    let out = TempDir::new().unwrap();
    let out_path = out.path().join("assets.rs");

    let output = embedfs(&[
        "generate",
        "--dir",
        path_str(src.path()),
        "--out",
        path_str(&out_path),
        "--id",
        "not-an-ident",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(!out_path.exists());
}

#[test]
fn test_generate_missing_dir_exits_1() {
    let out = TempDir::new().unwrap();
    let output = embedfs(&[
        "generate",
        "--dir",
        path_str(&out.path().join("missing")),
        "--out",
        path_str(&out.path().join("assets.rs")),
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cat_prints_exact_bytes() {
    let src = assets();

    let output = embedfs(&["cat", path_str(src.path()), "/b.bin"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, [0x00, 0xFF]);

    let output = embedfs(&["cat", path_str(src.path()), "/css/site.css"]);
    assert_eq!(output.stdout, b"body {}\n");
}

#[test]
fn test_cat_missing_file_exits_4() {
    let src = assets();
    let output = embedfs(&["cat", path_str(src.path()), "/nope.txt"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_inspect_json() {
    let src = assets();
    let output = embedfs(&["inspect", path_str(src.path()), "--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files"], 3);
    let keys: Vec<_> = report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, ["/a.txt", "/b.bin", "/css/site.css"]);
    assert_eq!(report["entries"][1]["kind"], "raw");
}

#[test]
fn test_invalid_format_exits_2() {
    let src = assets();
    let output = embedfs(&["inspect", path_str(src.path()), "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_completions() {
    let output = embedfs(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("embedfs"));
}
