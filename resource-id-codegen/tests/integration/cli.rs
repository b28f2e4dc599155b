use std::process::{Command, Output};

use crate::utils::{read, service_dir, SERVER_ID};

fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resource-id-codegen"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn single_dash_flags_with_equals() {
    let root = tempfile::tempdir().unwrap();
    service_dir(root.path(), "svc");

    let id = format!("-id={SERVER_ID}");
    let out = run_in(root.path(), &["-path=svc", "-name=Server", &id, "--no-format"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let code = read(root.path().join("svc/parse/server.go"));
    assert!(code.contains("type ServerId struct {"));
    assert!(root.path().join("svc/parse/server_test.go").exists());
}

#[test]
fn single_dash_flags_with_separate_values() {
    let root = tempfile::tempdir().unwrap();
    service_dir(root.path(), "svc");

    let out = run_in(
        root.path(),
        &["-path", "svc", "-name", "Server", "-id", SERVER_ID, "--no-format"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(root.path().join("svc/parse/server.go").exists());
}

#[test]
fn help_prints_usage_and_generates_nothing() {
    let root = tempfile::tempdir().unwrap();
    for flag in ["-help", "--help", "-h"] {
        let out = run_in(root.path(), &[flag]);
        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains("-path"));
    }
    assert!(!root.path().join("parse").exists());
}

#[test]
fn unknown_flag_fails() {
    let root = tempfile::tempdir().unwrap();
    let out = run_in(root.path(), &["-verbose"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unexpected arguments"));
}

#[test]
fn malformed_id_fails() {
    let root = tempfile::tempdir().unwrap();
    service_dir(root.path(), "svc");

    let out = run_in(
        root.path(),
        &["-path=svc", "-name=Server", "-id=/subscriptions", "--no-format"],
    );
    assert!(!out.status.success());
    assert!(!root.path().join("svc/parse/server.go").exists());
}
