//! Common test utilities

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the resistorcalc binary
pub fn resistorcalc_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("resistorcalc");
    path
}

/// Run resistorcalc with the given arguments
pub fn run_resistorcalc(args: &[&str]) -> Output {
    Command::new(resistorcalc_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute resistorcalc")
}

/// Run resistorcalc with colors disabled, so output can be matched as plain text
pub fn run_plain(args: &[&str]) -> Output {
    let mut all: Vec<&str> = args.to_vec();
    all.push("--no-color");
    run_resistorcalc(&all)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
