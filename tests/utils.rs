#![allow(dead_code)]

use clap::Parser;
use kiln::cli::{Args, Runner};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Lists files under `dir` relative to it, skipping the `.git` directory.
pub fn relative_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.iter().filter(|f| !files2.contains(f)) {
        println!("  + {:?}", file);
    }
    for file in files2.iter().filter(|f| !files1.contains(f)) {
        println!("  - {:?}", file);
    }
    for file in files1.iter().filter(|f| files2.contains(f)) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let expected = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Runs kiln with `argv` under `workdir` with a pinned year, then asserts
/// the result matches `expected_dir` (relative to the crate root) file for file.
pub fn run_and_assert(argv: &[&str], workdir: &Path, expected_dir: &str) {
    let mut full = vec!["kiln"];
    full.extend_from_slice(argv);
    let root = Runner::new(Args::parse_from(full))
        .with_working_dir(workdir)
        .with_year(2024)
        .run()
        .unwrap();

    let expected = Path::new(env!("CARGO_MANIFEST_DIR")).join(expected_dir);
    let expected = expected.as_path();
    if dir_diff::is_different(&root, expected).unwrap() {
        print_dir_diff(&root, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// Whether a usable `git` binary is on `PATH`.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
