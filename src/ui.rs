//! Terminal output for `cmakegen`.
//!
//! Status lines use the same markers throughout: `✓` (green) for work
//! done, `+` (cyan) for each written file in verbose mode, `!` (yellow)
//! for notices.

use colored::*;
use std::path::Path;

use crate::manifest::FileManifest;
use crate::writer::WriteReport;

pub fn status(msg: &str) {
    println!("{} {}", "⚙️".cyan(), msg);
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn notice(msg: &str) {
    println!("{} {}", "!".yellow(), msg);
}

pub fn written(path: &Path) {
    println!("  {} {}", "+".cyan(), path.display());
}

/// Dry-run listing: directories, then files with their sizes.
pub fn print_manifest(manifest: &FileManifest, root: &Path) {
    println!("{}", "Directories:".bold());
    println!("  {}", root.display());
    for dir in manifest.dirs() {
        println!("  {}", root.join(dir).display());
    }
    println!("{}", "Files:".bold());
    let width = manifest
        .files()
        .iter()
        .map(|e| root.join(&e.path).display().to_string().chars().count())
        .max()
        .unwrap_or(0);
    for entry in manifest.files() {
        let path = root.join(&entry.path).display().to_string();
        println!(
            "  {:<width$}  {}",
            path,
            format!("{} bytes", entry.contents.len()).dimmed()
        );
    }
}

pub fn print_summary(report: &WriteReport, verbose: bool) {
    if verbose {
        for file in &report.files {
            written(file);
        }
    }
    success(&format!(
        "Wrote {} files ({} bytes) to {}",
        report.files.len(),
        report.bytes,
        report.root.display()
    ));
}

/// Commands to build the generated tree.
pub fn print_next_steps(root: &Path, tests: bool) {
    println!("\n{}", "To build:".bold());
    println!("  cd {}", root.display());
    println!("  cmake -B build -G Ninja");
    println!("  cmake --build build");
    if tests {
        println!("  ctest --test-dir build");
    }
}
