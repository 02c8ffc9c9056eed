use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use ledgerlint::error::{LintError, Result};
use ledgerlint::taxonomy::CategoryTaxonomy;
use ledgerlint::validator::{validate_with, ValidateOptions, ValidationReport};

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

pub fn run(path: &str, ext: &str, json: bool, strict: bool, categories: bool) -> Result<()> {
    let path = PathBuf::from(path);
    let files = discover_files(&path, ext)?;
    if files.is_empty() {
        println!("No .{ext} files found in {}", path.display());
        return Ok(());
    }

    let opts = ValidateOptions {
        strict,
        taxonomy: categories.then(CategoryTaxonomy::standard),
    };

    let mut failed = 0usize;
    for file in &files {
        // A file that cannot be read or decoded gets a whole-file error
        // report; the batch always continues to the next file.
        let report = match fs::read_to_string(file) {
            Ok(content) => validate_with(&content, &opts),
            Err(e) => ValidationReport::failure(e.to_string()),
        };
        if json {
            let name = file_name(file);
            let line = FileReport {
                file: &name,
                report: &report,
            };
            println!("{}", serde_json::to_string(&line)?);
        } else {
            render(file, &report);
        }
        if !report.valid {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(LintError::ChecksFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

/// Candidate files in name order: the path itself, or the directory's
/// entries filtered by extension (compared case-insensitively).
fn discover_files(path: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(LintError::InvalidPath(path.display().to_string()));
    }
    let mut files: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map_or(false, |e| e.eq_ignore_ascii_case(ext))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn render(file: &Path, report: &ValidationReport) {
    let name = file_name(file);
    if report.valid {
        let rows = if report.total_rows == 1 { "row" } else { "rows" };
        println!("{} {name} ({} {rows})", "OK".green().bold(), report.total_rows);
        return;
    }
    println!("{} {name}", "FAIL".red().bold());
    if let Some(error) = &report.error {
        println!("  {error}");
    }
    for issue in &report.issues {
        println!("  {issue}");
    }
}
