//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for antipatterns. Every budget is
//! zero and stays zero: fix the offending site instead of raising a number.

use std::fs;
use std::path::Path;

/// `(pattern, why it is banned in production code)`
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "crashes the page on unexpected state"),
    (".expect(", "crashes the page on unexpected state"),
    ("panic!(", "crashes the page"),
    ("unreachable!(", "crashes the page"),
    ("todo!(", "unfinished code must not ship"),
    ("unimplemented!(", "unfinished code must not ship"),
    ("let _ =", "discards a Result without inspecting it"),
    (".ok()", "discards an error without inspecting it"),
    ("#[allow(dead_code)]", "dead code should be deleted"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        // Side-by-side unit test files are exempt.
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_sources_are_free_of_banned_patterns() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; is the test running from the crate root?");

    let mut violations = Vec::new();
    for (path, content) in &files {
        for (lineno, line) in content.lines().enumerate() {
            for (pattern, reason) in BANNED {
                if line.contains(pattern) {
                    violations.push(format!("{path}:{}: `{pattern}` — {reason}", lineno + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "banned patterns in production sources:\n{}",
        violations.join("\n")
    );
}
