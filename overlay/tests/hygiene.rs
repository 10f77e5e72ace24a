//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for antipatterns. Every pattern has
//! a budget of zero: pointer-driven UI logic has no business panicking or
//! silently discarding errors, and nothing here is allowed to regress.

use std::fs;
use std::path::Path;

/// (needle, why it is banned)
const BANNED: [(&str, &str); 9] = [
    (".unwrap()", "panics crash the host page"),
    (".expect(", "panics crash the host page"),
    ("panic!(", "panics crash the host page"),
    ("unreachable!(", "panics crash the host page"),
    ("todo!(", "stubs must not ship"),
    ("unimplemented!(", "stubs must not ship"),
    ("let _ =", "errors must be inspected, not discarded"),
    (".ok()", "errors must be inspected, not discarded"),
    ("#[allow(dead_code)]", "dead code must be removed instead"),
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
        // Sibling *_test.rs modules are exempt; they may panic freely.
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_code_stays_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for (needle, why) in BANNED {
        for (path, content) in &files {
            for (lineno, line) in content.lines().enumerate() {
                if line.contains(needle) {
                    violations.push(format!("{path}:{}: `{needle}` — {why}", lineno + 1));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "hygiene violations (budget is zero):\n{}",
        violations.join("\n")
    );
}
