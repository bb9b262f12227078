//! Integration Test: Surface Isolation and Async Pacing
//!
//! Two policies keep the engine portable and the UI responsive:
//!
//! **Policy 1**: `intake-core` is a headless crate. Production code under
//! `intake/core/src` must never reference ratatui or crossterm; the engine
//! has to be drivable from any surface, including headless test harnesses.
//!
//! **Policy 2**: All pacing is cooperative. Production code must not call
//! `std::thread::sleep`; every delay is a `tokio::time` timer that yields
//! back to the event loop, so the close signal stays responsive mid-reveal.

use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path relative to the workspace root
fn workspace_path(relative: &str) -> PathBuf {
    // CARGO_MANIFEST_DIR = <root>/tests/architectural-enforcement
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Strip `#[cfg(test)] mod tests { ... }` blocks before scanning
///
/// Naive but sufficient: everything from the cfg(test) marker to the end of
/// file is test code in this workspace's layout (test modules sit last).
fn production_code(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(pos) => &content[..pos],
        None => content,
    }
}

#[test]
fn test_core_has_no_ui_dependencies() {
    let core_src = workspace_path("intake/core/src");
    assert!(core_src.exists(), "intake/core/src must exist");

    let mut violations = Vec::new();
    for path in rust_sources(&core_src) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for needle in ["ratatui", "crossterm"] {
            if content.contains(needle) {
                violations.push(format!("{}: references {}", path.display(), needle));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "intake-core must stay UI-free:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_no_blocking_sleep_in_production_code() {
    let mut violations = Vec::new();

    for dir in ["intake/core/src", "tui/src"] {
        let dir = workspace_path(dir);
        for path in rust_sources(&dir) {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for (lineno, line) in production_code(&content).lines().enumerate() {
                if line.contains("std::thread::sleep") || line.contains("thread::sleep") {
                    violations.push(format!("{}:{}: {}", path.display(), lineno + 1, line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "blocking sleeps are forbidden in production code (use tokio::time):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_core_manifest_lists_no_ui_crates() {
    let manifest = workspace_path("intake/core/Cargo.toml");
    let content = fs::read_to_string(&manifest).expect("core manifest must be readable");
    for needle in ["ratatui", "crossterm"] {
        assert!(
            !content.contains(needle),
            "intake-core's manifest must not depend on {needle}"
        );
    }
}
