//! Hygiene — source budgets for the production modules under `src/`.
//!
//! A panic inside a WASM event handler takes every component on the page down
//! with it, so panicking calls and silently discarded results are budgeted at
//! zero. Browser-only code must stay behind the `hydrate` feature so the
//! native test build never links `web-sys`.

use std::fs;
use std::path::Path;

/// Modules that are declared `#[cfg(feature = "hydrate")]` as a whole in
/// `lib.rs`.
const HYDRATE_ONLY_MODULES: &[&str] = &["api.rs", "dom.rs"];

struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, reason: "panics in the browser" },
    Budget { pattern: ".expect(", max: 0, reason: "panics in the browser" },
    Budget { pattern: "panic!(", max: 0, reason: "panics in the browser" },
    Budget { pattern: "unreachable!(", max: 0, reason: "panics in the browser" },
    Budget { pattern: "todo!(", max: 0, reason: "unfinished code path" },
    Budget { pattern: "unimplemented!(", max: 0, reason: "unfinished code path" },
    Budget { pattern: "let _ =", max: 0, reason: "discards an error without logging it" },
    Budget { pattern: ".ok()", max: 0, reason: "discards an error without logging it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, reason: "dead code should be deleted" },
];

struct SourceFile {
    name: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let Ok(entries) = fs::read_dir(Path::new("src")) else {
        return Vec::new();
    };
    let mut files: Vec<SourceFile> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "rs"))
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                return None;
            }
            let content = fs::read_to_string(&path).ok()?;
            Some(SourceFile { name, content })
        })
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(i, line)| format!("  {}:{}: {}", file.name, i + 1, line.trim()))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.name == "lib.rs"), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        if found.len() > budget.max {
            failures.push(format!(
                "`{}` ({}): found {}, max {}\n{}",
                budget.pattern,
                budget.reason,
                found.len(),
                budget.max,
                found.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn browser_code_is_feature_gated() {
    let files = source_files();
    let ungated: Vec<&str> = files
        .iter()
        .filter(|file| !HYDRATE_ONLY_MODULES.contains(&file.name.as_str()))
        .filter(|file| file.content.contains("web_sys::") || file.content.contains("wasm_bindgen"))
        .filter(|file| !file.content.contains("#[cfg(feature = \"hydrate\")]"))
        .map(|file| file.name.as_str())
        .collect();
    assert!(ungated.is_empty(), "browser code outside a hydrate gate: {ungated:?}");
}

#[test]
fn hydrate_only_modules_are_gated_in_lib() {
    let files = source_files();
    let Some(lib) = files.iter().find(|f| f.name == "lib.rs") else {
        return;
    };
    let lines: Vec<&str> = lib.content.lines().collect();
    for module in HYDRATE_ONLY_MODULES {
        let decl = format!("mod {};", module.trim_end_matches(".rs"));
        let index = lines.iter().position(|line| line.trim_end().ends_with(&decl));
        let gated = index.is_some_and(|i| i > 0 && lines[i - 1].contains("feature = \"hydrate\""));
        assert!(gated, "{decl} must be declared behind the hydrate feature");
    }
}
