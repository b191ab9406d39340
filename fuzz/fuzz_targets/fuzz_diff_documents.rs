#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_refdiff::DiffEngine;
use sbom_refdiff::parsers::parse_sbom_str;
use sbom_refdiff::reports::render_change_lines;

/// Fuzz the comparison of two documents.
///
/// The input is split at the first NUL byte into an old and a new document.
/// Whatever parses is diffed and rendered; the engine must never panic and
/// comparing a document with itself must report nothing.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (old_text, new_text) = s.split_once('\0').unwrap_or((s, s));
    let (Ok(old), Ok(new)) = (parse_sbom_str(old_text), parse_sbom_str(new_text)) else {
        return;
    };

    let engine = DiffEngine::new();
    let result = engine.diff(&old, &new);
    let _ = render_change_lines(&result.changes);

    assert!(!engine.diff(&old, &old).has_changes());
});
