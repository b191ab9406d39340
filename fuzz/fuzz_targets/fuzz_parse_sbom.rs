#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz document loading.
///
/// Feeds arbitrary UTF-8 strings to `parse_sbom_str`, then walks the
/// component view of anything that parses.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(doc) = sbom_refdiff::parsers::parse_sbom_str(s)
    {
        for component in doc.components() {
            let _ = component.logical_key();
        }
    }
});
