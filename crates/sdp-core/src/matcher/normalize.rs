//! Loose-comparison normalization for titles and filenames.

use unicode_normalization::UnicodeNormalization;

/// Canonical-compose, lowercase, trim and collapse internal whitespace.
///
/// Idempotent: applying it twice yields the same string.
pub fn normalize(s: &str) -> String {
    let composed: String = s.nfc().collect();
    let lowered = composed.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_trims_and_collapses() {
        assert_eq!(normalize("  SFDR   Calculator \t v2 "), "sfdr calculator v2");
    }

    #[test]
    fn composes_decomposed_accents() {
        // "é" as 'e' + combining acute composes to the single code point.
        assert_eq!(normalize("Caracte\u{0301}risation"), "caract\u{e9}risation");
        assert_eq!(normalize("Caract\u{e9}risation"), "caract\u{e9}risation");
    }

    #[test]
    fn idempotent() {
        for s in ["", "  A  B  ", "Mixed CASE", "de\u{0301}ja\u{0300} vu", "tab\there"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
