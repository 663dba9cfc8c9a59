//! Font-family normalization (stage 3, §4.4): multi-word family names are
//! quoted, single-keyword generic families (`sans-serif`, `monospace`, ...)
//! and already-quoted names pass through unchanged. User-provided names have
//! dashes converted to spaces and are title-cased per word, with a small set
//! of acronym overrides; multi-word detection happens on the string after
//! dash-to-space conversion, not on the raw token.

const GENERIC_FAMILIES: &[&str] = &[
    "serif", "sans-serif", "monospace", "cursive", "fantasy", "system-ui", "ui-serif",
    "ui-sans-serif", "ui-monospace", "ui-rounded", "math", "emoji", "fangsong",
];

/// Small-word overrides applied after per-word title-casing (§4.4).
const ACRONYM_OVERRIDES: &[(&str, &str)] = &[("ms", "MS"), ("nt", "NT"), ("ui", "UI")];

fn title_case_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if let Some(&(_, acronym)) = ACRONYM_OVERRIDES.iter().find(|&&(w, _)| w == lower) {
        return acronym.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}

/// Normalize one comma-separated entry of a `font-family` value list.
pub fn normalize_font_family(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.starts_with('"') || trimmed.starts_with('\'') {
        return trimmed.to_string();
    }
    if GENERIC_FAMILIES.contains(&trimmed.to_ascii_lowercase().as_str()) {
        return trimmed.to_ascii_lowercase();
    }

    let converted = trimmed.replace('-', " ");
    let title_cased = converted.split(' ').map(title_case_word).collect::<Vec<_>>().join(" ");

    if converted.contains(' ') {
        format!("\"{title_cased}\"")
    } else {
        title_cased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_multi_word_family() {
        assert_eq!(normalize_font_family("Fira Sans"), "\"Fira Sans\"");
    }

    #[test]
    fn leaves_generic_family_unquoted() {
        assert_eq!(normalize_font_family("sans-serif"), "sans-serif");
        assert_eq!(normalize_font_family("Sans-Serif"), "sans-serif");
    }

    #[test]
    fn leaves_already_quoted_family_unchanged() {
        assert_eq!(normalize_font_family("'Fira Sans'"), "'Fira Sans'");
    }

    #[test]
    fn leaves_single_word_custom_family_unchanged() {
        assert_eq!(normalize_font_family("Inter"), "Inter");
    }

    #[test]
    fn converts_dashes_to_spaces_and_title_cases() {
        assert_eq!(normalize_font_family("helvetica-neue"), "\"Helvetica Neue\"");
    }

    #[test]
    fn applies_acronym_overrides_after_dash_conversion() {
        assert_eq!(normalize_font_family("ms-gothic"), "\"MS Gothic\"");
        assert_eq!(normalize_font_family("segoe-ui"), "\"Segoe UI\"");
        assert_eq!(normalize_font_family("bank-gothic-nt"), "\"Bank Gothic NT\"");
    }
}
