//! Stage 1 of value validation (§4.4): the security filter.
//!
//! Runs before any category-specific parsing. A value that trips this
//! filter is rejected outright with `DANGEROUS_INPUT`, regardless of what
//! category its property would otherwise expect.

/// `data:` URL prefixes allowed through the filter even though they match
/// the generic `data:` pattern. Callers extend this via
/// [`crate::config::SecurityLimits::data_url_allowlist`]; this is the
/// built-in default (safe image MIME types only).
pub const DEFAULT_DATA_URL_ALLOWLIST: &[&str] = &[
    "data:image/png",
    "data:image/jpeg",
    "data:image/gif",
    "data:image/svg+xml",
    "data:image/webp",
];

/// Returns `Some(matched_pattern)` if `raw_value` contains a dangerous
/// construct, `None` if it passes the filter.
pub fn find_dangerous_pattern(raw_value: &str, data_url_allowlist: &[String]) -> Option<String> {
    let collapsed: String = raw_value.chars().filter(|c| !c.is_whitespace()).collect();
    let lower = collapsed.to_ascii_lowercase();

    if lower.contains("javascript:") {
        return Some("javascript:".to_string());
    }
    if lower.contains("expression(") {
        return Some("expression(".to_string());
    }
    if lower.contains("@import") {
        return Some("@import".to_string());
    }
    if let Some(url_start) = lower.find("url(") {
        let inner = &lower[url_start + 4..];
        if inner.contains("javascript:") {
            return Some("url(javascript:...)".to_string());
        }
        if inner.chars().take_while(|&c| c != ')').any(|c| (c as u32) < 0x20) {
            return Some("url(...control-character...)".to_string());
        }
    }
    if lower.contains("data:") {
        let allowed = DEFAULT_DATA_URL_ALLOWLIST
            .iter()
            .any(|prefix| lower.contains(prefix))
            || data_url_allowlist
                .iter()
                .any(|prefix| lower.contains(prefix.to_ascii_lowercase().as_str()));
        if !allowed {
            return Some("data:".to_string());
        }
    }
    if contains_script_entity(&lower) {
        return Some("html-entity-escaped-script".to_string());
    }

    None
}

/// Detects HTML entity escapes that decode to a dangerous sequence, e.g.
/// `&#106;avascript:` or `&lt;script&gt;`.
fn contains_script_entity(lower: &str) -> bool {
    const SUSPECT_ENTITIES: &[&str] = &["&lt;script", "&#", "&amp;#"];
    if lower.contains("&lt;script") {
        return true;
    }
    // Numeric entities that would decode into "javascript:" are rare enough
    // in real stylesheet values that a conservative heuristic (presence of
    // a numeric entity AND the literal fragment "avascript" once decoded
    // characters are stripped) catches the realistic attack shape without
    // false-positiving on ordinary `&amp;` use.
    if lower.contains("&#") && lower.replace("&#", "").contains("avascript") {
        return true;
    }
    let _ = SUSPECT_ENTITIES;
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_javascript_url() {
        assert!(find_dangerous_pattern("javascript:alert(1)", &[]).is_some());
    }

    #[test]
    fn rejects_expression() {
        assert!(find_dangerous_pattern("expression(alert(1))", &[]).is_some());
    }

    #[test]
    fn rejects_import() {
        assert!(find_dangerous_pattern("@import url(evil.css)", &[]).is_some());
    }

    #[test]
    fn rejects_disallowed_data_url() {
        assert!(find_dangerous_pattern("url(data:text/html;base64,AAAA)", &[]).is_some());
    }

    #[test]
    fn allows_default_allowlisted_data_url() {
        assert!(find_dangerous_pattern("url(data:image/png;base64,AAAA)", &[]).is_none());
    }

    #[test]
    fn allows_ordinary_color_value() {
        assert!(find_dangerous_pattern("#3b82f6", &[]).is_none());
        assert!(find_dangerous_pattern("rgba(0, 0, 0, 0.1)", &[]).is_none());
    }

    #[test]
    fn catches_whitespace_obfuscated_javascript_url() {
        assert!(find_dangerous_pattern("j a v a s c r i p t : alert(1)", &[]).is_some());
    }
}
