//! Color value normalization (stage 3, §4.4): shorthand hex expansion and
//! lowercasing. Named colors and color functions pass through unchanged
//! beyond whitespace trimming — their canonical form is already valid CSS.

/// Expand `#abc` / `#abcd` to `#aabbcc` / `#aabbccdd` and lowercase any hex
/// color. Non-hex color tokens (named colors, `rgb(...)`, etc.) are
/// returned unchanged.
pub fn normalize_color(token: &str) -> String {
    if let Some(hex) = token.strip_prefix('#') {
        if hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let expanded = match hex.len() {
                3 | 4 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
                6 | 8 => hex.to_string(),
                _ => hex.to_string(),
            };
            return format!("#{}", expanded.to_ascii_lowercase());
        }
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_three_digit_hex() {
        assert_eq!(normalize_color("#F00"), "#ff0000");
    }

    #[test]
    fn expands_four_digit_hex_with_alpha() {
        assert_eq!(normalize_color("#f00a"), "#ff0000aa");
    }

    #[test]
    fn six_digit_hex_is_lowercased_only() {
        assert_eq!(normalize_color("#3B82F6"), "#3b82f6");
    }

    #[test]
    fn non_hex_color_passes_through() {
        assert_eq!(normalize_color("rebeccapurple"), "rebeccapurple");
        assert_eq!(normalize_color("rgba(0,0,0,0.1)"), "rgba(0,0,0,0.1)");
    }
}
