//! Stage 3 of the value pipeline (§4.4): normalize already-validated value
//! tokens into their canonical CSS form. Runs strictly after
//! [`crate::validation`] — normalization never rejects a value, it only
//! reshapes one that already passed.

mod color;
mod font;
mod function;
mod length;

use crate::catalog::Category;

/// Normalize every value token of a parsed, validated class and join them
/// into the final declaration value. Shorthand properties are written with
/// the DSL's top-level commas rejoined as spaces (`margin-[1rem,2rem]` →
/// `margin: 1rem 2rem`), matching how these properties are actually
/// space-separated in CSS; only function arguments keep comma-space
/// separation, handled inside [`function::normalize_function_commas`].
pub fn normalize_value(category: Category, canonical_property: &str, tokens: &[String]) -> String {
    let normalized: Vec<String> = tokens
        .iter()
        .map(|t| normalize_token(category, canonical_property, t))
        .collect();
    normalized.join(" ")
}

fn normalize_token(category: Category, canonical_property: &str, token: &str) -> String {
    if canonical_property.contains("font-family") {
        return font::normalize_font_family(token);
    }

    let mut value = token.trim().to_string();
    if value.contains('(') && value.ends_with(')') {
        value = function::normalize_function_commas(&value);
    }
    match category {
        Category::Length => length::normalize_length(&value),
        Category::Color => color::normalize_color(&value),
        // Hex-color lowercasing/expansion (§4.4 stage 3) applies to every
        // accepted value, not only the COLOR category — a COMPLEX property
        // like `background` still needs `#f00`/`#ff0000` to normalize to the
        // same declaration so they dedup and group (§8 scenario 3).
        // `normalize_color` is a no-op for tokens that aren't `#`-prefixed
        // hex, so non-color COMPLEX/KEYWORD/NUMBER tokens pass through
        // unchanged.
        Category::Number | Category::Keyword | Category::Complex => color::normalize_color(&value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_single_length_token() {
        assert_eq!(normalize_value(Category::Length, "padding", &["0px".to_string()]), "0");
    }

    #[test]
    fn normalizes_shorthand_list_preserving_order() {
        let tokens = vec!["1rem".to_string(), "0px".to_string(), "2rem".to_string()];
        assert_eq!(
            normalize_value(Category::Length, "margin", &tokens),
            "1rem 0 2rem"
        );
    }

    #[test]
    fn normalizes_box_shadow_tokens_space_separated() {
        let tokens = vec![
            "0".to_string(),
            "4px".to_string(),
            "6px".to_string(),
            "rgba(0,0,0,0.1)".to_string(),
        ];
        assert_eq!(
            normalize_value(Category::Complex, "box-shadow", &tokens),
            "0 4px 6px rgba(0, 0, 0, 0.1)"
        );
    }

    #[test]
    fn normalizes_hex_color() {
        assert_eq!(
            normalize_value(Category::Color, "background-color", &["#F00".to_string()]),
            "#ff0000"
        );
    }

    #[test]
    fn normalizes_hex_color_under_complex_category_too() {
        assert_eq!(
            normalize_value(Category::Complex, "background", &["#f00".to_string()]),
            "#ff0000"
        );
        assert_eq!(
            normalize_value(Category::Complex, "background", &["#ff0000".to_string()]),
            "#ff0000"
        );
    }

    #[test]
    fn normalizes_single_font_family_token() {
        let tokens = vec!["Fira Sans".to_string()];
        assert_eq!(
            normalize_value(Category::Keyword, "font-family", &tokens),
            "\"Fira Sans\""
        );
    }
}
