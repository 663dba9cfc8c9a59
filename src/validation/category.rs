//! Stage 2 of value validation (§4.4): per-token category validation.

use crate::catalog::{is_named_color, Category, CSS_WIDE_KEYWORDS};
use regex::Regex;
use std::sync::OnceLock;

fn length_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^-?\d*\.?\d+(px|em|rem|%|vh|vw|vmin|vmax|ch|ex|cm|mm|in|pt|pc|fr|s|ms|deg|rad|turn)$",
        )
        .unwrap()
    })
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^#([0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap())
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d*\.?\d+$").unwrap())
}

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9-]*$").unwrap())
}

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "oklch(", "oklab(", "lab(", "lch(", "color(", "color-mix(",
];

const MATH_FUNCTIONS: &[&str] = &["calc(", "min(", "max(", "clamp("];

/// Recognized CSS functions accepted for the COMPLEX category beyond the
/// simpler categories (§4.4 stage 2, COMPLEX bullet).
const RECOGNIZED_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "oklch(", "oklab(", "lab(", "lch(", "color(", "color-mix(",
    "calc(", "min(", "max(", "clamp(", "var(", "linear-gradient(", "radial-gradient(",
    "conic-gradient(", "repeating-linear-gradient(", "repeating-radial-gradient(",
    "repeating-conic-gradient(", "translate(", "translatex(", "translatey(", "translatez(",
    "translate3d(", "scale(", "scalex(", "scaley(", "rotate(", "rotatex(", "rotatey(", "skew(",
    "skewx(", "skewy(", "matrix(", "matrix3d(", "blur(", "brightness(", "contrast(",
    "drop-shadow(", "grayscale(", "hue-rotate(", "invert(", "saturate(", "sepia(", "url(",
    "cubic-bezier(", "steps(", "minmax(", "repeat(", "fit-content(",
];

fn is_length_token(token: &str) -> bool {
    token == "0" || token == "auto" || length_re().is_match(token) || is_math_function(token)
}

fn is_math_function(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    MATH_FUNCTIONS.iter().any(|f| lower.starts_with(f)) && lower.ends_with(')')
}

fn is_color_token(token: &str) -> bool {
    if hex_color_re().is_match(token) {
        return true;
    }
    if is_named_color(token) {
        return true;
    }
    let lower = token.to_ascii_lowercase();
    COLOR_FUNCTIONS.iter().any(|f| lower.starts_with(f)) && lower.ends_with(')')
}

fn is_number_token(token: &str) -> bool {
    number_re().is_match(token)
}

fn is_keyword_token(token: &str) -> bool {
    keyword_re().is_match(token) || CSS_WIDE_KEYWORDS.contains(&token)
}

fn is_recognized_function(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    RECOGNIZED_FUNCTIONS.iter().any(|f| lower.starts_with(f)) && lower.ends_with(')')
}

/// Validate a single already-split value token against `category`.
/// Returns `Ok(())` or an error message suitable for an `InvalidEntry`.
pub fn validate_token(token: &str, category: Category) -> Result<(), String> {
    if token.is_empty() {
        return Err("empty value token".to_string());
    }
    let ok = match category {
        Category::Length => is_length_token(token),
        Category::Color => is_color_token(token),
        Category::Number => is_number_token(token),
        Category::Keyword => is_keyword_token(token),
        Category::Complex => {
            is_length_token(token)
                || is_color_token(token)
                || is_number_token(token)
                || is_keyword_token(token)
                || is_recognized_function(token)
        }
    };
    if ok {
        Ok(())
    } else {
        Err(format!("'{token}' is not a valid {} value", category.as_str()))
    }
}
