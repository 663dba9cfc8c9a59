//! Length/number normalization (stage 3, §4.4): zero-unit collapsing and
//! `calc()` operator spacing.

use std::sync::OnceLock;

fn zero_with_unit_re() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex::Regex::new(r"^0(px|em|rem|%|vh|vw|vmin|vmax|ch|ex|cm|mm|in|pt|pc|fr)$").unwrap()
    })
}

/// Collapse `0px`, `0rem`, etc. to the bare `0` (the units are meaningless
/// on a zero length, per the CSS spec). `calc(...)` expressions have their
/// binary operators re-spaced to the canonical `a + b` form.
pub fn normalize_length(token: &str) -> String {
    if zero_with_unit_re().is_match(token) {
        return "0".to_string();
    }
    let lower = token.to_ascii_lowercase();
    if lower.starts_with("calc(") && lower.ends_with(')') {
        return normalize_calc(token);
    }
    token.to_string()
}

/// Ensure exactly one space surrounds each top-level `+ - * /` operator
/// inside a `calc()` expression, without touching the sign of a leading
/// negative number or nested parens.
fn normalize_calc(token: &str) -> String {
    let inner_start = token.find('(').unwrap() + 1;
    let inner = &token[inner_start..token.len() - 1];
    let mut out = String::new();
    let chars: Vec<char> = inner.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if matches!(c, '+' | '-' | '*' | '/') {
            let prev_is_space_or_start = out.ends_with(' ') || out.is_empty();
            let looks_like_sign = matches!(c, '+' | '-')
                && !prev_is_space_or_start
                && !out.trim_end().ends_with(|p: char| p.is_ascii_digit() || p == '%' || p == ')');
            if looks_like_sign {
                out.push(c);
            } else {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push(' ');
                out.push(c);
                out.push(' ');
            }
        } else {
            out.push(c);
        }
        i += 1;
    }
    let collapsed = out.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("calc({collapsed})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_zero_with_unit() {
        assert_eq!(normalize_length("0px"), "0");
        assert_eq!(normalize_length("0rem"), "0");
    }

    #[test]
    fn leaves_nonzero_length_unchanged() {
        assert_eq!(normalize_length("2rem"), "2rem");
    }

    #[test]
    fn spaces_calc_operators() {
        assert_eq!(normalize_length("calc(100%-2rem)"), "calc(100% - 2rem)");
        assert_eq!(normalize_length("calc(100% - 2rem)"), "calc(100% - 2rem)");
    }
}
