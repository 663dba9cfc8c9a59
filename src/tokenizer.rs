//! Tokenizer / parser (§4.3): turns a raw class string into a
//! [`ParsedClass`] or an [`InvalidEntry`].
//!
//! Splitting always respects bracket/paren nesting — `:` and `,` inside
//! `[...]` or `(...)` never count as top-level delimiters.

use crate::catalog::{ModifierRegistry, PropertyCatalog};
use crate::error::ErrorCode;
use crate::model::{InvalidEntry, ParsedClass};

pub const MAX_CLASS_LENGTH: usize = 1000;

/// Split `s` on `sep` at bracket depth zero, where depth increases on `[`
/// and decreases on `]`. Returns `None` if brackets never balance.
fn split_top_level(s: &str, sep: char) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            c if c == sep && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(&s[start..]);
    Some(parts)
}

/// Split a bracket's inner value on `,` at paren depth zero (nested
/// function calls like `rgba(...)` or `calc(...)` are never split).
pub fn split_value_tokens(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut tokens = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                tokens.push(chars[start..i].iter().collect::<String>().trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    tokens.push(chars[start..].iter().collect::<String>().trim().to_string());
    tokens
}

/// Find the matching `]` for the `[` at `open_idx`, honoring nested `[`.
/// Returns the byte index of the matching `]`.
fn find_matching_bracket(s: &str, open_idx: usize) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in s.char_indices().skip(open_idx) {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse one raw class token into a [`ParsedClass`], or an [`InvalidEntry`]
/// describing why it was rejected.
pub fn parse_class(
    raw: &str,
    catalog: &PropertyCatalog,
    modifiers: &ModifierRegistry,
    max_class_length: usize,
) -> Result<ParsedClass, InvalidEntry> {
    let char_count = raw.chars().count();
    if char_count > max_class_length {
        return Err(InvalidEntry::new(
            raw,
            ErrorCode::InputTooLong,
            format!(
                "class length {char_count} exceeds the maximum of {max_class_length}"
            ),
        ));
    }
    if raw.is_empty() {
        return Err(InvalidEntry::new(
            raw,
            ErrorCode::InvalidClassSyntax,
            "empty class token".to_string(),
        ));
    }

    let segments = split_top_level(raw, ':').ok_or_else(|| {
        InvalidEntry::new(
            raw,
            ErrorCode::InvalidClassSyntax,
            "unbalanced brackets while splitting modifiers".to_string(),
        )
    })?;

    let (modifier_segments, utility) = segments.split_at(segments.len() - 1);
    let utility = utility[0];

    let mut resolved_modifiers = Vec::with_capacity(modifier_segments.len());
    for &segment in modifier_segments {
        match modifiers.get(segment) {
            Some(descriptor) => resolved_modifiers.push(descriptor.clone()),
            None => {
                return Err(InvalidEntry::new(
                    raw,
                    ErrorCode::InvalidClassSyntax,
                    format!("unknown modifier '{segment}'"),
                ));
            }
        }
    }

    if utility.is_empty() {
        return Err(InvalidEntry::new(
            raw,
            ErrorCode::InvalidClassSyntax,
            "missing utility segment after modifiers".to_string(),
        ));
    }

    let (prefix, descriptor) = catalog.longest_match(utility).ok_or_else(|| {
        InvalidEntry::new(
            raw,
            ErrorCode::PropertyNotSupported,
            format!("no property matches prefix in '{utility}'"),
        )
    })?;

    let rest = &utility[prefix.len() + 1..];
    let raw_value = if rest.starts_with('[') {
        let open_idx = prefix.len() + 1;
        let close_idx = find_matching_bracket(utility, open_idx).ok_or_else(|| {
            InvalidEntry::new(
                raw,
                ErrorCode::InvalidClassSyntax,
                "unbalanced brackets in value".to_string(),
            )
        })?;
        if close_idx != utility.len() - 1 {
            return Err(InvalidEntry::new(
                raw,
                ErrorCode::InvalidClassSyntax,
                "trailing characters after closing bracket".to_string(),
            ));
        }
        utility[open_idx + 1..close_idx].to_string()
    } else {
        rest.to_string()
    };

    if raw_value.is_empty() {
        return Err(InvalidEntry::new(
            raw,
            ErrorCode::InvalidClassSyntax,
            "empty value".to_string(),
        ));
    }
    if raw_value.ends_with(',') || raw_value.starts_with(',') {
        return Err(InvalidEntry::new(
            raw,
            ErrorCode::InvalidClassSyntax,
            "trailing or leading delimiter in value".to_string(),
        ));
    }

    let value_tokens = split_value_tokens(&raw_value);

    Ok(ParsedClass {
        original: raw.to_string(),
        modifiers: resolved_modifiers,
        prefix: prefix.to_string(),
        canonical_property: descriptor.canonical_name,
        accepts_shorthand: descriptor.accepts_shorthand,
        category: descriptor.category,
        raw_value,
        value_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BreakpointTable, ModifierRegistry, PropertyCatalog};

    fn harness() -> (PropertyCatalog, ModifierRegistry) {
        (PropertyCatalog::new(), ModifierRegistry::new(BreakpointTable::default()))
    }

    #[test]
    fn parses_simple_bracket_class() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("p-[2rem]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        assert_eq!(parsed.canonical_property, "padding");
        assert_eq!(parsed.raw_value, "2rem");
        assert_eq!(parsed.value_tokens, vec!["2rem"]);
    }

    #[test]
    fn parses_modifiers_in_order() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("hover:bg-[#3b82f6]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        assert_eq!(parsed.modifiers.len(), 1);
        assert_eq!(parsed.modifiers[0].name, "hover");
    }

    #[test]
    fn splits_top_level_commas_but_not_nested() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class(
            "box-shadow-[0,4px,6px,rgba(0,0,0,0.1)]",
            &catalog,
            &modifiers,
            MAX_CLASS_LENGTH,
        )
        .unwrap();
        assert_eq!(
            parsed.value_tokens,
            vec!["0", "4px", "6px", "rgba(0,0,0,0.1)"]
        );
    }

    #[test]
    fn empty_bracket_value_is_invalid() {
        let (catalog, modifiers) = harness();
        let err = parse_class("m-[]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap_err();
        assert_eq!(err.reason_code, ErrorCode::InvalidClassSyntax);
    }

    #[test]
    fn unknown_prefix_is_property_not_supported() {
        let (catalog, modifiers) = harness();
        let err = parse_class("unknownprop-[1px]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap_err();
        assert_eq!(err.reason_code, ErrorCode::PropertyNotSupported);
    }

    #[test]
    fn unbalanced_brackets_are_invalid() {
        let (catalog, modifiers) = harness();
        let err = parse_class("p-[2rem", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap_err();
        assert_eq!(err.reason_code, ErrorCode::InvalidClassSyntax);
    }

    #[test]
    fn nested_brackets_inside_value_are_balanced() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class(
            "grid-template-columns-[repeat(2,1fr)]",
            &catalog,
            &modifiers,
            MAX_CLASS_LENGTH,
        )
        .unwrap();
        assert_eq!(parsed.raw_value, "repeat(2,1fr)");
    }

    #[test]
    fn class_at_exactly_max_length_is_accepted() {
        let (catalog, modifiers) = harness();
        let long_value = "a".repeat(MAX_CLASS_LENGTH - "p-[]".len());
        let class = format!("p-[{long_value}]");
        assert_eq!(class.len(), MAX_CLASS_LENGTH);
        assert!(parse_class(&class, &catalog, &modifiers, MAX_CLASS_LENGTH).is_ok());
    }

    #[test]
    fn class_over_max_length_is_rejected() {
        let (catalog, modifiers) = harness();
        let long_value = "a".repeat(MAX_CLASS_LENGTH - "p-[]".len() + 1);
        let class = format!("p-[{long_value}]");
        let err = parse_class(&class, &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap_err();
        assert_eq!(err.reason_code, ErrorCode::InputTooLong);
    }

    #[test]
    fn longest_prefix_wins_tie_break() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("border-color-[red]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        assert_eq!(parsed.canonical_property, "border-color");
    }
}
