//! Emitter (§4.5): turns a validated, normalized [`ParsedClass`] into a
//! [`CssRule`], and renders rules to text (pretty or minified).

use crate::catalog::{ModifierKind, ModifierRegistry};
use crate::model::{CssDeclaration, CssRule, ParsedClass};

/// Escape one character of a CSS identifier per the table in §9 ("do not
/// rely on a regex engine for the escape itself"). Characters outside
/// `[A-Za-z0-9_-]` are backslash-escaped; ASCII letters/digits/`_`/`-`
/// pass through unescaped.
fn escape_char(c: char, out: &mut String) {
    if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
        out.push(c);
    } else {
        out.push('\\');
        out.push(c);
    }
}

/// Escape an entire class name for use as (the body of) a CSS selector.
pub fn escape_selector(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    for c in raw.chars() {
        escape_char(c, &mut out);
    }
    out
}

/// Build the full selector for `parsed`: `.` + escaped class name + any
/// pseudo-element/pseudo-class suffixes from its modifiers.
fn build_selector(parsed: &ParsedClass, modifiers: &ModifierRegistry) -> String {
    let mut selector = String::with_capacity(parsed.original.len() + 8);
    selector.push('.');
    selector.push_str(&escape_selector(&parsed.original));

    for modifier in &parsed.modifiers {
        if modifier.kind == ModifierKind::PseudoElement {
            selector.push_str(&modifiers.selector_suffix(modifier));
        }
    }
    for modifier in &parsed.modifiers {
        if modifier.kind == ModifierKind::PseudoClass {
            selector.push_str(&modifiers.selector_suffix(modifier));
        }
    }
    selector
}

/// Build the `@media (...)` wrapper, if any, combining multiple
/// responsive/media modifiers with `and` (§4.5 step 4).
fn build_media_wrapper(parsed: &ParsedClass) -> Option<String> {
    let mut conditions = Vec::new();
    for modifier in &parsed.modifiers {
        match modifier.kind {
            ModifierKind::Responsive => {
                if let Some(px) = modifier.breakpoint_px {
                    conditions.push(format!("(min-width: {px}px)"));
                }
            }
            ModifierKind::Media => {
                if let Some(expr) = modifier.media_expr {
                    conditions.push(expr.to_string());
                }
            }
            ModifierKind::PseudoClass | ModifierKind::PseudoElement => {}
        }
    }
    if conditions.is_empty() {
        None
    } else {
        Some(conditions.join(" and "))
    }
}

/// Build the emitted [`CssRule`] for one validated class and its final
/// normalized declaration value.
pub fn emit_rule(parsed: &ParsedClass, normalized_value: String, modifiers: &ModifierRegistry) -> CssRule {
    CssRule {
        selector: build_selector(parsed, modifiers),
        declarations: vec![CssDeclaration {
            property: parsed.canonical_property.to_string(),
            value: normalized_value,
        }],
        media_wrapper: build_media_wrapper(parsed),
    }
}

/// Render one rule's declarations as `prop: value;` pairs, one per line
/// when `pretty`, all on one line with no separating space when minified.
fn render_declarations(declarations: &[CssDeclaration], minify: bool) -> String {
    if minify {
        declarations
            .iter()
            .map(|d| format!("{}:{}", d.property, d.value))
            .collect::<Vec<_>>()
            .join(";")
    } else {
        declarations
            .iter()
            .map(|d| format!("  {}: {};", d.property, d.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a single rule (selector already finalized by the grouper, if
/// grouping ran) to CSS text.
pub fn render_rule(selector: &str, declarations: &[CssDeclaration], media_wrapper: Option<&str>, minify: bool) -> String {
    let body = render_declarations(declarations, minify);
    let rule = if minify {
        format!("{selector}{{{body}}}")
    } else {
        format!("{selector} {{\n{body}\n}}")
    };
    match media_wrapper {
        Some(condition) if minify => format!("@media {condition}{{{rule}}}"),
        Some(condition) => format!("@media {condition} {{\n{}\n}}", indent(&rule)),
        None => rule,
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BreakpointTable, PropertyCatalog};
    use crate::tokenizer::{parse_class, MAX_CLASS_LENGTH};

    fn harness() -> (PropertyCatalog, ModifierRegistry) {
        (PropertyCatalog::new(), ModifierRegistry::new(BreakpointTable::default()))
    }

    #[test]
    fn escapes_brackets_and_hash_in_selector() {
        assert_eq!(escape_selector("bg-[#f00]"), "bg-\\[\\#f00\\]");
    }

    #[test]
    fn escapes_colon_in_selector() {
        assert_eq!(escape_selector("hover:bg-[red]"), "hover\\:bg-\\[red\\]");
    }

    #[test]
    fn simple_rule_has_no_media_wrapper() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("p-[2rem]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        let rule = emit_rule(&parsed, "2rem".to_string(), &modifiers);
        assert_eq!(rule.selector, ".p-\\[2rem\\]");
        assert!(rule.media_wrapper.is_none());
        assert_eq!(rule.declarations[0].property, "padding");
    }

    #[test]
    fn hover_modifier_appends_pseudo_class() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("hover:bg-[#3b82f6]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        let rule = emit_rule(&parsed, "#3b82f6".to_string(), &modifiers);
        assert_eq!(rule.selector, ".hover\\:bg-\\[\\#3b82f6\\]:hover");
    }

    #[test]
    fn responsive_modifier_produces_media_wrapper() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("md:p-[1rem]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        let rule = emit_rule(&parsed, "1rem".to_string(), &modifiers);
        assert_eq!(rule.media_wrapper.as_deref(), Some("(min-width: 768px)"));
    }

    #[test]
    fn pretty_rendering_matches_scenario_1() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("p-[2rem]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        let rule = emit_rule(&parsed, "2rem".to_string(), &modifiers);
        let rendered = render_rule(&rule.selector, &rule.declarations, rule.media_wrapper.as_deref(), false);
        assert_eq!(rendered, ".p-\\[2rem\\] {\n  padding: 2rem;\n}");
    }

    #[test]
    fn minified_rendering_has_no_insignificant_whitespace() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("p-[2rem]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        let rule = emit_rule(&parsed, "2rem".to_string(), &modifiers);
        let rendered = render_rule(&rule.selector, &rule.declarations, rule.media_wrapper.as_deref(), true);
        assert_eq!(rendered, ".p-\\[2rem\\]{padding:2rem}");
    }

    #[test]
    fn media_wrapped_rule_is_indented_when_pretty() {
        let (catalog, modifiers) = harness();
        let parsed = parse_class("md:p-[1rem]", &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap();
        let rule = emit_rule(&parsed, "1rem".to_string(), &modifiers);
        let rendered = render_rule(&rule.selector, &rule.declarations, rule.media_wrapper.as_deref(), false);
        assert_eq!(
            rendered,
            "@media (min-width: 768px) {\n  .md\\:p-\\[1rem\\] {\n    padding: 1rem;\n  }\n}"
        );
    }
}
