//! Grouper/Minifier (§4.6, §4.7): combines rules that share identical
//! declarations under one comma-joined selector, then assembles the final
//! CSS text.

use crate::emitter::render_rule;
use crate::model::{CssDeclaration, CssRule};

const GENERATED_COMMENT: &str = "/* Generated by ZyraCSS */";

/// Group rules whose `(media_wrapper, declarations)` are identical,
/// concatenating their selectors with `,`. Ordering: first-appearance
/// order within a group, and groups ordered by the first appearance of
/// their first selector (§4.6).
pub fn group_selectors(rules: Vec<CssRule>) -> Vec<CssRule> {
    let mut order: Vec<(Option<String>, Vec<CssDeclaration>)> = Vec::new();
    let mut selectors_by_key: Vec<Vec<String>> = Vec::new();

    for rule in rules {
        let key = (rule.media_wrapper.clone(), rule.declarations.clone());
        if let Some(idx) = order.iter().position(|k| *k == key) {
            selectors_by_key[idx].push(rule.selector);
        } else {
            order.push(key);
            selectors_by_key.push(vec![rule.selector]);
        }
    }

    order
        .into_iter()
        .zip(selectors_by_key)
        .map(|((media_wrapper, declarations), selectors)| CssRule {
            selector: selectors.join(","),
            declarations,
            media_wrapper,
        })
        .collect()
}

/// Assemble the final CSS text from (possibly grouped) rules. An empty
/// rule set always assembles to the empty string (§8: empty input → `css
/// = ""`), regardless of `include_comments`.
pub fn assemble(rules: &[CssRule], minify: bool, include_comments: bool) -> String {
    if rules.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if include_comments && !minify {
        out.push_str(GENERATED_COMMENT);
        out.push('\n');
    }

    let rendered: Vec<String> = rules
        .iter()
        .map(|rule| render_rule(&rule.selector, &rule.declarations, rule.media_wrapper.as_deref(), minify))
        .collect();

    if minify {
        out.push_str(&rendered.join(""));
    } else {
        out.push_str(&rendered.join("\n\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, value: &str) -> CssDeclaration {
        CssDeclaration {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn groups_rules_with_identical_declarations() {
        let rules = vec![
            CssRule {
                selector: ".bg-\\[\\#f00\\]".to_string(),
                declarations: vec![decl("background", "#ff0000")],
                media_wrapper: None,
            },
            CssRule {
                selector: ".bg-\\[\\#ff0000\\]".to_string(),
                declarations: vec![decl("background", "#ff0000")],
                media_wrapper: None,
            },
        ];
        let grouped = group_selectors(rules);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].selector, ".bg-\\[\\#f00\\],.bg-\\[\\#ff0000\\]");
    }

    #[test]
    fn does_not_group_rules_with_different_media_wrappers() {
        let rules = vec![
            CssRule {
                selector: ".a".to_string(),
                declarations: vec![decl("padding", "1rem")],
                media_wrapper: None,
            },
            CssRule {
                selector: ".b".to_string(),
                declarations: vec![decl("padding", "1rem")],
                media_wrapper: Some("(min-width: 768px)".to_string()),
            },
        ];
        let grouped = group_selectors(rules);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn assemble_prepends_comment_when_not_minified_and_requested() {
        let rules = vec![CssRule {
            selector: ".p-\\[2rem\\]".to_string(),
            declarations: vec![decl("padding", "2rem")],
            media_wrapper: None,
        }];
        let css = assemble(&rules, false, true);
        assert!(css.starts_with(GENERATED_COMMENT));
    }

    #[test]
    fn assemble_never_emits_comment_when_minified() {
        let rules = vec![CssRule {
            selector: ".p-\\[2rem\\]".to_string(),
            declarations: vec![decl("padding", "2rem")],
            media_wrapper: None,
        }];
        let css = assemble(&rules, true, true);
        assert!(!css.contains("/*"));
        assert_eq!(css, ".p-\\[2rem\\]{padding:2rem}");
    }

    #[test]
    fn empty_rules_produce_empty_css() {
        assert_eq!(assemble(&[], false, true), "");
        assert_eq!(assemble(&[], true, false), "");
    }
}
