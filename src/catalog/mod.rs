//! Property and modifier catalog.
//!
//! Built once at engine construction from static tables (§4.1 of the design
//! spec) and treated as immutable afterward — freely shareable across
//! threads without locking, unlike the generation cache.

mod colors;
mod modifiers;
mod properties;

pub use colors::{is_named_color, CSS_WIDE_KEYWORDS};
pub use modifiers::{Breakpoint, BreakpointTable, ModifierDescriptor, ModifierKind, ModifierRegistry};

use std::collections::HashMap;

/// Inferred value taxonomy for a property's accepted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Color,
    Number,
    Keyword,
    Complex,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "LENGTH",
            Category::Color => "COLOR",
            Category::Number => "NUMBER",
            Category::Keyword => "KEYWORD",
            Category::Complex => "COMPLEX",
        }
    }
}

/// A single entry in the property catalog.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub canonical_name: &'static str,
    pub category: Category,
    pub accepts_shorthand: bool,
}

/// Maps utility prefixes to property descriptors and resolves the
/// longest-matching prefix for a given utility segment.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    by_prefix: HashMap<&'static str, PropertyDescriptor>,
    /// Prefixes ordered longest-first so the first match found by a linear
    /// probe is always the longest one (§4.3 tie-break rule).
    prefixes_by_len_desc: Vec<&'static str>,
}

impl PropertyCatalog {
    pub fn new() -> Self {
        let mut by_prefix = HashMap::new();
        for &(prefix, canonical) in properties::PREFIX_TABLE {
            let category = infer_category(canonical);
            let accepts_shorthand = properties::SHORTHAND_PROPERTIES.contains(&canonical);
            by_prefix.insert(
                prefix,
                PropertyDescriptor {
                    canonical_name: canonical,
                    category,
                    accepts_shorthand,
                },
            );
        }

        let mut prefixes_by_len_desc: Vec<&'static str> = by_prefix.keys().copied().collect();
        prefixes_by_len_desc.sort_by(|a, b| b.len().cmp(&a.len()));

        log::debug!(
            "property catalog built with {} prefixes",
            prefixes_by_len_desc.len()
        );

        Self {
            by_prefix,
            prefixes_by_len_desc,
        }
    }

    /// Look up a prefix directly (no matching, exact key).
    pub fn get(&self, prefix: &str) -> Option<&PropertyDescriptor> {
        self.by_prefix.get(prefix)
    }

    /// Find the longest prefix of `utility` such that the character after
    /// the prefix is `-`. Returns `(prefix, descriptor)`.
    pub fn longest_match<'a>(&'a self, utility: &str) -> Option<(&'static str, &'a PropertyDescriptor)> {
        for &candidate in &self.prefixes_by_len_desc {
            if utility.len() > candidate.len()
                && utility.starts_with(candidate)
                && utility.as_bytes()[candidate.len()] == b'-'
            {
                // SAFETY-free: HashMap lookup, candidate came from its own keys.
                return self.by_prefix.get(candidate).map(|d| (candidate, d));
            }
        }
        None
    }
}

impl Default for PropertyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered category inference: exact name, suffix, prefix, curated keyword
/// list, curated complex list, default keyword. See design spec §4.1 and
/// the ambiguity note in §9 about shorthand-set membership being
/// independent of category — `accepts_shorthand` is looked up separately,
/// never derived from this function.
fn infer_category(canonical: &str) -> Category {
    if let Some(&(_, category)) = properties::EXACT_CATEGORY
        .iter()
        .find(|&&(name, _)| name == canonical)
    {
        return category;
    }

    const LENGTH_SUFFIXES: &[&str] = &[
        "-width", "-height", "-top", "-right", "-bottom", "-left", "-size", "-spacing", "-radius",
        "-gap", "-indent",
    ];
    if canonical.ends_with("-color") {
        return Category::Color;
    }
    if LENGTH_SUFFIXES.iter().any(|suf| canonical.ends_with(suf)) {
        return Category::Length;
    }

    const LENGTH_PREFIXES: &[&str] = &["padding", "margin", "border", "gap", "inset"];
    if LENGTH_PREFIXES.iter().any(|p| canonical.starts_with(p)) {
        return Category::Length;
    }

    if properties::KEYWORD_PROPERTIES.contains(&canonical) {
        return Category::Keyword;
    }
    if properties::COMPLEX_PROPERTIES.contains(&canonical) {
        return Category::Complex;
    }

    Category::Keyword
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_short_and_long_prefixes_to_same_property() {
        let catalog = PropertyCatalog::new();
        assert_eq!(
            catalog.get("p").unwrap().canonical_name,
            catalog.get("padding").unwrap().canonical_name
        );
    }

    #[test]
    fn longest_match_prefers_longer_prefix() {
        let catalog = PropertyCatalog::new();
        let (prefix, descriptor) = catalog.longest_match("border-color-[red]").unwrap();
        assert_eq!(prefix, "border-color");
        assert_eq!(descriptor.canonical_name, "border-color");

        let (prefix, _) = catalog.longest_match("border-[1px]").unwrap();
        assert_eq!(prefix, "border");
    }

    #[test]
    fn unknown_prefix_does_not_match() {
        let catalog = PropertyCatalog::new();
        assert!(catalog.longest_match("totally-unknown-[1px]").is_none());
    }

    #[test]
    fn category_inference_order() {
        assert_eq!(infer_category("opacity"), Category::Number);
        assert_eq!(infer_category("background-color"), Category::Color);
        assert_eq!(infer_category("background"), Category::Complex);
        assert_eq!(infer_category("border-radius"), Category::Length);
        assert_eq!(infer_category("padding"), Category::Length);
        assert_eq!(infer_category("display"), Category::Keyword);
        assert_eq!(infer_category("box-shadow"), Category::Complex);
    }

    #[test]
    fn shorthand_membership_independent_of_category() {
        let catalog = PropertyCatalog::new();
        // border is COMPLEX-ish by curated list membership in some schemes,
        // but its accepts_shorthand flag comes from a separate table.
        let border = catalog.get("border").unwrap();
        assert!(border.accepts_shorthand);
        let padding = catalog.get("padding").unwrap();
        assert_eq!(padding.category, Category::Length);
        assert!(padding.accepts_shorthand);
    }
}
