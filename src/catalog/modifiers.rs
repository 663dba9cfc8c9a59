//! Modifier registry: pseudo-classes, pseudo-elements, responsive
//! breakpoints, and media-feature modifiers (§3 `ModifierDescriptor`).

use std::collections::HashMap;

/// A configurable responsive breakpoint, keyed by name with an associated
/// `min-width` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
}

/// Engine-configurable min-width breakpoint table (design spec §9: "not
/// surfaced in the source... make them engine-configurable").
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct BreakpointTable {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xl2: u32,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            sm: 640,
            md: 768,
            lg: 1024,
            xl: 1280,
            xl2: 1536,
        }
    }
}

impl BreakpointTable {
    fn px(&self, bp: Breakpoint) -> u32 {
        match bp {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xl2 => self.xl2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    PseudoClass,
    PseudoElement,
    Responsive,
    Media,
}

#[derive(Debug, Clone)]
pub struct ModifierDescriptor {
    pub name: &'static str,
    pub kind: ModifierKind,
    /// `min-width` in px, only set for `Responsive` modifiers.
    pub breakpoint_px: Option<u32>,
    /// The full `@media (...)` expression, only set for `Media` modifiers.
    pub media_expr: Option<&'static str>,
}

/// Pseudo-class names recognized as modifiers, rendered as `:name`.
const PSEUDO_CLASSES: &[&str] = &[
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "visited",
    "disabled",
    "checked",
    "required",
    "valid",
    "invalid",
    "read-only",
    "placeholder-shown",
    "target",
    "empty",
    "first",
    "last",
    "only",
    "odd",
    "even",
    "first-of-type",
    "last-of-type",
];

fn pseudo_class_selector(name: &str) -> &'static str {
    match name {
        "first" => ":first-child",
        "last" => ":last-child",
        "only" => ":only-child",
        "odd" => ":nth-child(odd)",
        "even" => ":nth-child(even)",
        "hover" => ":hover",
        "focus" => ":focus",
        "focus-within" => ":focus-within",
        "focus-visible" => ":focus-visible",
        "active" => ":active",
        "visited" => ":visited",
        "disabled" => ":disabled",
        "checked" => ":checked",
        "required" => ":required",
        "valid" => ":valid",
        "invalid" => ":invalid",
        "read-only" => ":read-only",
        "placeholder-shown" => ":placeholder-shown",
        "target" => ":target",
        "empty" => ":empty",
        "first-of-type" => ":first-of-type",
        "last-of-type" => ":last-of-type",
        _ => unreachable!("pseudo_class_selector called with unregistered name"),
    }
}

/// Pseudo-element names, rendered as `::name`.
const PSEUDO_ELEMENTS: &[&str] = &[
    "before",
    "after",
    "placeholder",
    "selection",
    "first-line",
    "first-letter",
    "marker",
    "backdrop",
    "file",
];

fn pseudo_element_selector(name: &str) -> String {
    match name {
        "file" => "::file-selector-button".to_string(),
        other => format!("::{other}"),
    }
}

/// Media-feature modifiers that expand to a full `@media (...)` query
/// rather than a min-width breakpoint.
const MEDIA_FEATURES: &[(&str, &str)] = &[
    ("dark", "(prefers-color-scheme: dark)"),
    ("light", "(prefers-color-scheme: light)"),
    ("motion-reduce", "(prefers-reduced-motion: reduce)"),
    ("motion-safe", "(prefers-reduced-motion: no-preference)"),
    ("print", "print"),
    ("screen", "screen"),
];

/// `mobile`/`tablet`/`desktop` aliases to the sm/md/lg breakpoints (design
/// decision recorded in DESIGN.md: the spec lists these as RESPONSIVE
/// aliases, so they resolve to breakpoints rather than media queries).
const RESPONSIVE_ALIASES: &[(&str, Breakpoint)] = &[
    ("mobile", Breakpoint::Sm),
    ("tablet", Breakpoint::Md),
    ("desktop", Breakpoint::Lg),
];

/// Built once from a [`BreakpointTable`]; immutable afterward.
#[derive(Debug, Clone)]
pub struct ModifierRegistry {
    by_name: HashMap<String, ModifierDescriptor>,
}

impl ModifierRegistry {
    pub fn new(breakpoints: BreakpointTable) -> Self {
        let mut by_name = HashMap::new();

        for &name in PSEUDO_CLASSES {
            by_name.insert(
                name.to_string(),
                ModifierDescriptor {
                    name,
                    kind: ModifierKind::PseudoClass,
                    breakpoint_px: None,
                    media_expr: None,
                },
            );
        }

        for &name in PSEUDO_ELEMENTS {
            by_name.insert(
                name.to_string(),
                ModifierDescriptor {
                    name,
                    kind: ModifierKind::PseudoElement,
                    breakpoint_px: None,
                    media_expr: None,
                },
            );
        }

        for (bp, name) in [
            (Breakpoint::Sm, "sm"),
            (Breakpoint::Md, "md"),
            (Breakpoint::Lg, "lg"),
            (Breakpoint::Xl, "xl"),
            (Breakpoint::Xl2, "2xl"),
        ] {
            by_name.insert(
                name.to_string(),
                ModifierDescriptor {
                    name,
                    kind: ModifierKind::Responsive,
                    breakpoint_px: Some(breakpoints.px(bp)),
                    media_expr: None,
                },
            );
        }

        for &(alias, bp) in RESPONSIVE_ALIASES {
            by_name.insert(
                alias.to_string(),
                ModifierDescriptor {
                    name: alias,
                    kind: ModifierKind::Responsive,
                    breakpoint_px: Some(breakpoints.px(bp)),
                    media_expr: None,
                },
            );
        }

        for &(name, expr) in MEDIA_FEATURES {
            by_name.insert(
                name.to_string(),
                ModifierDescriptor {
                    name,
                    kind: ModifierKind::Media,
                    breakpoint_px: None,
                    media_expr: Some(expr),
                },
            );
        }

        log::debug!("modifier registry built with {} modifiers", by_name.len());
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&ModifierDescriptor> {
        self.by_name.get(name)
    }

    /// Selector suffix (`:hover`, `::before`) for pseudo modifiers, empty
    /// for responsive/media modifiers (those wrap in `@media` instead).
    pub fn selector_suffix(&self, descriptor: &ModifierDescriptor) -> String {
        match descriptor.kind {
            ModifierKind::PseudoClass => pseudo_class_selector(descriptor.name).to_string(),
            ModifierKind::PseudoElement => pseudo_element_selector(descriptor.name),
            ModifierKind::Responsive | ModifierKind::Media => String::new(),
        }
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self::new(BreakpointTable::default())
    }
}
