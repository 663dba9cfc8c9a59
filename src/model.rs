//! The data model shared across pipeline stages (§3 of the design spec).

use crate::catalog::ModifierDescriptor;
use crate::error::ErrorCode;

/// A class string after modifier/prefix/value splitting, before validation.
#[derive(Debug, Clone)]
pub struct ParsedClass {
    pub original: String,
    pub modifiers: Vec<ModifierDescriptor>,
    pub prefix: String,
    pub canonical_property: &'static str,
    pub accepts_shorthand: bool,
    pub category: crate::catalog::Category,
    pub raw_value: String,
    /// Top-level comma-split value tokens, pre-validation.
    pub value_tokens: Vec<String>,
}

/// One CSS declaration: `property: value;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssDeclaration {
    pub property: String,
    pub value: String,
}

/// An emitted CSS rule, pre-grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<CssDeclaration>,
    pub media_wrapper: Option<String>,
}

/// A class that failed somewhere in the pipeline; collected, never fatal
/// to the batch (§4.8 state machine: `INVALID(reason)` terminates only
/// that one class).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub class_name: String,
    pub reason_code: ErrorCode,
    pub reason_message: String,
}

impl InvalidEntry {
    pub fn new(class_name: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            reason_code: code,
            reason_message: message.into(),
        }
    }
}

/// Aggregate counters returned alongside generated CSS.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct GenerationStats {
    pub valid_classes: usize,
    pub generated_rules: usize,
    pub from_cache: bool,
    pub compression_ratio: Option<f64>,
}

/// The result of a single `generate` call.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub css: String,
    pub valid: Vec<String>,
    pub invalid: Vec<InvalidEntry>,
    pub stats: GenerationStats,
}
