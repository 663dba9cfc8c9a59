//! Error taxonomy for zyracss
//!
//! A single sum-typed result carries every failure in the crate. Per-class
//! parse/validation failures never reach this type directly — they are
//! collected as [`crate::model::InvalidEntry`] values inside a
//! `GenerationResult` and do not fail the batch. `ZyraError` is reserved for
//! failures that abort a call entirely: bad API input, a malformed engine
//! configuration, or an internal invariant violation.

use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for zyracss operations.
pub type Result<T> = std::result::Result<T, ZyraError>;

/// Stable error codes, matching the taxonomy in the design spec (§7).
///
/// These are also used as the `reason_code` on [`crate::model::InvalidEntry`]
/// for per-class failures, so the same vocabulary covers both batch-failing
/// and class-local errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    InvalidInput,
    InvalidClassSyntax,
    InvalidCssValue,
    DangerousInput,
    InputTooLong,
    ParsingFailed,
    ValidationFailed,
    PropertyNotSupported,
    GenerationFailed,
    UnexpectedError,
}

impl ErrorCode {
    /// The wire string used in error payloads and CLI exit reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidClassSyntax => "INVALID_CLASS_SYNTAX",
            ErrorCode::InvalidCssValue => "INVALID_CSS_VALUE",
            ErrorCode::DangerousInput => "DANGEROUS_INPUT",
            ErrorCode::InputTooLong => "INPUT_TOO_LONG",
            ErrorCode::ParsingFailed => "PARSING_FAILED",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::PropertyNotSupported => "PROPERTY_NOT_SUPPORTED",
            ErrorCode::GenerationFailed => "GENERATION_FAILED",
            ErrorCode::UnexpectedError => "UNEXPECTED_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bounded, serializable context attached to a top-level error.
///
/// Enforces the §5 resource bounds: each value is truncated at 1000 chars,
/// and the map stops accepting new keys once its serialized size would pass
/// 10 KB, so a pathological caller can't use error context as an unbounded
/// allocation.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ErrorContext {
    entries: HashMap<String, String>,
}

const MAX_CONTEXT_VALUE_CHARS: usize = 1000;
const MAX_CONTEXT_BYTES: usize = 10 * 1024;

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a context entry, truncating the value and refusing the
    /// insert outright if the map is already at its byte budget.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        if self.approx_bytes() >= MAX_CONTEXT_BYTES {
            log::trace!("error context at capacity; dropping additional entry");
            return;
        }
        let mut value = value.into();
        if value.len() > MAX_CONTEXT_VALUE_CHARS {
            value.truncate(MAX_CONTEXT_VALUE_CHARS);
            value.push_str("...(truncated)");
        }
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn approx_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

/// Maximum number of suggestion strings carried by a single error (§5).
const MAX_SUGGESTIONS: usize = 10;

/// Main error type for zyracss operations.
#[derive(Error, Debug)]
pub enum ZyraError {
    /// Wrong shape at the API boundary (e.g. neither `classes` nor `html` given).
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
        context: ErrorContext,
        suggestions: Vec<String>,
    },

    /// Options or engine configuration invalid (e.g. zero-sized cache bound).
    #[error("validation failed: {message}")]
    ValidationFailed {
        message: String,
        context: ErrorContext,
        suggestions: Vec<String>,
    },

    /// Batch-level extraction failure (distinct from a per-class parse miss).
    #[error("parsing failed: {message}")]
    ParsingFailed {
        message: String,
        context: ErrorContext,
        suggestions: Vec<String>,
    },

    /// Internal emitter/normalizer invariant violation.
    #[error("generation failed: {message}")]
    GenerationFailed {
        message: String,
        context: ErrorContext,
        suggestions: Vec<String>,
    },

    /// Catch-all wrapping lower-level failures (never I/O — the core performs none).
    #[error("unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl ZyraError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            context: ErrorContext::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
            context: ErrorContext::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn parsing_failed(message: impl Into<String>) -> Self {
        Self::ParsingFailed {
            message: message.into(),
            context: ErrorContext::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::GenerationFailed {
            message: message.into(),
            context: ErrorContext::new(),
            suggestions: Vec::new(),
        }
    }

    /// Attach a suggestion string, capped at [`MAX_SUGGESTIONS`] (§5).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        if let Some(list) = self.suggestions_mut() {
            if list.len() < MAX_SUGGESTIONS {
                list.push(suggestion.into());
            }
        }
        self
    }

    fn suggestions_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            ZyraError::InvalidInput { suggestions, .. }
            | ZyraError::ValidationFailed { suggestions, .. }
            | ZyraError::ParsingFailed { suggestions, .. }
            | ZyraError::GenerationFailed { suggestions, .. } => Some(suggestions),
            ZyraError::Unexpected(_) => None,
        }
    }

    /// The stable `ErrorCode` carried by this variant, for callers that want
    /// the §7 wire string rather than a `Display`-formatted message.
    pub fn code(&self) -> ErrorCode {
        match self {
            ZyraError::InvalidInput { .. } => ErrorCode::InvalidInput,
            ZyraError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ZyraError::ParsingFailed { .. } => ErrorCode::ParsingFailed,
            ZyraError::GenerationFailed { .. } => ErrorCode::GenerationFailed,
            ZyraError::Unexpected(_) => ErrorCode::UnexpectedError,
        }
    }
}

/// A bounded, FIFO-with-summary history of top-level errors.
///
/// Opt-in state an `Engine` can keep across calls for collaborators that
/// want to report "the last N failures" (a dashboard, a CLI `--verbose`
/// flag). Once more than [`MAX_HISTORY_ENTRIES`] errors have been recorded,
/// the oldest ones collapse into a single [`HistorySummary`] entry rather
/// than growing without bound.
pub const MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Debug, Clone)]
pub struct HistorySummary {
    pub collapsed_count: usize,
}

#[derive(Debug, Clone)]
pub enum HistoryEntry {
    Error { code: ErrorCode, message: String },
    Summary(HistorySummary),
}

#[derive(Debug, Clone, Default)]
pub struct ErrorHistory {
    entries: std::collections::VecDeque<HistoryEntry>,
}

impl ErrorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: &ZyraError) {
        self.entries.push_back(HistoryEntry::Error {
            code: error.code(),
            message: error.to_string(),
        });
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let overflow = self.entries.len() - MAX_HISTORY_ENTRIES;
            let mut collapsed = 0;
            for _ in 0..overflow {
                if let Some(HistoryEntry::Error { .. }) = self.entries.pop_front() {
                    collapsed += 1;
                }
            }
            self.entries
                .push_front(HistoryEntry::Summary(HistorySummary {
                    collapsed_count: collapsed,
                }));
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_round_trips_as_str() {
        assert_eq!(ErrorCode::DangerousInput.as_str(), "DANGEROUS_INPUT");
        assert_eq!(ErrorCode::InputTooLong.to_string(), "INPUT_TOO_LONG");
    }

    #[test]
    fn context_truncates_long_values() {
        let ctx = ErrorContext::new().with("class", "a".repeat(2000));
        assert!(ctx.get("class").unwrap().ends_with("...(truncated)"));
        assert!(ctx.get("class").unwrap().len() <= MAX_CONTEXT_VALUE_CHARS + 20);
    }

    #[test]
    fn history_collapses_past_bound() {
        let mut history = ErrorHistory::new();
        for i in 0..(MAX_HISTORY_ENTRIES + 10) {
            history.record(&ZyraError::invalid_input(format!("err {i}")));
        }
        let summaries = history
            .entries()
            .filter(|e| matches!(e, HistoryEntry::Summary(_)))
            .count();
        assert_eq!(summaries, 1);
    }

    #[test]
    fn invalid_input_has_matching_code() {
        let error = ZyraError::invalid_input("bad shape");
        assert_eq!(error.code(), ErrorCode::InvalidInput);
        assert!(error.to_string().contains("bad shape"));
    }

    #[test]
    fn suggestions_are_capped() {
        let mut error = ZyraError::invalid_input("bad shape");
        for i in 0..(MAX_SUGGESTIONS + 5) {
            error = error.with_suggestion(format!("try {i}"));
        }
        let ZyraError::InvalidInput { suggestions, .. } = &error else {
            unreachable!()
        };
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }
}
