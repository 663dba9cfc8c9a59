//! Engine configuration and generation options (§3, §6 expansion):
//! serde-serializable so callers can load configuration from JSON/TOML
//! the way the rest of the ambient stack expects.

use serde::{Deserialize, Serialize};

use crate::catalog::BreakpointTable;
use crate::html_extractor::{DEFAULT_MAX_BLOB_BYTES, DEFAULT_MAX_CLASSES, DEFAULT_MAX_FILES};
use crate::tokenizer::MAX_CLASS_LENGTH;

/// Options governing a single `generate` call (§3 `EngineOptions`, §6).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineOptions {
    pub minify: bool,
    pub group_selectors: bool,
    pub include_comments: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            minify: false,
            group_selectors: true,
            include_comments: true,
        }
    }
}

/// Resource bounds enforced by the security filter and the extractor
/// (§5, configurable per §6's engine-factory `security` block).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityLimits {
    pub max_class_length: usize,
    pub max_classes: usize,
    pub max_html_bytes: usize,
    pub max_files: usize,
    /// `data:` URL prefixes allowed through the stage-1 security filter in
    /// addition to the built-in safe-image defaults (spec §4.4: "configurable
    /// allowlist").
    pub data_url_allowlist: Vec<String>,
}

impl Default for SecurityLimits {
    fn default() -> Self {
        Self {
            max_class_length: MAX_CLASS_LENGTH,
            max_classes: DEFAULT_MAX_CLASSES,
            max_html_bytes: DEFAULT_MAX_BLOB_BYTES,
            max_files: DEFAULT_MAX_FILES,
            data_url_allowlist: Vec::new(),
        }
    }
}

/// Engine-factory configuration (§6 "Engine-factory operation").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub cache_enabled: bool,
    pub cache_capacity: usize,
    /// Engine-level default for `EngineOptions.minify`; a call can turn
    /// minification on but can't turn it off when this is set (§6).
    pub minify: bool,
    pub security: SecurityLimits,
    pub breakpoints: BreakpointTable,
    /// Keep a bounded `ErrorHistory` on the constructed `Engine` (§7
    /// expansion: opt-in per-engine state, off by default).
    pub track_error_history: bool,
}

const DEFAULT_CACHE_CAPACITY: usize = 1024;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            minify: false,
            security: SecurityLimits::default(),
            breakpoints: BreakpointTable::default(),
            track_error_history: false,
        }
    }
}

/// Counters returned by `Engine::get_stats` (§6).
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EngineStats {
    pub cache_size: usize,
    pub total_generations: u64,
}
