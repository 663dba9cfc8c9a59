//! The `Engine` façade (§2, §6 expansion): owns the catalog, modifier
//! registry, and cache, and exposes the primary `generate` operation plus
//! the engine-factory lifecycle calls.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::cache::{cache_key, GenerationCache};
use crate::catalog::{ModifierRegistry, PropertyCatalog};
use crate::config::{EngineConfig, EngineOptions, EngineStats};
use crate::emitter::emit_rule;
use crate::error::{ErrorHistory, HistoryEntry, ZyraError};
use crate::grouper::{assemble, group_selectors};
use crate::html_extractor::{extract_classes, ExtractOptions};
use crate::model::{CssRule, GenerationResult, GenerationStats, InvalidEntry};
use crate::normalize::normalize_value;
use crate::tokenizer::parse_class;
use crate::validation::validate;

/// The "structured object `{ classes?, html? }}`" input shape from §6,
/// generalized to a small enum so each call site states its intent.
#[derive(Debug, Clone)]
pub enum GenerateInput {
    Classes(Vec<String>),
    Html(Vec<String>),
    Mixed { classes: Vec<String>, html: Vec<String> },
}

/// The compiler core's public entry point. Construction builds the
/// (immutable, freely shareable) catalog and modifier registry once;
/// the cache is the only state that mutates across calls.
pub struct Engine {
    catalog: PropertyCatalog,
    modifiers: ModifierRegistry,
    config: EngineConfig,
    cache: Option<GenerationCache>,
    total_generations: AtomicU64,
    error_history: Option<Mutex<ErrorHistory>>,
}

impl Engine {
    /// Construct an engine, falling back to a disabled cache (and logging a
    /// warning) rather than failing outright on an invalid configuration.
    /// Collaborators that want fail-fast semantics should use [`Engine::try_new`].
    pub fn new(config: EngineConfig) -> Self {
        match Self::try_new(config.clone()) {
            Ok(engine) => engine,
            Err(err) => {
                log::warn!("invalid engine config, falling back to defaults: {err}");
                let mut fallback = config;
                fallback.cache_enabled = false;
                let engine = Self::build(fallback);
                engine.record_error(&err);
                engine
            }
        }
    }

    /// Construct an engine, rejecting a configuration that cannot be
    /// satisfied (currently: a zero-capacity cache while caching is enabled).
    pub fn try_new(config: EngineConfig) -> Result<Self, ZyraError> {
        if config.cache_enabled && config.cache_capacity == 0 {
            return Err(ZyraError::validation_failed(
                "cache_capacity must be non-zero when cache_enabled is true",
            ));
        }
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let modifiers = ModifierRegistry::new(config.breakpoints);
        let cache = config
            .cache_enabled
            .then(|| GenerationCache::new(config.cache_capacity));
        let error_history = config.track_error_history.then(ErrorHistory::new);

        log::debug!(
            "engine constructed (cache_enabled={}, cache_capacity={})",
            config.cache_enabled,
            config.cache_capacity
        );

        Self {
            catalog: PropertyCatalog::new(),
            modifiers,
            config,
            cache,
            total_generations: AtomicU64::new(0),
            error_history: error_history.map(Mutex::new),
        }
    }

    /// Record a top-level error into this engine's history, if tracking is
    /// enabled (§7 expansion: opt-in, per-engine state).
    fn record_error(&self, error: &ZyraError) {
        if let Some(history) = &self.error_history {
            history.lock().record(error);
        }
    }

    /// Snapshot of the tracked error history, oldest first; empty when
    /// `track_error_history` is off.
    pub fn error_history(&self) -> Vec<HistoryEntry> {
        match &self.error_history {
            Some(history) => history.lock().entries().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Resolve a [`GenerateInput`] into the ordered, deduplicated class
    /// list that the rest of the pipeline operates on.
    fn resolve_classes(&self, input: GenerateInput) -> Vec<String> {
        let html_options = ExtractOptions {
            max_classes: self.config.security.max_classes,
            max_files: self.config.security.max_files,
            max_blob_bytes: self.config.security.max_html_bytes,
            ..ExtractOptions::default()
        };

        let mut classes = match input {
            GenerateInput::Classes(classes) => classes,
            GenerateInput::Html(blobs) => extract_classes(&blobs, &html_options).classes,
            GenerateInput::Mixed { classes, html } => {
                let mut combined = classes;
                combined.extend(extract_classes(&html, &html_options).classes);
                combined
            }
        };

        let mut seen = std::collections::HashSet::new();
        classes.retain(|class| seen.insert(class.clone()));
        classes.truncate(self.config.security.max_classes);
        classes
    }

    /// The primary `generate` operation (§6). `options.minify` is OR'd with
    /// the engine-level `EngineConfig.minify` default, so a caller can force
    /// minification on but can't force it off for an engine configured to
    /// always minify.
    pub fn generate(&self, input: GenerateInput, options: EngineOptions) -> GenerationResult {
        let options = EngineOptions {
            minify: options.minify || self.config.minify,
            ..options
        };
        let classes = self.resolve_classes(input);

        let key = self.cache.as_ref().map(|_| cache_key(&classes, &options));
        if let (Some(cache), Some(key)) = (&self.cache, key) {
            if let Some(hit) = cache.get(key) {
                log::trace!("cache hit for {} classes", classes.len());
                return hit;
            }
        }

        let result = self.generate_uncached(&classes, options);
        self.total_generations.fetch_add(1, Ordering::Relaxed);

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.insert(key, result.clone());
        }
        result
    }

    fn generate_uncached(&self, classes: &[String], options: EngineOptions) -> GenerationResult {
        let mut valid = Vec::new();
        let mut invalid: Vec<InvalidEntry> = Vec::new();
        let mut rules: Vec<CssRule> = Vec::new();

        for raw in classes {
            match self.compile_one(raw, &options) {
                Ok(rule) => {
                    valid.push(raw.clone());
                    rules.push(rule);
                }
                Err(entry) => invalid.push(entry),
            }
        }

        if options.group_selectors {
            rules = group_selectors(rules);
        }

        let css = assemble(&rules, options.minify, options.include_comments);

        GenerationResult {
            stats: GenerationStats {
                valid_classes: valid.len(),
                generated_rules: rules.len(),
                from_cache: false,
                compression_ratio: compression_ratio(&css, classes),
            },
            css,
            valid,
            invalid,
        }
    }

    fn compile_one(&self, raw: &str, _options: &EngineOptions) -> Result<CssRule, InvalidEntry> {
        let parsed = parse_class(
            raw,
            &self.catalog,
            &self.modifiers,
            self.config.security.max_class_length,
        )?;
        let tokens = validate(&parsed, &self.config.security.data_url_allowlist)?;
        let value = normalize_value(parsed.category, parsed.canonical_property, &tokens);
        Ok(emit_rule(&parsed, value, &self.modifiers))
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    pub fn get_stats(&self) -> EngineStats {
        EngineStats {
            cache_size: self.cache.as_ref().map_or(0, GenerationCache::len),
            total_generations: self.total_generations.load(Ordering::Relaxed),
        }
    }
}

/// Rough compression ratio of the assembled CSS against an unminified
/// estimate (one declaration line per input class); `None` when there is
/// nothing to compare against.
fn compression_ratio(css: &str, classes: &[String]) -> Option<f64> {
    if classes.is_empty() {
        return None;
    }
    let baseline: usize = classes.iter().map(|c| c.len() + 20).sum();
    if baseline == 0 {
        None
    } else {
        Some(css.len() as f64 / baseline as f64)
    }
}
