//! ZyraCSS core — a bracket-notation utility CSS compiler.
//!
//! Turns class strings like `p-[2rem]`, `hover:bg-[#3b82f6]`, or
//! `box-shadow-[0,4px,6px,rgba(0,0,0,0.1)]` into deduplicated,
//! optionally grouped and minified CSS rules. The crate is a pure,
//! synchronous library: no file I/O, no network, no threads spawned
//! internally. Collaborators (a CLI, a bundler plugin, a browser runtime)
//! own everything outside the compiler core.
//!
//! The [`Engine`] façade is the entry point most callers need:
//!
//! ```
//! use zyracss::{Engine, EngineConfig, EngineOptions, GenerateInput};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let result = engine.generate(
//!     GenerateInput::Classes(vec!["p-[2rem]".to_string()]),
//!     EngineOptions::default(),
//! );
//! assert!(result.css.contains("padding: 2rem;"));
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod grouper;
pub mod html_extractor;
pub mod model;
pub mod normalize;
pub mod tokenizer;
pub mod validation;

pub use catalog::{Category, ModifierDescriptor, ModifierKind, PropertyCatalog, PropertyDescriptor};
pub use config::{EngineConfig, EngineOptions, EngineStats, SecurityLimits};
pub use engine::{Engine, GenerateInput};
pub use error::{ErrorCode, ErrorContext, ErrorHistory, HistoryEntry, HistorySummary, Result, ZyraError};
pub use html_extractor::{extract_classes, ExtractOptions, ExtractResult};
pub use model::{CssDeclaration, CssRule, GenerationResult, GenerationStats, InvalidEntry, ParsedClass};
