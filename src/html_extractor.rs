//! HTML/JSX class extractor (§4.2): scans raw source blobs for
//! `class`/`className` attribute contents and splits them into candidate
//! class tokens. Non-DSL tokens are silently dropped — this extractor
//! does not judge whether a class belongs to ZyraCSS.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Default cap on extracted class tokens before truncation kicks in (§4.2, §5).
pub const DEFAULT_MAX_CLASSES: usize = 10_000;
/// Default cap on the number of source blobs accepted in one call (§4.2, §5).
pub const DEFAULT_MAX_FILES: usize = 1000;
/// Default cap on a single source blob's size in bytes (§4.2, §5).
pub const DEFAULT_MAX_BLOB_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub include_invalid: bool,
    pub max_classes: usize,
    pub max_files: usize,
    pub max_blob_bytes: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_invalid: false,
            max_classes: DEFAULT_MAX_CLASSES,
            max_files: DEFAULT_MAX_FILES,
            max_blob_bytes: DEFAULT_MAX_BLOB_BYTES,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtractResult {
    pub classes: Vec<String>,
    pub invalid: Vec<String>,
    pub truncated: bool,
}

fn attr_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?:class|className)\s*=\s*(?:"([^"]*)"|'([^']*)'|\{`([^`]*)`\}|\{"([^"]*)"\})"#,
        )
        .unwrap()
    })
}

fn dsl_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+(:[A-Za-z0-9_-]+)*-(\[.+\]|[^\s\[\]]+)$").unwrap())
}

/// Whether `token` has the shape `modifier(:modifier)*prefix-value`, the
/// admission test the extractor applies before a class token is kept.
pub fn looks_like_dsl_class(token: &str) -> bool {
    dsl_shape_re().is_match(token)
}

/// Extract candidate class tokens from a batch of decoded source blobs.
/// Extraction never fails the caller's batch: an over-limit blob is
/// skipped (and, if `include_invalid`, surfaced in `invalid`) rather than
/// aborting the whole call, mirroring §4.8's "individual failures don't
/// abort the batch" stance.
pub fn extract_classes(blobs: &[String], options: &ExtractOptions) -> ExtractResult {
    let mut result = ExtractResult::default();
    let mut seen = HashSet::new();

    let blobs_to_scan = blobs.iter().take(options.max_files);
    if blobs.len() > options.max_files {
        log::warn!(
            "extract_classes received {} blobs, exceeding max_files {}; extra blobs ignored",
            blobs.len(),
            options.max_files
        );
    }

    'blobs: for raw_blob in blobs_to_scan {
        if raw_blob.len() > options.max_blob_bytes {
            log::warn!(
                "skipping source blob of {} bytes, exceeding max_blob_bytes {}",
                raw_blob.len(),
                options.max_blob_bytes
            );
            if options.include_invalid {
                result.invalid.push("blob exceeds max_blob_bytes".to_string());
            }
            continue;
        }

        let blob = strip_bom(raw_blob);

        for caps in attr_value_re().captures_iter(blob) {
            let attr_value = caps
                .iter()
                .skip(1)
                .find_map(|m| m.map(|m| m.as_str()))
                .unwrap_or_default();

            for token in attr_value.split_whitespace() {
                if !looks_like_dsl_class(token) {
                    if options.include_invalid {
                        result.invalid.push(token.to_string());
                    }
                    continue;
                }
                if seen.insert(token.to_string()) {
                    if result.classes.len() >= options.max_classes {
                        result.truncated = true;
                        log::warn!(
                            "class extraction truncated at max_classes {}",
                            options.max_classes
                        );
                        break 'blobs;
                    }
                    result.classes.push(token.to_string());
                }
            }
        }
    }

    result
}

/// Strip a leading UTF-8 BOM should one slip through a collaborator's
/// decoding step; charset decoding itself is the collaborator's job (§6).
fn strip_bom(blob: &str) -> &str {
    if let Some(stripped) = blob.strip_prefix('\u{FEFF}') {
        log::trace!("stripped stray UTF-8 BOM from source blob");
        stripped
    } else {
        blob
    }
}
