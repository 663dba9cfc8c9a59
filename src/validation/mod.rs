//! Value validation (§4.4, stages 1-2). Normalization (stage 3) lives in
//! [`crate::normalize`].

mod category;
mod security;

pub use security::DEFAULT_DATA_URL_ALLOWLIST;

use crate::error::ErrorCode;
use crate::model::{InvalidEntry, ParsedClass};

/// Run both validation stages over every value token of `parsed`. On
/// success returns the (still-unnormalized) token list; on failure
/// returns the [`InvalidEntry`] to surface to the caller.
pub fn validate(parsed: &ParsedClass, data_url_allowlist: &[String]) -> Result<Vec<String>, InvalidEntry> {
    if !parsed.accepts_shorthand && parsed.value_tokens.len() > 1 {
        return Err(InvalidEntry::new(
            &parsed.original,
            ErrorCode::InvalidCssValue,
            format!(
                "'{}' does not accept multiple comma-separated values",
                parsed.canonical_property
            ),
        ));
    }

    for token in &parsed.value_tokens {
        if let Some(pattern) = security::find_dangerous_pattern(token, data_url_allowlist) {
            return Err(InvalidEntry::new(
                &parsed.original,
                ErrorCode::DangerousInput,
                format!("matched dangerous pattern '{pattern}'"),
            ));
        }
    }

    for token in &parsed.value_tokens {
        if let Err(reason) = category::validate_token(token, parsed.category) {
            return Err(InvalidEntry::new(&parsed.original, ErrorCode::InvalidCssValue, reason));
        }
    }

    Ok(parsed.value_tokens.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BreakpointTable, ModifierRegistry, PropertyCatalog};
    use crate::tokenizer::{parse_class, MAX_CLASS_LENGTH};

    fn parse(raw: &str) -> ParsedClass {
        let catalog = PropertyCatalog::new();
        let modifiers = ModifierRegistry::new(BreakpointTable::default());
        parse_class(raw, &catalog, &modifiers, MAX_CLASS_LENGTH).unwrap()
    }

    #[test]
    fn valid_length_class_passes() {
        let parsed = parse("p-[2rem]");
        assert!(validate(&parsed, &[]).is_ok());
    }

    #[test]
    fn dangerous_value_is_rejected() {
        let parsed = parse("bg-[javascript:alert(1)]");
        let err = validate(&parsed, &[]).unwrap_err();
        assert_eq!(err.reason_code, ErrorCode::DangerousInput);
    }

    #[test]
    fn multi_value_on_non_shorthand_property_is_rejected() {
        let parsed = parse("opacity-[1,2]");
        let err = validate(&parsed, &[]).unwrap_err();
        assert_eq!(err.reason_code, ErrorCode::InvalidCssValue);
    }

    #[test]
    fn shorthand_property_accepts_multiple_values() {
        let parsed = parse("m-[1rem,2rem]");
        assert!(validate(&parsed, &[]).is_ok());
    }
}
