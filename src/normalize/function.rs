//! Function-argument normalization (stage 3, §4.4): comma spacing inside
//! recognized CSS functions, applied depth-first so nested calls are
//! normalized before the function that contains them (§9 ambiguity note:
//! normalizing outer-first would re-split already-normalized nested
//! argument lists).

/// Re-space the top-level comma-separated arguments of `token` (assumed to
/// be a function call `name(...)`) to `arg1, arg2, ...`, recursing into
/// any nested function-call arguments first.
pub fn normalize_function_commas(token: &str) -> String {
    let Some(open) = token.find('(') else {
        return token.to_string();
    };
    if !token.ends_with(')') {
        return token.to_string();
    }
    let name = &token[..open];
    let inner = &token[open + 1..token.len() - 1];

    let args = crate::tokenizer::split_value_tokens(inner);
    let normalized_args: Vec<String> = args
        .iter()
        .map(|arg| {
            let trimmed = arg.trim();
            if trimmed.contains('(') && trimmed.ends_with(')') && trimmed.find('(').unwrap() > 0 {
                normalize_function_commas(trimmed)
            } else {
                trimmed.to_string()
            }
        })
        .collect();

    format!("{name}({})", normalized_args.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_space_after_top_level_commas() {
        assert_eq!(normalize_function_commas("rgba(0,0,0,0.1)"), "rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn normalizes_nested_calls_before_outer() {
        assert_eq!(
            normalize_function_commas("linear-gradient(to right,rgba(0,0,0,0.1),blue)"),
            "linear-gradient(to right, rgba(0, 0, 0, 0.1), blue)"
        );
    }

    #[test]
    fn leaves_non_function_token_unchanged() {
        assert_eq!(normalize_function_commas("flex"), "flex");
    }
}
