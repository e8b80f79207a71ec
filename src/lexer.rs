//! Tokenization of a single input line.
//!
//! The token language is deliberately flat: tokens are runs of non-whitespace
//! characters separated by spaces or tabs. There is no quoting and no escape
//! character — a quote or backslash is an ordinary character and lands inside
//! whatever token it appears in. Redirection operators are recognized later,
//! by the parser, and only as standalone tokens.

/// Split a line (terminator already stripped) into whitespace-delimited tokens.
///
/// Runs of spaces/tabs are collapsed, so empty or all-whitespace input yields
/// an empty vector. Token order follows input order.
pub fn split_into_tokens(line: &str) -> Vec<String> {
    line.split([' ', '\t'])
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_owned)
        .collect()
}
