//! Question text search helpers.

use crate::error::CoreError;

/// Require a non-empty search term.
///
/// Whitespace-only terms are accepted and searched as-is.
pub fn require_term(term: Option<&str>) -> Result<&str, CoreError> {
    match term {
        Some(term) if !term.is_empty() => Ok(term),
        _ => Err(CoreError::Unprocessable(
            "searchTerm must be a non-empty string".into(),
        )),
    }
}

/// Build an `ILIKE` pattern that matches `term` as a literal substring.
///
/// `\`, `%` and `_` are escaped with PostgreSQL's default `LIKE` escape
/// character so user input never acts as a wildcard.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
