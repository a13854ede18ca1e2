//! zpath_core - JSONPath query engine
//!
//! This library parses JSONPath expressions and evaluates them against
//! JSON documents, returning the matching values and a display rendering
//! of the match set.

pub mod eval;
pub mod format;
pub mod parser;
pub mod path;

use serde_json::Value;

/// Error type for JSONPath queries
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The input text is not parseable JSON
    InvalidJson(String),
    /// The path string is empty or blank
    InvalidPath(String),
    /// A filter expression uses a form other than `@.property op value`
    UnsupportedOperation(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(detail) => write!(f, "invalid JSON: {detail}"),
            Self::InvalidPath(detail) => write!(f, "invalid path: {detail}"),
            Self::UnsupportedOperation(detail) => write!(f, "unsupported operation: {detail}"),
        }
    }
}

impl std::error::Error for Error {}

/// Execute a JSONPath query against a JSON document
///
/// # Arguments
/// * `json` - The JSON document text
/// * `path` - A JSONPath query string (e.g., "$.store.book[0].title")
///
/// # Returns
/// A vector of matching JSON values, or an error if the document does not
/// parse, the path is blank, or a filter uses an unsupported form
///
/// # Example
/// ```
/// use zpath_core::query;
///
/// let results = query(r#"{"foo": "bar"}"#, "$.foo").unwrap();
/// assert_eq!(results, vec![serde_json::json!("bar")]);
/// ```
pub fn query(json: &str, path: &str) -> Result<Vec<Value>, Error> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| Error::InvalidJson(e.to_string()))?;

    let path = path.trim();
    if path.is_empty() {
        return Err(Error::InvalidPath("path cannot be empty".to_string()));
    }

    // The bare root selector returns the document unchanged.
    if path == "$" {
        return Ok(vec![document]);
    }

    let components = parser::parse(path);
    let results = eval::evaluate(&components, &document)?;
    Ok(results.into_iter().cloned().collect())
}

/// Render a match set for display
///
/// See [`format::format_results`] for the rendering rules. This never
/// fails; rendering problems fall back to a best-effort string form.
pub fn format_results(results: &[Value]) -> String {
    format::format_results(results)
}
