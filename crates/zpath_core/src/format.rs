//! Rendering of match sets for display

use serde_json::Value;

/// Render a match set as text.
///
/// An empty set renders as a fixed message, a single match as the value
/// itself, and several matches as a pretty-printed JSON array. Object keys
/// come out sorted either way. This never fails; if array rendering does,
/// the per-value renderings are joined with newlines instead.
pub fn format_results(results: &[Value]) -> String {
    match results {
        [] => "No results found".to_string(),
        [single] => format_value(single),
        _ => serde_json::to_string_pretty(results).unwrap_or_else(|_| {
            results
                .iter()
                .map(format_value)
                .collect::<Vec<_>>()
                .join("\n")
        }),
    }
}

/// Strings render JSON-quoted, objects and arrays pretty-printed, all
/// other scalars in their natural form.
fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_results() {
        assert_eq!(format_results(&[]), "No results found");
    }

    #[test]
    fn test_single_string_is_quoted() {
        assert_eq!(format_results(&[json!("hi")]), "\"hi\"");
    }

    #[test]
    fn test_single_number() {
        assert_eq!(format_results(&[json!(42)]), "42");
        assert_eq!(format_results(&[json!(1.5)]), "1.5");
    }

    #[test]
    fn test_single_bool_and_null() {
        assert_eq!(format_results(&[json!(true)]), "true");
        assert_eq!(format_results(&[Value::Null]), "null");
    }

    #[test]
    fn test_single_object_pretty_printed() {
        let rendered = format_results(&[json!({"b": 2, "a": 1})]);
        assert_eq!(rendered, "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_multiple_results_as_array() {
        let rendered = format_results(&[json!(1), json!("two")]);
        assert_eq!(rendered, "[\n  1,\n  \"two\"\n]");
    }

    #[test]
    fn test_multiple_objects_sorted_keys() {
        let rendered = format_results(&[json!({"b": 2, "a": 1}), json!({"c": 3})]);
        assert!(rendered.starts_with('['));
        let a = rendered.find("\"a\"").unwrap_or(usize::MAX);
        let b = rendered.find("\"b\"").unwrap_or(usize::MAX);
        assert!(a < b);
    }
}
