//! Evaluator for parsed path components

use crate::Error;
use crate::path::PathComponent;
use serde_json::Value;

/// Apply a component sequence to a document.
///
/// The result set starts as the root alone and is re-mapped through each
/// component in turn, preserving per-input ordering. An empty intermediate
/// set short-circuits: the remaining components are not applied and the
/// empty set is returned (that is not an error).
pub fn evaluate<'a>(
    components: &[PathComponent],
    root: &'a Value,
) -> Result<Vec<&'a Value>, Error> {
    let mut current = vec![root];

    for component in components {
        let mut next = Vec::new();
        for &node in &current {
            next.append(&mut match_component(component, node)?);
        }
        if next.is_empty() {
            return Ok(next);
        }
        current = next;
    }

    Ok(current)
}

/// Apply one component's matching rule to one value.
fn match_component<'a>(
    component: &PathComponent,
    node: &'a Value,
) -> Result<Vec<&'a Value>, Error> {
    match component {
        PathComponent::Property(name) => Ok(match node {
            Value::Object(map) => map.get(name).into_iter().collect(),
            _ => vec![],
        }),
        PathComponent::Index(index) => Ok(match node {
            Value::Array(arr) => normalize_index(*index, arr.len())
                .and_then(|i| arr.get(i))
                .into_iter()
                .collect(),
            _ => vec![],
        }),
        PathComponent::Wildcard => Ok(match node {
            Value::Object(map) => map.values().collect(),
            Value::Array(arr) => arr.iter().collect(),
            _ => vec![],
        }),
        PathComponent::Slice { start, end } => Ok(match node {
            Value::Array(arr) => slice_range(arr, *start, *end),
            _ => vec![],
        }),
        PathComponent::RecursiveDescent(inner) => {
            let mut results = match_component(inner, node)?;
            descend(inner, node, &mut results)?;
            Ok(results)
        }
        PathComponent::Filter(expression) => match node {
            Value::Array(arr) => {
                let filter = FilterExpr::parse(expression)?;
                Ok(arr.iter().filter(|element| filter.matches(element)).collect())
            }
            // Filters only apply to arrays; the expression is not even
            // parsed for other shapes.
            _ => Ok(vec![]),
        },
    }
}

/// Depth-first pre-order walk below `node`: for every child in stored
/// order, apply `inner` to the child and then recurse into it.
fn descend<'a>(
    inner: &PathComponent,
    node: &'a Value,
    results: &mut Vec<&'a Value>,
) -> Result<(), Error> {
    match node {
        Value::Object(map) => {
            for child in map.values() {
                results.append(&mut match_component(inner, child)?);
                descend(inner, child, results)?;
            }
        }
        Value::Array(arr) => {
            for child in arr {
                results.append(&mut match_component(inner, child)?);
                descend(inner, child, results)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn normalize_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        let i = index as usize;
        if i < len { Some(i) } else { None }
    } else {
        let shifted = len as i64 + index;
        if shifted >= 0 { Some(shifted as usize) } else { None }
    }
}

/// Python-style slice bounds: defaults are the array ends, negative bounds
/// are relative to the length, and an inverted range is empty.
fn slice_range(arr: &[Value], start: Option<i64>, end: Option<i64>) -> Vec<&Value> {
    let len = arr.len() as i64;

    let start = start.unwrap_or(0);
    let start = if start >= 0 { start } else { len + start }.max(0);

    let end = end.unwrap_or(len);
    let end = if end >= 0 { end } else { len + end }.min(len);

    if start < end {
        arr[start as usize..end as usize].iter().collect()
    } else {
        vec![]
    }
}

/// Comparison operators recognized by filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompOp {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "==" | "=" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            _ => None,
        }
    }
}

const OPERATOR_CHARS: [char; 4] = ['<', '>', '=', '!'];

/// A parsed `@.property <op> value` comparison, the only filter shape the
/// engine supports. An unrecognized operator run keeps the parsed form but
/// matches nothing.
struct FilterExpr {
    property: String,
    op: Option<CompOp>,
    value: String,
}

impl FilterExpr {
    fn parse(expression: &str) -> Result<Self, Error> {
        let trimmed = expression.trim();
        let Some(rest) = trimmed.strip_prefix("@.") else {
            return Err(Error::UnsupportedOperation(format!(
                "complex filters are not supported: {expression}"
            )));
        };

        let property: String = rest
            .chars()
            .take_while(|ch| *ch != ' ' && !OPERATOR_CHARS.contains(ch))
            .collect();
        if property.is_empty() {
            return Err(Error::UnsupportedOperation(format!(
                "invalid filter: {expression}"
            )));
        }

        // The operator is the first run of comparison characters after the
        // property name.
        let tail = &rest[property.len()..];
        let mut op = String::new();
        for ch in tail.chars() {
            if OPERATOR_CHARS.contains(&ch) {
                op.push(ch);
            } else if !op.is_empty() {
                break;
            }
        }
        if op.is_empty() {
            // No comparison operator at all; this covers existence tests
            // and compound boolean filters alike.
            return Err(Error::UnsupportedOperation(format!(
                "filter has no comparison operator: {expression}"
            )));
        }

        let value = tail
            .trim_start_matches(|ch: char| ch == ' ' || OPERATOR_CHARS.contains(&ch))
            .trim()
            .to_string();

        Ok(Self {
            property,
            op: CompOp::parse(&op),
            value,
        })
    }

    /// Array elements must be objects carrying the property; everything
    /// else is dropped.
    fn matches(&self, element: &Value) -> bool {
        let Value::Object(map) = element else {
            return false;
        };
        let Some(left) = map.get(&self.property) else {
            return false;
        };
        self.compare(left)
    }

    /// Numeric comparison when the right-hand side parses as a number,
    /// string equality otherwise. Ordering operators on non-numeric
    /// operands are false.
    fn compare(&self, left: &Value) -> bool {
        let Some(op) = self.op else {
            return false;
        };

        if let Ok(right) = self.value.parse::<f64>() {
            let Some(left) = numeric_value(left) else {
                return false;
            };
            return match op {
                CompOp::Lt => left < right,
                CompOp::Le => left <= right,
                CompOp::Gt => left > right,
                CompOp::Ge => left >= right,
                CompOp::Eq => left == right,
                CompOp::Ne => left != right,
            };
        }

        let right = strip_quotes(&self.value);
        let left = scalar_text(left);
        match op {
            CompOp::Eq => left == right,
            CompOp::Ne => left != right,
            _ => false,
        }
    }
}

/// Coerce a JSON value to a number for comparison: numbers directly,
/// numeric strings by parsing. Anything else is not comparable.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Natural string form of a value for string comparison.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Strip one pair of matching surrounding quotes, if present.
fn strip_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    if let (Some(first), Some(last)) = (chars.next(), chars.next_back())
        && first == last
        && (first == '\'' || first == '"')
    {
        return &value[1..value.len() - 1];
    }
    value
}
