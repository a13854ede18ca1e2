//! Path component definitions for JSONPath queries

/// One parsed segment of a JSONPath expression.
///
/// A full path is an ordered sequence of components; the evaluator applies
/// them left to right over an accumulating result set.
#[derive(Debug, Clone, PartialEq)]
pub enum PathComponent {
    /// Property access by exact key: `.name` or `['name']`
    Property(String),
    /// Array index: `[0]`; negative indices count from the end: `[-1]`
    Index(i64),
    /// All values of an object or all elements of an array: `*` or `[*]`
    Wildcard,
    /// Contiguous array sub-range with Python-style bounds: `[1:3]`, `[:2]`, `[-2:]`
    Slice {
        start: Option<i64>,
        end: Option<i64>,
    },
    /// Descendant search (`..`): apply the inner component to the current
    /// node and to every node below it
    RecursiveDescent(Box<PathComponent>),
    /// Filter clause kept as raw text and parsed at evaluation time:
    /// `[?@.price < 10]`
    Filter(String),
}
