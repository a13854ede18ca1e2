//! Parser for JSONPath query strings
//!
//! A single left-to-right scan over the path with an explicit cursor and no
//! backtracking. The parser never rejects its input: bracket content that
//! matches none of the recognized shapes degrades to a literal property
//! name, and empty extractions are skipped without emitting a component.

use crate::path::PathComponent;

/// Parse a path string into its component sequence.
///
/// A leading `$` is stripped if present. Blank-path rejection happens at
/// the [`crate::query`] entry point, not here.
pub fn parse(path: &str) -> Vec<PathComponent> {
    let mut cursor = Cursor::new(path.strip_prefix('$').unwrap_or(path));
    let mut components = Vec::new();

    while !cursor.is_done() {
        // A second dot means recursive descent; the next token becomes the
        // inner component. A lone dot is consumed and the scan falls
        // through to the bracket/property handling below.
        if cursor.eat('.') && cursor.eat('.') {
            if let Some(inner) = cursor.descent_target() {
                components.push(PathComponent::RecursiveDescent(Box::new(inner)));
            }
            continue;
        }

        if cursor.peek() == Some('[') {
            let content = cursor.bracket_content();
            components.push(classify_bracket(&content));
        } else {
            let name = cursor.property_name();
            if name == "*" {
                components.push(PathComponent::Wildcard);
            } else if !name.is_empty() {
                components.push(PathComponent::Property(name));
            }
        }
    }

    components
}

/// Decide what a bracket expression means from its extracted content.
fn classify_bracket(content: &str) -> PathComponent {
    if let Ok(index) = content.parse::<i64>() {
        return PathComponent::Index(index);
    }
    if content == "*" {
        return PathComponent::Wildcard;
    }
    if content.contains(':') {
        let mut bounds = content.split(':');
        let start = bounds.next().and_then(parse_bound);
        let end = bounds.next().and_then(parse_bound);
        return PathComponent::Slice { start, end };
    }
    if let Some(expression) = content.strip_prefix('?') {
        return PathComponent::Filter(expression.to_string());
    }
    if let Some(name) = unquote(content) {
        return PathComponent::Property(name.to_string());
    }
    // Unrecognized content is treated as a literal property name.
    PathComponent::Property(content.to_string())
}

/// Each slice bound parses independently; anything that is not an integer
/// leaves the bound open.
fn parse_bound(text: &str) -> Option<i64> {
    if text.is_empty() { None } else { text.parse().ok() }
}

/// Strip one pair of matching surrounding quotes, if present.
fn unquote(content: &str) -> Option<&str> {
    let mut chars = content.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if first == last && (first == '\'' || first == '"') {
        Some(&content[1..content.len() - 1])
    } else {
        None
    }
}

/// Scanning cursor over the path string. Tracks a byte position into the
/// input rather than re-slicing a "remaining" string on every step.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume a bare property name: everything up to the next `.` or `[`.
    fn property_name(&mut self) -> String {
        let rest = self.rest();
        let end = rest.find(['.', '[']).unwrap_or(rest.len());
        self.pos += end;
        rest[..end].to_string()
    }

    /// Consume a `[...]` expression and return its content. A `'` or `"`
    /// opens a quoted region in which `]` does not terminate the scan. An
    /// unterminated bracket consumes the remainder of the input.
    fn bracket_content(&mut self) -> String {
        self.eat('[');
        let mut content = String::new();
        let mut quote: Option<char> = None;
        while let Some(ch) = self.peek() {
            match quote {
                None if ch == ']' => {
                    self.bump();
                    return content;
                }
                None if ch == '\'' || ch == '"' => quote = Some(ch),
                Some(q) if ch == q => quote = None,
                _ => {}
            }
            content.push(ch);
            self.bump();
        }
        content
    }

    /// The token following `..`. A bracket expression here only ever means
    /// wildcard or property; a bare identifier additionally may be empty,
    /// in which case no component is produced.
    fn descent_target(&mut self) -> Option<PathComponent> {
        if self.peek() == Some('[') {
            let content = self.bracket_content();
            return Some(if content == "*" {
                PathComponent::Wildcard
            } else {
                PathComponent::Property(content)
            });
        }

        let name = self.property_name();
        if name == "*" {
            Some(PathComponent::Wildcard)
        } else if name.is_empty() {
            None
        } else {
            Some(PathComponent::Property(name))
        }
    }
}
