//! Reader for configuration modules written as a JavaScript object literal.
//!
//! The module is parsed with the tree-sitter JavaScript grammar. The value
//! exported by `module.exports = ...` or `export default ...` is lowered into
//! a document tree as long as it is built from literals: strings, template
//! strings without substitutions, numbers, booleans, `null`/`undefined`,
//! arrays and nested objects. Inside `plugins`, call expressions such as
//! `require('@tailwindcss/forms')` are kept verbatim as opaque references.
//! Anything else that needs evaluation is reported with its position.

use std::path::Path;

use serde_json::{Map, Number, Value};
use tree_sitter::{Node, Parser};

use super::{Document, join_key};
use crate::{ConfigError, Result};

const PLUGINS: &str = "plugins";

pub(super) fn parse(text: &str, path: Option<&Path>) -> Result<Document> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| ConfigError::parse(e, path, 1, 1))?;

    let tree = parser
        .parse(text, None)
        .ok_or_else(|| ConfigError::parse("no syntax tree produced", path, 1, 1))?;
    let program = tree.root_node();

    if program.has_error() {
        let node = first_error(program).unwrap_or(program);
        return Err(SyntaxError::at(node, describe_error(node, text)).into_config_error(path));
    }

    let mut reader = Reader {
        source: text,
        duplicates: Vec::new(),
    };

    let root = exported_value(program, text)
        .and_then(|exported| reader.value(exported, ""))
        .map_err(|e| e.into_config_error(path))?;

    Ok(Document {
        root,
        duplicates: reader.duplicates,
    })
}

/// Renders a document tree as a CommonJS configuration module.
pub(super) fn render(value: &Value) -> std::result::Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(value)?;
    Ok(format!("module.exports = {body};\n"))
}

#[derive(Debug, PartialEq)]
struct SyntaxError {
    description: String,
    line: usize,
    column: usize,
}

impl SyntaxError {
    fn at(node: Node<'_>, description: impl Into<String>) -> Self {
        let position = node.start_position();
        Self {
            description: description.into(),
            line: position.row + 1,
            column: position.column + 1,
        }
    }

    fn into_config_error(self, path: Option<&Path>) -> ConfigError {
        ConfigError::parse(self.description, path, self.line, self.column)
    }
}

type ReadResult<T> = std::result::Result<T, SyntaxError>;

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    (0..node.child_count())
        .filter_map(|i| node.child(i))
        .find_map(first_error)
}

fn describe_error(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("missing `{}`", node.kind());
    }

    let snippet: String = source[node.byte_range()]
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(24)
        .collect();

    if snippet.trim().is_empty() {
        "syntax error".to_string()
    } else {
        format!("syntax error near `{}`", snippet.trim())
    }
}

/// Finds the expression assigned to `module.exports` or exported as default.
fn exported_value<'t>(program: Node<'t>, source: &str) -> ReadResult<Node<'t>> {
    let mut cursor = program.walk();
    for statement in program.named_children(&mut cursor) {
        let exported = match statement.kind() {
            "export_statement" => statement.child_by_field_name("value"),
            "expression_statement" => statement
                .named_child(0)
                .filter(|expression| is_module_exports_assignment(*expression, source))
                .and_then(|assignment| assignment.child_by_field_name("right")),
            _ => None,
        };

        if let Some(node) = exported {
            return Ok(node);
        }
    }

    Err(SyntaxError {
        description: "expected `module.exports =` or `export default`".to_string(),
        line: 1,
        column: 1,
    })
}

fn is_module_exports_assignment(expression: Node<'_>, source: &str) -> bool {
    if expression.kind() != "assignment_expression" {
        return false;
    }
    let Some(target) = expression.child_by_field_name("left") else {
        return false;
    };
    let field = |name: &str| target.child_by_field_name(name).map(|n| &source[n.byte_range()]);

    target.kind() == "member_expression"
        && field("object") == Some("module")
        && field("property") == Some("exports")
}

struct Reader<'s> {
    source: &'s str,
    duplicates: Vec<String>,
}

impl<'s> Reader<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        &self.source[node.byte_range()]
    }

    fn value(&mut self, node: Node<'_>, path: &str) -> ReadResult<Value> {
        match node.kind() {
            "object" => self.object(node, path),
            "array" => self.array(node, path),
            "string" | "template_string" => self.string(node).map(Value::String),
            "number" => self.number(node).map(Value::Number),
            "unary_expression" => self.signed_number(node).map(Value::Number),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" | "undefined" => Ok(Value::Null),
            "parenthesized_expression" => match first_named(node) {
                Some(inner) => self.value(inner, path),
                None => Err(SyntaxError::at(node, "empty parentheses")),
            },
            "call_expression" if is_plugin_entry(path) => {
                Ok(Value::String(self.text(node).to_string()))
            }
            "call_expression" => Err(SyntaxError::at(
                node,
                format!("unsupported function call at `{}`; calls are only kept inside `{PLUGINS}`", display_path(path)),
            )),
            "identifier" => Err(SyntaxError::at(
                node,
                format!("identifier `{}` needs evaluation; use a literal value", self.text(node)),
            )),
            other => Err(SyntaxError::at(
                node,
                format!("unsupported {} at `{}`", other.replace('_', " "), display_path(path)),
            )),
        }
    }

    fn object(&mut self, node: Node<'_>, path: &str) -> ReadResult<Value> {
        let mut object = Map::new();
        let mut cursor = node.walk();

        for member in node.named_children(&mut cursor) {
            match member.kind() {
                "comment" => continue,
                "pair" => {}
                "spread_element" => return Err(SyntaxError::at(member, "spread syntax is not supported")),
                other => {
                    return Err(SyntaxError::at(
                        member,
                        format!("unsupported {} in object literal", other.replace('_', " ")),
                    ));
                }
            }

            let (Some(key_node), Some(value_node)) = (
                member.child_by_field_name("key"),
                member.child_by_field_name("value"),
            ) else {
                return Err(SyntaxError::at(member, "incomplete property"));
            };

            let key = self.key(key_node)?;
            let child = join_key(path, &key);
            let value = self.value(value_node, &child)?;

            if object.contains_key(&key) {
                self.duplicates.push(child);
            }
            object.insert(key, value);
        }

        Ok(Value::Object(object))
    }

    fn array(&mut self, node: Node<'_>, path: &str) -> ReadResult<Value> {
        let mut items = Vec::new();
        let mut cursor = node.walk();

        for element in node.named_children(&mut cursor) {
            if element.kind() == "comment" {
                continue;
            }
            let child = join_key(path, &items.len().to_string());
            items.push(self.value(element, &child)?);
        }

        Ok(Value::Array(items))
    }

    fn key(&self, node: Node<'_>) -> ReadResult<String> {
        match node.kind() {
            "property_identifier" => Ok(self.text(node).to_string()),
            "string" => self.string(node),
            "number" => self.number(node).map(|n| n.to_string()),
            _ => Err(SyntaxError::at(node, "computed property names need evaluation")),
        }
    }

    fn string(&self, node: Node<'_>) -> ReadResult<String> {
        let mut value = String::new();
        let mut high_surrogate = None;
        let mut cursor = node.walk();

        for part in node.named_children(&mut cursor) {
            let text = self.text(part);
            match part.kind() {
                "string_fragment" => value.push_str(text),
                "escape_sequence" => match unescape(text) {
                    Escape::Char(c) => value.push(c),
                    Escape::LineContinuation => {}
                    Escape::Surrogate(high) if (0xD800..0xDC00).contains(&high) => {
                        high_surrogate = Some(high);
                        continue;
                    }
                    Escape::Surrogate(low) => {
                        let combined = high_surrogate
                            .take()
                            .and_then(|high| char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)))
                            .ok_or_else(|| SyntaxError::at(part, format!("unpaired surrogate `{text}`")))?;
                        value.push(combined);
                    }
                    Escape::Invalid => {
                        return Err(SyntaxError::at(part, format!("invalid escape `{text}`")));
                    }
                },
                "template_substitution" => {
                    return Err(SyntaxError::at(part, "template substitutions need evaluation"));
                }
                _ => value.push_str(text),
            }

            if high_surrogate.is_some() {
                return Err(SyntaxError::at(part, "unpaired surrogate escape"));
            }
        }

        if high_surrogate.is_some() {
            return Err(SyntaxError::at(node, "unpaired surrogate escape"));
        }

        Ok(value)
    }

    fn number(&self, node: Node<'_>) -> ReadResult<Number> {
        let text = self.text(node);
        parse_number(text).ok_or_else(|| SyntaxError::at(node, format!("unsupported number `{text}`")))
    }

    fn signed_number(&self, node: Node<'_>) -> ReadResult<Number> {
        let operator = node.child_by_field_name("operator").map(|n| self.text(n));
        let argument = node
            .child_by_field_name("argument")
            .filter(|argument| argument.kind() == "number");

        let negated = match (operator, argument) {
            (Some("+"), Some(argument)) => return self.number(argument),
            (Some("-"), Some(argument)) => negate(&self.number(argument)?),
            _ => None,
        };

        negated.ok_or_else(|| SyntaxError::at(node, format!("unsupported expression `{}`", self.text(node))))
    }
}

fn first_named(node: Node<'_>) -> Option<Node<'_>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .find(|child| child.kind() != "comment")
}

fn is_plugin_entry(path: &str) -> bool {
    path.strip_prefix(PLUGINS).is_some_and(|rest| rest.starts_with('.'))
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "(root)" } else { path }
}

/// Parses a numeric literal, keeping integers exact across the whole `u64` range.
fn parse_number(text: &str) -> Option<Number> {
    let cleaned = text.replace('_', "");

    let radix = match cleaned.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&cleaned[2..], radix).ok().map(Number::from);
    }

    if let Ok(integer) = cleaned.parse::<u64>() {
        return Some(Number::from(integer));
    }

    cleaned.parse::<f64>().ok().and_then(Number::from_f64)
}

fn negate(number: &Number) -> Option<Number> {
    if let Some(magnitude) = number.as_u64() {
        if let Ok(negated) = i64::try_from(-i128::from(magnitude)) {
            return Some(Number::from(negated));
        }
    }
    number.as_f64().and_then(|value| Number::from_f64(-value))
}

enum Escape {
    Char(char),
    Surrogate(u32),
    LineContinuation,
    Invalid,
}

fn unescape(sequence: &str) -> Escape {
    let Some(body) = sequence.strip_prefix('\\') else {
        return Escape::Invalid;
    };
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return Escape::Invalid;
    };

    let code = match first {
        'n' => return Escape::Char('\n'),
        't' => return Escape::Char('\t'),
        'r' => return Escape::Char('\r'),
        'b' => return Escape::Char('\u{8}'),
        'f' => return Escape::Char('\u{c}'),
        'v' => return Escape::Char('\u{b}'),
        '0'..='7' => u32::from_str_radix(body, 8).ok(),
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => return Escape::LineContinuation,
        'x' => u32::from_str_radix(chars.as_str(), 16).ok(),
        'u' => {
            let digits = chars.as_str();
            let digits = digits
                .strip_prefix('{')
                .and_then(|d| d.strip_suffix('}'))
                .unwrap_or(digits);
            u32::from_str_radix(digits, 16).ok()
        }
        other => return Escape::Char(other),
    };

    match code {
        Some(code) if (0xD800..0xE000).contains(&code) => Escape::Surrogate(code),
        Some(code) => char::from_u32(code).map_or(Escape::Invalid, Escape::Char),
        None => Escape::Invalid,
    }
}
