use crate::error::{Location, ParseError};
use roxmltree::Node;
use sldreader_style::Expression;

pub(crate) fn elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

pub(crate) fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

pub(crate) fn location(node: Node<'_, '_>) -> Location {
    node.document().text_pos_at(node.range().start).into()
}

/// Looks up an attribute by local name, whatever its namespace.
pub(crate) fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name() == name)
        .map(|attr| attr.value())
}

pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

pub(crate) fn trimmed_text(node: Node<'_, '_>) -> String {
    text_content(node).trim().to_string()
}

pub(crate) fn optional_text(node: Node<'_, '_>) -> Option<String> {
    let text = trimmed_text(node);
    (!text.is_empty()).then_some(text)
}

pub(crate) fn read_number(node: Node<'_, '_>) -> Result<f64, ParseError> {
    let text = trimmed_text(node);
    text.parse::<f64>()
        .ok()
        .filter(|n| !n.is_nan())
        .ok_or_else(|| ParseError::InvalidNumber {
            element: local_name(node).to_string(),
            value: text,
            location: location(node),
        })
}

/// `IsDefault` is true for `1` or `true`.
pub(crate) fn read_bool(node: Node<'_, '_>) -> bool {
    let text = trimmed_text(node);
    text == "1" || text.eq_ignore_ascii_case("true")
}

pub(crate) fn skip(node: Node<'_, '_>, context: &str) {
    log::trace!("Skipping unsupported <{}> in <{}>", local_name(node), context);
}

enum Segment {
    Text(String),
    Property(String),
}

/// Reads a parameter value with possibly mixed content.
///
/// Plain text becomes a literal or `${..}` template, a lone
/// `<ogc:PropertyName>` a property reference, and text interleaved with
/// property names a concatenation. Outer whitespace is trimmed. Returns
/// `None` for an empty element.
pub(crate) fn read_expression(node: Node<'_, '_>) -> Option<Expression> {
    let mut segments: Vec<Segment> = Vec::new();
    for child in node.children() {
        if child.is_text() {
            if let Some(text) = child.text() {
                push_text(&mut segments, text);
            }
        } else if child.is_element() {
            match local_name(child) {
                "PropertyName" => segments.push(Segment::Property(trimmed_text(child))),
                "Literal" => push_text(&mut segments, &text_content(child)),
                _ => skip(child, local_name(node)),
            }
        }
    }

    if let Some(Segment::Text(first)) = segments.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(Segment::Text(last)) = segments.last_mut() {
        *last = last.trim_end().to_string();
    }
    let mut parts: Vec<Expression> = segments
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) if text.is_empty() => None,
            Segment::Text(text) => Some(Expression::from_text(&text)),
            Segment::Property(name) if name.is_empty() => None,
            Segment::Property(name) => Some(Expression::Property(name)),
        })
        .collect();

    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => Some(Expression::Concat(parts)),
    }
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    // Indentation between elements carries no content.
    if text.trim().is_empty() && !matches!(segments.last(), Some(Segment::Text(_))) {
        return;
    }
    match segments.last_mut() {
        Some(Segment::Text(prev)) => prev.push_str(text),
        _ => segments.push(Segment::Text(text.to_string())),
    }
}
