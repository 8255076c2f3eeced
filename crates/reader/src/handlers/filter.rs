//! `<ogc:Filter>` reading.
//!
//! `Filter` and `Not` must hold exactly one predicate; anything else fails
//! the parse. Several `FeatureId` siblings form a single id-list predicate.
//! Elements that are not known predicates are kept as `Filter::Unknown` so
//! evaluation can name them.

use crate::error::ParseError;
use crate::util::{attribute, elements, local_name, location, text_content, trimmed_text};
use roxmltree::Node;
use sldreader_style::{Between, Comparison, ComparisonOperator, Filter, Like};

pub(crate) fn read_filter(node: Node<'_, '_>) -> Result<Filter, ParseError> {
    read_single_predicate(node)
}

fn read_single_predicate(node: Node<'_, '_>) -> Result<Filter, ParseError> {
    let mut predicates = read_predicates(node)?;
    match predicates.len() {
        1 => Ok(predicates.remove(0)),
        0 => Err(invalid(node, "expected exactly one predicate, found none")),
        n => Err(invalid(
            node,
            &format!("expected exactly one predicate, found {}", n),
        )),
    }
}

fn read_predicates(node: Node<'_, '_>) -> Result<Vec<Filter>, ParseError> {
    let mut predicates = Vec::new();
    let mut feature_ids: Vec<String> = Vec::new();
    let mut feature_id_slot = None;

    for child in elements(node) {
        let name = local_name(child);
        match name {
            "FeatureId" | "GmlObjectId" => {
                let id = attribute(child, "fid").or_else(|| attribute(child, "id"));
                match id {
                    Some(id) => {
                        feature_id_slot.get_or_insert(predicates.len());
                        feature_ids.push(id.to_string());
                    }
                    None => return Err(invalid(child, "missing fid attribute")),
                }
            }
            "Or" => predicates.push(Filter::Or(read_predicates(child)?)),
            "And" => predicates.push(Filter::And(read_predicates(child)?)),
            "Not" => predicates.push(Filter::Not(Box::new(read_single_predicate(child)?))),
            "PropertyIsNull" => predicates.push(Filter::IsNull {
                property_name: property_name(child)?,
            }),
            "PropertyIsBetween" => predicates.push(read_between(child)?),
            "PropertyIsLike" => predicates.push(read_like(child)?),
            _ => match ComparisonOperator::from_element_name(name) {
                Some(operator) => predicates.push(read_comparison(child, operator)?),
                None => {
                    log::debug!("Unsupported filter element <{}>", name);
                    predicates.push(Filter::Unknown(name.to_string()));
                }
            },
        }
    }

    if let Some(slot) = feature_id_slot {
        predicates.insert(slot, Filter::FeatureId(feature_ids));
    }
    Ok(predicates)
}

fn read_comparison(
    node: Node<'_, '_>,
    operator: ComparisonOperator,
) -> Result<Filter, ParseError> {
    Ok(Filter::Comparison(Comparison {
        operator,
        property_name: property_name(node)?,
        literal: child_text(node, "Literal").unwrap_or_default(),
        match_case: match_case(node),
    }))
}

fn read_between(node: Node<'_, '_>) -> Result<Filter, ParseError> {
    let boundary = |name: &str| {
        elements(node)
            .find(|n| local_name(*n) == name)
            .and_then(|n| child_text(n, "Literal").or_else(|| Some(trimmed_text(n))))
            .ok_or_else(|| invalid(node, &format!("missing {}", name)))
    };
    Ok(Filter::Between(Between {
        property_name: property_name(node)?,
        lower_boundary: boundary("LowerBoundary")?,
        upper_boundary: boundary("UpperBoundary")?,
    }))
}

fn read_like(node: Node<'_, '_>) -> Result<Filter, ParseError> {
    let mut like = Like::new(
        property_name(node)?,
        child_text(node, "Literal").unwrap_or_default(),
    );
    let single = |name: &str| attribute(node, name).and_then(|value| value.chars().next());
    if let Some(c) = single("wildCard") {
        like.wild_card = c;
    }
    if let Some(c) = single("singleChar") {
        like.single_char = c;
    }
    if let Some(c) = single("escapeChar").or_else(|| single("escape")) {
        like.escape_char = c;
    }
    like.match_case = match_case(node);
    Ok(Filter::Like(like))
}

fn property_name(node: Node<'_, '_>) -> Result<String, ParseError> {
    elements(node)
        .find(|n| local_name(*n) == "PropertyName")
        .map(trimmed_text)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| invalid(node, "missing PropertyName"))
}

fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    let child = elements(node).find(|n| local_name(*n) == name)?;
    // Literals are compared verbatim apart from surrounding whitespace.
    Some(text_content(child).trim().to_string())
}

fn match_case(node: Node<'_, '_>) -> bool {
    !matches!(attribute(node, "matchCase"), Some(v) if v.eq_ignore_ascii_case("false"))
}

fn invalid(node: Node<'_, '_>, reason: &str) -> ParseError {
    ParseError::InvalidFilter {
        element: local_name(node).to_string(),
        reason: reason.to_string(),
        location: location(node),
    }
}
