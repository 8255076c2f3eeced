//! Filter evaluation against a feature's id and properties.

use crate::error::FilterError;
use regex::Regex;
use serde_json::Value;
use sldreader_style::{Between, Comparison, ComparisonOperator, Filter, Like};
use sldreader_types::{Feature, property_to_number, property_to_string};

/// Evaluates `filter` for `feature`.
///
/// A predicate on a missing (or null) property is false rather than an
/// error. `Or`/`And` short-circuit in document order; an empty group is an
/// [`FilterError::UnsupportedFilterShape`].
pub fn matches(filter: &Filter, feature: &dyn Feature) -> Result<bool, FilterError> {
    match filter {
        Filter::FeatureId(ids) => {
            Ok(feature.id().is_some_and(|id| ids.iter().any(|fid| fid == id)))
        }
        Filter::Not(inner) => Ok(!matches(inner, feature)?),
        Filter::Or(branches) => {
            require_branches(filter, branches)?;
            for branch in branches {
                if matches(branch, feature)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Filter::And(branches) => {
            require_branches(filter, branches)?;
            for branch in branches {
                if !matches(branch, feature)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Filter::Comparison(comparison) => Ok(compare(comparison, feature)),
        Filter::Between(between) => Ok(is_between(between, feature)),
        Filter::IsNull { property_name } => {
            Ok(feature.property(property_name).is_none_or(Value::is_null))
        }
        Filter::Like(like) => is_like(like, feature),
        Filter::Unknown(_) => Err(FilterError::UnknownFilter(filter.kind().to_string())),
    }
}

fn require_branches(group: &Filter, branches: &[Filter]) -> Result<(), FilterError> {
    if branches.is_empty() {
        return Err(FilterError::UnsupportedFilterShape(format!(
            "'{}' without predicates",
            group.kind()
        )));
    }
    Ok(())
}

fn present_property<'f>(feature: &'f dyn Feature, name: &str) -> Option<&'f Value> {
    feature.property(name).filter(|value| !value.is_null())
}

fn literal_number(literal: &str) -> Option<f64> {
    literal.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn compare(comparison: &Comparison, feature: &dyn Feature) -> bool {
    let Some(value) = present_property(feature, &comparison.property_name) else {
        return false;
    };
    let literal = comparison.literal.as_str();
    let operator = comparison.operator;

    if !operator.is_ordering() {
        let equal = values_equal(value, literal, comparison.match_case);
        return equal == (operator == ComparisonOperator::EqualTo);
    }

    let (Some(left), Some(right)) = (property_to_number(value), literal_number(literal)) else {
        return false;
    };
    match operator {
        ComparisonOperator::LessThan => left < right,
        ComparisonOperator::LessThanOrEqualTo => left <= right,
        ComparisonOperator::GreaterThan => left > right,
        ComparisonOperator::GreaterThanOrEqualTo => left >= right,
        ComparisonOperator::EqualTo | ComparisonOperator::NotEqualTo => false,
    }
}

/// Numbers compare numerically against a numeric literal; everything else
/// compares as text.
fn values_equal(value: &Value, literal: &str, match_case: bool) -> bool {
    if let (Value::Number(number), Some(right)) = (value, literal_number(literal)) {
        return number.as_f64() == Some(right);
    }
    let text = property_to_string(value);
    if match_case {
        text == literal
    } else {
        text.to_lowercase() == literal.to_lowercase()
    }
}

fn is_between(between: &Between, feature: &dyn Feature) -> bool {
    let value = present_property(feature, &between.property_name).and_then(property_to_number);
    match (
        value,
        literal_number(&between.lower_boundary),
        literal_number(&between.upper_boundary),
    ) {
        (Some(v), Some(lower), Some(upper)) => lower <= v && v <= upper,
        _ => false,
    }
}

fn is_like(like: &Like, feature: &dyn Feature) -> Result<bool, FilterError> {
    let Some(value) = present_property(feature, &like.property_name) else {
        return Ok(false);
    };
    Ok(like_regex(like)?.is_match(&property_to_string(value)))
}

fn like_regex(like: &Like) -> Result<Regex, FilterError> {
    let mut pattern = String::from(if like.match_case { "(?s)^" } else { "(?si)^" });
    let mut chars = like.pattern.chars();
    while let Some(c) = chars.next() {
        if c == like.escape_char {
            if let Some(escaped) = chars.next() {
                pattern.push_str(&regex::escape(escaped.encode_utf8(&mut [0; 4])));
            }
        } else if c == like.wild_card {
            pattern.push_str(".*");
        } else if c == like.single_char {
            pattern.push('.');
        } else {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    pattern.push('$');
    Regex::new(&pattern).map_err(|e| {
        FilterError::UnsupportedFilterShape(format!("like pattern '{}': {}", like.pattern, e))
    })
}
