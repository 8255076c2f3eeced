//! Symbolizer parameter expressions and their per-feature evaluation.
//!
//! A parameter is either a literal, fixed at parse time, or dynamic: a
//! property reference, a `${attr}` template, or mixed text and property
//! references. Dynamic expressions are resolved against a feature each time
//! a style is requested.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::char;
use nom::combinator::{map, rest, verify};
use nom::multi::many0;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sldreader_types::{DirectPropertyGetter, Feature, PropertyGetter, property_to_string};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Literal {
    pub fn to_value(&self) -> Value {
        match self {
            Literal::Number(n) => Value::from(*n),
            Literal::String(s) => Value::String(s.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplatePart {
    Text(String),
    Placeholder(String),
}

/// A string with one or more `${attribute}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub source: String,
    pub parts: Vec<TemplatePart>,
}

impl Template {
    /// Parses `source`, returning `None` when it holds no placeholder.
    pub fn parse(source: &str) -> Option<Self> {
        let parts = template_parts(source);
        parts
            .iter()
            .any(|p| matches!(p, TemplatePart::Placeholder(_)))
            .then(|| Template {
                source: source.to_string(),
                parts,
            })
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|p| match p {
            TemplatePart::Placeholder(name) => Some(name.as_str()),
            TemplatePart::Text(_) => None,
        })
    }

    /// Substitutes every placeholder with the stringified property value.
    /// Placeholders whose property is absent are left verbatim.
    pub fn substitute(&self, feature: &dyn Feature, getter: &dyn PropertyGetter) -> String {
        let mut out = String::with_capacity(self.source.len());
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => out.push_str(text),
                TemplatePart::Placeholder(name) => match getter.get(feature, name) {
                    Some(value) if !value.is_null() => out.push_str(&property_to_string(&value)),
                    _ => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

// --- Template parsing ---

fn placeholder(input: &str) -> IResult<&str, TemplatePart> {
    map(
        verify(
            delimited(tag("${"), take_until("}"), char('}')),
            |name: &str| !name.trim().is_empty(),
        ),
        |name: &str| TemplatePart::Placeholder(name.trim().to_string()),
    )
    .parse(input)
}

fn literal_text(input: &str) -> IResult<&str, TemplatePart> {
    map(
        alt((
            verify(take_until("${"), |s: &str| !s.is_empty()),
            // A `$` that does not open a complete placeholder.
            tag("$"),
            verify(rest, |s: &str| !s.is_empty()),
        )),
        |s: &str| TemplatePart::Text(s.to_string()),
    )
    .parse(input)
}

fn template_parts(source: &str) -> Vec<TemplatePart> {
    let parsed: IResult<&str, Vec<TemplatePart>> =
        many0(alt((placeholder, literal_text))).parse(source);
    let parts = match parsed {
        Ok((_, parts)) => parts,
        Err(_) => vec![TemplatePart::Text(source.to_string())],
    };

    // Merge adjacent text runs.
    let mut merged: Vec<TemplatePart> = Vec::with_capacity(parts.len());
    for part in parts {
        if let (TemplatePart::Text(text), Some(TemplatePart::Text(prev))) =
            (&part, merged.last_mut())
        {
            prev.push_str(text);
            continue;
        }
        merged.push(part);
    }
    merged
}

// --- Expressions ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Expression {
    Literal(Literal),
    /// `<ogc:PropertyName>` reference.
    Property(String),
    Template(Template),
    /// Mixed text and property references, concatenated as strings.
    Concat(Vec<Expression>),
}

impl Expression {
    /// Classifies raw parameter text: a `${..}` template, a number, or a string.
    pub fn from_text(text: &str) -> Self {
        if let Some(template) = Template::parse(text) {
            return Expression::Template(template);
        }
        match text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Expression::Literal(Literal::Number(n)),
            _ => Expression::Literal(Literal::String(text.to_string())),
        }
    }

    pub fn property(name: impl Into<String>) -> Self {
        Expression::Property(name.into())
    }

    pub fn number(value: f64) -> Self {
        Expression::Literal(Literal::Number(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    pub fn is_dynamic(&self) -> bool {
        match self {
            Expression::Literal(_) => false,
            Expression::Property(_) | Expression::Template(_) => true,
            Expression::Concat(parts) => parts.iter().any(Expression::is_dynamic),
        }
    }

    /// Evaluates the expression for a feature.
    ///
    /// Static expressions ignore `feature` and `getter`, so both may be
    /// `None`. A dynamic expression without a feature yields `fallback`, as
    /// does a property reference whose value is absent or null. Without a
    /// getter, properties are read directly from the feature.
    pub fn evaluate(
        &self,
        feature: Option<&dyn Feature>,
        getter: Option<&dyn PropertyGetter>,
        fallback: Value,
    ) -> Value {
        if let Expression::Literal(literal) = self {
            return literal.to_value();
        }
        let Some(feature) = feature else {
            return fallback;
        };
        let getter = getter.unwrap_or(&DirectPropertyGetter);

        match self {
            Expression::Literal(literal) => literal.to_value(),
            Expression::Property(name) => match getter.get(feature, name) {
                Some(value) if !value.is_null() => value,
                _ => fallback,
            },
            Expression::Template(template) => Value::String(template.substitute(feature, getter)),
            Expression::Concat(parts) => {
                let text: String = parts
                    .iter()
                    .map(|part| {
                        property_to_string(&part.evaluate(Some(feature), Some(getter), Value::Null))
                    })
                    .collect();
                Value::String(text)
            }
        }
    }
}

/// Renders the expression back to template form; property references
/// appear as `${name}`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(Literal::Number(n)) => {
                write!(f, "{}", property_to_string(&Value::from(*n)))
            }
            Expression::Literal(Literal::String(s)) => f.write_str(s),
            Expression::Property(name) => write!(f, "${{{}}}", name),
            Expression::Template(template) => f.write_str(&template.source),
            Expression::Concat(parts) => parts.iter().try_for_each(|p| write!(f, "{}", p)),
        }
    }
}

/// `true` iff the expression is present and dynamic.
pub fn is_dynamic(expression: Option<&Expression>) -> bool {
    expression.is_some_and(Expression::is_dynamic)
}

/// Evaluates an optional expression; an absent expression yields `fallback`.
pub fn evaluate(
    expression: Option<&Expression>,
    feature: Option<&dyn Feature>,
    getter: Option<&dyn PropertyGetter>,
    fallback: Value,
) -> Value {
    match expression {
        Some(expression) => expression.evaluate(feature, getter, fallback),
        None => fallback,
    }
}
