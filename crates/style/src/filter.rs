//! OGC filter nodes as parsed from `<ogc:Filter>` elements.

use serde::{Deserialize, Serialize};

/// A filter node. Each node holds exactly one predicate kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    FeatureId(Vec<String>),
    Or(Vec<Filter>),
    And(Vec<Filter>),
    Not(Box<Filter>),
    Comparison(Comparison),
    Between(Between),
    IsNull { property_name: String },
    Like(Like),
    /// A filter element this library does not evaluate, e.g. a spatial
    /// operator. Kept by name so evaluation can report it.
    Unknown(String),
}

impl Filter {
    /// Short name of the predicate kind, used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Filter::FeatureId(_) => "featureId",
            Filter::Or(_) => "or",
            Filter::And(_) => "and",
            Filter::Not(_) => "not",
            Filter::Comparison(c) => c.operator.name(),
            Filter::Between(_) => "between",
            Filter::IsNull { .. } => "isNull",
            Filter::Like(_) => "like",
            Filter::Unknown(name) => name,
        }
    }

    pub fn comparison(
        operator: ComparisonOperator,
        property_name: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Filter::Comparison(Comparison {
            operator,
            property_name: property_name.into(),
            literal: literal.into(),
            match_case: true,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOperator {
    EqualTo,
    NotEqualTo,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

impl ComparisonOperator {
    /// Maps an `ogc:PropertyIs*` element name to its operator.
    pub fn from_element_name(name: &str) -> Option<Self> {
        Some(match name {
            "PropertyIsEqualTo" => Self::EqualTo,
            "PropertyIsNotEqualTo" => Self::NotEqualTo,
            "PropertyIsLessThan" => Self::LessThan,
            "PropertyIsLessThanOrEqualTo" => Self::LessThanOrEqualTo,
            "PropertyIsGreaterThan" => Self::GreaterThan,
            "PropertyIsGreaterThanOrEqualTo" => Self::GreaterThanOrEqualTo,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EqualTo => "equalTo",
            Self::NotEqualTo => "notEqualTo",
            Self::LessThan => "lessThan",
            Self::LessThanOrEqualTo => "lessThanOrEqualTo",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanOrEqualTo => "greaterThanOrEqualTo",
        }
    }

    pub fn is_ordering(self) -> bool {
        !matches!(self, Self::EqualTo | Self::NotEqualTo)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub operator: ComparisonOperator,
    pub property_name: String,
    pub literal: String,
    pub match_case: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Between {
    pub property_name: String,
    pub lower_boundary: String,
    pub upper_boundary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub property_name: String,
    pub pattern: String,
    pub wild_card: char,
    pub single_char: char,
    pub escape_char: char,
    pub match_case: bool,
}

impl Like {
    pub fn new(property_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            pattern: pattern.into(),
            wild_card: '*',
            single_char: '.',
            escape_char: '!',
            match_case: true,
        }
    }
}
