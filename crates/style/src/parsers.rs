//! Low-level nom parser functions for SLD parameter values.
//!
//! SLD carries paint parameters as CSS-like text (`#AA00FF`, `4 2`,
//! `stroke-width`); these parsers turn them into typed values.

use nom::branch::alt;
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::map;
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use sldreader_types::Color;
use sldreader_types::color::parse_color;
use thiserror::Error;

/// Errors that can occur while parsing a parameter value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Value Parsers ---

/// Parses a dash array: numbers separated by whitespace and/or commas.
pub fn parse_dash_array(input: &str) -> IResult<&str, Vec<f64>> {
    separated_list1(
        alt((
            delimited(multispace0, map(char(','), |_| ()), multispace0),
            map(multispace1, |_| ()),
        )),
        double,
    )
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Parses a color parameter value.
pub fn color(value: &str) -> Result<Color, StyleParseError> {
    run_parser(parse_color, value).map_err(|_| StyleParseError::InvalidValue {
        property: "color".to_string(),
        value: value.to_string(),
    })
}

/// Parses a `stroke-dasharray` parameter value.
pub fn dash_array(value: &str) -> Result<Vec<f64>, StyleParseError> {
    run_parser(parse_dash_array, value).map_err(|_| StyleParseError::InvalidValue {
        property: "stroke-dasharray".to_string(),
        value: value.to_string(),
    })
}

/// Normalizes a `CssParameter`/`SvgParameter` name: `stroke-width` becomes `strokeWidth`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.trim().chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
