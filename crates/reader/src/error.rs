use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

impl From<roxmltree::TextPos> for Location {
    fn from(pos: roxmltree::TextPos) -> Self {
        Location {
            line: pos.row,
            col: pos.col,
        }
    }
}

/// Failure to turn SLD text into a document. No partial document is
/// returned alongside any of these.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Invalid <{element}> filter at {location}: {reason}")]
    InvalidFilter {
        element: String,
        reason: String,
        location: Location,
    },

    #[error("Invalid number '{value}' in <{element}> at {location}")]
    InvalidNumber {
        element: String,
        value: String,
        location: Location,
    },
}
