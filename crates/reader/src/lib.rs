//! Reads SLD XML documents into the [`sldreader_style`] object model.

pub mod error;
pub mod parser;
mod handlers;
mod util;

pub use error::{Location, ParseError};
pub use parser::{SldParser, parse};
