use sldreader_reader::ParseError;
use sldreader_select::FilterError;
use sldreader_style::StyleParseError;
use sldreader_traits::ResourceLoadError;
use thiserror::Error;

/// Every error the crate surfaces.
#[derive(Error, Debug)]
pub enum SldError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Filter evaluation failed: {0}")]
    Filter(#[from] FilterError),

    #[error("Loading external graphic failed: {0}")]
    Resource(#[from] ResourceLoadError),

    #[error("Invalid style value: {0}")]
    Style(#[from] StyleParseError),
}
