use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Unknown filter '{0}'")]
    UnknownFilter(String),

    #[error("Unsupported filter shape: {0}")]
    UnsupportedFilterShape(String),
}
