//! Rule selection: which rules of a feature-type-style apply to a feature
//! at a given map resolution.

pub mod error;
pub mod filter;
pub mod rules;
pub mod scale;

pub use error::FilterError;
pub use filter::matches;
pub use rules::select_rules;
pub use scale::{STANDARD_PIXEL_SIZE, in_scale, scale_denominator};
