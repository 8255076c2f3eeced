pub mod fixtures;

use sldreader::{Rule, SldError, StyledLayerDescriptor, UserStyle};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Parses `xml`, initialising test logging first.
pub fn read(xml: &str) -> Result<StyledLayerDescriptor, SldError> {
    let _ = env_logger::builder().is_test(true).try_init();
    sldreader::read(xml)
}

/// The default style of `layer`, panicking with a useful message if absent.
pub fn default_style<'a>(sld: &'a StyledLayerDescriptor, layer: &str) -> &'a UserStyle {
    sld.layer(layer)
        .unwrap_or_else(|| panic!("layer '{}' not found", layer))
        .default_style()
        .unwrap_or_else(|| panic!("layer '{}' has no style", layer))
}

pub fn rule_names(rules: &[&Rule]) -> Vec<String> {
    rules
        .iter()
        .map(|r| r.name.clone().unwrap_or_default())
        .collect()
}
