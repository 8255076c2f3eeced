//! Entry point: drives a roxmltree document through the element handlers.

use crate::error::ParseError;
use sldreader_style::StyledLayerDescriptor;
use sldreader_types::SymbolizerId;
use std::sync::atomic::{AtomicU32, Ordering};

/// Shared by every parser, so no two symbolizers read in this process get
/// the same id.
static NEXT_SYMBOLIZER_ID: AtomicU32 = AtomicU32::new(0);

/// Parses an SLD document.
pub fn parse(source: &str) -> Result<StyledLayerDescriptor, ParseError> {
    SldParser::new().parse(source)
}

/// Turns SLD XML into a [`StyledLayerDescriptor`].
///
/// Each element is dispatched by local name to a handler that builds a
/// typed node; elements a handler does not know are skipped. Namespace
/// prefixes are ignored, so SLD 1.0 (`sld:`/`ogc:`) and SE 1.1 (`se:`)
/// documents read the same way.
///
/// Symbolizer ids are unique across all documents, whichever parser read
/// them, so any number of documents can share one style cache.
#[derive(Debug, Default)]
pub struct SldParser {
    symbolizers: u32,
}

impl SldParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, source: &str) -> Result<StyledLayerDescriptor, ParseError> {
        let document = roxmltree::Document::parse(source)?;
        self.symbolizers = 0;
        let sld = self.read_document(document.root_element())?;
        log::debug!(
            "Parsed SLD {} with {} layer(s) and {} symbolizer(s)",
            sld.version,
            sld.layers.len(),
            self.symbolizers
        );
        Ok(sld)
    }

    pub(crate) fn next_symbolizer_id(&mut self) -> SymbolizerId {
        self.symbolizers += 1;
        SymbolizerId::new(NEXT_SYMBOLIZER_ID.fetch_add(1, Ordering::Relaxed))
    }
}
