// Element handlers, implemented as methods on `SldParser` grouped by the
// part of the document they read.

mod document;
mod filter;
mod rule;
mod symbolizer;
