//! Markup tokenizer, tree builder and document model.
//!
//! The parser consumes a complete markup string in one left-to-right pass and
//! builds the tree as tokens are produced. Styling and layout plug in through
//! [`parser::TreeHooks`].

pub mod dom;
pub mod parser;

pub use dom::{Attributes, ComputedStyle, Document, Element, Geometry, Node, StyleEntry, Text};
pub use parser::{
    BuilderOptions, Diagnostic, DiagnosticKind, Diagnostics, OpenElements, ParseError,
    ParseOutput, TreeHooks, parse_document, parse_with_hooks,
};
