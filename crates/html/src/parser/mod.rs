//! Single-pass markup parsing: tokenizer and tree builder run in lockstep.

mod error;
mod tokenizer;
mod tree_builder;

pub use error::{Diagnostic, DiagnosticKind, ParseError};
pub use tokenizer::{Input, StartTag, State, Token, TokenSink, Tokenizer};
pub use tree_builder::{BuilderOptions, Diagnostics, OpenElements, TreeBuilder, TreeHooks};

use crate::dom::Document;

/// Everything a construction pass hands back.
#[derive(Debug)]
pub struct ParseOutput<H> {
    pub document: Document,
    pub hooks: H,
    pub diagnostics: Diagnostics,
}

/// Parse a complete markup string, invoking `hooks` as elements open and close.
///
/// # Errors
/// Returns [`ParseError::TagMismatch`] on an end tag that does not close the current
/// element, or [`ParseError::Tokenize`] for any tokenizer diagnostic in strict mode.
pub fn parse_with_hooks<H: TreeHooks>(
    markup: &str,
    hooks: H,
    options: BuilderOptions,
) -> Result<ParseOutput<H>, ParseError> {
    let mut tokenizer = Tokenizer::new();
    let mut builder = TreeBuilder::new(hooks, options);
    tokenizer.feed(markup, &mut builder)?;
    tokenizer.finish(&mut builder)?;
    let (document, hooks, diagnostics) = builder.into_parts();
    Ok(ParseOutput {
        document,
        hooks,
        diagnostics,
    })
}

/// Parse markup into a bare tree (no style resolution or layout).
///
/// # Errors
/// See [`parse_with_hooks`].
pub fn parse_document(markup: &str) -> Result<Document, ParseError> {
    parse_with_hooks(markup, (), BuilderOptions::default()).map(|output| output.document)
}
