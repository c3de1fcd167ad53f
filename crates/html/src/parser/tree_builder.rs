//! Tree construction driven directly by tokenizer output.
//!
//! Tokens are applied as they arrive; there is no token buffer. The open-element
//! stack is the single source of ancestry: the document root sits below every open
//! element, an element is pushed on its (non self-closing) start tag and popped on
//! the matching end tag. Open elements are owned by the stack and attached to their
//! parent when popped; nothing else can be appended to a parent while one of its
//! children is open, so child order is the same as attaching on open.

use log::{debug, warn};

use super::error::{Diagnostic, DiagnosticKind, ParseError};
use super::tokenizer::{StartTag, Token, TokenSink};
use crate::dom::{Document, Element, Node, Text};

/// Callbacks invoked at the two well-defined points of the construction pass.
pub trait TreeHooks {
    /// A start tag created `element`; it is not yet attached or pushed.
    /// `open` holds its ancestors.
    fn element_opened(&mut self, element: &mut Element, open: &OpenElements) {
        let _ = (element, open);
    }

    /// `element` matched its end tag; all of its children are complete.
    /// Called before the element is attached to its parent.
    fn element_closed(&mut self, element: &mut Element) {
        let _ = element;
    }
}

/// Builds a bare tree with no styling or layout.
impl TreeHooks for () {}

/// Stack of currently open elements above the document root.
#[derive(Debug, Default)]
pub struct OpenElements {
    elements: Vec<Element>,
}

impl OpenElements {
    /// Open elements from the nearest (top of stack) to the furthest.
    pub fn ancestors(&self) -> impl ExactSizeIterator<Item = &Element> + DoubleEndedIterator + Clone {
        self.elements.iter().rev()
    }

    /// The current attach point, or `None` when only the document root is open.
    #[inline]
    pub fn current(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Number of open elements, not counting the document root.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    fn pop(&mut self) -> Option<Element> {
        self.elements.pop()
    }
}

/// Behaviour switches for tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Treat every tokenizer diagnostic as a fatal [`ParseError::Tokenize`].
    pub strict: bool,
    /// Maximum number of diagnostics retained; the rest are only counted.
    pub max_diagnostics: usize,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_diagnostics: 256,
        }
    }
}

/// Recoverable problems collected during a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub recorded: Vec<Diagnostic>,
    /// Diagnostics beyond `max_diagnostics` that were counted but not kept.
    pub dropped: usize,
}

impl Diagnostics {
    #[inline]
    pub fn total(&self) -> usize {
        self.recorded.len().saturating_add(self.dropped)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The tree builder: a [`TokenSink`] that grows a [`Document`].
pub struct TreeBuilder<H: TreeHooks> {
    document: Document,
    open: OpenElements,
    /// True while the last child of the attach point is a text run still accepting characters.
    text_open: bool,
    hooks: H,
    options: BuilderOptions,
    diagnostics: Diagnostics,
}

impl<H: TreeHooks> TreeBuilder<H> {
    pub fn new(hooks: H, options: BuilderOptions) -> Self {
        Self {
            document: Document::new(),
            open: OpenElements::default(),
            text_open: false,
            hooks,
            options,
            diagnostics: Diagnostics::default(),
        }
    }

    #[inline]
    pub const fn open_elements(&self) -> &OpenElements {
        &self.open
    }

    #[inline]
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Finish construction and hand back the tree, the hooks and the diagnostics.
    pub fn into_parts(self) -> (Document, H, Diagnostics) {
        (self.document, self.hooks, self.diagnostics)
    }

    /// Children list of the current attach point.
    fn attach_point(&mut self) -> &mut Vec<Node> {
        match self.open.elements.last_mut() {
            Some(element) => &mut element.children,
            None => &mut self.document.children,
        }
    }

    fn start_tag(&mut self, tag: StartTag) {
        self.text_open = false;
        let StartTag {
            name,
            attributes,
            self_closing,
        } = tag;
        let mut element = Element::new(name, attributes);
        // Style resolves against the ancestors only; the element is not on the stack yet.
        self.hooks.element_opened(&mut element, &self.open);
        if self_closing {
            self.attach_point().push(Node::Element(element));
        } else {
            self.open.push(element);
        }
    }

    fn end_tag(&mut self, name: &str, offset: usize) -> Result<(), ParseError> {
        self.text_open = false;
        let expected = self.open.current().map(|element| element.tag_name.clone());
        if expected.as_deref() != Some(name) {
            return Err(ParseError::TagMismatch {
                expected,
                found: name.to_owned(),
                offset,
            });
        }
        if let Some(mut element) = self.open.pop() {
            self.hooks.element_closed(&mut element);
            self.attach_point().push(Node::Element(element));
        }
        Ok(())
    }

    fn character(&mut self, ch: char) {
        let text_open = self.text_open;
        let children = self.attach_point();
        if text_open && let Some(Node::Text(text)) = children.last_mut() {
            text.content.push(ch);
        } else {
            children.push(Node::Text(Text {
                content: ch.to_string(),
            }));
        }
        self.text_open = true;
    }

    /// Attach whatever is still open; those elements never get a close callback.
    fn end_of_input(&mut self, offset: usize) -> Result<(), ParseError> {
        self.text_open = false;
        while let Some(element) = self.open.pop() {
            let mut diagnostic =
                Diagnostic::at(DiagnosticKind::UnclosedElement, offset, None);
            diagnostic.tag_name = Some(element.tag_name.clone());
            self.report(diagnostic)?;
            self.attach_point().push(Node::Element(element));
        }
        debug!(
            target: "html::tree_builder",
            "construction finished: {} top-level nodes, {} diagnostics",
            self.document.children.len(),
            self.diagnostics.total()
        );
        Ok(())
    }
}

impl<H: TreeHooks> TokenSink for TreeBuilder<H> {
    fn process_token(&mut self, token: Token, offset: usize) -> Result<(), ParseError> {
        match token {
            Token::StartTag(tag) => {
                self.start_tag(tag);
                Ok(())
            }
            Token::EndTag { name } => self.end_tag(&name, offset),
            Token::Character(ch) => {
                self.character(ch);
                Ok(())
            }
            Token::Eof => self.end_of_input(offset),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), ParseError> {
        warn!(target: "html::tokenizer", "{diagnostic}");
        if self.options.strict {
            return Err(ParseError::Tokenize(diagnostic));
        }
        if self.diagnostics.recorded.len() < self.options.max_diagnostics {
            self.diagnostics.recorded.push(diagnostic);
        } else {
            self.diagnostics.dropped = self.diagnostics.dropped.saturating_add(1);
        }
        Ok(())
    }
}
