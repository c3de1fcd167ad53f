//! Parse failures and recoverable tokenizer diagnostics.

use core::fmt;

use serde::Serialize;

/// Kinds of recoverable tokenizer problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    /// A character that is not valid at this position of tag or attribute syntax.
    UnexpectedCharacter,
    /// A U+0000 inside tag or attribute syntax.
    UnexpectedNullCharacter,
    /// Input ended in the middle of a tag.
    UnexpectedEndOfInput,
    /// An element was still open when input ended.
    UnclosedElement,
}

/// A recoverable problem found during the pass. The offending character was dropped
/// and the tokenizer stayed in (or re-entered) a well-defined state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Character offset (not byte offset) into the input.
    pub offset: usize,
    /// The offending character, when there was one.
    pub character: Option<char>,
    /// Tag name involved, for element-level diagnostics.
    pub tag_name: Option<String>,
}

impl Diagnostic {
    #[inline]
    pub const fn at(kind: DiagnosticKind, offset: usize, character: Option<char>) -> Self {
        Self {
            kind,
            offset,
            character,
            tag_name: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnexpectedCharacter => {
                write!(formatter, "unexpected character")?;
            }
            DiagnosticKind::UnexpectedNullCharacter => {
                write!(formatter, "unexpected null character")?;
            }
            DiagnosticKind::UnexpectedEndOfInput => {
                write!(formatter, "unexpected end of input inside a tag")?;
            }
            DiagnosticKind::UnclosedElement => {
                write!(formatter, "element was never closed")?;
            }
        }
        if let Some(character) = self.character {
            write!(formatter, " {character:?}")?;
        }
        if let Some(tag_name) = &self.tag_name {
            write!(formatter, " <{tag_name}>")?;
        }
        write!(formatter, " at offset {}", self.offset)
    }
}

/// Fatal failures that abort the construction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An end tag did not name the currently open element.
    TagMismatch {
        /// Tag of the element on top of the open-element stack (`None` when only the document is open).
        expected: Option<String>,
        found: String,
        offset: usize,
    },
    /// A tokenizer diagnostic promoted to a failure by strict mode.
    Tokenize(Diagnostic),
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagMismatch {
                expected: Some(expected),
                found,
                offset,
            } => write!(
                formatter,
                "end tag </{found}> does not match open element <{expected}> at offset {offset}"
            ),
            Self::TagMismatch {
                expected: None,
                found,
                offset,
            } => write!(
                formatter,
                "end tag </{found}> with no open element at offset {offset}"
            ),
            Self::Tokenize(diagnostic) => write!(formatter, "tokenizer error: {diagnostic}"),
        }
    }
}

impl std::error::Error for ParseError {}
