//! Character-at-a-time tag tokenizer.
//! Spec: <https://html.spec.whatwg.org/multipage/parsing.html#tokenization> (subset)
//!
//! The tokenizer is a Mealy machine: an explicit [`State`] plus a transition function
//! over `(state, input, scratch)`. Tokens are pushed into a [`TokenSink`] as soon as a
//! transition completes them; nothing is buffered.
//!
//! Recovery policy: a character that is invalid at its position is reported to the
//! sink as a [`Diagnostic`], dropped, and the machine stays in its current state.
//! Two cases re-enter another state instead. A `<` or `</` that does not start a tag
//! name is emitted as text and the character is reconsumed in `Data`. A missing space
//! after a quoted attribute value re-enters `BeforeAttributeName` so the next
//! attribute is not lost.

use log::trace;

use super::error::{Diagnostic, DiagnosticKind, ParseError};
use crate::dom::Attributes;

/// One unit of tokenizer input; `Eof` is distinct from every character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Eof,
}

/// A start tag with its attributes as they appeared, names unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StartTag {
    pub name: String,
    pub attributes: Attributes,
    pub self_closing: bool,
}

/// Tokens emitted to the tree builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartTag(StartTag),
    EndTag { name: String },
    Character(char),
    Eof,
}

/// Receiver of tokens and diagnostics. Returning an error aborts tokenization.
pub trait TokenSink {
    /// Consume one token; `offset` is the character offset that completed it.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the token cannot be applied (for example a mismatched end tag).
    fn process_token(&mut self, token: Token, offset: usize) -> Result<(), ParseError>;

    /// Receive a recoverable diagnostic.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the sink treats diagnostics as fatal.
    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), ParseError>;
}

/// Tokenizer states, named after what is being awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Data,
    TagOpen,
    EndTagOpen,
    TagName,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    DoubleQuotedAttributeValue,
    SingleQuotedAttributeValue,
    UnquotedAttributeValue,
    AfterQuotedAttributeValue,
    SelfClosingStartTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TagKind {
    #[default]
    Start,
    End,
}

/// Scratch data for the tag currently being tokenized.
#[derive(Debug, Default)]
struct Scratch {
    kind: TagKind,
    tag: StartTag,
    /// Attribute being built: `(name, value)`.
    attribute: Option<(String, String)>,
}

impl Scratch {
    fn begin(&mut self, kind: TagKind) {
        self.kind = kind;
        self.tag = StartTag::default();
        self.attribute = None;
    }

    fn begin_attribute(&mut self) {
        self.commit_attribute();
        self.attribute = Some((String::new(), String::new()));
    }

    fn push_attribute_name(&mut self, ch: char) {
        if let Some((name, _)) = self.attribute.as_mut() {
            name.push(ch.to_ascii_lowercase());
        }
    }

    fn push_attribute_value(&mut self, ch: char) {
        if let Some((_, value)) = self.attribute.as_mut() {
            value.push(ch);
        }
    }

    /// Move the pending attribute onto the tag. A repeated name overwrites the
    /// earlier value but keeps its position.
    fn commit_attribute(&mut self) {
        let Some((name, value)) = self.attribute.take() else {
            return;
        };
        if name.is_empty() {
            return;
        }
        if let Some(slot) = self
            .tag
            .attributes
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            slot.1 = value;
        } else {
            self.tag.attributes.push((name, value));
        }
    }

    fn take_token(&mut self) -> Token {
        self.commit_attribute();
        let tag = core::mem::take(&mut self.tag);
        match self.kind {
            TagKind::Start => Token::StartTag(tag),
            TagKind::End => Token::EndTag { name: tag.name },
        }
    }
}

#[inline]
const fn is_tag_whitespace(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\u{000C}' | '\r' | ' ')
}

/// The tokenizer state machine.
#[derive(Debug)]
pub struct Tokenizer {
    state: State,
    scratch: Scratch,
    offset: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            state: State::Data,
            scratch: Scratch::default(),
            offset: 0,
        }
    }

    #[inline]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Feed a chunk of characters.
    ///
    /// # Errors
    /// Propagates the first error returned by the sink.
    pub fn feed<S: TokenSink>(&mut self, chunk: &str, sink: &mut S) -> Result<(), ParseError> {
        for ch in chunk.chars() {
            self.step(Input::Char(ch), sink)?;
        }
        Ok(())
    }

    /// Signal end of input. Always emits exactly one `Token::Eof`.
    ///
    /// # Errors
    /// Propagates the first error returned by the sink.
    pub fn finish<S: TokenSink>(&mut self, sink: &mut S) -> Result<(), ParseError> {
        self.step(Input::Eof, sink)
    }

    /// Run one transition and advance the input offset.
    ///
    /// # Errors
    /// Propagates the first error returned by the sink.
    pub fn step<S: TokenSink>(&mut self, input: Input, sink: &mut S) -> Result<(), ParseError> {
        let next = self.transition(self.state, input, sink)?;
        trace!(target: "html::tokenizer", "{:?} --{:?}--> {:?}", self.state, input, next);
        self.state = next;
        self.offset = self.offset.saturating_add(1);
        Ok(())
    }

    fn emit<S: TokenSink>(&self, token: Token, sink: &mut S) -> Result<(), ParseError> {
        sink.process_token(token, self.offset)
    }

    fn emit_tag<S: TokenSink>(&mut self, sink: &mut S) -> Result<State, ParseError> {
        let token = self.scratch.take_token();
        self.emit(token, sink)?;
        Ok(State::Data)
    }

    /// Report an invalid character and stay in `state`.
    fn drop_char<S: TokenSink>(
        &self,
        state: State,
        ch: char,
        sink: &mut S,
    ) -> Result<State, ParseError> {
        let kind = if ch == '\0' {
            DiagnosticKind::UnexpectedNullCharacter
        } else {
            DiagnosticKind::UnexpectedCharacter
        };
        sink.report(Diagnostic::at(kind, self.offset, Some(ch)))?;
        Ok(state)
    }

    /// Report a character that cannot start a tag name, emit the consumed markup
    /// as text and reconsume the character in `Data`.
    fn reject_tag_open<S: TokenSink>(
        &mut self,
        consumed: &str,
        ch: char,
        sink: &mut S,
    ) -> Result<State, ParseError> {
        self.drop_char(State::Data, ch, sink)?;
        for text in consumed.chars() {
            self.emit(Token::Character(text), sink)?;
        }
        self.transition(State::Data, Input::Char(ch), sink)
    }

    fn transition<S: TokenSink>(
        &mut self,
        state: State,
        input: Input,
        sink: &mut S,
    ) -> Result<State, ParseError> {
        let ch = match input {
            Input::Char(ch) => ch,
            Input::Eof => {
                if state != State::Data {
                    sink.report(Diagnostic::at(
                        DiagnosticKind::UnexpectedEndOfInput,
                        self.offset,
                        None,
                    ))?;
                }
                self.emit(Token::Eof, sink)?;
                return Ok(State::Data);
            }
        };

        match state {
            State::Data => {
                if ch == '<' {
                    return Ok(State::TagOpen);
                }
                self.emit(Token::Character(ch), sink)?;
                Ok(State::Data)
            }
            State::TagOpen => {
                if ch == '/' {
                    Ok(State::EndTagOpen)
                } else if ch.is_ascii_alphabetic() {
                    self.scratch.begin(TagKind::Start);
                    self.transition(State::TagName, input, sink)
                } else {
                    self.reject_tag_open("<", ch, sink)
                }
            }
            State::EndTagOpen => {
                if ch.is_ascii_alphabetic() {
                    self.scratch.begin(TagKind::End);
                    self.transition(State::TagName, input, sink)
                } else {
                    self.reject_tag_open("</", ch, sink)
                }
            }
            State::TagName => match ch {
                _ if is_tag_whitespace(ch) => Ok(State::BeforeAttributeName),
                '/' => Ok(State::SelfClosingStartTag),
                '>' => self.emit_tag(sink),
                '\0' | '<' => self.drop_char(state, ch, sink),
                _ => {
                    self.scratch.tag.name.push(ch.to_ascii_lowercase());
                    Ok(State::TagName)
                }
            },
            State::BeforeAttributeName => match ch {
                _ if is_tag_whitespace(ch) => Ok(State::BeforeAttributeName),
                '/' | '>' => self.transition(State::AfterAttributeName, input, sink),
                '=' => self.drop_char(state, ch, sink),
                _ => {
                    self.scratch.begin_attribute();
                    self.transition(State::AttributeName, input, sink)
                }
            },
            State::AttributeName => match ch {
                _ if is_tag_whitespace(ch) => {
                    self.transition(State::AfterAttributeName, input, sink)
                }
                '/' | '>' => self.transition(State::AfterAttributeName, input, sink),
                '=' => Ok(State::BeforeAttributeValue),
                '\0' | '"' | '\'' | '<' => self.drop_char(state, ch, sink),
                _ => {
                    self.scratch.push_attribute_name(ch);
                    Ok(State::AttributeName)
                }
            },
            State::AfterAttributeName => match ch {
                _ if is_tag_whitespace(ch) => Ok(State::AfterAttributeName),
                '/' => {
                    self.scratch.commit_attribute();
                    Ok(State::SelfClosingStartTag)
                }
                '=' => Ok(State::BeforeAttributeValue),
                '>' => self.emit_tag(sink),
                _ => {
                    self.scratch.begin_attribute();
                    self.transition(State::AttributeName, input, sink)
                }
            },
            State::BeforeAttributeValue => match ch {
                _ if is_tag_whitespace(ch) => Ok(State::BeforeAttributeValue),
                '"' => Ok(State::DoubleQuotedAttributeValue),
                '\'' => Ok(State::SingleQuotedAttributeValue),
                '>' => self.drop_char(state, ch, sink),
                _ => self.transition(State::UnquotedAttributeValue, input, sink),
            },
            State::DoubleQuotedAttributeValue | State::SingleQuotedAttributeValue => {
                let closing = if state == State::DoubleQuotedAttributeValue {
                    '"'
                } else {
                    '\''
                };
                if ch == closing {
                    self.scratch.commit_attribute();
                    Ok(State::AfterQuotedAttributeValue)
                } else if ch == '\0' {
                    self.drop_char(state, ch, sink)
                } else {
                    self.scratch.push_attribute_value(ch);
                    Ok(state)
                }
            }
            State::UnquotedAttributeValue => match ch {
                _ if is_tag_whitespace(ch) => {
                    self.scratch.commit_attribute();
                    Ok(State::BeforeAttributeName)
                }
                '/' => {
                    self.scratch.commit_attribute();
                    Ok(State::SelfClosingStartTag)
                }
                '>' => self.emit_tag(sink),
                '\0' | '"' | '\'' | '<' | '=' | '`' => self.drop_char(state, ch, sink),
                _ => {
                    self.scratch.push_attribute_value(ch);
                    Ok(State::UnquotedAttributeValue)
                }
            },
            State::AfterQuotedAttributeValue => match ch {
                _ if is_tag_whitespace(ch) => Ok(State::BeforeAttributeName),
                '/' => Ok(State::SelfClosingStartTag),
                '>' => self.emit_tag(sink),
                _ => {
                    sink.report(Diagnostic::at(
                        DiagnosticKind::UnexpectedCharacter,
                        self.offset,
                        Some(ch),
                    ))?;
                    self.transition(State::BeforeAttributeName, input, sink)
                }
            },
            State::SelfClosingStartTag => {
                if ch == '>' {
                    self.scratch.tag.self_closing = true;
                    self.emit_tag(sink)
                } else {
                    self.drop_char(state, ch, sink)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        tokens: Vec<Token>,
        diagnostics: Vec<Diagnostic>,
    }

    impl TokenSink for Recorder {
        fn process_token(&mut self, token: Token, _offset: usize) -> Result<(), ParseError> {
            self.tokens.push(token);
            Ok(())
        }

        fn report(&mut self, diagnostic: Diagnostic) -> Result<(), ParseError> {
            self.diagnostics.push(diagnostic);
            Ok(())
        }
    }

    fn tokenize(input: &str) -> Recorder {
        let mut recorder = Recorder::default();
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.feed(input, &mut recorder).is_ok());
        assert!(tokenizer.finish(&mut recorder).is_ok());
        recorder
    }

    fn start(name: &str, attrs: &[(&str, &str)], self_closing: bool) -> Token {
        let mut attributes = Attributes::new();
        for (attr_name, value) in attrs {
            attributes.push(((*attr_name).to_owned(), (*value).to_owned()));
        }
        Token::StartTag(StartTag {
            name: name.to_owned(),
            attributes,
            self_closing,
        })
    }

    #[test]
    /// # Panics
    /// Panics if tags and characters are not emitted in order.
    fn emits_tags_and_characters() {
        let recorder = tokenize("<P>hi</P>");
        assert_eq!(
            recorder.tokens,
            vec![
                start("p", &[], false),
                Token::Character('h'),
                Token::Character('i'),
                Token::EndTag { name: "p".into() },
                Token::Eof,
            ]
        );
        assert!(recorder.diagnostics.is_empty());
    }

    #[test]
    /// # Panics
    /// Panics if any attribute value syntax is mishandled.
    fn reads_all_attribute_value_forms() {
        let recorder = tokenize("<img id=a class=\"b c\" alt='d' hidden/>");
        assert_eq!(
            recorder.tokens,
            vec![
                start(
                    "img",
                    &[("id", "a"), ("class", "b c"), ("alt", "d"), ("hidden", "")],
                    true
                ),
                Token::Eof,
            ]
        );
    }

    #[test]
    /// # Panics
    /// Panics if an unquoted value followed by `/` does not self-close the tag.
    fn unquoted_value_then_slash_self_closes() {
        let recorder = tokenize("<br id=x/>");
        assert_eq!(recorder.tokens, vec![start("br", &[("id", "x")], true), Token::Eof]);
    }

    #[test]
    /// # Panics
    /// Panics if duplicate attribute names are not collapsed in place.
    fn duplicate_attribute_overwrites_in_place() {
        let recorder = tokenize("<div id=a class=c id=b>");
        assert_eq!(
            recorder.tokens,
            vec![start("div", &[("id", "b"), ("class", "c")], false), Token::Eof]
        );
    }

    #[test]
    /// # Panics
    /// Panics if a stray `=` is not reported and dropped.
    fn stray_equals_is_a_recoverable_diagnostic() {
        let recorder = tokenize("<div =id=\"x\">");
        assert_eq!(
            recorder.tokens,
            vec![start("div", &[("id", "x")], false), Token::Eof]
        );
        assert_eq!(recorder.diagnostics.len(), 1);
        assert_eq!(
            recorder.diagnostics[0].kind,
            DiagnosticKind::UnexpectedCharacter
        );
        assert_eq!(recorder.diagnostics[0].offset, 5);
        assert_eq!(recorder.diagnostics[0].character, Some('='));
    }

    #[test]
    /// # Panics
    /// Panics if a missing space between quoted attributes loses the second attribute.
    fn missing_space_after_quoted_value_recovers() {
        let recorder = tokenize("<a x='1'y='2'>");
        assert_eq!(
            recorder.tokens,
            vec![start("a", &[("x", "1"), ("y", "2")], false), Token::Eof]
        );
        assert_eq!(recorder.diagnostics.len(), 1);
    }

    #[test]
    /// # Panics
    /// Panics if end of input inside a tag is not reported.
    fn eof_inside_tag_is_reported() {
        let recorder = tokenize("<div class=\"open");
        assert_eq!(recorder.tokens, vec![Token::Eof]);
        assert_eq!(
            recorder.diagnostics.first().map(|diag| diag.kind),
            Some(DiagnosticKind::UnexpectedEndOfInput)
        );
    }

    #[test]
    /// # Panics
    /// Panics if a `<` that cannot open a tag is not kept as text.
    fn lone_less_than_is_text() {
        let recorder = tokenize("a < b</p>");
        assert_eq!(
            recorder.tokens,
            vec![
                Token::Character('a'),
                Token::Character(' '),
                Token::Character('<'),
                Token::Character(' '),
                Token::Character('b'),
                Token::EndTag { name: "p".into() },
                Token::Eof,
            ]
        );
        assert_eq!(recorder.diagnostics.len(), 1);
        assert_eq!(recorder.diagnostics[0].offset, 3);
        assert_eq!(recorder.diagnostics[0].character, Some(' '));
    }

    #[test]
    /// # Panics
    /// Panics if a markup declaration swallows the tag that follows it.
    fn doctype_becomes_text() {
        let recorder = tokenize("<!x><b></b>");
        assert_eq!(
            recorder.tokens,
            vec![
                Token::Character('<'),
                Token::Character('!'),
                Token::Character('x'),
                Token::Character('>'),
                start("b", &[], false),
                Token::EndTag { name: "b".into() },
                Token::Eof,
            ]
        );
    }

    #[test]
    /// # Panics
    /// Panics if `<` is accepted inside a tag name.
    fn less_than_inside_tag_name_is_dropped() {
        let recorder = tokenize("<p<>");
        assert_eq!(recorder.tokens, vec![start("p", &[], false), Token::Eof]);
        assert_eq!(recorder.diagnostics.len(), 1);
    }

    #[test]
    /// # Panics
    /// Panics if digits are not accepted inside tag names.
    fn tag_names_accept_digits() {
        let recorder = tokenize("<h1></h1>");
        assert_eq!(
            recorder.tokens,
            vec![
                start("h1", &[], false),
                Token::EndTag { name: "h1".into() },
                Token::Eof
            ]
        );
    }
}
