//! Recursive descent theme sheet parser.
//!
//! Parses theme text into a [`Theme`] (a vector of [`Rule`]s). Uses the
//! logos-based tokenizer from [`crate::theme::tokenizer`].
//!
//! Grammar:
//!
//! ```text
//! sheet       := rule*
//! rule        := selector ("," selector)* "{" declaration* "}"
//! selector    := Ident ("." Ident)*
//! declaration := Ident ":" value+ ";"?
//! ```
//!
//! Three properties are recognized: `color`, `background` (one color name
//! or hex value each) and `text-style` (one or more attribute names, or
//! `none` to clear them).

use crate::theme::tokenizer::{tokenize, Token};
use crate::theme::{Attrs, Rule, Selector, StylePatch, Theme};

/// Errors from theme sheet parsing.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("unknown property '{name}' at position {position}")]
    UnknownProperty { name: String, position: usize },
}

/// A positioned token. `pos` is the index in the token stream, used for
/// error reporting.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    pos: usize,
}

/// Strip block comments (`/* ... */`) from the input, replacing each
/// comment with a single space. An unterminated comment consumes the rest
/// of the input.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => rest = "",
        }
    }

    result.push_str(rest);
    result
}

/// Parse a theme sheet into a [`Theme`].
pub fn parse_theme(input: &str) -> Result<Theme, ThemeError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize(&cleaned)
        .into_iter()
        .enumerate()
        .map(|(pos, (token, text))| PToken { token, text, pos })
        .collect();

    let mut parser = Parser { tokens, cursor: 0 };

    let mut rules = Vec::new();
    while !parser.is_eof() {
        rules.push(parser.parse_rule()?);
    }

    Ok(Theme { rules })
}

/// Recursive descent parser state.
struct Parser {
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&PToken> {
        if self.cursor < self.tokens.len() {
            let tok = &self.tokens[self.cursor];
            self.cursor += 1;
            Some(tok)
        } else {
            None
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<PToken, ThemeError> {
        match self.advance() {
            Some(tok) if &tok.token == expected => Ok(tok.clone()),
            Some(tok) => Err(ThemeError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {:?}, got {:?} '{}'", expected, tok.token, tok.text),
            }),
            None => Err(ThemeError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<PToken, ThemeError> {
        match self.advance() {
            Some(tok) if tok.token == Token::Ident => Ok(tok.clone()),
            Some(tok) => Err(ThemeError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {what}, got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(ThemeError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    fn current_pos(&self) -> usize {
        self.peek().map(|t| t.pos).unwrap_or(self.tokens.len())
    }

    /// Parse a single rule: selector(s) `{` declarations `}`.
    fn parse_rule(&mut self) -> Result<Rule, ThemeError> {
        let selectors = self.parse_selector_list()?;
        self.expect(&Token::BraceOpen)?;
        let patch = self.parse_declarations()?;
        self.expect(&Token::BraceClose)?;

        Ok(Rule { selectors, patch })
    }

    /// Parse a comma-separated list of selectors (before `{`).
    fn parse_selector_list(&mut self) -> Result<Vec<Selector>, ThemeError> {
        let mut selectors = Vec::new();

        selectors.push(self.parse_selector()?);

        while self.peek().is_some_and(|t| t.token == Token::Comma) {
            self.advance(); // consume comma
            selectors.push(self.parse_selector()?);
        }

        Ok(selectors)
    }

    /// Parse a single selector: a widget type followed by zero or more
    /// `.class` parts, e.g. `day.selected.focused`.
    fn parse_selector(&mut self) -> Result<Selector, ThemeError> {
        let type_tok = self.expect_ident("widget type")?;
        let mut classes = Vec::new();

        while self.peek().is_some_and(|t| t.token == Token::Dot) {
            self.advance(); // consume dot
            let class_tok = self.expect_ident("class name after '.'")?;
            classes.push(class_tok.text);
        }

        Ok(Selector {
            widget_type: type_tok.text,
            classes,
        })
    }

    /// Parse declarations between `{` and `}`, folding them into one patch.
    /// A later declaration for the same property overrides an earlier one.
    fn parse_declarations(&mut self) -> Result<StylePatch, ThemeError> {
        let mut patch = StylePatch::default();

        while self.peek().is_some_and(|t| t.token != Token::BraceClose) {
            self.parse_declaration(&mut patch)?;
        }

        Ok(patch)
    }

    /// Parse a single declaration: `property: value+ ;` (the semicolon is
    /// optional before `}`).
    fn parse_declaration(&mut self, patch: &mut StylePatch) -> Result<(), ThemeError> {
        let prop_tok = self.expect_ident("property name")?;
        self.expect(&Token::Colon)?;

        match prop_tok.text.as_str() {
            "color" => patch.color = Some(self.parse_color_value()?),
            "background" => patch.background = Some(self.parse_color_value()?),
            "text-style" => patch.attrs = Some(self.parse_text_style()?),
            _ => {
                return Err(ThemeError::UnknownProperty {
                    name: prop_tok.text,
                    position: prop_tok.pos,
                });
            }
        }

        // Consume optional semicolon.
        if self.peek().is_some_and(|t| t.token == Token::Semicolon) {
            self.advance();
        }

        Ok(())
    }

    /// Parse a single color value: a named color or a hex color. The raw
    /// text is kept (hex colors keep their leading `#`) and only resolved
    /// to a terminal color at paint time.
    fn parse_color_value(&mut self) -> Result<String, ThemeError> {
        match self.advance() {
            Some(tok) if matches!(tok.token, Token::Ident | Token::HexColor) => {
                Ok(tok.text.clone())
            }
            Some(tok) => Err(ThemeError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected color value, got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(ThemeError::UnexpectedEof("expected color value".to_owned())),
        }
    }

    /// Parse one or more text-style attribute names. `none` clears all
    /// flags set so far, so `text-style: none;` produces an empty attrs
    /// set that still overrides lower-priority rules.
    fn parse_text_style(&mut self) -> Result<Attrs, ThemeError> {
        let mut attrs = Attrs::default();
        let mut seen_any = false;

        while self.peek().is_some_and(|t| t.token == Token::Ident) {
            let tok = self.expect_ident("text-style value")?;
            match tok.text.as_str() {
                "bold" => attrs.bold = true,
                "dim" => attrs.dim = true,
                "italic" => attrs.italic = true,
                "underline" => attrs.underline = true,
                "strikethrough" => attrs.strikethrough = true,
                "reverse" => attrs.reverse = true,
                "none" => attrs = Attrs::default(),
                other => {
                    return Err(ThemeError::UnexpectedToken {
                        position: tok.pos,
                        message: format!("unknown text-style '{other}'"),
                    });
                }
            }
            seen_any = true;
        }

        if !seen_any {
            return Err(ThemeError::UnexpectedToken {
                position: self.current_pos(),
                message: "expected text-style value".to_owned(),
            });
        }

        Ok(attrs)
    }
}
