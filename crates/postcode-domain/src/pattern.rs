//! Format-to-matcher compilation.
//!
//! A format is scanned once, one token per character, so a placeholder is never
//! expanded twice and literal characters never leak regex syntax.

use postcode_types::{FormatSpec, Placeholder};
use regex::Regex;

/// How strictly separator spaces are matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Make every literal space of the format optional. Does not strip spaces
    /// from the input and does not allow spaces anywhere else.
    pub ignore_spaces: bool,
}

impl MatchOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn ignoring_spaces() -> Self {
        Self {
            ignore_spaces: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Class(Placeholder),
    Literal(char),
    /// A literal space that may be omitted.
    OptionalSpace,
}

impl Token {
    fn push_regex(self, out: &mut String) {
        match self {
            Token::Class(Placeholder::Digit) => out.push_str("[0-9]"),
            Token::Class(Placeholder::Alpha) => out.push_str("[a-zA-Z]"),
            Token::Class(Placeholder::Alnum) => out.push_str("[a-zA-Z0-9]"),
            Token::Literal(c) => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
            Token::OptionalSpace => out.push_str(" ?"),
        }
    }
}

/// Split a format into match tokens.
pub fn tokenize(format: &FormatSpec, options: MatchOptions) -> Vec<Token> {
    format
        .as_str()
        .chars()
        .map(|c| match Placeholder::from_symbol(c) {
            Some(p) => Token::Class(p),
            None if c == ' ' && options.ignore_spaces => Token::OptionalSpace,
            None => Token::Literal(c),
        })
        .collect()
}

/// A compiled, fully anchored matcher for one format.
#[derive(Clone, Debug)]
pub struct Pattern {
    format: FormatSpec,
    tokens: Vec<Token>,
    regex: Regex,
}

impl Pattern {
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    pub fn format(&self) -> &FormatSpec {
        &self.format
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The generated regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile `format` into an anchored matcher.
pub fn compile(format: &FormatSpec, options: MatchOptions) -> Result<Pattern, regex::Error> {
    let tokens = tokenize(format, options);

    let mut source = String::with_capacity(format.as_str().len() * 8 + 6);
    source.push_str("^(?:");
    for token in &tokens {
        token.push_regex(&mut source);
    }
    source.push_str(")$");

    let regex = Regex::new(&source)?;
    Ok(Pattern {
        format: format.clone(),
        tokens,
        regex,
    })
}
