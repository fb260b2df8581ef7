use std::{collections::VecDeque, ops::Range};

use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token in the source input.
///
/// Tokens are classified as numbers, words, operators or parentheses. Any run
/// of characters that are neither whitespace, parentheses nor word characters
/// forms a single operator token, so glyphs such as `<=>`, `[*]` and `||` come
/// out whole.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `1`, `0.5` or `2e10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Word tokens such as `and`, `x` or `T`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
    /// Operator glyphs such as `&`, `=>` or `[-]`.
    #[regex(r"[^ \t\r\n\x0B\f()a-zA-Z0-9_]+", allow_greedy = true)]
    Operator,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace.
    #[regex(r"[ \t\r\n\x0B\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A classified token together with the text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'src> {
    /// The classification of the token.
    pub token: Token,
    /// The source text of the token.
    pub text:  &'src str,
    /// Byte range of the token within the scanned source.
    pub span:  Range<usize>,
}

/// A pull-based view over the tokens of one source buffer.
///
/// The whole buffer is lexed up front, so an unrecognised character is
/// reported before any token is handed out. The scanner keeps the source
/// around, which lets the reader inspect the unconsumed text and re-scan
/// parenthesized sub-buffers.
#[derive(Debug, Clone)]
pub struct TokenScanner<'src> {
    source: &'src str,
    tokens: VecDeque<Lexeme<'src>>,
}

impl<'src> TokenScanner<'src> {
    /// Tokenizes `source`.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedCharacter`] if part of the input
    /// cannot be classified.
    ///
    /// # Example
    /// ```
    /// use proplisp::interpreter::lexer::{Token, TokenScanner};
    ///
    /// let mut scanner = TokenScanner::new("(<=> x 1)").unwrap();
    /// let mut kinds = Vec::new();
    /// while let Some(lexeme) = scanner.next_token() {
    ///     kinds.push(lexeme.token);
    /// }
    /// assert_eq!(kinds,
    ///            vec![Token::LParen, Token::Operator, Token::Word, Token::Number(1.0), Token::RParen]);
    /// ```
    pub fn new(source: &'src str) -> Result<Self, SyntaxError> {
        let mut tokens = VecDeque::new();
        let mut lexer = Token::lexer(source);

        while let Some(token) = lexer.next() {
            if let Ok(token) = token {
                tokens.push_back(Lexeme { token,
                                          text: lexer.slice(),
                                          span: lexer.span() });
            } else {
                return Err(SyntaxError::UnexpectedCharacter { text: lexer.slice().to_string() });
            }
        }

        Ok(Self { source, tokens })
    }

    /// Whether any tokens remain.
    #[must_use]
    pub fn has_more_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Takes the next token, if any.
    pub fn next_token(&mut self) -> Option<Lexeme<'src>> {
        self.tokens.pop_front()
    }

    /// Discards every remaining token.
    pub fn drain(&mut self) {
        self.tokens.clear();
    }

    /// The raw, not yet consumed part of the source, without surrounding
    /// whitespace. Empty once every token has been taken.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        self.tokens
            .front()
            .map_or("", |lexeme| self.source[lexeme.span.start..].trim_end())
    }

    /// Consumes tokens up to the parenthesis matching an already consumed
    /// `open` parenthesis and returns the raw text between the two.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnbalancedParentheses`] if the tokens run out
    /// before the group is closed.
    pub fn take_group(&mut self, open: &Lexeme<'src>) -> Result<&'src str, SyntaxError> {
        let mut depth = 0_usize;
        while let Some(lexeme) = self.next_token() {
            match lexeme.token {
                Token::LParen => depth += 1,
                Token::RParen if depth == 0 => {
                    return Ok(&self.source[open.span.end..lexeme.span.start]);
                },
                Token::RParen => depth -= 1,
                _ => {},
            }
        }
        Err(SyntaxError::UnbalancedParentheses)
    }
}
