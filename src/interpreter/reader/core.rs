use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenScanner},
        reader::utils::{is_balanced, is_only_operators, is_proper_syntax, read_atom},
    },
    sexpr::SExpr,
};

/// Result type used by the reader.
pub type ReadResult<T> = Result<T, SyntaxError>;

/// Reads exactly one expression and makes sure no tokens are left over.
///
/// This is the entry point for reading a line of input. Empty input reads as
/// [`SExpr::Empty`].
///
/// # Errors
/// Propagates the errors of [`read_expression`], and returns
/// [`SyntaxError::UnexpectedToken`] if tokens remain after the expression.
///
/// # Example
/// ```
/// use proplisp::{
///     interpreter::{lexer::TokenScanner, reader::core::parse_one},
///     sexpr::SExpr,
/// };
///
/// let mut scanner = TokenScanner::new("(K T x)").unwrap();
/// let sexpr = parse_one(&mut scanner).unwrap();
/// assert_eq!(sexpr, SExpr::list([SExpr::symbol("K"), SExpr::True, SExpr::symbol("x")]));
///
/// let mut scanner = TokenScanner::new("(K T x) y").unwrap();
/// assert!(parse_one(&mut scanner).is_err());
/// ```
pub fn parse_one(scanner: &mut TokenScanner<'_>) -> ReadResult<SExpr> {
    let sexpr = read_expression(scanner)?;
    reject_trailing(scanner)?;
    Ok(sexpr)
}

/// Reads every remaining token as the elements of one list.
///
/// # Errors
/// Propagates the errors of [`read_list`], and returns
/// [`SyntaxError::UnexpectedToken`] if tokens remain afterwards.
pub fn parse_all(scanner: &mut TokenScanner<'_>) -> ReadResult<SExpr> {
    let list = read_list(scanner)?;
    reject_trailing(scanner)?;
    Ok(list)
}

/// Reads one expression from the front of the scanner.
///
/// Before anything is consumed, the whole remaining buffer is checked: it
/// must be a parenthesized form or a single atom, must not be a bare run of
/// operator characters, and must have balanced parentheses.
///
/// A buffer without whitespace that holds several tokens, such as `x&y`,
/// reads as one symbol spelled exactly like the buffer. A parenthesized
/// form holding a single atom reads as that atom.
///
/// # Errors
/// - `InvalidSyntax` if the buffer has the wrong shape.
/// - `UnbalancedParentheses` if parentheses do not pair up.
/// - Errors from re-scanning a parenthesized group.
pub fn read_expression(scanner: &mut TokenScanner<'_>) -> ReadResult<SExpr> {
    let buffer = scanner.remaining();
    if buffer.is_empty() {
        return Ok(SExpr::Empty);
    }
    if !is_proper_syntax(buffer) || is_only_operators(buffer) {
        return Err(SyntaxError::InvalidSyntax { buffer: buffer.to_string() });
    }
    if !is_balanced(buffer) {
        return Err(SyntaxError::UnbalancedParentheses);
    }

    let Some(first) = scanner.next_token() else {
        return Ok(SExpr::Empty);
    };

    match first.token {
        Token::LParen => {
            let group = scanner.take_group(&first)?;
            let list = read_list(&mut TokenScanner::new(group)?)?;
            Ok(unwrap_single_atom(list))
        },
        Token::RParen => Err(SyntaxError::UnbalancedParentheses),
        _ if scanner.has_more_tokens() && !buffer.contains(char::is_whitespace) => {
            scanner.drain();
            Ok(SExpr::symbol(buffer))
        },
        _ => Ok(read_atom(&first)),
    }
}

/// Reads every remaining token of the scanner as list elements.
///
/// Atoms are classified one token at a time; a `(` starts a nested group
/// whose raw text is re-scanned and read as a list of its own. An exhausted
/// scanner yields [`SExpr::Empty`].
///
/// # Errors
/// Returns `UnbalancedParentheses` for a stray `)` or an unclosed group.
pub fn read_list(scanner: &mut TokenScanner<'_>) -> ReadResult<SExpr> {
    let mut items = Vec::new();
    while let Some(lexeme) = scanner.next_token() {
        let item = match lexeme.token {
            Token::LParen => {
                let group = scanner.take_group(&lexeme)?;
                read_list(&mut TokenScanner::new(group)?)?
            },
            Token::RParen => return Err(SyntaxError::UnbalancedParentheses),
            _ => read_atom(&lexeme),
        };
        items.push(item);
    }
    Ok(SExpr::list(items))
}

fn reject_trailing(scanner: &mut TokenScanner<'_>) -> ReadResult<()> {
    match scanner.next_token() {
        Some(lexeme) => Err(SyntaxError::UnexpectedToken { token: lexeme.text.to_string() }),
        None => Ok(()),
    }
}

fn unwrap_single_atom(list: SExpr) -> SExpr {
    match list {
        SExpr::Pair { head, tail } if head.is_atom() && matches!(*tail, SExpr::Empty) => *head,
        other => other,
    }
}
