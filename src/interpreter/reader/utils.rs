use crate::{
    interpreter::lexer::{Lexeme, Token},
    sexpr::SExpr,
};

/// Spellings of the true literal, compared without regard to case.
pub const TRUE_SPELLINGS: [&str; 2] = ["true", "t"];
/// Spellings of the false literal, compared without regard to case.
pub const FALSE_SPELLINGS: [&str; 2] = ["false", "f"];

/// Whether every `(` in `buffer` is matched by a `)`, counting only.
#[must_use]
pub fn is_balanced(buffer: &str) -> bool {
    let mut depth = 0_i64;
    for ch in buffer.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {},
        }
    }
    depth == 0
}

/// Whether `buffer` can hold one expression: either it contains a
/// parenthesis, or it is a single atom with no whitespace inside.
#[must_use]
pub fn is_proper_syntax(buffer: &str) -> bool {
    buffer.contains(['(', ')']) || !buffer.contains(char::is_whitespace)
}

/// Whether `buffer` is nothing but operator characters and longer than one
/// character, e.g. `=>` or `&|` on a line of its own.
#[must_use]
pub fn is_only_operators(buffer: &str) -> bool {
    let only_glyphs = buffer.chars()
                            .all(|ch| !ch.is_alphanumeric() && ch != '(' && ch != ')');
    only_glyphs && buffer.chars().count() > 1
}

/// Classifies a single non-parenthesis token as an atom.
///
/// Numbers become constants, the boolean spellings become `True` or `False`
/// and everything else becomes a symbol.
///
/// # Example
/// ```
/// use proplisp::{
///     interpreter::{lexer::TokenScanner, reader::utils::read_atom},
///     sexpr::SExpr,
/// };
///
/// let mut scanner = TokenScanner::new("TRUE 0 <=>").unwrap();
/// let mut atoms = Vec::new();
/// while let Some(lexeme) = scanner.next_token() {
///     atoms.push(read_atom(&lexeme));
/// }
/// assert_eq!(atoms, vec![SExpr::True, SExpr::constant(0.0), SExpr::symbol("<=>")]);
/// ```
#[must_use]
pub fn read_atom(lexeme: &Lexeme<'_>) -> SExpr {
    let spelled_as = |spellings: &[&str]| {
        spellings.iter()
                 .any(|spelling| lexeme.text.eq_ignore_ascii_case(spelling))
    };

    match lexeme.token {
        Token::Number(value) => SExpr::constant(value),
        _ if spelled_as(&TRUE_SPELLINGS) => SExpr::True,
        _ if spelled_as(&FALSE_SPELLINGS) => SExpr::False,
        _ => SExpr::symbol(lexeme.text),
    }
}
