/// The evaluator module computes the truth value of logic expressions.
///
/// The evaluator walks the logic AST against a mutable environment of
/// variable bindings. It is the last stage of interpretation.
///
/// # Responsibilities
/// - Evaluates every logic expression variant.
/// - Installs persistent (`set`) and scoped (`let`) bindings.
/// - Reports undefined variables and attempts to evaluate the null sentinel.
pub mod evaluator;
/// The lexer module tokenizes source text for the reader.
///
/// The lexer reads raw text and produces classified tokens: numbers, words,
/// operator glyphs and parentheses. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens carrying their source text and span.
/// - Offers a pull-based scanner that also exposes the unconsumed buffer.
/// - Reports text that cannot be classified.
pub mod lexer;
/// The parser module builds logic expressions from symbolic expressions.
///
/// The parser gives meaning to the generic tree produced by the reader:
/// heads of lists are resolved to operators through their aliases and the
/// number of terms is checked against the operator's arity.
///
/// # Responsibilities
/// - Converts symbolic expressions into logic AST nodes.
/// - Resolves operator spellings, including ones split over several symbols.
/// - Rejects malformed operator forms with syntax errors.
pub mod parser;
/// The reader module builds symbolic-expression trees from tokens.
///
/// The reader knows only about atoms and parenthesized lists. It checks the
/// shape of a line before consuming it and re-scans nested groups to build
/// them as lists of their own.
///
/// # Responsibilities
/// - Converts tokens into constants, symbols, booleans, pairs and empty lists.
/// - Rejects unbalanced or malformed input before building anything.
/// - Rejects tokens left over after a complete expression.
pub mod reader;
