/// Core building logic.
///
/// Walks a symbolic expression and produces the matching logic expression,
/// resolving the operator in head position and checking its term count.
pub mod core;

/// The operator table.
///
/// Lists every operator with its accepted spellings and arity.
pub mod operator;
