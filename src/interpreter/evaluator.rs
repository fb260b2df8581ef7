/// Core evaluation logic and environment management.
///
/// Contains the `Environment` holding variable bindings, the main evaluation
/// dispatch, and the handling of `set` and `let`.
pub mod core;

/// Logical connective evaluation.
///
/// Implements the truth functions behind the binary operators.
pub mod logic;
