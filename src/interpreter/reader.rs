/// Core reading logic.
///
/// Turns a token stream into a symbolic-expression tree. Provides the
/// `parse_one` and `parse_all` entry points and the recursive list reader
/// behind them.
pub mod core;

/// Utility functions for the reader.
///
/// Buffer shape checks performed before any token is consumed, and the
/// classification of single tokens into atoms.
pub mod utils;
