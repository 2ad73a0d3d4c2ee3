//! Grammar productions, split by syntactic category.

mod expr;
mod stmt;

/// Upper bound on call arguments and function parameters.
pub(crate) const MAX_ARGS: usize = 255;
