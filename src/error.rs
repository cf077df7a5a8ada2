//! Error types for the predicate minimizer
//!
//! This module provides programmatically distinguishable error variants for the
//! two failure classes the library can report: contract violations (a negation
//! reaching a stage that requires negation-free input) and capacity overflows
//! (a predicate requiring more atoms or implicants than the fixed bit widths
//! support). Logical unsatisfiability is *not* an error anywhere in the crate;
//! it is reported as an empty [`Maxterm`] or an absent simplification result.
//!
//! [`Maxterm`]: crate::algebra::Maxterm

use crate::expression::Expression;
use thiserror::Error;

/// The error type for predicate normalization and minimization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// A `Not` node reached a transformation that requires negation-free input.
    ///
    /// Negations must be eliminated with
    /// [`remove_not_expressions`](crate::expression::remove_not_expressions)
    /// before calling [`transform_to_dnf`](crate::expression::transform_to_dnf)
    /// or [`transform_to_normal_form`](crate::normal_form::transform_to_normal_form).
    #[error("negation must be eliminated before normalization; found {0}")]
    UnexpectedNegation(Expression),

    /// The predicate requires more distinct atoms than the minterm bit width
    /// supports.
    ///
    /// Indices are never silently truncated; a predicate that does not fit is
    /// rejected as a whole.
    #[error("predicate requires more than {capacity} distinct atoms")]
    AtomCapacityExceeded {
        /// The fixed atom capacity ([`Minterm::CAPACITY`](crate::algebra::Minterm::CAPACITY)).
        capacity: usize,
    },

    /// Cover selection was given more prime implicants than its bit width
    /// supports.
    #[error("cover selection supports at most {capacity} prime implicants, got index {index}")]
    ImplicantCapacityExceeded {
        /// The fixed implicant capacity ([`IMPLICANT_CAPACITY`](crate::petrick::IMPLICANT_CAPACITY)).
        capacity: usize,
        /// The offending implicant index.
        index: u32,
    },
}
