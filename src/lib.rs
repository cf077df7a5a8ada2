//! # predicate-minimizer: exact DNF minimization for filter predicates
//!
//! **`predicate-minimizer`** normalizes and minimizes the boolean structure of
//! query-filter predicates. Given a tree of logical, comparison and
//! membership nodes it produces a semantically equivalent, minimal
//! disjunctive-normal-form (DNF) representation, suitable for index selection
//! and fast evaluation.
//!
//! ## Pipeline
//!
//! The stages compose into one data flow, each usable on its own:
//!
//! 1. **Negation elimination** ([`remove_not_expressions`]): `NOT` nodes are
//!    pushed to the leaves via De Morgan and absorbed into the leaf
//!    operators.
//! 2. **Bitset normal form** ([`transform_to_normal_form`]): canonicalized
//!    leaf predicates become *atoms* with bit indices, and the tree becomes a
//!    [`Maxterm`] - an OR of [`Minterm`] partial assignments.
//! 3. **Interval simplification** ([`simplify_intervals`]): comparisons on
//!    the same field path are folded into ranges; contradictory conjunctions
//!    are dropped and redundant literals cleared. The only stage aware of
//!    value ordering.
//! 4. **Quine-McCluskey** ([`quine_mccluskey()`]): prime implicant
//!    generation over the surviving minterms.
//! 5. **Petrick's method** ([`petrick()`]): selection of all minimal
//!    prime-implicant covers.
//!
//! A purely tree-level alternative to stage 2, [`transform_to_dnf`],
//! distributes `AND` over `OR` on the expression itself without going
//! through bits; both routes agree semantically.
//!
//! ## Quick Start
//!
//! ```
//! use predicate_minimizer::{and, gt, le, minimize, or};
//!
//! // (a > "10" && b <= "5") || (a > "10" && b > "5")
//! let filter = or(vec![
//!     and(vec![gt("a", "10"), le("b", "5")]),
//!     and(vec![gt("a", "10"), gt("b", "5")]),
//! ]);
//!
//! let minimized = minimize(filter).unwrap();
//!
//! // The b-branches cancel out: one implicant, a > "10", covering both.
//! assert_eq!(minimized.implicants.len(), 1);
//! assert_eq!(minimized.atoms[0], gt("a", "10"));
//! assert_eq!(minimized.covers, vec![vec![0]]);
//! ```
//!
//! ## Scope and guarantees
//!
//! - Pure transformation library: no parsing, no evaluation against data, no
//!   I/O. All operations are synchronous functions over owned values.
//! - Exact: every stage preserves boolean equivalence; unsatisfiable
//!   conjunctions become explicit "no solution" results, never errors.
//! - Bounded: the atom table is capped at [`Minterm::CAPACITY`] bits and
//!   cover selection at [`petrick::IMPLICANT_CAPACITY`] implicants; a
//!   predicate that does not fit is rejected with a [`PredicateError`]
//!   rather than truncated. Quine-McCluskey and Petrick are worst-case
//!   exponential; callers needing bounded latency should cap their inputs
//!   before invoking them.

pub mod algebra;
pub mod error;
pub mod expression;
pub mod intervals;
pub mod minimize;
pub mod normal_form;
pub mod petrick;
pub mod quine_mccluskey;

pub use algebra::{Maxterm, Minterm};
pub use error::PredicateError;
pub use expression::{
    remove_not_expressions, transform_to_dnf, ComparisonExpression, ComparisonOperator,
    Expression, InExpression, InOperator, LogicalExpression, LogicalOperator, NotExpression,
    Path, Value,
};
pub use expression::{and, eq, ge, gt, is_in, le, lt, ne, not, not_in, or};
pub use intervals::simplify_intervals;
pub use minimize::{minimize, MinimizedPredicate};
pub use normal_form::{transform_to_normal_form, NormalForm};
pub use petrick::petrick;
pub use quine_mccluskey::{quine_mccluskey, PrimeImplicant};
