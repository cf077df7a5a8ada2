//! Expression rewrites: negation elimination and AST-level DNF
//!
//! Two tree-to-tree transformations that prepare a predicate for bitset
//! normalization:
//!
//! - [`remove_not_expressions`] pushes every `NOT` down to the leaves and
//!   discards it there, negating operators in place (De Morgan at logical
//!   nodes, operator flips at comparison/membership leaves). Total and
//!   idempotent.
//! - [`transform_to_dnf`] distributes `AND` over `OR` directly on the tree,
//!   producing an `OR` of `AND` clauses without going through bits. Requires
//!   negation-free input.

use super::{
    and, or, ComparisonExpression, Expression, InExpression, LogicalExpression, LogicalOperator,
    NotExpression,
};
use crate::error::PredicateError;

/// Rewrite `expr` into an equivalent expression without `Not` nodes.
///
/// Walks the tree depth-first carrying a "currently negated" flag. Entering a
/// `Not` flips the flag and drops the node; a negated logical node swaps
/// `AND` ↔ `OR`; a negated leaf replaces its operator by the logical
/// opposite. The result is equivalent to the input under every truth
/// assignment of the leaf predicates, and running the rewrite on already
/// negation-free input returns it unchanged.
///
/// # Examples
///
/// ```
/// use predicate_minimizer::{eq, ne, not, remove_not_expressions};
///
/// let rewritten = remove_not_expressions(not(eq("a", "hello")));
/// assert_eq!(rewritten, ne("a", "hello"));
/// ```
pub fn remove_not_expressions(expr: Expression) -> Expression {
    remove_not(expr, false)
}

fn remove_not(expr: Expression, negated: bool) -> Expression {
    match expr {
        Expression::Logical(node) => {
            let children = node
                .children
                .into_iter()
                .map(|child| remove_not(child, negated))
                .collect();
            let op = if negated { node.op.negated() } else { node.op };
            Expression::Logical(LogicalExpression { op, children })
        }
        Expression::Comparison(node) => {
            let op = if negated { node.op.negated() } else { node.op };
            Expression::Comparison(ComparisonExpression { op, ..node })
        }
        Expression::In(node) => {
            let op = if negated { node.op.negated() } else { node.op };
            Expression::In(InExpression { op, ..node })
        }
        Expression::Not(NotExpression { child }) => remove_not(*child, !negated),
    }
}

/// Distribute `AND` over `OR`, returning a `Logical(OR)` of `Logical(AND)`
/// clauses equivalent to the input.
///
/// The outer node is always an `OR` and each clause is always an `AND`, even
/// for a bare leaf or a single-clause result. Clauses are enumerated in
/// odometer order: with several `OR`-contributing children, the rightmost
/// child's alternative varies fastest.
///
/// # Errors
///
/// The input must be negation-free (run [`remove_not_expressions`] first);
/// a surviving `Not` node is reported as
/// [`PredicateError::UnexpectedNegation`].
pub fn transform_to_dnf(expr: &Expression) -> Result<Expression, PredicateError> {
    let clauses = dnf_clauses(expr)?;
    Ok(or(clauses.into_iter().map(and).collect()))
}

/// Compute the DNF clause list: each inner vector is one conjunction of
/// leaves.
fn dnf_clauses(expr: &Expression) -> Result<Vec<Vec<Expression>>, PredicateError> {
    match expr {
        Expression::Comparison(_) | Expression::In(_) => Ok(vec![vec![expr.clone()]]),
        Expression::Not(_) => Err(PredicateError::UnexpectedNegation(expr.clone())),
        Expression::Logical(node) => match node.op {
            LogicalOperator::Or => {
                let mut clauses = Vec::new();
                for child in &node.children {
                    clauses.extend(dnf_clauses(child)?);
                }
                Ok(clauses)
            }
            LogicalOperator::And => {
                // Children whose DNF is a single clause merge into the base
                // conjunction; the rest contribute alternatives to the
                // cartesian product.
                let mut base: Vec<Expression> = Vec::new();
                let mut alternatives: Vec<Vec<Vec<Expression>>> = Vec::new();
                for child in &node.children {
                    let mut clauses = dnf_clauses(child)?;
                    match clauses.len() {
                        // A child with no clauses (an empty OR) annihilates
                        // the whole conjunction.
                        0 => return Ok(Vec::new()),
                        1 => base.append(&mut clauses[0]),
                        _ => alternatives.push(clauses),
                    }
                }

                if alternatives.is_empty() {
                    return Ok(vec![base]);
                }

                let mut clauses = Vec::new();
                let mut odometer = vec![0usize; alternatives.len()];
                loop {
                    let mut clause = base.clone();
                    for (k, branches) in alternatives.iter().enumerate() {
                        clause.extend(branches[odometer[k]].iter().cloned());
                    }
                    clauses.push(clause);

                    // Advance, rightmost digit first.
                    let mut k = alternatives.len();
                    loop {
                        if k == 0 {
                            return Ok(clauses);
                        }
                        k -= 1;
                        odometer[k] += 1;
                        if odometer[k] < alternatives[k].len() {
                            break;
                        }
                        odometer[k] = 0;
                    }
                }
            }
        },
    }
}
