//! Atom registry and bitset DNF builder
//!
//! [`transform_to_normal_form`] translates a negation-free predicate tree
//! into the bitset algebra: every distinct leaf predicate becomes an *atom*
//! with a bit index, and the tree becomes a [`Maxterm`] over those atoms.
//!
//! # Canonicalization
//!
//! Leaves are registered in a positive direction form so that a predicate and
//! its logical negation share one atom, with the negation carried purely by
//! the minterm bit value:
//!
//! | leaf | registered atom | bit value |
//! |---|---|---|
//! | `EQ`, `GE`, `GT` | itself | true |
//! | `LE path value` | `GT path value` | false |
//! | `LT path value` | `GE path value` | false |
//! | `NE path value` | `EQ path value` | false |
//! | `IN` | itself | true |
//! | `NOT_IN path values` | `IN path values` | false |
//!
//! Bit indices are assigned lazily in first-seen order of the canonical form.
//! The registry lives only for the duration of one call.

use crate::algebra::{Maxterm, Minterm};
use crate::error::PredicateError;
use crate::expression::{
    ComparisonExpression, ComparisonOperator, Expression, InExpression, InOperator,
    LogicalOperator,
};
use log::debug;
use std::collections::HashMap;

/// Result of [`transform_to_normal_form`]: the translated maxterm and the
/// ordered atom table (`atoms[i]` is the canonical leaf behind bit `i`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForm {
    pub maxterm: Maxterm,
    pub atoms: Vec<Expression>,
}

/// Map a leaf predicate to its positive-direction atom and the bit value that
/// encodes the original leaf. Returns `None` for non-leaf nodes.
pub(crate) fn canonical_leaf(expr: &Expression) -> Option<(Expression, bool)> {
    match expr {
        Expression::Comparison(cmp) => {
            let (op, bit_value) = match cmp.op {
                ComparisonOperator::Eq | ComparisonOperator::Ge | ComparisonOperator::Gt => {
                    (cmp.op, true)
                }
                ComparisonOperator::Le => (ComparisonOperator::Gt, false),
                ComparisonOperator::Lt => (ComparisonOperator::Ge, false),
                ComparisonOperator::Ne => (ComparisonOperator::Eq, false),
            };
            Some((
                Expression::Comparison(ComparisonExpression {
                    op,
                    path: cmp.path.clone(),
                    value: cmp.value.clone(),
                }),
                bit_value,
            ))
        }
        Expression::In(node) => {
            let (op, bit_value) = match node.op {
                InOperator::In => (InOperator::In, true),
                InOperator::NotIn => (InOperator::In, false),
            };
            Some((
                Expression::In(InExpression {
                    op,
                    path: node.path.clone(),
                    values: node.values.clone(),
                }),
                bit_value,
            ))
        }
        Expression::Logical(_) | Expression::Not(_) => None,
    }
}

#[derive(Default)]
struct AtomRegistry {
    indices: HashMap<Expression, usize>,
    atoms: Vec<Expression>,
}

impl AtomRegistry {
    fn bit_for(&mut self, atom: Expression) -> Result<usize, PredicateError> {
        if let Some(&index) = self.indices.get(&atom) {
            return Ok(index);
        }
        let index = self.atoms.len();
        if index >= Minterm::CAPACITY {
            return Err(PredicateError::AtomCapacityExceeded {
                capacity: Minterm::CAPACITY,
            });
        }
        self.indices.insert(atom.clone(), index);
        self.atoms.push(atom);
        Ok(index)
    }

    fn build(&mut self, expr: &Expression) -> Result<Maxterm, PredicateError> {
        match expr {
            Expression::Logical(node) => match node.op {
                LogicalOperator::And => {
                    let mut children = node.children.iter();
                    let Some(first) = children.next() else {
                        return Ok(Maxterm::new());
                    };
                    let mut result = self.build(first)?;
                    for child in children {
                        result &= &self.build(child)?;
                    }
                    Ok(result)
                }
                LogicalOperator::Or => {
                    let mut result = Maxterm::new();
                    for child in &node.children {
                        result |= self.build(child)?;
                    }
                    Ok(result)
                }
            },
            Expression::Comparison(_) | Expression::In(_) => {
                let (atom, bit_value) =
                    canonical_leaf(expr).expect("comparison and membership nodes are leaves");
                let index = self.bit_for(atom)?;
                Ok(Maxterm::from(Minterm::with_bit(index, bit_value)))
            }
            Expression::Not(_) => Err(PredicateError::UnexpectedNegation(expr.clone())),
        }
    }
}

/// Translate a negation-free predicate into disjunctive normal form over
/// canonical atoms.
///
/// `AND` nodes combine children with the pairwise minterm product (dropping
/// contradictory pairs), `OR` nodes concatenate. An empty logical node yields
/// the empty maxterm. Atoms are interned across the whole call, so the same
/// leaf (or its direction-normalized twin) always maps to the same bit.
///
/// # Errors
///
/// - [`PredicateError::UnexpectedNegation`] if the tree still contains a
///   `Not` node - run
///   [`remove_not_expressions`](crate::expression::remove_not_expressions)
///   first.
/// - [`PredicateError::AtomCapacityExceeded`] if the predicate needs more
///   than [`Minterm::CAPACITY`] distinct atoms. Indices are never truncated.
///
/// # Examples
///
/// ```
/// use predicate_minimizer::{gt, le, or, transform_to_normal_form, Minterm};
///
/// let form = transform_to_normal_form(&or(vec![gt("a", "10"), le("b", "5")])).unwrap();
/// assert_eq!(form.atoms, vec![gt("a", "10"), gt("b", "5")]);
/// assert_eq!(
///     form.maxterm.minterms(),
///     &[
///         Minterm::from_binary("01", "01"),
///         Minterm::from_binary("00", "10"),
///     ]
/// );
/// ```
pub fn transform_to_normal_form(expr: &Expression) -> Result<NormalForm, PredicateError> {
    let mut registry = AtomRegistry::default();
    let maxterm = registry.build(expr)?;
    debug!(
        "normal form: {} atoms, {} minterms",
        registry.atoms.len(),
        maxterm.minterms().len()
    );
    Ok(NormalForm {
        maxterm,
        atoms: registry.atoms,
    })
}
