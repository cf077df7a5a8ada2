//! End-to-end minimization pipeline
//!
//! [`minimize`] chains the individual stages: negation elimination, bitset
//! normal form, per-minterm interval simplification, Quine-McCluskey prime
//! implicant generation, and Petrick cover selection. Each stage's output is
//! fully materialized before the next begins; everything runs synchronously
//! on owned values.

use crate::algebra::Minterm;
use crate::error::PredicateError;
use crate::expression::{remove_not_expressions, Expression};
use crate::intervals::simplify_intervals;
use crate::normal_form::{transform_to_normal_form, NormalForm};
use crate::petrick::petrick;
use crate::quine_mccluskey::{quine_mccluskey, PrimeImplicant};
use log::{debug, trace};

/// The fully minimized form of a predicate.
///
/// `atoms[i]` is the canonical leaf predicate behind bit `i` of every
/// minterm. `minterms` are the satisfiable, interval-simplified,
/// de-duplicated conjunctions of the input's DNF; the `covered` indices of
/// each implicant refer into this list. `covers` lists the minimal covering
/// sets as indices into `implicants`; any single cover is a smallest
/// equivalent sum-of-products for the input.
///
/// A predicate that can never be satisfied has empty `minterms`,
/// `implicants` and `covers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizedPredicate {
    pub atoms: Vec<Expression>,
    pub minterms: Vec<Minterm>,
    pub implicants: Vec<PrimeImplicant>,
    pub covers: Vec<Vec<u32>>,
}

/// Run the whole minimization pipeline on a predicate.
///
/// Accepts any expression, including negations. The result's implicants are
/// sorted deterministically (by minterm bits, then mask, then coverage).
///
/// # Errors
///
/// - [`PredicateError::AtomCapacityExceeded`] if the predicate needs more
///   than [`Minterm::CAPACITY`] distinct atoms.
/// - [`PredicateError::ImplicantCapacityExceeded`] if more than the
///   supported number of prime implicants survive.
///
/// # Examples
///
/// ```
/// use predicate_minimizer::{and, gt, le, minimize, or};
///
/// // (a > "10" && b <= "5") || (a > "10" && b > "5")  ==  a > "10"
/// let filter = or(vec![
///     and(vec![gt("a", "10"), le("b", "5")]),
///     and(vec![gt("a", "10"), gt("b", "5")]),
/// ]);
///
/// let minimized = minimize(filter).unwrap();
/// assert_eq!(minimized.atoms[0], gt("a", "10"));
/// assert_eq!(minimized.covers, vec![vec![0]]);
/// assert_eq!(minimized.implicants[0].covered, vec![0, 1]);
/// ```
pub fn minimize(expr: Expression) -> Result<MinimizedPredicate, PredicateError> {
    let expr = remove_not_expressions(expr);
    let NormalForm { maxterm, atoms } = transform_to_normal_form(&expr)?;

    // Interval-simplify each conjunction, dropping the unsatisfiable ones and
    // collapsing duplicates in first-seen order.
    let mut minterms: Vec<Minterm> = Vec::new();
    for &minterm in maxterm.minterms() {
        match simplify_intervals(&minterm, &atoms) {
            Some(simplified) => {
                if !minterms.contains(&simplified) {
                    minterms.push(simplified);
                }
            }
            None => trace!("dropping unsatisfiable minterm {minterm}"),
        }
    }
    debug!(
        "minimize: {} of {} minterms satisfiable",
        minterms.len(),
        maxterm.minterms().len()
    );

    if minterms.is_empty() {
        return Ok(MinimizedPredicate {
            atoms,
            minterms,
            implicants: Vec::new(),
            covers: Vec::new(),
        });
    }

    let mut implicants: Vec<PrimeImplicant> =
        quine_mccluskey(minterms.clone()).into_iter().collect();
    implicants.sort_by(|lhs, rhs| {
        (lhs.minterm.bits(), lhs.minterm.mask(), &lhs.covered)
            .cmp(&(rhs.minterm.bits(), rhs.minterm.mask(), &rhs.covered))
    });

    let mut coverage: Vec<Vec<u32>> = vec![Vec::new(); minterms.len()];
    for (implicant_index, implicant) in implicants.iter().enumerate() {
        for &minterm_index in &implicant.covered {
            coverage[minterm_index as usize].push(implicant_index as u32);
        }
    }

    let covers = petrick(&coverage)?;
    debug!(
        "minimize: {} prime implicants, {} minimal covers",
        implicants.len(),
        covers.len()
    );

    Ok(MinimizedPredicate {
        atoms,
        minterms,
        implicants,
        covers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{and, eq, ge, gt, le, lt, ne, not, or};
    use pretty_assertions::assert_eq;

    fn m(bits: &str, mask: &str) -> Minterm {
        Minterm::from_binary(bits, mask)
    }

    #[test]
    fn test_redundant_branch_collapses_to_one_implicant() {
        let filter = or(vec![
            and(vec![gt("a", "10"), le("b", "5")]),
            and(vec![gt("a", "10"), gt("b", "5")]),
        ]);
        let minimized = minimize(filter).unwrap();

        assert_eq!(minimized.atoms, vec![gt("a", "10"), gt("b", "5")]);
        assert_eq!(minimized.minterms, vec![m("01", "11"), m("11", "11")]);
        assert_eq!(
            minimized.implicants,
            vec![PrimeImplicant {
                minterm: m("01", "01"),
                covered: vec![0, 1],
            }]
        );
        assert_eq!(minimized.covers, vec![vec![0]]);
    }

    #[test]
    fn test_independent_branches_both_stay() {
        let filter = or(vec![gt("a", "10"), le("b", "5")]);
        let minimized = minimize(filter).unwrap();

        assert_eq!(minimized.minterms, vec![m("01", "01"), m("00", "10")]);
        assert_eq!(minimized.implicants.len(), 2);
        // Both implicants are essential: a single cover holding both.
        assert_eq!(minimized.covers, vec![vec![0, 1]]);
    }

    #[test]
    fn test_unsatisfiable_predicate_minimizes_to_false() {
        let filter = and(vec![gt("a", "10"), lt("a", "05")]);
        let minimized = minimize(filter).unwrap();

        assert_eq!(minimized.atoms, vec![gt("a", "10"), ge("a", "05")]);
        assert!(minimized.minterms.is_empty());
        assert!(minimized.implicants.is_empty());
        assert!(minimized.covers.is_empty());
    }

    #[test]
    fn test_negations_are_eliminated_before_normalization() {
        // !(a <= "10" || a == "7") == a > "10" && a != "7". Lexicographically
        // "7" > "10", so the excluded point lies inside ("10", +inf) and the
        // exclusion bit survives.
        let filter = not(or(vec![le("a", "10"), eq("a", "7")]));
        let minimized = minimize(filter).unwrap();
        assert_eq!(minimized.atoms, vec![gt("a", "10"), eq("a", "7")]);
        assert_eq!(minimized.minterms, vec![m("01", "11")]);
    }

    #[test]
    fn test_duplicate_minterms_collapse() {
        let filter = or(vec![eq("a", "1"), eq("a", "1"), ne("a", "1")]);
        let minimized = minimize(filter).unwrap();

        assert_eq!(minimized.minterms, vec![m("1", "1"), m("0", "1")]);
        // a == "1" || a != "1" combines into the unconstrained implicant.
        assert_eq!(
            minimized.implicants,
            vec![PrimeImplicant {
                minterm: Minterm::new(),
                covered: vec![0, 1],
            }]
        );
        assert_eq!(minimized.covers, vec![vec![0]]);
    }
}
