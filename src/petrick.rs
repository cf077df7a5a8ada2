//! Petrick's method: minimal cover selection over prime implicants
//!
//! Input is the coverage table from the Quine-McCluskey stage: for every
//! minterm, the set of prime implicant indices that cover it. Selecting a
//! cover means picking at least one implicant from every row; Petrick's
//! method turns that product-of-sums into a sum-of-products by repeated
//! distribution, with absorption applied on the fly so only the
//! subsumption-minimal frontier of candidate selections is ever kept. The
//! surviving selections are exactly the minimal (non-dominated) covers.

use crate::error::PredicateError;
use log::debug;

/// Maximum number of prime implicants cover selection can choose from.
pub const IMPLICANT_CAPACITY: usize = 64;

/// A candidate selection of implicants, one bit per implicant index.
type Selection = u64;

/// Return true if `lhs` selects a (non-strict) subset of `rhs`.
fn is_subset(lhs: Selection, rhs: Selection) -> bool {
    lhs & rhs == lhs
}

/// Insert a candidate into the subsumption-minimal frontier.
///
/// A candidate dominated by an existing entry (some entry is a subset of it)
/// is discarded; inserting a strict subset of existing entries removes the
/// dominated entries. This on-the-fly absorption is what keeps the
/// distribution from blowing up.
fn insert_selection(frontier: &mut Vec<Selection>, candidate: Selection) {
    let mut i = 0;
    while i < frontier.len() {
        let current = frontier[i];
        if is_subset(current, candidate) {
            // Covers everything the candidate covers with no more implicants
            // (or is the candidate itself); nothing to add.
            return;
        }
        if is_subset(candidate, current) {
            frontier.swap_remove(i);
            continue;
        }
        i += 1;
    }
    frontier.push(candidate);
}

/// Distribute one sum over another, absorbing as products are formed.
fn product(lhs: &[Selection], rhs: &[Selection]) -> Vec<Selection> {
    let mut result = Vec::new();
    for &left in lhs {
        for &right in rhs {
            insert_selection(&mut result, left | right);
        }
    }
    result
}

fn selection_indices(selection: Selection) -> Vec<u32> {
    (0..IMPLICANT_CAPACITY as u32)
        .filter(|&index| selection >> index & 1 == 1)
        .collect()
}

/// Compute all minimal covering sets of implicant indices.
///
/// `coverage[i]` lists the implicant indices covering minterm `i`. Every
/// returned cover hits all rows, and no returned cover is a superset of
/// another. Covers are returned smallest first (ties ordered by their index
/// lists).
///
/// A row with no covering implicant makes the minterm uncoverable, so the
/// result is empty. With zero rows there is nothing to cover and the single
/// empty cover is returned.
///
/// # Errors
///
/// [`PredicateError::ImplicantCapacityExceeded`] if an implicant index is not
/// below [`IMPLICANT_CAPACITY`]; indices are never truncated.
///
/// # Examples
///
/// ```
/// use predicate_minimizer::petrick;
///
/// // Two minterms, each covered only by its own implicant: one minimal
/// // cover containing both.
/// let covers = petrick(&[vec![0], vec![1]]).unwrap();
/// assert_eq!(covers, vec![vec![0, 1]]);
/// ```
pub fn petrick(coverage: &[Vec<u32>]) -> Result<Vec<Vec<u32>>, PredicateError> {
    for row in coverage {
        for &index in row {
            if index as usize >= IMPLICANT_CAPACITY {
                return Err(PredicateError::ImplicantCapacityExceeded {
                    capacity: IMPLICANT_CAPACITY,
                    index,
                });
            }
        }
    }

    // POS-to-SOP conversion: fold every row's sum of singleton selections
    // into the running frontier. The fold starts from the empty selection,
    // the identity of the product.
    let mut frontier: Vec<Selection> = vec![0];
    for row in coverage {
        let sum: Vec<Selection> = row.iter().map(|&index| 1u64 << index).collect();
        frontier = product(&frontier, &sum);
        if frontier.is_empty() {
            debug!("petrick: uncoverable row, no covers exist");
            return Ok(Vec::new());
        }
    }

    let mut covers: Vec<Vec<u32>> = frontier.into_iter().map(selection_indices).collect();
    covers.sort_by(|lhs, rhs| lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs)));
    Ok(covers)
}
