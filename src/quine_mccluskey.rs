//! Quine-McCluskey prime implicant generation
//!
//! Classic tabular method: minterms are bucketed by the popcount of their
//! value bits, adjacent buckets are scanned pairwise, and two entries combine
//! when their masks are identical and their values differ in exactly one bit.
//! The combined entry clears that bit from the mask and unions the covered
//! input indices. Entries consumed by at least one combination still take
//! part in the next round but are excluded from the result; everything that
//! is never combined is prime.
//!
//! Each round builds a fresh bucket table from the previous one - no state is
//! shared across rounds, and the per-round "was combined" bookkeeping lives
//! in a local table next to the buckets.

use crate::algebra::Minterm;
use log::debug;
use std::collections::HashSet;

/// A prime implicant: a combined minterm plus the indices of the input
/// minterms it covers.
///
/// Created by combination and never mutated afterwards. `covered` is sorted
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimeImplicant {
    pub minterm: Minterm,
    pub covered: Vec<u32>,
}

#[derive(Clone)]
struct Entry {
    minterm: Minterm,
    covered: Vec<u32>,
}

/// Buckets indexed by popcount of the value bits; `buckets[k]` holds entries
/// with exactly `k` bits set.
type Buckets = Vec<Vec<Entry>>;

fn insert(buckets: &mut Buckets, entry: Entry) {
    let count = entry.minterm.count_ones() as usize;
    if buckets.len() <= count {
        buckets.resize_with(count + 1, Vec::new);
    }
    buckets[count].push(entry);
}

/// Merge two sorted, deduplicated coverage lists.
fn merge_covered(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    let mut merged = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        match lhs[i].cmp(&rhs[j]) {
            std::cmp::Ordering::Less => {
                merged.push(lhs[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                merged.push(rhs[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                merged.push(lhs[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&lhs[i..]);
    merged.extend_from_slice(&rhs[j..]);
    merged
}

/// One round: combine every one-bit-apart pair from adjacent buckets into the
/// next table, and report which entries were consumed.
fn combine(buckets: &Buckets) -> (Buckets, Vec<Vec<bool>>) {
    let mut next = Buckets::new();
    let mut combined: Vec<Vec<bool>> = buckets
        .iter()
        .map(|bucket| vec![false; bucket.len()])
        .collect();

    for i in 0..buckets.len().saturating_sub(1) {
        for (li, lhs) in buckets[i].iter().enumerate() {
            for (ri, rhs) in buckets[i + 1].iter().enumerate() {
                if lhs.minterm.mask != rhs.minterm.mask {
                    continue;
                }
                let differing = lhs.minterm.bits ^ rhs.minterm.bits;
                if differing.count_ones() == 1 {
                    combined[i][li] = true;
                    combined[i + 1][ri] = true;
                    insert(
                        &mut next,
                        Entry {
                            minterm: Minterm::from_parts(
                                lhs.minterm.bits & rhs.minterm.bits,
                                lhs.minterm.mask & !differing,
                            ),
                            covered: merge_covered(&lhs.covered, &rhs.covered),
                        },
                    );
                }
            }
        }
    }

    (next, combined)
}

/// Generate all prime implicants of the given minterm set.
///
/// Every input minterm index appears in the `covered` set of at least one
/// returned implicant. The result is an unordered set with no ordering
/// guarantee.
///
/// # Examples
///
/// ```
/// use predicate_minimizer::{quine_mccluskey, Minterm, PrimeImplicant};
///
/// // a & b  |  a & !b  ==  a
/// let primes = quine_mccluskey(vec![
///     Minterm::from_binary("11", "11"),
///     Minterm::from_binary("01", "11"),
/// ]);
/// assert_eq!(
///     primes.into_iter().collect::<Vec<_>>(),
///     vec![PrimeImplicant {
///         minterm: Minterm::from_binary("01", "01"),
///         covered: vec![0, 1],
///     }]
/// );
/// ```
pub fn quine_mccluskey(minterms: Vec<Minterm>) -> HashSet<PrimeImplicant> {
    let mut buckets = Buckets::new();
    for (index, minterm) in minterms.into_iter().enumerate() {
        insert(
            &mut buckets,
            Entry {
                minterm,
                covered: vec![index as u32],
            },
        );
    }

    let mut primes = HashSet::new();
    let mut round = 0;
    while !buckets.is_empty() {
        let (next, combined) = combine(&buckets);

        let mut kept = 0;
        for (bucket, bucket_combined) in buckets.into_iter().zip(combined) {
            for (entry, was_combined) in bucket.into_iter().zip(bucket_combined) {
                if !was_combined {
                    kept += 1;
                    primes.insert(PrimeImplicant {
                        minterm: entry.minterm,
                        covered: entry.covered,
                    });
                }
            }
        }

        round += 1;
        debug!("quine-mccluskey round {round}: {kept} prime, next table {} buckets", next.len());
        buckets = next;
    }

    primes
}
