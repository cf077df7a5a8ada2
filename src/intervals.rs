//! Ordering-aware per-minterm simplification
//!
//! A minterm is a conjunction of atoms, and several of those atoms may
//! constrain the same field path (`a > "10"`, `a == "11"`, `a < "25"`, ...).
//! [`simplify_intervals`] folds all comparison atoms for a path into one
//! interval, detects contradictions the purely boolean algebra cannot see,
//! and drops literals made redundant by a tighter bound. This is the only
//! component that understands the ordering of values; everything else treats
//! atoms as opaque booleans.

use crate::algebra::Minterm;
use crate::expression::{ComparisonExpression, ComparisonOperator, Expression, Value};
use log::trace;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One side of an interval: the value, its inclusivity, and the bit index of
/// the comparison atom that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Bound {
    value: Value,
    inclusive: bool,
    bit: usize,
}

/// A per-path `[lower, upper]` range; a `None` side is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Interval {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

/// Compare two optional bound values, treating `None` as the infinity of the
/// given sign (`Less` for lower bounds, `Greater` for upper bounds).
fn cmp_values(lhs: Option<&Value>, rhs: Option<&Value>, infinity: Ordering) -> Ordering {
    match (lhs, rhs) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => infinity,
        (Some(_), None) => infinity.reverse(),
        (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
    }
}

impl Interval {
    fn point(value: Value, bit: usize) -> Self {
        let bound = Bound {
            value,
            inclusive: true,
            bit,
        };
        Self {
            lower: Some(bound.clone()),
            upper: Some(bound),
        }
    }

    /// Intersect in place, keeping the tighter bound on each side. Ties are
    /// broken by inclusivity: a non-inclusive bound beats an inclusive one at
    /// the same value. Returns false if the intersection is empty.
    fn intersect_with(&mut self, other: &Interval) -> bool {
        let lower_cmp = cmp_values(
            self.lower.as_ref().map(|b| &b.value),
            other.lower.as_ref().map(|b| &b.value),
            Ordering::Less,
        );
        let lower_inclusive = self.lower.as_ref().is_some_and(|b| b.inclusive);
        if (lower_cmp == Ordering::Equal && lower_inclusive) || lower_cmp == Ordering::Less {
            self.lower = other.lower.clone();
        }

        let upper_cmp = cmp_values(
            self.upper.as_ref().map(|b| &b.value),
            other.upper.as_ref().map(|b| &b.value),
            Ordering::Greater,
        );
        let upper_inclusive = self.upper.as_ref().is_some_and(|b| b.inclusive);
        if (upper_cmp == Ordering::Equal && upper_inclusive) || upper_cmp == Ordering::Greater {
            self.upper = other.upper.clone();
        }

        !self.is_empty()
    }

    fn is_empty(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => {
                lower.value > upper.value
                    || (lower.value == upper.value && (!lower.inclusive || !upper.inclusive))
            }
            _ => false,
        }
    }

    fn is_point(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => {
                lower.value == upper.value && lower.inclusive && upper.inclusive
            }
            _ => false,
        }
    }
}

/// The interval contributed by one canonical comparison atom under the given
/// bit value.
///
/// Only canonical (positive-direction) operators can appear in an atom table;
/// a false bit flips the direction (`GE` false reads as `LT`, `GT` false as
/// `LE`). An `EQ` atom forced false never reaches here - it is deferred as an
/// exclusion point.
///
/// # Panics
///
/// Panics on a non-canonical operator (`LE`/`LT`/`NE`) in the atom table.
fn make_interval(cmp: &ComparisonExpression, bit: usize, bit_value: bool) -> Interval {
    let bound = |inclusive| Bound {
        value: cmp.value.clone(),
        inclusive,
        bit,
    };
    match (cmp.op, bit_value) {
        (ComparisonOperator::Eq, true) => Interval::point(cmp.value.clone(), bit),
        (ComparisonOperator::Ge, true) => Interval {
            lower: Some(bound(true)),
            upper: None,
        },
        (ComparisonOperator::Ge, false) => Interval {
            lower: None,
            upper: Some(bound(false)),
        },
        (ComparisonOperator::Gt, true) => Interval {
            lower: Some(bound(false)),
            upper: None,
        },
        (ComparisonOperator::Gt, false) => Interval {
            lower: None,
            upper: Some(bound(true)),
        },
        (ComparisonOperator::Eq, false) => {
            panic!("excluded EQ atoms are deferred, not turned into intervals")
        }
        (ComparisonOperator::Le, _) | (ComparisonOperator::Lt, _) | (ComparisonOperator::Ne, _) => {
            panic!("non-canonical comparison operator {:?} in atom table", cmp.op)
        }
    }
}

#[derive(Default)]
struct PathConstraints {
    interval: Interval,
    /// Deferred `(value, bit)` exclusion points from `EQ` atoms forced false.
    exclusions: Vec<(Value, usize)>,
}

/// Tighten one minterm using the ordering of comparison values on each path.
///
/// Returns `None` when the minterm is unsatisfiable under ordering semantics
/// (an empty interval, or a point interval equal to an excluded value) - an
/// explicit "no solution", not an error. Otherwise returns the reduced
/// minterm: only the surviving bound atoms stay constrained (lower bound atom
/// true; upper bound atom false when distinct from the lower), exclusion
/// points inside a non-degenerate interval stay excluded, and everything made
/// redundant is dropped to don't-care. Non-comparison atoms pass through
/// untouched.
///
/// `atoms` must be the canonical table produced by
/// [`transform_to_normal_form`](crate::normal_form::transform_to_normal_form)
/// for this minterm; non-canonical comparison operators panic.
///
/// # Examples
///
/// ```
/// use predicate_minimizer::{gt, ge, simplify_intervals, Minterm};
///
/// // a > "10" and a < "05" cannot both hold.
/// let atoms = vec![gt("a", "10"), ge("a", "05")];
/// let minterm = Minterm::from_binary("01", "11");
/// assert_eq!(simplify_intervals(&minterm, &atoms), None);
/// ```
pub fn simplify_intervals(minterm: &Minterm, atoms: &[Expression]) -> Option<Minterm> {
    let mut constraints: HashMap<&str, PathConstraints> = HashMap::new();
    let mut result = Minterm::new();

    for (index, atom) in atoms.iter().enumerate() {
        if !minterm.is_constrained(index) {
            continue;
        }
        let bit_value = minterm.bit(index);
        match atom {
            Expression::Comparison(cmp) => {
                let data = constraints.entry(cmp.path.as_str()).or_default();
                if cmp.op == ComparisonOperator::Eq && !bit_value {
                    data.exclusions.push((cmp.value.clone(), index));
                } else {
                    let interval = make_interval(cmp, index, bit_value);
                    if !data.interval.intersect_with(&interval) {
                        trace!("minterm {minterm} unsatisfiable on path {:?}", cmp.path);
                        return None;
                    }
                }
            }
            _ => result.set(index, bit_value),
        }
    }

    for data in constraints.values() {
        if let Some(lower) = &data.interval.lower {
            result.set(lower.bit, true);
        }
        if let Some(upper) = &data.interval.upper {
            let lower_value = data.interval.lower.as_ref().map(|bound| &bound.value);
            if lower_value != Some(&upper.value) {
                result.set(upper.bit, false);
            }
        }

        for (value, bit) in &data.exclusions {
            let mut point = Interval::point(value.clone(), *bit);
            if point.intersect_with(&data.interval) {
                if data.interval.is_point() {
                    // The whole interval is exactly the excluded value.
                    return None;
                }
                result.set(*bit, false);
            }
            // An exclusion outside the interval is redundant and dropped.
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{eq, ge, gt, is_in};
    use pretty_assertions::assert_eq;

    fn m(bits: &str, mask: &str) -> Minterm {
        Minterm::from_binary(bits, mask)
    }

    #[test]
    fn test_contradicting_bounds_on_one_path() {
        // a > "10" && a < "05" && b > "11"
        let atoms = vec![gt("a", "10"), ge("a", "05"), gt("b", "11")];
        assert_eq!(simplify_intervals(&m("101", "111"), &atoms), None);
    }

    #[test]
    fn test_bounds_tighten_across_paths_and_membership_passes_through() {
        // a > "10" && b < "05" && b >= "-11" && c in ["1","2"] && a == "11"
        //   && a < "25" && b >= "0"
        let atoms = vec![
            gt("a", "10"),
            ge("b", "05"),
            ge("b", "-11"),
            is_in("c", ["1", "2"]),
            eq("a", "11"),
            ge("a", "25"),
            ge("b", "0"),
        ];
        let simplified = simplify_intervals(&m("1011101", "1111111"), &atoms);
        assert_eq!(simplified, Some(m("1011000", "1011010")));
    }

    #[test]
    fn test_point_interval_equal_to_exclusion_is_unsatisfiable() {
        // a >= "5" && a <= "5" && a != "5"
        let atoms = vec![ge("a", "5"), gt("a", "5"), eq("a", "5")];
        assert_eq!(simplify_intervals(&m("001", "111"), &atoms), None);
    }

    #[test]
    fn test_exclusion_inside_interval_is_retained() {
        // a >= "0" && a <= "9" && a != "5": "5" lies in ["0", "9"], keep it.
        let atoms = vec![ge("a", "0"), gt("a", "9"), eq("a", "5")];
        assert_eq!(
            simplify_intervals(&m("001", "111"), &atoms),
            Some(m("001", "111"))
        );
    }

    #[test]
    fn test_exclusion_outside_interval_is_dropped() {
        // a >= "0" && a > "5" && a <= "9" && a != "5": the lower bound
        // tightens to ("5", "9"], which also makes both a >= "0" and the
        // exclusion redundant.
        let atoms = vec![ge("a", "0"), gt("a", "5"), gt("a", "9"), eq("a", "5")];
        assert_eq!(
            simplify_intervals(&m("0011", "1111"), &atoms),
            Some(m("0010", "0110"))
        );
    }

    #[test]
    fn test_unconstrained_bits_stay_unconstrained() {
        let atoms = vec![gt("a", "10"), gt("b", "5")];
        let simplified = simplify_intervals(&m("01", "01"), &atoms);
        assert_eq!(simplified, Some(m("01", "01")));
    }
}
