//! End-to-end tests for the minimization pipeline
//!
//! Exercises the public API the way a query planner would: build a filter
//! tree, eliminate negations, normalize, simplify, and select minimal covers.

use predicate_minimizer::{
    and, eq, ge, gt, is_in, le, lt, minimize, ne, not, or, petrick, quine_mccluskey,
    remove_not_expressions, simplify_intervals, transform_to_dnf, transform_to_normal_form,
    Minterm, PredicateError,
};
use pretty_assertions::assert_eq;

fn m(bits: &str, mask: &str) -> Minterm {
    Minterm::from_binary(bits, mask)
}

#[test]
fn test_end_to_end_normal_form() {
    // a > "10" || b <= "5" over the atom table [a > "10", b > "5"]: the
    // second minterm encodes b <= "5" as atom 1 being false.
    let expr = or(vec![gt("a", "10"), le("b", "5")]);
    let form = transform_to_normal_form(&expr).unwrap();
    assert_eq!(form.atoms, vec![gt("a", "10"), gt("b", "5")]);
    assert_eq!(
        form.maxterm.minterms(),
        &[m("01", "01"), m("00", "10")]
    );
}

#[test]
fn test_negated_filter_through_the_whole_pipeline() {
    // !(a <= "1" || b <= "1") && (a < "2" || b < "2")
    let filter = and(vec![
        not(or(vec![le("a", "1"), le("b", "1")])),
        or(vec![lt("a", "2"), lt("b", "2")]),
    ]);

    let rewritten = remove_not_expressions(filter);
    let form = transform_to_normal_form(&rewritten).unwrap();
    assert_eq!(
        form.atoms,
        vec![gt("a", "1"), gt("b", "1"), ge("a", "2"), ge("b", "2")]
    );
    // a > "1" && b > "1" conjoined with each of a < "2", b < "2".
    assert_eq!(
        form.maxterm.minterms(),
        &[m("0011", "0111"), m("0011", "1011")]
    );
}

#[test]
fn test_interval_stage_drops_contradictions() {
    // (a > "10" && a < "05") || b > "11": the first branch is impossible, so
    // only the b branch survives minimization.
    let filter = or(vec![
        and(vec![gt("a", "10"), lt("a", "05")]),
        gt("b", "11"),
    ]);
    let minimized = minimize(filter).unwrap();

    assert_eq!(
        minimized.atoms,
        vec![gt("a", "10"), ge("a", "05"), gt("b", "11")]
    );
    assert_eq!(minimized.minterms, vec![m("100", "100")]);
    assert_eq!(minimized.covers, vec![vec![0]]);
    assert_eq!(minimized.implicants[0].minterm, m("100", "100"));
}

#[test]
fn test_interval_stage_keeps_meaningful_exclusions() {
    // a >= "0" && a <= "9" && a != "5": "5" is inside ["0", "9"], so the
    // exclusion must survive minimization.
    let filter = and(vec![ge("a", "0"), le("a", "9"), ne("a", "5")]);
    let minimized = minimize(filter).unwrap();

    assert_eq!(minimized.atoms, vec![ge("a", "0"), gt("a", "9"), eq("a", "5")]);
    assert_eq!(minimized.minterms, vec![m("001", "111")]);
}

#[test]
fn test_point_interval_with_exclusion_is_unsatisfiable() {
    let filter = and(vec![ge("a", "5"), le("a", "5"), ne("a", "5")]);
    let minimized = minimize(filter).unwrap();
    assert!(minimized.minterms.is_empty());
    assert!(minimized.covers.is_empty());
}

#[test]
fn test_membership_filters_minimize() {
    // c in [...] && (b > "1" || b <= "1") reduces to the membership test.
    let filter = and(vec![
        is_in("c", ["1", "2"]),
        or(vec![gt("b", "1"), le("b", "1")]),
    ]);
    let minimized = minimize(filter).unwrap();

    assert_eq!(minimized.atoms, vec![is_in("c", ["1", "2"]), gt("b", "1")]);
    assert_eq!(minimized.covers.len(), 1);
    assert_eq!(minimized.implicants.len(), 1);
    assert_eq!(minimized.implicants[0].minterm, m("01", "01"));
}

#[test]
fn test_both_dnf_routes_agree_on_clause_count() {
    // (a == "1" || b == "1") && (a == "2" || b == "2") has four DNF clauses
    // on both the tree route and the bitset route.
    let expr = and(vec![
        or(vec![eq("a", "1"), eq("b", "1")]),
        or(vec![eq("a", "2"), eq("b", "2")]),
    ]);

    let form = transform_to_normal_form(&expr).unwrap();
    assert_eq!(form.maxterm.minterms().len(), 4);

    // The tree route enumerates clauses in a different order, so the atom
    // tables may be permutations of each other; the clause count and the atom
    // set must still agree.
    let dnf = transform_to_dnf(&expr).unwrap();
    let tree_form = transform_to_normal_form(&dnf).unwrap();
    assert_eq!(tree_form.maxterm.minterms().len(), 4);
    assert_eq!(form.atoms.len(), tree_form.atoms.len());
    for atom in &form.atoms {
        assert!(tree_form.atoms.contains(atom), "missing atom {atom}");
    }
}

#[test]
fn test_simplify_intervals_is_usable_standalone() {
    let atoms = vec![gt("a", "10"), ge("a", "05"), gt("b", "11")];
    assert_eq!(simplify_intervals(&m("101", "111"), &atoms), None);
    assert_eq!(
        simplify_intervals(&m("100", "100"), &atoms),
        Some(m("100", "100"))
    );
}

#[test]
fn test_quine_mccluskey_and_petrick_are_usable_standalone() {
    let primes = quine_mccluskey(vec![m("11", "11"), m("01", "11"), m("10", "11")]);
    assert_eq!(primes.len(), 2);

    let mut coverage = vec![Vec::new(); 3];
    let mut implicants: Vec<_> = primes.into_iter().collect();
    implicants.sort_by_key(|implicant| implicant.covered.clone());
    for (index, implicant) in implicants.iter().enumerate() {
        for &covered in &implicant.covered {
            coverage[covered as usize].push(index as u32);
        }
    }
    let covers = petrick(&coverage).unwrap();
    // Both primes are essential.
    assert_eq!(covers, vec![vec![0, 1]]);
}

#[test]
fn test_atom_capacity_failure_is_reported() {
    let children: Vec<_> = (0..17).map(|i| eq(format!("f{i}"), "1")).collect();
    assert_eq!(
        minimize(or(children)),
        Err(PredicateError::AtomCapacityExceeded { capacity: 16 })
    );
}

#[test]
fn test_display_forms_are_stable() {
    let filter = not(and(vec![
        eq("a", "1"),
        or(vec![is_in("b", ["x", "y"]), lt("c", "3")]),
    ]));
    assert_eq!(filter.to_string(), filter.to_string());
    assert_eq!(
        remove_not_expressions(filter).to_string(),
        r#"{"$or": [{"a": {"$ne": "1"}}, {"$and": [{"b": {"$nin": ["x", "y"]}}, {"c": {"$gte": "3"}}]}]}"#
    );
}
