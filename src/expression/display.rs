//! Display formatting for predicate expressions
//!
//! One canonical textual form: the structured, fully quoted rendering
//! (`{"$and": [...]}` and friends). Every node kind prints unambiguously,
//! including degenerate logical nodes with zero or one child, so two
//! expressions that print identically always compare equal. The output is
//! stable: formatting the same expression twice yields the same string.

use super::{
    ComparisonExpression, Expression, InExpression, LogicalExpression, NotExpression,
};
use std::fmt;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Logical(expr) => fmt::Display::fmt(expr, f),
            Expression::Comparison(expr) => fmt::Display::fmt(expr, f),
            Expression::In(expr) => fmt::Display::fmt(expr, f),
            Expression::Not(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

impl fmt::Display for LogicalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: [", self.op)?;
        for (i, child) in self.children.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, "]}}")
    }
}

impl fmt::Display for ComparisonExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}: {{{}: {:?}}}}}", self.path, self.op, self.value)
    }
}

impl fmt::Display for InExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}: {{{}: [", self.path, self.op)?;
        for (i, value) in self.values.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, "]}}}}")
    }
}

impl fmt::Display for NotExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"$not\": {}}}", self.child)
    }
}

#[cfg(test)]
mod tests {
    use crate::expression::{and, eq, ge, is_in, not, not_in, or};

    #[test]
    fn test_comparison_display() {
        assert_eq!(eq("a", "1").to_string(), r#"{"a": {"$eq": "1"}}"#);
        assert_eq!(ge("r.t", "abc").to_string(), r#"{"r.t": {"$gte": "abc"}}"#);
    }

    #[test]
    fn test_in_display() {
        assert_eq!(
            is_in("b", ["p1", "p2"]).to_string(),
            r#"{"b": {"$in": ["p1", "p2"]}}"#
        );
        assert_eq!(not_in("b", ["p1"]).to_string(), r#"{"b": {"$nin": ["p1"]}}"#);
    }

    #[test]
    fn test_logical_and_not_display() {
        let expr = not(or(vec![eq("a", "1"), eq("b", "2")]));
        assert_eq!(
            expr.to_string(),
            r#"{"$not": {"$or": [{"a": {"$eq": "1"}}, {"b": {"$eq": "2"}}]}}"#
        );
    }

    #[test]
    fn test_degenerate_logical_nodes_print_distinctly() {
        // Empty and singleton AND/OR must not collapse to the same text as
        // each other or as their child.
        assert_eq!(and(vec![]).to_string(), r#"{"$and": []}"#);
        assert_eq!(or(vec![]).to_string(), r#"{"$or": []}"#);
        assert_ne!(
            and(vec![eq("a", "1")]).to_string(),
            or(vec![eq("a", "1")]).to_string()
        );
        assert_ne!(and(vec![eq("a", "1")]).to_string(), eq("a", "1").to_string());
    }

    #[test]
    fn test_display_is_stable() {
        let expr = and(vec![eq("a", "1"), is_in("b", ["x", "y"])]);
        assert_eq!(expr.to_string(), expr.to_string());
    }
}
