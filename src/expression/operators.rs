//! Operator enums for predicate nodes
//!
//! Each operator family is a small closed set with a `negated` involution used
//! by the negation eliminator: applying `negated` twice always returns the
//! original operator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connective of a [`LogicalExpression`](super::LogicalExpression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    /// The De Morgan dual: `AND` ↔ `OR`.
    pub fn negated(self) -> Self {
        match self {
            LogicalOperator::And => LogicalOperator::Or,
            LogicalOperator::Or => LogicalOperator::And,
        }
    }
}

/// Operator of a [`ComparisonExpression`](super::ComparisonExpression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl ComparisonOperator {
    /// The logically opposite comparison: `EQ` ↔ `NE`, `GE` ↔ `LT`, `GT` ↔ `LE`.
    pub fn negated(self) -> Self {
        match self {
            ComparisonOperator::Eq => ComparisonOperator::Ne,
            ComparisonOperator::Ne => ComparisonOperator::Eq,
            ComparisonOperator::Gt => ComparisonOperator::Le,
            ComparisonOperator::Ge => ComparisonOperator::Lt,
            ComparisonOperator::Lt => ComparisonOperator::Ge,
            ComparisonOperator::Le => ComparisonOperator::Gt,
        }
    }
}

/// Operator of an [`InExpression`](super::InExpression).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InOperator {
    In,
    NotIn,
}

impl InOperator {
    /// The logically opposite membership test: `IN` ↔ `NOT_IN`.
    pub fn negated(self) -> Self {
        match self {
            InOperator::In => InOperator::NotIn,
            InOperator::NotIn => InOperator::In,
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "\"$and\""),
            LogicalOperator::Or => write!(f, "\"$or\""),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOperator::Eq => write!(f, "\"$eq\""),
            ComparisonOperator::Ne => write!(f, "\"$ne\""),
            ComparisonOperator::Gt => write!(f, "\"$gt\""),
            ComparisonOperator::Ge => write!(f, "\"$gte\""),
            ComparisonOperator::Lt => write!(f, "\"$lt\""),
            ComparisonOperator::Le => write!(f, "\"$lte\""),
        }
    }
}

impl fmt::Display for InOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InOperator::In => write!(f, "\"$in\""),
            InOperator::NotIn => write!(f, "\"$nin\""),
        }
    }
}
