// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query model for `retrieve_multiple` calls.
//!
//! A [`Query`] names an entity, a column projection, a criteria tree and an
//! ordering. Criteria are nested AND/OR [`Filter`] nodes over leaf
//! [`Condition`]s of the form (attribute, operator, value). Trees are built
//! as plain values; there is no mutable builder shared across call sites.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column projection for a query or a point retrieve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSet {
    /// Project every column the entity has.
    All,
    /// Project only the named columns.
    Columns(Vec<String>),
}

/// Comparison operator of a leaf condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// Attribute equals the value.
    Equal,
    /// Attribute is contained in the value list.
    In,
    /// Attribute is unset.
    Null,
    /// Attribute (text) does not start with the value.
    NotBeginsWith,
}

/// Value side of a leaf condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareValue {
    /// Boolean operand.
    Bool(bool),
    /// Integer operand.
    Int(i32),
    /// Text operand.
    Text(String),
    /// Identifier operand.
    Id(Uuid),
    /// Integer list operand (for [`CompareOp::In`]).
    IntList(Vec<i32>),
    /// Identifier list operand (for [`CompareOp::In`]).
    IdList(Vec<Uuid>),
    /// No operand (for [`CompareOp::Null`]).
    None,
}

/// A leaf condition: (attribute, operator, value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Logical attribute name the condition tests.
    pub attribute: String,
    /// Comparison operator.
    pub op: CompareOp,
    /// Operand; [`CompareValue::None`] for operators that take none.
    pub value: CompareValue,
}

impl Condition {
    /// Attribute equals a value.
    pub fn equal(attribute: impl Into<String>, value: CompareValue) -> Self {
        Condition {
            attribute: attribute.into(),
            op: CompareOp::Equal,
            value,
        }
    }

    /// Attribute is one of a list of values.
    pub fn is_in(attribute: impl Into<String>, value: CompareValue) -> Self {
        Condition {
            attribute: attribute.into(),
            op: CompareOp::In,
            value,
        }
    }

    /// Attribute is unset.
    pub fn null(attribute: impl Into<String>) -> Self {
        Condition {
            attribute: attribute.into(),
            op: CompareOp::Null,
            value: CompareValue::None,
        }
    }

    /// Attribute does not start with a prefix.
    pub fn not_begins_with(attribute: impl Into<String>, prefix: impl Into<String>) -> Self {
        Condition {
            attribute: attribute.into(),
            op: CompareOp::NotBeginsWith,
            value: CompareValue::Text(prefix.into()),
        }
    }
}

/// A node in a criteria tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// A single leaf condition.
    Leaf(Condition),
    /// Every child must match.
    AllOf(Vec<Filter>),
    /// At least one child must match.
    AnyOf(Vec<Filter>),
}

impl Filter {
    /// Wraps a condition as a leaf node.
    pub fn leaf(condition: Condition) -> Self {
        Filter::Leaf(condition)
    }

    /// Conjunction over leaf conditions.
    pub fn all_of(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Filter::AllOf(conditions.into_iter().map(Filter::Leaf).collect())
    }

    /// Disjunction over leaf conditions.
    pub fn any_of(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Filter::AnyOf(conditions.into_iter().map(Filter::Leaf).collect())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// An order-by clause on one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Attribute to sort on.
    pub attribute: String,
    /// Sort direction.
    pub direction: Direction,
}

impl OrderBy {
    /// Ascending order on the given attribute.
    pub fn ascending(attribute: impl Into<String>) -> Self {
        OrderBy {
            attribute: attribute.into(),
            direction: Direction::Ascending,
        }
    }
}

/// A retrieve-multiple request against one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Entity logical name.
    pub entity: String,
    /// Column projection.
    pub columns: ColumnSet,
    /// Criteria tree; records must match it to be returned.
    pub criteria: Filter,
    /// Ordering applied by the service before returning.
    pub orders: Vec<OrderBy>,
}

impl Query {
    /// All-columns query over an entity with the given criteria.
    pub fn new(entity: impl Into<String>, criteria: Filter) -> Self {
        Query {
            entity: entity.into(),
            columns: ColumnSet::All,
            criteria,
            orders: Vec::new(),
        }
    }

    /// Appends an order-by clause.
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.orders.push(order);
        self
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
