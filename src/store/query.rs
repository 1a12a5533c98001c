// ABOUTME: Structured read-query description executed by store backends
// ABOUTME: Collection target plus equality/range filters, ordering hint, and row limit
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 HARDCASE

use serde_json::Value;
use std::cmp::Ordering;

/// Comparison operator applied to an indexed field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Field equals the value
    Eq,
    /// Field is greater than or equal to the value
    Gte,
    /// Field is less than or equal to the value
    Lte,
}

impl FilterOp {
    /// Operator prefix in the REST query syntax (`field=eq.value`)
    #[must_use]
    pub const fn rest_prefix(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gte => "gte",
            Self::Lte => "lte",
        }
    }
}

/// One filter clause of a query
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Top-level field the clause applies to
    pub field: String,
    /// Comparison operator
    pub op: FilterOp,
    /// Value compared against
    pub value: Value,
}

impl Filter {
    /// Evaluate this clause against a row.
    ///
    /// Rows missing the field (or holding null) never match. Range operators
    /// compare numbers numerically and strings lexicographically, which is
    /// exact for RFC 3339 timestamps; mismatched types never match.
    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        let Some(actual) = row.get(&self.field) else {
            return false;
        };
        if actual.is_null() {
            return false;
        }
        match self.op {
            FilterOp::Eq => actual == &self.value,
            FilterOp::Gte => {
                compare_values(actual, &self.value).is_some_and(Ordering::is_ge)
            }
            FilterOp::Lte => {
                compare_values(actual, &self.value).is_some_and(Ordering::is_le)
            }
        }
    }
}

/// Ordering hint for query results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Field to order by
    pub field: String,
    /// Ascending when true
    pub ascending: bool,
}

impl Order {
    /// Compare two rows by the ordered field.
    ///
    /// Incomparable values sort as equal so a stable sort keeps their
    /// original row order.
    #[must_use]
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ordering = match (a.get(&self.field), b.get(&self.field)) {
            (Some(left), Some(right)) => compare_values(left, right).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(left), Value::Number(right)) => {
            left.as_f64().partial_cmp(&right.as_f64())
        }
        (Value::String(left), Value::String(right)) => Some(left.cmp(right)),
        _ => None,
    }
}

/// A structured read query against one store collection.
///
/// Executed verbatim by a backend; never retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Target collection name
    pub collection: String,
    /// Filter clauses, all of which must match
    pub filters: Vec<Filter>,
    /// Optional ordering hint
    pub order: Option<Order>,
    /// Optional row-count limit
    pub limit: Option<u32>,
}

impl QuerySpec {
    /// Start a query against the named collection
    #[must_use]
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Require `field == value`
    #[must_use]
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op: FilterOp::Eq,
            value: value.into(),
        });
        self
    }

    /// Require `field >= value`
    #[must_use]
    pub fn filter_gte(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op: FilterOp::Gte,
            value: value.into(),
        });
        self
    }

    /// Require `field <= value`
    #[must_use]
    pub fn filter_lte(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op: FilterOp::Lte,
            value: value.into(),
        });
        self
    }

    /// Order results ascending by `field`
    #[must_use]
    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.order = Some(Order {
            field: field.into(),
            ascending: true,
        });
        self
    }

    /// Order results descending by `field`
    #[must_use]
    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.order = Some(Order {
            field: field.into(),
            ascending: false,
        });
        self
    }

    /// Cap the number of returned rows
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
