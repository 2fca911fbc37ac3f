// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;

use serde_json::Value;

use super::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// The array in `field` contains `value`.
    ArrayContains { field: String, value: Value },
}

/// A filtered, ordered query over a single collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub order_by: Option<(String, Direction)>,
}

impl Query {
    pub fn collection(path: impl Into<String>) -> Self {
        Self {
            collection: path.into(),
            filters: vec![],
            order_by: None,
        }
    }

    pub fn where_array_contains(
        mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.filters.push(Filter::ArrayContains {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.filters.iter().all(|filter| match filter {
            Filter::ArrayContains { field, value } => document
                .get(field)
                .and_then(Value::as_array)
                .map(|values| values.contains(value))
                .unwrap_or(false),
        })
    }

    /// Filters and sorts `documents`. Documents missing the ordering field come last,
    /// ties are broken by document id.
    pub fn apply(&self, documents: impl IntoIterator<Item = Document>) -> Vec<Document> {
        let mut results = documents
            .into_iter()
            .filter(|document| self.matches(document))
            .collect::<Vec<_>>();

        let Some((field, direction)) = &self.order_by else {
            return results;
        };

        results.sort_by(|lhs, rhs| {
            let ordering = match (lhs.get(field), rhs.get(field)) {
                (Some(lhs), Some(rhs)) => {
                    let ordering = compare_values(lhs, rhs);
                    match direction {
                        Direction::Ascending => ordering,
                        Direction::Descending => ordering.reverse(),
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            ordering.then_with(|| lhs.id.cmp(&rhs.id))
        });

        results
    }
}

fn compare_values(lhs: &Value, rhs: &Value) -> Ordering {
    match (lhs, rhs) {
        (Value::Number(lhs), Value::Number(rhs)) => match (lhs.as_i64(), rhs.as_i64()) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            _ => lhs
                .as_f64()
                .partial_cmp(&rhs.as_f64())
                .unwrap_or(Ordering::Equal),
        },
        (Value::String(lhs), Value::String(rhs)) => lhs.cmp(rhs),
        (Value::Bool(lhs), Value::Bool(rhs)) => lhs.cmp(rhs),
        _ => Ordering::Equal,
    }
}
