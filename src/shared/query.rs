//! Typed filter predicates folded into parameterized SQL.
//!
//! Column names are `&'static str` so only identifiers written in source can
//! reach the SQL text. Filter values always travel as bound parameters.

use duckdb::types::Value;

#[derive(Debug, Clone)]
enum Predicate {
    /// `column = ?`
    Eq { column: &'static str, value: Value },
    /// Case-insensitive substring match, OR-combined across columns
    Contains {
        columns: &'static [&'static str],
        pattern: Value,
    },
}

impl Predicate {
    fn sql(&self) -> String {
        match self {
            Predicate::Eq { column, .. } => format!("{} = ?", column),
            Predicate::Contains { columns, .. } => {
                let terms = columns
                    .iter()
                    .map(|column| format!("{} ILIKE ?", column))
                    .collect::<Vec<_>>();
                format!("({})", terms.join(" OR "))
            }
        }
    }

    fn push_params(&self, params: &mut Vec<Value>) {
        match self {
            Predicate::Eq { value, .. } => params.push(value.clone()),
            Predicate::Contains { columns, pattern } => {
                params.extend(columns.iter().map(|_| pattern.clone()));
            }
        }
    }
}

/// Ordered set of optional predicates, ANDed together
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    predicates: Vec<Predicate>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact match on a text column; skipped when the value is absent or empty.
    pub fn eq(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = non_empty(value) {
            self.predicates.push(Predicate::Eq {
                column,
                value: Value::Text(value.to_string()),
            });
        }
        self
    }

    /// Exact match on an integer column; skipped when the value is absent.
    pub fn eq_int(mut self, column: &'static str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.predicates.push(Predicate::Eq {
                column,
                value: Value::BigInt(value),
            });
        }
        self
    }

    /// `%value%` match against any of `columns`; skipped when the value is absent or empty.
    pub fn contains(mut self, columns: &'static [&'static str], value: Option<&str>) -> Self {
        if let Some(value) = non_empty(value) {
            if !columns.is_empty() {
                self.predicates.push(Predicate::Contains {
                    columns,
                    pattern: Value::Text(format!("%{}%", value)),
                });
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// `WHERE ...` clause, or an empty string when no predicate is present
    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let conditions = self
            .predicates
            .iter()
            .map(Predicate::sql)
            .collect::<Vec<_>>();
        format!("WHERE {}", conditions.join(" AND "))
    }

    /// Bound values in placeholder order
    pub fn params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        for predicate in &self.predicates {
            predicate.push_params(&mut params);
        }
        params
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
