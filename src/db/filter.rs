//! Composable WHERE-clause builder on top of `sqlx::QueryBuilder`.
//!
//! User input only ever reaches SQL as a bound parameter. LIKE wildcards in
//! the input (`%`, `_`) are passed through, so searches stay loose.

use sqlx::{QueryBuilder, Sqlite};

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match against any of the columns.
    Contains {
        columns: &'static [&'static str],
        needle: String,
    },
    /// Case-insensitive equality.
    Equals { column: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a substring predicate. Blank input adds nothing.
    pub fn contains(mut self, columns: &'static [&'static str], needle: Option<&str>) -> Self {
        if let Some(needle) = non_blank(needle) {
            if !columns.is_empty() {
                self.predicates.push(Predicate::Contains {
                    columns,
                    needle: needle.to_string(),
                });
            }
        }
        self
    }

    /// Adds an equality predicate. Blank input adds nothing.
    pub fn equals(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = non_blank(value) {
            self.predicates.push(Predicate::Equals {
                column,
                value: value.to_string(),
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[cfg(test)]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Appends ` WHERE p1 AND p2 ...` to the builder, or nothing when empty.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        if self.is_empty() {
            return;
        }
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                Predicate::Contains { columns, needle } => {
                    qb.push("(");
                    for (j, column) in columns.iter().enumerate() {
                        if j > 0 {
                            qb.push(" OR ");
                        }
                        qb.push(*column)
                            .push(" LIKE '%' || ")
                            .push_bind(needle.clone())
                            .push(" || '%'");
                    }
                    qb.push(")");
                }
                Predicate::Equals { column, value } => {
                    qb.push(*column)
                        .push(" = ")
                        .push_bind(value.clone())
                        .push(" COLLATE NOCASE");
                }
            }
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
