use crate::value::Value;

/// Trait representing a stored record with a table name, an integer id and a
/// list of persisted columns.
///
/// `columns()` excludes the id column; `values()` returns one value per
/// column, in the same order. Ids are assigned by the store and are `0` until
/// the entity has been persisted.
///
/// # Example
///
/// ```ignore
/// impl Entity for Student {
///     fn table_name() -> &'static str { "students" }
///     fn columns() -> &'static [&'static str] { &["student_name", "usn"] }
///     fn unique_columns() -> &'static [&'static str] { &["usn"] }
///     fn id(&self) -> i64 { self.id }
///     fn set_id(&mut self, id: i64) { self.id = id }
///     fn values(&self) -> Vec<Value> {
///         vec![self.student_name.clone().into(), self.usn.clone().into()]
///     }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    fn table_name() -> &'static str;

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str];

    /// Columns whose values must not repeat across records.
    fn unique_columns() -> &'static [&'static str] {
        &[]
    }

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    fn values(&self) -> Vec<Value>;

    /// The value stored under `column`, including the id column.
    fn value_of(&self, column: &str) -> Option<Value> {
        if column == Self::id_column() {
            return Some(Value::Integer(self.id()));
        }
        let idx = Self::columns().iter().position(|c| *c == column)?;
        self.values().into_iter().nth(idx)
    }

    /// Whether `column` is the id column or one of `columns()`.
    fn has_column(column: &str) -> bool {
        column == Self::id_column() || Self::columns().contains(&column)
    }
}
