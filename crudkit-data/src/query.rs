use crate::sort::{Direction, Sort};
use crate::value::Value;

/// A fluent builder for the statements a repository needs.
///
/// Identifiers are validated and quoted; values are always bound to `?`
/// placeholders.
///
/// # Example
///
/// ```ignore
/// let (sql, params) = QueryBuilder::new("books")
///     .where_eq("isbn", "978-0")
///     .order_by("title", Direction::Asc)
///     .build_select(&["id", "title"])?;
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    conditions: Vec<(String, Value)>,
    order: Vec<(String, Direction)>,
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            conditions: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((column.to_string(), value.into()));
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order.push((column.to_string(), direction));
        self
    }

    pub fn sort(self, sort: &Sort) -> Self {
        self.order_by(&sort.column, sort.direction)
    }

    /// `SELECT <columns> FROM <table> [WHERE ...] [ORDER BY ...]`
    pub fn build_select(&self, columns: &[&str]) -> Result<(String, Vec<Value>), QueryError> {
        let columns = column_list(columns)?;
        let mut sql = format!("SELECT {columns} FROM {}", quote(&self.table, "table")?);
        let mut params = Vec::new();
        self.append_where(&mut sql, &mut params)?;
        self.append_order(&mut sql)?;
        Ok((sql, params))
    }

    /// `SELECT COUNT(*) FROM <table> [WHERE ...]`
    pub fn build_count(&self) -> Result<(String, Vec<Value>), QueryError> {
        let mut sql = format!("SELECT COUNT(*) FROM {}", quote(&self.table, "table")?);
        let mut params = Vec::new();
        self.append_where(&mut sql, &mut params)?;
        Ok((sql, params))
    }

    /// `INSERT INTO <table> (<columns>) VALUES (...)`
    pub fn build_insert(
        &self,
        columns: &[&str],
        values: Vec<Value>,
    ) -> Result<(String, Vec<Value>), QueryError> {
        check_arity(columns, &values)?;
        let placeholders = vec!["?"; values.len()];
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote(&self.table, "table")?,
            column_list(columns)?,
            placeholders.join(", ")
        );
        Ok((sql, values))
    }

    /// `UPDATE <table> SET <column> = ?, ... [WHERE ...]`
    pub fn build_update(
        &self,
        columns: &[&str],
        values: Vec<Value>,
    ) -> Result<(String, Vec<Value>), QueryError> {
        check_arity(columns, &values)?;
        let mut assignments = Vec::with_capacity(columns.len());
        for col in columns {
            assignments.push(format!("{} = ?", quote(col, "column")?));
        }
        let mut sql = format!(
            "UPDATE {} SET {}",
            quote(&self.table, "table")?,
            assignments.join(", ")
        );
        let mut params = values;
        self.append_where(&mut sql, &mut params)?;
        Ok((sql, params))
    }

    /// `DELETE FROM <table> [WHERE ...]`
    pub fn build_delete(&self) -> Result<(String, Vec<Value>), QueryError> {
        let mut sql = format!("DELETE FROM {}", quote(&self.table, "table")?);
        let mut params = Vec::new();
        self.append_where(&mut sql, &mut params)?;
        Ok((sql, params))
    }

    fn append_where(&self, sql: &mut String, params: &mut Vec<Value>) -> Result<(), QueryError> {
        if self.conditions.is_empty() {
            return Ok(());
        }
        let mut clauses = Vec::with_capacity(self.conditions.len());
        for (col, val) in &self.conditions {
            let col = quote(col, "column")?;
            if val.is_null() {
                clauses.push(format!("{col} IS NULL"));
            } else {
                params.push(val.clone());
                clauses.push(format!("{col} = ?"));
            }
        }
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
        Ok(())
    }

    fn append_order(&self, sql: &mut String) -> Result<(), QueryError> {
        if self.order.is_empty() {
            return Ok(());
        }
        let mut clauses = Vec::with_capacity(self.order.len());
        for (col, direction) in &self.order {
            let col = quote(col, "column")?;
            clauses.push(match direction {
                Direction::Asc => format!("{col} ASC"),
                Direction::Desc => format!("{col} DESC"),
            });
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(&clauses.join(", "));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    InvalidIdentifier { kind: &'static str, ident: String },
    ArityMismatch { columns: usize, values: usize },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidIdentifier { kind, ident } => {
                write!(f, "Invalid {kind} identifier: {ident}")
            }
            QueryError::ArityMismatch { columns, values } => {
                write!(f, "{columns} columns but {values} values")
            }
        }
    }
}

impl std::error::Error for QueryError {}

fn check_arity(columns: &[&str], values: &[Value]) -> Result<(), QueryError> {
    if columns.len() != values.len() {
        return Err(QueryError::ArityMismatch {
            columns: columns.len(),
            values: values.len(),
        });
    }
    Ok(())
}

fn column_list(columns: &[&str]) -> Result<String, QueryError> {
    if columns == ["*"] {
        return Ok("*".to_string());
    }
    let quoted = columns
        .iter()
        .map(|c| quote(c, "column"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quoted.join(", "))
}

fn quote(ident: &str, kind: &'static str) -> Result<String, QueryError> {
    if !is_valid_identifier(ident) {
        return Err(QueryError::InvalidIdentifier {
            kind,
            ident: ident.to_string(),
        });
    }
    Ok(format!("\"{ident}\""))
}

fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let (sql, params) = QueryBuilder::new("books").build_select(&["*"]).unwrap();
        assert_eq!(sql, "SELECT * FROM \"books\"");
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_with_where_and_order() {
        let (sql, params) = QueryBuilder::new("books")
            .where_eq("isbn", "978-0")
            .sort(&Sort::desc("price"))
            .build_select(&["id", "title"])
            .unwrap();
        assert_eq!(
            sql,
            "SELECT \"id\", \"title\" FROM \"books\" WHERE \"isbn\" = ? ORDER BY \"price\" DESC"
        );
        assert_eq!(params, vec![Value::Text("978-0".into())]);
    }

    #[test]
    fn test_null_condition_is_not_bound() {
        let (sql, params) = QueryBuilder::new("tasks")
            .where_eq("description", Value::Null)
            .build_count()
            .unwrap();
        assert_eq!(sql, "SELECT COUNT(*) FROM \"tasks\" WHERE \"description\" IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn test_insert() {
        let (sql, params) = QueryBuilder::new("students")
            .build_insert(&["student_name", "usn"], vec!["Ada".into(), "1RV01".into()])
            .unwrap();
        assert_eq!(sql, "INSERT INTO \"students\" (\"student_name\", \"usn\") VALUES (?, ?)");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_update_binds_set_before_where() {
        let (sql, params) = QueryBuilder::new("products")
            .where_eq("id", 3i64)
            .build_update(&["name", "price"], vec!["Mouse".into(), 25.0.into()])
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE \"products\" SET \"name\" = ?, \"price\" = ? WHERE \"id\" = ?"
        );
        assert_eq!(params[2], Value::Integer(3));
    }

    #[test]
    fn test_delete() {
        let (sql, params) = QueryBuilder::new("contacts")
            .where_eq("id", 7i64)
            .build_delete()
            .unwrap();
        assert_eq!(sql, "DELETE FROM \"contacts\" WHERE \"id\" = ?");
        assert_eq!(params, vec![Value::Integer(7)]);
    }

    #[test]
    fn test_invalid_identifier() {
        let err = QueryBuilder::new("users;drop").build_select(&["*"]).unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdentifier { kind: "table", .. }));

        let err = QueryBuilder::new("books")
            .order_by("title DESC; --", Direction::Asc)
            .build_select(&["*"])
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidIdentifier { kind: "column", .. }));
    }

    #[test]
    fn test_arity_mismatch() {
        let err = QueryBuilder::new("books")
            .build_insert(&["title", "author"], vec!["Dune".into()])
            .unwrap_err();
        assert_eq!(err, QueryError::ArityMismatch { columns: 2, values: 1 });
    }
}
