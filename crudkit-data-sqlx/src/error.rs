use crudkit_data::DataError;

/// Extension trait for converting `sqlx::Error` into `DataError`.
///
/// Due to Rust's orphan rules, we can't implement `From<sqlx::Error> for DataError`
/// in this crate. Instead, use `.into_data_error()` or `map_err(SqlxErrorExt::into_data_error)`.
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        match &self {
            sqlx::Error::RowNotFound => DataError::NotFound("Row not found".into()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                match unique_column(db.message()) {
                    Some(column) => DataError::duplicate(column),
                    None => DataError::Conflict(db.message().to_string()),
                }
            }
            _ => DataError::database(self),
        }
    }
}

/// `UNIQUE constraint failed: books.isbn` -> `isbn`.
fn unique_column(message: &str) -> Option<&str> {
    let (_, target) = message.split_once("failed:")?;
    let first = target.split(',').next()?.trim();
    let column = first.rsplit('.').next()?;
    (!column.is_empty()).then_some(column)
}
