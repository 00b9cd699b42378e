//! One entity per exercise, each exposed with `crud_routes`.

pub mod book;
pub mod contact;
pub mod product;
pub mod student;
pub mod task;

pub use book::{Book, BookPatch, NewBook};
pub use contact::{Contact, ContactPatch, NewContact};
pub use product::{NewProduct, Product, ProductPatch};
pub use student::{NewStudent, Student, StudentPatch};
pub use task::{NewTask, Task, TaskPatch, TaskStatus};

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Overwrite `slot` when the patch carries a value.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Trimmed copy, as stored.
pub(crate) fn trimmed(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// `deserialize_with` for optional dates accepted in either form.
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_date(raw.trim()).map(Some).ok_or_else(|| {
        D::Error::custom(format!(
            "invalid date '{raw}', expected YYYY-MM-DD or an RFC 3339 timestamp"
        ))
    })
}

/// `deserialize_with` telling an explicit `null` (`Some(None)`) apart from an
/// absent field (`None`, via `#[serde(default)]`).
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
