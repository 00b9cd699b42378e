use serde::Deserialize;

use crate::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Ordering applied to a listing: one column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: Direction::Desc,
        }
    }

    /// Parse a `sort` query parameter for entity `T`.
    ///
    /// `title` sorts ascending, `-title` descending. Field names may be given
    /// in camelCase (as they appear in JSON) or snake_case (as stored).
    pub fn parse<T: Entity>(raw: &str) -> Result<Self, SortError> {
        let raw = raw.trim();
        let (field, direction) = match raw.strip_prefix('-') {
            Some(rest) => (rest, Direction::Desc),
            None => (raw.strip_prefix('+').unwrap_or(raw), Direction::Asc),
        };
        if field.is_empty() {
            return Err(SortError::Empty);
        }
        let column = to_snake_case(field);
        if !T::has_column(&column) {
            return Err(SortError::UnknownField(field.to_string()));
        }
        Ok(Self { column, direction })
    }
}

/// Query parameters accepted by listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortParams {
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    Empty,
    UnknownField(String),
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortError::Empty => write!(f, "Sort field must not be empty"),
            SortError::UnknownField(field) => write!(f, "Invalid sort field: {field}"),
        }
    }
}

impl std::error::Error for SortError {}

impl From<SortError> for crudkit_core::HttpError {
    fn from(err: SortError) -> Self {
        crudkit_core::HttpError::BadRequest(err.to_string())
    }
}

/// `publishedDate` -> `published_date`. Already snake_case input is unchanged.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
