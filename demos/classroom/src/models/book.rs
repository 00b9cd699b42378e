use chrono::{DateTime, Utc};
use crudkit::crudkit_data::{Entity, Resource, Sort, Value};
use garde::Validate;
use serde::{Deserialize, Serialize};

use super::{merge, optional_date, trimmed};

pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[garde(skip)]
    pub id: i64,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(length(min = 1))]
    pub isbn: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub published_date: DateTime<Utc>,
    #[garde(range(min = 0))]
    pub stock: i64,
    #[garde(skip)]
    pub created_at: DateTime<Utc>,
    #[garde(skip)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(length(min = 1))]
    pub isbn: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    #[garde(skip)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    #[garde(skip)]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[garde(range(min = 0))]
    pub stock: Option<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub published_date: Option<DateTime<Utc>>,
    pub stock: Option<i64>,
}

impl Entity for Book {
    fn table_name() -> &'static str {
        "books"
    }

    fn columns() -> &'static [&'static str] {
        &[
            "title",
            "author",
            "isbn",
            "price",
            "description",
            "published_date",
            "stock",
            "created_at",
            "updated_at",
        ]
    }

    fn unique_columns() -> &'static [&'static str] {
        &["isbn"]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            (&self.title).into(),
            (&self.author).into(),
            (&self.isbn).into(),
            self.price.into(),
            (&self.description).into(),
            self.published_date.into(),
            self.stock.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

impl Resource for Book {
    const NAME: &'static str = "Book";
    type Create = NewBook;
    type Patch = BookPatch;

    fn from_create(input: NewBook, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            title: trimmed(input.title),
            author: trimmed(input.author),
            isbn: trimmed(input.isbn),
            price: input.price,
            description: input
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            published_date: input.published_date.unwrap_or(now),
            stock: input.stock.unwrap_or(1),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: BookPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title.map(trimmed));
        merge(&mut self.author, patch.author.map(trimmed));
        merge(&mut self.isbn, patch.isbn.map(trimmed));
        merge(&mut self.price, patch.price);
        merge(&mut self.description, patch.description);
        merge(&mut self.published_date, patch.published_date);
        merge(&mut self.stock, patch.stock);
        self.updated_at = now;
    }

    fn default_sort() -> Sort {
        Sort::asc("title")
    }
}
