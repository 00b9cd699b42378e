#![allow(dead_code)]

use chrono::{DateTime, Utc};
use crudkit_data::{DeleteReply, Entity, Resource, Sort, Value};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[garde(skip)]
    pub id: i64,
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub isbn: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
    #[garde(skip)]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(title: &str, isbn: &str, price: f64) -> Self {
        Self {
            id: 0,
            title: title.into(),
            isbn: isbn.into(),
            price,
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewBook {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub isbn: String,
    #[garde(range(min = 0.0))]
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub price: Option<f64>,
}

impl Entity for Book {
    fn table_name() -> &'static str {
        "books"
    }

    fn columns() -> &'static [&'static str] {
        &["title", "isbn", "price", "updated_at"]
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
            self.title.clone().into(),
            self.isbn.clone().into(),
            self.price.into(),
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
            title: input.title,
            isbn: input.isbn,
            price: input.price,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: BookPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(isbn) = patch.isbn {
            self.isbn = isbn;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        self.updated_at = now;
    }

    fn default_sort() -> Sort {
        Sort::asc("title")
    }
}

/// Same shape as `Book` but answering deletes with `204`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Note(#[garde(dive)] pub Book);

impl Entity for Note {
    fn table_name() -> &'static str {
        "notes"
    }

    fn columns() -> &'static [&'static str] {
        Book::columns()
    }

    fn id(&self) -> i64 {
        self.0.id
    }

    fn set_id(&mut self, id: i64) {
        self.0.id = id;
    }

    fn values(&self) -> Vec<Value> {
        self.0.values()
    }
}

impl Resource for Note {
    const NAME: &'static str = "Note";
    type Create = NewBook;
    type Patch = BookPatch;

    fn from_create(input: NewBook, now: DateTime<Utc>) -> Self {
        Note(Book::from_create(input, now))
    }

    fn apply(&mut self, patch: BookPatch, now: DateTime<Utc>) {
        self.0.apply(patch, now);
    }

    fn delete_reply() -> DeleteReply {
        DeleteReply::NoContent
    }
}
