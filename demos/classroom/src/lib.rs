//! Classroom REST APIs: tasks, books, contacts and students stored in
//! SQLite, products kept in memory.

pub mod app;
pub mod commands;
pub mod models;
pub mod schema;

pub use app::{build_app, connect_store};

/// The collections served under `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Collection {
    Tasks,
    Books,
    Contacts,
    Products,
    Students,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Tasks => "/api/tasks",
            Collection::Books => "/api/books",
            Collection::Contacts => "/api/contacts",
            Collection::Products => "/api/products",
            Collection::Students => "/api/students",
        }
    }
}
