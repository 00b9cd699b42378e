mod common;

use common::Book;
use crudkit_data::{DataError, MemoryRepository, Repository, Sort};

fn library() -> MemoryRepository<Book> {
    MemoryRepository::seeded(vec![
        Book::new("Dune", "978-1", 12.5),
        Book::new("Anathem", "978-2", 20.0),
        Book::new("Hyperion", "978-3", 8.0),
    ])
}

#[tokio::test]
async fn seeded_records_are_numbered_from_one() {
    let repo = library();
    let all = repo.find_all(&Sort::asc("id")).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn insert_assigns_last_id_plus_one() {
    let repo = library();
    repo.delete(2).await.unwrap();
    let created = repo.insert(Book::new("Foundation", "978-4", 9.0)).await.unwrap();
    assert_eq!(created.id, 4);

    let empty = MemoryRepository::<Book>::new();
    let first = empty.insert(Book::new("Dune", "978-1", 1.0)).await.unwrap();
    assert_eq!(first.id, 1);
}

#[tokio::test]
async fn sort_by_column_both_directions() {
    let repo = library();
    let by_title = repo.find_all(&Sort::asc("title")).await.unwrap();
    let titles: Vec<&str> = by_title.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Anathem", "Dune", "Hyperion"]);

    let by_price = repo.find_all(&Sort::desc("price")).await.unwrap();
    let prices: Vec<f64> = by_price.iter().map(|b| b.price).collect();
    assert_eq!(prices, vec![20.0, 12.5, 8.0]);
}

#[tokio::test]
async fn duplicate_unique_column_is_a_conflict() {
    let repo = library();
    let err = repo.insert(Book::new("Dune Messiah", "978-1", 3.0)).await.unwrap_err();
    assert!(matches!(err, DataError::Conflict(_)));
    assert_eq!(repo.count().await.unwrap(), 3);

    let mut hyperion = repo.find_by_id(3).await.unwrap().unwrap();
    hyperion.isbn = "978-2".into();
    assert!(matches!(repo.update(&hyperion).await, Err(DataError::Conflict(_))));
}

#[tokio::test]
async fn update_keeps_own_unique_value() {
    let repo = library();
    let mut dune = repo.find_by_id(1).await.unwrap().unwrap();
    dune.price = 15.0;
    assert!(repo.update(&dune).await.unwrap());
    assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().price, 15.0);
}

#[tokio::test]
async fn update_and_delete_of_missing_id() {
    let repo = library();
    let mut ghost = Book::new("Ghost", "978-9", 1.0);
    ghost.id = 99;
    assert!(!repo.update(&ghost).await.unwrap());
    assert!(repo.delete(99).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_returns_removed_record_once() {
    let repo = library();
    let removed = repo.delete(1).await.unwrap().unwrap();
    assert_eq!(removed.title, "Dune");
    assert!(repo.delete(1).await.unwrap().is_none());
    assert!(repo.find_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn clones_share_storage() {
    let repo = library();
    let handle = repo.clone();
    handle.delete(3).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);
}
