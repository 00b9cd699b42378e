//! Talk to a running server through `ResourceClient`.

use crudkit::crudkit_client::{ResourceClient, RetryPolicy};
use serde_json::Value;

use crate::Collection;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn client(base_url: &str, collection: Collection) -> ResourceClient<Value> {
    ResourceClient::new(base_url, collection.path()).with_retry(RetryPolicy::default())
}

fn print(value: &impl serde::Serialize) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn list(base_url: &str, collection: Collection) -> CommandResult {
    print(&client(base_url, collection).list().await?)
}

pub async fn get(base_url: &str, collection: Collection, id: i64) -> CommandResult {
    print(&client(base_url, collection).get(id).await?)
}

pub async fn create(base_url: &str, collection: Collection, body: &str) -> CommandResult {
    let body: Value = serde_json::from_str(body)?;
    print(&client(base_url, collection).create(&body).await?)
}

pub async fn update(base_url: &str, collection: Collection, id: i64, body: &str) -> CommandResult {
    let body: Value = serde_json::from_str(body)?;
    print(&client(base_url, collection).update(id, &body).await?)
}

pub async fn delete(base_url: &str, collection: Collection, id: i64) -> CommandResult {
    client(base_url, collection).delete(id).await?;
    println!("deleted {} {id}", collection.path());
    Ok(())
}
