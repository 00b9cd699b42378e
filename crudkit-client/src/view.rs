use crudkit_data::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ResourceClient;
use crate::error::ClientError;

/// Local mirror of a remote collection.
///
/// The list is fetched once by [`load`](Self::load); afterwards mutations
/// reconcile it with what the server returned instead of fetching it again.
/// A failed call records its message in [`error`](Self::error) and leaves
/// `items` as they were.
pub struct ResourceView<T> {
    client: ResourceClient<T>,
    items: Vec<T>,
    error: Option<String>,
    loading: bool,
}

impl<T: Entity + DeserializeOwned> ResourceView<T> {
    pub fn new(client: ResourceClient<T>) -> Self {
        Self {
            client,
            items: Vec::new(),
            error: None,
            loading: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    /// Replace the local list with the server's.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.client.list().await;
        self.loading = false;
        let items = self.record(result)?;
        self.items = items;
        Ok(())
    }

    /// Create a record and append the server's copy (with its id).
    pub async fn add<B: Serialize + ?Sized>(&mut self, body: &B) -> Result<&T, ClientError> {
        let result = self.client.create(body).await;
        let created = self.record(result)?;
        self.items.push(created);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Update a record and swap in the server's copy.
    pub async fn edit<B: Serialize + ?Sized>(&mut self, id: i64, body: &B) -> Result<(), ClientError> {
        let result = self.client.update(id, body).await;
        let updated = self.record(result)?;
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => *slot = updated,
            None => self.items.push(updated),
        }
        Ok(())
    }

    /// Delete a record and drop it from the local list.
    pub async fn remove(&mut self, id: i64) -> Result<(), ClientError> {
        let result = self.client.delete(id).await;
        self.record(result)?;
        self.items.retain(|item| item.id() != id);
        Ok(())
    }

    fn record<V>(&mut self, result: Result<V, ClientError>) -> Result<V, ClientError> {
        match result {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(url = self.client.url(), error = %err, "request failed");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
