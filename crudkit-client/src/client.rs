use std::marker::PhantomData;

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::retry::RetryPolicy;

/// Typed client for one REST collection served by `crud_routes`.
///
/// Every call goes through the client's [`RetryPolicy`] (no retry unless one
/// is set with [`with_retry`](Self::with_retry)).
///
/// ```ignore
/// let books = ResourceClient::<Book>::new("http://localhost:5000", "/api/books")
///     .with_retry(RetryPolicy::default());
/// let all = books.list().await?;
/// ```
pub struct ResourceClient<T> {
    http: reqwest::Client,
    url: String,
    retry: RetryPolicy,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            url: self.url.clone(),
            retry: self.retry,
            _marker: PhantomData,
        }
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl<T: DeserializeOwned> ResourceClient<T> {
    pub fn new(base_url: &str, path: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            retry: RetryPolicy::none(),
            _marker: PhantomData,
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The collection URL, e.g. `http://localhost:5000/api/books`.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn list(&self) -> Result<Vec<T>, ClientError> {
        let resp = self.execute(Method::GET, self.url.clone(), None).await?;
        decode(resp).await
    }

    pub async fn get(&self, id: i64) -> Result<T, ClientError> {
        let resp = self.execute(Method::GET, self.item_url(id), None).await?;
        decode(resp).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<T, ClientError> {
        let body = encode(body)?;
        let resp = self.execute(Method::POST, self.url.clone(), Some(body)).await?;
        decode(resp).await
    }

    /// Overwrite the fields present in `body`.
    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, body: &B) -> Result<T, ClientError> {
        let body = encode(body)?;
        let resp = self.execute(Method::PUT, self.item_url(id), Some(body)).await?;
        decode(resp).await
    }

    /// Delete a record. Both `200` with a message and `204` count as success.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.execute(Method::DELETE, self.item_url(id), None).await?;
        Ok(())
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.url)
    }

    async fn execute(
        &self,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
    ) -> Result<Response, ClientError> {
        self.retry
            .run(|| {
                let mut request = self.http.request(method.clone(), &url);
                if let Some(body) = &body {
                    request = request
                        .header(reqwest::header::CONTENT_TYPE, "application/json")
                        .body(body.clone());
                }
                async move {
                    let resp = request.send().await.map_err(ClientError::Transport)?;
                    check_status(resp).await
                }
            })
            .await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(body).map_err(|e| ClientError::Encode(e.to_string()))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Pass successful responses through; turn the rest into `ClientError::Status`
/// carrying the server's `message` when there is one.
async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
