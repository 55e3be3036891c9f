//! reqwest implementation of [`LibraryApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::LibraryApi;
use crate::{
    config::BackendConfig,
    error::{AppError, AppResult},
    models::{Book, BookQuery, BorrowQuery, BorrowRequest, BorrowedBook, Member},
};

#[derive(Clone)]
pub struct HttpLibraryApi {
    client: Client,
    base_url: String,
}

impl HttpLibraryApi {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Reuse an existing client (and its connection pool)
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

/// Turn a backend response into `T`, mapping non-2xx statuses to errors
async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    let url = response.url().path().to_string();

    if status == StatusCode::NOT_FOUND {
        let message = backend_message(&response.text().await.unwrap_or_default());
        if message.is_empty() {
            return Err(AppError::NotFound(format!("{} not found", url)));
        }
        return Err(AppError::NotFound(message));
    }

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AppError::Backend {
            status: status.as_u16(),
            message: backend_message(&message),
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(format!("{}: {}", url, e)))
}

/// The backend answers errors with a bare JSON string; unwrap it when it does
fn backend_message(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl LibraryApi for HttpLibraryApi {
    #[tracing::instrument(skip(self))]
    async fn get_member(&self, member_id: i32) -> AppResult<Member> {
        let response = self
            .client
            .get(self.url(&format!("/members/{}", member_id)))
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_member_borrowings(
        &self,
        member_id: i32,
        query: &BorrowQuery,
    ) -> AppResult<Vec<BorrowedBook>> {
        let response = self
            .client
            .get(self.url(&format!("/borrows/{}", member_id)))
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let response = self
            .client
            .get(self.url("/books/"))
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn borrow_book(&self, member_id: i32, request: &BorrowRequest) -> AppResult<String> {
        let response = self
            .client
            .post(self.url(&format!("/borrows/{}", member_id)))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn return_book(&self, request: &BorrowRequest) -> AppResult<String> {
        let response = self
            .client
            .post(self.url("/borrows/return/"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn ping(&self) -> bool {
        match self
            .client
            .get(format!("{}/health_check", self.base_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Library backend health check failed: {}", e);
                false
            }
        }
    }
}
