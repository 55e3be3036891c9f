//! Book model and catalog query parameters

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{Order, Status};

/// Book as returned by `GET /api/books/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub status: Status,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }
}

/// Catalog search parameters. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BookQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl BookQuery {
    /// Books that can be lent right now (`?status=available`)
    pub fn available() -> Self {
        Self {
            status: Some(Status::Available),
            ..Default::default()
        }
    }
}
