//! Borrowing (lending transaction) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{Order, Status};

/// Raw lending transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Borrowing {
    pub id: i32,
    pub book_id: Option<i32>,
    pub member_id: Option<i32>,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl Borrowing {
    /// The book is still out
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Borrowing joined with its book and borrower, as returned by
/// `GET /api/borrows/{member_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BorrowedBook {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub borrower: String,
    pub borrower_id: i32,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: Status,
}

impl BorrowedBook {
    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }
}

/// Filters for a member's borrowing history
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BorrowQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Body of the borrow and return calls
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BorrowRequest {
    #[validate(range(min = 1, message = "book_id must be a positive identifier"))]
    pub book_id: i32,
}
