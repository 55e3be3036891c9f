//! Client side of the library backend API

pub mod http;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookQuery, BorrowQuery, BorrowRequest, BorrowedBook, Member},
};

pub use http::HttpLibraryApi;

/// Operations the portal needs from the library backend.
///
/// Every call is an independent request; nothing is cached between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryApi: Send + Sync {
    /// `GET /api/members/{id}`
    async fn get_member(&self, member_id: i32) -> AppResult<Member>;

    /// `GET /api/borrows/{id}`
    async fn get_member_borrowings(
        &self,
        member_id: i32,
        query: &BorrowQuery,
    ) -> AppResult<Vec<BorrowedBook>>;

    /// `GET /api/books/`
    async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>>;

    /// `POST /api/borrows/{id}`, returns the backend's confirmation message
    async fn borrow_book(&self, member_id: i32, request: &BorrowRequest) -> AppResult<String>;

    /// `POST /api/borrows/return/`
    async fn return_book(&self, request: &BorrowRequest) -> AppResult<String>;

    /// `GET /health_check`, false on any failure
    async fn ping(&self) -> bool;
}
