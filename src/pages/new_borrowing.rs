//! New borrowing form: the member and the books they can borrow

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    backend::LibraryApi,
    error::AppResult,
    models::{Book, BookQuery, Member},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewBorrowingPage {
    pub member: Member,
    /// Only books with `Status::Available`
    pub books: Vec<Book>,
}

#[tracing::instrument(skip(api))]
pub async fn load(api: &dyn LibraryApi, member_id: i32) -> AppResult<NewBorrowingPage> {
    let query = BookQuery::available();

    let (member, mut books) = tokio::try_join!(
        api.get_member(member_id),
        api.list_books(&query)
    )?;

    let listed = books.len();
    books.retain(Book::is_available);
    if books.len() != listed {
        tracing::debug!(
            "Dropped {} unavailable books from the available listing",
            listed - books.len()
        );
    }

    Ok(NewBorrowingPage { member, books })
}
