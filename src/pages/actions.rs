//! Form actions posted from the member pages

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{backend::LibraryApi, error::AppResult, models::BorrowRequest};

/// Result of a form action, carrying the backend's confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionOutcome {
    pub message: String,
}

/// Lend `request.book_id` to the member
#[tracing::instrument(skip(api))]
pub async fn borrow(
    api: &dyn LibraryApi,
    member_id: i32,
    request: &BorrowRequest,
) -> AppResult<ActionOutcome> {
    request.validate()?;

    let message = api.borrow_book(member_id, request).await?;
    tracing::info!("Member {} borrowed book {}", member_id, request.book_id);

    Ok(ActionOutcome { message })
}

/// Bring `request.book_id` back
#[tracing::instrument(skip(api))]
pub async fn return_book(api: &dyn LibraryApi, request: &BorrowRequest) -> AppResult<ActionOutcome> {
    request.validate()?;

    let message = api.return_book(request).await?;
    tracing::info!("Book {} returned", request.book_id);

    Ok(ActionOutcome { message })
}
