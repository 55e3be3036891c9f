//! Page data endpoints for the member pages

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{BorrowQuery, BorrowRequest},
    pages::{self, ActionOutcome, MemberDetailPage, NewBorrowingPage},
    AppState,
};

/// Member detail page: the member and their borrowing history
#[utoipa::path(
    get,
    path = "/pages/members/{id}",
    tag = "pages",
    params(
        ("id" = i32, Path, description = "Member ID"),
        BorrowQuery
    ),
    responses(
        (status = 200, description = "Member with borrowing history", body = MemberDetailPage),
        (status = 400, description = "Invalid member ID"),
        (status = 404, description = "Member not found"),
        (status = 502, description = "Library backend failure")
    )
)]
pub async fn member_detail(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Query(query): Query<BorrowQuery>,
) -> AppResult<Json<MemberDetailPage>> {
    let page = pages::member_detail::load(state.backend.as_ref(), member_id, &query).await?;
    Ok(Json(page))
}

/// New borrowing form: the member and the books available for lending
#[utoipa::path(
    get,
    path = "/pages/members/{id}/new",
    tag = "pages",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member with available books", body = NewBorrowingPage),
        (status = 400, description = "Invalid member ID"),
        (status = 404, description = "Member not found"),
        (status = 502, description = "Library backend failure")
    )
)]
pub async fn new_borrowing(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> AppResult<Json<NewBorrowingPage>> {
    let page = pages::new_borrowing::load(state.backend.as_ref(), member_id).await?;
    Ok(Json(page))
}

/// Submit the new borrowing form
#[utoipa::path(
    post,
    path = "/pages/members/{id}/new",
    tag = "pages",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book borrowed", body = ActionOutcome),
        (status = 400, description = "Invalid book or book not lendable"),
        (status = 404, description = "Member or book not found")
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<ActionOutcome>> {
    let outcome = pages::actions::borrow(state.backend.as_ref(), member_id, &request).await?;
    Ok(Json(outcome))
}

/// Return a book from the member detail page
#[utoipa::path(
    post,
    path = "/pages/members/{id}/return",
    tag = "pages",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book returned", body = ActionOutcome),
        (status = 400, description = "Invalid book or book not borrowed"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<ActionOutcome>> {
    tracing::debug!("Return requested from member {} page", member_id);
    let outcome = pages::actions::return_book(state.backend.as_ref(), &request).await?;
    Ok(Json(outcome))
}
