//! Member detail page: the member and their borrowing history

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    backend::LibraryApi,
    error::AppResult,
    models::{BorrowQuery, BorrowedBook, Member},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDetailPage {
    pub member: Member,
    pub borrowings: Vec<BorrowedBook>,
}

#[tracing::instrument(skip(api))]
pub async fn load(
    api: &dyn LibraryApi,
    member_id: i32,
    query: &BorrowQuery,
) -> AppResult<MemberDetailPage> {
    let (member, borrowings) = tokio::try_join!(
        api.get_member(member_id),
        api.get_member_borrowings(member_id, query)
    )?;

    tracing::debug!(
        "Loaded member {} with {} borrowings",
        member.id,
        borrowings.len()
    );

    Ok(MemberDetailPage { member, borrowings })
}
