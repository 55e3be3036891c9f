//! Page loaders and form actions.
//!
//! A loader fetches everything one page needs from the backend, issuing its
//! requests concurrently and failing as a whole if any of them fails.

pub mod actions;
pub mod member_detail;
pub mod new_borrowing;

pub use actions::ActionOutcome;
pub use member_detail::MemberDetailPage;
pub use new_borrowing::NewBorrowingPage;
