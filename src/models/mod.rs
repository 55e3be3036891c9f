//! View models shared by the page loaders

pub mod book;
pub mod borrowing;
pub mod enums;
pub mod member;

// Re-export commonly used types
pub use book::{Book, BookQuery};
pub use borrowing::{BorrowQuery, BorrowRequest, BorrowedBook, Borrowing};
pub use enums::{Order, Status};
pub use member::Member;
