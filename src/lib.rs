//! Library Portal
//!
//! Page data service for the library management front end. Each page load
//! fetches what the page needs from the library backend API, concurrently,
//! and returns it as a single JSON document.

use std::sync::Arc;

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use backend::LibraryApi;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn LibraryApi>,
}
