//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, pages};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Portal API",
        version = "0.1.0",
        description = "Page data for the library management front end",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Pages
        pages::member_detail,
        pages::new_borrowing,
        pages::borrow_book,
        pages::return_book,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::error::ErrorResponse,
            // Models
            crate::models::Book,
            crate::models::Member,
            crate::models::Borrowing,
            crate::models::BorrowedBook,
            crate::models::BorrowRequest,
            crate::models::BorrowQuery,
            crate::models::Order,
            crate::models::Status,
            // Pages
            crate::pages::MemberDetailPage,
            crate::pages::NewBorrowingPage,
            crate::pages::ActionOutcome,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pages", description = "Member page loads and form actions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI router with Swagger UI
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
