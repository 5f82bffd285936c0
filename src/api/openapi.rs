//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, message_handler};
use crate::domain::{CreateMessage, MessageResponse};
use crate::types::{PaginatedMessages, PaginationMeta};

/// OpenAPI documentation for the message board
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Message Board",
        version = "0.1.0",
        description = "Store and list text messages",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        message_handler::all_messages,
        message_handler::add_message,
        message_handler::list_messages_paginated,
        message_handler::get_message,
        message_handler::create_message,
        health_handler::health,
    ),
    components(
        schemas(
            MessageResponse,
            CreateMessage,
            PaginatedMessages,
            PaginationMeta,
            health_handler::HealthResponse,
            health_handler::ServiceHealth,
            health_handler::ServiceStatus,
        )
    ),
    tags(
        (name = "Messages", description = "Message storage endpoints"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_message_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in ["/", "/add-message", "/messages", "/messages/{id}", "/health"] {
            assert!(paths.contains_key(path), "missing path {}", path);
        }
    }
}
