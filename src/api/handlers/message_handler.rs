//! Message handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{PathParams, QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::config::ADD_MESSAGE_SUCCESS;
use crate::domain::{CreateMessage, MessageResponse};
use crate::errors::AppResult;
use crate::types::{Paginated, PaginatedMessages, PaginationParams};

/// Create message routes (mounted under `/messages`)
pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_messages_paginated).post(create_message))
        .route("/:id", get(get_message))
}

/// List all messages
#[utoipa::path(
    get,
    path = "/",
    tag = "Messages",
    responses(
        (status = 200, description = "Every stored message", body = [MessageResponse])
    )
)]
pub async fn all_messages(State(state): State<AppState>) -> AppResult<Json<Vec<MessageResponse>>> {
    let messages = state.message_service.list_messages().await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Store a message stamped with the current time
#[utoipa::path(
    get,
    path = "/add-message",
    tag = "Messages",
    responses(
        (status = 200, description = "Message stored", body = String, example = json!("Succeeded"))
    )
)]
pub async fn add_message(State(state): State<AppState>) -> AppResult<&'static str> {
    state.message_service.add_generated_message().await?;
    Ok(ADD_MESSAGE_SUCCESS)
}

/// List messages page by page
#[utoipa::path(
    get,
    path = "/messages",
    tag = "Messages",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of messages", body = PaginatedMessages),
        (status = 400, description = "Malformed query string")
    )
)]
pub async fn list_messages_paginated(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> AppResult<Json<Paginated<MessageResponse>>> {
    let page = state.message_service.list_messages_page(params).await?;
    Ok(Json(page.map(MessageResponse::from)))
}

/// Get a message by ID
#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = "Messages",
    params(("id" = i32, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message found", body = MessageResponse),
        (status = 400, description = "Malformed message ID"),
        (status = 404, description = "Message not found")
    )
)]
pub async fn get_message(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<MessageResponse>> {
    let message = state.message_service.get_message(id).await?;
    Ok(Json(MessageResponse::from(message)))
}

/// Create a message with the given content
#[utoipa::path(
    post,
    path = "/messages",
    tag = "Messages",
    request_body = CreateMessage,
    responses(
        (status = 201, description = "Message created", body = MessageResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMessage>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let message = state.message_service.create_message(payload.content).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}
