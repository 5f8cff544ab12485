use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use crate::AppState;
use crate::error::AppError;
use crate::models::requests::ChatRequest;
use crate::models::responses::ChatResponse;

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse, description = "Answer from the assistant, or a canned reply"),
        (status = 400, body = crate::error::ErrorBody, description = "Malformed JSON body"),
        (status = 415, body = crate::error::ErrorBody, description = "Body is not sent as application/json"),
        (status = 422, body = crate::error::ErrorBody, description = "Blank or over-long question"),
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = body?;
    body.validate()?;

    let answer = state.chat.process(&body.question).await;

    Ok(Json(ChatResponse { answer }))
}
