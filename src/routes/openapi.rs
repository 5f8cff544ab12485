use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "College Chatbot API",
        version = "1.0.0",
        description = "Question answering relay for ABC College"
    ),
    paths(
        super::health::health,
        super::health::status,
        super::chat::chat,
    ),
    components(schemas(
        crate::models::requests::ChatRequest,
        crate::models::responses::ChatResponse,
        crate::models::responses::StatusResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Health", description = "Health and status endpoints"),
        (name = "Chat", description = "Ask the college assistant a question"),
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/explore").url("/api-docs/openapi.json", ApiDoc::openapi())
}
