use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use folio_models::contact::ContactMessage;

use super::failure;
use crate::models::{contact::ApiContactMessage, ApiResponse};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/send-email", routing::post(send_email))
        .with_state(service)
}

async fn send_email(
    service: State<Arc<impl ContactFeatureService>>,
    Json(request): Json<ApiContactMessage>,
) -> Response {
    let Some(fields) = request.require_fields() else {
        return failure(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    let message = match ContactMessage::try_from(fields) {
        Ok(message) => message,
        Err(err) => {
            tracing::error!("rejecting undeliverable contact message: {err}");
            return failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email");
        }
    };

    match service.send_message(message).await {
        Ok(()) => Json(ApiResponse::SUCCESS).into_response(),
        Err(ContactSendMessageError::Send) => {
            tracing::error!("smtp transport rejected contact message");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
        Err(ContactSendMessageError::Other(err)) => {
            tracing::error!("failed to send contact message: {err}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
        }
    }
}
