/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses and channel
 * error frames.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Json, Response},
};
use crate::backend::error::types::BackendError;
use crate::shared::ServerFrame;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("[Error] {} ({})", message, status);
        } else {
            tracing::debug!("[Error] {} ({})", message, status);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<BackendError> for ServerFrame {
    fn from(err: BackendError) -> Self {
        ServerFrame::error(err.message())
    }
}
