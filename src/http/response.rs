//! JSON response envelope.
//!
//! Every endpoint answers with the same shape, `{message, data, status}`,
//! built fluently and converted into an axum response at the end.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Fluent builder for the service's uniform response envelope.
pub struct ApiResponse<T> {
    message: String,
    data: Option<T>,
    status: StatusCode,
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    message: &'a str,
    data: Option<&'a T>,
    status: u16,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            data: None,
            status: StatusCode::OK,
        }
    }

    pub fn code(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }
}

impl<T: Serialize> Default for ApiResponse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = Envelope {
            message: &self.message,
            data: self.data.as_ref(),
            status: self.status.as_u16(),
        };
        (self.status, Json(&body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn body_json<T: Serialize>(response: &ApiResponse<T>) -> Value {
        serde_json::to_value(Envelope {
            message: &response.message,
            data: response.data.as_ref(),
            status: response.status.as_u16(),
        })
        .unwrap()
    }

    #[test]
    fn success_envelope_shape() {
        let response = ApiResponse::new().data(json!({"login": "octocat"}));
        assert_eq!(
            body_json(&response),
            json!({"message": "", "data": {"login": "octocat"}, "status": 200})
        );
    }

    #[test]
    fn error_envelope_serializes_null_data() {
        let response = ApiResponse::<Value>::new()
            .code(StatusCode::INTERNAL_SERVER_ERROR)
            .message("Error occured");
        assert_eq!(
            body_json(&response),
            json!({"message": "Error occured", "data": null, "status": 500})
        );
    }
}
