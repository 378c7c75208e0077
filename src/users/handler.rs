//! User lookup endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::http::middleware::RequestContext;
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::users::model::User;

/// Routes served under `/api/users`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{username}", get(get_user_by_username))
}

async fn get_user_by_username(
    State(state): State<AppState>,
    context: RequestContext,
    Path(username): Path<String>,
) -> Response {
    match state.users.get_by_username(&context, &username).await {
        Ok(user) => ApiResponse::new().data(user).into_response(),
        Err(_) => ApiResponse::<User>::new()
            .code(StatusCode::INTERNAL_SERVER_ERROR)
            .message("Error occured")
            .into_response(),
    }
}
