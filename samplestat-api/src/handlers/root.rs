use axum::{extract::State, Json};

use crate::{dto::GreetingResponse, error::{ApiError, ApiResult}, AppState};

pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse::default())
}

pub async fn health(State(state): State<AppState>) -> ApiResult<&'static str> {
    state
        .samples
        .ping()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;

    Ok("OK")
}
