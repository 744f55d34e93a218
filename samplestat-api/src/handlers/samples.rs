use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use samplestat_core::{into_sample_map, CoreError, SampleId};

use crate::{
    dto::*,
    error::{ApiError, ApiResult},
    validation::SampleJson,
    AppState,
};

const INSERT_FAILED: &str = "there was an error caused due to one or more of the additional \
    parameters for the chosen distributionType being incorrect in input data";

pub async fn create(
    State(state): State<AppState>,
    SampleJson(payload): SampleJson<CreateSampleRequest>,
) -> ApiResult<(StatusCode, Json<CreateSampleResponse>)> {
    if payload.sample_count.is_some_and(|count| count != payload.values.len() as i64) {
        tracing::debug!(
            supplied = ?payload.sample_count,
            actual = payload.values.len(),
            "Overriding supplied sampleCount"
        );
    }

    let sample = payload.normalize()?;

    let id = state.samples.insert(&sample).await.map_err(|err| match err {
        CoreError::Database(cause) => {
            tracing::warn!(%cause, "Sample insert failed");
            ApiError::BadRequest(INSERT_FAILED.to_string())
        }
        other => ApiError::from(other),
    })?;

    tracing::info!(sample_id = %id, distribution = %sample.distribution_type(), "Sample created");

    Ok((StatusCode::CREATED, Json(CreateSampleResponse::new(id))))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<SamplesResponse>> {
    let rows = state.samples.list().await?;

    if rows.is_empty() {
        return Err(ApiError::NotFound("the db currently has no data".to_string()));
    }

    Ok(Json(into_sample_map(rows)?))
}

/// Stored record for one sample; no statistics are computed yet.
pub async fn statistics(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<SamplesResponse>> {
    let id: SampleId = raw_id.parse()?;

    let rows = state.samples.find_by_id(id).await?;
    if rows.is_empty() {
        return Err(ApiError::NotFound(format!(
            "The ID {} does not exist in the database",
            id
        )));
    }

    Ok(Json(into_sample_map(rows)?))
}
