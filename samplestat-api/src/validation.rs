//! JSON body extractor for sample submissions.
//!
//! Bodies that cannot be parsed into the expected shape are answered with a
//! fixed plain-text explanation of the schema instead of axum's default
//! rejection. Bodies that parse but fail field validation get the regular
//! JSON error response.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Returned verbatim when a request body does not match the sample schema.
pub const SAMPLE_SCHEMA_HELP: &str = r#"    There was an error while validating a request, most likely this was caused by a bad request while attempting to add a new sample.
    please ensure these request fields are correct, Example:
        {
            "distributionType": "uniform" OR "normal" OR "weibull",
            "values": [1, 2, 3]
        }
    Additionally, ensure that optional fields such as id (int) and sampleCount (int) are either not present, or are properly input.
    The distribution parameters are required for the chosen distributionType:
        uniform: low (float), high (float)
        normal:  loc (float), scale (float)
        weibull: shape (float)"#;

/// Parsed and validated JSON body
pub struct SampleJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for SampleJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = SampleJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value): Json<T> = Json::from_request(req, state)
            .await
            .map_err(SampleJsonRejection::Shape)?;

        value.validate().map_err(SampleJsonRejection::Validation)?;

        Ok(SampleJson(value))
    }
}

/// Rejection type for sample bodies
#[derive(Debug)]
pub enum SampleJsonRejection {
    Shape(JsonRejection),
    Validation(ValidationErrors),
}

impl IntoResponse for SampleJsonRejection {
    fn into_response(self) -> Response {
        match self {
            SampleJsonRejection::Shape(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "Rejected malformed sample body");
                (StatusCode::BAD_REQUEST, SAMPLE_SCHEMA_HELP).into_response()
            }
            SampleJsonRejection::Validation(errors) => ApiError::from(errors).into_response(),
        }
    }
}
