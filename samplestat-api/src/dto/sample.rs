use samplestat_core::{SampleDraft, SampleId, SampleMap};
use serde::{Deserialize, Serialize};

/// Body accepted by `POST /api/sample`.
pub type CreateSampleRequest = SampleDraft;

/// Body returned by `GET /api/samples` and the statistics endpoint.
pub type SamplesResponse = SampleMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSampleResponse {
    pub id: SampleId,
    pub message: String,
}

impl CreateSampleResponse {
    pub fn new(id: SampleId) -> Self {
        Self {
            id,
            message: format!(
                "The request to add the distribution has been completed, and may be found with ID: {}",
                id
            ),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    #[serde(rename = "Hello")]
    pub hello: String,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self {
            hello: "Send samples to POST /api/sample and read them from GET /api/samples"
                .to_string(),
        }
    }
}
