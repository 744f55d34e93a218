pub mod sample;

pub use sample::*;

use serde::{Deserialize, Serialize};

// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
