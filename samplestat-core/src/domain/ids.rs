use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Newtype pattern for SampleId
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SampleId(pub i64);

impl SampleId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SampleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SampleId> for i64 {
    fn from(id: SampleId) -> Self {
        id.0
    }
}

impl FromStr for SampleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self).map_err(|_| {
            CoreError::InvalidId(format!(
                "The ID: {} has caused an error, please ensure that it is a number and try again",
                s
            ))
        })
    }
}
