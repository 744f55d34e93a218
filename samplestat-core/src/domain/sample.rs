use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use super::{encode_values, DistributionParams, DistributionType, SampleId};
use crate::error::{CoreError, Result};

/// A sample as submitted by a caller, before normalization.
///
/// Only the parameter fields matching `distribution_type` are read; the rest
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_draft_parameters"))]
pub struct SampleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SampleId>,
    pub distribution_type: DistributionType,
    #[validate(length(min = 1, message = "the sample has no values in the value list"))]
    pub values: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<f64>,
}

impl SampleDraft {
    pub fn new(distribution_type: DistributionType, values: Vec<i64>) -> Self {
        Self {
            id: None,
            distribution_type,
            values,
            sample_count: None,
            low: None,
            high: None,
            loc: None,
            scale: None,
            shape: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(SampleId::new(id));
        self
    }

    pub fn with_sample_count(mut self, count: i64) -> Self {
        self.sample_count = Some(count);
        self
    }

    pub fn uniform(values: Vec<i64>, low: f64, high: f64) -> Self {
        let mut draft = Self::new(DistributionType::Uniform, values);
        draft.low = Some(low);
        draft.high = Some(high);
        draft
    }

    pub fn normal(values: Vec<i64>, loc: f64, scale: f64) -> Self {
        let mut draft = Self::new(DistributionType::Normal, values);
        draft.loc = Some(loc);
        draft.scale = Some(scale);
        draft
    }

    pub fn weibull(values: Vec<i64>, shape: f64) -> Self {
        let mut draft = Self::new(DistributionType::Weibull, values);
        draft.shape = Some(shape);
        draft
    }

    /// Collect the parameters required by `distribution_type`.
    pub fn parameters(&self) -> Result<DistributionParams> {
        let params = match self.distribution_type {
            DistributionType::Uniform => DistributionParams::Uniform {
                low: require(self.low, "low", self.distribution_type)?,
                high: require(self.high, "high", self.distribution_type)?,
            },
            DistributionType::Normal => DistributionParams::Normal {
                loc: require(self.loc, "loc", self.distribution_type)?,
                scale: require(self.scale, "scale", self.distribution_type)?,
            },
            DistributionType::Weibull => DistributionParams::Weibull {
                shape: require(self.shape, "shape", self.distribution_type)?,
            },
        };
        params.check()?;
        Ok(params)
    }

    /// Reconcile `sample_count` with `values` and resolve the parameters.
    ///
    /// The supplied count is never trusted: it always becomes `values.len()`.
    pub fn normalize(self) -> Result<NewSample> {
        let sample_count = self.values.len() as i64;
        if sample_count <= 0 {
            return Err(CoreError::Validation(format!(
                "The {} sample has no values in the value list",
                self.distribution_type
            )));
        }

        let params = self.parameters()?;

        Ok(NewSample {
            id: self.id,
            values: self.values,
            sample_count,
            params,
        })
    }
}

fn require(value: Option<f64>, name: &str, distribution: DistributionType) -> Result<f64> {
    value.ok_or_else(|| {
        CoreError::Validation(format!(
            "parameter `{}` is required for a {} distribution",
            name, distribution
        ))
    })
}

fn validate_draft_parameters(draft: &SampleDraft) -> std::result::Result<(), ValidationError> {
    draft.parameters().map(|_| ()).map_err(|err| {
        let mut error = ValidationError::new("distribution_parameters");
        error.message = Some(Cow::Owned(match err {
            CoreError::Validation(msg) => msg,
            other => other.to_string(),
        }));
        error
    })
}

/// A normalized sample ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSample {
    pub id: Option<SampleId>,
    pub values: Vec<i64>,
    pub sample_count: i64,
    pub params: DistributionParams,
}

impl NewSample {
    pub fn distribution_type(&self) -> DistributionType {
        self.params.distribution_type()
    }

    pub fn encoded_values(&self) -> String {
        encode_values(&self.values)
    }
}

/// A `samples` row as read back from the store, values still encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSample {
    pub id: SampleId,
    pub distribution_type: DistributionType,
    pub data_points: String,
    pub value_count: i64,
}
