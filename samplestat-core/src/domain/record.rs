use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{decode_values, DistributionType, SampleId, StoredSample};
use crate::error::{CoreError, Result};

/// Response shape of a single sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecord {
    pub id: SampleId,
    pub distribution_type: DistributionType,
    pub values: Vec<i64>,
    pub sample_count: i64,
}

impl TryFrom<StoredSample> for SampleRecord {
    type Error = CoreError;

    fn try_from(row: StoredSample) -> Result<Self> {
        Ok(Self {
            id: row.id,
            distribution_type: row.distribution_type,
            values: decode_values(&row.data_points)?,
            sample_count: row.value_count,
        })
    }
}

/// Samples keyed by id; serializes as a JSON object with string keys.
pub type SampleMap = BTreeMap<SampleId, SampleRecord>;

/// Reshape stored rows into the id-keyed payload every read path returns.
pub fn into_sample_map<I>(rows: I) -> Result<SampleMap>
where
    I: IntoIterator<Item = StoredSample>,
{
    rows.into_iter()
        .map(|row| SampleRecord::try_from(row).map(|record| (record.id, record)))
        .collect()
}
