//! Text encoding of sample data points as stored in the `data_points` column.

use crate::error::{CoreError, Result};

const SEPARATOR: &str = ",";

/// Comma-join the values, e.g. `[1, 2, 3]` becomes `"1,2,3"`.
pub fn encode_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Parse a comma-joined list back into integers.
///
/// Whitespace around items is ignored so `"1, 2, 3"` decodes too.
/// An empty string decodes to an empty list.
pub fn decode_values(encoded: &str) -> Result<Vec<i64>> {
    if encoded.trim().is_empty() {
        return Ok(Vec::new());
    }

    encoded
        .split(SEPARATOR)
        .map(|item| {
            item.trim().parse::<i64>().map_err(|e| {
                CoreError::Serialization(format!("invalid data point {:?}: {}", item, e))
            })
        })
        .collect()
}
