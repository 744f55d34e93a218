use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// The closed set of distributions a sample can be tagged with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DistributionType {
    Uniform,
    Normal,
    Weibull,
}

impl DistributionType {
    pub const ALL: [DistributionType; 3] = [
        DistributionType::Uniform,
        DistributionType::Normal,
        DistributionType::Weibull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionType::Uniform => "uniform",
            DistributionType::Normal => "normal",
            DistributionType::Weibull => "weibull",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uniform" => Ok(DistributionType::Uniform),
            "normal" => Ok(DistributionType::Normal),
            "weibull" => Ok(DistributionType::Weibull),
            other => Err(CoreError::Validation(format!(
                "unknown distribution type: {}",
                other
            ))),
        }
    }
}

/// Parameters carried by a sample, one shape per [`DistributionType`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "distributionType", rename_all = "lowercase")]
pub enum DistributionParams {
    Uniform { low: f64, high: f64 },
    Normal { loc: f64, scale: f64 },
    Weibull { shape: f64 },
}

impl DistributionParams {
    pub fn distribution_type(&self) -> DistributionType {
        match self {
            DistributionParams::Uniform { .. } => DistributionType::Uniform,
            DistributionParams::Normal { .. } => DistributionType::Normal,
            DistributionParams::Weibull { .. } => DistributionType::Weibull,
        }
    }

    /// Reject non-finite values and parameters outside the distribution's domain.
    pub fn check(&self) -> Result<()> {
        match *self {
            DistributionParams::Uniform { low, high } => {
                require_finite("low", low)?;
                require_finite("high", high)?;
                if low > high {
                    return Err(CoreError::Validation(format!(
                        "uniform distribution requires low <= high (got low={}, high={})",
                        low, high
                    )));
                }
            }
            DistributionParams::Normal { loc, scale } => {
                require_finite("loc", loc)?;
                require_finite("scale", scale)?;
                if scale <= 0.0 {
                    return Err(CoreError::Validation(format!(
                        "normal distribution requires scale > 0 (got {})",
                        scale
                    )));
                }
            }
            DistributionParams::Weibull { shape } => {
                require_finite("shape", shape)?;
                if shape <= 0.0 {
                    return Err(CoreError::Validation(format!(
                        "weibull distribution requires shape > 0 (got {})",
                        shape
                    )));
                }
            }
        }
        Ok(())
    }
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "parameter `{}` must be a finite number",
            name
        )))
    }
}
