use serde::{Deserialize, Serialize};

use crate::errors::{PaybandError, Result};
use crate::rules::salary_band::LOWER_TOLERANCE_RATIO;

/// Position - a job role with an inclusive salary band
///
/// Positions are immutable once built. `Position::new` rejects malformed
/// bands, so every `Position` in circulation satisfies
/// `0 <= min_salary <= max_salary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord")]
pub struct Position {
    id: String,
    title: String,
    min_salary: f64,
    max_salary: f64,
}

/// Unchecked wire shape; deserialization funnels through `Position::new`
#[derive(Deserialize)]
struct PositionRecord {
    id: String,
    title: String,
    min_salary: f64,
    max_salary: f64,
}

impl TryFrom<PositionRecord> for Position {
    type Error = PaybandError;

    fn try_from(record: PositionRecord) -> Result<Self> {
        Position::new(
            record.id,
            record.title,
            record.min_salary,
            record.max_salary,
        )
    }
}

impl Position {
    /// Create a new Position
    ///
    /// # Errors
    /// * `InvalidPosition` - If either bound is negative or not finite, or
    ///   if `min_salary > max_salary`
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        min_salary: f64,
        max_salary: f64,
    ) -> Result<Self> {
        let id = id.into();

        if !min_salary.is_finite() || !max_salary.is_finite() {
            return Err(PaybandError::InvalidPosition {
                position_id: id,
                reason: "Salary bounds must be finite".to_string(),
            });
        }

        if min_salary < 0.0 || max_salary < 0.0 {
            return Err(PaybandError::InvalidPosition {
                position_id: id,
                reason: "Salary bounds cannot be negative".to_string(),
            });
        }

        if min_salary > max_salary {
            return Err(PaybandError::InvalidPosition {
                position_id: id,
                reason: format!(
                    "Minimum salary {} exceeds maximum salary {}",
                    min_salary, max_salary
                ),
            });
        }

        Ok(Self {
            id,
            title: title.into(),
            min_salary,
            max_salary,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn min_salary(&self) -> f64 {
        self.min_salary
    }

    pub fn max_salary(&self) -> f64 {
        self.max_salary
    }

    /// Width of the band
    pub fn span(&self) -> f64 {
        self.max_salary - self.min_salary
    }

    /// Lowest salary that a position change may still clamp up to `min_salary`
    pub fn tolerance_floor(&self) -> f64 {
        self.min_salary - LOWER_TOLERANCE_RATIO * self.span()
    }

    /// Check whether `salary` lies inside the inclusive band
    ///
    /// NaN compares false against both bounds and is never in range.
    pub fn is_within_range(&self, salary: f64) -> bool {
        salary >= self.min_salary && salary <= self.max_salary
    }
}
