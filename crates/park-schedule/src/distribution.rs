//! Hourly arrival distribution — the static input to schedule generation.

use serde::Deserialize;

use park_core::Minute;

use crate::{ScheduleError, ScheduleResult};

/// Maximum operating hours in one simulated day.
pub const MAX_HOURS: usize = 24;

/// Percentages may be fractional; the sum is checked against 100 with this
/// tolerance.
const SUM_TOLERANCE: f64 = 1e-6;

/// Share of the day's visitors arriving during one operating hour.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HourShare {
    /// Display label for the hour (e.g. `"9am"`).  Not interpreted.
    pub hour:    String,
    /// Percent of the daily total arriving in this hour.
    pub percent: f64,
}

/// Ordered hourly arrival percentages, hour 0 first.
///
/// The first hour whose share is exactly zero marks closing time.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HourlyDistribution {
    hours: Vec<HourShare>,
}

impl HourlyDistribution {
    /// Build and validate a distribution.
    pub fn new(hours: Vec<HourShare>) -> ScheduleResult<Self> {
        let dist = Self { hours };
        dist.validate()?;
        Ok(dist)
    }

    /// Convenience constructor labelling hours `"0"`, `"1"`, ….
    pub fn from_percentages(percentages: &[f64]) -> ScheduleResult<Self> {
        let hours = percentages
            .iter()
            .enumerate()
            .map(|(i, &percent)| HourShare { hour: i.to_string(), percent })
            .collect();
        Self::new(hours)
    }

    /// Check bucket count, per-bucket values and the 100% total.
    ///
    /// Deserialized distributions are not validated until this is called
    /// (schedule generation always calls it).
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.hours.len() > MAX_HOURS {
            return Err(ScheduleError::TooManyHours(self.hours.len()));
        }
        if let Some(bad) = self
            .hours
            .iter()
            .find(|h| !h.percent.is_finite() || h.percent < 0.0)
        {
            return Err(ScheduleError::InvalidPercent {
                label: bad.hour.clone(),
                value: bad.percent,
            });
        }
        let sum: f64 = self.hours.iter().map(|h| h.percent).sum();
        if (sum - 100.0).abs() > SUM_TOLERANCE {
            return Err(ScheduleError::PercentSum(sum));
        }
        Ok(())
    }

    /// All hourly shares in order.
    pub fn hours(&self) -> &[HourShare] {
        &self.hours
    }

    /// Number of declared operating hours.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Hour index of the first zero-percent bucket, if any.
    pub fn closing_hour(&self) -> Option<usize> {
        self.hours.iter().position(|h| h.percent == 0.0)
    }

    /// Closing minute: `60 * closing_hour`, or the end of the last declared
    /// hour when no bucket is zero.
    pub fn close_minute(&self) -> Minute {
        let hour = self.closing_hour().unwrap_or(self.hours.len());
        Minute::from_hour(hour as u32)
    }
}
