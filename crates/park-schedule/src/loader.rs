//! CSV loader for the hourly arrival table.
//!
//! # CSV format
//!
//! One row per operating hour, in order.  The `hour` column is a free-form
//! label; `percent` is the share of the daily total arriving that hour.
//!
//! ```csv
//! hour,percent
//! 9am,10
//! 10am,15
//! 11am,20
//! ```

use std::io::Read;
use std::path::Path;

use crate::distribution::HourShare;
use crate::{HourlyDistribution, ScheduleError};

/// Load and validate an [`HourlyDistribution`] from a CSV file.
pub fn load_hourly_csv(path: &Path) -> Result<HourlyDistribution, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_hourly_reader(file)
}

/// Like [`load_hourly_csv`] but accepts any `Read` source.
pub fn load_hourly_reader<R: Read>(reader: R) -> Result<HourlyDistribution, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let hours = csv_reader
        .deserialize::<HourShare>()
        .map(|row| row.map_err(|e| ScheduleError::Parse(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    HourlyDistribution::new(hours)
}
