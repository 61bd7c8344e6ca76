//! `park-output` — export of park simulation histories.
//!
//! The CSV backend creates four files in the output directory:
//!
//! | File                     | One row per                                 |
//! |--------------------------|---------------------------------------------|
//! | `attraction_history.csv` | attraction per minute                       |
//! | `activity_history.csv`   | activity per minute                         |
//! | `park_history.csv`       | minute                                      |
//! | `agents.csv`             | visitor, written once at the end of the day |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`ParkOutputObserver`], which implements `park_sim::ParkObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use park_output::{CsvWriter, ParkOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ParkOutputObserver::new(writer);
//! engine.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ParkOutputObserver;
pub use row::{ActivityHistoryRow, AgentRow, AttractionHistoryRow, ParkHistoryRow};
pub use writer::OutputWriter;
