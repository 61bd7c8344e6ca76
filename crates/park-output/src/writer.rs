//! The `OutputWriter` trait implemented by backend writers.

use crate::{ActivityHistoryRow, AgentRow, AttractionHistoryRow, OutputResult, ParkHistoryRow};

/// Sink for per-minute histories and end-of-day visitor records.
///
/// Errors are returned to the caller; [`ParkOutputObserver`][crate::ParkOutputObserver]
/// stores the first one for [`take_error`][crate::ParkOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one minute of attraction metrics.
    fn write_attractions(&mut self, rows: &[AttractionHistoryRow]) -> OutputResult<()>;

    /// Write one minute of activity metrics.
    fn write_activities(&mut self, rows: &[ActivityHistoryRow]) -> OutputResult<()>;

    /// Write one minute of park-wide metrics.
    fn write_park(&mut self, row: &ParkHistoryRow) -> OutputResult<()>;

    /// Write the per-visitor records.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
