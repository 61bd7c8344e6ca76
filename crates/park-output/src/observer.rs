//! `ParkOutputObserver<W>` — bridges `ParkObserver` to an `OutputWriter`.

use park_core::Minute;
use park_sim::{MinuteStats, ParkObserver, ParkView};

use crate::row::{ActivityHistoryRow, AgentRow, AttractionHistoryRow, ParkHistoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ParkObserver`] that writes each minute's histories and the final
/// visitor records to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ParkObserver`
/// methods have no return value.  After `engine.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ParkOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ParkOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ParkObserver for ParkOutputObserver<W> {
    fn on_minute_end(&mut self, now: Minute, stats: &MinuteStats, park: &ParkView<'_>) {
        let attractions: Vec<AttractionHistoryRow> = park
            .attractions
            .iter()
            .filter_map(|a| {
                let (minute, sample) = a.history().latest()?;
                (*minute == now).then(|| AttractionHistoryRow::new(now, a.name(), sample))
            })
            .collect();
        let result = self.writer.write_attractions(&attractions);
        self.store_err(result);

        let activities: Vec<ActivityHistoryRow> = park
            .activities
            .iter()
            .filter_map(|a| {
                let (minute, sample) = a.history().latest()?;
                (*minute == now).then(|| ActivityHistoryRow::new(now, a.name(), sample))
            })
            .collect();
        let result = self.writer.write_activities(&activities);
        self.store_err(result);

        let row = ParkHistoryRow {
            minute:             now.0,
            active_agents:      stats.active_agents,
            passes_distributed: park.history.passes_distributed,
            passes_redeemed:    park.history.passes_redeemed,
        };
        let result = self.writer.write_park(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_minute: Minute, park: &ParkView<'_>) {
        let rows: Vec<AgentRow> = park.agents.iter().map(AgentRow::from).collect();
        let result = self.writer.write_agents(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
