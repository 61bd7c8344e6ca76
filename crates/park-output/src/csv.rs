//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `attraction_history.csv`
//! - `activity_history.csv`
//! - `park_history.csv`
//! - `agents.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ActivityHistoryRow, AgentRow, AttractionHistoryRow, OutputResult, ParkHistoryRow};

/// Writes park output to four CSV files.
pub struct CsvWriter {
    attractions: Writer<File>,
    activities:  Writer<File>,
    park:        Writer<File>,
    agents:      Writer<File>,
    finished:    bool,
}

fn optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvWriter {
    /// Create `dir` if needed, open the four CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut attractions = Writer::from_path(dir.join("attraction_history.csv"))?;
        attractions.write_record([
            "minute",
            "attraction",
            "queue_length",
            "wait_time",
            "exp_queue_length",
            "exp_wait_time",
        ])?;

        let mut activities = Writer::from_path(dir.join("activity_history.csv"))?;
        activities.write_record(["minute", "activity", "visitors"])?;

        let mut park = Writer::from_path(dir.join("park_history.csv"))?;
        park.write_record(["minute", "active_agents", "passes_distributed", "passes_redeemed"])?;

        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record([
            "agent_id",
            "archetype",
            "age_class",
            "expedited_ability",
            "arrival",
            "exit",
            "rides_completed",
            "activities_visited",
        ])?;

        log::debug!("writing CSV output to {}", dir.display());
        Ok(Self { attractions, activities, park, agents, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_attractions(&mut self, rows: &[AttractionHistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.attractions.write_record(&[
                row.minute.to_string(),
                row.attraction.clone(),
                row.queue_length.to_string(),
                row.wait_time.to_string(),
                row.exp_queue_length.to_string(),
                row.exp_wait_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_activities(&mut self, rows: &[ActivityHistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.activities.write_record(&[
                row.minute.to_string(),
                row.activity.clone(),
                row.visitors.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_park(&mut self, row: &ParkHistoryRow) -> OutputResult<()> {
        self.park.write_record(&[
            row.minute.to_string(),
            row.active_agents.to_string(),
            row.passes_distributed.to_string(),
            row.passes_redeemed.to_string(),
        ])?;
        Ok(())
    }

    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.archetype.clone(),
                row.age_class.to_owned(),
                (row.expedited_ability as u8).to_string(),
                optional(row.arrival),
                optional(row.exit),
                row.rides_completed.to_string(),
                row.activities_visited.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.attractions.flush()?;
        self.activities.flush()?;
        self.park.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}
