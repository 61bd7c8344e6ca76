//! Integration tests for park-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ActivityHistoryRow, AgentRow, AttractionHistoryRow, ParkHistoryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn attraction_row(minute: u32, name: &str) -> AttractionHistoryRow {
        AttractionHistoryRow {
            minute,
            attraction:       name.into(),
            queue_length:     12,
            wait_time:        20,
            exp_queue_length: 3,
            exp_wait_time:    5,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        for file in ["attraction_history.csv", "activity_history.csv", "park_history.csv", "agents.csv"] {
            assert!(dir.path().join(file).exists(), "{file} missing");
        }
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("day1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("park_history.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("attraction_history.csv")),
            ["minute", "attraction", "queue_length", "wait_time", "exp_queue_length", "exp_wait_time"]
        );
        assert_eq!(headers(&dir.path().join("activity_history.csv")), ["minute", "activity", "visitors"]);
        assert_eq!(
            headers(&dir.path().join("park_history.csv")),
            ["minute", "active_agents", "passes_distributed", "passes_redeemed"]
        );
        assert_eq!(headers(&dir.path().join("agents.csv"))[0], "agent_id");
    }

    #[test]
    fn attraction_rows_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_attractions(&[attraction_row(7, "Coaster"), attraction_row(7, "Carousel")]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join("attraction_history.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "Coaster");
        assert_eq!(&rows[0][3], "20"); // wait_time
        assert_eq!(&rows[1][1], "Carousel");
    }

    #[test]
    fn activity_and_park_rows_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_activities(&[ActivityHistoryRow { minute: 3, activity: "Gift Shop".into(), visitors: 9 }])
            .unwrap();
        w.write_park(&ParkHistoryRow {
            minute:             3,
            active_agents:      40,
            passes_distributed: 6,
            passes_redeemed:    2,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join("activity_history.csv"));
        assert_eq!(&rows[0][1], "Gift Shop");
        assert_eq!(&rows[0][2], "9");
        let rows = records(&dir.path().join("park_history.csv"));
        assert_eq!(&rows[0][1], "40");
        assert_eq!(&rows[0][3], "2");
    }

    #[test]
    fn missing_minutes_are_empty_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_agents(&[AgentRow {
            agent_id:           4,
            archetype:          "park_visitor".into(),
            age_class:          "no_preference",
            expedited_ability:  true,
            arrival:            Some(15),
            exit:               None,
            rides_completed:    2,
            activities_visited: 1,
        }])
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join("agents.csv"));
        assert_eq!(&rows[0][3], "1");
        assert_eq!(&rows[0][4], "15");
        assert_eq!(&rows[0][5], "");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use park_agent::ArchetypeMix;
    use park_behavior::ParkBehavior;
    use park_core::{Minute, ParkConfig};
    use park_schedule::ArrivalSchedule;
    use park_sim::{ParkBuilder, ParkEngine};
    use park_venue::{ActivitySpec, AttractionSpec};

    use crate::row::{ActivityHistoryRow, AgentRow, AttractionHistoryRow, ParkHistoryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, ParkOutputObserver};

    /// Ten visitors at minute 0, closing at minute 30.
    fn small_park() -> ParkEngine<ParkBehavior> {
        let config = ParkConfig { seed: 3, total_daily_agents: 10, ..ParkConfig::default() };
        let mut counts = vec![0; 60];
        counts[0] = 10;
        ParkBuilder::new(config, ParkBehavior::default())
            .schedule(ArrivalSchedule::from_counts(counts, Minute(30)))
            .attractions(vec![AttractionSpec {
                name:                  "Coaster".into(),
                run_time:              5,
                hourly_throughput:     60,
                popularity:            5,
                child_eligible:        true,
                adult_eligible:        true,
                expedited_queue:       false,
                expedited_queue_ratio: 0.0,
            }])
            .activities(vec![ActivitySpec { name: "Gift Shop".into(), popularity: 3, mean_time: 10.0 }])
            .mix(ArchetypeMix::from_pairs([("park_visitor", 100.0)]))
            .build()
            .unwrap()
    }

    #[test]
    fn writes_one_row_per_minute() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = small_park();
        let mut obs = ParkOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        engine.run(&mut obs);
        assert!(obs.take_error().is_none());

        let minutes = engine.clock.now.0 as usize;
        let count = |file: &str| {
            csv::Reader::from_path(dir.path().join(file)).unwrap().records().count()
        };
        assert_eq!(count("park_history.csv"), minutes);
        assert_eq!(count("attraction_history.csv"), minutes);
        assert_eq!(count("activity_history.csv"), minutes);
        assert_eq!(count("agents.csv"), 10);
    }

    #[test]
    fn agent_rows_match_engine() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = small_park();
        let mut obs = ParkOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        engine.run(&mut obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("agents.csv")).unwrap();
        for (record, agent) in rdr.records().map(|r| r.unwrap()).zip(&engine.agents) {
            assert_eq!(&record[0], agent.id().0.to_string());
            assert_eq!(&record[1], "park_visitor");
            assert_eq!(&record[6], agent.total_rides().to_string());
        }
    }

    /// Fails every park-history write.
    struct FailingWriter {
        finished: bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_attractions(&mut self, _: &[AttractionHistoryRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_activities(&mut self, _: &[ActivityHistoryRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_park(&mut self, row: &ParkHistoryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other(format!("minute {}", row.minute))))
        }
        fn write_agents(&mut self, _: &[AgentRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_and_still_finishes() {
        let mut engine = small_park();
        let mut obs = ParkOutputObserver::new(FailingWriter { finished: false });
        engine.run(&mut obs);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("minute 0"), "{err}");
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().finished);
    }
}
