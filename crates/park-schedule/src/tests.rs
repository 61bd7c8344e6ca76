//! Unit tests for park-schedule.

use park_core::Minute;

use crate::{ArrivalSchedule, HourlyDistribution};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Nine open hours followed by a closing bucket.
fn day_distribution() -> HourlyDistribution {
    HourlyDistribution::from_percentages(&[10.0, 15.0, 20.0, 15.0, 10.0, 10.0, 10.0, 5.0, 5.0, 0.0])
        .unwrap()
}

// ── HourlyDistribution ────────────────────────────────────────────────────────

#[cfg(test)]
mod distribution {
    use super::*;
    use crate::ScheduleError;

    #[test]
    fn rejects_sum_not_100() {
        let err = HourlyDistribution::from_percentages(&[50.0, 40.0]).unwrap_err();
        assert!(matches!(err, ScheduleError::PercentSum(s) if (s - 90.0).abs() < 1e-9));
    }

    #[test]
    fn rejects_more_than_24_hours() {
        let pct = vec![4.0; 25];
        let err = HourlyDistribution::from_percentages(&pct).unwrap_err();
        assert!(matches!(err, ScheduleError::TooManyHours(25)));
    }

    #[test]
    fn rejects_negative_percent() {
        let err = HourlyDistribution::from_percentages(&[110.0, -10.0]).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidPercent { .. }));
    }

    #[test]
    fn accepts_fractional_percentages() {
        assert!(HourlyDistribution::from_percentages(&[33.3, 33.3, 33.4]).is_ok());
    }

    #[test]
    fn close_is_first_zero_hour() {
        let dist = HourlyDistribution::from_percentages(&[50.0, 50.0, 0.0, 0.0]).unwrap();
        assert_eq!(dist.closing_hour(), Some(2));
        assert_eq!(dist.close_minute(), Minute(120));
    }

    #[test]
    fn close_without_zero_hour_is_end_of_table() {
        let dist = HourlyDistribution::from_percentages(&[60.0, 40.0]).unwrap();
        assert_eq!(dist.closing_hour(), None);
        assert_eq!(dist.close_minute(), Minute(120));
    }
}

// ── ArrivalSchedule ───────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival {
    use super::*;

    #[test]
    fn one_bucket_per_minute_of_each_hour() {
        let s = ArrivalSchedule::generate(&day_distribution(), 1_000, false, 7).unwrap();
        assert_eq!(s.per_minute().len(), 600);
        assert_eq!(s.horizon(), Minute(600));
        assert_eq!(s.close(), Minute(540));
    }

    #[test]
    fn closed_hours_are_empty() {
        let s = ArrivalSchedule::generate(&day_distribution(), 5_000, false, 7).unwrap();
        assert!(s.per_minute()[540..].iter().all(|&n| n == 0));
    }

    #[test]
    fn hours_after_close_are_not_sampled() {
        // A non-zero share after the closing bucket still produces nothing.
        let dist = HourlyDistribution::from_percentages(&[60.0, 0.0, 40.0]).unwrap();
        let s = ArrivalSchedule::generate(&dist, 10_000, false, 1).unwrap();
        assert!(s.per_minute()[60..].iter().all(|&n| n == 0));
    }

    #[test]
    fn same_seed_same_schedule() {
        let a = ArrivalSchedule::generate(&day_distribution(), 3_000, false, 99).unwrap();
        let b = ArrivalSchedule::generate(&day_distribution(), 3_000, false, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_differs() {
        let a = ArrivalSchedule::generate(&day_distribution(), 3_000, false, 1).unwrap();
        let b = ArrivalSchedule::generate(&day_distribution(), 3_000, false, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn hour_draws_are_independent_of_other_hours() {
        // Changing hour 1's share must not disturb hour 0's samples.
        let a = HourlyDistribution::from_percentages(&[50.0, 50.0, 0.0]).unwrap();
        let b = HourlyDistribution::from_percentages(&[50.0, 30.0, 20.0]).unwrap();
        let sa = ArrivalSchedule::generate(&a, 6_000, false, 11).unwrap();
        let sb = ArrivalSchedule::generate(&b, 6_000, false, 11).unwrap();
        assert_eq!(sa.per_minute()[..60], sb.per_minute()[..60]);
    }

    #[test]
    fn sampled_total_is_near_target() {
        let s = ArrivalSchedule::generate(&day_distribution(), 10_000, false, 5).unwrap();
        let total = f64::from(s.total());
        assert!((total - 10_000.0).abs() < 500.0, "got {total}");
    }

    #[test]
    fn exact_total_is_enforced() {
        for seed in 0..20 {
            for target in [1, 37, 999, 4_321] {
                let s = ArrivalSchedule::generate(&day_distribution(), target, true, seed).unwrap();
                assert_eq!(s.total(), target, "seed {seed} target {target}");
            }
        }
    }

    #[test]
    fn exact_total_with_single_open_hour() {
        let dist = HourlyDistribution::from_percentages(&[100.0, 0.0]).unwrap();
        let s = ArrivalSchedule::generate(&dist, 250, true, 3).unwrap();
        assert_eq!(s.total(), 250);
        assert!(s.per_minute()[60..].iter().all(|&n| n == 0));
    }

    #[test]
    fn arrivals_beyond_horizon_are_zero() {
        let s = ArrivalSchedule::from_counts(vec![1, 2, 3], Minute(3));
        assert_eq!(s.arrivals_at(Minute(1)), 2);
        assert_eq!(s.arrivals_at(Minute(50)), 0);
        assert_eq!(s.total(), 6);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{ScheduleError, load_hourly_reader};

    #[test]
    fn loads_rows_in_order() {
        let csv = "hour,percent\n9am,40\n10am,60\n11am,0\n";
        let dist = load_hourly_reader(Cursor::new(csv)).unwrap();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.hours()[0].hour, "9am");
        assert_eq!(dist.hours()[1].percent, 60.0);
        assert_eq!(dist.closing_hour(), Some(2));
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "hour,percent\n9am,lots\n";
        let err = load_hourly_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn loaded_table_is_validated() {
        let csv = "hour,percent\n9am,40\n10am,40\n";
        let err = load_hourly_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::PercentSum(_)));
    }
}
