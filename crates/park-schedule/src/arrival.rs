//! `ArrivalSchedule` — precomputed visitor arrivals per minute.

use park_core::{DrawRng, Minute, SeedStream};

use crate::{HourlyDistribution, ScheduleResult};

/// Number of new visitors arriving at each minute of the day.
///
/// Built once at setup and consumed by the engine tick loop; never changes
/// afterwards.  Index `m` of [`per_minute`](Self::per_minute) is minute `m`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrivalSchedule {
    per_minute: Vec<u32>,
    close:      Minute,
}

impl ArrivalSchedule {
    /// Sample a schedule from `distribution`.
    ///
    /// Each operating hour before closing draws 60 independent
    /// `Poisson(total * pct / 100 / 60)` samples from an RNG seeded by
    /// `(seed + hour)`, so one hour's draws never depend on another's.
    /// Hours at or after closing contribute zero arrivals.
    ///
    /// With `exact_total`, the sampled schedule is corrected one visitor at a
    /// time: a uniformly chosen minute with positive count is decremented (or
    /// incremented) until the sum equals `total_daily_agents`.
    pub fn generate(
        distribution:       &HourlyDistribution,
        total_daily_agents: u32,
        exact_total:        bool,
        seed:               u64,
    ) -> ScheduleResult<Self> {
        distribution.validate()?;

        let close = distribution.close_minute();
        let mut per_minute = Vec::with_capacity(distribution.len() * 60);

        for (hour, share) in distribution.hours().iter().enumerate() {
            if Minute::from_hour(hour as u32) >= close {
                per_minute.extend(std::iter::repeat_n(0, Minute::PER_HOUR as usize));
                continue;
            }
            let hour_agents = f64::from(total_daily_agents) * share.percent * 0.01;
            let lambda = hour_agents / f64::from(Minute::PER_HOUR);

            let mut rng = DrawRng::scoped(SeedStream::ArrivalHour, seed, &[hour as u64]);
            per_minute.extend((0..Minute::PER_HOUR).map(|_| rng.poisson(lambda)));
        }

        let mut schedule = Self { per_minute, close };
        if exact_total {
            schedule.correct_total(total_daily_agents, seed);
        }

        log::debug!(
            "arrival schedule: {} minutes, {} visitors, closes at {}",
            schedule.per_minute.len(),
            schedule.total(),
            schedule.close,
        );
        Ok(schedule)
    }

    /// Build a schedule from explicit per-minute counts (tests and replays).
    pub fn from_counts(per_minute: Vec<u32>, close: Minute) -> Self {
        Self { per_minute, close }
    }

    /// Nudge single minutes until the schedule sums to `target`.
    ///
    /// Decrements only touch minutes with a positive count, so no minute can
    /// go negative.  Increments prefer positive minutes as well; if none
    /// exist, any open minute (or any minute at all, for a schedule that is
    /// closed from the start) is eligible.
    fn correct_total(&mut self, target: u32, seed: u64) {
        let mut rng = DrawRng::scoped(SeedStream::ArrivalCorrection, seed, &[]);
        let mut total = self.total();
        if total != target {
            log::debug!("correcting arrival total {total} -> {target}");
        }

        while total > target {
            let positive = self.positive_minutes();
            let Some(&minute) = rng.choose(&positive) else { break };
            self.per_minute[minute] -= 1;
            total -= 1;
        }

        while total < target {
            let mut candidates = self.positive_minutes();
            if candidates.is_empty() {
                let open = (self.close.0 as usize).min(self.per_minute.len());
                let upper = if open > 0 { open } else { self.per_minute.len() };
                candidates = (0..upper).collect();
            }
            let Some(&minute) = rng.choose(&candidates) else { break };
            self.per_minute[minute] += 1;
            total += 1;
        }
    }

    fn positive_minutes(&self) -> Vec<usize> {
        self.per_minute
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Visitors arriving at `minute` (0 beyond the schedule horizon).
    #[inline]
    pub fn arrivals_at(&self, minute: Minute) -> u32 {
        self.per_minute.get(minute.0 as usize).copied().unwrap_or(0)
    }

    /// Total visitors over the whole day.
    pub fn total(&self) -> u32 {
        self.per_minute.iter().sum()
    }

    /// Closing minute (first minute of the first zero-percent hour).
    #[inline]
    pub fn close(&self) -> Minute {
        self.close
    }

    /// First minute past the last scheduled minute.
    #[inline]
    pub fn horizon(&self) -> Minute {
        Minute(self.per_minute.len() as u32)
    }

    /// Raw per-minute counts.
    pub fn per_minute(&self) -> &[u32] {
        &self.per_minute
    }
}
