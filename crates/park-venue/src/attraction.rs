//! Capacity-bounded attractions with standby and expedited queues.
//!
//! # Run cycle
//!
//! ```text
//! remaining == 0  →  riders exit, next batch boards, remaining = run_time
//! every minute    →  remaining -= 1          (pass_time)
//! ```
//!
//! Each boarding reserves `floor(capacity * ratio)` seats for the expedited
//! queue.  Reserved seats the expedited queue cannot fill go to standby.
//!
//! # Pass budget
//!
//! The number of expedited passes still issuable is recomputed every minute
//! so that outstanding promises never exceed the expedited seats left before
//! closing:
//!
//! ```text
//! rate   = capacity * (60 / run_time) * ratio          (expedited seats/hour)
//! budget = rate * remaining_hours - max(0, distributed - rate * elapsed_hours)
//! ```
//!
//! At or after closing the budget is 0.

use std::collections::VecDeque;

use serde::Deserialize;

use park_core::{AgentId, AttractionId, Minute, ParkClock};

use crate::{AttractionSample, History, VenueError, VenueResult};

/// Valid attraction popularity weights.
pub const POPULARITY_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

// ── AttractionSpec ────────────────────────────────────────────────────────────

/// Static attraction characteristics from the park definition.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AttractionSpec {
    pub name:              String,
    /// Minutes per ride cycle.
    pub run_time:          u32,
    /// Riders per hour at full load.
    pub hourly_throughput: u32,
    /// Selection weight, 1–10.
    pub popularity:        u32,
    pub child_eligible:    bool,
    pub adult_eligible:    bool,
    /// Whether the attraction runs an expedited queue and issues passes.
    #[serde(default)]
    pub expedited_queue:   bool,
    /// Fraction of each cycle's seats reserved for the expedited queue.
    #[serde(default)]
    pub expedited_queue_ratio: f64,
}

impl AttractionSpec {
    /// Riders boarded per cycle: `floor(hourly_throughput * run_time / 60)`.
    pub fn capacity(&self) -> VenueResult<u32> {
        self.hourly_throughput
            .checked_mul(self.run_time)
            .map(|seat_minutes| seat_minutes / Minute::PER_HOUR)
            .ok_or_else(|| VenueError::ThroughputOverflow {
                name:              self.name.clone(),
                hourly_throughput: self.hourly_throughput,
                run_time:          self.run_time,
            })
    }

    /// Check popularity, run time, capacity and the expedited seat ratio.
    pub fn validate(&self) -> VenueResult<()> {
        if !POPULARITY_RANGE.contains(&self.popularity) {
            return Err(VenueError::InvalidPopularity {
                kind:  "attraction",
                name:  self.name.clone(),
                value: self.popularity,
                min:   *POPULARITY_RANGE.start(),
                max:   *POPULARITY_RANGE.end(),
            });
        }
        if self.run_time == 0 {
            return Err(VenueError::InvalidRunTime { name: self.name.clone() });
        }
        let capacity = self.capacity()?;
        if capacity == 0 {
            return Err(VenueError::ZeroCapacity {
                name:              self.name.clone(),
                hourly_throughput: self.hourly_throughput,
                run_time:          self.run_time,
            });
        }
        if !(0.0..=1.0).contains(&self.expedited_queue_ratio) {
            return Err(VenueError::InvalidRatio {
                name:  self.name.clone(),
                ratio: self.expedited_queue_ratio,
            });
        }
        if self.expedited_queue && expedited_seats(capacity, self.expedited_queue_ratio) == 0 {
            return Err(VenueError::NoExpeditedSeats {
                name:     self.name.clone(),
                capacity,
                ratio:    self.expedited_queue_ratio,
            });
        }
        Ok(())
    }
}

#[inline]
fn expedited_seats(capacity: u32, ratio: f64) -> u32 {
    (f64::from(capacity) * ratio).floor() as u32
}

// ── CycleOutcome ──────────────────────────────────────────────────────────────

/// Result of one [`Attraction::step`].
///
/// Both lists are empty while a cycle is still running.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Riders of the cycle that just finished.
    pub exited:            Vec<AgentId>,
    /// Riders of the cycle that just started, expedited riders first.
    pub boarded:           Vec<AgentId>,
    /// How many of `boarded` came from the expedited queue.
    pub expedited_boarded: usize,
}

#[derive(Copy, Clone)]
enum Measured {
    Standby,
    Expedited,
}

// ── Attraction ────────────────────────────────────────────────────────────────

/// A ride: capacity, two queues, a run cycle, and a pass budget.
pub struct Attraction {
    id:                 AttractionId,
    spec:               AttractionSpec,
    capacity:           u32,
    /// `floor(capacity * ratio)`, or 0 without an expedited queue.
    exp_seats:          u32,
    standby:            VecDeque<AgentId>,
    expedited:          VecDeque<AgentId>,
    riders:             Vec<AgentId>,
    run_time_remaining: u32,
    pass_budget:        f64,
    passes_distributed: u32,
    history:            History<AttractionSample>,
}

impl Attraction {
    /// Validate `spec` and build an idle attraction with empty queues.
    pub fn new(id: AttractionId, spec: AttractionSpec) -> VenueResult<Self> {
        spec.validate()?;
        let capacity = spec.capacity()?;
        let exp_seats = if spec.expedited_queue {
            expedited_seats(capacity, spec.expedited_queue_ratio)
        } else {
            0
        };
        Ok(Self {
            id,
            spec,
            capacity,
            exp_seats,
            standby:            VecDeque::new(),
            expedited:          VecDeque::new(),
            riders:             Vec::new(),
            run_time_remaining: 0,
            pass_budget:        0.0,
            passes_distributed: 0,
            history:            History::new(),
        })
    }

    // ── Wait estimates ────────────────────────────────────────────────────

    /// Estimated standby wait in minutes.
    ///
    /// Runs whole cycles on local copies of both queue lengths until fewer
    /// than `capacity` standby visitors remain; live state is not touched.
    pub fn wait_time(&self) -> u32 {
        if !self.spec.expedited_queue {
            let cycles = self.standby.len() as u32 / self.capacity;
            return cycles * self.spec.run_time + self.run_time_remaining;
        }
        self.simulate_wait(Measured::Standby)
    }

    /// Estimated expedited wait in minutes; always 0 without an expedited
    /// queue.
    pub fn exp_wait_time(&self) -> u32 {
        if !self.spec.expedited_queue {
            return 0;
        }
        self.simulate_wait(Measured::Expedited)
    }

    fn simulate_wait(&self, measured: Measured) -> u32 {
        let capacity = self.capacity;
        let exp_seats = self.exp_seats;
        let standby_seats = capacity - exp_seats;
        let mut standby = self.standby.len() as u32;
        let mut expedited = self.expedited.len() as u32;

        // Terminates because exp_seats >= 1 (validated) and every cycle
        // shrinks the expedited queue or, once it fits, the standby queue.
        let mut cycles = 0;
        loop {
            let remaining = match measured {
                Measured::Standby   => standby,
                Measured::Expedited => expedited,
            };
            if remaining < capacity {
                break;
            }
            if expedited > exp_seats {
                expedited -= exp_seats;
                standby = standby.saturating_sub(standby_seats);
            } else {
                standby = standby.saturating_sub(capacity - expedited);
                expedited = 0;
            }
            cycles += 1;
        }
        cycles * self.spec.run_time + self.run_time_remaining
    }

    // ── Queues and passes ─────────────────────────────────────────────────

    /// Append `agent` to the standby queue.
    pub fn add_to_queue(&mut self, agent: AgentId) {
        self.standby.push_back(agent);
    }

    /// Append `agent` to the expedited queue and return the expedited wait
    /// estimate including it.
    pub fn add_to_exp_queue(&mut self, agent: AgentId) -> u32 {
        self.expedited.push_back(agent);
        self.exp_wait_time()
    }

    /// Drop `agent` from the standby queue.  Returns `false` if it was not
    /// queued.
    pub fn leave_queue(&mut self, agent: AgentId) -> bool {
        match self.standby.iter().position(|&a| a == agent) {
            Some(pos) => {
                self.standby.remove(pos);
                true
            }
            None => false,
        }
    }

    /// `true` if a pass can be issued right now.
    #[inline]
    pub fn has_passes(&self) -> bool {
        self.spec.expedited_queue && self.pass_budget > 0.0
    }

    /// Issue one pass: consumes budget and counts it as distributed.
    pub fn issue_pass(&mut self) {
        self.pass_budget -= 1.0;
        self.passes_distributed += 1;
    }

    /// Take back an unredeemed pass from `agent` and drop it from the
    /// expedited queue.  Returns `false` if `agent` was not queued.
    pub fn return_pass(&mut self, agent: AgentId) -> bool {
        self.pass_budget += 1.0;
        self.passes_distributed = self.passes_distributed.saturating_sub(1);
        match self.expedited.iter().position(|&a| a == agent) {
            Some(pos) => {
                self.expedited.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Recompute the issuable pass budget for the clock's minute (see
    /// module docs).
    pub fn refresh_pass_budget(&mut self, clock: ParkClock) {
        if !self.spec.expedited_queue {
            return;
        }
        if clock.is_closed() {
            self.pass_budget = 0.0;
            return;
        }
        let rate = self.expedited_rate();
        let remaining_hours = f64::from(clock.remaining_hours());
        let elapsed_hours = f64::from(clock.now.hour());
        let overdrawn = (f64::from(self.passes_distributed) - rate * elapsed_hours).max(0.0);
        self.pass_budget = rate * remaining_hours - overdrawn;
    }

    /// Expedited seats per operating hour.
    pub fn expedited_rate(&self) -> f64 {
        f64::from(self.capacity)
            * (f64::from(Minute::PER_HOUR) / f64::from(self.spec.run_time))
            * self.spec.expedited_queue_ratio
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Refresh the pass budget and, if the current cycle has finished,
    /// unload the riders and board the next batch.
    pub fn step(&mut self, clock: ParkClock) -> CycleOutcome {
        self.refresh_pass_budget(clock);

        if self.run_time_remaining > 0 {
            return CycleOutcome::default();
        }

        let exited = std::mem::take(&mut self.riders);
        self.run_time_remaining = self.spec.run_time;

        let capacity = self.capacity as usize;
        let exp_cap = self.exp_seats as usize;
        let standby_cap = if self.expedited.len() < exp_cap {
            capacity - self.expedited.len()
        } else {
            capacity - exp_cap
        };

        let from_expedited = exp_cap.min(self.expedited.len());
        self.riders.extend(self.expedited.drain(..from_expedited));
        let from_standby = standby_cap.min(self.standby.len());
        self.riders.extend(self.standby.drain(..from_standby));

        CycleOutcome {
            exited,
            boarded:           self.riders.clone(),
            expedited_boarded: from_expedited,
        }
    }

    /// One minute of the current cycle elapses.
    #[inline]
    pub fn pass_time(&mut self) {
        self.run_time_remaining = self.run_time_remaining.saturating_sub(1);
    }

    /// Append this minute's queue metrics to the history.
    pub fn record_history(&mut self, now: Minute) {
        let sample = self.sample();
        self.history.record(now, sample);
    }

    /// Current queue metrics.
    pub fn sample(&self) -> AttractionSample {
        AttractionSample {
            queue_length:     self.standby.len() as u32,
            wait_time:        self.wait_time(),
            exp_queue_length: self.expedited.len() as u32,
            exp_wait_time:    self.exp_wait_time(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AttractionId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    #[inline]
    pub fn spec(&self) -> &AttractionSpec {
        &self.spec
    }

    #[inline]
    pub fn popularity(&self) -> u32 {
        self.spec.popularity
    }

    #[inline]
    pub fn run_time(&self) -> u32 {
        self.spec.run_time
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Expedited seats per boarding.
    #[inline]
    pub fn expedited_seats(&self) -> u32 {
        self.exp_seats
    }

    #[inline]
    pub fn offers_expedited(&self) -> bool {
        self.spec.expedited_queue
    }

    #[inline]
    pub fn child_eligible(&self) -> bool {
        self.spec.child_eligible
    }

    #[inline]
    pub fn adult_eligible(&self) -> bool {
        self.spec.adult_eligible
    }

    pub fn standby_queue(&self) -> &VecDeque<AgentId> {
        &self.standby
    }

    pub fn expedited_queue(&self) -> &VecDeque<AgentId> {
        &self.expedited
    }

    /// Agents on the ride in the current cycle.
    pub fn riders(&self) -> &[AgentId] {
        &self.riders
    }

    #[inline]
    pub fn run_time_remaining(&self) -> u32 {
        self.run_time_remaining
    }

    /// Passes still issuable before closing.
    #[inline]
    pub fn pass_budget(&self) -> f64 {
        self.pass_budget
    }

    /// Passes issued and not returned.
    #[inline]
    pub fn passes_distributed(&self) -> u32 {
        self.passes_distributed
    }

    pub fn history(&self) -> &History<AttractionSample> {
        &self.history
    }
}
