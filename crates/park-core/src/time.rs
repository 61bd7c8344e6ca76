//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Minute` counter measured from park
//! opening.  One engine tick is exactly one simulated minute; hours are
//! derived as `minute / 60`.  Integer minutes keep every queue and pass
//! calculation exact.
//!
//! `ParkClock` couples the current minute with the closing minute derived
//! from the arrival schedule.  Closing time is fixed at setup and never
//! changes during a run.

use std::fmt;

// ── Minute ────────────────────────────────────────────────────────────────────

/// An absolute simulated minute since park opening.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u32);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// Minutes in one operating hour.
    pub const PER_HOUR: u32 = 60;

    /// Minutes elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Minute) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    /// Whole hours elapsed since opening (`minute / 60`).
    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / Self::PER_HOUR
    }

    /// First minute of `hour`.
    #[inline]
    pub fn from_hour(hour: u32) -> Minute {
        Minute(hour * Self::PER_HOUR)
    }

    /// `true` on the first minute of every hour.
    #[inline]
    pub fn is_hour_start(self) -> bool {
        self.0.is_multiple_of(Self::PER_HOUR)
    }
}

impl std::ops::Add<u32> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u32) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl std::ops::Sub for Minute {
    type Output = i64;
    /// Signed difference in minutes.
    #[inline]
    fn sub(self, rhs: Minute) -> i64 {
        i64::from(self.0) - i64::from(rhs.0)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

// ── ParkClock ─────────────────────────────────────────────────────────────────

/// Current minute plus the fixed closing minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParkClock {
    /// The current minute, advanced by `ParkClock::advance()` each tick.
    pub now: Minute,
    /// First minute at which the park no longer admits decisions other than
    /// leaving and no longer issues expedited passes.
    pub close: Minute,
}

impl ParkClock {
    pub fn new(close: Minute) -> Self {
        Self { now: Minute::ZERO, close }
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn advance(&mut self) {
        self.now = Minute(self.now.0 + 1);
    }

    /// `true` once `now >= close`.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.now >= self.close
    }

    /// Whole operating hours left before closing (0 once closed).
    #[inline]
    pub fn remaining_hours(&self) -> u32 {
        self.close.since(self.now) / Minute::PER_HOUR
    }
}

impl fmt::Display for ParkClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (closes {})", self.now, self.close)
    }
}
