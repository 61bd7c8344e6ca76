//! Append-only, minute-indexed metric history.

use park_core::Minute;

/// Per-minute samples, recorded once per tick and never rewritten.
#[derive(Clone, Debug, PartialEq)]
pub struct History<T> {
    samples: Vec<(Minute, T)>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self { samples: Vec::new() }
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the sample for `minute`.
    ///
    /// Minutes must be strictly increasing.  Debug builds panic on a sample
    /// at or before the latest recorded minute; release builds drop it.
    pub fn record(&mut self, minute: Minute, value: T) {
        let in_order = self.samples.last().is_none_or(|(last, _)| *last < minute);
        debug_assert!(in_order, "history sample for {minute} is not after the latest one");
        if in_order {
            self.samples.push((minute, value));
        }
    }

    /// The sample recorded at exactly `minute`.
    pub fn get(&self, minute: Minute) -> Option<&T> {
        self.samples
            .binary_search_by_key(&minute, |(m, _)| *m)
            .ok()
            .map(|i| &self.samples[i].1)
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<&(Minute, T)> {
        self.samples.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Minute, T)> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// One minute of attraction metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttractionSample {
    /// Standby queue length.
    pub queue_length:     u32,
    /// Estimated standby wait (minutes).
    pub wait_time:        u32,
    /// Expedited queue length.
    pub exp_queue_length: u32,
    /// Estimated expedited wait (minutes).
    pub exp_wait_time:    u32,
}

/// One minute of activity metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActivitySample {
    /// Visitors present.
    pub visitors: u32,
}
