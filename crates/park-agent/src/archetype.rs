//! Behavior archetypes and the mix visitors are drawn from.
//!
//! An archetype is a named bundle of preferences.  Each visitor is assigned
//! one by a weighted draw over the [`ArchetypeMix`], then an age class by a
//! weighted draw over that archetype's three age-class fractions.

use serde::Deserialize;

use crate::{AgentError, AgentResult};

/// Slack below 1.0 accepted for age-class fractions.
const AGE_SUM_MIN: f64 = 0.98;
/// Rounding slack above 1.0 from summing decimal fractions.
const AGE_SUM_EPSILON: f64 = 1e-9;
const MIX_TOTAL: f64 = 100.0;
const MIX_EPSILON: f64 = 1e-6;

// ── ArchetypeParams ───────────────────────────────────────────────────────────

/// One archetype row of the park definition.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArchetypeParams {
    pub name:                   String,
    /// Mean preferred stay in minutes; each visitor draws around it.
    pub stay_time_preference:   f64,
    pub allow_repeats:          bool,
    pub attraction_preference:  f64,
    /// Standby wait tolerance in minutes.
    pub wait_threshold:         u32,
    pub percent_no_child_rides: f64,
    pub percent_no_adult_rides: f64,
    pub percent_no_preference:  f64,
}

impl ArchetypeParams {
    /// Age-class weights in [`AgeClass::ALL`](crate::AgeClass::ALL) order.
    pub fn age_weights(&self) -> [f64; 3] {
        [self.percent_no_child_rides, self.percent_no_adult_rides, self.percent_no_preference]
    }

    pub fn validate(&self) -> AgentResult<()> {
        for (field, value) in [
            ("stay_time_preference",   self.stay_time_preference),
            ("percent_no_child_rides", self.percent_no_child_rides),
            ("percent_no_adult_rides", self.percent_no_adult_rides),
            ("percent_no_preference",  self.percent_no_preference),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AgentError::NegativeParameter { name: self.name.clone(), field, value });
            }
        }
        let sum: f64 = self.age_weights().iter().sum();
        if !(AGE_SUM_MIN..=1.0 + AGE_SUM_EPSILON).contains(&sum) {
            return Err(AgentError::AgeClassSum { name: self.name.clone(), sum });
        }
        if !(0.0..=1.0).contains(&self.attraction_preference) {
            return Err(AgentError::AttractionPreference {
                name:  self.name.clone(),
                value: self.attraction_preference,
            });
        }
        Ok(())
    }

    fn preset(
        name: &str,
        stay_time_preference: f64,
        allow_repeats: bool,
        attraction_preference: f64,
        wait_threshold: u32,
    ) -> Self {
        Self {
            name: name.to_owned(),
            stay_time_preference,
            allow_repeats,
            attraction_preference,
            wait_threshold,
            percent_no_child_rides: 0.0,
            percent_no_adult_rides: 1.0,
            percent_no_preference:  0.0,
        }
    }
}

// ── ArchetypeTable ────────────────────────────────────────────────────────────

/// All archetypes of a park, in definition order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ArchetypeTable {
    entries: Vec<ArchetypeParams>,
}

impl ArchetypeTable {
    /// Validate every row and reject duplicate names.
    pub fn new(entries: Vec<ArchetypeParams>) -> AgentResult<Self> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> AgentResult<()> {
        for (i, params) in self.entries.iter().enumerate() {
            params.validate()?;
            if self.entries[..i].iter().any(|p| p.name == params.name) {
                return Err(AgentError::DuplicateArchetype(params.name.clone()));
            }
        }
        Ok(())
    }

    /// The six stock archetypes, from ride enthusiasts to activity
    /// enthusiasts.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ArchetypeParams::preset("ride_enthusiast",     540.0, true,  0.6, 480),
                ArchetypeParams::preset("ride_favorer",        480.0, true,  0.5, 420),
                ArchetypeParams::preset("park_tourer",         420.0, false, 0.4, 360),
                ArchetypeParams::preset("park_visitor",        360.0, false, 0.3, 240),
                ArchetypeParams::preset("activity_favorer",    300.0, false, 0.2, 180),
                ArchetypeParams::preset("activity_enthusiast", 240.0, false, 0.2,  90),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&ArchetypeParams> {
        self.entries.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeParams> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── ArchetypeMix ──────────────────────────────────────────────────────────────

/// Percentage of the day's visitors drawn from one archetype.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArchetypeShare {
    pub archetype: String,
    pub percent:   f64,
}

/// The archetype distribution of a run.  Percentages sum to 100.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ArchetypeMix {
    shares: Vec<ArchetypeShare>,
}

impl ArchetypeMix {
    pub fn new(shares: Vec<ArchetypeShare>) -> Self {
        Self { shares }
    }

    /// Build from `(archetype, percent)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            shares: pairs
                .into_iter()
                .map(|(name, percent)| ArchetypeShare { archetype: name.to_owned(), percent })
                .collect(),
        }
    }

    /// Check the percentages and that every named archetype exists in
    /// `table`.
    pub fn validate(&self, table: &ArchetypeTable) -> AgentResult<()> {
        let mut sum = 0.0;
        for share in &self.shares {
            if !share.percent.is_finite() || share.percent < 0.0 {
                return Err(AgentError::MixSum(share.percent));
            }
            if table.get(&share.archetype).is_none() {
                return Err(AgentError::UnknownArchetype(share.archetype.clone()));
            }
            sum += share.percent;
        }
        if (sum - MIX_TOTAL).abs() > MIX_EPSILON {
            return Err(AgentError::MixSum(sum));
        }
        Ok(())
    }

    pub fn shares(&self) -> &[ArchetypeShare] {
        &self.shares
    }

    /// Selection weights, aligned with [`shares`](Self::shares).
    pub fn weights(&self) -> Vec<f64> {
        self.shares.iter().map(|s| s.percent).collect()
    }
}
