//! Fluent builder for constructing a [`ParkEngine`].

use park_agent::{ArchetypeMix, ArchetypeTable, PopulationBuilder};
use park_behavior::BehaviorModel;
use park_core::{ActivityId, AttractionId, ParkClock, ParkConfig};
use park_schedule::{ArrivalSchedule, HourlyDistribution};
use park_venue::{Activity, ActivitySpec, Attraction, AttractionSpec};

use crate::{ParkEngine, SimError, SimResult};

/// Fluent builder for [`ParkEngine<B>`].
///
/// # Required inputs
///
/// - [`ParkConfig`] — seed, daily total, expedited policy, …
/// - `B: BehaviorModel` — usually [`park_behavior::ParkBehavior`]
/// - an arrival source: `.hourly(d)` or `.schedule(s)`
/// - at least one attraction or activity
/// - an archetype mix (`.mix(m)`)
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.archetypes(t)`  | `ArchetypeTable::standard()`     |
/// | `.schedule(s)`    | sampled from `.hourly(d)`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = ParkBuilder::new(config, ParkBehavior::default())
///     .hourly(hourly)
///     .attractions(attractions)
///     .activities(activities)
///     .mix(mix)
///     .build()?;
/// engine.run(&mut NoopObserver);
/// ```
pub struct ParkBuilder<B: BehaviorModel> {
    config:      ParkConfig,
    behavior:    B,
    hourly:      Option<HourlyDistribution>,
    schedule:    Option<ArrivalSchedule>,
    attractions: Vec<AttractionSpec>,
    activities:  Vec<ActivitySpec>,
    archetypes:  ArchetypeTable,
    mix:         Option<ArchetypeMix>,
}

impl<B: BehaviorModel> ParkBuilder<B> {
    pub fn new(config: ParkConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            hourly:      None,
            schedule:    None,
            attractions: Vec::new(),
            activities:  Vec::new(),
            archetypes:  ArchetypeTable::standard(),
            mix:         None,
        }
    }

    /// Hourly arrival percentages; the schedule is sampled from these.
    pub fn hourly(mut self, hourly: HourlyDistribution) -> Self {
        self.hourly = Some(hourly);
        self
    }

    /// A precomputed schedule.  Takes precedence over [`hourly`](Self::hourly).
    pub fn schedule(mut self, schedule: ArrivalSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn attractions(mut self, specs: Vec<AttractionSpec>) -> Self {
        self.attractions = specs;
        self
    }

    pub fn activities(mut self, specs: Vec<ActivitySpec>) -> Self {
        self.activities = specs;
        self
    }

    pub fn archetypes(mut self, table: ArchetypeTable) -> Self {
        self.archetypes = table;
        self
    }

    pub fn mix(mut self, mix: ArchetypeMix) -> Self {
        self.mix = Some(mix);
        self
    }

    /// Validate every input, sample the schedule, draw the population and
    /// return a ready-to-run [`ParkEngine`].
    ///
    /// Nothing is simulated on failure.
    pub fn build(self) -> SimResult<ParkEngine<B>> {
        self.config.expedited.validate()?;

        if self.attractions.is_empty() && self.activities.is_empty() {
            return Err(SimError::Config("park has no attractions and no activities".into()));
        }
        let mix = self
            .mix
            .ok_or_else(|| SimError::Config("no archetype mix given".into()))?;

        // ── Registries, popularity ascending (stable) ─────────────────────
        let attractions = build_attractions(self.attractions)?;
        let activities = build_activities(self.activities, self.config.seed)?;

        // ── Arrival schedule ──────────────────────────────────────────────
        let schedule = match (self.schedule, self.hourly) {
            (Some(schedule), _) => schedule,
            (None, Some(hourly)) => ArrivalSchedule::generate(
                &hourly,
                self.config.total_daily_agents,
                self.config.exact_arrivals,
                self.config.seed,
            )?,
            (None, None) => {
                return Err(SimError::Config("no arrival schedule or hourly distribution".into()));
            }
        };

        // ── Population ────────────────────────────────────────────────────
        let (agents, rngs) = PopulationBuilder::new(self.config.seed)
            .archetypes(self.archetypes)
            .mix(mix)
            .expedited(self.config.expedited.clone())
            .venues(attractions.len(), activities.len())
            .build(schedule.total())?;

        let clock = ParkClock::new(schedule.close());
        log::info!(
            "park ready: {} attractions, {} activities, {} visitors, closes at {}",
            attractions.len(),
            activities.len(),
            agents.len(),
            clock.close,
        );

        Ok(ParkEngine::new(
            self.config,
            clock,
            schedule,
            agents,
            rngs,
            attractions,
            activities,
            self.behavior,
        ))
    }
}

fn build_attractions(mut specs: Vec<AttractionSpec>) -> SimResult<Vec<Attraction>> {
    specs.sort_by_key(|s| s.popularity);
    let count = specs.len();
    specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| -> SimResult<Attraction> {
            let id = AttractionId::try_from(i).map_err(|_| SimError::TooManyVenues {
                what: "attraction",
                got:  count,
                max:  usize::from(u16::MAX) + 1,
            })?;
            Ok(Attraction::new(id, spec)?)
        })
        .collect()
}

fn build_activities(mut specs: Vec<ActivitySpec>, seed: u64) -> SimResult<Vec<Activity>> {
    specs.sort_by_key(|s| s.popularity);
    let count = specs.len();
    specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| -> SimResult<Activity> {
            let id = ActivityId::try_from(i).map_err(|_| SimError::TooManyVenues {
                what: "activity",
                got:  count,
                max:  usize::from(u16::MAX) + 1,
            })?;
            Ok(Activity::new(id, spec, seed)?)
        })
        .collect()
}
