//! One visitor: profile, location, held passes, tallies and log.

use std::fmt;

use park_core::{ActivityId, AgentId, AttractionId, Minute};

use crate::BehaviorProfile;

// ── Action / Location ─────────────────────────────────────────────────────────

/// What a visitor is doing right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    NotArrived,
    Idling,
    Queueing,
    Riding,
    Browsing,
    GettingPass,
    /// Terminal: the visitor has left the park.
    Leaving,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::NotArrived  => "not_arrived",
            Action::Idling      => "idling",
            Action::Queueing    => "queueing",
            Action::Riding      => "riding",
            Action::Browsing    => "browsing",
            Action::GettingPass => "getting_pass",
            Action::Leaving     => "leaving",
        }
    }
}

/// Where a visitor is.  Travel between locations is instantaneous.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Outside the park: before arrival and after leaving.
    Outside,
    /// The entrance plaza; idle visitors wait here between venues.
    Gate,
    Attraction(AttractionId),
    Activity(ActivityId),
}

// ── Held passes ───────────────────────────────────────────────────────────────

/// An expedited pass and the minutes until its estimated boarding.
///
/// `return_in` counts down once per minute and goes negative when the
/// estimate was too optimistic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeldPass {
    pub attraction: AttractionId,
    pub return_in:  i64,
}

/// Passes held by one visitor, in pickup order.  At most one per attraction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldPasses {
    passes: Vec<HeldPass>,
}

impl HeldPasses {
    /// Add a pass.  Returns `false` and changes nothing if a pass for the
    /// same attraction is already held.
    pub fn insert(&mut self, pass: HeldPass) -> bool {
        if self.contains(pass.attraction) {
            return false;
        }
        self.passes.push(pass);
        true
    }

    pub fn remove(&mut self, attraction: AttractionId) -> Option<HeldPass> {
        let pos = self.passes.iter().position(|p| p.attraction == attraction)?;
        Some(self.passes.remove(pos))
    }

    pub fn contains(&self, attraction: AttractionId) -> bool {
        self.passes.iter().any(|p| p.attraction == attraction)
    }

    pub fn get_mut(&mut self, attraction: AttractionId) -> Option<&mut HeldPass> {
        self.passes.iter_mut().find(|p| p.attraction == attraction)
    }

    /// Return countdowns, in pickup order.
    pub fn deadlines(&self) -> Vec<i64> {
        self.passes.iter().map(|p| p.return_in).collect()
    }

    pub fn attractions(&self) -> Vec<AttractionId> {
        self.passes.iter().map(|p| p.attraction).collect()
    }

    fn tick(&mut self) {
        for pass in &mut self.passes {
            pass.return_in -= 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeldPass> {
        self.passes.iter()
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

// ── LogEntry ──────────────────────────────────────────────────────────────────

/// One line of a visitor's human-readable history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub minute:  Minute,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.minute, self.message)
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A park visitor.
///
/// Created once at setup and kept until teardown; absent visitors simply
/// stay inactive.  Every transition resets the time spent at the current
/// location and appends a [`LogEntry`].
#[derive(Clone, Debug)]
pub struct Agent {
    id:                AgentId,
    profile:           BehaviorProfile,
    present:           bool,
    arrival:           Option<Minute>,
    exit:              Option<Minute>,
    location:          Location,
    action:            Action,
    time_at_location:  u32,
    passes:            HeldPasses,
    /// Completed rides per attraction, indexed by `AttractionId`.
    rides:             Vec<u32>,
    /// Completed visits per activity, indexed by `ActivityId`.
    activity_visits:   Vec<u32>,
    /// Minutes spent per activity, indexed by `ActivityId`.
    activity_minutes:  Vec<u32>,
    log:               Vec<LogEntry>,
}

impl Agent {
    pub fn new(
        id:             AgentId,
        profile:        BehaviorProfile,
        n_attractions:  usize,
        n_activities:   usize,
    ) -> Self {
        Self {
            id,
            profile,
            present:          false,
            arrival:          None,
            exit:             None,
            location:         Location::Outside,
            action:           Action::NotArrived,
            time_at_location: 0,
            passes:           HeldPasses::default(),
            rides:            vec![0; n_attractions],
            activity_visits:  vec![0; n_activities],
            activity_minutes: vec![0; n_activities],
            log:              Vec::new(),
        }
    }

    fn transition(&mut self, location: Location, action: Action, now: Minute, message: String) {
        log::trace!("{} {} → {:?} at {now}: {message}", self.id, self.action.as_str(), action);
        self.location = location;
        self.action = action;
        self.time_at_location = 0;
        self.log.push(LogEntry { minute: now, message });
    }

    fn note(&mut self, now: Minute, message: String) {
        self.log.push(LogEntry { minute: now, message });
    }

    // ── Transitions ───────────────────────────────────────────────────────

    pub fn arrive_at_park(&mut self, now: Minute) {
        self.present = true;
        self.arrival = Some(now);
        self.transition(Location::Gate, Action::Idling, now, format!("arrived at park at {now}"));
    }

    /// Leave for good.  Held passes must already have been returned with
    /// [`return_pass`](Self::return_pass).
    pub fn leave_park(&mut self, now: Minute) {
        self.present = false;
        self.exit = Some(now);
        self.transition(Location::Outside, Action::Leaving, now, format!("left park at {now}"));
    }

    pub fn enter_queue(&mut self, attraction: AttractionId, name: &str, now: Minute) {
        self.transition(
            Location::Attraction(attraction),
            Action::Queueing,
            now,
            format!("entered queue for {name} at {now}"),
        );
    }

    pub fn begin_activity(&mut self, activity: ActivityId, name: &str, now: Minute) {
        self.transition(
            Location::Activity(activity),
            Action::Browsing,
            now,
            format!("visited the activity {name} at {now}"),
        );
    }

    /// Pick up a pass for `attraction`.  Returns `false` and leaves the
    /// visitor untouched if a pass for it is already held.
    pub fn get_pass(&mut self, attraction: AttractionId, name: &str, now: Minute) -> bool {
        if !self.passes.insert(HeldPass { attraction, return_in: 0 }) {
            return false;
        }
        self.transition(
            Location::Gate,
            Action::GettingPass,
            now,
            format!("picked up an expedited pass for {name} at {now}"),
        );
        true
    }

    /// Record the expedited wait estimate of the pass just picked up and go
    /// back to idling.
    pub fn assign_expedited_return_time(&mut self, attraction: AttractionId, wait: u32, now: Minute) {
        if let Some(pass) = self.passes.get_mut(attraction) {
            pass.return_in = i64::from(wait);
        }
        self.action = Action::Idling;
        self.note(now, format!("estimated expedited queue wait is {wait} minutes"));
    }

    /// Give back an unredeemed pass.  Returns `false` if none was held.
    pub fn return_pass(&mut self, attraction: AttractionId, name: &str, now: Minute) -> bool {
        if self.passes.remove(attraction).is_none() {
            return false;
        }
        self.note(now, format!("returned the expedited pass for {name}"));
        true
    }

    /// Board `attraction`.  Returns `true` if a held pass for it was
    /// redeemed.
    pub fn agent_boarded_attraction(&mut self, attraction: AttractionId, name: &str, now: Minute) -> bool {
        let redeemed = self.passes.remove(attraction).is_some();
        let message = if redeemed {
            format!("boarded {name} and redeemed their expedited pass at {now}")
        } else {
            format!("boarded {name} at {now}")
        };
        self.transition(Location::Attraction(attraction), Action::Riding, now, message);
        redeemed
    }

    /// Count a completed ride.  The visitor becomes idle only if it is still
    /// on that attraction.
    pub fn agent_exited_attraction(&mut self, attraction: AttractionId, name: &str, now: Minute) {
        self.rides[attraction.index()] += 1;
        if self.location == Location::Attraction(attraction) && self.action == Action::Riding {
            self.transition(Location::Gate, Action::Idling, now, format!("exited {name} at {now}"));
        } else {
            self.note(now, format!("completed {name} at {now}"));
        }
    }

    /// Count a completed visit and the minutes spent on it.
    pub fn agent_exited_activity(&mut self, activity: ActivityId, name: &str, now: Minute) {
        self.activity_visits[activity.index()] += 1;
        self.activity_minutes[activity.index()] += self.time_at_location;
        self.transition(
            Location::Gate,
            Action::Idling,
            now,
            format!("exited the activity {name} at {now}"),
        );
    }

    /// One minute passes.  No effect while outside the park.
    pub fn pass_time(&mut self) {
        if self.present {
            self.time_at_location += 1;
            self.passes.tick();
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn profile(&self) -> &BehaviorProfile {
        &self.profile
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Present and waiting for a decision.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.present && self.action == Action::Idling
    }

    #[inline]
    pub fn arrival(&self) -> Option<Minute> {
        self.arrival
    }

    #[inline]
    pub fn exit(&self) -> Option<Minute> {
        self.exit
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }

    #[inline]
    pub fn time_at_location(&self) -> u32 {
        self.time_at_location
    }

    pub fn passes(&self) -> &HeldPasses {
        &self.passes
    }

    /// Times `attraction` was completed.
    pub fn rides_completed(&self, attraction: AttractionId) -> u32 {
        self.rides.get(attraction.index()).copied().unwrap_or(0)
    }

    pub fn total_rides(&self) -> u32 {
        self.rides.iter().sum()
    }

    /// Distinct attractions completed at least once.
    pub fn distinct_rides(&self) -> usize {
        self.rides.iter().filter(|&&n| n > 0).count()
    }

    pub fn rides(&self) -> &[u32] {
        &self.rides
    }

    pub fn activity_visits(&self) -> &[u32] {
        &self.activity_visits
    }

    pub fn activity_minutes(&self) -> &[u32] {
        &self.activity_minutes
    }

    pub fn total_activity_visits(&self) -> u32 {
        self.activity_visits.iter().sum()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }
}
