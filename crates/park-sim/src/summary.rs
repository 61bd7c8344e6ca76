//! End-of-day metrics.  Data only; rendering is up to the caller.

use park_core::Minute;

use crate::ParkView;

/// Per-attraction metrics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttractionSummary {
    pub name:          String,
    /// Mean standby wait estimate over operating minutes.
    pub mean_wait:     f64,
    /// Mean expedited wait estimate over operating minutes.
    pub mean_exp_wait: f64,
    pub max_wait:      u32,
    /// Completed rides across all visitors.
    pub rides:         u32,
}

/// Per-activity metrics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActivitySummary {
    pub name:         String,
    /// Completed visits across all visitors.
    pub visits:       u32,
    /// Mean minutes per completed visit.
    pub mean_minutes: f64,
}

/// Per-archetype visitor averages.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArchetypeSummary {
    pub archetype:            String,
    pub visitors:             u32,
    pub mean_rides:           f64,
    pub mean_activity_visits: f64,
    /// Mean minutes between arrival and exit, over visitors who left.
    pub mean_stay:            f64,
}

/// Whole-day park metrics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParkSummary {
    /// Visitors that entered the park.
    pub visitors:           u32,
    pub peak_active:        u32,
    pub passes_distributed: u32,
    pub passes_redeemed:    u32,
    pub attractions:        Vec<AttractionSummary>,
    pub activities:         Vec<ActivitySummary>,
    /// `rides_histogram[n]` = visitors who completed exactly `n` rides.
    pub rides_histogram:    Vec<u32>,
    /// In order of first appearance among visitor ids.
    pub archetypes:         Vec<ArchetypeSummary>,
}

#[derive(Default)]
struct ArchetypeTotals {
    visitors:  u32,
    rides:     u64,
    visits:    u64,
    stays:     u64,
    departed:  u32,
}

fn mean(sum: f64, n: usize) -> f64 {
    if n == 0 { 0.0 } else { sum / n as f64 }
}

impl ParkSummary {
    /// Gather metrics from `park`.  Wait means cover minutes up to and
    /// including `close`.
    pub fn collect(park: &ParkView<'_>, close: Minute) -> Self {
        let visitors: Vec<_> = park.agents.iter().filter(|a| a.arrival().is_some()).collect();

        let attractions = park
            .attractions
            .iter()
            .map(|attraction| {
                let open: Vec<_> = attraction
                    .history()
                    .iter()
                    .filter(|(m, _)| *m <= close)
                    .map(|(_, s)| *s)
                    .collect();
                let waits: f64 = open.iter().map(|s| f64::from(s.wait_time)).sum();
                let exp_waits: f64 = open.iter().map(|s| f64::from(s.exp_wait_time)).sum();
                AttractionSummary {
                    name:          attraction.name().to_owned(),
                    mean_wait:     mean(waits, open.len()),
                    mean_exp_wait: mean(exp_waits, open.len()),
                    max_wait:      open.iter().map(|s| s.wait_time).max().unwrap_or(0),
                    rides:         visitors.iter().map(|a| a.rides_completed(attraction.id())).sum(),
                }
            })
            .collect();

        let activities = park
            .activities
            .iter()
            .map(|activity| {
                let i = activity.id().index();
                let visits: u32 = visitors.iter().map(|a| a.activity_visits()[i]).sum();
                let minutes: u32 = visitors.iter().map(|a| a.activity_minutes()[i]).sum();
                ActivitySummary {
                    name:         activity.name().to_owned(),
                    visits,
                    mean_minutes: mean(f64::from(minutes), visits as usize),
                }
            })
            .collect();

        let mut rides_histogram = Vec::new();
        let mut totals: Vec<(String, ArchetypeTotals)> = Vec::new();
        for agent in &visitors {
            let rides = agent.total_rides() as usize;
            if rides_histogram.len() <= rides {
                rides_histogram.resize(rides + 1, 0);
            }
            rides_histogram[rides] += 1;

            let name = &agent.profile().archetype;
            let pos = match totals.iter().position(|(n, _)| n == name) {
                Some(pos) => pos,
                None => {
                    totals.push((name.clone(), ArchetypeTotals::default()));
                    totals.len() - 1
                }
            };
            let t = &mut totals[pos].1;
            t.visitors += 1;
            t.rides += u64::from(agent.total_rides());
            t.visits += u64::from(agent.total_activity_visits());
            if let (Some(arrival), Some(exit)) = (agent.arrival(), agent.exit()) {
                t.stays += u64::from(exit.since(arrival));
                t.departed += 1;
            }
        }

        let archetypes = totals
            .into_iter()
            .map(|(archetype, t)| ArchetypeSummary {
                archetype,
                visitors:             t.visitors,
                mean_rides:           mean(t.rides as f64, t.visitors as usize),
                mean_activity_visits: mean(t.visits as f64, t.visitors as usize),
                mean_stay:            mean(t.stays as f64, t.departed as usize),
            })
            .collect();

        Self {
            visitors:           visitors.len() as u32,
            peak_active:        park.history.peak_active(),
            passes_distributed: park.history.passes_distributed,
            passes_redeemed:    park.history.passes_redeemed,
            attractions,
            activities,
            rides_histogram,
            archetypes,
        }
    }
}
