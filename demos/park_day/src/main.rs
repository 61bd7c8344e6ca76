//! park_day — simulate one day at a theme park.
//!
//! Usage: `park_day [park.json] [output_dir]`
//!
//! Without arguments the built-in park (`park.json` next to this crate's
//! manifest) is simulated and CSV histories are written to
//! `output/park_day`.  Set `RUST_LOG=debug` for minute-level engine logs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use park_agent::{ArchetypeMix, ArchetypeTable};
use park_behavior::ParkBehavior;
use park_core::{AgentId, Minute, ParkConfig};
use park_output::{CsvWriter, OutputWriter, ParkOutputObserver};
use park_schedule::HourlyDistribution;
use park_sim::{MinuteStats, ParkBuilder, ParkObserver, ParkSummary, ParkView};
use park_venue::{ActivitySpec, AttractionSpec};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_PARK:       &str  = include_str!("../park.json");
const DEFAULT_OUTPUT_DIR: &str  = "output/park_day";
const SAMPLE_LOGS:        usize = 2;

// ── Park definition ───────────────────────────────────────────────────────────

/// Everything needed to simulate one day, as read from JSON.
#[derive(Deserialize)]
struct ParkDefinition {
    config:      ParkConfig,
    hourly:      HourlyDistribution,
    attractions: Vec<AttractionSpec>,
    #[serde(default)]
    activities:  Vec<ActivitySpec>,
    /// Falls back to the six stock archetypes.
    archetypes:  Option<ArchetypeTable>,
    mix:         ArchetypeMix,
}

fn load_definition(path: Option<&Path>) -> Result<ParkDefinition> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading park definition {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing park definition {}", path.display()))
        }
        None => serde_json::from_str(DEFAULT_PARK).context("parsing built-in park definition"),
    }
}

// ── Hourly progress ───────────────────────────────────────────────────────────

/// Logs park metrics every hour and forwards everything to the CSV observer.
struct HourlyProgress<W: OutputWriter> {
    inner: ParkOutputObserver<W>,
    rows:  usize,
}

impl<W: OutputWriter> HourlyProgress<W> {
    fn new(inner: ParkOutputObserver<W>) -> Self {
        Self { inner, rows: 0 }
    }
}

impl<W: OutputWriter> ParkObserver for HourlyProgress<W> {
    fn on_minute_start(&mut self, now: Minute) {
        self.inner.on_minute_start(now);
    }

    fn on_minute_end(&mut self, now: Minute, stats: &MinuteStats, park: &ParkView<'_>) {
        self.rows += 1;
        self.inner.on_minute_end(now, stats, park);

        if !now.is_hour_start() {
            return;
        }
        log::info!(
            "{now}  in park: {:>5}  passes issued: {:>4}  redeemed: {:>4}",
            stats.active_agents,
            park.history.passes_distributed,
            park.history.passes_redeemed,
        );
        for attraction in park.attractions {
            log::info!(
                "    {:<14} queue {:>4}  wait {:>3} min  expedited wait {:>3} min",
                attraction.name(),
                attraction.standby_queue().len(),
                attraction.wait_time(),
                attraction.exp_wait_time(),
            );
        }
        for activity in park.activities {
            log::info!("    {:<14} visitors {:>4}", activity.name(), activity.visitor_count());
        }
    }

    fn on_sim_end(&mut self, final_minute: Minute, park: &ParkView<'_>) {
        self.inner.on_sim_end(final_minute, park);
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_summary(summary: &ParkSummary) {
    println!(
        "Visitors: {}  |  Peak in park: {}  |  Passes issued: {}  redeemed: {}",
        summary.visitors, summary.peak_active, summary.passes_distributed, summary.passes_redeemed,
    );
    println!();

    println!("{:<14} {:>10} {:>10} {:>9} {:>8}", "Attraction", "Mean wait", "Exp wait", "Max wait", "Rides");
    println!("{}", "-".repeat(55));
    for a in &summary.attractions {
        println!(
            "{:<14} {:>10.1} {:>10.1} {:>9} {:>8}",
            a.name, a.mean_wait, a.mean_exp_wait, a.max_wait, a.rides
        );
    }
    println!();

    println!("{:<14} {:>8} {:>12}", "Activity", "Visits", "Mean min");
    println!("{}", "-".repeat(36));
    for a in &summary.activities {
        println!("{:<14} {:>8} {:>12.1}", a.name, a.visits, a.mean_minutes);
    }
    println!();

    println!("{:<20} {:>8} {:>8} {:>10} {:>10}", "Archetype", "Visitors", "Rides", "Activities", "Stay min");
    println!("{}", "-".repeat(60));
    for a in &summary.archetypes {
        println!(
            "{:<20} {:>8} {:>8.2} {:>10.2} {:>10.1}",
            a.archetype, a.visitors, a.mean_rides, a.mean_activity_visits, a.mean_stay
        );
    }
    println!();

    println!("Attractions ridden per visitor:");
    for (rides, count) in summary.rides_histogram.iter().enumerate() {
        println!("  {rides:>3}: {count}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let park_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    // 1. Load the park.
    let definition = load_definition(park_path.as_deref())?;
    println!("=== park_day ===");
    println!(
        "Seed: {}  |  Target visitors: {}  |  Attractions: {}  |  Activities: {}",
        definition.config.seed,
        definition.config.total_daily_agents,
        definition.attractions.len(),
        definition.activities.len(),
    );
    println!();

    // 2. Build the engine.
    let mut builder = ParkBuilder::new(definition.config, ParkBehavior::default())
        .hourly(definition.hourly)
        .attractions(definition.attractions)
        .activities(definition.activities)
        .mix(definition.mix);
    if let Some(table) = definition.archetypes {
        builder = builder.archetypes(table);
    }
    let mut engine = builder.build().context("building park")?;

    // 3. Set up output.
    let writer = CsvWriter::new(&output_dir)
        .with_context(|| format!("opening output directory {}", output_dir.display()))?;
    let mut obs = HourlyProgress::new(ParkOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    engine.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!(
        "Simulated until {} in {:.3} s ({} minutes written to {})",
        engine.clock.now,
        elapsed.as_secs_f64(),
        obs.rows,
        output_dir.display(),
    );
    println!();

    // 5. Summary.
    let summary = engine.summary();
    print_summary(&summary);

    let summary_path = output_dir.join("summary.json");
    let file = std::fs::File::create(&summary_path)
        .with_context(|| format!("creating {}", summary_path.display()))?;
    serde_json::to_writer_pretty(file, &summary).context("writing summary.json")?;

    // 6. A couple of visitor stories.
    println!();
    for (id, log) in engine.sample_logs(SAMPLE_LOGS) {
        print_log(id, log);
    }

    Ok(())
}

fn print_log(id: AgentId, log: &[park_agent::LogEntry]) {
    println!("{id}:");
    for entry in log {
        println!("  {}", entry.message);
    }
    println!();
}
