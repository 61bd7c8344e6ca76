//! Run the same park under several seeds.

use park_behavior::BehaviorModel;

use crate::{NoopObserver, ParkEngine, ParkSummary, SimResult};

/// Build one engine per seed with `make`, run each to completion and return
/// `(seed, summary)` pairs in the order of `seeds`.
///
/// With the `parallel` Cargo feature the runs are spread over Rayon's thread
/// pool.  Every run owns its engine, so the results are identical to the
/// sequential path.  The first build error aborts the whole batch.
pub fn replicate<B, F>(seeds: &[u64], make: F) -> SimResult<Vec<(u64, ParkSummary)>>
where
    B: BehaviorModel,
    F: Fn(u64) -> SimResult<ParkEngine<B>> + Sync + Send,
{
    let run_one = |seed: u64| -> SimResult<(u64, ParkSummary)> {
        let mut engine = make(seed)?;
        engine.run(&mut NoopObserver);
        log::debug!("replication seed {seed} finished at {}", engine.clock.now);
        Ok((seed, engine.summary()))
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}
