// bounded parallel execution of independent jobs

use crate::error::{Error, Result};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// a unit of work for [`process_concurrently`]
pub type Job<'a> = Box<dyn FnOnce() -> Result<()> + Send + 'a>;

/// run every job on a pool of at most `workers` threads
///
/// jobs complete in no particular order; callers that collect results must
/// impose their own ordering afterwards. the first error is returned once
/// the pool stops picking up new jobs.
pub fn process_concurrently(jobs: Vec<Job<'_>>, label: &str, workers: usize) -> Result<()> {
    let total = jobs.len();
    if total == 0 {
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.clamp(1, total))
        .build()
        .map_err(|e| Error::ConfigError {
            reason: format!("failed to start worker pool: {}", e),
        })?;

    let done = AtomicUsize::new(0);
    let result = pool.install(|| {
        jobs.into_par_iter().try_for_each(|job| {
            job()?;
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("{}: {}/{}", label, finished, total);
            Ok(())
        })
    });

    info!(
        "{}: {}/{} done",
        label,
        done.load(Ordering::Relaxed),
        total
    );
    result
}
