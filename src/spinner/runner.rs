use std::num::NonZeroUsize;
use std::sync::mpsc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace, warn};

use super::config::SpinnerConfig;
use super::error::{Result, SpinnerError};
use super::histogram::aggregate;
use super::result::SpinResult;
use super::tournament::{RunSample, execute_run};

/// Number of workers used when none is configured: one per available
/// execution unit.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Runs a spinner simulation across a fixed pool of worker threads.
///
/// Each worker owns its own random number generator and executes
/// `runs / workers` runs, sending every finished [`RunSample`] over a
/// rendezvous channel. Remainder runs are not executed, so the number of
/// samples collected is `workers * (runs / workers)`.
#[derive(Debug, Clone)]
pub struct Spinner {
    config: SpinnerConfig,
    workers: usize,
    seed: Option<u64>,
}

impl Spinner {
    /// Create a new Spinner (internal - use SpinnerBuilder instead)
    pub(crate) fn new(config: SpinnerConfig, workers: usize, seed: Option<u64>) -> Self {
        Self {
            config,
            workers,
            seed,
        }
    }

    /// Get the simulation configuration
    pub fn config(&self) -> &SpinnerConfig {
        &self.config
    }

    /// Get the number of worker threads
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Get the base seed, if the simulation is seeded
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs each worker will execute
    pub fn runs_per_worker(&self) -> usize {
        self.config.runs_per_worker(self.workers)
    }

    /// Number of samples the simulation will produce
    pub fn effective_runs(&self) -> usize {
        self.config.effective_runs(self.workers)
    }

    /// Run the simulation and aggregate the results
    pub fn run(&self) -> Result<SpinResult> {
        let start = Instant::now();
        let samples = self.run_all()?;

        let unmatched_draws: usize = samples.iter().map(|s| s.unmatched_draws).sum();
        if unmatched_draws > 0 {
            warn!(
                unmatched_draws,
                "Some payout draws matched no payout; results are biased toward zero"
            );
        }

        let (histogram, total_roi) =
            aggregate(samples.iter().map(|s| s.roi), self.effective_runs());

        info!(
            buckets = histogram.len(),
            total_roi,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Spinner simulation complete"
        );

        Ok(SpinResult::new(
            self.config.clone(),
            histogram,
            total_roi,
            self.workers,
            self.effective_runs(),
            unmatched_draws,
            start.elapsed(),
        ))
    }

    /// Spawn the workers and collect exactly [`Spinner::effective_runs`]
    /// samples.
    ///
    /// Samples arrive in no particular order.
    pub fn run_all(&self) -> Result<Vec<RunSample>> {
        let runs_per_worker = self.runs_per_worker();
        let effective_runs = self.effective_runs();

        info!(
            workers = self.workers,
            runs_per_worker,
            effective_runs,
            tournaments = self.config.tournaments,
            win_rate = self.config.win_rate,
            "Starting spinner simulation"
        );

        if effective_runs < self.config.runs {
            warn!(
                requested_runs = self.config.runs,
                effective_runs,
                workers = self.workers,
                "Runs don't divide evenly across workers; remainder runs are dropped"
            );
        }

        // Zero capacity: every send waits for the collector to receive.
        let (tx, rx) = mpsc::sync_channel::<RunSample>(0);
        let mut samples = Vec::with_capacity(effective_runs);

        thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers)
                .map(|worker_idx| {
                    let tx = tx.clone();
                    let config = &self.config;
                    let seed = self.seed;
                    scope.spawn(move || {
                        let mut rng = worker_rng(seed, worker_idx);
                        debug!(worker_idx, runs_per_worker, "Worker starting");
                        for run_idx in 0..runs_per_worker {
                            let sample = execute_run(config, &mut rng);
                            trace!(worker_idx, run_idx, roi = sample.roi, "Sending sample");
                            if tx.send(sample).is_err() {
                                break;
                            }
                        }
                        debug!(worker_idx, "Worker finished");
                    })
                })
                .collect();

            // Only the workers hold senders now, so recv fails instead of
            // blocking forever if one of them dies early.
            drop(tx);

            for _ in 0..effective_runs {
                match rx.recv() {
                    Ok(sample) => samples.push(sample),
                    Err(_) => break,
                }
            }

            for (worker_idx, handle) in handles.into_iter().enumerate() {
                handle
                    .join()
                    .map_err(|_| SpinnerError::WorkerPanicked(worker_idx))?;
            }

            Ok::<(), SpinnerError>(())
        })?;

        Ok(samples)
    }

    /// Human readable summary of the simulation settings
    pub fn configuration_summary(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Threads:             {}\n", self.workers));
        output.push_str(&format!("Win rate:            {} %\n", self.config.win_rate));
        output.push_str(&format!("Runs:                {}\n", self.config.runs));
        output.push_str(&format!(
            "Tournaments per run: {}\n",
            self.config.tournaments
        ));
        output.push_str(&format!("Rounding:            {}\n", self.config.rounding));
        if let Some(seed) = self.seed {
            output.push_str(&format!("Seed:                {}\n", seed));
        }
        output
    }
}

/// Build the private generator for one worker.
///
/// Seeded runs derive every worker's seed from the base seed so a fixed
/// worker count reproduces the same samples. Unseeded runs use the clock,
/// mixed with the worker index so workers started in the same tick still
/// diverge.
fn worker_rng(seed: Option<u64>, worker_idx: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker_idx as u64)),
        None => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            let mixed = nanos ^ (worker_idx as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            StdRng::seed_from_u64(mixed)
        }
    }
}
