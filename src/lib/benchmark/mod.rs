//! Measures the wall clock time of repeatedly running the same [`Invocation`].
//!
//! Iterations run strictly one after the other, and the standard output of the child
//! is discarded while measuring. A single failed iteration invalidates the whole run.

use std::num::NonZeroU32;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::cli::output::executors::{self, ExecutionError, Output};
use crate::domain::commands::Invocation;
use crate::domain::operation::Operation;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("iteration {iteration} of the benchmark failed")]
    Iteration {
        iteration: u32,
        #[source]
        source: ExecutionError,
    },
    #[error("a benchmark needs at least one sample")]
    NoSamples,
}

/// The summary of the elapsed times of a benchmark run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub iterations: u32,
    pub avg_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
}

impl BenchmarkResult {
    /// Reduces the samples to their minimum, maximum and mean.
    ///
    /// Returns [`None`] for an empty slice of samples
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let (first, rest) = samples.split_first()?;
        let (min_time, max_time, sum) = rest.iter().fold(
            (*first, *first, *first),
            |(min, max, sum), &elapsed| (min.min(elapsed), max.max(elapsed), sum + elapsed),
        );
        let iterations = u32::try_from(samples.len()).ok()?;

        Some(Self {
            iterations,
            avg_time: sum / iterations,
            min_time,
            max_time,
        })
    }
}

impl core::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ran {} iterations", self.iterations)?;
        writeln!(f, "Average time: {:?}", self.avg_time)?;
        writeln!(f, "Minimum time: {:?}", self.min_time)?;
        write!(f, "Maximum time: {:?}", self.max_time)
    }
}

/// Upper bound of the samples reserved before the first iteration runs
const MAX_PREALLOCATED_SAMPLES: usize = 1024;

fn samples_capacity(iterations: NonZeroU32) -> usize {
    usize::try_from(iterations.get())
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED_SAMPLES)
}

/// Runs the invocation *iterations* times, returning the summary of the elapsed times
pub fn benchmark(
    invocation: &Invocation,
    iterations: NonZeroU32,
) -> Result<BenchmarkResult, BenchmarkError> {
    let mut samples = Vec::with_capacity(samples_capacity(iterations));

    for iteration in 0..iterations.get() {
        let start = Instant::now();
        let r = executors::execute_with_output(invocation, Output::Discard);
        let elapsed = start.elapsed();
        log::info!("Iteration: {iteration} elapsed: {elapsed:?}");

        r.map_err(|source| BenchmarkError::Iteration { iteration, source })?;
        samples.push(elapsed);
    }

    BenchmarkResult::from_samples(&samples).ok_or(BenchmarkError::NoSamples)
}

/// Machine readable form of a [`BenchmarkResult`]
#[derive(Debug, Serialize)]
pub struct BenchmarkReport<'a> {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub target: &'a Path,
    pub iterations: u32,
    pub avg_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl<'a> BenchmarkReport<'a> {
    pub fn new(operation: Operation, target: &'a Path, result: &BenchmarkResult) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            target,
            iterations: result.iterations,
            avg_ms: as_millis(result.avg_time),
            min_ms: as_millis(result.min_time),
            max_ms: as_millis(result.max_time),
        }
    }
}

fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
