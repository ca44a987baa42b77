//! Runs a workload with and without the range cache

use std::time::{Duration, Instant};

use rangecache::{range_sum_no_cache, update_no_cache, RangeQueryService, Result};

use crate::workload::Query;

/// Outcome of one workload run
#[derive(Debug)]
pub struct RunReport {
    /// Wall-clock time for the whole workload
    pub elapsed: Duration,
    /// Answers to range queries, in workload order
    pub answers: Vec<i64>,
}

/// Run the workload directly against the array
pub fn run_uncached(array: &mut [i64], queries: &[Query]) -> Result<RunReport> {
    let mut answers = Vec::with_capacity(queries.len());
    let start = Instant::now();

    for query in queries {
        match *query {
            Query::Range { left, right } => answers.push(range_sum_no_cache(array, left, right)?),
            Query::Update { index, value } => update_no_cache(array, index, value)?,
        }
    }

    Ok(RunReport {
        elapsed: start.elapsed(),
        answers,
    })
}

/// Run the workload through `service`
pub fn run_cached(
    service: &mut RangeQueryService,
    array: &mut [i64],
    queries: &[Query],
) -> Result<RunReport> {
    let mut answers = Vec::with_capacity(queries.len());
    let start = Instant::now();

    for query in queries {
        match *query {
            Query::Range { left, right } => answers.push(service.query(array, left, right)?),
            Query::Update { index, value } => {
                service.update(array, index, value)?;
            }
        }
    }

    Ok(RunReport {
        elapsed: start.elapsed(),
        answers,
    })
}

/// Speedup of `cached` over `baseline`
pub fn speedup(baseline: Duration, cached: Duration) -> f64 {
    let cached = cached.as_secs_f64();
    if cached == 0.0 {
        f64::INFINITY
    } else {
        baseline.as_secs_f64() / cached
    }
}
