//! Random query workload with a pool of hot ranges

use rand::Rng;

/// One step of the workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Aggregate over `[left, right]`
    Range { left: usize, right: usize },
    /// Write `value` at `index`
    Update { index: usize, value: i64 },
}

/// Shape of a generated workload
#[derive(Debug, Clone, Copy)]
pub struct WorkloadSpec {
    /// Array length
    pub size: usize,
    /// Number of queries
    pub queries: usize,
    /// Number of distinct hot ranges
    pub hot_pool: usize,
    /// Probability that a range query picks a hot range
    pub p_hot: f64,
    /// Probability that a query is an update
    pub p_update: f64,
}

/// Fill an array of `size` values in `1..=100`
pub fn random_array<R: Rng>(size: usize, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(1..=100)).collect()
}

/// Generate a workload
///
/// Hot ranges start in the first half of the array and end in the second half,
/// so they are long and overlap heavily.
pub fn make_queries<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Query> {
    let n = spec.size;
    let hot: Vec<(usize, usize)> = (0..spec.hot_pool)
        .map(|_| (rng.gen_range(0..=n / 2), rng.gen_range(n / 2..n)))
        .collect();

    (0..spec.queries)
        .map(|_| {
            if rng.gen_bool(spec.p_update) {
                Query::Update {
                    index: rng.gen_range(0..n),
                    value: rng.gen_range(1..=100),
                }
            } else if !hot.is_empty() && rng.gen_bool(spec.p_hot) {
                let (left, right) = hot[rng.gen_range(0..hot.len())];
                Query::Range { left, right }
            } else {
                let left = rng.gen_range(0..n);
                let right = rng.gen_range(left..n);
                Query::Range { left, right }
            }
        })
        .collect()
}
