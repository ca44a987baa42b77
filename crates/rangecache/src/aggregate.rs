//! Range aggregates computed on a cache miss

/// Read-only query over a contiguous slice of the backing array
///
/// Implementations must be pure: the same slice always yields the same result,
/// otherwise cached answers drift from recomputed ones. `None` means the result
/// is not representable as `i64`; nothing is cached in that case.
pub trait Aggregate {
    /// Compute the aggregate over `values`
    fn aggregate(&self, values: &[i64]) -> Option<i64>;
}

/// Sum of all values in the range, `None` on overflow
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl Aggregate for Sum {
    fn aggregate(&self, values: &[i64]) -> Option<i64> {
        checked_sum(values)
    }
}

impl<F> Aggregate for F
where
    F: Fn(&[i64]) -> Option<i64>,
{
    fn aggregate(&self, values: &[i64]) -> Option<i64> {
        self(values)
    }
}

pub(crate) fn checked_sum(values: &[i64]) -> Option<i64> {
    values.iter().try_fold(0i64, |acc, v| acc.checked_add(*v))
}
