//! Uncached range operations, used as the comparison baseline

use crate::aggregate::checked_sum;
use crate::error::{check_index, check_range, Error, Result};

/// Sum `array[left..=right]` directly
///
/// # Errors
/// * `Error::InvalidRange` / `Error::RangeOutOfBounds` for a bad range
/// * `Error::Overflow` if the sum does not fit in an `i64`
pub fn range_sum_no_cache(array: &[i64], left: usize, right: usize) -> Result<i64> {
    check_range(left, right, array.len())?;
    checked_sum(&array[left..=right]).ok_or(Error::Overflow { left, right })
}

/// Write `value` at `array[index]`
pub fn update_no_cache(array: &mut [i64], index: usize, value: i64) -> Result<()> {
    check_index(index, array.len())?;
    array[index] = value;
    Ok(())
}
