use std::ops::Add;

use crate::ext::DivisibleByUsize;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
	#[error("common stats are undefined on empty series")]
	EmptySeries,
}

/// Arithmetic mean of a series, consumed in a single pass.
///
/// # Errors
/// - on empty series
pub fn mean<T, Series>(series: Series) -> Result<T, StatisticsError>
where
	T: Add<T, Output = T> + DivisibleByUsize + Default + Copy,
	Series: IntoIterator<Item = T>,
{
	let (sum, len) = series
		.into_iter()
		.fold((T::default(), 0_usize), |(sum, len), cur| (sum + cur, len + 1));

	if len == 0 {
		Err(StatisticsError::EmptySeries)
	} else {
		Ok(sum.div_usize(len))
	}
}
