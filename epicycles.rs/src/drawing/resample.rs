#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use math_utils::{even_odd::Parity, ext::RoundToIsize, stats::mean};

use crate::{DegenerateDrawingError, Point};

/// Closes a freehand stroke with a straight run of evenly spaced points
/// from its last point back towards its first one.
///
/// The run uses roughly the stroke's average spacing, and its length is
/// adjusted so that the total number of points is even.
/// The input points are kept unchanged, in order, at the beginning of the output.
///
/// # Errors
/// - [`DegenerateDrawingError::TooFewPoints`] with fewer than two points,
/// - [`DegenerateDrawingError::NonFinite`] if any coordinate is NaN or infinite,
/// - [`DegenerateDrawingError::CoincidentPoints`] if all the points are the same.
pub fn close_loop(raw: &[Point]) -> Result<Vec<Point>, DegenerateDrawingError> {
	let [first, .., last] = raw else {
		return Err(DegenerateDrawingError::TooFewPoints(raw.len()));
	};
	let (first, last) = (*first, *last);

	if !raw.iter().all(Point::is_finite) {
		return Err(DegenerateDrawingError::NonFinite);
	}

	let average_distance = mean(raw.windows(2).map(|pair| pair[0].distance(pair[1])))
		.map_err(|_| DegenerateDrawingError::TooFewPoints(raw.len()))?;
	if !average_distance.is_finite() {
		return Err(DegenerateDrawingError::NonFinite);
	}
	if average_distance <= 0. {
		return Err(DegenerateDrawingError::CoincidentPoints);
	}

	let gap = last.distance(first);
	let extra = n_of_added_points(raw.len(), gap / average_distance);
	let step = (first - last) * (1. / (extra + 1) as f64);

	let mut closed = Vec::with_capacity(raw.len() + extra);
	closed.extend_from_slice(raw);
	closed.extend((1..=extra).map(|i| last + step * i as f64));
	Ok(closed)
}

/// How many points split a gap `gap_in_segments` average segments long,
/// given a stroke of `n_of_points`: one less than the number of segments
/// that fit the gap, plus one if needed to make the total even.
#[must_use]
pub fn n_of_added_points(n_of_points: usize, gap_in_segments: f64) -> usize {
	let extra = (gap_in_segments.round_isize() - 1).max(0) as usize;
	(n_of_points + extra).ceil_even() - n_of_points
}
