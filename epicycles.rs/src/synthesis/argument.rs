#![allow(clippy::cast_precision_loss)]

use std::f64::consts::TAU;

use math_utils::{easing::ease_in_out_quart, ext::RoundToUsize, stats::mean};
use rustfft::num_complex::Complex64;

use crate::Point;

/// Maps the normalized "analyzed frequency" control onto a natural bin index in `0..n`.
///
/// The symmetric quartic easing slows the control down near DC and near the
/// highest bins, where the argument path changes the most.
#[must_use]
pub fn analyzed_frequency(ratio: f64, n: usize) -> usize {
	(ease_in_out_quart(ratio) * n.saturating_sub(1) as f64).round_usize()
}

/// Every sample rotated by `e^(-2πi·frequency·k/N)`, `k` being its index.
///
/// These are the (un-normalized) terms the DFT sums up for bin `frequency`:
/// drawing them shows the samples "wound" around the origin at that frequency.
#[must_use]
pub fn compute_argument(samples: &[Point], frequency: usize) -> Vec<Point> {
	let n = samples.len();
	samples
		.iter()
		.enumerate()
		.map(|(k, &sample)| {
			// k·f mod N keeps the angle small for long drawings
			let angle = -TAU * ((k * frequency) % n) as f64 / n as f64;
			(Complex64::from(sample) * Complex64::from_polar(1., angle)).into()
		})
		.collect()
}

/// The centroid of an argument path, i.e. the natural-order DFT coefficient
/// of the frequency it was computed for.
#[must_use]
pub fn winding_center(argument: &[Point]) -> Option<Point> {
	mean(argument.iter().copied()).ok()
}
