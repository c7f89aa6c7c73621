#![allow(clippy::cast_precision_loss)]

use std::f64::consts::TAU;

use math_utils::{easing::ease_in_quart, ext::RoundToUsize};
use rustfft::num_complex::Complex64;

use crate::{analysis::Coefficient, Point};

/// Maps the normalized "used frequencies" control onto a cutoff for `n` coefficients.
///
/// The quartic easing leaves most of the control's travel to the low frequencies,
/// which carry most of the shape. The result is at least 1.
#[must_use]
pub fn used_frequency_cutoff(ratio: f64, n: usize) -> usize {
	(ease_in_quart(ratio) * n as f64).round_usize() + 1
}

/// Whether a (signed-frequency) coefficient takes part in a reconstruction limited to `cutoff`.
#[must_use]
pub fn is_used(coefficient: &Coefficient, cutoff: usize) -> bool {
	coefficient.frequency().unsigned_abs() <= cutoff
}

/// The partial Fourier sum at time `t`, over the coefficients with `|frequency| <= cutoff`.
#[must_use]
pub fn point_at(coefficients: &[Coefficient], cutoff: usize, t: f64) -> Point {
	coefficients
		.iter()
		.filter(|c| is_used(c, cutoff))
		.map(|c| c.at(t))
		.sum::<Complex64>()
		.into()
}

/// Samples the partial Fourier sum at `N` evenly spaced times over one period,
/// `N` being the number of coefficients.
///
/// With `cutoff >= N/2` every term is used and the path goes through the
/// samples the coefficients were computed from.
#[must_use]
pub fn reconstruct_path(coefficients: &[Coefficient], cutoff: usize) -> Vec<Point> {
	let n = coefficients.len();
	let dt = TAU / n as f64;

	(0..n)
		.map(|m| point_at(coefficients, cutoff, m as f64 * dt))
		.collect()
}
