//! Easing curves for mapping a normalized control (e.g. a slider position)
//! onto a non-linear range.
//!
//! Inputs are clamped to `[0, 1]`; outputs are also in `[0, 1]`.

#[must_use]
pub fn ease_in_quart(ratio: f64) -> f64 {
	ratio.clamp(0., 1.).powi(4)
}

/// Flat near both ends, steep in the middle.
#[must_use]
pub fn ease_in_out_quart(ratio: f64) -> f64 {
	let ratio = ratio.clamp(0., 1.);
	if ratio < 0.5 {
		0.5 * (2. * ratio).powi(4)
	} else {
		-0.5 * (2. * ratio - 2.).powi(4) + 1.
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_endpoints() {
		assert!(ease_in_quart(0.).abs() < f64::EPSILON);
		assert!((ease_in_quart(1.) - 1.).abs() < f64::EPSILON);
		assert!(ease_in_out_quart(0.).abs() < f64::EPSILON);
		assert!((ease_in_out_quart(0.5) - 0.5).abs() < f64::EPSILON);
		assert!((ease_in_out_quart(1.) - 1.).abs() < f64::EPSILON);
	}

	#[test]
	fn test_clamped() {
		assert!(ease_in_quart(-2.).abs() < f64::EPSILON);
		assert!((ease_in_quart(3.) - 1.).abs() < f64::EPSILON);
		assert!((ease_in_out_quart(1.5) - 1.).abs() < f64::EPSILON);
	}

	#[test]
	fn test_monotonic() {
		let mut prev_in = -1.;
		let mut prev_in_out = -1.;
		for i in 0..=100 {
			let ratio = f64::from(i) / 100.;
			assert!(ease_in_quart(ratio) >= prev_in);
			assert!(ease_in_out_quart(ratio) >= prev_in_out);
			prev_in = ease_in_quart(ratio);
			prev_in_out = ease_in_out_quart(ratio);
		}
	}

	#[test]
	fn test_in_out_symmetry() {
		for i in 0..=50 {
			let ratio = f64::from(i) / 100.;
			assert!((ease_in_out_quart(ratio) + ease_in_out_quart(1. - ratio) - 1.).abs() < 1e-12);
		}
	}
}
