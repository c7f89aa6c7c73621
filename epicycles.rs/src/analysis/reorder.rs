#![allow(clippy::cast_possible_wrap)]

use math_utils::even_odd::Parity;

use super::Coefficient;

/// Signed frequency of a natural DFT bin: bins above `n / 2` alias to negative frequencies.
///
/// For even `n` the Nyquist bin (`n / 2`) stays positive.
#[must_use]
pub fn signed_frequency(bin: usize, n: usize) -> isize {
	if bin <= n / 2 {
		bin as isize
	} else {
		bin as isize - n as isize
	}
}

/// Takes coefficients in natural bin order and returns them in signed-frequency order.
///
/// Positions `k` and `k + N/2` are swapped for every `k` in `1..N/2`, and every
/// `frequency` is rewritten to its signed value. For even `N` the layout becomes
///
/// `[0, -(N/2-1), ..., -2, -1, N/2, 1, 2, ..., N/2-1]`
///
/// i.e. DC first, then the clockwise terms and the unpaired Nyquist term
/// (positions `0..=N/2`), then the counter-clockwise terms.
///
/// Odd lengths get correct signed frequencies but only a partial positional swap.
#[must_use]
pub fn reorder(coefficients: &[Coefficient]) -> Vec<Coefficient> {
	let n = coefficients.len();
	if n.is_odd() {
		log::warn!("reordering an odd number of coefficients ({n}), the layout will be partial");
	}

	let half = n / 2;
	let mut reordered: Vec<Coefficient> = coefficients
		.iter()
		.enumerate()
		.map(|(bin, c)| c.with_frequency(signed_frequency(bin, n)))
		.collect();

	for k in 1..half {
		reordered.swap(k, k + half);
	}

	reordered
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rustfft::num_complex::Complex64;

	use super::*;
	use crate::analysis::dft::dft;

	#[allow(clippy::cast_precision_loss)]
	fn natural(n: usize) -> Vec<Coefficient> {
		(0..n)
			.map(|k| Coefficient::new(Complex64::new(k as f64, 0.), k as isize))
			.collect()
	}

	fn frequencies(coefficients: &[Coefficient]) -> Vec<isize> {
		coefficients.iter().map(Coefficient::frequency).collect()
	}

	#[test]
	fn test_layout_of_eight() {
		let reordered = reorder(&natural(8));
		assert_eq!(frequencies(&reordered), vec![0, -3, -2, -1, 4, 1, 2, 3]);
		// the phasor travels with its bin
		assert!((reordered[1].re() - 5.).abs() < f64::EPSILON);
		assert!((reordered[5].re() - 1.).abs() < f64::EPSILON);
	}

	#[test]
	fn test_nyquist_stays_in_place() {
		for n in (2..=64).step_by(2) {
			let reordered = reorder(&natural(n));
			assert_eq!(reordered[n / 2].frequency(), (n / 2) as isize);
			assert!((reordered[n / 2].re() - (n / 2) as f64).abs() < f64::EPSILON);
		}
	}

	#[test]
	fn test_every_signed_frequency_exactly_once() {
		for n in (2..=128).step_by(2) {
			let reordered = reorder(&natural(n));
			let half = (n / 2) as isize;
			let seen: HashSet<isize> = frequencies(&reordered).into_iter().collect();
			let expected: HashSet<isize> = (-(half - 1)..=half).collect();
			assert_eq!(reordered.len(), n);
			assert_eq!(seen, expected, "n = {n}");
		}
	}

	#[test]
	fn test_clockwise_terms_first() {
		let n = 10;
		let reordered = reorder(&natural(n));
		for (i, c) in reordered.iter().enumerate() {
			if i == 0 {
				assert_eq!(c.frequency(), 0);
			} else if i < n / 2 {
				assert!(c.frequency() < 0);
			} else {
				assert!(c.frequency() > 0);
			}
		}
	}

	#[test]
	fn test_odd_length_wraps_frequencies() {
		let reordered = reorder(&natural(5));
		let mut seen = frequencies(&reordered);
		seen.sort_unstable();
		assert_eq!(seen, vec![-2, -1, 0, 1, 2]);
	}

	#[test]
	fn test_small_lengths() {
		assert!(reorder(&[]).is_empty());
		assert_eq!(frequencies(&reorder(&natural(1))), vec![0]);
		assert_eq!(frequencies(&reorder(&natural(2))), vec![0, 1]);
		assert_eq!(frequencies(&reorder(&natural(4))), vec![0, -1, 2, 1]);
	}

	#[test]
	fn test_reorder_keeps_phasors() {
		let signal: Vec<Complex64> = (0..12)
			.map(|i| Complex64::new(f64::from(i).sin(), f64::from(i).cos()))
			.collect();
		let natural = dft(&signal).unwrap();
		let reordered = reorder(&natural);
		for c in &reordered {
			let bin = c.frequency().rem_euclid(12) as usize;
			assert_eq!(c.phasor(), natural[bin].phasor());
		}
	}
}
