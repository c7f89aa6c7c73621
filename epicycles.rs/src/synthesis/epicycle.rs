use std::cmp::Ordering;

use super::is_used;
use crate::{analysis::Coefficient, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
	Clockwise,
	CounterClockwise,
	/// The DC term.
	Stationary,
}

/// One link of the epicycle chain at a given time: a vector from `center` to `tip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicycle {
	pub center: Point,
	pub tip: Point,
	pub coefficient: Coefficient,
}

impl Epicycle {
	#[must_use]
	pub fn radius(&self) -> f64 {
		self.coefficient.amplitude()
	}

	#[must_use]
	pub fn rotation(&self) -> Rotation {
		match self.coefficient.frequency().cmp(&0) {
			Ordering::Less => Rotation::Clockwise,
			Ordering::Greater => Rotation::CounterClockwise,
			Ordering::Equal => Rotation::Stationary,
		}
	}
}

/// The chain of rotating vectors at time `t`, in coefficient order,
/// skipping the coefficients above `cutoff`.
///
/// The first link starts at the origin; the tip of the last one is
/// [`point_at`](super::point_at) for the same arguments.
#[must_use]
pub fn epicycles_at(coefficients: &[Coefficient], cutoff: usize, t: f64) -> Vec<Epicycle> {
	coefficients
		.iter()
		.filter(|c| is_used(c, cutoff))
		.scan(Point::default(), |center, &coefficient| {
			let tip = *center + Point::from(coefficient.at(t));
			let epicycle = Epicycle {
				center: *center,
				tip,
				coefficient,
			};
			*center = tip;
			Some(epicycle)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use rustfft::num_complex::Complex64;

	use super::*;
	use crate::{
		analysis::{dft::dft, reorder},
		synthesis::point_at,
	};

	fn coefficients() -> Vec<Coefficient> {
		let signal: Vec<Complex64> = (0..16)
			.map(|i| {
				let t = f64::from(i) / 16. * std::f64::consts::TAU;
				Complex64::new(2. * t.cos() + (2. * t).cos(), t.sin() - 0.5 * (3. * t).sin())
			})
			.collect();
		reorder(&dft(&signal).unwrap())
	}

	#[test]
	fn test_chain_is_connected() {
		let coefficients = coefficients();
		let chain = epicycles_at(&coefficients, 8, 1.3);

		assert_eq!(chain.len(), coefficients.len());
		assert_eq!(chain[0].center, Point::default());
		for pair in chain.windows(2) {
			assert_eq!(pair[0].tip, pair[1].center);
		}
		for link in &chain {
			assert!((link.center.distance(link.tip) - link.radius()).abs() < 1e-9);
		}
	}

	#[test]
	fn test_last_tip_is_the_path_point() {
		let coefficients = coefficients();
		for cutoff in [0, 1, 2, 5, 8] {
			for t in [0., 0.4, 2., 5.9] {
				let chain = epicycles_at(&coefficients, cutoff, t);
				let tip = chain.last().unwrap().tip;
				assert!(tip.distance(point_at(&coefficients, cutoff, t)) < 1e-9);
			}
		}
	}

	#[test]
	fn test_cutoff_limits_the_chain() {
		let coefficients = coefficients();
		let chain = epicycles_at(&coefficients, 2, 0.);
		assert_eq!(chain.len(), 5);
		assert!(chain.iter().all(|e| e.coefficient.frequency().abs() <= 2));
	}

	#[test]
	fn test_rotation() {
		let coefficients = coefficients();
		let chain = epicycles_at(&coefficients, 8, 0.);
		for link in chain {
			let expected = match link.coefficient.frequency() {
				0 => Rotation::Stationary,
				f if f < 0 => Rotation::Clockwise,
				_ => Rotation::CounterClockwise,
			};
			assert_eq!(link.rotation(), expected);
		}
	}
}
