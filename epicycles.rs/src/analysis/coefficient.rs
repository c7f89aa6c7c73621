use std::{f64::consts::PI, fmt::Debug};

use rustfft::num_complex::Complex64;

/// One rotating vector of the decomposition: a complex amplitude spinning
/// at an integer number of turns per period.
///
/// Right after the transform `frequency` holds the natural bin index;
/// [`reorder`](crate::analysis::reorder) reinterprets it as signed.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Coefficient {
	phasor: Complex64,
	frequency: isize,
}

impl Debug for Coefficient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Coefficient")
			.field("frequency", &self.frequency)
			.field("phasor", &self.phasor)
			.field("amplitude()", &self.amplitude())
			.field("phase()", &self.phase())
			.finish()
	}
}

impl Coefficient {
	#[must_use]
	pub const fn new(phasor: Complex64, frequency: isize) -> Self {
		Self { phasor, frequency }
	}

	#[must_use]
	pub const fn frequency(&self) -> isize {
		self.frequency
	}

	#[must_use]
	pub const fn with_frequency(self, frequency: isize) -> Self {
		Self {
			phasor: self.phasor,
			frequency,
		}
	}

	/// Get the underlying complex number representing the
	/// phase and amplitude of this coefficient.
	#[must_use]
	pub const fn phasor(&self) -> Complex64 {
		self.phasor
	}

	#[must_use]
	pub const fn re(&self) -> f64 {
		self.phasor.re
	}

	#[must_use]
	pub const fn im(&self) -> f64 {
		self.phasor.im
	}

	/// Radius of the epicycle.
	#[must_use]
	pub fn amplitude(&self) -> f64 {
		self.phasor.norm()
	}

	/// Starting angle of the epicycle, in `(-π, π]`.
	///
	/// A zero phasor has phase 0, regardless of the sign of its zeros.
	#[must_use]
	pub fn phase(&self) -> f64 {
		if self.phasor.re == 0. && self.phasor.im == 0. {
			return 0.;
		}
		let phase = self.phasor.arg();
		if phase <= -PI {
			PI
		} else {
			phase
		}
	}

	#[must_use]
	pub fn power(&self) -> f64 {
		self.phasor.norm_sqr()
	}

	/// The vector drawn by this coefficient at time `t` (radians along the period).
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn at(&self, t: f64) -> Complex64 {
		self.phasor * Complex64::from_polar(1., self.frequency as f64 * t)
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	#[test]
	fn test_polar_accessors() {
		let c = Coefficient::new(Complex64::new(0., 2.), 3);
		assert_eq!(c.frequency(), 3);
		assert!((c.amplitude() - 2.).abs() < 1e-12);
		assert!((c.phase() - FRAC_PI_2).abs() < 1e-12);
		assert!((c.power() - 4.).abs() < 1e-12);
		assert!((c.re()).abs() < f64::EPSILON);
		assert!((c.im() - 2.).abs() < f64::EPSILON);
	}

	#[test]
	fn test_zero_phasor_has_zero_phase() {
		assert!(Coefficient::new(Complex64::new(0., 0.), 0).phase().abs() < f64::EPSILON);
		assert!(Coefficient::new(Complex64::new(-0., -0.), 1).phase().abs() < f64::EPSILON);
		assert!(Coefficient::new(Complex64::new(0., -0.), 1).phase().abs() < f64::EPSILON);
	}

	#[test]
	fn test_phase_range_excludes_minus_pi() {
		let c = Coefficient::new(Complex64::new(-1., -0.), 0);
		assert!((c.phase() - PI).abs() < f64::EPSILON);
	}

	#[test]
	fn test_rotation() {
		let c = Coefficient::new(Complex64::new(1., 0.), -1);
		let v = c.at(FRAC_PI_2);
		assert!(v.re.abs() < 1e-12);
		assert!((v.im + 1.).abs() < 1e-12);
	}
}
