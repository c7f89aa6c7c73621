use derive_more::derive::{Add, From, Mul, Sub};
use math_utils::ext::DivisibleByUsize;
use rustfft::num_complex::Complex64;

/// A position in the cartesian plane of the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Add, Sub, Mul, From)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	#[must_use]
	pub fn norm(&self) -> f64 {
		self.x.hypot(self.y)
	}

	#[must_use]
	pub fn distance(&self, other: Self) -> f64 {
		(other - *self).norm()
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl DivisibleByUsize for Point {
	fn div_usize(self, rhs: usize) -> Self {
		Self {
			x: self.x.div_usize(rhs),
			y: self.y.div_usize(rhs),
		}
	}
}

impl From<Complex64> for Point {
	fn from(c: Complex64) -> Self {
		Self { x: c.re, y: c.im }
	}
}

impl From<Point> for Complex64 {
	fn from(p: Point) -> Self {
		Complex64::new(p.x, p.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_arithmetic() {
		let a = Point::new(1., 2.);
		let b = Point::from((4., 6.));
		assert_eq!(b - a, Point::new(3., 4.));
		assert_eq!(a + b, Point::new(5., 8.));
		assert_eq!(a * 2., Point::new(2., 4.));
		assert!((a.distance(b) - 5.).abs() < f64::EPSILON);
	}

	#[test]
	fn test_complex_conversion() {
		let c: Complex64 = Point::new(-1.5, 0.25).into();
		assert_eq!(c, Complex64::new(-1.5, 0.25));
		assert_eq!(Point::from(c), Point::new(-1.5, 0.25));
	}
}
