#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

/// Rounding that breaks ties towards positive infinity (`floor(x + 0.5)`),
/// the same convention browsers use for `Math.round`.
pub trait RoundToUsize {
	/// Negative values saturate to 0.
	#[must_use]
	fn round_usize(self) -> usize;
}

pub trait RoundToIsize {
	#[must_use]
	fn round_isize(self) -> isize;
}

macro_rules! impl_round_for_float {
	($t:ty) => {
		#[allow(clippy::cast_sign_loss)]
		impl RoundToUsize for $t {
			fn round_usize(self) -> usize {
				(self + 0.5).floor() as usize
			}
		}

		impl RoundToIsize for $t {
			fn round_isize(self) -> isize {
				(self + 0.5).floor() as isize
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_round_for_float!($t);
		impl_round_for_float!($($others),+);
	};
}

impl_round_for_float!(f32, f64);

pub trait DivisibleByUsize {
	#[must_use]
	fn div_usize(self, rhs: usize) -> Self;
}

impl DivisibleByUsize for f32 {
	fn div_usize(self, rhs: usize) -> Self {
		self / rhs as Self
	}
}

impl DivisibleByUsize for f64 {
	fn div_usize(self, rhs: usize) -> Self {
		self / rhs as Self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ties_round_up() {
		assert_eq!(0.5_f64.round_usize(), 1);
		assert_eq!(2.5_f64.round_usize(), 3);
		assert_eq!(2.49_f64.round_usize(), 2);
		assert_eq!((-0.5_f64).round_isize(), 0);
		assert_eq!((-1.5_f64).round_isize(), -1);
		assert_eq!((-1.51_f64).round_isize(), -2);
	}

	#[test]
	fn test_negative_saturates() {
		assert_eq!((-3.7_f64).round_usize(), 0);
		assert_eq!((-3.7_f32).round_usize(), 0);
	}

	#[test]
	fn test_div_usize() {
		assert!((9.0_f64.div_usize(4) - 2.25).abs() < f64::EPSILON);
	}
}
