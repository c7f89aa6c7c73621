use rustfft::num_complex::Complex64;

use crate::{analysis::Coefficient, InvalidInputError};

mod direct;
pub use direct::*;

mod planned;
pub use planned::*;

/// A forward DFT normalized by `1/N`, producing one [`Coefficient`] per sample
/// in natural bin order (`frequency == bin index`).
pub trait FourierTransform {
	/// # Errors
	/// [`InvalidInputError::EmptySignal`] if `signal` is empty.
	fn transform(&mut self, signal: &[Complex64]) -> Result<Vec<Coefficient>, InvalidInputError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformKind {
	/// The O(N²) definition, see [`dft`].
	#[default]
	Direct,
	/// FFT through [`rustfft`].
	Planned,
}

impl TransformKind {
	#[must_use]
	pub fn build(self) -> Box<dyn FourierTransform> {
		match self {
			TransformKind::Direct => Box::new(DirectDft),
			TransformKind::Planned => Box::new(PlannedDft::new()),
		}
	}
}
