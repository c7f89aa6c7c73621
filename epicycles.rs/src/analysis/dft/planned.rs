#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

use rustfft::{num_complex::Complex64, FftPlanner};

use crate::{
	analysis::{dft::FourierTransform, Coefficient},
	InvalidInputError,
};

/// Same output as [`dft`](super::dft), computed with an FFT.
///
/// Plans are cached by the inner planner, so repeated transforms
/// of drawings with the same number of samples are cheap.
pub struct PlannedDft {
	planner: FftPlanner<f64>,
	buffer: Vec<Complex64>,
}

impl std::fmt::Debug for PlannedDft {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PlannedDft")
			.field("planner", &"omitted")
			.field("buffer", &self.buffer)
			.finish()
	}
}

impl Default for PlannedDft {
	fn default() -> Self {
		Self::new()
	}
}

impl PlannedDft {
	#[must_use]
	pub fn new() -> Self {
		Self {
			planner: FftPlanner::new(),
			buffer: Vec::new(),
		}
	}
}

impl FourierTransform for PlannedDft {
	fn transform(&mut self, signal: &[Complex64]) -> Result<Vec<Coefficient>, InvalidInputError> {
		if signal.is_empty() {
			return Err(InvalidInputError::EmptySignal);
		}

		self.buffer.clear();
		self.buffer.extend_from_slice(signal);

		let fft = self.planner.plan_fft_forward(signal.len());
		fft.process(&mut self.buffer);

		// rustfft does not normalize
		// https://docs.rs/rustfft/6.2.0/rustfft/index.html#normalization
		let normalization_factor = 1. / signal.len() as f64;

		Ok(self
			.buffer
			.iter()
			.enumerate()
			.map(|(k, &c)| Coefficient::new(c * normalization_factor, k as isize))
			.collect())
	}
}
