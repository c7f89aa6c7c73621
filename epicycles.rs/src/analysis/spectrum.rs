use super::Coefficient;
use crate::Point;

/// One `(re, im)` point per coefficient, in the same order as `coefficients`.
///
/// The visualizer always passes reordered (signed-frequency) coefficients here,
/// so index `i` of the spectrum and of the coefficient list refer to the same term.
#[must_use]
pub fn spectrum(coefficients: &[Coefficient]) -> Vec<Point> {
	coefficients
		.iter()
		.map(|c| Point::new(c.re(), c.im()))
		.collect()
}

/// Position of the coefficient with the given signed `frequency`, if any.
#[must_use]
pub fn spectrum_index_of(coefficients: &[Coefficient], frequency: isize) -> Option<usize> {
	coefficients
		.iter()
		.position(|c| c.frequency() == frequency)
}
