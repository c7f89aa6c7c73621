#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
	#[error("the transform of an empty signal is undefined")]
	EmptySignal,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateDrawingError {
	#[error("a drawing needs at least two points, {0} received")]
	TooFewPoints(usize),
	#[error("all the points of the drawing coincide")]
	CoincidentPoints,
	#[error("the drawing contains non-finite coordinates")]
	NonFinite,
}

/// Anything that can go wrong between a completed drawing and its coefficients.
///
/// In both cases the previously computed state is left untouched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
	#[error(transparent)]
	InvalidInput(#[from] InvalidInputError),
	#[error(transparent)]
	DegenerateDrawing(#[from] DegenerateDrawingError),
}
