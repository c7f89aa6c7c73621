use crate::analysis::dft::TransformKind;

/// A 10px brush at a zoom of 150px per unit.
pub const DEFAULT_BRUSH_RADIUS: f64 = 10. / 150.;

pub const DEFAULT_BRUSH_FOLLOW: f64 = 0.2;

/// Configuration of a [`Visualizer`](crate::Visualizer).
///
/// Lengths are in the units of the visualizer's cartesian plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizerOptions {
	pub brush_radius: f64,
	/// Fraction of the distance in excess of `brush_radius` the brush covers per pointer event.
	pub brush_follow: f64,
	pub transform: TransformKind,
	/// Initial position of the "used frequencies" control, in `[0, 1]`.
	pub used_frequency_ratio: f64,
	/// Initial position of the "analyzed frequency" control, in `[0, 1]`.
	pub analyzed_frequency_ratio: f64,
	/// Whether the epicycles start spinning right away.
	pub autoplay: bool,
}

impl Default for VisualizerOptions {
	fn default() -> Self {
		Self {
			brush_radius: DEFAULT_BRUSH_RADIUS,
			brush_follow: DEFAULT_BRUSH_FOLLOW,
			transform: TransformKind::default(),
			used_frequency_ratio: 0.,
			analyzed_frequency_ratio: 0.,
			autoplay: true,
		}
	}
}

impl VisualizerOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Brush settings for freehand strokes. Out of range values are clamped
	/// by [`Brush::new`](crate::drawing::Brush::new).
	#[must_use]
	pub fn with_brush(mut self, radius: f64, follow: f64) -> Self {
		self.brush_radius = radius;
		self.brush_follow = follow;
		self
	}

	#[must_use]
	pub fn with_transform(mut self, transform: TransformKind) -> Self {
		self.transform = transform;
		self
	}

	#[must_use]
	pub fn with_used_frequency_ratio(mut self, ratio: f64) -> Self {
		self.used_frequency_ratio = ratio.clamp(0., 1.);
		self
	}

	#[must_use]
	pub fn with_analyzed_frequency_ratio(mut self, ratio: f64) -> Self {
		self.analyzed_frequency_ratio = ratio.clamp(0., 1.);
		self
	}

	#[must_use]
	pub fn with_autoplay(mut self, autoplay: bool) -> Self {
		self.autoplay = autoplay;
		self
	}
}
