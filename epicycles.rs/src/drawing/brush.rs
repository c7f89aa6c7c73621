use crate::Point;

/// Stroke smoother for freehand input.
///
/// The brush center trails the pointer: it only moves once the pointer leaves
/// a circle of `radius` around it, and then only covers `follow` of the excess
/// distance per event. Recording the center instead of the raw pointer
/// filters out jitter and keeps consecutive samples close to each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
	center: Point,
	radius: f64,
	follow: f64,
}

impl Brush {
	/// A brush centered on `at`. A negative `radius` becomes 0 and `follow`
	/// is clamped to `[0, 1]`.
	#[must_use]
	pub fn new(at: Point, radius: f64, follow: f64) -> Self {
		Self {
			center: at,
			radius: radius.max(0.),
			follow: follow.clamp(0., 1.),
		}
	}

	#[must_use]
	pub fn center(&self) -> Point {
		self.center
	}

	#[must_use]
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Move the brush towards `cursor`, returning the new center.
	pub fn follow(&mut self, cursor: Point) -> Point {
		let distance = self.center.distance(cursor);
		if distance > self.radius {
			let excess = (cursor - self.center) * (1. - self.radius / distance);
			self.center = self.center + excess * self.follow;
		}
		self.center
	}
}
