#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use std::f64::consts::TAU;

use math_utils::ext::RoundToUsize;
use rustfft::num_complex::Complex64;

use crate::{
	analysis::{
		dft::FourierTransform, reorder, signed_frequency, spectrum, spectrum_index_of,
		Coefficient,
	},
	drawing::{close_loop, Brush},
	synthesis::{
		analyzed_frequency, compute_argument, epicycles_at, reconstruct_path,
		used_frequency_cutoff, Epicycle,
	},
	PipelineError, Point, VisualizerOptions,
};

/// Time step used before anything has been drawn.
pub const IDLE_TIME_STEP: f64 = TAU / 1000.;

/// Moves `time` by `dt` along a period of `2π`, wrapping in both directions.
/// The result is always in `[0, 2π)`.
#[must_use]
pub fn advance_time(time: f64, dt: f64) -> f64 {
	// rem_euclid rounds up to TAU for tiny negative sums
	let time = (time + dt).rem_euclid(TAU);
	if time >= TAU {
		0.
	} else {
		time
	}
}

/// Owns everything derived from one drawing: the closed samples, their
/// coefficients and the paths built from them, plus the animation clock.
///
/// Nothing here is shared: every method runs synchronously on the caller's
/// thread, and each recomputation replaces its outputs as a whole.
pub struct Visualizer {
	options: VisualizerOptions,
	transform: Box<dyn FourierTransform>,
	brush: Option<Brush>,
	stroke: Vec<Point>,
	drawing: Vec<Point>,
	coefficients: Vec<Coefficient>,
	path: Vec<Point>,
	argument: Vec<Point>,
	spectrum: Vec<Point>,
	time: f64,
	dt: f64,
	used_frequency_ratio: f64,
	used_frequency_cutoff: usize,
	analyzed_frequency_ratio: f64,
	analyzed_frequency: usize,
	running: bool,
	was_running: bool,
}

impl std::fmt::Debug for Visualizer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Visualizer")
			.field("options", &self.options)
			.field("transform", &"omitted")
			.field("brush", &self.brush)
			.field("stroke", &self.stroke.len())
			.field("drawing", &self.drawing.len())
			.field("coefficients", &self.coefficients.len())
			.field("time", &self.time)
			.field("dt", &self.dt)
			.field("used_frequency_cutoff", &self.used_frequency_cutoff)
			.field("analyzed_frequency", &self.analyzed_frequency)
			.field("running", &self.running)
			.finish_non_exhaustive()
	}
}

impl Default for Visualizer {
	fn default() -> Self {
		Self::new(VisualizerOptions::default())
	}
}

impl Visualizer {
	#[must_use]
	pub fn new(options: VisualizerOptions) -> Self {
		let used_frequency_ratio = options.used_frequency_ratio.clamp(0., 1.);
		let analyzed_frequency_ratio = options.analyzed_frequency_ratio.clamp(0., 1.);
		Self {
			transform: options.transform.build(),
			brush: None,
			stroke: Vec::new(),
			drawing: Vec::new(),
			coefficients: Vec::new(),
			path: Vec::new(),
			argument: Vec::new(),
			spectrum: Vec::new(),
			time: 0.,
			dt: IDLE_TIME_STEP,
			used_frequency_ratio,
			used_frequency_cutoff: used_frequency_cutoff(used_frequency_ratio, 0),
			analyzed_frequency_ratio,
			analyzed_frequency: analyzed_frequency(analyzed_frequency_ratio, 0),
			running: options.autoplay,
			was_running: options.autoplay,
			options,
		}
	}

	// -- Drawing --

	/// Start a new stroke at `at`, pausing the animation until the stroke ends.
	///
	/// A stroke already in progress is discarded.
	pub fn begin_drawing(&mut self, at: Point) {
		if self.brush.is_none() {
			self.was_running = self.running;
		}
		self.running = false;
		self.stroke.clear();
		self.brush = Some(Brush::new(
			at,
			self.options.brush_radius,
			self.options.brush_follow,
		));
	}

	/// Feed a pointer position to the current stroke. Returns the recorded
	/// (smoothed) sample, or `None` when no stroke is in progress.
	pub fn extend_drawing(&mut self, cursor: Point) -> Option<Point> {
		let brush = self.brush.as_mut()?;
		let sample = brush.follow(cursor);
		self.stroke.push(sample);
		Some(sample)
	}

	/// End the current stroke and rebuild everything from it.
	///
	/// The animation resumes if it was running when the stroke began.
	///
	/// # Errors
	/// [`PipelineError`] if the stroke can't be decomposed, in which case
	/// the previous drawing and all its derived state are kept.
	pub fn finish_drawing(&mut self) -> Result<(), PipelineError> {
		if self.brush.take().is_some() {
			self.running = self.was_running;
		}
		let stroke = std::mem::take(&mut self.stroke);
		self.load_drawing(&stroke)
	}

	/// Drop the current stroke, keeping the previous drawing.
	pub fn cancel_drawing(&mut self) {
		if self.brush.take().is_some() {
			self.running = self.was_running;
		}
		self.stroke.clear();
	}

	#[must_use]
	pub fn is_drawing(&self) -> bool {
		self.brush.is_some()
	}

	/// Replace the drawing with `samples`, closing the loop and recomputing
	/// coefficients, path, argument path and spectrum. Resets the clock.
	///
	/// # Errors
	/// [`PipelineError`] if `samples` can't be decomposed, in which case
	/// the previous drawing and all its derived state are kept.
	pub fn load_drawing(&mut self, samples: &[Point]) -> Result<(), PipelineError> {
		self.rebuild(samples).map_err(|err| {
			log::debug!("drawing of {} points discarded: {err}", samples.len());
			err
		})
	}

	fn rebuild(&mut self, samples: &[Point]) -> Result<(), PipelineError> {
		let drawing = close_loop(samples)?;
		let signal: Vec<Complex64> = drawing.iter().copied().map(Complex64::from).collect();
		let coefficients = reorder(&self.transform.transform(&signal)?);

		let n = coefficients.len();
		let used_frequency_cutoff = used_frequency_cutoff(self.used_frequency_ratio, n);
		let analyzed_frequency = analyzed_frequency(self.analyzed_frequency_ratio, n);

		self.path = reconstruct_path(&coefficients, used_frequency_cutoff);
		self.argument = compute_argument(&drawing, analyzed_frequency);
		self.spectrum = spectrum(&coefficients);
		self.coefficients = coefficients;
		self.drawing = drawing;
		self.used_frequency_cutoff = used_frequency_cutoff;
		self.analyzed_frequency = analyzed_frequency;
		self.dt = TAU / n as f64;
		self.time = 0.;

		log::debug!(
			"drawing of {} points closed with {} more, cutoff {used_frequency_cutoff}, analyzing {analyzed_frequency}",
			samples.len(),
			n - samples.len(),
		);
		Ok(())
	}

	// -- Controls --

	/// Move the "used frequencies" control and rebuild the path.
	pub fn set_used_frequency_ratio(&mut self, ratio: f64) {
		self.used_frequency_ratio = ratio.clamp(0., 1.);
		self.used_frequency_cutoff =
			used_frequency_cutoff(self.used_frequency_ratio, self.coefficients.len());
		self.path = reconstruct_path(&self.coefficients, self.used_frequency_cutoff);
		log::trace!("used frequency cutoff set to {}", self.used_frequency_cutoff);
	}

	/// Move the "analyzed frequency" control and rebuild the argument path.
	pub fn set_analyzed_frequency_ratio(&mut self, ratio: f64) {
		self.analyzed_frequency_ratio = ratio.clamp(0., 1.);
		self.analyzed_frequency =
			analyzed_frequency(self.analyzed_frequency_ratio, self.drawing.len());
		self.argument = compute_argument(&self.drawing, self.analyzed_frequency);
		log::trace!("analyzed frequency set to {}", self.analyzed_frequency);
	}

	// -- Animation --

	/// One animation frame: advance the clock by `dt` if running.
	///
	/// Returns whether the clock moved, i.e. whether a redraw is needed
	/// and the next frame should be scheduled.
	pub fn tick(&mut self) -> bool {
		if !self.running {
			return false;
		}
		self.time = advance_time(self.time, self.dt);
		true
	}

	/// Pause and move one step forward.
	pub fn step_forward(&mut self) -> f64 {
		self.pause();
		self.time = advance_time(self.time, self.dt);
		log::trace!("time stepped forward to {}", self.time);
		self.time
	}

	/// Pause and move one step back.
	pub fn step_backward(&mut self) -> f64 {
		self.pause();
		self.time = advance_time(self.time, -self.dt);
		log::trace!("time stepped back to {}", self.time);
		self.time
	}

	/// Resume the animation. While drawing, it resumes when the stroke ends.
	pub fn play(&mut self) {
		if self.is_drawing() {
			self.was_running = true;
		} else {
			self.running = true;
		}
	}

	pub fn pause(&mut self) {
		if self.is_drawing() {
			self.was_running = false;
		} else {
			self.running = false;
		}
	}

	pub fn toggle(&mut self) {
		if self.is_running() || (self.is_drawing() && self.was_running) {
			self.pause();
		} else {
			self.play();
		}
	}

	#[must_use]
	pub fn is_running(&self) -> bool {
		self.running
	}

	// -- Outputs --

	/// Index of the path point reached at the current time.
	///
	/// Rounds to the nearest sample, so the index is the point under the tip
	/// of the epicycle chain, not the last sample already passed.
	#[must_use]
	pub fn active_path_index(&self) -> Option<usize> {
		let len = self.path.len();
		if len == 0 {
			None
		} else {
			Some((self.time / TAU * len as f64).round_usize() % len)
		}
	}

	/// The path point reached at the current time: the tip of the epicycle chain.
	#[must_use]
	pub fn current_point(&self) -> Option<Point> {
		self.active_path_index().map(|i| self.path[i])
	}

	/// The part of the path traced since the beginning of the period.
	#[must_use]
	pub fn traced_path(&self) -> &[Point] {
		match self.active_path_index() {
			Some(i) => &self.path[..=i],
			None => &[],
		}
	}

	/// The epicycle chain at the current time.
	#[must_use]
	pub fn epicycles(&self) -> Vec<Epicycle> {
		epicycles_at(&self.coefficients, self.used_frequency_cutoff, self.time)
	}

	/// Position in [`spectrum`](Self::spectrum) of the analyzed frequency.
	#[must_use]
	pub fn analyzed_spectrum_index(&self) -> Option<usize> {
		let n = self.coefficients.len();
		if n == 0 {
			return None;
		}
		spectrum_index_of(
			&self.coefficients,
			signed_frequency(self.analyzed_frequency, n),
		)
	}

	#[must_use]
	pub fn options(&self) -> &VisualizerOptions {
		&self.options
	}

	#[must_use]
	pub fn brush(&self) -> Option<Brush> {
		self.brush
	}

	/// Samples of the stroke in progress.
	#[must_use]
	pub fn stroke(&self) -> &[Point] {
		&self.stroke
	}

	/// The closed sample sequence of the current drawing.
	#[must_use]
	pub fn drawing(&self) -> &[Point] {
		&self.drawing
	}

	/// Coefficients in signed-frequency order.
	#[must_use]
	pub fn coefficients(&self) -> &[Coefficient] {
		&self.coefficients
	}

	#[must_use]
	pub fn path(&self) -> &[Point] {
		&self.path
	}

	#[must_use]
	pub fn argument(&self) -> &[Point] {
		&self.argument
	}

	/// `(re, im)` of each coefficient, in the order of [`coefficients`](Self::coefficients).
	#[must_use]
	pub fn spectrum(&self) -> &[Point] {
		&self.spectrum
	}

	#[must_use]
	pub fn time(&self) -> f64 {
		self.time
	}

	#[must_use]
	pub fn dt(&self) -> f64 {
		self.dt
	}

	#[must_use]
	pub fn used_frequency_ratio(&self) -> f64 {
		self.used_frequency_ratio
	}

	#[must_use]
	pub fn used_frequency_cutoff(&self) -> usize {
		self.used_frequency_cutoff
	}

	#[must_use]
	pub fn analyzed_frequency_ratio(&self) -> f64 {
		self.analyzed_frequency_ratio
	}

	/// Natural bin index of the analyzed frequency.
	#[must_use]
	pub fn analyzed_frequency(&self) -> usize {
		self.analyzed_frequency
	}
}
