//! Frame timing for [`Scene::tick`](crate::scene::Scene::tick).

use std::time::{Duration, Instant};

/// Measures the time between consecutive frames.
#[derive(Clone, Copy, Debug)]
pub struct Time {
	startup: Instant,
	frame_start: Instant,
	delta: Duration,
	elapsed: Duration,
	frame_count: u64,
}

impl Time {
	pub(crate) fn new() -> Self {
		let now = Instant::now();
		Self {
			startup: now,
			frame_start: now,
			delta: Duration::ZERO,
			elapsed: Duration::ZERO,
			frame_count: 0,
		}
	}

	/// Starts a new frame.
	pub(crate) fn advance(&mut self) {
		let now = Instant::now();
		self.delta = now - self.frame_start;
		self.frame_start = now;
		self.elapsed = now - self.startup;
		self.frame_count += 1;
	}

	/// Duration of the previous frame.
	pub fn delta(&self) -> Duration {
		self.delta
	}

	pub fn delta_secs(&self) -> f32 {
		self.delta.as_secs_f32()
	}

	/// Total time since the clock was started.
	pub fn elapsed(&self) -> Duration {
		self.elapsed
	}

	pub fn frame_count(&self) -> u64 {
		self.frame_count
	}
}

impl Default for Time {
	fn default() -> Self {
		Self::new()
	}
}
