//! Run/pause control for the particle animation.
//!
//! The animation is either stopped or running with exactly one tick
//! scheduled. Scrolling past the pause threshold stops it, scrolling back
//! resumes it, and resizing re-seeds the field in either state.

use log::warn;

use super::field::Field;
use super::render::Surface;
use super::scheduler::{FrameHandle, FrameScheduler};

/// Whether ticks are being scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
	/// No tick pending; nothing is drawn.
	Stopped,
	/// Exactly one tick pending.
	Running,
}

/// Owns the field and drives it one frame at a time.
pub struct Animator<S: FrameScheduler> {
	field: Field,
	scheduler: S,
	state: RunState,
	pending: Option<FrameHandle>,
	pause_threshold: f64,
}

impl<S: FrameScheduler> Animator<S> {
	/// A stopped animator. The pause threshold is taken from the field config.
	pub fn new(field: Field, scheduler: S) -> Self {
		let pause_threshold = field.config().pause_threshold;
		Self {
			field,
			scheduler,
			state: RunState::Stopped,
			pending: None,
			pause_threshold,
		}
	}

	/// Current run state.
	pub fn state(&self) -> RunState {
		self.state
	}

	/// The animated field.
	pub fn field(&self) -> &Field {
		&self.field
	}

	/// Begin ticking. No-op while already running.
	pub fn start(&mut self) {
		if self.state == RunState::Running {
			return;
		}
		self.state = RunState::Running;
		self.schedule_next();
	}

	/// Cancel the pending tick. No-op while already stopped.
	pub fn stop(&mut self) {
		if self.state == RunState::Stopped {
			return;
		}
		self.state = RunState::Stopped;
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_tick(handle);
		}
	}

	/// React to the page scroll offset.
	pub fn on_scroll(&mut self, offset: f64) {
		if offset > self.pause_threshold {
			self.stop();
		} else {
			self.start();
		}
	}

	/// Re-seed for the new canvas size. A running animation picks the new
	/// field up on its already scheduled tick.
	pub fn on_resize(&mut self, width: u32, height: u32) {
		self.field.init(width, height);
	}

	/// Run one frame: clear, step and draw every particle, connect
	/// neighbors, then schedule the next frame.
	pub fn tick(&mut self, surface: &mut dyn Surface) {
		self.pending = None;
		if self.state == RunState::Stopped {
			return;
		}
		surface.clear();
		self.field.step(surface);
		self.field.connect(surface);
		self.schedule_next();
	}

	fn schedule_next(&mut self) {
		match self.scheduler.schedule_tick() {
			Ok(handle) => self.pending = Some(handle),
			Err(e) => {
				warn!("portfolio-particles: animation halted: {}", e);
				self.state = RunState::Stopped;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use fastrand::Rng;

	use super::super::config::FieldConfig;
	use super::super::render::recording::{DrawCall, RecordingSurface};
	use super::super::scheduler::counting::CountingScheduler;
	use super::super::theme::Palette;
	use super::*;
	use pretty_assertions::assert_eq;

	fn animator() -> Animator<CountingScheduler> {
		let mut field = Field::new(FieldConfig::default(), Palette::default(), Rng::with_seed(9));
		field.init(1200, 800);
		Animator::new(field, CountingScheduler::default())
	}

	#[test]
	fn starts_stopped() {
		let a = animator();
		assert_eq!(a.state(), RunState::Stopped);
		assert!(a.scheduler.scheduled.is_empty());
	}

	#[test]
	fn start_schedules_exactly_one_tick() {
		let mut a = animator();
		a.start();
		a.start();
		assert_eq!(a.state(), RunState::Running);
		assert_eq!(a.scheduler.scheduled.len(), 1);
		assert_eq!(a.pending, Some(FrameHandle(1)));
	}

	#[test]
	fn tick_renders_and_reschedules() {
		let mut a = animator();
		a.start();
		let mut surface = RecordingSurface::default();

		a.tick(&mut surface);

		assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
		assert_eq!(surface.circles(), 80);
		assert_eq!(a.scheduler.scheduled.len(), 2);
		assert_eq!(a.pending, Some(FrameHandle(2)));
	}

	#[test]
	fn stop_cancels_pending_tick_and_is_idempotent() {
		let mut a = animator();
		a.start();
		a.stop();
		a.stop();

		assert_eq!(a.state(), RunState::Stopped);
		assert_eq!(a.scheduler.cancelled, vec![FrameHandle(1)]);
		assert_eq!(a.pending, None);
	}

	#[test]
	fn stale_tick_after_stop_draws_nothing() {
		let mut a = animator();
		a.start();
		a.stop();
		let mut surface = RecordingSurface::default();

		a.tick(&mut surface);

		assert!(surface.calls.is_empty());
		assert_eq!(a.scheduler.scheduled.len(), 1);
	}

	#[test]
	fn scroll_past_threshold_pauses_and_back_resumes() {
		let mut a = animator();
		a.start();

		a.on_scroll(601.0);
		assert_eq!(a.state(), RunState::Stopped);
		a.on_scroll(900.0);
		assert_eq!(a.scheduler.cancelled.len(), 1);

		a.on_scroll(600.0);
		assert_eq!(a.state(), RunState::Running);
		a.on_scroll(100.0);
		assert_eq!(a.scheduler.scheduled.len(), 2);
	}

	#[test]
	fn resize_reseeds_in_any_state() {
		let mut a = animator();
		a.on_resize(600, 400);
		assert_eq!(a.field().particles().len(), 20);
		assert_eq!(a.state(), RunState::Stopped);
		assert!(a.scheduler.scheduled.is_empty());

		a.start();
		a.on_resize(1200, 800);
		assert_eq!(a.field().particles().len(), 80);
		assert_eq!(a.scheduler.scheduled.len(), 1);

		let mut surface = RecordingSurface::default();
		a.tick(&mut surface);
		assert_eq!(surface.circles(), 80);
	}

	#[test]
	fn failed_schedule_leaves_animation_stopped() {
		let mut a = animator();
		a.scheduler.fail = true;
		a.start();
		assert_eq!(a.state(), RunState::Stopped);
		assert_eq!(a.pending, None);

		a.scheduler.fail = false;
		a.start();
		assert_eq!(a.state(), RunState::Running);
	}
}
