//! Per-frame tick scheduling.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::error::{Error, Result};

/// Identifies one pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(
	/// Id returned by the host's frame request.
	pub i32,
);

/// Something that can run one tick on the next display frame.
pub trait FrameScheduler {
	/// Request a single tick on the next frame.
	fn schedule_tick(&mut self) -> Result<FrameHandle>;
	/// Drop a pending request. Unknown or already fired handles are ignored.
	fn cancel_tick(&mut self, handle: FrameHandle);
}

/// Shared slot holding the closure run on every frame.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`FrameScheduler`] on top of `requestAnimationFrame`.
pub struct RafScheduler {
	window: Window,
	callback: FrameCallback,
}

impl RafScheduler {
	/// Scheduler running whatever closure is installed in `callback`.
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameScheduler for RafScheduler {
	fn schedule_tick(&mut self) -> Result<FrameHandle> {
		let slot = self.callback.borrow();
		let Some(cb) = slot.as_ref() else {
			return Err(Error::Js {
				context: "request_animation_frame",
				message: "frame callback not installed".into(),
			});
		};
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.map(FrameHandle)
			.map_err(|e| Error::js("request_animation_frame", e))
	}

	fn cancel_tick(&mut self, handle: FrameHandle) {
		if let Err(e) = self.window.cancel_animation_frame(handle.0) {
			debug!(
				"portfolio-particles: cancel of frame {} failed: {}",
				handle.0,
				Error::js("cancel_animation_frame", e)
			);
		}
	}
}

#[cfg(test)]
pub(crate) mod counting {
	use super::*;

	/// Scheduler double tracking what was requested and cancelled.
	#[derive(Default)]
	pub struct CountingScheduler {
		pub scheduled: Vec<FrameHandle>,
		pub cancelled: Vec<FrameHandle>,
		pub fail: bool,
		next: i32,
	}

	impl FrameScheduler for CountingScheduler {
		fn schedule_tick(&mut self) -> Result<FrameHandle> {
			if self.fail {
				return Err(Error::Js {
					context: "request_animation_frame",
					message: "refused".into(),
				});
			}
			self.next += 1;
			let handle = FrameHandle(self.next);
			self.scheduled.push(handle);
			Ok(handle)
		}

		fn cancel_tick(&mut self, handle: FrameHandle) {
			self.cancelled.push(handle);
		}
	}
}
