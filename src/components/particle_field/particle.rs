//! A single drifting particle.

use super::theme::Color;

/// Position, velocity, radius and color of one particle.
///
/// Kinematics only; drawing lives in [`super::render`].
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in canvas pixels.
	pub x: f64,
	/// Vertical position in canvas pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub dx: f64,
	/// Vertical velocity, pixels per frame.
	pub dy: f64,
	/// Radius, fixed for the particle's lifetime.
	pub size: f64,
	/// Fill color, picked at seeding.
	pub color: Color,
}

impl Particle {
	/// Advance one frame inside a `width` x `height` box.
	///
	/// An axis whose leading edge has crossed a wall has its velocity
	/// negated before the step. Positions are never clamped, so a particle
	/// may overshoot a wall by at most one step.
	pub fn update(&mut self, width: f64, height: f64) {
		if self.x + self.size > width || self.x - self.size < 0.0 {
			self.dx = -self.dx;
		}
		if self.y + self.size > height || self.y - self.size < 0.0 {
			self.dy = -self.dy;
		}
		self.x += self.dx;
		self.y += self.dy;
	}

	/// Squared Euclidean distance to `other`.
	pub fn distance_squared(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}
}
