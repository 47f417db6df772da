//! Tuning constants for the particle field.
//!
//! Every field has a default, so a page may override any subset of them with
//! a JSON object such as `{ "max_particles": 90, "pause_threshold": 500 }`.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Simulation, connection and lifecycle tuning.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Ceiling on the seeded particle count.
	pub max_particles: usize,
	/// Canvas area (px²) budgeted per particle.
	pub area_per_particle: f64,
	/// Velocity components are drawn from `[-max_speed, max_speed]`.
	pub max_speed: f64,
	/// Smallest particle radius.
	pub size_min: f64,
	/// Radii are drawn from `[size_min, size_min + size_range)`.
	pub size_range: f64,
	/// Connection cutoff is `(width / d) * (height / d)` in squared pixels.
	pub cutoff_divisor: f64,
	/// Squared distance over which a connection fades to nothing.
	pub fade_distance: f64,
	/// Line alpha for two coincident particles.
	pub line_alpha: f64,
	/// Connection stroke width in pixels.
	pub line_width: f64,
	/// Scroll offset (px) past which the animation pauses.
	pub pause_threshold: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: 150,
			area_per_particle: 12000.0,
			max_speed: 0.75,
			size_min: 1.0,
			size_range: 2.0,
			cutoff_divisor: 10.0,
			fade_distance: 20000.0,
			line_alpha: 0.2,
			line_width: 1.0,
			pause_threshold: 600.0,
		}
	}
}

impl FieldConfig {
	/// Squared-distance cutoff for a canvas of the given size.
	pub fn cutoff(&self, width: f64, height: f64) -> f64 {
		(width / self.cutoff_divisor) * (height / self.cutoff_divisor)
	}

	/// Reject values that would make counts, positions or alphas non-finite.
	pub fn validate(&self) -> Result<()> {
		let positive = [
			("area_per_particle", self.area_per_particle),
			("cutoff_divisor", self.cutoff_divisor),
			("fade_distance", self.fade_distance),
			("size_min", self.size_min),
		];
		let non_negative = [
			("size_range", self.size_range),
			("max_speed", self.max_speed),
			("line_alpha", self.line_alpha),
			("line_width", self.line_width),
		];

		for (field, value) in positive {
			if !(value.is_finite() && value > 0.0) {
				return Err(Error::InvalidConfig {
					field,
					value,
					requirement: "must be finite and positive",
				});
			}
		}
		for (field, value) in non_negative {
			if !(value.is_finite() && value >= 0.0) {
				return Err(Error::InvalidConfig {
					field,
					value,
					requirement: "must be finite and non-negative",
				});
			}
		}
		if !self.pause_threshold.is_finite() {
			return Err(Error::InvalidConfig {
				field: "pause_threshold",
				value: self.pause_threshold,
				requirement: "must be finite",
			});
		}
		Ok(())
	}
}
