//! Drawing backend for the particle field.
//!
//! The simulation only talks to a [`Surface`]; [`CanvasSurface`] is the
//! browser implementation on top of a 2D canvas context.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particle::Particle;
use super::theme::Color;
use crate::error::{Error, Result};

/// A 2D drawable surface.
pub trait Surface {
	/// Erase the whole surface.
	fn clear(&mut self);
	/// Fill a circle centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// [`Surface`] backed by an HTML canvas element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap `canvas` and its 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| Error::js("get_context", e))?
			.ok_or(Error::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| Error::ContextUnavailable)?;
		Ok(Self { canvas, ctx })
	}

	/// Set the backing pixel dimensions. Clears the canvas as a side effect.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self) {
		self.ctx.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}

/// Draw a particle as a filled circle in its own color.
pub fn draw_particle(surface: &mut dyn Surface, particle: &Particle) {
	surface.fill_circle(particle.x, particle.y, particle.size, particle.color);
}

/// Draw a connection between two particles.
pub fn draw_link(surface: &mut dyn Surface, a: &Particle, b: &Particle, width: f64, color: Color) {
	surface.stroke_line((a.x, a.y), (b.x, b.y), width, color);
}


#[cfg(test)]
mod tests {
	use super::recording::{DrawCall, RecordingSurface};
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn particle_is_drawn_at_its_position_with_its_color() {
		let color = Color::rgba(255, 140, 0, 0.3);
		let particle = Particle {
			x: 12.0,
			y: 34.0,
			dx: 0.1,
			dy: 0.1,
			size: 2.5,
			color,
		};
		let mut surface = RecordingSurface::default();

		draw_particle(&mut surface, &particle);

		assert_eq!(
			surface.calls,
			vec![DrawCall::Circle {
				x: 12.0,
				y: 34.0,
				radius: 2.5,
				color
			}]
		);
	}
}
