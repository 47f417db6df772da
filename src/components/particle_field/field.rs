//! The particle field: seeding, per-frame stepping and the proximity pass.

use fastrand::Rng;

use super::config::FieldConfig;
use super::particle::Particle;
use super::render::{self, Surface};
use super::theme::Palette;

/// Number of particles seeded for a `width` x `height` canvas.
///
/// `min(max_particles, floor(width * height / area_per_particle))`.
pub fn particle_count(width: u32, height: u32, config: &FieldConfig) -> usize {
	let area = width as f64 * height as f64;
	let budget = (area / config.area_per_particle).floor() as usize;
	budget.min(config.max_particles)
}

/// Stroke alpha for a connection at squared distance `distance_sq`, in `[0, 1]`.
pub fn link_alpha(distance_sq: f64, config: &FieldConfig) -> f64 {
	(config.line_alpha * (1.0 - distance_sq / config.fade_distance)).clamp(0.0, 1.0)
}

/// All simulated particles plus the canvas size they were seeded against.
pub struct Field {
	config: FieldConfig,
	palette: Palette,
	rng: Rng,
	particles: Vec<Particle>,
	width: u32,
	height: u32,
}

impl Field {
	/// An empty field; call [`Field::init`] to seed it.
	pub fn new(config: FieldConfig, palette: Palette, rng: Rng) -> Self {
		Self {
			config,
			palette,
			rng,
			particles: Vec::new(),
			width: 0,
			height: 0,
		}
	}

	/// Tuning the field was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Current particles.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Canvas size the particles were seeded against.
	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	/// Discard every particle and re-seed for a `width` x `height` canvas.
	///
	/// Positions are drawn from `[2r, dim - 2r)`. The new collection is built
	/// aside and swapped in whole.
	pub fn init(&mut self, width: u32, height: u32) {
		let count = particle_count(width, height, &self.config);
		let (w, h) = (width as f64, height as f64);
		let cfg = &self.config;
		let mut seeded = Vec::with_capacity(count);

		for _ in 0..count {
			let size = self.rng.f64() * cfg.size_range + cfg.size_min;
			let x = self.rng.f64() * ((w - size * 2.0) - size * 2.0) + size * 2.0;
			let y = self.rng.f64() * ((h - size * 2.0) - size * 2.0) + size * 2.0;
			let dx = self.rng.f64() * cfg.max_speed * 2.0 - cfg.max_speed;
			let dy = self.rng.f64() * cfg.max_speed * 2.0 - cfg.max_speed;
			let color = if self.rng.bool() {
				self.palette.primary
			} else {
				self.palette.secondary
			};

			seeded.push(Particle {
				x,
				y,
				dx,
				dy,
				size,
				color,
			});
		}

		self.particles = seeded;
		self.width = width;
		self.height = height;
		log::debug!(
			"portfolio-particles: seeded {} particles for {}x{}",
			count,
			width,
			height
		);
	}

	/// Move every particle one frame and draw it at its new position.
	pub fn step(&mut self, surface: &mut dyn Surface) {
		let (w, h) = (self.width as f64, self.height as f64);
		for p in &mut self.particles {
			p.update(w, h);
			render::draw_particle(surface, p);
		}
	}

	/// Call `f` once for every unordered pair of distinct particles.
	pub fn visit_pairs(&self, mut f: impl FnMut(&Particle, &Particle, f64)) {
		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				f(a, b, a.distance_squared(b));
			}
		}
	}

	/// Draw a fading line between every pair closer than the cutoff.
	///
	/// Distances stay squared throughout. Returns the number of lines drawn.
	pub fn connect(&self, surface: &mut dyn Surface) -> usize {
		let cutoff = self
			.config
			.cutoff(self.width as f64, self.height as f64);
		let mut drawn = 0;

		self.visit_pairs(|a, b, distance_sq| {
			if distance_sq < cutoff {
				let color = self
					.palette
					.link
					.with_alpha(link_alpha(distance_sq, &self.config));
				render::draw_link(surface, a, b, self.config.line_width, color);
				drawn += 1;
			}
		});
		drawn
	}
}
