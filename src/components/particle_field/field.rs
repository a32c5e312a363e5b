//! Particle population and per-frame physics.
//!
//! The field owns every particle exclusively. Each frame the controller calls
//! [`ParticleField::step`] once, which advances, wraps, repels from the
//! pointer, and damps every particle, in that order. Reseeding discards the
//! whole population and builds a fresh one sized to the current surface.

use super::bounds::SurfaceDescriptor;
use super::style::FieldStyle;

/// Distance inside which the pointer perturbs a particle, in logical units.
pub const INTERACTION_RADIUS: f64 = 100.0;

/// Magnitude of the unit-vector impulse pushing particles off the pointer.
/// Constant within the interaction radius, zero outside; a hard cutoff, not
/// a falloff.
pub const REPULSION_STRENGTH: f64 = 0.5;

/// A single floating particle.
///
/// Radius and color are fixed at creation; only position and velocity mutate.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: String,
}

/// The set of particles plus the surface extent they wrap within.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	quantity: usize,
	style: FieldStyle,
	width: f64,
	height: f64,
	generation: u64,
}

impl ParticleField {
	/// An empty field; call [`reseed`](Self::reseed) with a sized surface
	/// before stepping.
	pub fn new(quantity: usize, style: FieldStyle) -> Self {
		Self {
			particles: Vec::new(),
			quantity,
			style,
			width: 0.0,
			height: 0.0,
			generation: 0,
		}
	}

	/// Deterministic hash in `[0, 1)`; salted per reseed so a forced refresh
	/// rearranges the field while tests stay reproducible.
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Discard all particles and create a fresh population for `surface`.
	///
	/// Yields exactly `quantity` particles, or none when the surface is
	/// empty. No particle identity survives a reseed.
	pub fn reseed(&mut self, surface: &SurfaceDescriptor) {
		self.width = surface.logical_width;
		self.height = surface.logical_height;
		self.generation += 1;
		self.particles.clear();

		if surface.is_empty() {
			return;
		}

		let salt = self.generation as f64 * 97.0;
		self.particles.reserve(self.quantity);
		for i in 0..self.quantity {
			let seed = i as f64 + salt;
			let alpha = self.style.alpha_min
				+ Self::pseudo_random(seed * 6.7) * (self.style.alpha_max - self.style.alpha_min);
			self.particles.push(Particle {
				x: Self::pseudo_random(seed * 1.1) * self.width,
				y: Self::pseudo_random(seed * 2.3) * self.height,
				vx: (Self::pseudo_random(seed * 3.7) - 0.5) * 2.0 * self.style.drift,
				vy: (Self::pseudo_random(seed * 4.1) - 0.5) * 2.0 * self.style.drift,
				radius: self.style.radius_min
					+ Self::pseudo_random(seed * 5.3)
						* (self.style.radius_max - self.style.radius_min),
				color: self.style.color.to_css_rgba(alpha),
			});
		}
	}

	/// Advance the simulation by one frame.
	///
	/// `staticity` scales position advance and `ease` is the per-frame decay
	/// fraction; both arrive already normalized (raw config divided by 1000).
	/// A zero-sized surface makes this a no-op so the frame loop can keep
	/// running until the surface regains size.
	pub fn step(&mut self, pointer: Option<(f64, f64)>, staticity: f64, ease: f64) {
		if self.width <= 0.0 || self.height <= 0.0 {
			return;
		}

		for p in &mut self.particles {
			p.x += p.vx * staticity;
			p.y += p.vy * staticity;

			// Periodic boundary: leave one edge, re-enter at the opposite.
			if p.x > self.width {
				p.x = 0.0;
			}
			if p.x < 0.0 {
				p.x = self.width;
			}
			if p.y > self.height {
				p.y = 0.0;
			}
			if p.y < 0.0 {
				p.y = self.height;
			}

			if let Some((mx, my)) = pointer {
				let (dx, dy) = (mx - p.x, my - p.y);
				let dist = (dx * dx + dy * dy).sqrt();
				// dist == 0 would divide by zero; skip that pair.
				if dist > 0.0 && dist < INTERACTION_RADIUS {
					p.vx += dx / dist * -REPULSION_STRENGTH;
					p.vy += dy / dist * -REPULSION_STRENGTH;
				}
			}

			p.vx *= 1.0 - ease;
			p.vy *= 1.0 - ease;
		}
	}

	/// Surface extent the field currently wraps within.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
