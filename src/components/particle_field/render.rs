//! Canvas drawing for the particle field.
//!
//! Drawing goes through the narrow [`Surface`] trait so the simulation stays
//! independent of `web_sys` and can be exercised against a recording stub in
//! tests. Clearing the previous frame is the frame loop's job, not the
//! field's; [`render`] only paints.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;

/// The drawing capabilities the field needs, in logical units.
pub trait Surface {
	/// Erase the full surface rectangle.
	fn clear(&self, width: f64, height: f64);
	/// Paint a filled circle with a CSS color.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.set_fill_style_str(color);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Paint every particle at its current position.
pub fn render<S: Surface>(field: &ParticleField, surface: &S) {
	for p in &field.particles {
		surface.fill_circle(p.x, p.y, p.radius, &p.color);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::particle_field::bounds::BoundsTracker;
	use crate::components::particle_field::field::ParticleField;
	use crate::components::particle_field::style::FieldStyle;

	/// Records every draw call instead of painting.
	#[derive(Default)]
	struct CountingSurface {
		clears: RefCell<usize>,
		circles: RefCell<Vec<(f64, f64, f64, String)>>,
	}

	impl Surface for CountingSurface {
		fn clear(&self, _width: f64, _height: f64) {
			*self.clears.borrow_mut() += 1;
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
			self.circles.borrow_mut().push((x, y, radius, color.to_string()));
		}
	}

	#[test]
	fn render_draws_one_circle_per_particle() {
		let mut field = ParticleField::new(12, FieldStyle::default());
		field.reseed(&BoundsTracker::new(1.0).resize(300.0, 200.0));

		let surface = CountingSurface::default();
		render(&field, &surface);

		let circles = surface.circles.borrow();
		assert_eq!(circles.len(), 12);
		for ((x, y, radius, color), p) in circles.iter().zip(&field.particles) {
			assert_eq!((*x, *y, *radius), (p.x, p.y, p.radius));
			assert_eq!(color, &p.color);
		}
		// Clearing is the frame loop's concern, never render's.
		assert_eq!(*surface.clears.borrow(), 0);
	}

	#[test]
	fn idle_field_draws_nothing() {
		let mut field = ParticleField::new(12, FieldStyle::default());
		field.reseed(&BoundsTracker::new(1.0).resize(0.0, 0.0));

		let surface = CountingSurface::default();
		render(&field, &surface);
		assert!(surface.circles.borrow().is_empty());
	}
}
