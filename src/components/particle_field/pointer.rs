//! Pointer position tracking in surface-local coordinates.

use super::bounds::SurfaceDescriptor;

/// Last-known pointer position inside the surface, if any.
///
/// Out-of-surface coordinates are ignored rather than stored, so the pointer
/// "sticks" at its last valid position instead of jumping off-surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
	position: Option<(f64, f64)>,
}

impl PointerTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a raw pointer event.
	///
	/// `origin` is the surface's on-screen offset (its bounding rect's
	/// top-left); the position is kept only when the surface-local result
	/// lies within `[0, width) x [0, height)`.
	pub fn observe(
		&mut self,
		client_x: f64,
		client_y: f64,
		origin: (f64, f64),
		surface: &SurfaceDescriptor,
	) {
		let x = client_x - origin.0;
		let y = client_y - origin.1;
		if x >= 0.0 && x < surface.logical_width && y >= 0.0 && y < surface.logical_height {
			self.position = Some((x, y));
		}
	}

	/// Surface-local position, or `None` while the pointer has never been
	/// seen inside the surface.
	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::bounds::BoundsTracker;

	fn surface(w: f64, h: f64) -> SurfaceDescriptor {
		BoundsTracker::new(1.0).resize(w, h)
	}

	#[test]
	fn starts_outside() {
		assert_eq!(PointerTracker::new().position(), None);
	}

	#[test]
	fn observe_subtracts_origin() {
		let mut pointer = PointerTracker::new();
		pointer.observe(130.0, 245.0, (100.0, 200.0), &surface(200.0, 100.0));
		assert_eq!(pointer.position(), Some((30.0, 45.0)));
	}

	#[test]
	fn out_of_surface_events_retain_previous_position() {
		let desc = surface(200.0, 100.0);
		let mut pointer = PointerTracker::new();
		pointer.observe(50.0, 50.0, (0.0, 0.0), &desc);
		assert_eq!(pointer.position(), Some((50.0, 50.0)));

		pointer.observe(-10.0, 50.0, (0.0, 0.0), &desc);
		pointer.observe(50.0, 500.0, (0.0, 0.0), &desc);
		assert_eq!(pointer.position(), Some((50.0, 50.0)));
	}

	#[test]
	fn bounds_are_half_open() {
		let desc = surface(200.0, 100.0);
		let mut pointer = PointerTracker::new();
		// Right/bottom edges are exclusive.
		pointer.observe(200.0, 50.0, (0.0, 0.0), &desc);
		assert_eq!(pointer.position(), None);
		pointer.observe(50.0, 100.0, (0.0, 0.0), &desc);
		assert_eq!(pointer.position(), None);
		// Origin is inclusive.
		pointer.observe(0.0, 0.0, (0.0, 0.0), &desc);
		assert_eq!(pointer.position(), Some((0.0, 0.0)));
	}

	#[test]
	fn zero_surface_accepts_nothing() {
		let desc = surface(0.0, 0.0);
		let mut pointer = PointerTracker::new();
		pointer.observe(0.0, 0.0, (0.0, 0.0), &desc);
		assert_eq!(pointer.position(), None);
	}
}
