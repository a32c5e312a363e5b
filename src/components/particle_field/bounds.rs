//! Surface sizing for density-aware canvas rendering.
//!
//! The canvas backing store is sized in physical pixels while all simulation
//! and drawing happens in logical (CSS) units; the 2d context is scaled by
//! the device pixel ratio to bridge the two.

/// Snapshot of the drawing surface dimensions in both coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceDescriptor {
	/// Logical (CSS) width.
	pub logical_width: f64,
	/// Logical (CSS) height.
	pub logical_height: f64,
	/// Backing-store width, `logical_width * pixel_ratio`.
	pub pixel_width: f64,
	/// Backing-store height, `logical_height * pixel_ratio`.
	pub pixel_height: f64,
	/// Device scale factor applied to the drawing context.
	pub pixel_ratio: f64,
}

impl SurfaceDescriptor {
	/// A zero-sized surface means the simulation is paused, not broken.
	pub fn is_empty(&self) -> bool {
		self.logical_width <= 0.0 || self.logical_height <= 0.0
	}
}

/// Tracks the current surface size and recomputes it on resize.
///
/// The pixel ratio is captured once at construction. A display-density change
/// mid-session would render at a stale scale; the original behaves the same
/// way and no host currently re-reads it.
pub struct BoundsTracker {
	pixel_ratio: f64,
	current: SurfaceDescriptor,
}

impl BoundsTracker {
	pub fn new(pixel_ratio: f64) -> Self {
		let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
			pixel_ratio
		} else {
			1.0
		};
		Self {
			pixel_ratio,
			current: SurfaceDescriptor {
				logical_width: 0.0,
				logical_height: 0.0,
				pixel_width: 0.0,
				pixel_height: 0.0,
				pixel_ratio,
			},
		}
	}

	/// Recompute the descriptor from the container's logical size.
	///
	/// Negative inputs clamp to zero; the caller treats an empty descriptor
	/// as "paused", never as an error.
	pub fn resize(&mut self, logical_width: f64, logical_height: f64) -> SurfaceDescriptor {
		let w = logical_width.max(0.0);
		let h = logical_height.max(0.0);
		self.current = SurfaceDescriptor {
			logical_width: w,
			logical_height: h,
			pixel_width: w * self.pixel_ratio,
			pixel_height: h * self.pixel_ratio,
			pixel_ratio: self.pixel_ratio,
		};
		self.current
	}

	pub fn descriptor(&self) -> SurfaceDescriptor {
		self.current
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resize_scales_pixel_size_by_ratio() {
		let mut bounds = BoundsTracker::new(2.0);
		let desc = bounds.resize(400.0, 300.0);
		assert_eq!(desc.logical_width, 400.0);
		assert_eq!(desc.logical_height, 300.0);
		assert_eq!(desc.pixel_width, 800.0);
		assert_eq!(desc.pixel_height, 600.0);
		assert_eq!(desc.pixel_ratio, 2.0);
		assert!(!desc.is_empty());
		assert_eq!(bounds.descriptor(), desc);
	}

	#[test]
	fn zero_and_negative_sizes_yield_empty_descriptor() {
		let mut bounds = BoundsTracker::new(1.5);
		assert!(bounds.resize(0.0, 300.0).is_empty());
		let desc = bounds.resize(-10.0, -5.0);
		assert_eq!(desc.logical_width, 0.0);
		assert_eq!(desc.logical_height, 0.0);
		assert!(desc.is_empty());
	}

	#[test]
	fn bogus_pixel_ratio_falls_back_to_one() {
		let mut bounds = BoundsTracker::new(0.0);
		assert_eq!(bounds.resize(100.0, 100.0).pixel_width, 100.0);
		let mut bounds = BoundsTracker::new(f64::NAN);
		assert_eq!(bounds.resize(100.0, 100.0).pixel_ratio, 1.0);
	}
}
