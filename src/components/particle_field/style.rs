//! Visual styling for the particle field.

/// RGB color; alpha is supplied per particle at creation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgba()` string with the given alpha.
	pub fn to_css_rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// Ranges the field samples from when seeding particles.
///
/// Defaults match the original backdrop: faint white dots between half a
/// logical unit and one and a half across, drifting at up to a quarter unit
/// per frame on each axis.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	pub color: Color,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Velocity components are drawn from `[-drift, drift)`.
	pub drift: f64,
	pub alpha_min: f64,
	pub alpha_max: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(255, 255, 255),
			radius_min: 0.5,
			radius_max: 1.5,
			drift: 0.25,
			alpha_min: 0.2,
			alpha_max: 0.7,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_rgba_formatting() {
		assert_eq!(
			Color::rgb(255, 255, 255).to_css_rgba(0.5),
			"rgba(255, 255, 255, 0.5)"
		);
		assert_eq!(Color::rgb(10, 20, 30).to_css_rgba(1.0), "rgba(10, 20, 30, 1)");
	}
}
