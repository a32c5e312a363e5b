//! Host-facing configuration for the particle field.

use serde::Deserialize;

/// Tuning knobs for a mounted field, typically loaded from embedded JSON.
///
/// `staticity` and `ease` are raw inputs; the component divides both by 1000
/// before they reach the simulation.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Target particle population.
	pub quantity: usize,
	/// Movement-scale input; larger drifts faster.
	pub staticity: f64,
	/// Damping input; larger settles faster.
	pub ease: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			quantity: 30,
			staticity: 50.0,
			ease: 50.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let config: FieldConfig = serde_json::from_str(r#"{ "quantity": 80 }"#).unwrap();
		assert_eq!(config.quantity, 80);
		assert_eq!(config.staticity, 50.0);
		assert_eq!(config.ease, 50.0);

		let config: FieldConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config.quantity, 30);
	}
}
