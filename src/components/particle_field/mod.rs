//! Ambient particle field canvas component.
//!
//! Renders a full-container backdrop of faint drifting dots on an HTML
//! canvas with:
//! - A continuous `requestAnimationFrame` loop stepping a 2D simulation
//! - Toroidal wrapping at the surface edges
//! - Pointer-proximity repulsion with per-frame velocity damping
//! - Device-pixel-ratio aware sizing, reseeding on every resize
//! - Full listener/loop teardown on unmount
//!
//! # Example
//!
//! ```ignore
//! use particle_field::ParticleFieldCanvas;
//!
//! view! {
//!     <div class="hero">
//!         <ParticleFieldCanvas quantity=60 staticity=40.0 ease=60.0 />
//!     </div>
//! }
//! ```

pub mod bounds;
mod component;
pub mod field;
mod pointer;
mod render;
pub mod style;
mod types;

pub use component::ParticleFieldCanvas;
pub use types::FieldConfig;
