//! # Aurum - Pointer-Reactive Particle Field for the Web
//!
//! Aurum drives the animated background of a landing page: a field of gold
//! particles that drift toward the pointer and link to their neighbours, a
//! falling glyph rain, and a handful of small page effects.
//!
//! ## Features
//!
//! - **Particles**: Short-lived particles with attraction, damping and speed clamping
//! - **Rain**: Column glyph rain over a fading canvas
//! - **Effects**: Cursor trail, statistic count-up, typewriter, card tilt, parallax
//! - **Surface**: Drawing trait with a 2D canvas backend and a recording backend for tests
//!
//! ## Example
//!
//! ```
//! use aurum::prelude::*;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut surface = RecordingSurface::new(800, 600);
//! let mut field = ParticleField::default();
//! let pointer = PointerState::centered(800.0, 600.0);
//!
//! field.spawn(Vector2::new(100.0, 100.0), &mut rng);
//! field.tick(&mut surface, pointer.position());
//! assert_eq!(field.len(), 1);
//! ```

#![warn(missing_docs)]

#[cfg(all(feature = "web", target_arch = "wasm32"))]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod core;
pub mod effects;
pub mod error;
pub mod math;
pub mod particles;
pub mod rain;
pub mod surface;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use error::{AurumError, Result};

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::config::*;
    pub use crate::core::*;
    pub use crate::effects::*;
    pub use crate::error::AurumError;
    pub use crate::math::*;
    pub use crate::particles::*;
    pub use crate::rain::*;
    pub use crate::surface::*;
}

/// Initialize the module for WASM environments.
/// Sets up the panic hook and routes `log` output to the browser console.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name.
pub const NAME: &str = "Aurum";
