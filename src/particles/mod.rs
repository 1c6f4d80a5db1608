//! Pointer-reactive particle field.
//!
//! Particles spawn along the pointer path, from a timed emitter trailing a
//! page element, or in click bursts. Each frame they drift toward the
//! pointer, fade out over their lifetime, and nearby pairs are linked with
//! translucent lines under a soft pointer glow.

mod emitter;
mod particle;
mod particle_field;
mod pointer;

pub use emitter::{burst, PeriodicEmitter, PointerSpawner};
pub use particle::{Particle, ParticleInstance};
pub use particle_field::ParticleField;
pub use pointer::PointerState;
