//! Spawn paths feeding the particle field.

use rand::Rng;

use super::particle_field::ParticleField;
use super::pointer::PointerState;
use crate::config::FieldConfig;
use crate::core::Interval;
use crate::math::{Rect, Vector2};

/// Spawns particles along the pointer path.
///
/// Each pointer move has a fixed chance of dropping one particle at the
/// pointer. This path is uncapped; particle lifetime bounds the field.
#[derive(Debug, Clone)]
pub struct PointerSpawner {
    probability: f64,
}

impl PointerSpawner {
    /// Create a spawner. The probability is clamped to [0, 1].
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { probability }
    }

    /// Create a spawner from field settings.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.spawn_probability)
    }

    /// Record the pointer move and maybe spawn. Returns whether a particle was added.
    pub fn on_move<R: Rng + ?Sized>(
        &self,
        field: &mut ParticleField,
        pointer: &mut PointerState,
        position: Vector2,
        rng: &mut R,
    ) -> bool {
        pointer.move_to(position);
        if !position.is_finite() || !rng.random_bool(self.probability) {
            return false;
        }
        field.spawn(position, rng);
        true
    }
}

/// Timed emitter trailing a decorative page element.
///
/// Every period it emits one particle at the center of the element's
/// bounding rect, unless the element is absent or the field already holds
/// `cap` particles.
#[derive(Debug, Clone)]
pub struct PeriodicEmitter {
    interval: Interval,
    cap: usize,
}

impl PeriodicEmitter {
    /// Create an emitter with the given period and population cap.
    pub fn new(interval_ms: f64, cap: usize) -> Self {
        Self {
            interval: Interval::new(interval_ms),
            cap,
        }
    }

    /// Create an emitter from field settings.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.emitter_interval_ms, config.emitter_cap)
    }

    /// Population cap.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Feed frame time; returns how many emissions are due.
    pub fn due(&mut self, dt_ms: f64) -> u32 {
        self.interval.advance(dt_ms)
    }

    /// Emit one particle from `source`. Returns whether a particle was added.
    pub fn emit<R: Rng + ?Sized>(
        &self,
        field: &mut ParticleField,
        source: Option<Rect>,
        rng: &mut R,
    ) -> bool {
        let Some(rect) = source else {
            return false;
        };
        let center = rect.center();
        if field.len() >= self.cap || !center.is_finite() {
            return false;
        }
        field.spawn(center, rng);
        true
    }

    /// Advance by `dt_ms` and emit every due particle, sampling the source
    /// lazily once per emission.
    pub fn run<R, F>(&mut self, field: &mut ParticleField, dt_ms: f64, mut source: F, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
        F: FnMut() -> Option<Rect>,
    {
        let mut emitted = 0;
        for _ in 0..self.due(dt_ms) {
            if self.emit(field, source(), rng) {
                emitted += 1;
            }
        }
        emitted
    }
}

/// Release `count` particles at `center`, as a button click does.
pub fn burst<R: Rng + ?Sized>(
    field: &mut ParticleField,
    center: Vector2,
    count: usize,
    rng: &mut R,
) -> usize {
    if !center.is_finite() {
        return 0;
    }
    for _ in 0..count {
        field.spawn(center, rng);
    }
    log::debug!("burst of {} particles at ({}, {})", count, center.x, center.y);
    count
}
