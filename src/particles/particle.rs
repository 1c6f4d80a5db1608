//! Single particle state and its per-frame update rule.

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use crate::config::FieldConfig;
use crate::math::Vector2;

/// A fading dot with position, velocity and a frame countdown.
///
/// `life` never exceeds `max_life`, and `opacity` is always
/// `life / max_life`. A particle whose life reached zero is dead.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in viewport space.
    pub position: Vector2,
    /// Velocity in pixels per frame.
    pub velocity: Vector2,
    size: f32,
    life: u32,
    max_life: u32,
    opacity: f32,
}

impl Particle {
    /// Create a particle at full life. A `max_life` of zero is raised to one.
    pub fn new(position: Vector2, velocity: Vector2, size: f32, max_life: u32) -> Self {
        let max_life = max_life.max(1);
        Self {
            position,
            velocity,
            size,
            life: max_life,
            max_life,
            opacity: 1.0,
        }
    }

    /// Create a particle at `position` with randomized velocity and size.
    pub fn spawn<R: Rng + ?Sized>(position: Vector2, config: &FieldConfig, rng: &mut R) -> Self {
        let velocity = Vector2::new(
            (rng.random::<f32>() - 0.5) * config.velocity_spread,
            (rng.random::<f32>() - 0.5) * config.velocity_spread,
        );
        let size = rng.random::<f32>() * config.size_range + config.size_min;
        Self::new(position, velocity, size, config.lifetime)
    }

    /// Drawn radius.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Remaining frames.
    #[inline]
    pub fn life(&self) -> u32 {
        self.life
    }

    /// Frames the particle started with.
    #[inline]
    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    /// Draw alpha, `life / max_life`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the particle has run out of life.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    /// Advance one frame: attraction, damping, speed clamp, integration, aging.
    pub(crate) fn step(&mut self, pointer: Vector2, config: &FieldConfig) {
        let to_pointer = pointer - self.position;
        let distance = to_pointer.length();

        // A coincident or non-finite pointer has no direction to pull along.
        if distance > 0.0 && distance < config.attraction_radius {
            self.velocity += Vector2::from_angle(to_pointer.angle()) * config.attraction_strength;
        }

        self.velocity *= config.damping;
        self.velocity = self.velocity.clamp_length(config.max_speed);
        self.position += self.velocity;

        self.life = self.life.saturating_sub(1);
        self.opacity = self.life as f32 / self.max_life as f32;
    }

    /// Flat snapshot for host-side rendering.
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            size: self.size,
            opacity: self.opacity,
        }
    }
}

/// Particle snapshot laid out for upload as a flat `f32` buffer (16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Position (x, y).
    pub position: [f32; 2],
    /// Radius.
    pub size: f32,
    /// Alpha.
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_ranges() {
        let config = FieldConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..1000 {
            let p = Particle::spawn(Vector2::new(5.0, 6.0), &config, &mut rng);
            assert_eq!(p.position, Vector2::new(5.0, 6.0));
            assert!(p.size() >= 0.5 && p.size() < 2.5);
            assert!(p.velocity.x >= -1.5 && p.velocity.x < 1.5);
            assert!(p.velocity.y >= -1.5 && p.velocity.y < 1.5);
            assert_eq!(p.life(), 300);
            assert_eq!(p.max_life(), 300);
            assert_eq!(p.opacity(), 1.0);
        }
    }

    #[test]
    fn test_zero_max_life_is_raised() {
        let p = Particle::new(Vector2::ZERO, Vector2::ZERO, 1.0, 0);
        assert_eq!(p.max_life(), 1);
        assert!(!p.is_dead());
    }

    #[test]
    fn test_coincident_pointer_is_no_op() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vector2::new(10.0, 10.0), Vector2::ZERO, 1.0, 300);
        p.step(Vector2::new(10.0, 10.0), &config);
        assert_eq!(p.velocity, Vector2::ZERO);
        assert_eq!(p.position, Vector2::new(10.0, 10.0));
        assert!(p.velocity.is_finite());
    }

    #[test]
    fn test_life_never_underflows() {
        let config = FieldConfig::default();
        let mut p = Particle::new(Vector2::ZERO, Vector2::ZERO, 1.0, 2);
        for _ in 0..5 {
            p.step(Vector2::new(1000.0, 1000.0), &config);
        }
        assert_eq!(p.life(), 0);
        assert_eq!(p.opacity(), 0.0);
        assert!(p.is_dead());
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 16);
        let p = Particle::new(Vector2::new(1.0, 2.0), Vector2::ZERO, 3.0, 10);
        let instances = [p.instance()];
        let floats: &[f32] = bytemuck::cast_slice(&instances);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 1.0]);
    }
}
