//! The particle field: owns the live particles, advances and draws them.

use rand::Rng;

use super::particle::{Particle, ParticleInstance};
use crate::config::FieldConfig;
use crate::math::Vector2;
use crate::surface::Surface;

/// Pointer-reactive particle field.
///
/// Particles are attracted toward the pointer, damped, speed-limited and
/// aged once per [`update`](Self::update). Dead particles are removed by the
/// same pass that killed them, so [`render`](Self::render) only ever sees
/// live ones.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create an empty field.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate over the live particles.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Append one randomized particle at `position`.
    pub fn spawn<R: Rng + ?Sized>(&mut self, position: Vector2, rng: &mut R) {
        let particle = Particle::spawn(position, &self.config, rng);
        self.particles.push(particle);
    }

    /// Append a prebuilt particle.
    pub fn push(&mut self, particle: Particle) {
        if !particle.is_dead() {
            self.particles.push(particle);
        }
    }

    /// Remove every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advance every particle one frame toward `pointer` and drop the dead.
    pub fn update(&mut self, pointer: Vector2) {
        let config = &self.config;
        for particle in &mut self.particles {
            particle.step(pointer, config);
        }
        self.particles.retain(|p| !p.is_dead());
    }

    /// Alpha of the link between two particle positions, or `None` when no
    /// link is drawn. Symmetric in its arguments.
    pub fn link_alpha(&self, a: &Vector2, b: &Vector2) -> Option<f32> {
        let distance = a.distance_to(b);
        // Coincident particles have no segment to draw.
        if distance > 0.0 && distance < self.config.link_distance {
            Some((1.0 - distance / self.config.link_distance) * self.config.link_alpha)
        } else {
            None
        }
    }

    /// Draw background, particles, links and the pointer glow.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, pointer: Vector2) {
        let config = &self.config;

        surface.clear(config.background);

        for particle in &self.particles {
            surface.set_global_alpha(particle.opacity());
            surface.fill_circle(particle.position, particle.size(), config.accent);
        }

        let link_distance_sq = config.link_distance * config.link_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if a.position.distance_to_squared(&b.position) >= link_distance_sq {
                    continue;
                }
                if let Some(alpha) = self.link_alpha(&a.position, &b.position) {
                    surface.set_global_alpha(alpha);
                    surface.stroke_line(a.position, b.position, config.link_width, config.link_color);
                }
            }
        }

        surface.set_global_alpha(1.0);
        if pointer.is_finite() {
            surface.fill_radial_gradient(
                pointer,
                config.glow_radius,
                config.accent.with_alpha(config.glow_alpha),
                config.accent.with_alpha(0.0),
            );
        }
    }

    /// One frame: [`update`](Self::update) then [`render`](Self::render).
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, pointer: Vector2) {
        self.update(pointer);
        self.render(surface, pointer);
    }

    /// Snapshot of the live particles for host-side rendering.
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles.iter().map(Particle::instance).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const FAR: Vector2 = Vector2::new(10_000.0, 10_000.0);

    fn field_with(particles: &[Particle]) -> ParticleField {
        let mut field = ParticleField::default();
        for p in particles {
            field.push(p.clone());
        }
        field
    }

    #[test]
    fn test_far_pointer_only_damps() {
        let p = Particle::new(Vector2::new(100.0, 100.0), Vector2::new(1.2, -0.8), 1.0, 300);
        let mut field = field_with(&[p]);
        field.update(Vector2::new(100.0, 400.0));

        let q = field.iter().next().unwrap();
        assert!(q.velocity.approx_eq(&Vector2::new(1.2 * 0.99, -0.8 * 0.99), 1e-6));
        assert!(q
            .position
            .approx_eq(&Vector2::new(100.0 + 1.2 * 0.99, 100.0 - 0.8 * 0.99), 1e-4));
        assert_eq!(q.life(), 299);
        assert_eq!(q.opacity(), 299.0 / 300.0);
    }

    #[test]
    fn test_spawn_then_update_damps_seeded_velocity() {
        let mut rng = SmallRng::seed_from_u64(21);
        let mut field = ParticleField::default();
        let start = Vector2::new(100.0, 100.0);
        field.spawn(start, &mut rng);
        let spawned = field.iter().next().unwrap().velocity;

        field.update(Vector2::new(100.0, 400.0));

        let q = field.iter().next().unwrap();
        let damped = spawned * 0.99;
        assert!(q.velocity.approx_eq(&damped, 1e-6));
        assert!(q.position.approx_eq(&(start + damped), 1e-4));
        assert_eq!(q.life(), 299);
    }

    #[test]
    fn test_attraction_points_at_pointer() {
        let start = Vector2::new(200.0, 200.0);
        let pointer = Vector2::new(260.0, 280.0);
        let p = Particle::new(start, Vector2::ZERO, 1.0, 300);
        let mut field = field_with(&[p]);
        field.update(pointer);

        let q = field.iter().next().unwrap();
        let direction = pointer - start;
        assert!(q.velocity.dot(&direction) > 0.0);
        assert!((q.velocity.length() - 0.2 * 0.99).abs() < 1e-5);
    }

    #[test]
    fn test_speed_is_clamped() {
        let p = Particle::new(Vector2::ZERO, Vector2::new(40.0, -30.0), 1.0, 300);
        let mut field = field_with(&[p]);
        field.update(Vector2::new(5.0, 5.0));
        let q = field.iter().next().unwrap();
        assert!(q.velocity.length() <= 10.0 + 1e-4);
    }

    #[test]
    fn test_dead_particles_are_reaped() {
        let short = Particle::new(Vector2::ZERO, Vector2::ZERO, 1.0, 1);
        let long = Particle::new(Vector2::new(1.0, 0.0), Vector2::ZERO, 1.0, 3);
        let mut field = field_with(&[short, long]);

        field.update(FAR);
        assert_eq!(field.len(), 1);
        assert_eq!(field.iter().next().unwrap().max_life(), 3);

        field.update(FAR);
        field.update(FAR);
        assert!(field.is_empty());
    }

    #[test]
    fn test_life_and_opacity_invariants() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = ParticleField::default();
        for i in 0..40 {
            field.spawn(Vector2::new(i as f32 * 7.0, 300.0), &mut rng);
        }
        for frame in 0..320 {
            let pointer = Vector2::new(frame as f32, 250.0);
            field.update(pointer);
            for p in field.iter() {
                assert!(p.life() >= 1 && p.life() <= p.max_life());
                assert_eq!(p.opacity(), p.life() as f32 / p.max_life() as f32);
                assert!(p.velocity.length() <= 10.0 + 1e-4);
                assert!(p.position.is_finite());
            }
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_link_alpha_symmetric() {
        let field = ParticleField::default();
        let a = Vector2::new(3.0, 7.0);
        let b = Vector2::new(90.0, 41.0);
        let ab = field.link_alpha(&a, &b).unwrap();
        let ba = field.link_alpha(&b, &a).unwrap();
        assert_eq!(ab, ba);
        let expected = (1.0 - a.distance_to(&b) / 150.0) * 0.3;
        assert!((ab - expected).abs() < 1e-6);

        assert_eq!(field.link_alpha(&a, &a), None);
        assert_eq!(field.link_alpha(&Vector2::ZERO, &Vector2::new(150.0, 0.0)), None);
    }

    #[test]
    fn test_render_order() {
        let p = Particle::new(Vector2::new(10.0, 10.0), Vector2::ZERO, 2.0, 300);
        let field = field_with(&[p]);
        let mut surface = RecordingSurface::new(320, 240);
        field.render(&mut surface, Vector2::new(50.0, 60.0));

        let config = FieldConfig::default();
        let commands = surface.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            DrawCommand::FillRect { width, height, alpha, color, .. }
                if width == 320.0 && height == 240.0 && alpha == 1.0 && color == config.background
        ));
        assert!(matches!(
            commands[1],
            DrawCommand::FillCircle { radius, alpha, .. } if radius == 2.0 && alpha == 1.0
        ));
        match &commands[2] {
            DrawCommand::RadialGradient { center, radius, inner, outer, alpha } => {
                assert_eq!(*center, Vector2::new(50.0, 60.0));
                assert_eq!(*radius, 200.0);
                assert_eq!(inner.a, 0.15);
                assert_eq!(outer.a, 0.0);
                assert_eq!(*alpha, 1.0);
            }
            other => panic!("expected glow, got {:?}", other),
        }
    }

    #[test]
    fn test_coincident_particles_draw_no_link() {
        let a = Particle::new(Vector2::new(5.0, 5.0), Vector2::ZERO, 1.0, 300);
        let field = field_with(&[a.clone(), a]);
        let mut surface = RecordingSurface::new(100, 100);
        field.render(&mut surface, Vector2::ZERO);
        assert_eq!(surface.line_count(), 0);
        assert_eq!(surface.circle_count(), 2);
    }

    #[test]
    fn test_push_ignores_dead() {
        let mut p = Particle::new(Vector2::ZERO, Vector2::ZERO, 1.0, 1);
        p.step(FAR, &FieldConfig::default());
        let mut field = ParticleField::default();
        field.push(p);
        assert!(field.is_empty());
    }

    #[test]
    fn test_only_close_pair_is_linked() {
        let mut field = field_with(&[
            Particle::new(Vector2::new(0.0, 0.0), Vector2::ZERO, 1.0, 300),
            Particle::new(Vector2::new(50.0, 0.0), Vector2::ZERO, 1.0, 300),
            Particle::new(Vector2::new(500.0, 500.0), Vector2::ZERO, 1.0, 300),
        ]);
        let mut surface = RecordingSurface::new(800, 600);
        field.tick(&mut surface, FAR);

        assert_eq!(surface.circle_count(), 3);
        assert_eq!(surface.line_count(), 1);
        let line = surface
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokeLine { from, to, alpha, .. } => Some((*from, *to, *alpha)),
                _ => None,
            })
            .unwrap();
        assert_eq!(line.0, Vector2::ZERO);
        assert_eq!(line.1, Vector2::new(50.0, 0.0));
        let expected = (1.0 - 50.0 / 150.0) * 0.3;
        assert!((line.2 - expected).abs() < 1e-6);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let run = || {
            let mut rng = SmallRng::seed_from_u64(11);
            let mut field = ParticleField::default();
            let mut surface = RecordingSurface::new(400, 300);
            for frame in 0..60 {
                field.spawn(Vector2::new(frame as f32 * 5.0, 150.0), &mut rng);
                field.tick(&mut surface, Vector2::new(200.0, 150.0));
            }
            field.instances()
        };
        let a = run();
        let b = run();
        assert_eq!(a.len(), 60);
        assert_eq!(bytemuck::cast_slice::<_, f32>(&a), bytemuck::cast_slice::<_, f32>(&b));
    }
}
