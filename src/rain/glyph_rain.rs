//! Falling glyph columns drawn over a slowly fading background.

use rand::Rng;

use crate::config::RainConfig;
use crate::core::Interval;
use crate::math::Vector2;
use crate::surface::Surface;

/// Column-based glyph rain.
///
/// Each column tracks the row its drop has reached. A step fades the
/// previous frame, draws one random glyph per column, and advances every
/// drop by one row; drops that left the bottom edge restart at random.
#[derive(Debug, Clone)]
pub struct GlyphRain {
    config: RainConfig,
    glyphs: Vec<char>,
    drops: Vec<u32>,
    interval: Interval,
}

impl GlyphRain {
    /// Create a rain sized for a surface `width` pixels wide.
    pub fn new(mut config: RainConfig, width: f32) -> Self {
        if !(0.0..=1.0).contains(&config.reset_probability) {
            config.reset_probability = RainConfig::default().reset_probability;
        }
        let mut glyphs: Vec<char> = config.glyphs.chars().collect();
        if glyphs.is_empty() {
            glyphs = RainConfig::default().glyphs.chars().collect();
        }
        let interval = Interval::new(config.period_ms);
        let mut rain = Self {
            config,
            glyphs,
            drops: Vec::new(),
            interval,
        };
        rain.resize(width);
        rain
    }

    /// Number of glyph columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Current drop row of every column.
    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Recompute the column count for a new width. Existing drops keep
    /// their rows; new columns start at the top.
    pub fn resize(&mut self, width: f32) {
        let font_size = self.config.font_size.max(1.0);
        let columns = if width.is_finite() && width > 0.0 {
            (width / font_size).floor() as usize
        } else {
            0
        };
        self.drops.resize(columns, 0);
    }

    /// Draw one step.
    pub fn step<S, R>(&mut self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let font_size = self.config.font_size;
        let (width, height) = (surface.width(), surface.height());

        surface.set_global_alpha(1.0);
        surface.fill_rect(0.0, 0.0, width, height, self.config.fade);

        surface.set_global_alpha(self.config.glyph_alpha);
        let mut buf = [0u8; 4];
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = self.glyphs[rng.random_range(0..self.glyphs.len())];
            let position = Vector2::new(column as f32 * font_size, *drop as f32 * font_size);
            surface.fill_text(glyph.encode_utf8(&mut buf), position, font_size, self.config.color);

            if position.y > height && rng.random_bool(self.config.reset_probability) {
                *drop = 0;
            }
            *drop += 1;
        }
        surface.set_global_alpha(1.0);
    }

    /// Feed frame time and draw every step that came due. Returns the step count.
    pub fn run<S, R>(&mut self, surface: &mut S, dt_ms: f64, rng: &mut R) -> u32
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let due = self.interval.advance(dt_ms);
        for _ in 0..due {
            self.step(surface, rng);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_columns_follow_width() {
        let mut rain = GlyphRain::new(RainConfig::default(), 100.0);
        assert_eq!(rain.columns(), 7);
        rain.resize(140.0);
        assert_eq!(rain.columns(), 10);
        rain.resize(-1.0);
        assert_eq!(rain.columns(), 0);
    }

    #[test]
    fn test_step_draws_one_glyph_per_column() {
        let config = RainConfig::default();
        let mut rain = GlyphRain::new(config.clone(), 140.0);
        let mut surface = RecordingSurface::new(140, 480);
        let mut rng = SmallRng::seed_from_u64(8);
        rain.step(&mut surface, &mut rng);

        let commands = surface.commands();
        assert!(matches!(
            &commands[0],
            DrawCommand::FillRect { color, alpha, .. } if *color == config.fade && *alpha == 1.0
        ));
        assert_eq!(surface.text_count(), 10);
        for (i, command) in commands[1..].iter().enumerate() {
            match command {
                DrawCommand::FillText { text, position, alpha, .. } => {
                    assert!(config.glyphs.contains(text.as_str()));
                    assert_eq!(*position, Vector2::new(i as f32 * 14.0, 0.0));
                    assert_eq!(*alpha, 0.1);
                }
                other => panic!("expected glyph, got {:?}", other),
            }
        }
        assert!(rain.drops().iter().all(|&d| d == 1));
        assert_eq!(surface.global_alpha(), 1.0);
    }

    #[test]
    fn test_only_overflowing_drops_reset() {
        let mut rain = GlyphRain::new(RainConfig::default(), 28.0);
        let mut surface = RecordingSurface::new(28, 140);
        let mut rng = SmallRng::seed_from_u64(21);

        let mut saw_reset = false;
        let mut previous = rain.drops().to_vec();
        for _ in 0..2_000 {
            rain.step(&mut surface, &mut rng);
            surface.take_commands();
            for (before, after) in previous.iter().zip(rain.drops()) {
                if *after == 1 && *before != 0 {
                    // Reset only once the drop was below the bottom edge.
                    assert!(*before as f32 * 14.0 > 140.0);
                    saw_reset = true;
                } else {
                    assert_eq!(*after, before + 1);
                }
            }
            previous = rain.drops().to_vec();
        }
        assert!(saw_reset);
    }

    #[test]
    fn test_run_uses_period() {
        let mut rain = GlyphRain::new(RainConfig::default(), 14.0);
        let mut surface = RecordingSurface::new(14, 100);
        let mut rng = SmallRng::seed_from_u64(2);
        assert_eq!(rain.run(&mut surface, 16.0, &mut rng), 0);
        assert_eq!(rain.run(&mut surface, 40.0, &mut rng), 1);
        assert_eq!(surface.text_count(), 1);
    }

    #[test]
    fn test_empty_glyph_set_falls_back() {
        let config = RainConfig {
            glyphs: String::new(),
            ..RainConfig::default()
        };
        let mut rain = GlyphRain::new(config, 14.0);
        let mut surface = RecordingSurface::new(14, 100);
        rain.step(&mut surface, &mut SmallRng::seed_from_u64(0));
        assert_eq!(surface.text_count(), 1);
    }
}
