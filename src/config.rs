//! Tunable constants for every effect.
//!
//! Defaults reproduce the page's original look. Every struct is
//! `#[serde(default)]`, so a JSON object only needs the keys it overrides:
//!
//! ```
//! use aurum::config::AurumConfig;
//!
//! let config = AurumConfig::from_json(r#"{ "field": { "max_speed": 6.0 } }"#).unwrap();
//! assert_eq!(config.field.max_speed, 6.0);
//! assert_eq!(config.field.lifetime, 300);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AurumError, Result};
use crate::math::Color;

/// Page background, `#0a0a0a`.
pub const BACKGROUND_HEX: u32 = 0x0A0A0A;
/// Gold accent, `#d4af37`.
pub const ACCENT_HEX: u32 = 0xD4AF37;

/// Particle field physics, rendering and emission settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Lifetime of a new particle in frames.
    pub lifetime: u32,
    /// Initial velocity per axis is `(rand - 0.5) * velocity_spread`.
    pub velocity_spread: f32,
    /// Smallest particle radius.
    pub size_min: f32,
    /// Radius is `size_min + rand * size_range`.
    pub size_range: f32,
    /// Pointer attraction applies below this distance.
    pub attraction_radius: f32,
    /// Magnitude of the per-frame attraction impulse.
    pub attraction_strength: f32,
    /// Velocity multiplier applied every frame.
    pub damping: f32,
    /// Speed clamp.
    pub max_speed: f32,
    /// Particles closer than this are linked.
    pub link_distance: f32,
    /// Link alpha at zero distance.
    pub link_alpha: f32,
    /// Link stroke width.
    pub link_width: f32,
    /// Link stroke color.
    pub link_color: Color,
    /// Radius of the pointer glow.
    pub glow_radius: f32,
    /// Alpha of the glow at its center.
    pub glow_alpha: f32,
    /// Full-frame clear color.
    pub background: Color,
    /// Particle and glow color.
    pub accent: Color,
    /// Chance that a pointer move spawns a particle.
    pub spawn_probability: f64,
    /// Period of the decorative emitter in milliseconds.
    pub emitter_interval_ms: f64,
    /// The decorative emitter stops while the field holds this many particles.
    pub emitter_cap: usize,
    /// Particles released by a click burst.
    pub burst_count: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let accent = Color::from_hex(ACCENT_HEX);
        Self {
            lifetime: 300,
            velocity_spread: 3.0,
            size_min: 0.5,
            size_range: 2.0,
            attraction_radius: 300.0,
            attraction_strength: 0.2,
            damping: 0.99,
            max_speed: 10.0,
            link_distance: 150.0,
            link_alpha: 0.3,
            link_width: 1.0,
            link_color: accent.with_alpha(0.2),
            glow_radius: 200.0,
            glow_alpha: 0.15,
            background: Color::from_hex(BACKGROUND_HEX),
            accent,
            spawn_probability: 0.2,
            emitter_interval_ms: 100.0,
            emitter_cap: 500,
            burst_count: 10,
        }
    }
}

/// Glyph rain background settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Characters drawn by the rain.
    pub glyphs: String,
    /// Glyph cell size in pixels.
    pub font_size: f32,
    /// Step period in milliseconds.
    pub period_ms: f64,
    /// Translucent fill laid over the previous step.
    pub fade: Color,
    /// Glyph color.
    pub color: Color,
    /// Global alpha while drawing glyphs.
    pub glyph_alpha: f32,
    /// Chance per step that an off-screen drop restarts at the top.
    pub reset_probability: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            glyphs: "01アイウエオカキクケコサシスセソタチツテト".to_string(),
            font_size: 14.0,
            period_ms: 50.0,
            fade: Color::from_rgba_bytes(10, 10, 10, 0.1),
            color: Color::from_hex(ACCENT_HEX),
            glyph_alpha: 0.1,
            reset_probability: 0.05,
        }
    }
}

/// Cursor, text and card effect settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Number of pointer positions kept by the cursor trail.
    pub trail_length: usize,
    /// Steps taken by a count-up animation.
    pub counter_steps: u32,
    /// Count-up step period in milliseconds.
    pub counter_period_ms: f64,
    /// Typewriter character period in milliseconds.
    pub typewriter_period_ms: f64,
    /// Card rotation at the card edge, in degrees (half of the full swing).
    pub tilt_degrees: f32,
    /// Card scale while tilted.
    pub tilt_scale: f32,
    /// CSS perspective distance in pixels.
    pub tilt_perspective: f32,
    /// Fraction of the scroll offset applied to the particle canvas.
    pub parallax_factor: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            trail_length: 30,
            counter_steps: 50,
            counter_period_ms: 30.0,
            typewriter_period_ms: 100.0,
            tilt_degrees: 5.0,
            tilt_scale: 1.02,
            tilt_perspective: 1000.0,
            parallax_factor: 0.5,
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AurumConfig {
    /// Particle field.
    pub field: FieldConfig,
    /// Glyph rain.
    pub rain: RainConfig,
    /// Page effects.
    pub effects: EffectsConfig,
}

impl AurumConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the effects cannot run with.
    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        if field.lifetime == 0 {
            return Err(invalid("field.lifetime must be at least 1"));
        }
        positive("field.size_min", field.size_min)?;
        non_negative("field.size_range", field.size_range)?;
        non_negative("field.velocity_spread", field.velocity_spread)?;
        positive("field.attraction_radius", field.attraction_radius)?;
        non_negative("field.attraction_strength", field.attraction_strength)?;
        positive("field.max_speed", field.max_speed)?;
        positive("field.link_distance", field.link_distance)?;
        positive("field.glow_radius", field.glow_radius)?;
        positive("field.emitter_interval_ms", field.emitter_interval_ms as f32)?;
        if !(0.0..=1.0).contains(&field.damping) {
            return Err(invalid("field.damping must be within [0, 1]"));
        }
        probability("field.link_alpha", field.link_alpha as f64)?;
        probability("field.glow_alpha", field.glow_alpha as f64)?;
        probability("field.spawn_probability", field.spawn_probability)?;

        let rain = &self.rain;
        if rain.glyphs.is_empty() {
            return Err(invalid("rain.glyphs must not be empty"));
        }
        positive("rain.font_size", rain.font_size)?;
        positive("rain.period_ms", rain.period_ms as f32)?;
        probability("rain.reset_probability", rain.reset_probability)?;

        let effects = &self.effects;
        if effects.trail_length == 0 {
            return Err(invalid("effects.trail_length must be at least 1"));
        }
        if effects.counter_steps == 0 {
            return Err(invalid("effects.counter_steps must be at least 1"));
        }
        positive("effects.counter_period_ms", effects.counter_period_ms as f32)?;
        positive("effects.typewriter_period_ms", effects.typewriter_period_ms as f32)?;

        Ok(())
    }
}

fn invalid(message: &str) -> AurumError {
    AurumError::InvalidConfig(message.to_string())
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AurumError::InvalidConfig(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AurumError::InvalidConfig(format!(
            "{} must be non-negative, got {}",
            name, value
        )))
    }
}

fn probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AurumError::InvalidConfig(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )))
    }
}
