//! Web bindings for Aurum.
//!
//! This module provides JavaScript-friendly APIs via wasm-bindgen. The page
//! owns the `requestAnimationFrame` loop and event listeners and forwards
//! them here:
//!
//! ```js
//! const app = new AurumApp("animationCanvas", "matrixCanvas", ".flying-raven", null);
//! document.addEventListener("mousemove", (e) => app.pointer_move(e.clientX, e.clientY));
//! window.addEventListener("resize", () => app.resize(innerWidth, innerHeight));
//! const loop = (t) => { app.frame(t); requestAnimationFrame(loop); };
//! requestAnimationFrame(loop);
//! ```

mod canvas;

pub use canvas::CanvasSurface;

use js_sys::Float32Array;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlCanvasElement};

use crate::config::AurumConfig;
use crate::core::Clock;
use crate::effects::{self, CountUp, CursorTrail, Tilt, Typewriter};
use crate::error::{AurumError, Result};
use crate::math::{Rect, Vector2};
use crate::particles::{self, ParticleField, PeriodicEmitter, PointerSpawner, PointerState};
use crate::rain::GlyphRain;
use crate::surface::Surface;

fn to_js(err: AurumError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn document() -> Result<Document> {
    window()
        .ok_or_else(|| AurumError::ContextUnavailable("no window object".to_string()))?
        .document()
        .ok_or_else(|| AurumError::ContextUnavailable("no document".to_string()))
}

fn viewport_size() -> Result<(u32, u32)> {
    let window =
        window().ok_or_else(|| AurumError::ContextUnavailable("no window object".to_string()))?;
    let dimension = |value: std::result::Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Ok((dimension(window.inner_width()), dimension(window.inner_height())))
}

fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AurumError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| AurumError::MissingElement(format!("{} (not a canvas)", id)))
}

fn element_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// Particle field, glyph rain and cursor trail attached to page canvases.
#[wasm_bindgen]
pub struct AurumApp {
    config: AurumConfig,
    surface: CanvasSurface,
    rain: Option<(GlyphRain, CanvasSurface)>,
    field: ParticleField,
    pointer: PointerState,
    spawner: PointerSpawner,
    emitter: PeriodicEmitter,
    emitter_source: Option<Element>,
    trail: CursorTrail,
    clock: Clock,
    rng: SmallRng,
    frame_count: u64,
}

#[wasm_bindgen]
impl AurumApp {
    /// Attach to the particle canvas `canvas_id`.
    ///
    /// The glyph rain canvas and the emitter element are optional; when
    /// absent the dependent effect is skipped. `config_json` overrides
    /// default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        rain_canvas_id: Option<String>,
        emitter_selector: Option<String>,
        config_json: Option<String>,
    ) -> std::result::Result<AurumApp, JsValue> {
        Self::create(
            canvas_id,
            rain_canvas_id.as_deref(),
            emitter_selector.as_deref(),
            config_json.as_deref(),
        )
        .map_err(to_js)
    }

    /// Advance one frame. `now_ms` is the `requestAnimationFrame` timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.tick(now_ms);

        let source = self.emitter_source.as_ref();
        self.emitter
            .run(&mut self.field, dt, || source.map(element_rect), &mut self.rng);

        if let Some((rain, surface)) = self.rain.as_mut() {
            rain.run(surface, dt, &mut self.rng);
        }

        self.field.tick(&mut self.surface, self.pointer.position());
        self.frame_count += 1;
    }

    /// Forward a pointer move in client coordinates.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let position = Vector2::new(x, y);
        self.trail.push(position);
        self.spawner
            .on_move(&mut self.field, &mut self.pointer, position, &mut self.rng);
    }

    /// Release a click burst centered at `(x, y)`. Returns the particles added.
    pub fn click_burst(&mut self, x: f32, y: f32) -> u32 {
        let count = self.config.field.burst_count;
        particles::burst(&mut self.field, Vector2::new(x, y), count, &mut self.rng) as u32
    }

    /// Resize every canvas to the viewport. Particles keep their positions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface.resize(width, height);
        if let Some((rain, surface)) = self.rain.as_mut() {
            surface.resize(width, height);
            rain.resize(width as f32);
        }
        log::debug!("resized to {}x{}", width, height);
    }

    /// Number of live particles.
    pub fn particle_count(&self) -> u32 {
        self.field.len() as u32
    }

    /// Frames rendered so far.
    pub fn frame_number(&self) -> u64 {
        self.frame_count
    }

    /// Live particles as `[x, y, size, opacity]` quadruples.
    pub fn particle_instances(&self) -> Float32Array {
        let instances = self.field.instances();
        Float32Array::from(bytemuck::cast_slice::<_, f32>(&instances))
    }

    /// Recent pointer positions as `[x, y]` pairs, oldest first.
    pub fn trail(&self) -> Float32Array {
        Float32Array::from(self.trail.to_flat().as_slice())
    }

    /// CSS transform for a card under the pointer.
    pub fn tilt_transform(&self, x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) -> String {
        let card = Rect::new(left, top, width, height);
        let effects = &self.config.effects;
        Tilt::from_pointer(Vector2::new(x, y), card, effects).to_css(effects.tilt_perspective)
    }

    /// CSS transform for a card the pointer left.
    pub fn rest_transform(&self) -> String {
        Tilt::REST.to_css(self.config.effects.tilt_perspective)
    }

    /// CSS transform for the particle canvas at `scroll_y`, if it should move.
    pub fn parallax_transform(&self, scroll_y: f32, viewport_height: f32) -> Option<String> {
        effects::parallax_offset(scroll_y, viewport_height, self.config.effects.parallax_factor)
            .map(effects::parallax_transform)
    }

    /// Count-up animation for a statistic line, if it is one.
    pub fn counter(&self, text: &str) -> Option<AurumCounter> {
        if !CountUp::is_stat_line(text) {
            return None;
        }
        let effects = &self.config.effects;
        CountUp::parse(text, effects.counter_steps).map(|inner| AurumCounter {
            inner,
            period_ms: effects.counter_period_ms,
        })
    }

    /// Typewriter reveal for `text`.
    pub fn typewriter(&self, text: &str) -> AurumTypewriter {
        AurumTypewriter {
            inner: Typewriter::new(text),
            period_ms: self.config.effects.typewriter_period_ms,
        }
    }
}

impl AurumApp {
    fn create(
        canvas_id: &str,
        rain_canvas_id: Option<&str>,
        emitter_selector: Option<&str>,
        config_json: Option<&str>,
    ) -> Result<Self> {
        let config = match config_json {
            Some(json) => AurumConfig::from_json(json)?,
            None => AurumConfig::default(),
        };
        let document = document()?;
        let (width, height) = viewport_size()?;

        let mut surface = CanvasSurface::new(find_canvas(&document, canvas_id)?)?;
        surface.resize(width, height);

        let rain = match rain_canvas_id {
            Some(id) => match find_canvas(&document, id).and_then(CanvasSurface::new) {
                Ok(mut rain_surface) => {
                    rain_surface.resize(width, height);
                    Some((GlyphRain::new(config.rain.clone(), width as f32), rain_surface))
                }
                Err(e) => {
                    log::warn!("glyph rain disabled: {}", e);
                    None
                }
            },
            None => None,
        };

        let emitter_source = emitter_selector.and_then(|selector| {
            let element = document.query_selector(selector).ok().flatten();
            if element.is_none() {
                log::warn!("emitter element '{}' not found, periodic emission disabled", selector);
            }
            element
        });

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        log::info!("{} {} attached to '{}' ({}x{})", crate::NAME, crate::VERSION, canvas_id, width, height);

        Ok(Self {
            field: ParticleField::new(config.field.clone()),
            pointer: PointerState::centered(width as f32, height as f32),
            spawner: PointerSpawner::from_config(&config.field),
            emitter: PeriodicEmitter::from_config(&config.field),
            emitter_source,
            trail: CursorTrail::new(config.effects.trail_length),
            clock: Clock::new(),
            rng: SmallRng::seed_from_u64(seed),
            frame_count: 0,
            surface,
            rain,
            config,
        })
    }
}

/// Count-up animation driven by a host timer.
#[wasm_bindgen]
pub struct AurumCounter {
    inner: CountUp,
    period_ms: f64,
}

#[wasm_bindgen]
impl AurumCounter {
    /// Next text to display, or `None` once finished.
    pub fn step(&mut self) -> Option<String> {
        self.inner.next()
    }

    /// Whether the final text has been produced.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Timer period to call [`step`](Self::step) with.
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }
}

/// Typewriter reveal driven by a host timer.
#[wasm_bindgen]
pub struct AurumTypewriter {
    inner: Typewriter,
    period_ms: f64,
}

#[wasm_bindgen]
impl AurumTypewriter {
    /// Next revealed prefix, or `None` once finished.
    pub fn step(&mut self) -> Option<String> {
        self.inner.next()
    }

    /// Whether the whole text is shown.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Timer period to call [`step`](Self::step) with.
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }
}
