//! Drawing surface abstraction.
//!
//! Effects draw through [`Surface`] so the same code renders into a browser
//! canvas (see `web::CanvasSurface`) or into a [`RecordingSurface`] that
//! keeps the issued commands for inspection.

use crate::math::{Color, Vector2};

/// A 2D drawing target with canvas-style primitives.
///
/// Every primitive is drawn with the global alpha most recently passed to
/// [`Surface::set_global_alpha`], multiplied with the color's own alpha.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> f32;

    /// Surface height in pixels.
    fn height(&self) -> f32;

    /// Resize the backing store. Content is discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Set the alpha applied to subsequent draws.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color);

    /// Fill the square bounding `center ± radius` with a radial gradient
    /// from `inner` at the center to `outer` at `radius`.
    fn fill_radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color);

    /// Draw a text run starting at `position` on its alphabetic baseline.
    fn fill_text(&mut self, text: &str, position: Vector2, font_px: f32, color: Color);

    /// Clear the whole surface with an opaque fill.
    fn clear(&mut self, color: Color) {
        self.set_global_alpha(1.0);
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0.0, 0.0, w, h, color);
    }
}

/// A recorded draw call together with the global alpha in effect.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::fill_rect`].
    FillRect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill color.
        color: Color,
        /// Global alpha.
        alpha: f32,
    },
    /// [`Surface::fill_circle`].
    FillCircle {
        /// Circle center.
        center: Vector2,
        /// Circle radius.
        radius: f32,
        /// Fill color.
        color: Color,
        /// Global alpha.
        alpha: f32,
    },
    /// [`Surface::stroke_line`].
    StrokeLine {
        /// Start point.
        from: Vector2,
        /// End point.
        to: Vector2,
        /// Stroke width.
        width: f32,
        /// Stroke color.
        color: Color,
        /// Global alpha.
        alpha: f32,
    },
    /// [`Surface::fill_radial_gradient`].
    RadialGradient {
        /// Gradient center.
        center: Vector2,
        /// Gradient radius.
        radius: f32,
        /// Color at the center.
        inner: Color,
        /// Color at the radius.
        outer: Color,
        /// Global alpha.
        alpha: f32,
    },
    /// [`Surface::fill_text`].
    FillText {
        /// Text drawn.
        text: String,
        /// Baseline start.
        position: Vector2,
        /// Font size in pixels.
        font_px: f32,
        /// Fill color.
        color: Color,
        /// Global alpha.
        alpha: f32,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    global_alpha: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create a recorder with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            global_alpha: 1.0,
            commands: Vec::new(),
        }
    }

    /// All commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current global alpha.
    pub fn global_alpha(&self) -> f32 {
        self.global_alpha
    }

    /// Number of recorded line strokes.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }

    /// Number of recorded circle fills.
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Number of recorded text runs.
    pub fn text_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillText { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        self.commands.clear();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
            alpha: self.global_alpha,
        });
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
            alpha: self.global_alpha,
        });
    }

    fn stroke_line(&mut self, from: Vector2, to: Vector2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
            alpha: self.global_alpha,
        });
    }

    fn fill_radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color) {
        self.commands.push(DrawCommand::RadialGradient {
            center,
            radius,
            inner,
            outer,
            alpha: self.global_alpha,
        });
    }

    fn fill_text(&mut self, text: &str, position: Vector2, font_px: f32, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
            font_px,
            color,
            alpha: self.global_alpha,
        });
    }
}
