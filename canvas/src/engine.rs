use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::rain::RainField;
use crate::render;

/// Binds a [`RainField`] to a canvas element and its 2D context.
///
/// The field is public so hosts can inspect it; everything that needs the
/// browser goes through this type.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub field: RainField,
}

impl Engine {
    /// Create an engine sized to `width` x `height` CSS pixels.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        set_surface_size(&canvas, width, height);
        Ok(Self { canvas, ctx, field: RainField::new(width, height, &mut js_random) })
    }

    /// Match the drawing surface to a new viewport size.
    pub fn resize(&mut self, width: f64, height: f64) {
        set_surface_size(&self.canvas, width, height);
        self.field.resize(width, height);
    }

    /// Advance one tick and paint it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn step(&mut self, dark: bool, rng: &mut impl FnMut() -> f64) -> Result<(), JsValue> {
        let frame = self.field.tick(rng);
        render::draw(&self.ctx, &frame, dark)
    }
}

/// Uniform sample in `[0, 1)` from `Math.random`.
#[must_use]
pub fn js_random() -> f64 {
    js_sys::Math::random()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn set_surface_size(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}
