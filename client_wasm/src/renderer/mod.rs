//! Canvas 2D renderer

mod draw;

pub use draw::draw_frame;

use game_core::{fit_display, Params, Scene};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    scale: f64,
    last_scene: Option<Scene>,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has an unexpected type"))?;

        let scale = canvas.width() as f64 / Params::AREA_WIDTH as f64;
        Ok(Self {
            canvas,
            ctx,
            scale,
            last_scene: None,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Size (in pixels) of the canvas backing store
    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Fit the canvas to the viewport. A degenerate viewport leaves the
    /// canvas untouched and returns false.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) -> Result<bool, JsValue> {
        let Some(size) = fit_display(viewport_width, viewport_height) else {
            debug!("ignoring viewport {}x{}", viewport_width, viewport_height);
            return Ok(false);
        };

        // Resizing wipes the canvas, so repaint whatever was last shown
        self.canvas.set_width(size.width as u32);
        self.canvas.set_height(size.height as u32);
        // Scale to the whole-pixel backing store, not the fractional fit
        self.scale = self.canvas.width() as f64 / Params::AREA_WIDTH as f64;

        if let Some(scene) = &self.last_scene {
            draw_frame(&self.ctx, self.scale, scene)?;
        }
        Ok(true)
    }

    /// Paint a scene and remember it for repaints
    pub fn present(&mut self, scene: Scene) -> Result<(), JsValue> {
        draw_frame(&self.ctx, self.scale, &scene)?;
        self.last_scene = Some(scene);
        Ok(())
    }
}
