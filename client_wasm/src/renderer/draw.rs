use game_core::{Scene, Shape};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Clear the canvas and paint every shape of the scene, scaled from the
/// logical play area to the canvas size.
pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    scale: f64,
    scene: &Scene,
) -> Result<(), JsValue> {
    ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.area.x as f64, scene.area.y as f64);

    for shape in &scene.shapes {
        match *shape {
            Shape::Rect { color, pos, size } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            Shape::Circle {
                color,
                center,
                radius,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
                ctx.set_fill_style_str(color);
                ctx.fill();
                ctx.close_path();
            }
        }
    }

    Ok(())
}
