// Drawing seam between the game and the page. The game only needs a handful of
// filled primitives, so anything that can draw them can host it.

use crate::color::Color;
use crate::error::GameError;
use log::warn;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
        }
    }
}

pub trait Surface {
    fn resize(&mut self, width: u32, height: u32);
    fn fill_background(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);
    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color);
    // `pos` is the top anchor; `align` picks which side of the text it sits on
    fn fill_text(&mut self, text: &str, pos: Vector2<f64>, size: f64, align: TextAlign, color: Color);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, GameError> {
        let context = canvas
            .get_context("2d")
            .map_err(GameError::js)?
            .ok_or(GameError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn set_fill(&self, color: Color) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_background(&mut self, color: Color) {
        self.set_fill(color);
        self.context
            .fill_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.set_fill(color);
        self.context.begin_path();
        if let Err(err) = self.context.arc(center[0], center[1], radius, 0.0, 2.0 * PI) {
            warn!("arc failed: {:?}", err);
            return;
        }
        self.context.fill();
    }

    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color) {
        let (first, rest) = match points.split_first() {
            Some(split) => split,
            None => return,
        };
        self.set_fill(color);
        self.context.begin_path();
        self.context.move_to(first[0], first[1]);
        for point in rest {
            self.context.line_to(point[0], point[1]);
        }
        self.context.close_path();
        self.context.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vector2<f64>, size: f64, align: TextAlign, color: Color) {
        self.set_fill(color);
        self.context.set_font(&format!("{}px sans-serif", size));
        self.context.set_text_align(align.as_css());
        self.context.set_text_baseline("top");
        if let Err(err) = self.context.fill_text(text, pos[0], pos[1]) {
            warn!("fill_text failed: {:?}", err);
        }
    }
}
