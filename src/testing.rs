// Recording fakes for the browser seams, shared by the unit tests.

use crate::audio::AudioOutput;
use crate::color::Color;
use crate::surface::{Surface, TextAlign};
use vecmath::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    EnsureRunning,
    Stop,
    Play,
}

pub struct RecordingAudio {
    pub loaded: bool,
    pub calls: Vec<AudioCall>,
}

impl RecordingAudio {
    pub fn loaded() -> Self {
        RecordingAudio { loaded: true, calls: Vec::new() }
    }

    pub fn unloaded() -> Self {
        RecordingAudio { loaded: false, calls: Vec::new() }
    }
}

impl AudioOutput for RecordingAudio {
    fn ensure_running(&mut self) {
        self.calls.push(AudioCall::EnsureRunning);
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn stop(&mut self) {
        self.calls.push(AudioCall::Stop);
    }

    fn play(&mut self) {
        self.calls.push(AudioCall::Play);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize(u32, u32),
    Background(Color),
    Circle { center: Vector2<f64>, radius: f64, color: Color },
    Polygon { points: Vec<Vector2<f64>>, color: Color },
    Text { text: String, pos: Vector2<f64>, size: f64, align: TextAlign, color: Color },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }

    pub fn polygons(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Polygon { .. }))
            .count()
    }

    pub fn texts(&self) -> Vec<(String, TextAlign)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, align, .. } => Some((text.clone(), *align)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(DrawCall::Resize(width, height));
    }

    fn fill_background(&mut self, color: Color) {
        self.calls.push(DrawCall::Background(color));
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color) {
        self.calls.push(DrawCall::Polygon { points: points.to_vec(), color });
    }

    fn fill_text(&mut self, text: &str, pos: Vector2<f64>, size: f64, align: TextAlign, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            pos,
            size,
            align,
            color,
        });
    }
}
