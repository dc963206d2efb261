mod utils;

pub mod audio;
pub mod bubble;
pub mod burst;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
mod host;
pub mod particle;
pub mod renderer;
pub mod score;
pub mod surface;

#[cfg(test)]
mod testing;

extern crate nalgebra_glm as glm;

use crate::audio::WebAudio;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::surface::CanvasSurface;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::{console, HtmlCanvasElement};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}

// Runs the whole game on the canvas with the given id, driving it from the
// browser's animation clock. JS that wants to own the loop uses BubbleGame directly.
#[wasm_bindgen]
pub fn run(canvas_id: &str, sound_url: &str) -> Result<(), JsValue> {
    initialize();
    host::start(canvas_id, sound_url).map_err(JsValue::from)
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[wasm_bindgen]
pub struct BubbleGame {
    game: Game<StdRng>,
    surface: CanvasSurface,
    audio: WebAudio,
    profiling: bool,
}

#[wasm_bindgen]
impl BubbleGame {
    pub fn new(canvas: HtmlCanvasElement, sound_url: &str) -> Result<BubbleGame, JsValue> {
        BubbleGame::create(canvas, sound_url, StdRng::from_entropy()).map_err(JsValue::from)
    }

    pub fn with_seed(canvas: HtmlCanvasElement, sound_url: &str, seed: u64) -> Result<BubbleGame, JsValue> {
        BubbleGame::create(canvas, sound_url, StdRng::seed_from_u64(seed)).map_err(JsValue::from)
    }

    pub fn frame(&mut self) {
        let _timer = if self.profiling {
            Some(Timer::new("BubbleGame::frame"))
        } else {
            None
        };
        self.game.tick(&mut self.surface);
    }

    // Returns whether a bubble popped
    pub fn pointer_pressed(&mut self, x: f64, y: f64) -> bool {
        self.game.pointer_pressed(x, y, &mut self.audio).is_some()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.game.resize(width, height, &mut self.surface);
    }

    pub fn score(&self) -> i32 {
        self.game.score()
    }

    pub fn bubble_count(&self) -> usize {
        self.game.field().len()
    }

    pub fn burst_count(&self) -> usize {
        self.game.bursts().len()
    }

    pub fn set_profiling(&mut self, enabled: bool) {
        self.profiling = enabled;
    }
}

impl BubbleGame {
    pub(crate) fn create(canvas: HtmlCanvasElement, sound_url: &str, rng: StdRng) -> Result<BubbleGame, GameError> {
        let config = GameConfig::default();
        let surface = CanvasSurface::new(canvas)?;
        let audio = WebAudio::new(sound_url, config.sound_volume);
        let game = Game::new(config, surface.width() as f64, surface.height() as f64, rng);
        info!("bubble game ready, pop sound from {}", sound_url);
        Ok(BubbleGame {
            game,
            surface,
            audio,
            profiling: false,
        })
    }
}
