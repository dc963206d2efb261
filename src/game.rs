// One game instance: the bubble field, the live bursts and the score, plus the
// random source every spawn draws from. The host calls `tick` once per
// animation frame and `pointer_pressed` once per click, never concurrently.

use crate::audio::AudioOutput;
use crate::bubble::BubbleField;
use crate::burst::BurstManager;
use crate::color::Color;
use crate::config::GameConfig;
use crate::renderer::Renderer;
use crate::score::ScoreKeeper;
use crate::surface::Surface;
use log::{debug, info};
use rand::Rng;

/// What a successful click popped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pop {
    pub index: usize,
    pub pos: [f64; 2],
    pub color: Color,
    pub score: i32,
}

pub struct Game<R> {
    config: GameConfig,
    width: f64,
    height: f64,
    field: BubbleField,
    bursts: BurstManager,
    score: ScoreKeeper,
    renderer: Renderer,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, width: f64, height: f64, mut rng: R) -> Self {
        let field = BubbleField::initialize(
            config.bubble_count,
            &config.palette,
            config.bonus_color,
            width,
            height,
            &mut rng,
        );
        info!("spawned {} bubbles in a {}x{} viewport", field.len(), width, height);
        Game::from_parts(config, width, height, field, rng)
    }

    pub fn from_parts(config: GameConfig, width: f64, height: f64, field: BubbleField, rng: R) -> Self {
        Game {
            score: ScoreKeeper::new(config.bonus_color),
            renderer: Renderer::new(&config),
            config,
            width,
            height,
            field,
            bursts: BurstManager::new(),
            rng,
        }
    }

    // At most one bubble pops per click, even when several overlap the pointer
    pub fn pointer_pressed<A: AudioOutput + ?Sized>(&mut self, x: f64, y: f64, audio: &mut A) -> Option<Pop> {
        audio.ensure_running();

        let index = self.field.hit_test(x, y)?;
        self.field.mark_exploded(index);
        let bubble = *self.field.get(index)?;
        self.bursts
            .spawn_burst(bubble.pos[0], bubble.pos[1], bubble.color, &mut self.rng, audio);
        let score = self.score.register_pop(bubble.color);
        debug!("popped bubble {} ({}), score {}", index, bubble.color.to_css(), score);

        Some(Pop {
            index,
            pos: bubble.pos,
            color: bubble.color,
            score,
        })
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.renderer.clear_screen(surface);

        self.field.advance(self.width, self.height, &mut self.rng);
        self.renderer.render_bubbles(surface, &self.field);

        self.bursts.advance();
        self.renderer.render_particles(surface, &self.bursts);

        let score_text = self.config.score_text(self.score.score());
        self.renderer
            .render_labels(surface, self.width, &self.config.label, &score_text);
    }

    // Bubbles and bursts carry on where they were; only the bounds change
    pub fn resize<S: Surface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) {
        debug!("viewport resized to {}x{}", width, height);
        self.width = width as f64;
        self.height = height as f64;
        surface.resize(width, height);
        self.renderer.clear_screen(surface);
    }

    pub fn score(&self) -> i32 {
        self.score.score()
    }

    pub fn field(&self) -> &BubbleField {
        &self.field
    }

    pub fn bursts(&self) -> &BurstManager {
        &self.bursts
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
