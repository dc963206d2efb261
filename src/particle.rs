// Simple particle struct to keep track of individual position, velocity, and color.
// Particles only live inside a Burst and are gone 52 updates after spawning.

use crate::color::Color;
use rand::Rng;
use std::f64::consts::PI;
use vecmath::{vec2_add, vec2_scale, Vector2};

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub acc: Vector2<f64>,
    pub lifespan: i32,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub const INITIAL_LIFESPAN: i32 = 255;
    pub const FADE_PER_FRAME: i32 = 5;
    pub const GRAVITY: Vector2<f64> = [0.0, 0.1];
    pub const MIN_SPEED: f64 = 2.0;
    pub const MAX_SPEED: f64 = 6.0;
    pub const MIN_RADIUS: f64 = 2.0;
    pub const MAX_RADIUS: f64 = 5.0;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            acc: Particle::GRAVITY,
            lifespan: Particle::INITIAL_LIFESPAN,
            radius,
            color,
        }
    }

    // Flies off from `pos` in a uniformly random direction
    pub fn random<R: Rng>(pos: Vector2<f64>, color: Color, rng: &mut R) -> Particle {
        let angle = rng.gen_range(0.0, 2.0 * PI);
        let speed = rng.gen_range(Particle::MIN_SPEED, Particle::MAX_SPEED);
        let vel = vec2_scale([angle.cos(), angle.sin()], speed);
        let radius = rng.gen_range(Particle::MIN_RADIUS, Particle::MAX_RADIUS);
        Particle::new(pos, vel, radius, color)
    }

    pub fn update(&mut self) {
        self.vel = vec2_add(self.vel, self.acc);
        self.pos = vec2_add(self.pos, self.vel);
        self.lifespan -= Particle::FADE_PER_FRAME;
    }

    pub fn is_finished(&self) -> bool {
        self.lifespan < 0
    }

    // Opacity tracks the remaining lifespan
    pub fn draw_color(&self) -> Color {
        self.color.with_alpha(self.lifespan as f64)
    }
}
