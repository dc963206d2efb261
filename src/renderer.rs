// Renderer struct that turns game state into Surface calls: the background,
// every floating bubble with its star highlight, burst particles, and the
// two text labels along the top edge.

use crate::bubble::{Bubble, BubbleField};
use crate::burst::BurstManager;
use crate::color::Color;
use crate::config::GameConfig;
use crate::surface::{Surface, TextAlign};
use cgmath::{Angle, Rad};
use vecmath::Vector2;

pub struct Renderer {
    pub background: Color,
    pub text_color: Color,
    pub text_size: f64,
    pub text_margin: f64,
}

impl Renderer {
    pub const STAR_COLOR: Color = Color { r: 255, g: 255, b: 0, a: 120 };
    const STAR_POINTS: usize = 5;
    // Outer star radius as a fraction of the bubble diameter
    const STAR_SCALE: f64 = 1.0 / 14.0;
    const STAR_INNER_RATIO: f64 = 0.5;
    // How far the star sits from the centre, as a fraction of the free space to the rim
    const STAR_OFFSET: f64 = 0.6;

    pub fn new(config: &GameConfig) -> Self {
        Renderer {
            background: config.background,
            text_color: config.text_color,
            text_size: config.text_size,
            text_margin: config.text_margin,
        }
    }

    pub fn clear_screen<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_background(self.background);
    }

    pub fn render_bubbles<S: Surface + ?Sized>(&self, surface: &mut S, field: &BubbleField) {
        for bubble in field.bubbles().iter().filter(|b| !b.is_exploded) {
            self.render_bubble(surface, bubble);
        }
    }

    fn render_bubble<S: Surface + ?Sized>(&self, surface: &mut S, bubble: &Bubble) {
        surface.fill_circle(bubble.pos, bubble.radius(), bubble.color.with_alpha(bubble.alpha));

        let star_radius = bubble.diameter * Renderer::STAR_SCALE;
        let offset = (bubble.radius() - star_radius) * Renderer::STAR_OFFSET;
        let center = [bubble.pos[0] + offset, bubble.pos[1] - offset];
        surface.fill_polygon(&star_points(center, star_radius), Renderer::STAR_COLOR);
    }

    pub fn render_particles<S: Surface + ?Sized>(&self, surface: &mut S, bursts: &BurstManager) {
        for particle in bursts.particles() {
            surface.fill_circle(particle.pos, particle.radius, particle.draw_color());
        }
    }

    pub fn render_labels<S: Surface + ?Sized>(&self, surface: &mut S, width: f64, label: &str, score_text: &str) {
        let m = self.text_margin;
        surface.fill_text(label, [m, m], self.text_size, TextAlign::Left, self.text_color);
        surface.fill_text(score_text, [width - m, m], self.text_size, TextAlign::Right, self.text_color);
    }
}

// Outer and inner vertices alternate, starting with the top point
pub fn star_points(center: Vector2<f64>, radius: f64) -> Vec<Vector2<f64>> {
    let step: Rad<f64> = Rad::full_turn() / Renderer::STAR_POINTS as f64;
    let quarter: Rad<f64> = Rad::turn_div_4();
    let inner = radius * Renderer::STAR_INNER_RATIO;

    let mut points = Vec::with_capacity(Renderer::STAR_POINTS * 2);
    for k in 0..Renderer::STAR_POINTS {
        let a = step * k as f64;
        let (sin, cos) = (a - quarter).sin_cos();
        points.push([center[0] + cos * radius, center[1] + sin * radius]);
        let (sin, cos) = (a + step / 2.0 - quarter).sin_cos();
        points.push([center[0] + cos * inner, center[1] + sin * inner]);
    }
    points
}
