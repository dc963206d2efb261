// Simple bubble struct, keeps track of position, size and drift speed,
// and can determine if a click event lands within its borders.
// BubbleField owns a fixed population of bubbles that is recycled in place.

use crate::color::Color;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bubble {
    pub pos: [f64; 2],
    pub diameter: f64,
    pub color: Color,
    pub speed: f64,
    pub alpha: f64,
    pub is_exploded: bool,
}

impl Bubble {
    pub const MIN_DIAMETER: f64 = 50.0;
    pub const MAX_DIAMETER: f64 = 200.0;
    pub const MIN_SPEED: f64 = 0.5;
    pub const MAX_SPEED: f64 = 3.0;
    pub const MIN_ALPHA: f64 = 100.0;
    pub const MAX_ALPHA: f64 = 200.0;

    pub fn new(pos: [f64; 2], diameter: f64, color: Color, speed: f64, alpha: f64) -> Self {
        Bubble {
            pos,
            diameter,
            color,
            speed,
            alpha,
            is_exploded: false,
        }
    }

    // Spawns just below the bottom edge so the first frames rise into view
    pub fn random<R: Rng>(palette: &[Color], fallback: Color, width: f64, height: f64, rng: &mut R) -> Self {
        let color = palette.choose(rng).copied().unwrap_or(fallback);
        let diameter = rng.gen_range(Bubble::MIN_DIAMETER, Bubble::MAX_DIAMETER);
        let x = centered_x(diameter, width, rng);
        let y = rng.gen_range(height, height + diameter);
        let speed = rng.gen_range(Bubble::MIN_SPEED, Bubble::MAX_SPEED);
        let alpha = rng.gen_range(Bubble::MIN_ALPHA, Bubble::MAX_ALPHA);
        Bubble::new([x, y], diameter, color, speed, alpha)
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    // Used for checking if the user's click is inside this bubble.
    // The rim itself does not count.
    pub fn is_point_inside(&self, x: f64, y: f64) -> bool {
        let distance = glm::distance(&glm::vec2(self.pos[0], self.pos[1]), &glm::vec2(x, y));
        distance < self.radius()
    }

    pub fn has_left_top(&self) -> bool {
        self.pos[1] < -self.radius()
    }

    // Moves the bubble back under the bottom edge, keeping size, color and speed
    pub fn recycle<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.pos[1] = rng.gen_range(height + self.radius(), height + self.diameter);
        self.pos[0] = centered_x(self.diameter, width, rng);
        self.is_exploded = false;
    }
}

// x such that the whole disc fits horizontally, or the middle of a viewport
// too narrow to fit it
fn centered_x<R: Rng>(diameter: f64, width: f64, rng: &mut R) -> f64 {
    let low = diameter / 2.0;
    let high = width - diameter / 2.0;
    if high > low {
        rng.gen_range(low, high)
    } else {
        width / 2.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct BubbleField {
    bubbles: Vec<Bubble>,
}

impl BubbleField {
    pub fn initialize<R: Rng>(
        count: usize,
        palette: &[Color],
        fallback: Color,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let bubbles = (0..count)
            .map(|_| Bubble::random(palette, fallback, width, height, rng))
            .collect();
        BubbleField { bubbles }
    }

    pub fn from_bubbles(bubbles: Vec<Bubble>) -> Self {
        BubbleField { bubbles }
    }

    // Newest bubbles are drawn on top, so they win when discs overlap
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.bubbles
            .iter()
            .rposition(|b| !b.is_exploded && b.is_point_inside(x, y))
    }

    pub fn mark_exploded(&mut self, index: usize) {
        if let Some(bubble) = self.bubbles.get_mut(index) {
            bubble.is_exploded = true;
        }
    }

    pub fn advance<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        for bubble in &mut self.bubbles {
            if bubble.is_exploded {
                bubble.recycle(width, height, rng);
                continue;
            }
            bubble.pos[1] -= bubble.speed;
            if bubble.has_left_top() {
                bubble.recycle(width, height, rng);
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&Bubble> {
        self.bubbles.get(index)
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}
