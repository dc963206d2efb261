// Tunables for one game instance. Entity-level physics constants live on
// Bubble and Particle; this only holds what differs between deployments.

use crate::color::Color;

pub const DEFAULT_BUBBLE_COUNT: usize = 30;
pub const BONUS_COLOR: Color = Color::from_u32(0xedede9ff);
pub const PALETTE: [Color; 4] = [
    BONUS_COLOR,
    Color::from_u32(0xd6ccc2ff),
    Color::from_u32(0xf5ebe0ff),
    Color::from_u32(0xe3d5caff),
];

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub bubble_count: usize,
    pub palette: Vec<Color>,
    pub bonus_color: Color,
    pub background: Color,
    pub text_color: Color,
    pub text_size: f64,
    pub text_margin: f64,
    pub label: String,
    pub score_prefix: String,
    pub sound_volume: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            bubble_count: DEFAULT_BUBBLE_COUNT,
            palette: PALETTE.to_vec(),
            bonus_color: BONUS_COLOR,
            background: Color::from_u32(0xffc8ddff),
            text_color: Color::from_u32(0xeb6424ff),
            text_size: 32.0,
            text_margin: 10.0,
            label: String::from("414730688"),
            score_prefix: String::from("得分: "),
            sound_volume: 0.5,
        }
    }
}

impl GameConfig {
    pub fn score_text(&self, score: i32) -> String {
        format!("{}{}", self.score_prefix, score)
    }
}
