use crate::color::Color;

/// Running score. Popping the bonus color earns a point, any other color
/// costs one. The score is unbounded in both directions.
#[derive(Clone, Debug)]
pub struct ScoreKeeper {
    score: i32,
    bonus_color: Color,
}

impl ScoreKeeper {
    pub fn new(bonus_color: Color) -> Self {
        ScoreKeeper { score: 0, bonus_color }
    }

    pub fn register_pop(&mut self, color: Color) -> i32 {
        if color.same_hue(&self.bonus_color) {
            self.score += 1;
        } else {
            self.score -= 1;
        }
        self.score
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bonus_color(&self) -> Color {
        self.bonus_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BONUS: Color = Color::from_u32(0xedede9ff);
    const OTHER: Color = Color::from_u32(0xe3d5caff);

    #[test]
    fn bonus_pop_adds_one() {
        let mut keeper = ScoreKeeper::new(BONUS);
        assert_eq!(keeper.register_pop(BONUS), 1);
    }

    #[test]
    fn other_pop_subtracts_one_below_zero() {
        let mut keeper = ScoreKeeper::new(BONUS);
        assert_eq!(keeper.register_pop(OTHER), -1);
        assert_eq!(keeper.register_pop(OTHER), -2);
    }

    #[test]
    fn pops_accumulate_without_clamping() {
        let mut keeper = ScoreKeeper::new(BONUS);
        for _ in 0..3 {
            keeper.register_pop(BONUS);
        }
        for _ in 0..5 {
            keeper.register_pop(OTHER);
        }
        assert_eq!(keeper.score(), -2);
    }

    #[test]
    fn bonus_match_ignores_alpha() {
        let mut keeper = ScoreKeeper::new(BONUS);
        assert_eq!(keeper.register_pop(BONUS.with_alpha(120.0)), 1);
    }
}
