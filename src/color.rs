// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    // Same channels, different opacity. Alpha is on the 0-255 scale the game
    // uses for bubbles and fading particles.
    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            a: alpha.max(0.0).min(255.0) as u8,
            ..self
        }
    }

    // Colors compare by their rgb channels only, so a faded bubble still
    // counts as the bonus color.
    pub fn same_hue(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        let c = Color::from_u32(0xedede9ff);
        assert_eq!(c, Color { r: 0xed, g: 0xed, b: 0xe9, a: 0xff });
    }

    #[test]
    fn with_alpha_clamps_to_byte_range() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(c.with_alpha(120.0).a, 120);
        assert_eq!(c.with_alpha(-2.0).a, 0);
        assert_eq!(c.with_alpha(300.0).a, 255);
    }

    #[test]
    fn same_hue_ignores_alpha() {
        let c = Color::from_u32(0xd6ccc2ff);
        assert!(c.same_hue(&c.with_alpha(100.0)));
        assert!(!c.same_hue(&Color::from_u32(0xedede9ff)));
    }

    #[test]
    fn css_uses_unit_alpha() {
        assert_eq!(Color::rgb(255, 255, 0).to_css(), "rgba(255, 255, 0, 1)");
        assert_eq!(
            Color::rgb(0, 0, 0).with_alpha(0.0).to_css(),
            "rgba(0, 0, 0, 0)"
        );
    }
}
