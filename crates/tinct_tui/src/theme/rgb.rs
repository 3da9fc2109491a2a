//! RGB color triplet, portable across terminal color APIs.

use tinct_core::hsl_to_rgb;

/// RGB triplet. Use with any terminal or UI color API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// From an HSL triple string (`"H S% L%"`), as stored in the theme.
    pub fn from_hsl(hsl: &str) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl);
        Rgb(r, g, b)
    }

    /// Tuple for ratatui/crossterm: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hsl_white() {
        assert_eq!(Rgb::from_hsl("0 0% 100%"), Rgb(255, 255, 255));
    }

    #[test]
    fn from_hsl_blue_preset() {
        assert_eq!(Rgb::from_hsl("221.2 83.2% 53.3%"), Rgb(0x25, 0x63, 0xeb));
    }
}
