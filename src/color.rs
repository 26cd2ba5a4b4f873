// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Alpha is supplied per draw call, the stored channel only matters for from_u32.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS color string for canvas fill/stroke styles
    pub fn to_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        assert_eq!(Color::from_u32(0x6366f1ff), Color::rgb(99, 102, 241));
    }

    #[test]
    fn formats_css_rgba() {
        assert_eq!(Color::rgb(139, 92, 246).to_css(0.18), "rgba(139, 92, 246, 0.18)");
        assert_eq!(Color::rgb(99, 102, 241).to_css(0.5), "rgba(99, 102, 241, 0.5)");
    }
}
