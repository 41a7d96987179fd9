// Simple color struct, created from an unsigned 32 representing 0xRRGGBB,
// plus the two color families the particle field draws with

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b }
    }

    // CSS color string usable as a canvas fill or stroke style
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hue {
    Violet,
    Cyan,
}

impl Hue {
    pub const VIOLET: Color = Color::from_u32(0x6c63ff);
    pub const CYAN: Color = Color::from_u32(0x00f0ff);

    pub fn color(self) -> Color {
        match self {
            Hue::Violet => Hue::VIOLET,
            Hue::Cyan => Hue::CYAN,
        }
    }
}
