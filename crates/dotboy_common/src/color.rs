#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Perceived brightness, used when writing grayscale images.
    pub fn luma(&self) -> u8 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        ((r * 299 + g * 587 + b * 114) / 1000) as u8
    }
}

/// Mapping from the four 2-bit DMG shades to display colors.
///
/// Shade 0 is the lightest, shade 3 the darkest.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Palette(pub [Color; 4]);

impl Palette {
    /// Plain grayscale ramp.
    pub const GRAYSCALE: Palette = Palette([
        Color::WHITE,
        Color::new_rgb(0xAA, 0xAA, 0xAA),
        Color::new_rgb(0x55, 0x55, 0x55),
        Color::BLACK,
    ]);

    /// Greenish tint of the original DMG screen.
    pub const DMG_GREEN: Palette = Palette([
        Color::new_rgb(0x9B, 0xBC, 0x0F),
        Color::new_rgb(0x8B, 0xAC, 0x0F),
        Color::new_rgb(0x30, 0x62, 0x30),
        Color::new_rgb(0x0F, 0x38, 0x0F),
    ]);

    #[inline]
    pub fn color(&self, shade: u8) -> Color {
        self.0[(shade & 0x03) as usize]
    }

    pub fn by_name(name: &str) -> Option<Palette> {
        match name {
            "gray" | "grey" | "grayscale" => Some(Palette::GRAYSCALE),
            "green" | "dmg" => Some(Palette::DMG_GREEN),
            _ => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::GRAYSCALE
    }
}
