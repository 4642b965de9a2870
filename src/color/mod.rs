//! Color math: hex <-> RGB conversion and RGB-space distance.

pub mod mixer;
pub mod palette;

pub use mixer::Mix;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        let mut buf = [0u8; 3];
        hex::decode_to_slice(digits, &mut buf).ok()?;
        Some(Self::new(buf[0], buf[1], buf[2]))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex)
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{}", hex::encode([r, g, b]))
}

/// Name of the palette entry nearest to `hex`, or `None` if `hex` does not parse.
pub fn closest_color_name(hex: &str) -> Option<&'static str> {
    Rgb::from_hex(hex).map(|rgb| palette::closest(rgb).name)
}
