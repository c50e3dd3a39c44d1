use crate::median_cut::Component;
use std::fmt;

/// An opaque 8-bit RGB color. Alpha is never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new((0, 0, 0));

    pub const fn new((red, green, blue): (u8, u8, u8)) -> Color {
        Self { red, green, blue }
    }

    /// Build a color from any 8-bit image pixel, discarding its alpha channel if it has one.
    pub fn from_pixel<P>(pixel: &P) -> Color
    where
        P: image::Pixel<Subpixel = u8>,
    {
        let rgb = pixel.to_rgb();
        Color::new((rgb.0[0], rgb.0[1], rgb.0[2]))
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    pub fn component(self, component: Component) -> u8 {
        match component {
            Component::Red => self.red,
            Component::Green => self.green,
            Component::Blue => self.blue,
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Color::new(rgb)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(image::Rgb([red, green, blue]): image::Rgb<u8>) -> Self {
        Color::new((red, green, blue))
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.red, color.green, color.blue])
    }
}

// #RRGGBB, uppercase
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
