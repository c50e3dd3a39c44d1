// Copyright 2026 The mmcq Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract a representative color palette from an image.
//!
//! Colors are reduced with modified median cut quantization (MMCQ): the pixels of an image are bisected along the
//! color channel with the widest range, each half is bisected again, and so on for a fixed number of levels. Every
//! final partition is then averaged into a single color, giving a palette of exactly `2^levels` colors.
//!
//! ```no_run
//! let image = mmcq::open("plush.jpg")?;
//! let palette = mmcq::Palette::from_image(image).levels(3).generate()?;
//!
//! for color in palette.colors() {
//!     println!("{color}");
//! }
//! # Ok::<(), mmcq::Error>(())
//! ```

mod color;
mod error;
mod loader;
mod median_cut;

pub const DEFAULT_LEVELS: u32 = 4;

pub use crate::{
    color::Color,
    error::{Error, Result},
    loader::open,
    median_cut::{average, partition, quantize, spread, Component, Spread},
};
pub use image;

use image::{math::Rect, GenericImageView};
use std::fmt;

/// The colors produced by quantizing an image, in the order their partitions were produced.
///
/// Only built by quantizing, so it always holds `2^levels` colors. It can be serialized but not deserialized, since
/// nothing would tie a deserialized level count to its colors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    colors: Vec<Color>,
    levels: u32,
}

pub struct PaletteBuilder<I>
where
    I: GenericImageView,
    I::Pixel: image::Pixel<Subpixel = u8>,
{
    image: I,
    levels: u32,
    region: Option<Rect>,
}

impl Palette {
    pub fn from_image<I>(image: I) -> PaletteBuilder<I>
    where
        I: GenericImageView,
        I::Pixel: image::Pixel<Subpixel = u8>,
    {
        PaletteBuilder::from_image(image)
    }

    pub fn from_pixels(pixels: &[Color], levels: u32) -> Palette {
        Self {
            colors: quantize(pixels, levels),
            levels,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Always `2^levels`.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette holds at least one color, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            writeln!(f, "{color}")?;
        }

        Ok(())
    }
}

impl<I> PaletteBuilder<I>
where
    I: GenericImageView,
    I::Pixel: image::Pixel<Subpixel = u8>,
{
    pub fn from_image(image: I) -> Self {
        Self {
            image,
            levels: DEFAULT_LEVELS,
            region: None,
        }
    }

    /// Set how many times the pixels are bisected. The palette will hold `2^levels` colors.
    pub fn levels(self, levels: u32) -> Self {
        Self { levels, ..self }
    }

    /// Only consider the pixels within the given rectangle of the image.
    pub fn region(self, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            region: Some(Rect { x, y, width, height }),
            ..self
        }
    }

    pub fn clear_region(self) -> Self {
        Self { region: None, ..self }
    }

    pub fn generate(self) -> Result<Palette> {
        let pixels = match self.region {
            Some(region) => {
                let (image_width, image_height) = self.image.dimensions();
                let fits = |offset: u32, length: u32, bound: u32| {
                    offset.checked_add(length).is_some_and(|end| end <= bound)
                };

                if !fits(region.x, region.width, image_width) || !fits(region.y, region.height, image_height) {
                    return Err(Error::InvalidRegion {
                        x: region.x,
                        y: region.y,
                        width: region.width,
                        height: region.height,
                        image_width,
                        image_height,
                    });
                }

                // SubImage only implements GenericImageView through its deref target
                image_pixels(&*self.image.view(region.x, region.y, region.width, region.height))
            }
            None => image_pixels(&self.image),
        };

        Ok(Palette::from_pixels(&pixels, self.levels))
    }
}

/// Collect every pixel of an image, dropping alpha.
///
/// Pixels are visited column by column: all of the first column top to bottom, then the second column, and so on.
/// Quantizing breaks ties by this order, so it is fixed.
pub fn image_pixels<I>(image: &I) -> Vec<Color>
where
    I: GenericImageView,
    I::Pixel: image::Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for x in 0..width {
        for y in 0..height {
            pixels.push(Color::from_pixel(&image.get_pixel(x, y)));
        }
    }

    pixels
}

/// Quantize every pixel of an image into a palette of `2^levels` colors.
pub fn quantize_image<I>(image: &I, levels: u32) -> Vec<Color>
where
    I: GenericImageView,
    I::Pixel: image::Pixel<Subpixel = u8>,
{
    quantize(&image_pixels(image), levels)
}

/// Parse a level count, rejecting anything whose `2^levels` colors couldn't be addressed.
pub fn parse_levels(value: &str) -> Result<u32> {
    let levels: u32 = value.parse().map_err(|err: std::num::ParseIntError| Error::InvalidLevels {
        value: value.to_string(),
        reason: err.to_string(),
    })?;

    if levels >= usize::BITS {
        return Err(Error::InvalidLevels {
            value: value.to_string(),
            reason: format!("a palette of 2^{levels} colors is too large"),
        });
    }

    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn parse_levels_accepts_small_counts() {
        assert_eq!(parse_levels("0").unwrap(), 0);
        assert_eq!(parse_levels("4").unwrap(), 4);
        assert_eq!(parse_levels("12").unwrap(), 12);
    }

    #[test]
    fn parse_levels_rejects_garbage() {
        for value in ["", "four", "-1", "1.5", " 3"] {
            assert!(
                matches!(parse_levels(value), Err(Error::InvalidLevels { .. })),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_levels_rejects_unaddressable_palettes() {
        let too_many = usize::BITS.to_string();
        assert!(matches!(parse_levels(&too_many), Err(Error::InvalidLevels { .. })));
    }

    #[test]
    fn palette_display_is_one_hex_per_line() {
        let palette = Palette::from_pixels(&[Color::new((0x12, 0x34, 0x56)), Color::new((0xab, 0xcd, 0xef))], 1);
        assert_eq!(palette.to_string(), "#123456\n#ABCDEF\n");
    }

    #[test]
    fn palette_length_matches_levels() {
        for levels in 0..6 {
            let palette = Palette::from_pixels(&[Color::new((1, 2, 3))], levels);
            assert_eq!(palette.len(), 1 << palette.levels());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn palette_is_serializable() {
        fn assert_serialize<T: serde::Serialize>(_: &T) {}
        assert_serialize(&Palette::from_pixels(&[], 2));
    }

    #[test]
    fn builder_defaults_to_four_levels() {
        let image = RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]));
        let palette = Palette::from_image(image).generate().unwrap();

        assert_eq!(palette.levels(), DEFAULT_LEVELS);
        assert_eq!(palette.len(), 16);
        assert!(!palette.is_empty());
    }
}
