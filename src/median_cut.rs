use crate::color::Color;
use log::{debug, trace};

/// One of the three color channels a pixel set can be bisected along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Red,
    Green,
    Blue,
}

/// The per-channel (max - min) range of a pixel set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spread {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Spread {
    /// The channel with the largest range. Ties go to red, then green.
    pub fn widest(self) -> Component {
        if self.red >= self.green && self.red >= self.blue {
            Component::Red
        } else if self.green >= self.red && self.green >= self.blue {
            Component::Green
        } else {
            Component::Blue
        }
    }
}

/// Compute the range of each channel across the given pixels. An empty set has no range on any channel.
pub fn spread(pixels: &[Color]) -> Spread {
    let Some(first) = pixels.first() else {
        return Spread::default();
    };

    // min, max
    let (r, g, b) = first.rgb();
    let (mut red_range, mut green_range, mut blue_range) = ((r, r), (g, g), (b, b));

    for (r, g, b) in pixels.iter().map(|pixel| pixel.rgb()) {
        red_range = (red_range.0.min(r), red_range.1.max(r));
        green_range = (green_range.0.min(g), green_range.1.max(g));
        blue_range = (blue_range.0.min(b), blue_range.1.max(b));
    }

    Spread {
        red: red_range.1 - red_range.0,
        green: green_range.1 - green_range.0,
        blue: blue_range.1 - blue_range.0,
    }
}

/// Bisect a copy of the given pixels along their widest channel.
///
/// The pixels are stably sorted by that channel and split at `len / 2`, so the left half holds the lower values and
/// a single pixel always ends up on the right. The input slice is left untouched.
pub fn partition(pixels: &[Color]) -> (Vec<Color>, Vec<Color>) {
    let mut left = pixels.to_vec();
    sort_by_widest_component(&mut left);

    let right = left.split_off(left.len() / 2);
    (left, right)
}

/// Average each channel across the given pixels, truncating toward zero. An empty set averages to black.
pub fn average(pixels: &[Color]) -> Color {
    if pixels.is_empty() {
        return Color::BLACK;
    }

    let (red_sum, green_sum, blue_sum) =
        pixels
            .iter()
            .fold((0u64, 0u64, 0u64), |(red_sum, green_sum, blue_sum), pixel| {
                let (r, g, b) = pixel.rgb();
                (red_sum + r as u64, green_sum + g as u64, blue_sum + b as u64)
            });

    let count = pixels.len() as u64;

    Color::new((
        (red_sum / count) as u8,
        (green_sum / count) as u8,
        (blue_sum / count) as u8,
    ))
}

/// Reduce the given pixels to a palette of exactly `2^levels` colors.
///
/// Every level bisects each partition of the current generation with [`partition`], doubling the number of
/// partitions. Once all levels are done, each partition is collapsed into one color with [`average`]. The palette
/// keeps the order partitions were produced in, lower halves first. Partitions that run out of pixels average to
/// black, so an empty input yields `2^levels` black colors.
pub fn quantize(pixels: &[Color], levels: u32) -> Vec<Color> {
    // the partitions are disjoint slices of a single private copy of the input
    let mut pixels = pixels.to_vec();
    let total = pixels.len();
    let mut generation: Vec<&mut [Color]> = vec![pixels.as_mut_slice()];

    for level in 0..levels {
        generation = generation
            .into_iter()
            .flat_map(|partition| {
                let (left, right) = bisect(partition);
                [left, right]
            })
            .collect();

        trace!("level {}: {} partitions", level + 1, generation.len());
    }

    debug!("quantized {} pixels over {} levels", total, levels);

    generation.into_iter().map(|partition| average(partition)).collect()
}

fn bisect(pixels: &mut [Color]) -> (&mut [Color], &mut [Color]) {
    sort_by_widest_component(pixels);

    let midpoint = pixels.len() / 2;
    pixels.split_at_mut(midpoint)
}

fn sort_by_widest_component(pixels: &mut [Color]) {
    let widest = spread(pixels).widest();

    // sort_by_key is stable, equal values keep their input order
    pixels.sort_by_key(|pixel| pixel.component(widest));
}
