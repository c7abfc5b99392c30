//! Linear color to 8-bit conversion and plain-text PPM output.

use std::io::Write;

use crate::util::Color;

/// Averages a summed sample color, gamma-corrects it (gamma 2) and quantises each channel to `0..=255`.
pub fn to_rgb8(sum: Color, samples_per_pixel: u32) -> [u8; 3] {
    let scale = 1.0 / samples_per_pixel as f64;
    let channel = |c: f64| ((c * scale).sqrt().clamp(0.0, 0.999) * 256.0) as u8;

    return [channel(sum.x), channel(sum.y), channel(sum.z)];
}

/// A finished frame, rows stored top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[u8; 3]>,
}

impl Image {
    pub fn new(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Image {
        debug_assert_eq!(pixels.len(), width * height);
        Image { width, height, pixels }
    }

    /// `y = 0` is the top row.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels[x + y * self.width]
    }
}

/// Writes `image` as ASCII PPM (`P3`), one `R G B` line per pixel.
pub fn write_ppm<W: Write>(w: &mut W, image: &Image) -> std::io::Result<()> {
    writeln!(w, "P3")?;
    writeln!(w, "{} {}", image.width, image.height)?;
    writeln!(w, "255")?;

    for [r, g, b] in &image.pixels {
        writeln!(w, "{} {} {}", r, g, b)?;
    }

    return w.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_intensity_maps_to_255() {
        assert_eq!(to_rgb8(Color::ONE, 1), [255, 255, 255]);
        assert_eq!(to_rgb8(Color::splat(50.0), 50), [255, 255, 255]);
    }

    #[test]
    fn black_maps_to_zero() {
        assert_eq!(to_rgb8(Color::ZERO, 10), [0, 0, 0]);
    }

    #[test]
    fn applies_gamma_before_quantising() {
        // sqrt(0.25) = 0.5 -> 128
        assert_eq!(to_rgb8(Color::new(0.25, 1.0, 0.0), 1), [128, 255, 0]);
        assert_eq!(to_rgb8(Color::new(1.0, 4.0, 0.0), 4), [128, 255, 0]);
    }

    #[test]
    fn overbright_and_negative_channels_clamp() {
        assert_eq!(to_rgb8(Color::new(9.0, 0.0, 0.0), 1), [255, 0, 0]);
        assert_eq!(to_rgb8(Color::new(-0.0, 0.0, 0.0), 1), [0, 0, 0]);
    }

    #[test]
    fn ppm_layout() {
        let image = Image::new(2, 1, vec![[255, 0, 0], [1, 2, 3]]);
        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "P3\n2 1\n255\n255 0 0\n1 2 3\n");
    }

    #[test]
    fn pixel_indexing_is_row_major() {
        let image = Image::new(2, 2, vec![[0, 0, 0], [1, 1, 1], [2, 2, 2], [3, 3, 3]]);
        assert_eq!(image.pixel(1, 0), [1, 1, 1]);
        assert_eq!(image.pixel(0, 1), [2, 2, 2]);
    }
}
