//! World map backgrounds.
//!
//! Images are decoded once with the `image` crate and sampled per terminal
//! cell when painted. A world without an image gets a solid colour.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

use crate::fb::{FrameBuffer, Rgb};
use crate::types::Size;
use crate::viewport::Viewport;

// Keeps overlaid text readable on bright images.
const BACKDROP_SHADE: f32 = 0.55;

#[derive(Debug, Clone)]
pub enum Backdrop {
    Image(RgbImage),
    Solid(Rgb),
}

impl Backdrop {
    /// Decode an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("failed to load background {}", path.display()))?
            .to_rgb8();
        Ok(Self::Image(img))
    }

    pub fn solid(color: Rgb) -> Self {
        Self::Solid(color)
    }

    /// Native pixel size of the image, used as the placement reference.
    pub fn size(&self) -> Option<Size> {
        match self {
            Backdrop::Image(img) => Some(Size::new(img.width(), img.height())),
            Backdrop::Solid(_) => None,
        }
    }

    /// Fill the framebuffer background, stretching the image to the viewport.
    pub fn paint(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        match self {
            Backdrop::Solid(color) => {
                for row in 0..viewport.height {
                    for col in 0..viewport.width {
                        fb.tint(col, row, *color);
                    }
                }
            }
            Backdrop::Image(img) => {
                let w = viewport.width.max(1) as u64;
                let h = viewport.height.max(1) as u64;
                for row in 0..viewport.height {
                    for col in 0..viewport.width {
                        let color = sample_cell(img, col as u64, row as u64, w, h);
                        fb.tint(col, row, color.darken(BACKDROP_SHADE));
                    }
                }
            }
        }
    }
}

/// Average the 2x2 sub-samples of one cell.
fn sample_cell(img: &RgbImage, col: u64, row: u64, w: u64, h: u64) -> Rgb {
    let iw = img.width().max(1) as u64;
    let ih = img.height().max(1) as u64;
    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
    for sy in 0..2u64 {
        for sx in 0..2u64 {
            let px = ((col * 2 + sx) * iw / (w * 2)).min(iw - 1);
            let py = ((row * 2 + sy) * ih / (h * 2)).min(ih - 1);
            let p = img.get_pixel(px as u32, py as u32).0;
            r += p[0] as u32;
            g += p[1] as u32;
            b += p[2] as u32;
        }
    }
    Rgb::new((r / 4) as u8, (g / 4) as u8, (b / 4) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb as Px;

    #[test]
    fn solid_backdrop_has_no_reference_size() {
        let backdrop = Backdrop::solid(Rgb::new(10, 10, 10));
        assert_eq!(backdrop.size(), None);

        let mut fb = FrameBuffer::new(3, 2);
        backdrop.paint(&mut fb, Viewport::new(3, 2));
        assert!(fb.cells().iter().all(|c| c.style.bg == Rgb::new(10, 10, 10)));
    }

    #[test]
    fn image_is_stretched_to_the_viewport() {
        // Left half red, right half blue.
        let img = RgbImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Px([200, 0, 0])
            } else {
                Px([0, 0, 200])
            }
        });
        let backdrop = Backdrop::Image(img);
        assert_eq!(backdrop.size(), Some(Size::new(4, 2)));

        let mut fb = FrameBuffer::new(2, 1);
        backdrop.paint(&mut fb, Viewport::new(2, 1));
        assert_eq!(fb.get(0, 0).unwrap().style.bg, Rgb::new(200, 0, 0).darken(BACKDROP_SHADE));
        assert_eq!(fb.get(1, 0).unwrap().style.bg, Rgb::new(0, 0, 200).darken(BACKDROP_SHADE));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Backdrop::load("definitely/not/here.png").is_err());
    }
}
