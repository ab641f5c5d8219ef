//! Logo loading, normalization, and the contain-and-center primitive.

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;

/// The normalized source logo: RGBA, tightly cropped to its visible pixels.
///
/// Every output asset samples this one image, so normalization happens
/// exactly once per run.
#[derive(Debug, Clone)]
pub struct Logo {
    image: RgbaImage,
}

impl Logo {
    /// Decodes the logo, converts it to RGBA, and crops away fully
    /// transparent border rows and columns.
    pub fn load(path: &Path) -> Result<Self> {
        let decoded =
            image::open(path).with_context(|| format!("loading logo {}", path.display()))?;
        Ok(Self::from_image(decoded.to_rgba8()))
    }

    /// Normalizes an already-decoded image. A fully transparent image has no
    /// visible bounds and is kept uncropped.
    pub fn from_image(image: RgbaImage) -> Self {
        let image = match visible_bounds(&image) {
            Some((x, y, width, height)) => imageops::crop_imm(&image, x, y, width, height).to_image(),
            None => image,
        };
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Contain-and-center render: scales the logo proportionally so it fits
    /// entirely inside `width`x`height`, then centers it on a fully
    /// transparent canvas of exactly that size.
    pub fn render(&self, width: u32, height: u32) -> RgbaImage {
        let fit = DynamicImage::ImageRgba8(self.image.clone())
            .resize(width, height, FilterType::Lanczos3)
            .into_rgba8();
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
        let x = i64::from((width - fit.width()) / 2);
        let y = i64::from((height - fit.height()) / 2);
        imageops::overlay(&mut canvas, &fit, x, y);
        canvas
    }

    /// Like [`Logo::render`], optionally desaturating the color channels.
    /// The alpha channel is copied through untouched.
    pub fn render_mode(&self, width: u32, height: u32, grayscale: bool) -> RgbaImage {
        let mut canvas = self.render(width, height);
        if grayscale {
            desaturate(&mut canvas);
        }
        canvas
    }
}

/// Bounding box of pixels with non-zero alpha, as `(x, y, width, height)`.
/// `None` when every pixel is fully transparent.
fn visible_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut seen = false;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        seen = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    seen.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

// ITU-R 601 luma over the color channels only.
fn desaturate(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let luma =
            ((299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000) as u8;
        *pixel = Rgba([luma, luma, luma, a]);
    }
}
