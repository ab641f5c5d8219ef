//! SVG wrappers around a rasterized logo.
//!
//! The upstream application ships real vector art. The overlay substitutes a
//! minimal SVG that embeds a PNG render sized to the declared viewBox as a
//! base64 data URI; every SVG consumer in the build treats the two
//! identically.

use crate::branding::assets::ensure_parent;
use crate::branding::logo::Logo;
use crate::branding::targets::SvgTarget;
use anyhow::{Context, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use std::fs;
use std::io::Cursor;
use std::num::ParseFloatError;
use std::path::Path;

pub fn write_svg_asset(logo: &Logo, out: &Path, target: &SvgTarget) -> Result<()> {
    ensure_parent(out)?;
    let (raster_width, raster_height) = raster_size(target.view_box)
        .with_context(|| format!("parsing viewBox '{}' for {}", target.view_box, out.display()))?;
    let raster = logo.render(raster_width, raster_height);
    let mut png = Vec::new();
    raster
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .with_context(|| format!("encoding raster for {}", out.display()))?;
    let document = svg_document(target, raster_width, raster_height, &STANDARD.encode(&png));
    fs::write(out, document).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

/// Raster dimensions for a viewBox: its width and height terms rounded to
/// whole pixels.
fn raster_size(view_box: &str) -> Result<(u32, u32)> {
    let terms = view_box
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<f64>, ParseFloatError>>()?;
    if terms.len() != 4 {
        bail!("expected four viewBox terms, got {}", terms.len());
    }
    Ok((terms[2].round() as u32, terms[3].round() as u32))
}

fn svg_document(
    target: &SvgTarget,
    raster_width: u32,
    raster_height: u32,
    png_base64: &str,
) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{view_box}\">\n",
            "  <image href=\"data:image/png;base64,{data}\" x=\"0\" y=\"0\" width=\"{raster_width}\" height=\"{raster_height}\" preserveAspectRatio=\"xMidYMid meet\"/>\n",
            "</svg>\n",
        ),
        width = target.width,
        height = target.height,
        view_box = target.view_box,
        data = png_base64,
        raster_width = raster_width,
        raster_height = raster_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_size_rounds_fractional_view_boxes() {
        assert_eq!(raster_size("0 0 1024 1024").unwrap(), (1024, 1024));
        assert_eq!(raster_size("0 0 814.987 1023.9927").unwrap(), (815, 1024));
        assert_eq!(raster_size("0 0 1280 1280").unwrap(), (1280, 1280));
    }

    #[test]
    fn raster_size_rejects_malformed_view_boxes() {
        assert!(raster_size("0 0 1024").is_err());
        assert!(raster_size("0 0 wide tall").is_err());
    }

    #[test]
    fn svg_document_declares_target_geometry_verbatim() {
        let target = SvgTarget {
            file_name: "narrow.svg",
            width: "814.987",
            height: "1023.9927",
            view_box: "0 0 814.987 1023.9927",
        };
        let document = svg_document(&target, 815, 1024, "AAAA");

        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(document.contains("width=\"814.987\" height=\"1023.9927\" viewBox=\"0 0 814.987 1023.9927\""));
        assert!(document.contains("href=\"data:image/png;base64,AAAA\""));
        assert!(document.contains("width=\"815\" height=\"1024\" preserveAspectRatio=\"xMidYMid meet\""));
        assert!(document.ends_with("</svg>\n"));
    }
}
