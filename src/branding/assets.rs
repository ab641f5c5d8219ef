//! Raster asset writers and the generation driver.

use crate::branding::logo::Logo;
use crate::branding::svg::write_svg_asset;
use crate::branding::targets::{
    BUNDLE_ICNS_FILE, ICNS_BASE_SIZE, ICO_BASE_SIZE, ICO_EMBEDDED_SIZES, ICO_FILES,
    IMAGES_ICNS_FILE, PNG_TARGETS, PngTarget, SVG_TARGETS,
};
use anyhow::{Context, Result};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Renders the full fixed asset catalog under the overlay root and returns
/// the images directory for reporting. Outputs are overwritten in place;
/// the first failed asset aborts the run.
pub fn generate_assets(logo: &Logo, overlay_root: &Path) -> Result<PathBuf> {
    let images_root = overlay_root.join("resources").join("images");

    for target in PNG_TARGETS {
        save_png(logo, &images_root.join(target.file_name), target)?;
    }
    for file_name in ICO_FILES {
        save_ico(logo, &images_root.join(file_name))?;
    }
    save_icns(logo, &images_root.join(IMAGES_ICNS_FILE))?;
    save_icns(logo, &overlay_root.join("resources").join(BUNDLE_ICNS_FILE))?;
    for target in SVG_TARGETS {
        write_svg_asset(logo, &images_root.join(target.file_name), target)?;
    }

    Ok(images_root)
}

fn save_png(logo: &Logo, out: &Path, target: &PngTarget) -> Result<()> {
    ensure_parent(out)?;
    logo.render_mode(target.width, target.height, target.grayscale)
        .save(out)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn save_ico(logo: &Logo, out: &Path) -> Result<()> {
    ensure_parent(out)?;
    let base = logo.render(ICO_BASE_SIZE, ICO_BASE_SIZE);
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for &size in ICO_EMBEDDED_SIZES {
        let layer = scale_layer(&base, size);
        let image = ico::IconImage::from_rgba_data(size, size, layer.into_raw());
        let entry = ico::IconDirEntry::encode(&image)
            .with_context(|| format!("encoding {size}px layer of {}", out.display()))?;
        icon_dir.add_entry(entry);
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    icon_dir
        .write(BufWriter::new(file))
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn save_icns(logo: &Logo, out: &Path) -> Result<()> {
    ensure_parent(out)?;
    let base = logo.render(ICNS_BASE_SIZE, ICNS_BASE_SIZE);
    let image = icns::Image::from_data(
        icns::PixelFormat::RGBA,
        ICNS_BASE_SIZE,
        ICNS_BASE_SIZE,
        base.into_raw(),
    )
    .with_context(|| format!("building icon image for {}", out.display()))?;
    let mut family = icns::IconFamily::new();
    family
        .add_icon(&image)
        .with_context(|| format!("encoding {}", out.display()))?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    family
        .write(BufWriter::new(file))
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

// The embedded layers come from the single base render, not from
// re-rendering the logo per size.
fn scale_layer(base: &RgbaImage, size: u32) -> RgbaImage {
    if base.width() == size && base.height() == size {
        return base.clone();
    }
    imageops::resize(base, size, size, FilterType::Lanczos3)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}
