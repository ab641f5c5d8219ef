//! Fixed branding output tables.
//!
//! These tables are the contract with the application build: the overlay
//! replaces files the slicer looks up by exact name and size, so any drift
//! here is a silent regression in the branded build.

/// A PNG render target under `resources/images/`.
#[derive(Debug)]
pub struct PngTarget {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub grayscale: bool,
}

/// An SVG wrapper target under `resources/images/`. The declared width,
/// height, and viewBox are written verbatim; the embedded raster is sized to
/// the viewBox.
#[derive(Debug)]
pub struct SvgTarget {
    pub file_name: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub view_box: &'static str,
}

pub const PNG_TARGETS: &[PngTarget] = &[
    PngTarget { file_name: "OrcaSlicer.png", width: 154, height: 154, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_32px.png", width: 32, height: 32, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_64.png", width: 64, height: 64, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_128px.png", width: 128, height: 128, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_154.png", width: 154, height: 154, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_154_title.png", width: 184, height: 184, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_192px.png", width: 192, height: 192, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_192px_transparent.png", width: 192, height: 192, grayscale: false },
    PngTarget { file_name: "OrcaSlicer_192px_grayscale.png", width: 192, height: 192, grayscale: true },
    PngTarget { file_name: "OrcaSlicerTitle.png", width: 154, height: 154, grayscale: false },
    PngTarget { file_name: "OrcaSlicer-mac_128px.png", width: 128, height: 128, grayscale: false },
];

/// Windows icons share one base render; each file embeds every size in
/// [`ICO_EMBEDDED_SIZES`].
pub const ICO_FILES: &[&str] = &[
    "OrcaSlicer.ico",
    "OrcaSlicer-mac_256px.ico",
    "OrcaSlicerTitle.ico",
];

pub const ICO_BASE_SIZE: u32 = 256;

// 154 is the slicer's native toolbar size and rides along with the usual
// power-of-two ladder.
pub const ICO_EMBEDDED_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 154, 256];

pub const ICNS_BASE_SIZE: u32 = 1024;

/// macOS icon family shipped next to the other images.
pub const IMAGES_ICNS_FILE: &str = "OrcaSlicer.icns";

/// macOS icon family replacing the application bundle icon, one level above
/// the images directory.
pub const BUNDLE_ICNS_FILE: &str = "Icon.icns";

pub const SVG_TARGETS: &[SvgTarget] = &[
    SvgTarget { file_name: "OrcaSlicer.svg", width: "1024", height: "1024", view_box: "0 0 1024 1024" },
    SvgTarget { file_name: "OrcaSlicer_about.svg", width: "560", height: "125", view_box: "0 0 560 125" },
    SvgTarget { file_name: "OrcaSlicer_about_dark.svg", width: "560", height: "125", view_box: "0 0 560 125" },
    SvgTarget { file_name: "OrcaSlicer_gradient.svg", width: "1024", height: "1024", view_box: "0 0 1024 1024" },
    SvgTarget { file_name: "OrcaSlicer_gradient_narrow.svg", width: "814.987", height: "1023.9927", view_box: "0 0 814.987 1023.9927" },
    SvgTarget { file_name: "OrcaSlicer_gradient_circle.svg", width: "1024", height: "1024", view_box: "0 0 1280 1280" },
    SvgTarget { file_name: "OrcaSlicer_gray.svg", width: "1024", height: "1024", view_box: "0 0 1024 1024" },
    SvgTarget { file_name: "splash_logo.svg", width: "480", height: "480", view_box: "0 0 480 480" },
    SvgTarget { file_name: "splash_logo_dark.svg", width: "480", height: "480", view_box: "0 0 480 480" },
];
