//! Branding asset generation.
//!
//! One source logo becomes the full set of replacement icon assets for the
//! portable overlay: PNGs at fixed sizes, multi-resolution Windows icons,
//! macOS icon families, and SVG wrappers embedding a rasterized copy. Every
//! asset is an independent contain-and-center render of the same normalized
//! logo, so the whole catalog stays visually consistent.

pub mod assets;
pub mod logo;
pub mod svg;
pub mod targets;

pub use assets::generate_assets;
pub use logo::Logo;
