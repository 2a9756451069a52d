//! QR raster generation and logo compositing.
//!
//! The `qrcode` crate produces only the module matrix; rendering is done here
//! with the `image` crate so the module size and quiet zone stay fixed:
//! 10px per module, a 1-module quiet zone, black on white. Error correction
//! is level H (~30% of the symbol recoverable), which is what makes painting
//! a logo over the middle or corner of the code survivable.
//!
//! Compositing is alpha-aware, so a logo with a transparent background only
//! covers its visible pixels.

use image::{ImageFormat, Rgba, RgbaImage, imageops};
use log::debug;
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Pixels per QR module (matches the conventional 10px box size).
pub const MODULE_PX: u32 = 10;
/// Quiet zone around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 1;
/// Margin between a bottom-right logo and the image edges, in pixels.
pub const LOGO_MARGIN_PX: u32 = 10;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Where the logo lands on the QR image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoPosition {
    /// Exactly centered on both axes.
    Center,
    /// Offset [`LOGO_MARGIN_PX`] from the bottom-right corner on each axis.
    BottomRight,
}

/// Render `text` as a QR code raster, black modules on a white background.
///
/// Fails with [`QrError::Encode`] when the text exceeds the capacity of the
/// largest QR version at level H.
pub fn render(text: &str) -> Result<RgbaImage, QrError> {
    let code = QrCode::with_error_correction_level(text, EcLevel::H)?;
    let modules = code.width() as u32;
    let size = (modules + 2 * QUIET_ZONE_MODULES) * MODULE_PX;

    let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
    let colors = code.to_colors();
    for (i, color) in colors.iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let mx = (i as u32 % modules + QUIET_ZONE_MODULES) * MODULE_PX;
            let my = (i as u32 / modules + QUIET_ZONE_MODULES) * MODULE_PX;
            for dy in 0..MODULE_PX {
                for dx in 0..MODULE_PX {
                    img.put_pixel(mx + dx, my + dy, Rgba([0, 0, 0, 255]));
                }
            }
        }
    }

    debug!("rendered {modules}x{modules} module QR ({size}px) for {} bytes", text.len());
    Ok(img)
}

/// Top-left corner for a logo of `logo` size on a canvas of `canvas` size.
///
/// Center: `((w - lw) / 2, (h - lh) / 2)`.
/// Bottom-right: `(w - lw - 10, h - lh - 10)`.
pub fn logo_offset(canvas: (u32, u32), logo: (u32, u32), position: LogoPosition) -> (i64, i64) {
    let (cw, ch) = canvas;
    let (lw, lh) = logo;
    match position {
        LogoPosition::Center => (
            (i64::from(cw) - i64::from(lw)) / 2,
            (i64::from(ch) - i64::from(lh)) / 2,
        ),
        LogoPosition::BottomRight => (
            i64::from(cw) - i64::from(lw) - i64::from(LOGO_MARGIN_PX),
            i64::from(ch) - i64::from(lh) - i64::from(LOGO_MARGIN_PX),
        ),
    }
}

/// Render `text` as a QR raster and, when given, composite a logo onto it.
pub fn generate(
    text: &str,
    logo: Option<&Path>,
    position: LogoPosition,
) -> Result<RgbaImage, QrError> {
    let mut img = render(text)?;

    if let Some(logo_path) = logo {
        let logo_img = image::open(logo_path)?.to_rgba8();
        let (x, y) = logo_offset(img.dimensions(), logo_img.dimensions(), position);
        imageops::overlay(&mut img, &logo_img, x, y);
    }

    Ok(img)
}

/// PNG-encode a raster in memory.
pub fn to_png_bytes(img: &RgbaImage) -> Result<Vec<u8>, QrError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
