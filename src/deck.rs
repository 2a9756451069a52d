//! Slide assembly.
//!
//! Stage 5: turns the selected attendees into [`SlideSpec`]s — pure data the
//! emitter can serialize without knowing anything about rosters or QR codes.
//! One spec per attendee, in selection order. QR rasters are PNG-encoded here
//! and held in memory; they never touch disk.

use crate::mecard::mecard;
use crate::qr::{self, LogoPosition, QrError};
use crate::roster::Attendee;
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to render QR code for '{name}': {source}")]
    Qr { name: String, source: QrError },
}

/// An in-memory PNG plus its pixel dimensions.
///
/// The dimensions ride along so the emitter can place the picture at a fixed
/// height with an aspect-ratio-preserving width without re-decoding the PNG.
#[derive(Debug, Clone)]
pub struct QrPng {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Everything one slide needs: the name label and, optionally, a QR image.
#[derive(Debug, Clone)]
pub struct SlideSpec {
    pub name: String,
    pub qr: Option<QrPng>,
}

/// QR settings for a deck build.
#[derive(Debug, Clone)]
pub struct QrSettings {
    /// Logo composited onto every code.
    pub logo: PathBuf,
    /// Logo placement; name plates use bottom-right so the symbol center
    /// stays clean.
    pub position: LogoPosition,
}

impl QrSettings {
    pub fn bottom_right(logo: &Path) -> Self {
        Self {
            logo: logo.to_path_buf(),
            position: LogoPosition::BottomRight,
        }
    }
}

/// Build one [`SlideSpec`] per attendee, in order.
///
/// With `qr_settings` set, each slide gets a MECARD QR code for the
/// attendee's name, phone, and email. A failure to encode or to read the
/// logo aborts the build — there is no partial deck.
pub fn build(
    attendees: &[Attendee],
    qr_settings: Option<&QrSettings>,
) -> Result<Vec<SlideSpec>, DeckError> {
    let mut slides = Vec::with_capacity(attendees.len());

    for attendee in attendees {
        let name = attendee.full_name();
        let qr = match qr_settings {
            Some(settings) => Some(render_qr(attendee, settings)?),
            None => None,
        };
        slides.push(SlideSpec { name, qr });
    }

    debug!("assembled {} slide spec(s)", slides.len());
    Ok(slides)
}

fn render_qr(attendee: &Attendee, settings: &QrSettings) -> Result<QrPng, DeckError> {
    let text = mecard(&attendee.full_name(), &attendee.phone, &attendee.email);
    let wrap = |source| DeckError::Qr {
        name: attendee.full_name(),
        source,
    };

    let img = qr::generate(&text, Some(&settings.logo), settings.position).map_err(wrap)?;
    let (width, height) = img.dimensions();
    let bytes = qr::to_png_bytes(&img).map_err(wrap)?;

    Ok(QrPng { bytes, width, height })
}
