//! # Nameplate
//!
//! Generates a PowerPoint deck of name plates from an attendee spreadsheet.
//! Each selected row becomes one slide with a large name label and, optionally,
//! a MECARD QR code carrying the attendee's phone number and email address.
//!
//! # Architecture: One Pass, Six Stages
//!
//! The whole tool is a single forward pipeline; every stage is an independent
//! function with explicit inputs and outputs, so all of them can be unit-tested
//! without touching the filesystem except at the two true I/O edges (load the
//! roster, emit the deck):
//!
//! ```text
//! 1. Load      directory.xlsx  →  Vec<Attendee>      (roster::load)
//! 2. Select    attendees       →  selected subset    (roster::select)
//! 3. Format    attendee        →  MECARD string      (mecard::mecard)
//! 4. Encode    MECARD string   →  QR raster + logo   (qr::generate)
//! 5. Assemble  selected rows   →  Vec<SlideSpec>     (deck::build)
//! 6. Emit      slide specs     →  output.pptx        (pptx::write_deck)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`roster`] | Stage 1+2 — reads the attendee spreadsheet, filters selected rows |
//! | [`mecard`] | Stage 3 — formats the MECARD contact-card string |
//! | [`qr`] | Stage 4 — renders QR rasters and composites the logo overlay |
//! | [`deck`] | Stage 5 — turns selected attendees into slide specifications |
//! | [`pptx`] | Stage 6 — serializes slide specs into an OOXML `.pptx` package |
//! | [`pipeline`] | Orchestrates the six stages for one run |
//! | [`config`] | Explicit run configuration (paths, QR flag, logo) |
//! | [`output`] | CLI output formatting — per-slide summary of a finished run |
//!
//! # Design Decisions
//!
//! ## QR Images Never Touch Disk
//!
//! Rendered QR codes are PNG-encoded in memory and streamed straight into the
//! output package. There is no shared temp file, so nothing to clean up and
//! nothing two concurrent runs in the same directory could clobber.
//!
//! ## MECARD Fields Are Passthrough
//!
//! Contact-card fields are not escaped or validated: a name containing `;` or
//! `:` corrupts the card silently. This matches what small MECARD generators
//! produce in practice and is documented on [`mecard::mecard`] rather than
//! papered over.
//!
//! ## Hand-Written OOXML Package
//!
//! The emitted `.pptx` is a minimal Office Open XML package (presentation,
//! one blank slide master/layout, one theme, N slides) written with `zip` and
//! `quick-xml` escaping. No presentation library, no template file to ship —
//! the fixed geometry of a name plate does not need one.

pub mod config;
pub mod deck;
pub mod mecard;
pub mod output;
pub mod pipeline;
pub mod pptx;
pub mod qr;
pub mod roster;

#[cfg(test)]
pub(crate) mod test_helpers;
