//! Run configuration.
//!
//! Everything the pipeline needs is carried explicitly in [`RunConfig`] —
//! none of the conventional filenames live as hidden defaults inside pipeline
//! stages, so tests can inject temp paths for every input and output.

use std::path::PathBuf;

/// Conventional attendee spreadsheet filename.
pub const DEFAULT_INPUT: &str = "directory.xlsx";
/// Conventional output deck filename.
pub const DEFAULT_OUTPUT: &str = "directory.pptx";
/// Conventional logo overlaid on each QR code.
pub const DEFAULT_LOGO: &str = "logo64x64.png";

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Attendee spreadsheet (`.xlsx`, first worksheet).
    pub input: PathBuf,
    /// Output presentation path; overwritten without confirmation.
    pub output: PathBuf,
    /// Whether each slide gets a MECARD QR code.
    pub include_qr: bool,
    /// Logo image composited onto each QR code (only read when `include_qr`).
    pub logo: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            include_qr: false,
            logo: PathBuf::from(DEFAULT_LOGO),
        }
    }
}
