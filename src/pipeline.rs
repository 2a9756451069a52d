//! Pipeline orchestration.
//!
//! Runs the six stages in order for one [`RunConfig`] and reports what was
//! produced. There is no retry logic and no intermediate state: each stage
//! either hands its output to the next or the run fails with that stage's
//! error.

use crate::config::RunConfig;
use crate::deck::{self, DeckError, QrSettings};
use crate::pptx::{self, PptxError};
use crate::roster::{self, RosterError};
use log::info;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Pptx(#[from] PptxError),
}

/// What one finished run produced.
#[derive(Debug)]
pub struct RunReport {
    /// Slide labels, in deck order.
    pub names: Vec<String>,
    /// Whether QR codes were rendered onto the slides.
    pub qr_enabled: bool,
    /// Absolute path of the written presentation.
    pub output_path: PathBuf,
}

/// Run the full pipeline: load → select → assemble → emit.
pub fn run(config: &RunConfig) -> Result<RunReport, PipelineError> {
    let attendees = roster::load(&config.input)?;
    let selected = roster::select(attendees);
    info!("{} attendee(s) selected from {}", selected.len(), config.input.display());

    let qr_settings = config
        .include_qr
        .then(|| QrSettings::bottom_right(&config.logo));
    let slides = deck::build(&selected, qr_settings.as_ref())?;

    let output_path = pptx::write_deck(&slides, &config.output)?;

    Ok(RunReport {
        names: slides.into_iter().map(|s| s.name).collect(),
        qr_enabled: config.include_qr,
        output_path,
    })
}
