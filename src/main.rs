use clap::Parser;
use nameplate::config::{DEFAULT_INPUT, DEFAULT_LOGO, DEFAULT_OUTPUT, RunConfig};
use nameplate::{output, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nameplate")]
#[command(about = "Generate PowerPoint name plates from an attendee spreadsheet")]
#[command(long_about = "\
Generate PowerPoint name plates from an attendee spreadsheet

Reads the first worksheet of the input .xlsx — columns: selected (flag),
fname, lname, tel, email — and writes one slide per selected row: a large
bold name label, plus an optional MECARD QR code with a logo overlay that
phones can scan to save the contact.

Usage patterns:

  nameplate                          write directory.pptx, no QR codes
  nameplate d1.pptx                  custom output filename
  nameplate d1.pptx y                include MECARD QR codes
  nameplate d1.pptx y logo.png       QR codes with a custom logo overlay")]
#[command(version)]
struct Cli {
    /// Output presentation path (overwritten without confirmation)
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Include a MECARD QR code on each slide ("y" to enable)
    #[arg(default_value = "n")]
    qr: String,

    /// Logo image composited bottom-right onto each QR code
    #[arg(default_value = DEFAULT_LOGO)]
    logo: PathBuf,

    /// Attendee spreadsheet
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = RunConfig {
        input: cli.input,
        output: cli.output,
        include_qr: cli.qr.eq_ignore_ascii_case("y"),
        logo: cli.logo,
    };

    let report = pipeline::run(&config)?;
    output::print_run_report(&report);
    Ok(())
}
