//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::output::Destination;
use crate::record::Mode;
use crate::render::Format;

/// Generate a résumé, references sheet or letterhead from JSON data
#[derive(Parser, Debug)]
#[command(name = "resumegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output a letter template with the letterhead only
    #[arg(short, long, conflicts_with = "references")]
    pub letter: bool,

    /// Output a references sheet from reference data
    #[arg(short, long)]
    pub references: bool,

    /// Output plain text instead of LaTeX
    #[arg(short, long)]
    pub plaintext: bool,

    /// Output file, or '-' for standard output
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON data file (default: resume.json, or references.json with --references)
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.references {
            Mode::References
        } else if self.letter {
            Mode::Letter
        } else {
            Mode::Resume
        }
    }

    pub fn format(&self) -> Format {
        if self.plaintext {
            Format::Plaintext
        } else {
            Format::Latex
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.mode().default_input()))
    }

    pub fn destination(&self) -> Destination {
        Destination::from_arg(&self.output)
    }
}
