//! Command-line interface

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// A tiny arcade ship you fly with the arrow keys and aim with the mouse
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging and per-frame state output
    #[clap(short, long)]
    pub debug: bool,

    /// Directory holding default.toml and user.toml
    #[clap(long, default_value = "config")]
    pub config: PathBuf,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if self.debug {
            config.debug.enable_all();
        }
    }
}
