use std::path::PathBuf;

use clap::Parser;
use marquee_core::PageConfig;

/// Pixels per terminal cell, used to translate cell geometry into the
/// pixel units the page logic works in.
pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

#[derive(Debug, Parser)]
#[command(
    name = "marquee",
    version,
    about = "Landing page with a card-stack carousel, in your terminal"
)]
pub struct Cli {
    /// TOML or JSON config file (overrides MARQUEE_CONFIG_PATH)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of cards in the stack
    #[arg(long)]
    pub cards: Option<usize>,

    /// Viewport width in pixels; decides whether auto-advance runs.
    /// Defaults to the terminal width, or 1280 in script mode.
    #[arg(long)]
    pub viewport_width: Option<f32>,

    /// Preference file holding the dark-mode flag
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// Write logs here instead of discarding them (interactive mode)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run headless from a command script and print the final state
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Seed for the particle layout
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut PageConfig) {
        if let Some(cards) = self.cards {
            config.layout.cards = cards;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_flag_overrides_layout() {
        let cli = Cli::parse_from(["marquee", "--cards", "8", "--seed", "3"]);
        let mut config = PageConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.layout.cards, 8);
        assert_eq!(cli.seed, Some(3));
        assert!(cli.script.is_none());
    }
}
