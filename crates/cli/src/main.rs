//! Seedcast - forecast what a Balatro seed holds, ante by ante.

mod load;
mod render;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use seedcast_analysis::{analyze, AnalysisOptions, AnalysisSettings};
use seedcast_core::random_seed;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "seedcast")]
#[command(about = "Forecast shops, packs and bosses for a Balatro seed", long_about = None)]
struct Cli {
    /// Seed to analyze (case-insensitive, 0 reads as O)
    #[arg(long, conflicts_with = "random_seed")]
    seed: Option<String>,

    /// Analyze a freshly drawn random seed
    #[arg(long)]
    random_seed: bool,

    /// Starting deck, e.g. "Ghost Deck"
    #[arg(long)]
    deck: Option<String>,

    /// Stake, e.g. "Gold Stake"
    #[arg(long)]
    stake: Option<String>,

    /// Game version number such as 10106 (1.0.1f)
    #[arg(long)]
    game_version: Option<String>,

    /// First ante to report; 0 adds the pre-game ante
    #[arg(long)]
    min_ante: Option<f64>,

    /// Last ante to report
    #[arg(long)]
    max_ante: Option<f64>,

    /// Shop items listed per ante
    #[arg(long)]
    cards_per_ante: Option<f64>,

    /// JSON file with analysis settings; flags override its values
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// JSON file with buys, sells, unlocks and other options
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Show the jokers The Soul, Judgement and Wraith would create
    #[arg(long)]
    spoilers: bool,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<AnalysisSettings> {
        let mut settings: AnalysisSettings = load::load_or_default(self.settings.as_deref())?;
        if self.random_seed {
            settings.seed = random_seed(&mut rand::thread_rng());
            info!("drew random seed {}", settings.seed);
        } else if let Some(seed) = &self.seed {
            settings.seed = seed.clone();
        }
        override_text(&mut settings.deck, &self.deck, "Red Deck");
        override_text(&mut settings.stake, &self.stake, "White Stake");
        override_text(&mut settings.version, &self.game_version, "10106");
        if self.min_ante.is_some() {
            settings.min_ante = self.min_ante;
        }
        if self.max_ante.is_some() {
            settings.max_ante = self.max_ante;
        }
        if self.cards_per_ante.is_some() {
            settings.cards_per_ante = self.cards_per_ante;
        }
        Ok(settings)
    }

    fn options(&self) -> anyhow::Result<AnalysisOptions> {
        let mut options: AnalysisOptions = load::load_or_default(self.options.as_deref())?;
        options.show_spoilers |= self.spoilers;
        Ok(options)
    }
}

fn override_text(field: &mut String, flag: &Option<String>, fallback: &str) {
    if let Some(value) = flag {
        *field = value.clone();
    } else if field.trim().is_empty() {
        *field = fallback.to_string();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = cli.settings()?;
    let options = cli.options()?;

    let Some(result) = analyze(&settings, &options).context("analysis failed")? else {
        anyhow::bail!("no seed given; pass --seed, --random-seed or a settings file");
    };
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", render::format_result(&result)),
    }
    Ok(())
}
