use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use gem_rush_core::{CellCount, GameSettings, Placement};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Number of blocks drawn per row when nothing else is configured.
pub const DEFAULT_COLUMNS: u16 = 5;

#[derive(Parser, Debug)]
#[command(version, about = "Find the gems, dodge the rubies", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML file with game settings, flags given on the command line win
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Total number of blocks on the board
    #[arg(long)]
    pub grid_size: Option<CellCount>,

    /// How many rubies to hide
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Multiplier before any gem is found
    #[arg(long)]
    pub base_multiplier: Option<f64>,

    /// Growth of the multiplier per gem found
    #[arg(long)]
    pub risk_factor: Option<f64>,

    /// Hide exactly the requested number of rubies instead of rolling each block
    #[arg(long)]
    pub exact_mines: bool,

    /// Blocks per row
    #[arg(long)]
    pub columns: Option<u16>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub grid_size: Option<CellCount>,
    pub mine_count: Option<CellCount>,
    pub base_multiplier: Option<f64>,
    pub risk_factor: Option<f64>,
    pub placement: Option<Placement>,
    pub columns: Option<u16>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config '{}'", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config '{}'", path.display()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    pub settings: GameSettings,
    pub placement: Placement,
    pub columns: u16,
}

impl Args {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        self.merge(file)
    }

    fn merge(&self, file: ConfigFile) -> anyhow::Result<Config> {
        let defaults = GameSettings::default();
        let settings = GameSettings::new(
            self.grid_size.or(file.grid_size).unwrap_or(defaults.grid_size),
            self.mines.or(file.mine_count).unwrap_or(defaults.mine_count),
            self.base_multiplier
                .or(file.base_multiplier)
                .unwrap_or(defaults.base_multiplier),
            self.risk_factor
                .or(file.risk_factor)
                .unwrap_or(defaults.risk_factor),
        )
        .context("invalid game settings")?;

        let placement = if self.exact_mines {
            Placement::Exact
        } else {
            file.placement.unwrap_or_default()
        };

        let columns = self.columns.or(file.columns).unwrap_or(DEFAULT_COLUMNS);
        anyhow::ensure!(columns > 0, "columns must be at least 1");

        Ok(Config {
            settings,
            placement,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gem-rush").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_classic_board() {
        let config = args(&[]).merge(ConfigFile::default()).unwrap();

        assert_eq!(config.settings, GameSettings::default());
        assert_eq!(config.placement, Placement::PerCell);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn flags_override_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            grid_size = 36
            mine_count = 6
            placement = "Exact"
            columns = 6
            "#,
        )
        .unwrap();

        let config = args(&["--mines", "9", "--seed", "4"]).merge(file).unwrap();

        assert_eq!(config.settings.grid_size, 36);
        assert_eq!(config.settings.mine_count, 9);
        assert_eq!(config.placement, Placement::Exact);
        assert_eq!(config.columns, 6);
    }

    #[test]
    fn rejects_invalid_settings() {
        let result = args(&["--grid-size", "4", "--mines", "5"]).merge(ConfigFile::default());

        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_config_keys() {
        assert!(toml::from_str::<ConfigFile>("mines = 3").is_err());
    }
}
