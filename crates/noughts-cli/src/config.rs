//! Match settings from a JSON file and the command line.
//!
//! Every field is optional in the file. Values given on the command line win over the
//! file, and the file wins over the built-in defaults.
//!
//! ```json
//! { "size": 4, "first_mover": "ai", "cell_choice": "random", "seed": "00000000000000000000000000000001" }
//! ```

use std::path::{Path, PathBuf};

use noughts_advisor::CellChoice;
use noughts_engine::{BoardSize, FirstMover, MatchOptions, MatchSeed};
use rand::Rng as _;
use serde::{Deserialize, Serialize};

use crate::util;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub size: BoardSize,
    pub first_mover: FirstMover,
    pub cell_choice: CellChoice,
    pub seed: Option<MatchSeed>,
}

impl MatchConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        util::read_json_file("match config", path)
    }

    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            size: self.size,
            first_mover: self.first_mover,
        }
    }

    /// Returns the configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> MatchSeed {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub struct MatchArg {
    /// JSON file with match settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Board side length (3, 4 or 5)
    #[arg(long, global = true)]
    size: Option<BoardSize>,
    /// Who opens each round (random, player or ai)
    #[arg(long, global = true)]
    first_mover: Option<FirstMover>,
    /// How the AI picks a cell inside its chosen line (middle or random)
    #[arg(long, global = true)]
    cell_choice: Option<CellChoice>,
    /// 32-digit hex seed for reproducible matches
    #[arg(long, global = true)]
    seed: Option<MatchSeed>,
}

impl MatchArg {
    /// Loads the config file, if any, and applies the command-line overrides.
    pub fn resolve(&self) -> anyhow::Result<MatchConfig> {
        let base = match &self.config {
            Some(path) => MatchConfig::load(path)?,
            None => MatchConfig::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, base: MatchConfig) -> MatchConfig {
        MatchConfig {
            size: self.size.unwrap_or(base.size),
            first_mover: self.first_mover.unwrap_or(base.first_mover),
            cell_choice: self.cell_choice.unwrap_or(base.cell_choice),
            seed: self.seed.or(base.seed),
        }
    }
}
