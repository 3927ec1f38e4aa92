use std::path::PathBuf;

use anyhow::ensure;
use noughts_advisor::{CellChoice, MoveAdvisor, RandomOpponent};
use noughts_engine::{
    BoardSize, FirstMover, MatchController, MatchPhase, MatchSeed, Opponent, RoundStatus,
};
use rand::Rng as _;
use serde::Serialize;
use tracing::{debug, info};

use crate::{config::MatchConfig, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of rounds to play
    #[clap(long, default_value_t = 100)]
    rounds: usize,
    /// Let the advisor play the human side too, instead of a random player
    #[clap(long)]
    mirror: bool,
    /// Write the JSON report to this file instead of stdout
    #[clap(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Final statistics of a simulation run.
#[derive(Debug, Serialize)]
struct SimulationReport {
    size: BoardSize,
    rounds: usize,
    first_mover: FirstMover,
    cell_choice: CellChoice,
    human_side: &'static str,
    seed: MatchSeed,
    status: RoundStatus,
}

pub(crate) fn run(arg: &SimulateArg, config: &MatchConfig) -> anyhow::Result<()> {
    let SimulateArg {
        rounds,
        mirror,
        output,
    } = arg;
    ensure!(*rounds > 0, "--rounds must be at least 1");

    let seed = config.seed_or_random();
    info!(%seed, rounds, mirror, size = %config.size, "starting simulation");

    let mut seeds = seed.rng();
    let advisor = MoveAdvisor::with_seed(config.cell_choice, seeds.random());
    let mut human: Box<dyn Opponent> = if *mirror {
        Box::new(MoveAdvisor::with_seed(config.cell_choice, seeds.random()))
    } else {
        Box::new(RandomOpponent::with_seed(seeds.random()))
    };
    let mut game = MatchController::with_seed(config.options(), advisor, seeds.random());

    let status = play_rounds(&mut game, human.as_mut(), *rounds)?;
    info!(
        player_wins = status.player_wins(),
        ai_wins = status.ai_wins(),
        draws = status.draws(),
        "simulation finished"
    );

    let report = SimulationReport {
        size: config.size,
        rounds: *rounds,
        first_mover: config.first_mover,
        cell_choice: config.cell_choice,
        human_side: if *mirror { "advisor" } else { "random" },
        seed,
        status,
    };
    Output::create(output.as_deref())?.write_json(&report)
}

/// Plays `rounds` complete rounds, with `human` choosing the player's moves.
fn play_rounds<O>(
    game: &mut MatchController<O>,
    human: &mut dyn Opponent,
    rounds: usize,
) -> anyhow::Result<RoundStatus>
where
    O: Opponent,
{
    for round in 1..=rounds {
        game.new_round();
        while game.phase() == MatchPhase::AwaitingHumanMove {
            let mark = game.status().player_mark();
            let Some(coord) = human.select_cell(game.board(), mark) else {
                anyhow::bail!("player side found no empty cell on a running board");
            };
            game.handle_move(coord)?;
        }
        debug!(
            round,
            outcome = ?game.last_result().map(|r| r.outcome),
            "round finished"
        );
    }
    Ok(game.status().clone())
}
