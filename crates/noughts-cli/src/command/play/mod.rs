use noughts_advisor::MoveAdvisor;
use noughts_engine::MatchController;
use rand::Rng as _;
use tracing::info;

use crate::{command::play::app::PlayApp, config::MatchConfig, tui::Tui};

mod app;

pub(crate) fn run(config: &MatchConfig) -> anyhow::Result<()> {
    let seed = config.seed_or_random();
    info!(%seed, size = %config.size, first_mover = %config.first_mover, "starting interactive match");

    let mut seeds = seed.rng();
    let advisor = MoveAdvisor::with_seed(config.cell_choice, seeds.random());
    let game = MatchController::with_seed(config.options(), advisor, seeds.random());

    let mut app = PlayApp::new(game);
    Tui::new().run(&mut app)?;

    let status = app.into_status();
    info!(
        player_wins = status.player_wins(),
        ai_wins = status.ai_wins(),
        draws = status.draws(),
        "match closed"
    );
    Ok(())
}
