use clap::{Parser, Subcommand};

use crate::{
    config::MatchArg,
    logging::{self, Fallback, LogArg},
};

use self::simulate::SimulateArg;

mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
    #[clap(flatten)]
    match_arg: MatchArg,
    #[clap(flatten)]
    log: LogArg,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the AI in the terminal (default)
    Play,
    /// Run AI-only matches and print the final statistics as JSON
    Simulate(#[clap(flatten)] SimulateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Play);

    let fallback = match mode {
        Mode::Play => Fallback::Discard,
        Mode::Simulate(_) => Fallback::Stderr,
    };
    logging::init(&args.log, fallback)?;
    let config = args.match_arg.resolve()?;

    match mode {
        Mode::Play => play::run(&config)?,
        Mode::Simulate(arg) => simulate::run(&arg, &config)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use noughts_engine::{BoardSize, FirstMover};

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_default_mode_is_play() {
        let args = CommandArgs::try_parse_from(["noughts"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CommandArgs::try_parse_from([
            "noughts",
            "simulate",
            "--rounds",
            "10",
            "--size",
            "4",
            "--first-mover",
            "ai",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Simulate(_))));
        let config = args.match_arg.resolve().unwrap();
        assert_eq!(config.size, BoardSize::FOUR);
        assert_eq!(config.first_mover, FirstMover::Ai);
    }

    #[test]
    fn test_rejects_invalid_size() {
        assert!(CommandArgs::try_parse_from(["noughts", "--size", "7"]).is_err());
        assert!(CommandArgs::try_parse_from(["noughts", "--seed", "zz"]).is_err());
    }
}
