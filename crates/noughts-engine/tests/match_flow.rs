use std::collections::VecDeque;

use noughts_engine::{
    Board, BoardSize, Coord, FirstMover, IllegalMoveError, LineKind, Mark, MatchController,
    MatchOptions, MatchPhase, MatchSeed, Opponent, RoundOutcome, RoundResult,
};

/// Replays a fixed list of moves.
#[derive(Debug)]
struct ScriptedOpponent {
    moves: VecDeque<Coord>,
}

impl ScriptedOpponent {
    fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        }
    }
}

impl Opponent for ScriptedOpponent {
    fn select_cell(&mut self, _board: &Board, _mark: Mark) -> Option<Coord> {
        self.moves.pop_front()
    }
}

fn start_match(size: BoardSize, ai_moves: &[(usize, usize)]) -> MatchController<ScriptedOpponent> {
    let options = MatchOptions {
        size,
        first_mover: FirstMover::Player,
    };
    let mut game = MatchController::with_seed(
        options,
        ScriptedOpponent::new(ai_moves),
        MatchSeed::from_bytes([0x42; 16]),
    );
    game.new_round();
    game
}

fn play(game: &mut MatchController<ScriptedOpponent>, x: usize, y: usize) -> Option<RoundResult> {
    game.handle_move(Coord::new(x, y)).unwrap().result
}

#[test]
fn test_player_wins_column_zero() {
    let mut game = start_match(BoardSize::THREE, &[(1, 1), (2, 2)]);

    assert_eq!(play(&mut game, 0, 0), None);
    assert_eq!(play(&mut game, 0, 1), None);
    let result = play(&mut game, 0, 2).unwrap();

    assert_eq!(result.outcome, RoundOutcome::PlayerWin);
    assert_eq!(result.line, Some(LineKind::Column(0)));
    assert_eq!(
        result.win_cells,
        [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
    );
    assert_eq!(game.phase(), MatchPhase::RoundEnded);
    assert_eq!(game.status().player_wins(), 1);
    assert_eq!(game.status().ai_wins(), 0);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = start_match(BoardSize::THREE, &[(1, 0), (1, 1), (2, 1), (0, 2)]);

    for (x, y) in [(0, 0), (2, 0), (0, 1), (1, 2)] {
        assert_eq!(play(&mut game, x, y), None);
    }
    let result = play(&mut game, 2, 2).unwrap();

    assert_eq!(result, RoundResult::draw());
    assert!(game.board().is_full());
    assert_eq!(game.board().to_string(), "X O X\nX O O\nO X X\n");
    assert_eq!(game.status().draws(), 1);
}

#[test]
fn test_round_ended_waits_for_new_round() {
    let mut game = start_match(BoardSize::THREE, &[(1, 1), (2, 2), (2, 0)]);
    play(&mut game, 0, 0);
    play(&mut game, 0, 1);
    play(&mut game, 0, 2);

    assert_eq!(
        game.handle_move(Coord::new(2, 0)),
        Err(IllegalMoveError::NotPlayersTurn {
            phase: MatchPhase::RoundEnded
        })
    );

    game.new_round();
    assert_eq!(game.phase(), MatchPhase::AwaitingHumanMove);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.status().player_wins(), 1);

    let report = game.handle_move(Coord::new(1, 1)).unwrap();
    assert_eq!(report.ai_move, Some(Coord::new(2, 0)));
}

#[test]
fn test_resize_between_rounds() {
    let mut game = start_match(BoardSize::THREE, &[]);
    assert!(game.resize(BoardSize::FOUR).is_err());
    assert_eq!(game.board().size(), BoardSize::THREE);

    // The scripted opponent gives up, which ends the round.
    play(&mut game, 1, 1);
    assert_eq!(game.phase(), MatchPhase::RoundEnded);

    game.resize(BoardSize::FOUR).unwrap();
    assert_eq!(game.board().size(), BoardSize::FOUR);
    assert_eq!(game.board().empty_cells().count(), 16);
    assert_eq!(game.phase(), MatchPhase::AwaitingHumanMove);
}

#[test]
fn test_five_by_five_anti_diagonal() {
    let mut game = start_match(BoardSize::FIVE, &[(0, 0), (1, 0), (2, 0), (3, 0)]);

    for (x, y) in [(4, 0), (3, 1), (2, 2), (1, 3)] {
        assert_eq!(play(&mut game, x, y), None);
    }
    let result = play(&mut game, 0, 4).unwrap();

    assert_eq!(result.outcome, RoundOutcome::PlayerWin);
    assert_eq!(result.line, Some(LineKind::AntiDiagonal));
    assert_eq!(result.win_cells.len(), 5);
}
