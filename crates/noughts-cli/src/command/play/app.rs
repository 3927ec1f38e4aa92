use crossterm::event::{Event, KeyCode, KeyEventKind};
use noughts_engine::{
    BoardSize, Coord, MatchController, Opponent, RoundOutcome, RoundStatus, TurnReport,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::Line,
    widgets::Block as BlockWidget,
};

use crate::{
    tui::App,
    view::widgets::{BoardDisplay, ControlsDisplay, StatusDisplay, style},
};

/// Interactive match against the computer.
#[derive(Debug)]
pub struct PlayApp<O> {
    game: MatchController<O>,
    cursor: Coord,
    last_ai_move: Option<Coord>,
    message: String,
    is_exiting: bool,
}

impl<O> PlayApp<O>
where
    O: Opponent,
{
    /// Wraps `game` and starts the first round.
    pub fn new(game: MatchController<O>) -> Self {
        let mut app = Self {
            game,
            cursor: Coord::new(0, 0),
            last_ai_move: None,
            message: String::new(),
            is_exiting: false,
        };
        app.start_round();
        app
    }

    pub fn into_status(self) -> RoundStatus {
        self.game.status().clone()
    }

    fn start_round(&mut self) {
        let report = self.game.new_round();
        let center = self.game.board().size().side() / 2;
        self.cursor = Coord::new(center, center);
        self.show_report(&report);
    }

    fn place(&mut self) {
        match self.game.handle_move(self.cursor) {
            Ok(report) => self.show_report(&report),
            Err(err) => self.message = format!("{err}."),
        }
    }

    fn resize(&mut self, size: BoardSize) {
        match self.game.resize(size) {
            Ok(report) => {
                let center = size.side() / 2;
                self.cursor = Coord::new(center, center);
                self.show_report(&report);
            }
            Err(err) => self.message = format!("{err}."),
        }
    }

    fn reset_statistics(&mut self) {
        self.game.reset_statistics();
        self.message = "Statistics reset.".to_owned();
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let last = self.game.board().size().side() - 1;
        self.cursor = Coord::new(
            self.cursor.x.saturating_add_signed(dx).min(last),
            self.cursor.y.saturating_add_signed(dy).min(last),
        );
    }

    fn show_report(&mut self, report: &TurnReport) {
        self.last_ai_move = report.ai_move;
        let mark = self.game.status().player_mark();
        self.message = match (&report.result, report.ai_move) {
            (Some(result), _) => match result.outcome {
                RoundOutcome::PlayerWin => "You win! Press n for a new round.".to_owned(),
                RoundOutcome::AiWin => match result.line {
                    Some(line) => format!("AI wins on the {line}. Press n for a new round."),
                    None => "AI wins. Press n for a new round.".to_owned(),
                },
                RoundOutcome::Draw => "Draw. Press n for a new round.".to_owned(),
            },
            (None, Some(coord)) if report.player_move.is_none() => {
                format!("AI opened at {coord}. Your move ({mark}).")
            }
            (None, Some(coord)) => format!("AI played {coord}. Your move ({mark})."),
            (None, None) => format!("Your move ({mark})."),
        };
    }
}

impl<O> App for PlayApp<O>
where
    O: Opponent,
{
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char('n') => self.start_round(),
            KeyCode::Char('3') => self.resize(BoardSize::THREE),
            KeyCode::Char('4') => self.resize(BoardSize::FOUR),
            KeyCode::Char('5') => self.resize(BoardSize::FIVE),
            KeyCode::Char('r') => self.reset_statistics(),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let board = self.game.board();
        let win_cells = self
            .game
            .last_result()
            .map_or(&[][..], |result| result.win_cells.as_slice());

        let board_display = BoardDisplay::new(board)
            .cursor(self.cursor)
            .last_move(self.last_ai_move)
            .win_cells(win_cells)
            .block(BlockWidget::bordered().title(" BOARD "));
        let status_display =
            StatusDisplay::new(self.game.status(), self.game.phase(), board.size())
                .block(BlockWidget::bordered().title(" MATCH "));
        let message = Line::styled(self.message.as_str(), style::DEFAULT).centered();
        let help = ControlsDisplay::new(self.game.phase());

        let main_height = board_display.height().max(status_display.height());
        let [main_area, message_area, help_area] = Layout::vertical([
            Constraint::Length(main_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        let [board_area, status_area] = Layout::horizontal([
            Constraint::Length(board_display.width()),
            Constraint::Length(status_display.width()),
        ])
        .flex(Flex::Center)
        .spacing(2)
        .areas(main_area);

        frame.render_widget(board_display, board_area);
        frame.render_widget(status_display, status_area);
        frame.render_widget(message, message_area);
        frame.render_widget(help, help_area);
    }
}
