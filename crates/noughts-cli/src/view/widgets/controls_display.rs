use noughts_engine::MatchPhase;
use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::view::widgets::style;

/// An action of the play screen and the keys bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MoveCursor,
    Place,
    NewRound,
    Resize,
    ResetStats,
    Quit,
}

impl Control {
    pub const ALL: [Self; 6] = [
        Self::MoveCursor,
        Self::Place,
        Self::NewRound,
        Self::Resize,
        Self::ResetStats,
        Self::Quit,
    ];

    #[must_use]
    pub const fn keys(self) -> &'static str {
        match self {
            Self::MoveCursor => "←↑↓→",
            Self::Place => "Enter/Space",
            Self::NewRound => "n",
            Self::Resize => "3/4/5",
            Self::ResetStats => "r",
            Self::Quit => "q",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MoveCursor => "Move",
            Self::Place => "Place",
            Self::NewRound => "New round",
            Self::Resize => "Resize",
            Self::ResetStats => "Reset stats",
            Self::Quit => "Quit",
        }
    }

    /// Returns whether the controller accepts this action in `phase`.
    #[must_use]
    pub const fn is_available(self, phase: MatchPhase) -> bool {
        match self {
            Self::Place => phase.is_awaiting_human_move(),
            Self::Resize => phase.is_between_rounds(),
            Self::MoveCursor | Self::NewRound | Self::ResetStats | Self::Quit => true,
        }
    }
}

/// Help line listing the controls; actions the match rejects right now are dimmed.
#[derive(Debug)]
pub struct ControlsDisplay {
    phase: MatchPhase,
}

impl ControlsDisplay {
    pub fn new(phase: MatchPhase) -> Self {
        Self { phase }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![];
        for (i, control) in Control::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", style::GRID));
            }
            let (key_style, label_style) = if control.is_available(self.phase) {
                (style::X_MARK, style::DEFAULT)
            } else {
                (style::DISABLED, style::DISABLED)
            };
            spans.push(Span::styled(control.keys(), key_style));
            spans.push(Span::styled(" ", label_style));
            spans.push(Span::styled(control.label(), label_style));
        }
        Line::from(spans).centered()
    }
}

impl Widget for ControlsDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.line().render(area, buf);
    }
}
