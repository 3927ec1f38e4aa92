use std::iter;

use noughts_engine::{BoardSize, MatchPhase, RoundStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

/// Symbols, counters and phase of the running match.
#[derive(Debug)]
pub struct StatusDisplay<'a> {
    summary: Summary,
    block: Option<BlockWidget<'a>>,
}

#[derive(Debug, Clone)]
struct Summary {
    status: RoundStatus,
    phase: MatchPhase,
    size: BoardSize,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(status: &RoundStatus, phase: MatchPhase, size: BoardSize) -> Self {
        Self {
            summary: Summary {
                status: status.clone(),
                phase,
                size,
            },
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        22 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&Summary) -> String),
    LabelValue(&'static str, &'static dyn Fn(&Summary) -> String),
}

const ROWS: &[Row] = &[
    Row::LabelValue("YOU:", &|s| s.status.player_mark().to_string()),
    Row::LabelValue("AI:", &|s| s.status.ai_mark().to_string()),
    Row::LabelValue("BOARD:", &|s| format!("{0}x{0}", s.size)),
    Row::Empty,
    Row::LabelValue("WINS:", &|s| s.status.player_wins().to_string()),
    Row::LabelValue("LOSSES:", &|s| s.status.ai_wins().to_string()),
    Row::LabelValue("DRAWS:", &|s| s.status.draws().to_string()),
    Row::LabelValue("ROUNDS:", &|s| s.status.rounds_played().to_string()),
    Row::Empty,
    Row::FullLabel("PHASE:"),
    Row::FullValue(&|s| s.phase.to_string()),
];

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(&self.summary), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(&self.summary), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
