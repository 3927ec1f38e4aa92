use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, controls_display::*, status_display::*};

mod board_display;
mod controls_display;
mod status_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const DISABLED: Style = fg_bg(color::DARK_GRAY, color::BLACK);
    pub const GRID: Style = fg_bg(color::DARK_GRAY, color::BLACK);
    pub const CURSOR: Style = fg_bg(color::BLACK, color::WHITE);
    pub const WIN_LINE: Style = fg_bg(color::BLACK, color::GREEN).add_modifier(Modifier::BOLD);
    pub const LAST_MOVE: Modifier = Modifier::UNDERLINED;

    pub const X_MARK: Style = fg_bg(color::CYAN, color::BLACK).add_modifier(Modifier::BOLD);
    pub const O_MARK: Style = fg_bg(color::YELLOW, color::BLACK).add_modifier(Modifier::BOLD);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
