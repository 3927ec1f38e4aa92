//! Minimal turn-driven TUI runtime.
//!
//! The board only changes in response to key presses, so there is no tick: the loop
//! redraws after every terminal event and otherwise blocks on input.

mod app;
mod event_loop;
mod runner;

pub use self::{app::App, runner::Tui};
