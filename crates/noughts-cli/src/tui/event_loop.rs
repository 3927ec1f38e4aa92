use std::io;

use crossterm::event::{self, Event};

/// Events processed by TUI applications.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The screen is out of date.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(Event),
}

/// Alternates between redrawing and waiting for the next terminal event.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        // The first frame is drawn before any input arrives.
        Self { dirty: true }
    }

    /// Returns the next event, blocking until terminal input is available.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_first() {
        let mut events = EventLoop::new();
        assert!(events.next().unwrap().is_render());
    }
}
