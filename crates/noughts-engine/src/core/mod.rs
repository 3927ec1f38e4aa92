pub use self::{board::*, board_size::*, cell::*, line::*, mark::*};

pub(crate) mod board;
pub(crate) mod board_size;
pub(crate) mod cell;
pub(crate) mod line;
pub(crate) mod mark;
