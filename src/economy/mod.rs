//! The game economy: static catalog, mutable state, and the commands and
//! queries over them.

pub mod catalog;
pub mod logic;
pub mod milestones;
pub mod offline;
pub mod save;
pub mod state;
pub mod unlock;
