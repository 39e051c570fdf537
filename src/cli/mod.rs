//! Terminal front end

pub mod list;
pub mod select;
pub mod setup;
pub mod status;
pub mod ui;
pub mod watch;
