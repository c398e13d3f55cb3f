mod board;
mod common;
mod config;
mod controller;
mod logging;
mod player;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use logging::init_logging;
pub use player::*;
pub use ui::*;
