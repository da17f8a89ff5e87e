//! The LED panel Game of Life show: configuration, the tick-driven show
//! loop, and a text renderer for headless runs.

pub mod ascii;
pub mod config;
mod error;
pub mod show;

pub use config::AppConfig;
pub use error::ShowError;
pub use show::{LIFE_MESSAGE, Seeding, Show, draw_board};
