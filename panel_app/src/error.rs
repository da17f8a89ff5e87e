use conway::LifeError;
use led_panel::PanelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowError {
    #[error("panel: {0}")]
    Panel(#[from] PanelError),

    #[error("board: {0}")]
    Life(#[from] LifeError),

    #[error("configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration file: {0}")]
    Serialization(#[from] serde_json::Error),
}
