use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid {width}x{height} does not fit signed 32-bit coordinates")]
    TooLarge { width: usize, height: usize },
}
