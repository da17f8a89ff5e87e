//! Drawing on a grid of 8x8 LED tiles wired as one chain.
//!
//! [`LedPanel`] turns logical `(x, y)` pixels into the row/column address
//! the chain expects and draws points and lines through a
//! [`MatrixDriver`]. The end-of-game animations are [`Effect`]s that
//! produce one frame per call, so a scheduler can pace or interrupt them.

pub mod diagnostics;
mod driver;
pub mod effects;
mod error;
mod panel;

pub use diagnostics::Diagnostic;
pub use driver::{FrameBuffer, MatrixDriver};
pub use effects::{Effect, EffectKind, Flash, Spiral, SpotRun, Wave, play_blocking};
pub use error::PanelError;
pub use panel::{LedPanel, PhysicalPixel, TILE_SIZE};
