// diagnostics.rs - Still images for checking tile wiring

use serde::{Deserialize, Serialize};

use crate::driver::MatrixDriver;
use crate::effects::{Effect, SpotRun};
use crate::panel::LedPanel;

/// Outline the whole panel.
pub fn draw_border<D: MatrixDriver + ?Sized>(panel: &LedPanel, driver: &mut D) {
    let (right, bottom) = (panel.width() - 1, panel.height() - 1);
    driver.clear();
    panel.draw_line(driver, 0, 0, right, 0);
    panel.draw_line(driver, 0, bottom, right, bottom);
    panel.draw_line(driver, 0, 0, 0, bottom);
    panel.draw_line(driver, right, 0, right, bottom);
}

/// Mark the first tile so its orientation can be read off the display:
/// a dot at (0, 0), a diagonal pair ending at (7, 7), an L at (7, 0) and
/// a filled 2x2 corner at (0, 7).
pub fn identify_panel<D: MatrixDriver + ?Sized>(panel: &LedPanel, driver: &mut D) {
    const MARKS: [(i32, i32); 10] = [
        (0, 0),
        (7, 7),
        (6, 6),
        (7, 0),
        (6, 0),
        (7, 1),
        (0, 7),
        (1, 7),
        (0, 6),
        (1, 6),
    ];
    driver.clear();
    for (x, y) in MARKS {
        panel.draw_point(driver, x, y, true);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnostic {
    Border,
    Identify,
    SpotRun,
}

impl Diagnostic {
    /// Draw a still diagnostic, or return the animation for `SpotRun`.
    pub fn show<D: MatrixDriver + ?Sized>(self, panel: &LedPanel, driver: &mut D) -> Option<Box<dyn Effect>> {
        match self {
            Diagnostic::Border => {
                draw_border(panel, driver);
                None
            }
            Diagnostic::Identify => {
                identify_panel(panel, driver);
                None
            }
            Diagnostic::SpotRun => Some(Box::new(SpotRun::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::FrameBuffer;

    #[test]
    fn border_lights_perimeter_only() {
        let panel = LedPanel::new(4, 1).unwrap();
        let mut frame = FrameBuffer::new(panel.column_count());
        draw_border(&panel, &mut frame);
        assert_eq!(frame.lit_count(), 2 * 32 + 2 * 6);
        let lit = |x, y| {
            let pixel = panel.locate(x, y).unwrap();
            frame.is_lit(pixel.row, pixel.col)
        };
        assert!(lit(0, 0) && lit(31, 7) && lit(0, 4) && lit(31, 4));
        assert!(!lit(1, 1));
    }

    #[test]
    fn identify_marks_first_tile() {
        let panel = LedPanel::new(2, 1).unwrap();
        let mut frame = FrameBuffer::new(panel.column_count());
        identify_panel(&panel, &mut frame);
        assert_eq!(frame.lit_count(), 10);
        // Logical tile 0 sits at the far end of the chain.
        assert_eq!(frame.column(0), 0);
        assert_ne!(frame.column(15), 0);
    }
}
