// ascii.rs - Text rendering of a frame buffer in logical layout

use led_panel::{FrameBuffer, LedPanel, PhysicalPixel, TILE_SIZE};

pub const LIT: char = '#';
pub const DARK: char = '.';

/// One line per logical row, top row first. Chain columns beyond the
/// panel are not shown.
pub fn render(panel: &LedPanel, frame: &FrameBuffer) -> String {
    let width = panel.width() as usize;
    let mut cells = vec![DARK; width * panel.height() as usize];
    for col in 0..frame.column_count() {
        for row in 0..TILE_SIZE as u8 {
            if !frame.is_lit(row, col) {
                continue;
            }
            if let Some((x, y)) = panel.logical(PhysicalPixel { row, col }) {
                cells[y as usize * width + x as usize] = LIT;
            }
        }
    }

    let mut out = String::with_capacity(cells.len() + panel.height() as usize);
    for line in cells.chunks(width.max(1)) {
        out.extend(line);
        out.push('\n');
    }
    out
}
