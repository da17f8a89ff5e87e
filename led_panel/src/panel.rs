// panel.rs - Logical pixel grid over a chain of 8x8 tiles
//
// The chain runs right to left, bottom row first, seen from the
// controller. For 4x2 tiles:
//
//   [3][2][1][0]  <= controller
//   [7][6][5][4]
//
// Logical (0, 0) is the top-left pixel. Pixels inside each tile are
// mirrored on both axes.

use crate::driver::MatrixDriver;
use crate::error::PanelError;

/// Tile edge in pixels.
pub const TILE_SIZE: i32 = 8;

/// A pixel as the chain addresses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhysicalPixel {
    pub row: u8,
    pub col: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedPanel {
    devices_wide: u8,
    devices_high: u8,
}

impl LedPanel {
    pub fn new(devices_wide: u8, devices_high: u8) -> Result<Self, PanelError> {
        if devices_wide == 0 || devices_high == 0 {
            return Err(PanelError::NoDevices {
                devices_wide,
                devices_high,
            });
        }
        let devices = devices_wide as usize * devices_high as usize;
        let columns = devices * TILE_SIZE as usize;
        if columns > u16::MAX as usize {
            return Err(PanelError::ChainTooLong { devices, columns });
        }
        Ok(Self {
            devices_wide,
            devices_high,
        })
    }

    pub fn width(&self) -> i32 {
        self.devices_wide as i32 * TILE_SIZE
    }

    pub fn height(&self) -> i32 {
        self.devices_high as i32 * TILE_SIZE
    }

    pub fn devices_wide(&self) -> u8 {
        self.devices_wide
    }

    pub fn devices_high(&self) -> u8 {
        self.devices_high
    }

    pub fn device_count(&self) -> usize {
        self.devices_wide as usize * self.devices_high as usize
    }

    /// Columns across the whole chain.
    pub fn column_count(&self) -> u16 {
        (self.device_count() * TILE_SIZE as usize) as u16
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    /// Chain address of logical pixel `(x, y)`, `None` off the panel.
    pub fn locate(&self, x: i32, y: i32) -> Option<PhysicalPixel> {
        if !self.contains(x, y) {
            return None;
        }
        let wide = self.devices_wide as i32;
        let high = self.devices_high as i32;

        let module_x = x / TILE_SIZE;
        let module_y = y / TILE_SIZE;
        let local_x = TILE_SIZE - 1 - x % TILE_SIZE;
        let local_y = TILE_SIZE - 1 - y % TILE_SIZE;

        let module_index = (high - 1 - module_y) * wide + (wide - 1 - module_x);
        let column = module_index * TILE_SIZE + local_x;

        Some(PhysicalPixel {
            row: local_y as u8,
            col: column as u16,
        })
    }

    /// Inverse of [`LedPanel::locate`].
    pub fn logical(&self, pixel: PhysicalPixel) -> Option<(i32, i32)> {
        let row = pixel.row as i32;
        let col = pixel.col as i32;
        if row >= TILE_SIZE || col >= self.column_count() as i32 {
            return None;
        }
        let wide = self.devices_wide as i32;
        let high = self.devices_high as i32;

        let module_index = col / TILE_SIZE;
        let module_x = wide - 1 - module_index % wide;
        let module_y = high - 1 - module_index / wide;

        let x = module_x * TILE_SIZE + (TILE_SIZE - 1 - col % TILE_SIZE);
        let y = module_y * TILE_SIZE + (TILE_SIZE - 1 - row);
        Some((x, y))
    }

    /// Off-panel points are dropped.
    pub fn draw_point<D: MatrixDriver + ?Sized>(&self, driver: &mut D, x: i32, y: i32, on: bool) {
        if let Some(pixel) = self.locate(x, y) {
            driver.set_pixel(pixel.row, pixel.col, on);
        }
    }

    /// Bresenham line, both endpoints lit. A line reaching off the panel is
    /// clipped to it first; one that misses the panel draws nothing.
    pub fn draw_line<D: MatrixDriver + ?Sized>(&self, driver: &mut D, x0: i32, y0: i32, x1: i32, y1: i32) {
        let segment = if self.contains(x0, y0) && self.contains(x1, y1) {
            Some((x0 as i64, y0 as i64, x1 as i64, y1 as i64))
        } else {
            self.clip(x0, y0, x1, y1)
        };
        if let Some((x0, y0, x1, y1)) = segment {
            self.bresenham(driver, x0, y0, x1, y1);
        }
    }

    fn bresenham<D: MatrixDriver + ?Sized>(&self, driver: &mut D, mut x0: i64, mut y0: i64, x1: i64, y1: i64) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.draw_point(driver, x0 as i32, y0 as i32, true);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Liang-Barsky clip of the segment to the panel's pixel rectangle.
    fn clip(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i64, i64, i64, i64)> {
        let (x0, y0) = (x0 as f64, y0 as f64);
        let (dx, dy) = (x1 as f64 - x0, y1 as f64 - y0);
        let (max_x, max_y) = ((self.width() - 1) as f64, (self.height() - 1) as f64);

        let mut enter = 0.0_f64;
        let mut leave = 1.0_f64;
        for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                if t > leave {
                    return None;
                }
                enter = enter.max(t);
            } else {
                if t < enter {
                    return None;
                }
                leave = leave.min(t);
            }
        }

        let at = |t: f64| {
            let x = (x0 + t * dx).round().clamp(0.0, max_x) as i64;
            let y = (y0 + t * dy).round().clamp(0.0, max_y) as i64;
            (x, y)
        };
        let ((cx0, cy0), (cx1, cy1)) = (at(enter), at(leave));
        Some((cx0, cy0, cx1, cy1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_panel() {
        assert_eq!(
            LedPanel::new(0, 1),
            Err(PanelError::NoDevices {
                devices_wide: 0,
                devices_high: 1
            })
        );
    }

    #[test]
    fn rejects_unaddressable_chain() {
        assert!(matches!(
            LedPanel::new(255, 255),
            Err(PanelError::ChainTooLong { devices: 65025, .. })
        ));
        assert!(LedPanel::new(255, 32).is_ok());
    }

    #[test]
    fn geometry() {
        let panel = LedPanel::new(4, 2).unwrap();
        assert_eq!((panel.width(), panel.height()), (32, 16));
        assert_eq!(panel.device_count(), 8);
        assert_eq!(panel.column_count(), 64);
    }

    #[test]
    fn origin_on_single_row() {
        let panel = LedPanel::new(2, 1).unwrap();
        assert_eq!(panel.locate(0, 0), Some(PhysicalPixel { row: 7, col: 15 }));
        assert_eq!(panel.locate(15, 7), Some(PhysicalPixel { row: 0, col: 0 }));
        assert_eq!(panel.locate(16, 0), None);
        assert_eq!(panel.locate(0, -1), None);
    }

    #[test]
    fn logical_inverts_locate() {
        let panel = LedPanel::new(3, 2).unwrap();
        for y in 0..panel.height() {
            for x in 0..panel.width() {
                let pixel = panel.locate(x, y).unwrap();
                assert_eq!(panel.logical(pixel), Some((x, y)));
            }
        }
        assert_eq!(panel.logical(PhysicalPixel { row: 8, col: 0 }), None);
        assert_eq!(panel.logical(PhysicalPixel { row: 0, col: 48 }), None);
    }
}
