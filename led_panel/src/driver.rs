// driver.rs - Back-end primitives for a chain of 8x8 tiles

use crate::panel::TILE_SIZE;

/// The three primitives a tile-chain display offers. Rows run `0..8`,
/// columns run along the whole chain, 8 per tile.
pub trait MatrixDriver {
    fn set_pixel(&mut self, row: u8, col: u16, on: bool);
    fn clear(&mut self);
    fn invert(&mut self);
}

/// In-memory chain. Each column is one byte, bit `row` set when lit,
/// the way the tiles latch their data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    columns: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(column_count: u16) -> Self {
        Self {
            columns: vec![0; column_count as usize],
        }
    }

    pub fn column_count(&self) -> u16 {
        self.columns.len() as u16
    }

    pub fn is_lit(&self, row: u8, col: u16) -> bool {
        (row as i32) < TILE_SIZE
            && self
                .columns
                .get(col as usize)
                .is_some_and(|bits| bits & (1 << row) != 0)
    }

    pub fn lit_count(&self) -> usize {
        self.columns.iter().map(|bits| bits.count_ones() as usize).sum()
    }

    pub fn column(&self, col: u16) -> u8 {
        self.columns.get(col as usize).copied().unwrap_or(0)
    }
}

impl MatrixDriver for FrameBuffer {
    fn set_pixel(&mut self, row: u8, col: u16, on: bool) {
        if row as i32 >= TILE_SIZE {
            return;
        }
        if let Some(bits) = self.columns.get_mut(col as usize) {
            if on {
                *bits |= 1 << row;
            } else {
                *bits &= !(1 << row);
            }
        }
    }

    fn clear(&mut self) {
        self.columns.fill(0);
    }

    fn invert(&mut self) {
        for bits in &mut self.columns {
            *bits = !*bits;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clear_invert() {
        let mut frame = FrameBuffer::new(16);
        frame.set_pixel(3, 9, true);
        assert!(frame.is_lit(3, 9));
        assert_eq!(frame.column(9), 0b0000_1000);
        assert_eq!(frame.lit_count(), 1);

        frame.invert();
        assert!(!frame.is_lit(3, 9));
        assert_eq!(frame.lit_count(), 16 * 8 - 1);

        frame.clear();
        assert_eq!(frame.lit_count(), 0);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut frame = FrameBuffer::new(8);
        frame.set_pixel(8, 0, true);
        frame.set_pixel(0, 8, true);
        assert_eq!(frame.lit_count(), 0);
        assert!(!frame.is_lit(0, 8));
    }
}
