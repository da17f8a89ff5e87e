// grid.rs - Cell storage for Conway's Game of Life

use serde::{Deserialize, Serialize};

/// Board dimensions and edge topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    /// Toroidal when true, bounded (dead outside) when false.
    pub wrap: bool,
}

impl Geometry {
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Storage index for a read at `(x, y)`. Wrapping grids normalize the
    /// coordinates first; bounded grids have no cell outside the board.
    pub fn read_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        if self.wrap {
            let x = x.rem_euclid(self.width as i32) as usize;
            let y = y.rem_euclid(self.height as i32) as usize;
            return Some(y * self.width + x);
        }
        self.write_index(x, y)
    }

    /// Storage index for a write. Writes never wrap.
    pub fn write_index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    pub fn cell(&self, cells: &[bool], x: i32, y: i32) -> bool {
        self.read_index(x, y).is_some_and(|i| cells[i])
    }

    /// Live cells among the 8 Moore neighbours of `(x, y)`.
    pub fn count_neighbors(&self, cells: &[bool], x: i32, y: i32) -> u8 {
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.cell(cells, x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Conway's rule (B3/S23).
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Two same-sized row-major buffers. The roles of "current" and "next"
/// are exchanged by flipping an index; contents are never copied.
#[derive(Clone, Debug)]
pub struct DoubleBuffer {
    buffers: [Vec<bool>; 2],
    current: usize,
}

impl DoubleBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            buffers: [vec![false; len], vec![false; len]],
            current: 0,
        }
    }

    pub fn current(&self) -> &[bool] {
        &self.buffers[self.current]
    }

    pub fn current_mut(&mut self) -> &mut [bool] {
        &mut self.buffers[self.current]
    }

    /// Borrow `(current, next)` at the same time.
    pub fn split(&mut self) -> (&[bool], &mut [bool]) {
        let current = self.current;
        let [first, second] = &mut self.buffers;
        if current == 0 {
            (first.as_slice(), second.as_mut_slice())
        } else {
            (second.as_slice(), first.as_mut_slice())
        }
    }

    pub fn swap(&mut self) {
        self.current ^= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_reads_outside_are_dead() {
        let geometry = Geometry { width: 3, height: 3, wrap: false };
        let cells = vec![true; 9];
        assert!(!geometry.cell(&cells, -1, 0));
        assert!(!geometry.cell(&cells, 0, 3));
        assert!(geometry.cell(&cells, 2, 2));
    }

    #[test]
    fn wrapping_reads_normalize() {
        let geometry = Geometry { width: 4, height: 3, wrap: true };
        let mut cells = vec![false; 12];
        cells[2 * 4 + 3] = true;
        assert!(geometry.cell(&cells, -1, -1));
        assert!(geometry.cell(&cells, 7, 5));
        assert_eq!(geometry.write_index(-1, -1), None);
    }

    #[test]
    fn swap_exchanges_roles_without_copying() {
        let mut buffer = DoubleBuffer::new(4);
        {
            let (current, next) = buffer.split();
            assert!(current.iter().all(|c| !c));
            next[1] = true;
        }
        assert!(!buffer.current()[1]);
        buffer.swap();
        assert!(buffer.current()[1]);
        buffer.swap();
        assert!(!buffer.current()[1]);
    }

    #[test]
    fn rule_table() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));
        assert!(!next_state(false, 2));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
    }
}
