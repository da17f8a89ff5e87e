//! Conway's Game of Life on a fixed-size board, with termination detection.
//!
//! A game is over when it reaches its generation cap, when the next
//! generation would equal the current one, or when the board's fingerprint
//! repeats one of the last [`HISTORY_CAPACITY`] evaluated boards.
//!
//! The fingerprint is a 32-bit djb2 hash. Two different boards can share a
//! fingerprint, in which case a board is reported as oscillating when it is
//! not. This is a known limitation of the detector.

mod error;
pub mod grid;
pub mod history;
pub mod patterns;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub use error::LifeError;
pub use grid::{DoubleBuffer, Geometry};
pub use history::{BoundedHistory, HISTORY_CAPACITY};
pub use patterns::{Pattern, BLINKER, GLIDER, GLIDER_GUN, PATTERNS, PULSAR};

/// Generation cap used by the panel show.
pub const DEFAULT_MAX_GENERATIONS: u32 = 180;

const HASH_SEED: u32 = 5381;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    GenerationLimit,
    Static,
    Oscillating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Finished(FinishReason),
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

/// Read access to a board, as consumed by renderers.
pub trait CellView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn cell(&self, x: i32, y: i32) -> bool;
}

pub struct GameOfLife {
    geometry: Geometry,
    cells: DoubleBuffer,
    history: BoundedHistory,
    generation_count: u32,
    max_generations: u32,
    rng: SmallRng,
}

impl GameOfLife {
    /// Both sides must be at most `i32::MAX`; use [`GameOfLife::try_new`] to
    /// check untrusted sizes.
    pub fn new(width: usize, height: usize, wrap: bool, max_generations: u32) -> Self {
        Self::with_rng(width, height, wrap, max_generations, SmallRng::from_entropy())
    }

    /// Same as [`GameOfLife::new`] with a reproducible random source.
    pub fn with_seed(width: usize, height: usize, wrap: bool, max_generations: u32, seed: u64) -> Self {
        Self::with_rng(width, height, wrap, max_generations, SmallRng::seed_from_u64(seed))
    }

    /// Like [`GameOfLife::new`], rejecting a board with no cells or with a
    /// side that cell coordinates (`i32`) cannot address.
    pub fn try_new(width: usize, height: usize, wrap: bool, max_generations: u32) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyGrid { width, height });
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(LifeError::TooLarge { width, height });
        }
        Ok(Self::new(width, height, wrap, max_generations))
    }

    fn with_rng(width: usize, height: usize, wrap: bool, max_generations: u32, rng: SmallRng) -> Self {
        let geometry = Geometry { width, height, wrap };
        Self {
            geometry,
            cells: DoubleBuffer::new(geometry.len()),
            history: BoundedHistory::default(),
            generation_count: 0,
            max_generations,
            rng,
        }
    }

    pub fn get_width(&self) -> usize {
        self.geometry.width
    }

    pub fn get_height(&self) -> usize {
        self.geometry.height
    }

    pub fn wraps(&self) -> bool {
        self.geometry.wrap
    }

    pub fn max_generations(&self) -> u32 {
        self.max_generations
    }

    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.geometry.cell(self.cells.current(), x, y)
    }

    /// Writes outside the board are dropped, even on a wrapping board.
    pub fn set_cell(&mut self, x: i32, y: i32, state: bool) {
        if let Some(i) = self.geometry.write_index(x, y) {
            self.cells.current_mut()[i] = state;
        }
    }

    pub fn live_cells(&self) -> usize {
        self.cells.current().iter().filter(|&&c| c).count()
    }

    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in self.cells.current_mut() {
            *cell = rng.gen_bool(0.5);
        }
    }

    pub fn clear(&mut self) {
        self.cells.current_mut().fill(false);
    }

    pub fn compute_next_generation(&mut self) {
        let geometry = self.geometry;
        let (current, next) = self.cells.split();
        for y in 0..geometry.height as i32 {
            for x in 0..geometry.width as i32 {
                let neighbors = geometry.count_neighbors(current, x, y);
                let alive = geometry.cell(current, x, y);
                next[y as usize * geometry.width + x as usize] = grid::next_state(alive, neighbors);
            }
        }
        self.cells.swap();
        self.generation_count += 1;
    }

    /// Classify the board without advancing it. Only the oscillation
    /// check records history; a finish by stability or repetition clears it.
    pub fn evaluate(&mut self) -> GameStatus {
        if self.generation_count >= self.max_generations {
            debug!(generation = self.generation_count, "generation limit reached");
            return GameStatus::Finished(FinishReason::GenerationLimit);
        }

        if self.is_static() {
            self.clear_history();
            debug!(generation = self.generation_count, "board is static");
            return GameStatus::Finished(FinishReason::Static);
        }

        let hash = self.calculate_board_hash();
        if self.history.contains(hash) {
            self.clear_history();
            debug!(generation = self.generation_count, hash, "oscillation detected");
            return GameStatus::Finished(FinishReason::Oscillating);
        }

        self.history.push(hash);
        GameStatus::Running
    }

    pub fn is_game_finished(&mut self) -> bool {
        self.evaluate().is_finished()
    }

    fn is_static(&self) -> bool {
        let geometry = self.geometry;
        let current = self.cells.current();
        (0..geometry.height as i32).all(|y| {
            (0..geometry.width as i32).all(|x| {
                let alive = geometry.cell(current, x, y);
                grid::next_state(alive, geometry.count_neighbors(current, x, y)) == alive
            })
        })
    }

    /// djb2 over the cells in row-major order.
    pub fn calculate_board_hash(&self) -> u32 {
        self.cells
            .current()
            .iter()
            .fold(HASH_SEED, |hash, &cell| hash.wrapping_mul(33).wrapping_add(cell as u32))
    }

    pub fn reset_generations(&mut self) {
        self.generation_count = 0;
    }

    pub fn get_generation_count(&self) -> u32 {
        self.generation_count
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Set every cell of `pattern` live, offset by `(start_x, start_y)`.
    /// Cells that land off the board are dropped; nothing is cleared.
    pub fn place_pattern(&mut self, pattern: &Pattern, start_x: i32, start_y: i32) {
        for &(dx, dy) in pattern.cells {
            self.set_cell(start_x + dx, start_y + dy, true);
        }
    }

    pub fn create_glider(&mut self, start_x: i32, start_y: i32) {
        self.place_pattern(&GLIDER, start_x, start_y);
    }

    pub fn create_blinker(&mut self, start_x: i32, start_y: i32) {
        self.place_pattern(&BLINKER, start_x, start_y);
    }

    pub fn create_pulsar(&mut self, start_x: i32, start_y: i32) {
        self.place_pattern(&PULSAR, start_x, start_y);
    }

    pub fn create_glider_gun(&mut self, start_x: i32, start_y: i32) {
        self.place_pattern(&GLIDER_GUN, start_x, start_y);
    }
}

impl CellView for GameOfLife {
    fn width(&self) -> usize {
        self.get_width()
    }

    fn height(&self) -> usize {
        self.get_height()
    }

    fn cell(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_rejected() {
        assert_eq!(
            GameOfLife::try_new(0, 4, true, 10).err(),
            Some(LifeError::EmptyGrid { width: 0, height: 4 })
        );
        assert!(GameOfLife::try_new(1, 1, true, 10).is_ok());
    }

    #[test]
    fn oversized_grid_rejected_before_allocating() {
        let side = i32::MAX as usize + 1;
        assert_eq!(
            GameOfLife::try_new(side, 1, false, 10).err(),
            Some(LifeError::TooLarge { width: side, height: 1 })
        );
        assert_eq!(
            GameOfLife::try_new(1, side, true, 10).err(),
            Some(LifeError::TooLarge { width: 1, height: side })
        );
    }

    #[test]
    fn empty_board_hash_is_seed_multiplied() {
        let life = GameOfLife::with_seed(1, 1, false, 10, 0);
        assert_eq!(life.calculate_board_hash(), 5381 * 33);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut life = GameOfLife::with_seed(4, 4, true, 10, 0);
        life.set_cell(-1, 0, true);
        life.set_cell(4, 0, true);
        life.set_cell(0, 4, true);
        assert_eq!(life.live_cells(), 0);
    }

    #[test]
    fn seeded_randomize_is_reproducible() {
        let mut a = GameOfLife::with_seed(16, 8, true, 10, 42);
        let mut b = GameOfLife::with_seed(16, 8, true, 10, 42);
        a.randomize();
        b.randomize();
        assert_eq!(a.calculate_board_hash(), b.calculate_board_hash());
        assert!(a.live_cells() > 0 && a.live_cells() < 128);
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut life = GameOfLife::with_seed(8, 8, true, 10, 1);
        life.randomize();
        life.clear();
        assert_eq!(life.live_cells(), 0);
    }
}
