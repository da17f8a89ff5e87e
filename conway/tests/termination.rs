use conway::{FinishReason, GameOfLife, GameStatus, HISTORY_CAPACITY};

fn live_set(life: &GameOfLife) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for y in 0..life.get_height() as i32 {
        for x in 0..life.get_width() as i32 {
            if life.get_cell(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn blinker_flips_and_is_caught_by_hash() {
    let mut life = GameOfLife::with_seed(5, 5, false, 180, 0);
    life.create_blinker(1, 2);
    assert_eq!(live_set(&life), vec![(1, 2), (2, 2), (3, 2)]);

    assert_eq!(life.evaluate(), GameStatus::Running);
    life.compute_next_generation();
    assert_eq!(live_set(&life), vec![(2, 1), (2, 2), (2, 3)]);

    assert_eq!(life.evaluate(), GameStatus::Running);
    life.compute_next_generation();
    assert_eq!(live_set(&life), vec![(1, 2), (2, 2), (3, 2)]);

    assert_eq!(life.evaluate(), GameStatus::Finished(FinishReason::Oscillating));
    assert_eq!(life.history_len(), 0);
    assert_eq!(life.get_generation_count(), 2);
}

#[test]
fn block_is_static_before_any_step() {
    let mut life = GameOfLife::with_seed(6, 6, false, 180, 0);
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        life.set_cell(x, y, true);
    }
    assert!(life.is_game_finished());
    assert_eq!(life.get_generation_count(), 0);
    assert_eq!(life.history_len(), 0);

    life.clear_history();
    assert_eq!(life.history_len(), 0);
}

#[test]
fn empty_board_is_static() {
    let mut life = GameOfLife::with_seed(8, 8, true, 180, 0);
    assert_eq!(life.evaluate(), GameStatus::Finished(FinishReason::Static));
}

#[test]
fn generation_limit_wins_and_leaves_history_alone() {
    let mut life = GameOfLife::with_seed(8, 8, false, 1, 0);
    life.create_glider(0, 0);
    assert_eq!(life.evaluate(), GameStatus::Running);
    assert_eq!(life.history_len(), 1);

    life.compute_next_generation();
    assert_eq!(life.evaluate(), GameStatus::Finished(FinishReason::GenerationLimit));
    assert_eq!(life.history_len(), 1);

    life.reset_generations();
    assert_eq!(life.get_generation_count(), 0);
}

#[test]
fn zero_generation_cap_finishes_immediately() {
    let mut life = GameOfLife::with_seed(8, 8, false, 0, 0);
    life.create_blinker(2, 2);
    assert!(life.is_game_finished());
    assert_eq!(life.history_len(), 0);
}

#[test]
fn identical_boards_hash_equal_and_one_flip_differs() {
    let mut a = GameOfLife::with_seed(32, 8, true, 180, 1);
    let mut b = GameOfLife::with_seed(32, 8, false, 180, 2);
    a.create_glider_gun(0, 0);
    b.create_glider_gun(0, 0);
    assert_eq!(a.calculate_board_hash(), b.calculate_board_hash());

    b.set_cell(31, 7, true);
    assert_ne!(a.calculate_board_hash(), b.calculate_board_hash());
}

#[test]
fn glider_travels_on_torus() {
    let mut life = GameOfLife::with_seed(8, 8, true, 180, 0);
    life.create_glider(0, 0);
    let start = life.calculate_board_hash();
    // A glider returns to its shape shifted by (1, 1) every 4 generations;
    // 32 generations bring it back to the start on an 8x8 torus.
    for _ in 0..32 {
        life.compute_next_generation();
        assert_eq!(life.live_cells(), 5);
    }
    assert_eq!(life.calculate_board_hash(), start);
}

#[test]
fn history_window_is_bounded() {
    let mut life = GameOfLife::with_seed(16, 16, true, 1000, 0);
    life.create_glider(0, 0);
    for _ in 0..HISTORY_CAPACITY + 5 {
        assert_eq!(life.evaluate(), GameStatus::Running);
        life.compute_next_generation();
    }
    assert_eq!(life.history_len(), HISTORY_CAPACITY);
}

#[test]
fn patterns_clip_at_edges() {
    let mut life = GameOfLife::with_seed(16, 8, false, 180, 0);
    life.create_glider_gun(0, 0);
    // Only the left square and part of the left body fit on 16x8.
    assert_eq!(life.live_cells(), 4 + 7);

    let mut life = GameOfLife::with_seed(32, 8, false, 180, 0);
    life.create_pulsar(2, 0);
    assert_eq!(life.live_cells(), 24);
    assert!(life.get_cell(4, 0));
    assert!(life.get_cell(14, 4));
}
