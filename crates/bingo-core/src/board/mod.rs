//! Bingo board: grid storage, generation and win detection.

mod cell;
mod generator;
mod grid;
mod win;

pub use cell::{BingoCell, CellSnapshot};
pub use generator::{BoardGenerator, generate_board, reroll_weapon_bonuses};
pub use grid::Grid;
pub use win::check_win;

/// A bingo board
pub type Board = Grid<BingoCell>;

/// Render-ready copy of a board
pub type BoardSnapshot = Grid<CellSnapshot>;

/// Apply a quest completion to every matching cell.
///
/// Returns how many cells matched. One quest can satisfy several cells.
pub fn apply_quest(board: &mut Board, quest_id: u32) -> usize {
    board
        .iter_mut()
        .map(|cell| cell.apply_quest(quest_id))
        .filter(|matched| *matched)
        .count()
}

pub fn snapshot(board: &Board) -> BoardSnapshot {
    board.map(BingoCell::snapshot)
}

/// Number of completed cells
pub fn completed_count(board: &Board) -> usize {
    board.iter().filter(|c| c.is_complete).count()
}
