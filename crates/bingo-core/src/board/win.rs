use crate::board::Board;

/// Whether any full row, full column or either diagonal is complete.
///
/// An empty board never wins.
pub fn check_win(board: &Board) -> bool {
    let (width, height) = (board.width(), board.height());
    if width == 0 || height == 0 {
        return false;
    }

    let complete = |row: usize, col: usize| board.get(row, col).is_some_and(|c| c.is_complete);

    if (0..height).any(|r| (0..width).all(|c| complete(r, c))) {
        return true;
    }
    if (0..width).any(|c| (0..height).all(|r| complete(r, c))) {
        return true;
    }
    if !board.is_square() {
        return false;
    }

    let size = width;
    (0..size).all(|i| complete(i, i)) || (0..size).all(|i| complete(i, size - 1 - i))
}
