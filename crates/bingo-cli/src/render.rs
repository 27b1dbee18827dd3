//! Terminal rendering for boards and snapshots.

use bingo_core::{BoardSnapshot, CellSnapshot, SessionSnapshot};
use owo_colors::OwoColorize;

const CELL_WIDTH: usize = 18;

fn format_cell(cell: &CellSnapshot) -> String {
    let name: String = cell.objective.chars().take(CELL_WIDTH - 6).collect();
    let label = format!("{} [{}]", name, cell.weapon_bonus);
    let padded = format!("{:<width$}", label, width = CELL_WIDTH);
    if cell.is_complete {
        padded.green().to_string()
    } else {
        padded
    }
}

pub fn format_board(board: &BoardSnapshot) -> String {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(format_cell)
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_snapshot(snapshot: &SessionSnapshot) -> String {
    let state = if snapshot.running {
        "RUNNING".green().to_string()
    } else {
        "IDLE".yellow().to_string()
    };

    let mut lines = vec![
        format!(
            "State: {}  Difficulty: {}  Boosts: {}{}",
            state,
            snapshot.difficulty,
            snapshot.boosts,
            if snapshot.extra_boost { " +extra" } else { "" }
        ),
        format!(
            "Points: {}  Start: {}  Reroll: {}  Cart: {}  Carts: {}",
            snapshot.balance,
            snapshot.start_cost,
            snapshot.reroll_cost,
            snapshot.carts_cost,
            snapshot.carts
        ),
    ];
    if !snapshot.run_ids.is_empty() {
        lines.push(format!("Runs: {:?}", snapshot.run_ids));
    }
    if let Some(board) = &snapshot.board {
        lines.push(format_board(board));
    }
    lines.join("\n")
}
