//! Probability table shown by `table` and the `?` help key.

use comfy_table::{presets::UTF8_FULL, Table};
use dice_game_core::{DiceSet, ProbabilityMatrix, WinRatio};

fn format_cell(cell: Option<WinRatio>) -> String {
    match cell {
        Some(ratio) => format!("{:.4}", ratio.as_f64()),
        None => "- (n/a)".to_string(),
    }
}

/// Render the win probability of each row die against each column die
pub fn render(dice: &DiceSet, matrix: &ProbabilityMatrix) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["User dice v".to_string()];
    header.extend(dice.dice().iter().map(|d| d.to_string()));
    table.set_header(header);

    for (die, row) in dice.dice().iter().zip(matrix.rows()) {
        let mut cells = vec![die.to_string()];
        cells.extend(row.iter().copied().map(format_cell));
        table.add_row(cells);
    }

    format!(
        "Probability of the win for the user (row) against the computer (column):\n{}",
        table
    )
}
