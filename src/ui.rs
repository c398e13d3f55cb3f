//! Text rendering of the board for the command-line front end.

use crate::common::Mark;

fn cell_str(cell: Option<Mark>) -> &'static str {
    match cell {
        Some(Mark::Nought) => "O",
        Some(Mark::Cross) => "X",
        None => " ",
    }
}

/// Render the 3x3 grid with row/column indices for move entry.
pub fn render_board(cells: &[[Option<Mark>; 3]; 3]) -> String {
    let mut out = String::from("    0   1   2\n");
    for (r, row) in cells.iter().enumerate() {
        if r > 0 {
            out.push_str("   ---+---+---\n");
        }
        out.push_str(&format!(
            "{}   {} | {} | {}\n",
            r,
            cell_str(row[0]),
            cell_str(row[1]),
            cell_str(row[2])
        ));
    }
    out
}
