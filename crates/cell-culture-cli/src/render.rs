//! ANSI terminal rendering of a population.

use std::fmt::Write as _;

use cell_culture_automaton::Population;
use cell_culture_core::{CellColor, Census};

/// Clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const RESET: &str = "\x1b[0m";

/// Foreground SGR code of a cell color.
pub fn ansi_code(color: CellColor) -> u8 {
    match color {
        CellColor::Living => 37,
        CellColor::Dead => 30,
        CellColor::Old => 36,
        CellColor::Elder => 35,
    }
}

/// Header, one line per interior row, and a census footer.
pub fn render_board(population: &Population) -> String {
    let grid = population.grid();
    let mut out = String::with_capacity(grid.len() * 10 + 128);

    let _ = writeln!(
        out,
        "generation {} | even: {} | odd: {}",
        population.generation(),
        population.even_rule().name(),
        population.odd_rule().name()
    );

    for row in grid.interior_rows() {
        for cell in row {
            let _ = write!(out, "\x1b[{}m{}{RESET}", ansi_code(cell.color()), cell.value());
        }
        out.push('\n');
    }

    out.push_str(&census_line(&population.census()));
    out.push('\n');
    out
}

pub fn census_line(census: &Census) -> String {
    format!(
        "alive {} | dead {} | old {} | elder {}",
        census.alive, census.dead, census.old, census.elder
    )
}
