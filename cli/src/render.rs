use gem_rush_core::{CellView, GameState};
use std::io::{self, Write};

pub fn draw(out: &mut impl Write, state: &GameState, columns: u16) -> io::Result<()> {
    let columns = usize::from(columns.max(1));
    let width = state.blocks().len().saturating_sub(1).to_string().len();

    writeln!(out)?;
    writeln!(
        out,
        "Score {}   Stake ${:.2}{}",
        state.score(),
        state.stake(),
        if state.is_stake_locked() { " (locked)" } else { "" }
    )?;
    writeln!(out, "Potential Win ${:.2}", state.potential_payout())?;
    writeln!(
        out,
        "Odds {:.1}%   Multiplier {:.2}x",
        state.current_odds() * 100.0,
        state.multiplier()
    )?;
    writeln!(out)?;

    for (row, cells) in state.cells().collect::<Vec<_>>().chunks(columns).enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &cell)| block(row * columns + col, cell, width))
            .collect();
        writeln!(out, "  {}", line.join(" "))?;
    }

    if state.is_game_over() {
        writeln!(out)?;
        writeln!(out, "Game Over!")?;
    }
    out.flush()
}

fn block(index: usize, cell: CellView, width: usize) -> String {
    match cell {
        CellView::Hidden => format!("[{index:>width$}]"),
        CellView::Gem => format!("[{:>width$}]", "*"),
        CellView::Ruby => format!("[{:>width$}]", "x"),
    }
}
