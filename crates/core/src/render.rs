//! Debug dump of a grid
//!
//! Layout, one line each:
//!
//! ```text
//! 0 , 1 , 2 ,
//! -1, -1, -1,
//! -1, 3 , -1,
//! Game Over: false, Paused: false
//! ```
//!
//! The first line holds the column indices, then one line per row starting at `y = 0`.
//! Every entry is fitted to exactly [`DEBUG_CELL_WIDTH`] characters (space padded on the
//! right, truncated when longer) followed by a comma, and entries are separated by a single
//! space.

use std::fmt;
use std::hash::Hash;

use crate::grid::GridModel;
use crate::types::DEBUG_CELL_WIDTH;

fn write_row<I, T>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    let row: Vec<String> = entries
        .into_iter()
        .map(|entry| {
            format!(
                "{:<width$.width$},",
                entry.to_string(),
                width = DEBUG_CELL_WIDTH
            )
        })
        .collect();
    writeln!(f, "{}", row.join(" "))
}

impl<S> fmt::Display for GridModel<S>
where
    S: Clone + Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, 0..self.width())?;
        for y in 0..self.height() {
            write_row(f, (0..self.width()).map(|x| self.state_at_xy(x, y)))?;
        }
        writeln!(
            f,
            "Game Over: {}, Paused: {}",
            self.is_over(),
            self.is_paused()
        )
    }
}
