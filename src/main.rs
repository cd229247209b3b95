//! Grid demo runner (default binary).
//!
//! Builds a grid (from a JSON `GridConfig<i32>` when a path is given as the first argument),
//! drops a few random tetrominoes into it, rotating each once, and prints the debug dump.

use std::fs;

use anyhow::{Context, Result};

use gridstate::core::{GridConfig, GridModel, TetrominoGeometry};
use gridstate::types::Coordinate;

/// Pieces dropped by the demo
const DEMO_PIECES: usize = 4;

/// Cell state written for a placed piece
const PIECE_STATE: i32 = 1;

fn load_config(path: Option<String>) -> Result<GridConfig<i32>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading grid config {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("parsing grid config {}", path))
        }
        None => Ok(GridConfig::new(0, -1).with_size(10, 12)),
    }
}

/// Slide the piece down from the top of its column until it would collide.
fn drop_piece(grid: &GridModel<i32>, piece: TetrominoGeometry) -> Option<TetrominoGeometry> {
    let mut placed = None;
    let mut candidate = piece;
    while grid.can_place(candidate.cells().iter().copied()) {
        placed = Some(candidate);
        candidate.translate(Coordinate::new(0, 1));
    }
    placed
}

fn main() -> Result<()> {
    let config = load_config(std::env::args().nth(1))?;
    let mut grid = GridModel::from_config(config);
    let mut rng = rand::thread_rng();

    for n in 0..DEMO_PIECES {
        let mut piece = TetrominoGeometry::random(&mut rng);
        piece.rotate_clockwise();
        let column = (n as i32 * 3) % (grid.width() - 3).max(1);
        let piece = piece.translated(Coordinate::new(column, 0));

        match drop_piece(&grid, piece) {
            Some(landed) => {
                grid.set_states_at(landed.cells().iter().copied(), PIECE_STATE);
                let (columns, rows) = landed.columns_and_rows();
                println!(
                    "placed {} at {} (orientation {}, {}x{})",
                    landed.shape().as_str(),
                    landed.origin(),
                    landed.orientation(),
                    columns,
                    rows
                );
            }
            None => {
                eprintln!("[Demo] no room for {} in column {}", piece.shape().as_str(), column);
                grid.set_over(true);
                break;
            }
        }
        grid.tick(16);
    }

    print!("{}", grid);
    println!("elapsed: {}ms", grid.elapsed_ms());
    Ok(())
}
