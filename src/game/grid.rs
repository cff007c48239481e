use super::constants::{BOARD_EXTENT, CELL_SIZE, TILE_COUNT};
use super::types::Position;

// Heads only ever step one cell past an edge, so wrapping is an edge swap
// rather than a modulo.
pub fn wrap(coordinate: i32) -> i32 {
  if coordinate >= BOARD_EXTENT {
    0
  } else if coordinate < 0 {
    BOARD_EXTENT - CELL_SIZE
  } else {
    coordinate
  }
}

pub fn cells() -> impl Iterator<Item = Position> {
  (0..TILE_COUNT).flat_map(|row| {
    (0..TILE_COUNT).map(move |col| Position {
      x: col * CELL_SIZE,
      y: row * CELL_SIZE,
    })
  })
}
