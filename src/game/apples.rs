use super::constants::{CELL_SIZE, INITIAL_APPLE_COUNT, MAX_PLACE_ATTEMPTS, TILE_COUNT};
use super::grid;
use super::state::GameState;
use super::types::Position;
use rand::Rng;

// Places one apple on a free cell, or returns None on a full board.
pub fn place_one(state: &mut GameState) -> Option<Position> {
  let mut rng = rand::thread_rng();
  for _ in 0..MAX_PLACE_ATTEMPTS {
    let candidate = Position {
      x: rng.gen_range(0..TILE_COUNT) * CELL_SIZE,
      y: rng.gen_range(0..TILE_COUNT) * CELL_SIZE,
    };
    if !state.occupied(candidate) {
      state.apples.push(candidate);
      return Some(candidate);
    }
  }
  // Sampling came up empty on a crowded board; scan for the first free cell.
  let fallback = grid::cells().find(|&cell| !state.occupied(cell));
  if let Some(cell) = fallback {
    state.apples.push(cell);
  }
  fallback
}

pub fn ensure_target(state: &mut GameState) {
  while state.apples.len() < INITIAL_APPLE_COUNT {
    if place_one(state).is_none() {
      break;
    }
  }
}
