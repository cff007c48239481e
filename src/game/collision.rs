use super::apples;
use super::constants::APPLE_REWARD;
use super::state::GameState;
use super::types::{PlayerId, Position};

// Checks the prospective head cell and, on a hit, sends the snake back to
// spawn. Returns true when the move was consumed by a collision.
pub fn resolve_collision(state: &mut GameState, id: PlayerId, new_head: Position) -> bool {
  if !hits_own_body(state, id, new_head) && !hits_opponent(state, id, new_head) {
    return false;
  }
  tracing::debug!(player = id.as_wire(), "snake collided, back to spawn");
  state.reset_player(id);
  true
}

// The current head cell is exempt, everything from the neck back counts.
fn hits_own_body(state: &GameState, id: PlayerId, new_head: Position) -> bool {
  state
    .player(id)
    .body
    .iter()
    .skip(1)
    .any(|&cell| cell == new_head)
}

fn hits_opponent(state: &GameState, id: PlayerId, new_head: Position) -> bool {
  state.player(id.other()).body.contains(&new_head)
}

// Consumes an apple under the new head if there is one: score, removal and a
// replacement spawn in one go. Returns true when an apple was eaten.
pub fn resolve_apple(state: &mut GameState, id: PlayerId, new_head: Position) -> bool {
  let Some(index) = state.apples.iter().position(|&apple| apple == new_head) else {
    return false;
  };
  state.apples.remove(index);
  state.player_mut(id).score += APPLE_REWARD;
  if apples::place_one(state).is_none() {
    tracing::warn!("board full, apple respawn deferred");
  }
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::state::spawn_body;
  use crate::game::types::Direction;

  fn state_with_bodies() -> GameState {
    let mut state = GameState::new();
    for id in PlayerId::BOTH {
      state.reset_player(id);
    }
    state
  }

  #[test]
  fn a_clear_cell_is_no_collision() {
    let mut state = state_with_bodies();
    state.player_mut(PlayerId::One).score = 25;
    let collided = resolve_collision(&mut state, PlayerId::One, Position { x: 80, y: 0 });
    assert!(!collided);
    assert_eq!(state.player(PlayerId::One).score, 25);
    assert_eq!(state.player(PlayerId::One).body, spawn_body(PlayerId::One));
  }

  #[test]
  fn own_head_cell_is_exempt_but_the_neck_is_not() {
    let mut state = state_with_bodies();
    let head = state.player(PlayerId::One).body[0];
    assert!(!resolve_collision(&mut state, PlayerId::One, head));

    let neck = state.player(PlayerId::One).body[1];
    assert!(resolve_collision(&mut state, PlayerId::One, neck));
    assert_eq!(state.player(PlayerId::One).body, spawn_body(PlayerId::One));
  }

  #[test]
  fn any_opponent_cell_collides_head_included() {
    let mut state = state_with_bodies();
    let opponent_head = state.player(PlayerId::Two).body[0];
    let collided = resolve_collision(&mut state, PlayerId::One, opponent_head);
    assert!(collided);
    assert_eq!(state.player(PlayerId::One).body, spawn_body(PlayerId::One));
    assert_eq!(state.player(PlayerId::Two).body, spawn_body(PlayerId::Two));
  }

  #[test]
  fn collision_reset_restores_spawn_heading_and_score() {
    let mut state = state_with_bodies();
    let player = state.player_mut(PlayerId::One);
    player.body = vec![Position { x: 100, y: 100 }, Position { x: 120, y: 100 }];
    player.heading = Direction::Up;
    player.score = 90;
    let collided = resolve_collision(&mut state, PlayerId::One, Position { x: 120, y: 100 });
    assert!(collided);
    let player = state.player(PlayerId::One);
    assert_eq!(player.body, spawn_body(PlayerId::One));
    assert_eq!(player.heading, Direction::Right);
    assert_eq!(player.score, 0);
  }

  #[test]
  fn eating_scores_removes_and_replaces() {
    let mut state = state_with_bodies();
    state.apples = vec![Position { x: 220, y: 220 }, Position { x: 240, y: 240 }];
    let ate = resolve_apple(&mut state, PlayerId::One, Position { x: 220, y: 220 });
    assert!(ate);
    assert_eq!(state.player(PlayerId::One).score, APPLE_REWARD);
    assert_eq!(state.apples.len(), 2);
    assert!(!state.apples.contains(&Position { x: 220, y: 220 }));
    assert!(state.apples.contains(&Position { x: 240, y: 240 }));
    for apple in &state.apples {
      for id in PlayerId::BOTH {
        assert!(!state.player(id).body.contains(apple));
      }
    }
  }

  #[test]
  fn a_missed_apple_changes_nothing() {
    let mut state = state_with_bodies();
    state.apples = vec![Position { x: 220, y: 220 }];
    let ate = resolve_apple(&mut state, PlayerId::One, Position { x: 80, y: 0 });
    assert!(!ate);
    assert_eq!(state.player(PlayerId::One).score, 0);
    assert_eq!(state.apples, vec![Position { x: 220, y: 220 }]);
  }
}
