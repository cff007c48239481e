use super::apples;
use super::collision;
use super::constants::{BOARD_EXTENT, CELL_SIZE, INITIAL_SNAKE_LENGTH, TILE_COUNT};
use super::movement;
use super::types::{Direction, GameSnapshot, Player, PlayerId, PlayerPair, Position};

#[derive(Debug, Clone)]
pub struct GameState {
  pub players: [Player; 2],
  pub apples: Vec<Position>,
  pub running: bool,
  pub detection_active: bool,
}

// Player one lines up head-first along the top edge heading right, player two
// mirrors it along the bottom edge heading left.
pub fn spawn_body(id: PlayerId) -> Vec<Position> {
  let len = INITIAL_SNAKE_LENGTH as i32;
  match id {
    PlayerId::One => (0..len)
      .map(|i| Position {
        x: (len - 1 - i) * CELL_SIZE,
        y: 0,
      })
      .collect(),
    PlayerId::Two => (0..len)
      .map(|i| Position {
        x: (TILE_COUNT - len + i) * CELL_SIZE,
        y: BOARD_EXTENT - CELL_SIZE,
      })
      .collect(),
  }
}

impl GameState {
  pub fn new() -> Self {
    Self {
      players: [
        Player {
          body: Vec::new(),
          heading: PlayerId::One.default_heading(),
          score: 0,
        },
        Player {
          body: Vec::new(),
          heading: PlayerId::Two.default_heading(),
          score: 0,
        },
      ],
      apples: Vec::new(),
      running: false,
      detection_active: false,
    }
  }

  pub fn player(&self, id: PlayerId) -> &Player {
    &self.players[id.index()]
  }

  pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
    &mut self.players[id.index()]
  }

  pub fn occupied(&self, position: Position) -> bool {
    self
      .players
      .iter()
      .any(|player| player.body.contains(&position))
      || self.apples.contains(&position)
  }

  pub fn init(&mut self) {
    for id in PlayerId::BOTH {
      self.reset_player(id);
    }
    self.apples.clear();
    apples::ensure_target(self);
    self.running = true;
    tracing::info!("game started");
  }

  // Stops the clock but leaves bodies and scores from the last run in place
  // until the next start.
  pub fn reset(&mut self) {
    self.running = false;
    self.detection_active = false;
    tracing::info!("game reset");
  }

  pub fn set_heading(&mut self, id: PlayerId, direction: Direction) {
    self.player_mut(id).heading = direction;
  }

  pub fn reset_player(&mut self, id: PlayerId) {
    let player = self.player_mut(id);
    player.body = spawn_body(id);
    player.heading = id.default_heading();
    player.score = 0;
  }

  pub fn step(&mut self) {
    apples::ensure_target(self);
    for id in PlayerId::BOTH {
      let Some(new_head) = movement::advance_head(self.player(id)) else {
        continue;
      };
      if collision::resolve_collision(self, id, new_head) {
        continue;
      }
      // The head goes in before the apple check: eating leaves the tail in
      // place for a net +1, otherwise the pop keeps the length constant.
      self.player_mut(id).body.insert(0, new_head);
      if !collision::resolve_apple(self, id, new_head) {
        self.player_mut(id).body.pop();
      }
    }
  }

  pub fn snapshot(&self) -> GameSnapshot {
    GameSnapshot {
      snakes: PlayerPair {
        one: self.player(PlayerId::One).body.clone(),
        two: self.player(PlayerId::Two).body.clone(),
      },
      apples: self.apples.clone(),
      scores: PlayerPair {
        one: self.player(PlayerId::One).score,
        two: self.player(PlayerId::Two).score,
      },
      directions: PlayerPair {
        one: self.player(PlayerId::One).heading,
        two: self.player(PlayerId::Two).heading,
      },
      game_running: self.running,
      detection_running: self.detection_active,
    }
  }
}
