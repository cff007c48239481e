use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
  pub x: i32,
  pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
  One,
  Two,
}

impl PlayerId {
  pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

  pub fn index(self) -> usize {
    match self {
      PlayerId::One => 0,
      PlayerId::Two => 1,
    }
  }

  pub fn other(self) -> PlayerId {
    match self {
      PlayerId::One => PlayerId::Two,
      PlayerId::Two => PlayerId::One,
    }
  }

  pub fn from_wire(value: u8) -> Option<PlayerId> {
    match value {
      1 => Some(PlayerId::One),
      2 => Some(PlayerId::Two),
      _ => None,
    }
  }

  pub fn as_wire(self) -> u8 {
    match self {
      PlayerId::One => 1,
      PlayerId::Two => 2,
    }
  }

  pub fn default_heading(self) -> Direction {
    match self {
      PlayerId::One => Direction::Right,
      PlayerId::Two => Direction::Left,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Player {
  pub body: Vec<Position>,
  pub heading: Direction,
  pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerPair<T> {
  #[serde(rename = "1")]
  pub one: T,
  #[serde(rename = "2")]
  pub two: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
  pub snakes: PlayerPair<Vec<Position>>,
  pub apples: Vec<Position>,
  pub scores: PlayerPair<u32>,
  pub directions: PlayerPair<Direction>,
  #[serde(rename = "gameRunning")]
  pub game_running: bool,
  #[serde(rename = "detectionRunning")]
  pub detection_running: bool,
}
