use crate::game::types::{Direction, GameSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientCommand {
  #[serde(rename = "start-detection")]
  StartDetection,
  #[serde(rename = "stop-detection")]
  StopDetection,
  #[serde(rename = "start-game")]
  StartGame,
  #[serde(rename = "reset-game")]
  ResetGame,
  #[serde(rename = "update-direction")]
  UpdateDirection { player: u8, direction: Direction },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
  #[serde(rename = "game-state")]
  GameState(GameSnapshot),
  #[serde(rename = "spectator-count")]
  SpectatorCount { count: usize },
}

pub fn decode_command(text: &str) -> Option<ClientCommand> {
  serde_json::from_str(text).ok()
}

pub fn encode_event(event: &ServerEvent) -> Option<String> {
  serde_json::to_string(event).ok()
}
