use crate::game::constants::TICK_MS;
use crate::game::state::GameState;
use crate::game::types::{Direction, PlayerId};
use crate::protocol::{self, ClientCommand, ServerEvent};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use uuid::Uuid;

// One shared board for everyone: two controlled snakes, any number of
// watching sessions.
#[derive(Debug)]
pub struct Arena {
  state: Mutex<ArenaState>,
  ticking: AtomicBool,
}

#[derive(Debug)]
struct ArenaState {
  sessions: HashMap<String, UnboundedSender<String>>,
  game: GameState,
}

impl Arena {
  pub fn new() -> Self {
    Self {
      state: Mutex::new(ArenaState {
        sessions: HashMap::new(),
        game: GameState::new(),
      }),
      ticking: AtomicBool::new(false),
    }
  }

  pub async fn add_session(&self, sender: UnboundedSender<String>) -> String {
    let session_id = Uuid::new_v4().to_string();
    let mut state = self.state.lock().await;
    state.insert_session(session_id.clone(), sender);
    session_id
  }

  pub async fn remove_session(&self, session_id: &str) {
    let mut state = self.state.lock().await;
    state.drop_session(session_id);
  }

  pub async fn handle_text_message(self: &Arc<Self>, text: &str) {
    let Some(command) = protocol::decode_command(text) else { return };
    let mut state = self.state.lock().await;
    match command {
      ClientCommand::StartDetection => state.start_detection(),
      ClientCommand::StopDetection => state.stop_detection(),
      ClientCommand::StartGame => {
        state.start_game();
        drop(state);
        self.ensure_loop();
      }
      ClientCommand::ResetGame => state.reset_game(),
      ClientCommand::UpdateDirection { player, direction } => {
        state.update_direction(player, direction);
      }
    }
  }

  fn ensure_loop(self: &Arc<Self>) {
    if self
      .ticking
      .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
      .is_err()
    {
      return;
    }

    let arena = Arc::clone(self);
    tokio::spawn(async move {
      let period = Duration::from_millis(TICK_MS);
      // The first move lands one full period after start, not immediately.
      let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
      loop {
        interval.tick().await;
        let mut state = arena.state.lock().await;
        if !state.game.running {
          arena.ticking.store(false, Ordering::SeqCst);
          break;
        }
        state.tick();
      }
    });
  }
}

impl ArenaState {
  fn insert_session(&mut self, session_id: String, sender: UnboundedSender<String>) {
    // The newcomer gets a private snapshot, then everyone learns the count.
    if let Some(payload) = protocol::encode_event(&ServerEvent::GameState(self.game.snapshot())) {
      let _ = sender.send(payload);
    }
    tracing::debug!(session_id, "session opened");
    self.sessions.insert(session_id, sender);
    self.broadcast_spectator_count();
  }

  fn drop_session(&mut self, session_id: &str) {
    if self.sessions.remove(session_id).is_none() {
      return;
    }
    tracing::debug!(session_id, "session closed");
    self.broadcast_spectator_count();
  }

  fn start_detection(&mut self) {
    self.game.detection_active = true;
    self.broadcast_state();
  }

  fn stop_detection(&mut self) {
    self.game.detection_active = false;
    self.broadcast_state();
  }

  fn start_game(&mut self) {
    self.game.init();
    self.broadcast_state();
  }

  fn reset_game(&mut self) {
    self.game.reset();
    self.broadcast_state();
  }

  // Heading changes apply silently; the next tick shows them.
  fn update_direction(&mut self, player: u8, direction: Direction) {
    if !self.game.running {
      return;
    }
    let Some(id) = PlayerId::from_wire(player) else { return };
    self.game.set_heading(id, direction);
  }

  fn tick(&mut self) {
    self.game.step();
    self.broadcast_state();
  }

  fn broadcast_state(&mut self) {
    let Some(payload) = protocol::encode_event(&ServerEvent::GameState(self.game.snapshot()))
    else {
      return;
    };
    self.broadcast(payload);
  }

  fn broadcast_spectator_count(&mut self) {
    let count = self.sessions.len();
    let Some(payload) = protocol::encode_event(&ServerEvent::SpectatorCount { count }) else {
      return;
    };
    self.broadcast(payload);
  }

  fn broadcast(&mut self, payload: String) {
    let mut stale = Vec::new();
    for (session_id, sender) in &self.sessions {
      if sender.send(payload.clone()).is_err() {
        stale.push(session_id.clone());
      }
    }
    for session_id in stale {
      self.drop_session(&session_id);
    }
  }
}
