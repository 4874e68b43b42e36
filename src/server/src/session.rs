// Copyright © Ares 2021-present

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//    https://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-game session containers.
//!
//! A session owns the authoritative game state behind a mutex and the set
//! of connected client channels. All mutations run under [GameSession::
//! with_game]; when the handler marked state for broadcast, the state frame
//! is fanned out *after* the mutex is released, so transport I/O never
//! happens inside the domain.

use std::sync::Arc;

use core_data::game_primitives::{GameId, PlayerId};
use dashmap::DashMap;
use errors::{ErrorCode, GameError, Result};
use game_data::game_state::{GameSettings, GameState};
use parking_lot::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::views;

#[derive(Debug)]
pub struct GameSession {
    game: Mutex<GameState>,
    clients: DashMap<PlayerId, UnboundedSender<String>>,
}

impl GameSession {
    pub fn new(game: GameState) -> Self {
        Self { game: Mutex::new(game), clients: DashMap::new() }
    }

    /// Runs a closure against the game under the session mutex. If the
    /// closure marked state for broadcast, every connected client receives
    /// one state frame after the mutex is released — a single logical state
    /// transition per handler.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut GameState) -> Result<T>) -> Result<T> {
        let (result, frame) = {
            let mut game = self.game.lock();
            let result = f(&mut game);
            let frame = if game.event_bus.pending_broadcast {
                game.event_bus.pending_broadcast = false;
                Some(views::state_frame(&game))
            } else {
                None
            };
            (result, frame)
        };

        if let Some(frame) = frame {
            self.broadcast(&frame);
        }
        result
    }

    /// Registers a client channel for a player and re-sends the current
    /// state to just that client (reconnection contract).
    pub fn register_client(&self, player_id: PlayerId, sender: UnboundedSender<String>) {
        self.clients.insert(player_id, sender);
        let frame = {
            let game = self.game.lock();
            views::state_frame(&game)
        };
        self.send_to(player_id, &frame);
    }

    pub fn remove_client(&self, player_id: PlayerId) {
        self.clients.remove(&player_id);
    }

    /// Sends a frame to one connected client. Send failures are logged and
    /// swallowed; the authoritative state is correct and the client will
    /// reconcile on its next broadcast or reconnection.
    pub fn send_to(&self, player_id: PlayerId, frame: &str) {
        if let Some(channel) = self.clients.get(&player_id) {
            if channel.send(frame.to_string()).is_err() {
                info!(?player_id, "Client is disconnected");
            }
        }
    }

    pub fn broadcast(&self, frame: &str) {
        for entry in self.clients.iter() {
            if entry.value().send(frame.to_string()).is_err() {
                info!(player_id = ?entry.key(), "Client is disconnected");
            }
        }
    }
}

/// All live sessions in this process. One process owns a game for its whole
/// lifetime; there is no cross-process replication.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<GameId, Arc<GameSession>>,
}

impl SessionStore {
    /// Creates a game and wraps it in a session.
    pub fn create(&self, settings: Option<GameSettings>) -> (GameId, Arc<GameSession>) {
        let game = actions::lifecycle::create_game(settings);
        let game_id = game.id;
        let session = Arc::new(GameSession::new(game));
        self.sessions.insert(game_id, session.clone());
        debug!(%game_id, "Session created");
        (game_id, session)
    }

    pub fn get(&self, game_id: GameId) -> Result<Arc<GameSession>> {
        match self.sessions.get(&game_id) {
            Some(session) => Ok(session.clone()),
            None => Err(GameError::new(
                ErrorCode::NotFound,
                format!("Game {game_id} does not exist"),
            )),
        }
    }
}
