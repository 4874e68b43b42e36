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

//! Game lifecycle: creation, joining (idempotent, with reconnection), and
//! the host-only start.

use core_data::game_primitives::{GameId, GameStatus, PlayerId};
use dispatcher::publish;
use errors::{verify, ErrorCode, Result};
use game_data::event_data::GameEvent;
use game_data::game_state::{GameSettings, GameState};
use game_data::player_state::PlayerState;
use rules::{starting, subscriptions};
use tracing::{debug, instrument};

/// Creates a new game in the Lobby with its standing subscribers installed.
pub fn create_game(settings: Option<GameSettings>) -> GameState {
    let mut game = GameState::new(GameId::generate(), settings.unwrap_or_default());
    subscriptions::install(&mut game);
    debug!(game_id = %game.id, "Game created");
    game
}

/// Adds a player to a lobby game, or reconnects an existing player.
///
/// Joining is idempotent: a request carrying a known player id flips
/// `connected` back on regardless of game status, and a duplicate name in
/// the lobby returns the existing player's id rather than failing.
#[instrument(skip(game))]
pub fn join_game(
    game: &mut GameState,
    name: &str,
    client_player_id: Option<PlayerId>,
) -> Result<PlayerId> {
    if let Some(player_id) = client_player_id {
        if game.players.contains_key(&player_id) {
            game.player_mut(player_id)?.connected = true;
            debug!(?player_id, "Player reconnected");
            publish(game, GameEvent::GameStateChanged);
            return Ok(player_id);
        }
    }

    if let Some(existing) = game.find_player_by_name(name) {
        let player_id = existing.id;
        game.player_mut(player_id)?.connected = true;
        publish(game, GameEvent::GameStateChanged);
        return Ok(player_id);
    }

    verify!(
        game.status == GameStatus::Lobby,
        ErrorCode::WrongPhase,
        "Cannot join a game in progress"
    );
    verify!(
        game.players.len() < game.settings.max_players,
        ErrorCode::PreconditionFailed,
        "Game is full"
    );

    let player_id = PlayerId::generate();
    game.players.insert(player_id, PlayerState::new(player_id, name));
    if game.host_player_id.is_none() {
        game.host_player_id = Some(player_id);
    }
    debug!(?player_id, name, "Player joined");
    publish(game, GameEvent::PlayerJoined { player_id });
    entity_state::install_player(game, player_id)?;
    publish(game, GameEvent::GameStateChanged);
    Ok(player_id)
}

/// Host-only: starts the game, dealing starting hands.
#[instrument(skip(game))]
pub fn start_game(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    verify!(
        game.host_player_id == Some(player_id),
        ErrorCode::PreconditionFailed,
        "Only the host may start the game"
    );
    starting::start_game(game)
}
