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

//! Game-level bus subscriptions, installed when a game is constructed. The
//! per-entity cache subscriptions live in the `entity_state` crate and are
//! installed per player on join.

use dispatcher::publish;
use errors::Result;
use game_data::event_data::{GameEvent, GameEventKind, Scope};
use game_data::game_state::GameState;

use crate::tile_queue;

/// Installs the engine's standing subscribers: the tile placement processor
/// and the broadcast relay.
pub fn install(game: &mut GameState) {
    game.event_bus.subscribe(
        GameEventKind::TileQueueCreated,
        Scope::Game,
        tile_queue::handle_tile_queue_created,
    );
    game.event_bus.subscribe(
        GameEventKind::GameStateChanged,
        Scope::Game,
        relay_broadcast,
    );
}

/// Every completed state change fans out to clients: `GameStateChanged`
/// re-publishes as `Broadcast`, which the session runtime drains after the
/// action handler returns the session mutex.
fn relay_broadcast(game: &mut GameState, _scope: &Scope, _event: &GameEvent) -> Result<()> {
    publish(game, GameEvent::Broadcast);
    Ok(())
}
