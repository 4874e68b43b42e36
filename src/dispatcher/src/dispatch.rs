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

//! Event delivery for the per-game bus.
//!
//! Delivery is synchronous and ordered: subscribers run on the publishing
//! thread, in subscription order, before [publish] returns. Publishing is
//! re-entrant — a handler may publish further events, which are delivered
//! depth-first. The subscriber list is snapshotted per event, so
//! unsubscription during delivery applies to subsequent events only.
//!
//! A failing handler is logged and isolated; the remaining subscribers still
//! run and the subscription survives.

use game_data::event_data::{GameEvent, GameEventKind};
use game_data::game_state::GameState;
use tracing::{error, trace};

/// Publishes an event on the game's bus, invoking every subscriber for the
/// event's kind.
pub fn publish(game: &mut GameState, event: GameEvent) {
    let kind = GameEventKind::from(&event);
    game.event_bus.sequence += 1;
    if kind == GameEventKind::Broadcast {
        game.event_bus.pending_broadcast = true;
    }

    let subscriptions = game.event_bus.snapshot(kind);
    trace!(?kind, count = subscriptions.len(), "Publishing event");
    for subscription in subscriptions {
        if let Err(fault) = (subscription.handler)(game, &subscription.scope, &event) {
            error!(?kind, scope = ?subscription.scope, %fault, "Event handler failed");
        }
    }
}

/// Publishes each event in order.
pub fn publish_all(game: &mut GameState, events: impl IntoIterator<Item = GameEvent>) {
    for event in events {
        publish(game, event);
    }
}
