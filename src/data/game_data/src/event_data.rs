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

//! The per-game typed event bus.
//!
//! Every mutation of domain state publishes one of the [GameEvent]s below;
//! subscribers react by recomputing cached views, draining tile queues or
//! marking state for broadcast. Delivery is synchronous, ordered, and
//! re-entrant (see `dispatcher::dispatch`).
//!
//! Handlers are raw function pointers with a [Scope] context rather than
//! closures: a closure capturing the game cannot be stored inside the state
//! it mutates, and function pointers keep the bus `Clone`-free and cheap to
//! snapshot.

use std::collections::{BTreeMap, HashMap};

use core_data::game_primitives::{
    AwardType, CardId, GamePhase, MilestoneType, PlayerId, ResourceType, Tag, TileType,
};
use core_data::hex::HexCoordinate;
use enum_kinds::EnumKind;
use errors::Result;
use serde::{Deserialize, Serialize};

use crate::board::TileBonus;
use crate::entity_data::EntityKey;
use crate::game_state::GameState;

/// The closed set of events published on a game's bus. Kinds are derived as
/// [GameEventKind] for subscription lookup.
#[derive(Debug, Clone, EnumKind, Serialize, Deserialize)]
#[enum_kind(GameEventKind, derive(Hash, Ord, PartialOrd))]
#[serde(rename_all = "kebab-case")]
pub enum GameEvent {
    ResourcesChanged {
        player_id: PlayerId,
        deltas: BTreeMap<ResourceType, i32>,
    },
    ProductionChanged {
        player_id: PlayerId,
        deltas: BTreeMap<ResourceType, i32>,
    },
    TerraformRatingChanged {
        player_id: PlayerId,
        delta: i32,
        rating: i32,
    },
    CardHandUpdated {
        player_id: PlayerId,
    },
    CardPlayed {
        player_id: PlayerId,
        card_id: CardId,
        tags: Vec<Tag>,
    },
    TilePlaced {
        player_id: Option<PlayerId>,
        coordinate: HexCoordinate,
        tile_type: TileType,
    },
    TemperatureChanged {
        steps: i32,
        value: i32,
    },
    OxygenChanged {
        steps: i32,
        value: i32,
    },
    OceansChanged {
        delta: i32,
        value: i32,
    },
    PlacementBonusGained {
        player_id: PlayerId,
        coordinate: HexCoordinate,
        bonuses: Vec<TileBonus>,
    },
    GamePhaseChanged {
        phase: GamePhase,
    },
    PlayerJoined {
        player_id: PlayerId,
    },
    MilestoneClaimed {
        player_id: PlayerId,
        milestone: MilestoneType,
    },
    AwardFunded {
        player_id: PlayerId,
        award: AwardType,
    },
    TileQueueCreated {
        player_id: PlayerId,
    },
    CardDrawConfirmed {
        player_id: PlayerId,
        taken: Vec<CardId>,
        bought: Vec<CardId>,
        source_card_id: Option<CardId>,
        source_behavior_index: Option<usize>,
    },
    PlayerEffectsChanged {
        player_id: PlayerId,
    },
    GameStateChanged,
    /// Fan-out marker consumed by the session runtime after the handler
    /// returns the session mutex.
    Broadcast,
}

impl GameEvent {
    /// The player this event concerns, if any.
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            GameEvent::ResourcesChanged { player_id, .. }
            | GameEvent::ProductionChanged { player_id, .. }
            | GameEvent::TerraformRatingChanged { player_id, .. }
            | GameEvent::CardHandUpdated { player_id }
            | GameEvent::CardPlayed { player_id, .. }
            | GameEvent::PlacementBonusGained { player_id, .. }
            | GameEvent::PlayerJoined { player_id }
            | GameEvent::MilestoneClaimed { player_id, .. }
            | GameEvent::AwardFunded { player_id, .. }
            | GameEvent::TileQueueCreated { player_id }
            | GameEvent::CardDrawConfirmed { player_id, .. }
            | GameEvent::PlayerEffectsChanged { player_id } => Some(*player_id),
            GameEvent::TilePlaced { player_id, .. } => *player_id,
            _ => None,
        }
    }
}

/// Identifies a registered subscription for later removal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

/// Context identifying the owner of a subscription: which player, card or
/// cached entity registered the handler.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Scope {
    Game,
    Player(PlayerId),
    Behavior { player_id: PlayerId, card_id: CardId, behavior_index: usize },
    Entity { player_id: PlayerId, entity: EntityKey },
}

impl Scope {
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Scope::Game => None,
            Scope::Player(player_id) => Some(*player_id),
            Scope::Behavior { player_id, .. } => Some(*player_id),
            Scope::Entity { player_id, .. } => Some(*player_id),
        }
    }
}

/// Callback invoked for each matching event. Errors are logged by the
/// dispatcher and never propagated; subscriptions survive handler errors.
pub type EventHandlerFn = fn(&mut GameState, &Scope, &GameEvent) -> Result<()>;

#[derive(Clone)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub scope: Scope,
    pub handler: EventHandlerFn,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({:?}, {:?})", self.id, self.scope)
    }
}

/// Subscription storage for one game. Delivery logic lives in
/// `dispatcher::dispatch`; this struct only manages registration state.
#[derive(Debug, Default)]
pub struct EventBus {
    lookup: HashMap<GameEventKind, Vec<Subscription>>,
    next_subscription_id: u64,
    /// Monotonic publish counter, used as the `last_calculated` stamp on
    /// cached entity states.
    pub sequence: u64,
    /// Set when a [GameEvent::Broadcast] is delivered; drained by the
    /// session runtime after the action handler returns.
    pub pending_broadcast: bool,
}

impl EventBus {
    pub fn subscribe(
        &mut self,
        kind: GameEventKind,
        scope: Scope,
        handler: EventHandlerFn,
    ) -> SubscriptionId {
        self.next_subscription_id += 1;
        let id = SubscriptionId(self.next_subscription_id);
        self.lookup.entry(kind).or_default().push(Subscription { id, scope, handler });
        id
    }

    /// Registers the same handler for several event kinds, returning one
    /// token per kind.
    pub fn subscribe_many(
        &mut self,
        kinds: &[GameEventKind],
        scope: Scope,
        handler: EventHandlerFn,
    ) -> Vec<SubscriptionId> {
        kinds.iter().map(|kind| self.subscribe(*kind, scope.clone(), handler)).collect()
    }

    /// Removes a subscription. Removal during delivery affects subsequent
    /// events only, because the dispatcher snapshots the subscriber list
    /// before delivering.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        for subscriptions in self.lookup.values_mut() {
            subscriptions.retain(|s| s.id != id);
        }
    }

    /// The current subscriber list for one event kind, in subscription
    /// order.
    pub fn snapshot(&self, kind: GameEventKind) -> Vec<Subscription> {
        self.lookup.get(&kind).cloned().unwrap_or_default()
    }

    pub fn subscriber_count(&self, kind: GameEventKind) -> usize {
        self.lookup.get(&kind).map(Vec::len).unwrap_or(0)
    }
}
