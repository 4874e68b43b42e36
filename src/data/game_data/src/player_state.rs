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

//! State of a player within a game. Writes to this state should go through
//! the mutators in the `rules` crate, which validate invariants and publish
//! the corresponding events; the `internal_*` methods here perform the raw
//! updates only.

use std::collections::BTreeMap;

use constants::STARTING_TERRAFORM_RATING;
use core_data::game_primitives::{CardId, CardType, PlayerId, ResourceType, Tag};
use serde::{Deserialize, Serialize};

use crate::behavior_data::{PassiveEffect, RegisteredEffect};
use crate::entity_data::{EntityKey, EntityState};
use crate::event_data::SubscriptionId;
use crate::selection_data::{PendingTileSelection, SelectionState, TileSelectionQueue};

/// The six physical resource pools.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Resources {
    pub credits: i32,
    pub steel: i32,
    pub titanium: i32,
    pub plants: i32,
    pub energy: i32,
    pub heat: i32,
}

impl Resources {
    pub fn get(&self, resource: ResourceType) -> i32 {
        match resource {
            ResourceType::Credits => self.credits,
            ResourceType::Steel => self.steel,
            ResourceType::Titanium => self.titanium,
            ResourceType::Plants => self.plants,
            ResourceType::Energy => self.energy,
            ResourceType::Heat => self.heat,
            _ => panic!("Not a standard resource: {resource:?}"),
        }
    }

    pub fn add(&mut self, resource: ResourceType, delta: i32) {
        match resource {
            ResourceType::Credits => self.credits += delta,
            ResourceType::Steel => self.steel += delta,
            ResourceType::Titanium => self.titanium += delta,
            ResourceType::Plants => self.plants += delta,
            ResourceType::Energy => self.energy += delta,
            ResourceType::Heat => self.heat += delta,
            _ => panic!("Not a standard resource: {resource:?}"),
        }
    }
}

/// Per-resource production levels applied during the production phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Production {
    pub credits: i32,
    pub steel: i32,
    pub titanium: i32,
    pub plants: i32,
    pub energy: i32,
    pub heat: i32,
}

impl Production {
    pub fn get(&self, resource: ResourceType) -> i32 {
        match resource {
            ResourceType::Credits => self.credits,
            ResourceType::Steel => self.steel,
            ResourceType::Titanium => self.titanium,
            ResourceType::Plants => self.plants,
            ResourceType::Energy => self.energy,
            ResourceType::Heat => self.heat,
            _ => panic!("Not a standard resource: {resource:?}"),
        }
    }

    pub fn add(&mut self, resource: ResourceType, delta: i32) {
        match resource {
            ResourceType::Credits => self.credits += delta,
            ResourceType::Steel => self.steel += delta,
            ResourceType::Titanium => self.titanium += delta,
            ResourceType::Plants => self.plants += delta,
            ResourceType::Energy => self.energy += delta,
            ResourceType::Heat => self.heat += delta,
            _ => panic!("Not a standard resource: {resource:?}"),
        }
    }
}

/// An activatable action registered from a manual card behavior.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardAction {
    pub card_id: CardId,
    pub behavior_index: usize,
    pub times_used_this_generation: u32,
    pub times_used_this_turn: u32,
}

impl CardAction {
    pub fn new(card_id: CardId, behavior_index: usize) -> Self {
        Self { card_id, behavior_index, times_used_this_generation: 0, times_used_this_turn: 0 }
    }
}

/// A registered persistent effect, queryable while its card remains in play.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardEffect {
    pub card_id: CardId,
    pub behavior_index: usize,
    pub effect: RegisteredEffect,
}

/// A payment substitute such as Helion's heat-as-credits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PaymentSubstitute {
    pub resource: ResourceType,
    pub conversion_rate: i32,
}

/// Summary of a card in a player's played area.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card_id: CardId,
    pub name: String,
    pub card_type: CardType,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub connected: bool,
    pub corporation_id: Option<CardId>,
    pub has_passed: bool,
    pub resources: Resources,
    pub production: Production,
    pub terraform_rating: i32,
    pub hand: Vec<CardId>,
    pub played_cards: Vec<PlayedCard>,
    pub actions: Vec<CardAction>,
    pub effects: Vec<CardEffect>,
    /// Resources stored on cards, keyed by card id.
    pub card_resources: BTreeMap<CardId, i32>,
    pub payment_substitutes: Vec<PaymentSubstitute>,
    pub selection: SelectionState,
    pub pending_tile: Option<PendingTileSelection>,
    pub tile_queue: Option<TileSelectionQueue>,
    /// Materialized playability views maintained by the entity-state cache.
    /// Rebuilt from events; serialized for the wire as a list because the
    /// structured key cannot be a JSON object key.
    #[serde(skip)]
    pub entity_states: BTreeMap<EntityKey, EntityState>,
    /// Unsubscribe tokens per cached entity, released when the entity is
    /// destroyed.
    #[serde(skip)]
    pub entity_subscriptions: BTreeMap<EntityKey, Vec<SubscriptionId>>,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            connected: true,
            corporation_id: None,
            has_passed: false,
            resources: Resources::default(),
            production: Production::default(),
            terraform_rating: STARTING_TERRAFORM_RATING,
            hand: vec![],
            played_cards: vec![],
            actions: vec![],
            effects: vec![],
            card_resources: BTreeMap::new(),
            payment_substitutes: vec![],
            selection: SelectionState::default(),
            pending_tile: None,
            tile_queue: None,
            entity_states: BTreeMap::new(),
            entity_subscriptions: BTreeMap::new(),
        }
    }

    /// Whether a sticky selection currently gates this player's ordinary
    /// actions.
    pub fn has_blocking_selection(&self) -> bool {
        self.selection.is_blocking() || self.pending_tile.is_some()
    }

    pub fn has_card_in_hand(&self, card_id: &CardId) -> bool {
        self.hand.contains(card_id)
    }

    pub fn card_action(&self, card_id: &CardId, behavior_index: usize) -> Option<&CardAction> {
        self.actions
            .iter()
            .find(|a| a.card_id == *card_id && a.behavior_index == behavior_index)
    }

    pub fn card_action_mut(
        &mut self,
        card_id: &CardId,
        behavior_index: usize,
    ) -> Option<&mut CardAction> {
        self.actions
            .iter_mut()
            .find(|a| a.card_id == *card_id && a.behavior_index == behavior_index)
    }

    pub fn stored_on_card(&self, card_id: &CardId) -> i32 {
        self.card_resources.get(card_id).copied().unwrap_or(0)
    }

    pub fn substitute_rate(&self, resource: ResourceType) -> Option<i32> {
        self.payment_substitutes
            .iter()
            .find(|s| s.resource == resource)
            .map(|s| s.conversion_rate)
    }

    /// Number of played tags of the given type. Includes the corporation
    /// card's own tags.
    pub fn tag_count(&self, tag: Tag, corporation_tags: &[Tag]) -> i32 {
        let played = self
            .played_cards
            .iter()
            .flat_map(|c| c.tags.iter())
            .filter(|t| **t == tag)
            .count();
        let corporation = corporation_tags.iter().filter(|t| **t == tag).count();
        (played + corporation) as i32
    }

    /// All registered passive effects, in registration order.
    pub fn passive_effects(&self) -> impl Iterator<Item = &PassiveEffect> {
        self.effects.iter().filter_map(|e| match &e.effect {
            RegisteredEffect::Passive(passive) => Some(passive),
            RegisteredEffect::Conditional(_) => None,
        })
    }
}
