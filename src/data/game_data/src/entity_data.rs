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

//! Materialized per-entity playability state. One [EntityState] exists per
//! hand card, card action, standard project, milestone and award for each
//! player; the entity-state cache recomputes them in response to events.

use std::collections::BTreeMap;

use core_data::game_primitives::{
    AwardType, CardId, MilestoneType, ResourceType, StandardProject,
};
use errors::{ErrorCategory, ErrorCode};
use serde::{Deserialize, Serialize};

/// Identifies one cached entity belonging to a player.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKey {
    HandCard(CardId),
    CardAction { card_id: CardId, behavior_index: usize },
    StandardProject(StandardProject),
    Milestone(MilestoneType),
    Award(AwardType),
}

/// One reason an entity is currently unavailable.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StateError {
    pub code: ErrorCode,
    pub category: ErrorCategory,
    pub message: String,
}

impl StateError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, category: code.category(), message: message.into() }
    }
}

/// The cached availability of a single entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityState {
    /// Empty when the entity is currently usable.
    pub errors: Vec<StateError>,
    /// What using the entity would cost right now.
    pub cost: BTreeMap<ResourceType, i32>,
    /// Free-form computed values (milestone progress, award standings, ...).
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Event-bus sequence number at which this state was computed.
    pub last_calculated: u64,
}

impl EntityState {
    pub fn is_available(&self) -> bool {
        self.errors.is_empty()
    }
}
