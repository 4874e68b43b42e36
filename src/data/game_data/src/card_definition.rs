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

//! The static definition of a card as it exists in the registry, outside of
//! any game.

use core_data::game_primitives::{CardId, CardType, ResourceType, Tag};
use serde::{Deserialize, Serialize};

use crate::behavior_data::CardBehavior;

/// Threshold direction for a [CardRequirement].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    AtLeast(i32),
    AtMost(i32),
}

impl Comparison {
    /// Evaluates the comparison with an optional tolerance widening the
    /// acceptable range in the player's favor.
    pub fn matches_with_tolerance(self, value: i32, tolerance: i32) -> bool {
        match self {
            Comparison::AtLeast(threshold) => value >= threshold - tolerance,
            Comparison::AtMost(threshold) => value <= threshold + tolerance,
        }
    }

    pub fn matches(self, value: i32) -> bool {
        self.matches_with_tolerance(value, 0)
    }
}

/// The closed set of requirements a card can place on being played.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardRequirement {
    Temperature(Comparison),
    Oxygen(Comparison),
    Oceans(Comparison),
    TerraformRating(Comparison),
    Tags { tag: Tag, comparison: Comparison },
    Production { resource: ResourceType, comparison: Comparison },
    Resource { resource: ResourceType, comparison: Comparison },
    CitiesOwned(Comparison),
    GreeneriesOwned(Comparison),
}

/// End-of-game scoring contributed by a played card.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VictoryPoints {
    Fixed(i32),
    /// Points per `per` resources stored on this card, rounded down.
    PerStoredResource { resource: ResourceType, per: i32 },
    PerTag { tag: Tag, per: i32 },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardPack {
    Base,
    Promo,
}

/// A quantity of a single resource type, used for corporation starting
/// grants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceQuantity {
    pub resource: ResourceType,
    pub amount: i32,
}

impl ResourceQuantity {
    pub fn new(resource: ResourceType, amount: i32) -> Self {
        Self { resource, amount }
    }
}

/// A card definition. Definitions are read-only and process-wide; games
/// reference them by id through the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub card_type: CardType,
    pub pack: CardPack,
    pub cost: i32,
    pub tags: Vec<Tag>,
    pub requirements: Vec<CardRequirement>,
    pub behaviors: Vec<CardBehavior>,
    pub victory_points: Vec<VictoryPoints>,
    /// The resource type this card stores, if any.
    pub resource_storage: Option<ResourceType>,
    /// Corporations only: credits granted on selection.
    pub starting_credits: i32,
    /// Corporations only: non-credit resources granted on selection.
    pub starting_resources: Vec<ResourceQuantity>,
    /// Corporations only: production granted on selection.
    pub starting_production: Vec<ResourceQuantity>,
}

impl Default for CardDefinition {
    fn default() -> Self {
        Self {
            id: "",
            name: "",
            card_type: CardType::Project,
            pack: CardPack::Base,
            cost: 0,
            tags: vec![],
            requirements: vec![],
            behaviors: vec![],
            victory_points: vec![],
            resource_storage: None,
            starting_credits: 0,
            starting_resources: vec![],
            starting_production: vec![],
        }
    }
}

impl CardDefinition {
    pub fn card_id(&self) -> CardId {
        CardId::new(self.id)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_corporation(&self) -> bool {
        self.card_type == CardType::Corporation
    }
}
