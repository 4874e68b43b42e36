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

//! Declarative card behavior data. A card's rules text is expressed as a
//! list of [CardBehavior] records which the behavior engine classifies when
//! the card is played: immediate outputs are applied, persistent effects are
//! registered, manual behaviors become card actions, and conditional
//! behaviors subscribe a listener to the event bus.

use core_data::game_primitives::{ResourceType, Tag, TileType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerType {
    /// Fires once when the card is played.
    Auto,
    /// Becomes a card action the player may activate on their turn.
    Manual,
    /// Fires whenever a matching game event occurs while the card is in play.
    Conditional,
}

/// The closed set of game occurrences a conditional behavior can listen for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerCondition {
    CityPlaced,
    GreeneryPlaced,
    OceanPlaced,
    AnyTilePlaced,
    PlacementBonusGained,
    TemperatureChanged,
    OxygenChanged,
    /// A card with the given tag was played; `None` matches any card.
    CardPlayed(Option<Tag>),
}

impl TriggerCondition {
    /// Whether this condition matches a tile of the given type being placed.
    pub fn matches_tile(self, tile_type: TileType) -> bool {
        match self {
            TriggerCondition::AnyTilePlaced => true,
            TriggerCondition::CityPlaced => tile_type == TileType::City,
            TriggerCondition::GreeneryPlaced => tile_type == TileType::Greenery,
            TriggerCondition::OceanPlaced => tile_type == TileType::Ocean,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BehaviorTrigger {
    pub trigger_type: TriggerType,
    pub condition: Option<TriggerCondition>,
}

impl BehaviorTrigger {
    pub fn auto() -> Self {
        Self { trigger_type: TriggerType::Auto, condition: None }
    }

    pub fn manual() -> Self {
        Self { trigger_type: TriggerType::Manual, condition: None }
    }

    pub fn when(condition: TriggerCondition) -> Self {
        Self { trigger_type: TriggerType::Conditional, condition: Some(condition) }
    }
}

/// Who or what a [ResourceCondition] applies to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionTarget {
    /// The acting player's resource pool.
    SelfPlayer,
    /// Any player chosen by the actor (production attacks and the like).
    AnyPlayer,
    /// A global parameter.
    Global,
    /// Storage on the card this behavior belongs to.
    SelfCard,
    /// Storage on any card the actor owns that stores this resource type.
    AnyCard,
}

/// Optional scaling applied to a [ResourceCondition] amount.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionModifiers {
    /// Multiply the amount by the number of the player's played tags of this
    /// type.
    pub per_tag: Option<Tag>,
}

/// A single resource requirement or product of a behavior.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceCondition {
    pub resource: ResourceType,
    pub amount: i32,
    pub target: ConditionTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<ConditionModifiers>,
}

impl ResourceCondition {
    /// A condition on the acting player's own pool (or the global board for
    /// pseudo-resources).
    pub fn gain(resource: ResourceType, amount: i32) -> Self {
        Self { resource, amount, target: ConditionTarget::SelfPlayer, modifiers: None }
    }

    pub fn stored(resource: ResourceType, amount: i32) -> Self {
        Self { resource, amount, target: ConditionTarget::SelfCard, modifiers: None }
    }

    pub fn targeting(mut self, target: ConditionTarget) -> Self {
        self.target = target;
        self
    }

    pub fn per_tag(mut self, tag: Tag) -> Self {
        self.modifiers = Some(ConditionModifiers { per_tag: Some(tag) });
        self
    }
}

/// One alternative of a choose-one behavior.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct BehaviorChoice {
    pub inputs: Vec<ResourceCondition>,
    pub outputs: Vec<ResourceCondition>,
}

/// Persistent state a behavior registers when its card enters play. These
/// are queryable for the lifetime of the card and influence later
/// computations rather than mutating state when registered.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassiveEffect {
    /// Reduces the effective cost of played cards, optionally only those
    /// carrying a given tag.
    CardDiscount { amount: i32, tag: Option<Tag> },
    /// Allows paying card costs with a non-standard resource at the given
    /// credit conversion rate.
    PaymentSubstitute { resource: ResourceType, rate: i32 },
    /// Widens global-parameter card requirements by the given number of
    /// steps in the player's favor.
    RequirementTolerance { steps: i32 },
    /// Additional credits gained per adjacent ocean when placing a tile.
    OceanAdjacencyBonus { amount: i32 },
    /// Reduces the resource cost of a standard conversion (plants to
    /// greenery, heat to temperature).
    ConversionDiscount { resource: ResourceType, amount: i32 },
}

/// What a registered [crate::player_state::CardEffect] does: either a
/// queryable passive modifier, or a conditional trigger with a bus listener.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegisteredEffect {
    Passive(PassiveEffect),
    Conditional(TriggerCondition),
}

/// A unit of card logic: triggers + inputs + outputs + optional choices,
/// plus an optional persistent effect registered on play.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct CardBehavior {
    pub triggers: Vec<BehaviorTrigger>,
    pub inputs: Vec<ResourceCondition>,
    pub outputs: Vec<ResourceCondition>,
    pub choices: Vec<BehaviorChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<PassiveEffect>,
}

impl CardBehavior {
    pub fn is_manual(&self) -> bool {
        self.triggers.iter().any(|t| t.trigger_type == TriggerType::Manual)
    }

    pub fn is_auto(&self) -> bool {
        self.triggers.iter().any(|t| t.trigger_type == TriggerType::Auto)
    }

    /// The condition of the first conditional trigger, if any.
    pub fn condition(&self) -> Option<TriggerCondition> {
        self.triggers
            .iter()
            .find(|t| t.trigger_type == TriggerType::Conditional)
            .and_then(|t| t.condition)
    }
}
