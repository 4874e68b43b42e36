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

//! Helpers for declaring card behaviors in the catalog.

use core_data::game_primitives::ResourceType;
use game_data::behavior_data::{
    BehaviorChoice, BehaviorTrigger, CardBehavior, PassiveEffect, ResourceCondition,
    TriggerCondition,
};

/// A behavior which fires once when the card is played.
pub fn auto(outputs: Vec<ResourceCondition>) -> CardBehavior {
    CardBehavior { triggers: vec![BehaviorTrigger::auto()], outputs, ..CardBehavior::default() }
}

/// An auto behavior with inputs deducted before the outputs apply.
pub fn auto_with_inputs(
    inputs: Vec<ResourceCondition>,
    outputs: Vec<ResourceCondition>,
) -> CardBehavior {
    CardBehavior {
        triggers: vec![BehaviorTrigger::auto()],
        inputs,
        outputs,
        ..CardBehavior::default()
    }
}

/// A persistent effect registered when the card enters play.
pub fn passive(effect: PassiveEffect) -> CardBehavior {
    CardBehavior {
        triggers: vec![BehaviorTrigger::auto()],
        effect: Some(effect),
        ..CardBehavior::default()
    }
}

/// A manual card action.
pub fn action(inputs: Vec<ResourceCondition>, outputs: Vec<ResourceCondition>) -> CardBehavior {
    CardBehavior {
        triggers: vec![BehaviorTrigger::manual()],
        inputs,
        outputs,
        ..CardBehavior::default()
    }
}

/// A manual card action offering a choice between alternatives.
pub fn action_choices(choices: Vec<BehaviorChoice>) -> CardBehavior {
    CardBehavior {
        triggers: vec![BehaviorTrigger::manual()],
        choices,
        ..CardBehavior::default()
    }
}

/// A conditional behavior applying `outputs` whenever a matching event
/// occurs while the card is in play.
pub fn on(condition: TriggerCondition, outputs: Vec<ResourceCondition>) -> CardBehavior {
    CardBehavior {
        triggers: vec![BehaviorTrigger::when(condition)],
        outputs,
        ..CardBehavior::default()
    }
}

pub fn choice(inputs: Vec<ResourceCondition>, outputs: Vec<ResourceCondition>) -> BehaviorChoice {
    BehaviorChoice { inputs, outputs }
}

/// Shorthand for a self-player resource condition.
pub fn gain(resource: ResourceType, amount: i32) -> ResourceCondition {
    ResourceCondition::gain(resource, amount)
}

/// Shorthand for a resource condition on this card's storage.
pub fn stored(resource: ResourceType, amount: i32) -> ResourceCondition {
    ResourceCondition::stored(resource, amount)
}
