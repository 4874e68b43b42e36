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

//! Corporation definitions. Starting credits, resources and production are
//! applied when the corporation is selected; behaviors are classified
//! exactly like project behaviors.

use core_data::game_primitives::{CardType, ResourceType, Tag};
use game_data::behavior_data::{PassiveEffect, TriggerCondition};
use game_data::card_definition::{CardDefinition, CardPack, ResourceQuantity};

use crate::card_helpers::{action, gain, on, passive};

pub fn all() -> Vec<CardDefinition> {
    vec![
        credicor(),
        helion(),
        ecoline(),
        tharsis_republic(),
        thorgate(),
        mining_guild(),
        interplanetary_cinematics(),
        saturn_systems(),
        united_nations_mars_initiative(),
        lakefront_resorts(),
    ]
}

fn corporation(id: &'static str, name: &'static str, starting_credits: i32) -> CardDefinition {
    CardDefinition {
        id,
        name,
        card_type: CardType::Corporation,
        starting_credits,
        ..CardDefinition::default()
    }
}

pub fn credicor() -> CardDefinition {
    corporation("credicor", "Credicor", 57)
}

pub fn helion() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Space],
        starting_production: vec![ResourceQuantity::new(ResourceType::Heat, 3)],
        behaviors: vec![passive(PassiveEffect::PaymentSubstitute {
            resource: ResourceType::Heat,
            rate: 1,
        })],
        ..corporation("helion", "Helion", 42)
    }
}

pub fn ecoline() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Plant],
        starting_resources: vec![ResourceQuantity::new(ResourceType::Plants, 3)],
        starting_production: vec![ResourceQuantity::new(ResourceType::Plants, 2)],
        behaviors: vec![passive(PassiveEffect::ConversionDiscount {
            resource: ResourceType::Plants,
            amount: 1,
        })],
        ..corporation("ecoline", "EcoLine", 36)
    }
}

pub fn tharsis_republic() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building],
        behaviors: vec![on(
            TriggerCondition::CityPlaced,
            vec![gain(ResourceType::CreditsProduction, 1)],
        )],
        ..corporation("tharsis-republic", "Tharsis Republic", 40)
    }
}

pub fn thorgate() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Power],
        starting_production: vec![ResourceQuantity::new(ResourceType::Energy, 1)],
        behaviors: vec![passive(PassiveEffect::CardDiscount {
            amount: 3,
            tag: Some(Tag::Power),
        })],
        ..corporation("thorgate", "ThorGate", 48)
    }
}

pub fn mining_guild() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building, Tag::Building],
        starting_resources: vec![ResourceQuantity::new(ResourceType::Steel, 5)],
        starting_production: vec![ResourceQuantity::new(ResourceType::Steel, 1)],
        behaviors: vec![on(
            TriggerCondition::PlacementBonusGained,
            vec![gain(ResourceType::SteelProduction, 1)],
        )],
        ..corporation("mining-guild", "Mining Guild", 30)
    }
}

pub fn interplanetary_cinematics() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building],
        starting_resources: vec![ResourceQuantity::new(ResourceType::Steel, 20)],
        behaviors: vec![passive(PassiveEffect::CardDiscount {
            amount: 2,
            tag: Some(Tag::Event),
        })],
        ..corporation("interplanetary-cinematics", "Interplanetary Cinematics", 30)
    }
}

pub fn saturn_systems() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Jovian],
        starting_production: vec![ResourceQuantity::new(ResourceType::Titanium, 1)],
        behaviors: vec![on(
            TriggerCondition::CardPlayed(Some(Tag::Jovian)),
            vec![gain(ResourceType::CreditsProduction, 1)],
        )],
        ..corporation("saturn-systems", "Saturn Systems", 42)
    }
}

pub fn united_nations_mars_initiative() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Earth],
        behaviors: vec![action(
            vec![gain(ResourceType::Credits, 3)],
            vec![gain(ResourceType::TerraformRating, 1)],
        )],
        ..corporation("united-nations-mars-initiative", "United Nations Mars Initiative", 40)
    }
}

pub fn lakefront_resorts() -> CardDefinition {
    CardDefinition {
        pack: CardPack::Promo,
        tags: vec![Tag::Building],
        behaviors: vec![passive(PassiveEffect::OceanAdjacencyBonus { amount: 2 })],
        ..corporation("lakefront-resorts", "Lakefront Resorts", 54)
    }
}
