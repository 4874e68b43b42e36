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

//! Project card definitions. One constructor per card; `all()` is the
//! catalog the registry loads at boot.

use core_data::game_primitives::{ResourceType, Tag};
use game_data::behavior_data::{ConditionTarget, PassiveEffect, TriggerCondition};
use game_data::card_definition::{
    CardDefinition, CardRequirement, Comparison, VictoryPoints,
};

use crate::card_helpers::{
    action, action_choices, auto, auto_with_inputs, choice, gain, on, passive, stored,
};

pub fn all() -> Vec<CardDefinition> {
    vec![
        mine(),
        solar_power(),
        deep_well_heating(),
        cloud_seeding(),
        giant_ice_asteroid(),
        lichen(),
        heather(),
        food_factory(),
        mineral_deposit(),
        business_contacts(),
        restricted_area(),
        ai_central(),
        development_center(),
        inventors_guild(),
        lagrange_observatory(),
        research(),
        martian_survey(),
        domed_crater(),
        urbanized_area(),
        mangrove(),
        plantation(),
        artificial_lake(),
        subterranean_reservoir(),
        ice_cap_melting(),
        birds(),
        fish(),
        livestock(),
        tardigrades(),
        ghg_producing_bacteria(),
        nitrite_reducing_bacteria(),
        symbiotic_fungus(),
        rover_construction(),
        arctic_algae(),
        herbivores(),
        pets(),
        optimal_aerobraking(),
        space_station(),
        earth_catapult(),
        research_outpost(),
        adaptation_technology(),
        local_heat_trapping(),
        steelworks(),
        water_import(),
        small_asteroid(),
        imported_hydrogen(),
        imported_nitrogen(),
        comet(),
        asteroid_mining(),
        space_elevator(),
        insects(),
        ganymede_colony(),
        breathing_filters(),
        gene_repair(),
        fueled_generators(),
    ]
}

fn project(id: &'static str, name: &'static str, cost: i32) -> CardDefinition {
    CardDefinition { id, name, cost, ..CardDefinition::default() }
}

pub fn mine() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building],
        behaviors: vec![auto(vec![gain(ResourceType::SteelProduction, 1)])],
        ..project("mine", "Mine", 4)
    }
}

pub fn solar_power() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Power, Tag::Building],
        behaviors: vec![auto(vec![gain(ResourceType::EnergyProduction, 1)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("solar-power", "Solar Power", 11)
    }
}

pub fn deep_well_heating() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Power, Tag::Building],
        behaviors: vec![auto(vec![
            gain(ResourceType::EnergyProduction, 1),
            gain(ResourceType::Temperature, 1),
        ])],
        ..project("deep-well-heating", "Deep Well Heating", 13)
    }
}

pub fn cloud_seeding() -> CardDefinition {
    CardDefinition {
        requirements: vec![CardRequirement::Oceans(Comparison::AtLeast(3))],
        behaviors: vec![auto(vec![
            gain(ResourceType::PlantsProduction, 2),
            gain(ResourceType::CreditsProduction, -1),
        ])],
        ..project("cloud-seeding", "Cloud Seeding", 11)
    }
}

pub fn giant_ice_asteroid() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Space, Tag::Event],
        behaviors: vec![auto(vec![
            gain(ResourceType::Temperature, 2),
            gain(ResourceType::OceanPlacement, 2),
        ])],
        ..project("giant-ice-asteroid", "Giant Ice Asteroid", 36)
    }
}

pub fn lichen() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Plant],
        requirements: vec![CardRequirement::Temperature(Comparison::AtLeast(-24))],
        behaviors: vec![auto(vec![gain(ResourceType::PlantsProduction, 1)])],
        ..project("lichen", "Lichen", 7)
    }
}

pub fn heather() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Plant],
        requirements: vec![CardRequirement::Temperature(Comparison::AtLeast(-14))],
        behaviors: vec![auto(vec![
            gain(ResourceType::PlantsProduction, 1),
            gain(ResourceType::Plants, 1),
        ])],
        ..project("heather", "Heather", 6)
    }
}

pub fn food_factory() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building],
        behaviors: vec![auto(vec![
            gain(ResourceType::CreditsProduction, 4),
            gain(ResourceType::PlantsProduction, -1),
        ])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("food-factory", "Food Factory", 12)
    }
}

pub fn mineral_deposit() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Event],
        behaviors: vec![auto(vec![gain(ResourceType::Steel, 5)])],
        ..project("mineral-deposit", "Mineral Deposit", 5)
    }
}

pub fn business_contacts() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Earth, Tag::Event],
        behaviors: vec![auto(vec![
            gain(ResourceType::CardPeek, 4),
            gain(ResourceType::CardTake, 2),
        ])],
        ..project("business-contacts", "Business Contacts", 7)
    }
}

pub fn restricted_area() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science],
        behaviors: vec![action(
            vec![gain(ResourceType::Credits, 2)],
            vec![gain(ResourceType::CardDraw, 1)],
        )],
        ..project("restricted-area", "Restricted Area", 11)
    }
}

pub fn ai_central() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science, Tag::Building],
        requirements: vec![CardRequirement::Tags {
            tag: Tag::Science,
            comparison: Comparison::AtLeast(3),
        }],
        behaviors: vec![action(vec![], vec![gain(ResourceType::CardDraw, 2)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("ai-central", "AI Central", 21)
    }
}

pub fn development_center() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science, Tag::Building],
        behaviors: vec![action(
            vec![gain(ResourceType::Energy, 1)],
            vec![gain(ResourceType::CardDraw, 1)],
        )],
        ..project("development-center", "Development Center", 11)
    }
}

pub fn inventors_guild() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science],
        behaviors: vec![action(
            vec![],
            vec![gain(ResourceType::CardPeek, 1), gain(ResourceType::CardBuy, 1)],
        )],
        ..project("inventors-guild", "Inventors' Guild", 9)
    }
}

pub fn lagrange_observatory() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science, Tag::Space],
        behaviors: vec![auto(vec![gain(ResourceType::CardDraw, 1)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("lagrange-observatory", "Lagrange Observatory", 9)
    }
}

pub fn research() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science, Tag::Science],
        behaviors: vec![auto(vec![gain(ResourceType::CardDraw, 2)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("research", "Research", 11)
    }
}

pub fn martian_survey() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science, Tag::Event],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtMost(4))],
        behaviors: vec![auto(vec![gain(ResourceType::CardDraw, 2)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("martian-survey", "Martian Survey", 9)
    }
}

pub fn domed_crater() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::City, Tag::Building],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtMost(7))],
        behaviors: vec![auto(vec![
            gain(ResourceType::CityPlacement, 1),
            gain(ResourceType::CreditsProduction, 3),
            gain(ResourceType::Plants, 3),
        ])],
        ..project("domed-crater", "Domed Crater", 24)
    }
}

pub fn urbanized_area() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::City, Tag::Building],
        behaviors: vec![auto(vec![
            gain(ResourceType::CityPlacement, 1),
            gain(ResourceType::CreditsProduction, 2),
        ])],
        ..project("urbanized-area", "Urbanized Area", 10)
    }
}

pub fn mangrove() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Plant],
        requirements: vec![CardRequirement::Temperature(Comparison::AtLeast(4))],
        behaviors: vec![auto(vec![gain(ResourceType::GreeneryPlacement, 1)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("mangrove", "Mangrove", 12)
    }
}

pub fn plantation() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Plant],
        requirements: vec![CardRequirement::Tags {
            tag: Tag::Science,
            comparison: Comparison::AtLeast(2),
        }],
        behaviors: vec![auto(vec![gain(ResourceType::GreeneryPlacement, 1)])],
        ..project("plantation", "Plantation", 15)
    }
}

pub fn artificial_lake() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building],
        requirements: vec![CardRequirement::Temperature(Comparison::AtLeast(-6))],
        behaviors: vec![auto(vec![gain(ResourceType::OceanPlacement, 1)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("artificial-lake", "Artificial Lake", 15)
    }
}

pub fn subterranean_reservoir() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Event],
        behaviors: vec![auto(vec![gain(ResourceType::OceanPlacement, 1)])],
        ..project("subterranean-reservoir", "Subterranean Reservoir", 11)
    }
}

pub fn ice_cap_melting() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Event],
        requirements: vec![CardRequirement::Temperature(Comparison::AtLeast(2))],
        behaviors: vec![auto(vec![gain(ResourceType::OceanPlacement, 1)])],
        ..project("ice-cap-melting", "Ice Cap Melting", 5)
    }
}

pub fn birds() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Animal],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtLeast(13))],
        resource_storage: Some(ResourceType::Animals),
        behaviors: vec![action(vec![], vec![stored(ResourceType::Animals, 1)])],
        victory_points: vec![VictoryPoints::PerStoredResource {
            resource: ResourceType::Animals,
            per: 1,
        }],
        ..project("birds", "Birds", 10)
    }
}

pub fn fish() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Animal],
        requirements: vec![CardRequirement::Temperature(Comparison::AtLeast(2))],
        resource_storage: Some(ResourceType::Animals),
        behaviors: vec![action(vec![], vec![stored(ResourceType::Animals, 1)])],
        victory_points: vec![VictoryPoints::PerStoredResource {
            resource: ResourceType::Animals,
            per: 1,
        }],
        ..project("fish", "Fish", 9)
    }
}

pub fn livestock() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Animal],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtLeast(9))],
        resource_storage: Some(ResourceType::Animals),
        behaviors: vec![
            auto(vec![gain(ResourceType::CreditsProduction, 2)]),
            action(vec![], vec![stored(ResourceType::Animals, 1)]),
        ],
        victory_points: vec![VictoryPoints::PerStoredResource {
            resource: ResourceType::Animals,
            per: 1,
        }],
        ..project("livestock", "Livestock", 13)
    }
}

pub fn tardigrades() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Microbe],
        resource_storage: Some(ResourceType::Microbes),
        behaviors: vec![action(vec![], vec![stored(ResourceType::Microbes, 1)])],
        victory_points: vec![VictoryPoints::PerStoredResource {
            resource: ResourceType::Microbes,
            per: 4,
        }],
        ..project("tardigrades", "Tardigrades", 4)
    }
}

pub fn ghg_producing_bacteria() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science, Tag::Microbe],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtLeast(4))],
        resource_storage: Some(ResourceType::Microbes),
        behaviors: vec![action_choices(vec![
            choice(vec![], vec![stored(ResourceType::Microbes, 1)]),
            choice(
                vec![stored(ResourceType::Microbes, 2)],
                vec![gain(ResourceType::Temperature, 1)],
            ),
        ])],
        ..project("ghg-producing-bacteria", "GHG Producing Bacteria", 8)
    }
}

pub fn nitrite_reducing_bacteria() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Microbe],
        resource_storage: Some(ResourceType::Microbes),
        behaviors: vec![action_choices(vec![
            choice(vec![], vec![stored(ResourceType::Microbes, 1)]),
            choice(
                vec![stored(ResourceType::Microbes, 3)],
                vec![gain(ResourceType::TerraformRating, 1)],
            ),
        ])],
        ..project("nitrite-reducing-bacteria", "Nitrite Reducing Bacteria", 11)
    }
}

pub fn symbiotic_fungus() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Microbe],
        requirements: vec![CardRequirement::Temperature(Comparison::AtLeast(-14))],
        behaviors: vec![action(
            vec![],
            vec![gain(ResourceType::Microbes, 1).targeting(ConditionTarget::AnyCard)],
        )],
        ..project("symbiotic-fungus", "Symbiotic Fungus", 4)
    }
}

pub fn rover_construction() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building],
        behaviors: vec![on(TriggerCondition::CityPlaced, vec![gain(ResourceType::Credits, 2)])],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("rover-construction", "Rover Construction", 8)
    }
}

pub fn arctic_algae() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Plant],
        requirements: vec![CardRequirement::Temperature(Comparison::AtMost(-12))],
        behaviors: vec![
            auto(vec![gain(ResourceType::Plants, 1)]),
            on(TriggerCondition::OceanPlaced, vec![gain(ResourceType::Plants, 2)]),
        ],
        ..project("arctic-algae", "Arctic Algae", 12)
    }
}

pub fn herbivores() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Animal],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtLeast(8))],
        resource_storage: Some(ResourceType::Animals),
        behaviors: vec![on(
            TriggerCondition::GreeneryPlaced,
            vec![stored(ResourceType::Animals, 1)],
        )],
        victory_points: vec![VictoryPoints::PerStoredResource {
            resource: ResourceType::Animals,
            per: 2,
        }],
        ..project("herbivores", "Herbivores", 12)
    }
}

pub fn pets() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Earth, Tag::Animal],
        resource_storage: Some(ResourceType::Animals),
        behaviors: vec![on(TriggerCondition::CityPlaced, vec![stored(ResourceType::Animals, 1)])],
        victory_points: vec![VictoryPoints::PerStoredResource {
            resource: ResourceType::Animals,
            per: 2,
        }],
        ..project("pets", "Pets", 10)
    }
}

pub fn optimal_aerobraking() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Space],
        behaviors: vec![on(
            TriggerCondition::CardPlayed(Some(Tag::Space)),
            vec![gain(ResourceType::Credits, 2), gain(ResourceType::Heat, 2)],
        )],
        ..project("optimal-aerobraking", "Optimal Aerobraking", 7)
    }
}

pub fn space_station() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Space],
        behaviors: vec![passive(PassiveEffect::CardDiscount { amount: 2, tag: Some(Tag::Space) })],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("space-station", "Space Station", 10)
    }
}

pub fn earth_catapult() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Earth],
        behaviors: vec![passive(PassiveEffect::CardDiscount { amount: 2, tag: None })],
        victory_points: vec![VictoryPoints::Fixed(2)],
        ..project("earth-catapult", "Earth Catapult", 23)
    }
}

pub fn research_outpost() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science, Tag::City, Tag::Building],
        behaviors: vec![
            auto(vec![gain(ResourceType::CityPlacement, 1)]),
            passive(PassiveEffect::CardDiscount { amount: 1, tag: None }),
        ],
        ..project("research-outpost", "Research Outpost", 18)
    }
}

pub fn adaptation_technology() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science],
        behaviors: vec![passive(PassiveEffect::RequirementTolerance { steps: 2 })],
        victory_points: vec![VictoryPoints::Fixed(1)],
        ..project("adaptation-technology", "Adaptation Technology", 12)
    }
}

pub fn local_heat_trapping() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Event],
        behaviors: vec![auto_with_inputs(
            vec![gain(ResourceType::Heat, 5)],
            vec![gain(ResourceType::Plants, 4)],
        )],
        ..project("local-heat-trapping", "Local Heat Trapping", 1)
    }
}

pub fn steelworks() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Building],
        behaviors: vec![action(
            vec![gain(ResourceType::Energy, 4)],
            vec![gain(ResourceType::Steel, 2)],
        )],
        ..project("steelworks", "Steelworks", 15)
    }
}

pub fn water_import() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Event],
        behaviors: vec![action(
            vec![gain(ResourceType::Credits, 12)],
            vec![gain(ResourceType::OceanPlacement, 1)],
        )],
        ..project("water-import", "Water Import From Europa", 25)
    }
}

pub fn small_asteroid() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Space, Tag::Event],
        behaviors: vec![auto(vec![gain(ResourceType::Temperature, 1)])],
        ..project("small-asteroid", "Small Asteroid", 10)
    }
}

pub fn imported_hydrogen() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Earth, Tag::Space, Tag::Event],
        behaviors: vec![auto(vec![
            gain(ResourceType::Plants, 3),
            gain(ResourceType::OceanPlacement, 1),
        ])],
        ..project("imported-hydrogen", "Imported Hydrogen", 16)
    }
}

pub fn imported_nitrogen() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Earth, Tag::Space, Tag::Event],
        behaviors: vec![auto(vec![
            gain(ResourceType::TerraformRating, 1),
            gain(ResourceType::Plants, 4),
        ])],
        ..project("imported-nitrogen", "Imported Nitrogen", 23)
    }
}

pub fn comet() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Space, Tag::Event],
        behaviors: vec![auto(vec![
            gain(ResourceType::Temperature, 1),
            gain(ResourceType::OceanPlacement, 1),
        ])],
        ..project("comet", "Comet", 21)
    }
}

pub fn asteroid_mining() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Jovian, Tag::Space],
        behaviors: vec![auto(vec![gain(ResourceType::TitaniumProduction, 2)])],
        victory_points: vec![VictoryPoints::Fixed(2)],
        ..project("asteroid-mining", "Asteroid Mining", 30)
    }
}

pub fn space_elevator() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Space, Tag::Building],
        behaviors: vec![
            auto(vec![gain(ResourceType::TitaniumProduction, 1)]),
            action(vec![gain(ResourceType::Steel, 1)], vec![gain(ResourceType::Credits, 5)]),
        ],
        victory_points: vec![VictoryPoints::Fixed(2)],
        ..project("space-elevator", "Space Elevator", 27)
    }
}

pub fn insects() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Microbe],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtLeast(6))],
        behaviors: vec![auto(vec![
            gain(ResourceType::PlantsProduction, 1).per_tag(Tag::Plant),
        ])],
        ..project("insects", "Insects", 9)
    }
}

pub fn ganymede_colony() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Jovian, Tag::Space],
        behaviors: vec![auto(vec![gain(ResourceType::TitaniumProduction, 1)])],
        victory_points: vec![VictoryPoints::PerTag { tag: Tag::Jovian, per: 1 }],
        ..project("ganymede-colony", "Ganymede Colony", 31)
    }
}

pub fn breathing_filters() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science],
        requirements: vec![CardRequirement::Oxygen(Comparison::AtLeast(7))],
        victory_points: vec![VictoryPoints::Fixed(2)],
        ..project("breathing-filters", "Breathing Filters", 11)
    }
}

pub fn gene_repair() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Science],
        requirements: vec![CardRequirement::Tags {
            tag: Tag::Science,
            comparison: Comparison::AtLeast(3),
        }],
        behaviors: vec![auto(vec![gain(ResourceType::CreditsProduction, 2)])],
        victory_points: vec![VictoryPoints::Fixed(2)],
        ..project("gene-repair", "Gene Repair", 12)
    }
}

pub fn fueled_generators() -> CardDefinition {
    CardDefinition {
        tags: vec![Tag::Power, Tag::Building],
        behaviors: vec![auto(vec![
            gain(ResourceType::EnergyProduction, 1),
            gain(ResourceType::CreditsProduction, -1),
        ])],
        ..project("fueled-generators", "Fueled Generators", 1)
    }
}
