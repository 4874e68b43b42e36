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

//! Pure queries over game state: effective costs, registered-effect sums,
//! and the precondition checks shared by action handlers.

use constants::{
    HEAT_PER_TEMPERATURE_STEP, PLANTS_PER_GREENERY, OCEAN_ADJACENCY_CREDITS,
};
use core_data::game_primitives::{
    GamePhase, GameStatus, PlayerId, ResourceType, Tag, TileType,
};
use errors::{verify, ErrorCode, Result};
use game_data::behavior_data::PassiveEffect;
use game_data::card_definition::CardDefinition;
use game_data::game_state::GameState;
use game_data::player_state::PlayerState;

/// A card's cost after registered discounts, floored at zero.
pub fn effective_card_cost(player: &PlayerState, definition: &CardDefinition) -> i32 {
    let discount: i32 = player
        .passive_effects()
        .filter_map(|effect| match effect {
            PassiveEffect::CardDiscount { amount, tag: None } => Some(*amount),
            PassiveEffect::CardDiscount { amount, tag: Some(tag) }
                if definition.has_tag(*tag) =>
            {
                Some(*amount)
            }
            _ => None,
        })
        .sum();
    (definition.cost - discount).max(0)
}

/// Global-parameter requirement tolerance granted by registered effects.
pub fn requirement_tolerance(player: &PlayerState) -> i32 {
    player
        .passive_effects()
        .filter_map(|effect| match effect {
            PassiveEffect::RequirementTolerance { steps } => Some(*steps),
            _ => None,
        })
        .sum()
}

fn conversion_discount(player: &PlayerState, resource: ResourceType) -> i32 {
    player
        .passive_effects()
        .filter_map(|effect| match effect {
            PassiveEffect::ConversionDiscount { resource: r, amount } if *r == resource => {
                Some(*amount)
            }
            _ => None,
        })
        .sum()
}

/// Plants required to convert into a greenery, after discounts.
pub fn greenery_plant_cost(player: &PlayerState) -> i32 {
    (PLANTS_PER_GREENERY - conversion_discount(player, ResourceType::Plants)).max(1)
}

/// Heat required to raise the temperature one step, after discounts.
pub fn heat_conversion_cost(player: &PlayerState) -> i32 {
    (HEAT_PER_TEMPERATURE_STEP - conversion_discount(player, ResourceType::Heat)).max(1)
}

/// Credits gained per adjacent ocean when placing a tile: the base two plus
/// any registered bonus (Lakefront Resorts grants a flat +2, making 4 per
/// ocean).
pub fn ocean_adjacency_credit(player: &PlayerState) -> i32 {
    let bonus: i32 = player
        .passive_effects()
        .filter_map(|effect| match effect {
            PassiveEffect::OceanAdjacencyBonus { amount } => Some(*amount),
            _ => None,
        })
        .sum();
    OCEAN_ADJACENCY_CREDITS + bonus
}

/// Tags on the player's corporation card, if one is selected.
pub fn corporation_tags(player: &PlayerState) -> Vec<Tag> {
    player
        .corporation_id
        .as_ref()
        .and_then(|id| cards::get(id).ok())
        .map(|d| d.tags.clone())
        .unwrap_or_default()
}

/// Played tags of the given type, including the corporation card's own tags.
pub fn tag_count(player: &PlayerState, tag: Tag) -> i32 {
    player.tag_count(tag, &corporation_tags(player))
}

pub fn cities_owned(game: &GameState, player_id: PlayerId) -> i32 {
    game.board.count_owned(TileType::City, player_id) as i32
}

pub fn greeneries_owned(game: &GameState, player_id: PlayerId) -> i32 {
    game.board.count_owned(TileType::Greenery, player_id) as i32
}

/// The maximum credit value a player could muster toward a card's cost,
/// counting steel/titanium where the card's tags allow and all registered
/// substitutes. Used by the entity-state cache for affordability.
pub fn max_payment_value(player: &PlayerState, definition: &CardDefinition) -> i32 {
    let mut value = player.resources.credits;
    if definition.has_tag(Tag::Building) {
        value += player.resources.steel * constants::STEEL_VALUE;
    }
    if definition.has_tag(Tag::Space) {
        value += player.resources.titanium * constants::TITANIUM_VALUE;
    }
    for substitute in &player.payment_substitutes {
        value += player.resources.get(substitute.resource) * substitute.conversion_rate;
    }
    value
}

/// Verifies the game is active and in the Action phase.
pub fn verify_action_phase(game: &GameState) -> Result<()> {
    verify!(
        game.status == GameStatus::Active,
        ErrorCode::WrongPhase,
        "Game is not active"
    );
    verify!(
        game.phase == GamePhase::Action,
        ErrorCode::WrongPhase,
        "Not in the action phase"
    );
    Ok(())
}

/// Verifies the player holds the current turn and is free of blocking
/// selections. The standard preamble for action-consuming handlers.
pub fn verify_can_act(game: &GameState, player_id: PlayerId) -> Result<()> {
    verify_action_phase(game)?;
    let player = game.player(player_id)?;
    verify!(!player.has_passed, ErrorCode::AlreadyPassed, "Player has already passed");
    verify!(
        game.is_current_turn(player_id),
        ErrorCode::NotYourTurn,
        "It is not this player's turn"
    );
    verify!(
        !player.has_blocking_selection(),
        ErrorCode::PreconditionFailed,
        "A pending selection must be resolved first"
    );
    Ok(())
}
