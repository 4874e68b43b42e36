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

//! Standard project handlers and the two resource conversions. Each
//! validates affordability and placement feasibility, deducts the cost,
//! applies the project's effect, and consumes an action.

use std::collections::BTreeMap;

use constants::{
    AQUIFER_COST, ASTEROID_COST, CITY_COST, GREENERY_COST, POWER_PLANT_COST,
    SELL_PATENT_REWARD,
};
use core_data::game_primitives::{
    CardId, GameStatus, PlayerId, ResourceType, StandardProject, TileType,
};
use errors::{fail, verify, ErrorCode, Result};
use game_data::game_state::GameState;
use game_data::selection_data::{
    CardSelectionSource, PendingCardSelection, QueuedTile, SelectionState, TilePlacementSource,
};
use rules::{mutations, queries, turns};
use tracing::instrument;

use crate::has_legal_hex;

fn pay_credits(game: &mut GameState, player_id: PlayerId, cost: i32) -> Result<()> {
    verify!(
        game.player(player_id)?.resources.credits >= cost,
        ErrorCode::InsufficientCredits,
        "This project costs {cost}"
    );
    mutations::add_resources(game, player_id, BTreeMap::from([(ResourceType::Credits, -cost)]))
}

fn queue_tile(
    game: &mut GameState,
    player_id: PlayerId,
    tile_type: TileType,
    source: TilePlacementSource,
) -> Result<()> {
    mutations::queue_tiles(game, player_id, vec![QueuedTile { tile_type, source }])
}

#[instrument(skip(game))]
pub fn build_city(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    verify!(
        has_legal_hex(game, TileType::City, player_id),
        ErrorCode::PreconditionFailed,
        "No legal city placement"
    );
    pay_credits(game, player_id, CITY_COST)?;
    mutations::add_production(
        game,
        player_id,
        BTreeMap::from([(ResourceType::Credits, 1)]),
    )?;
    queue_tile(
        game,
        player_id,
        TileType::City,
        TilePlacementSource::StandardProject(StandardProject::City),
    )?;
    turns::consume_action(game, player_id)
}

#[instrument(skip(game))]
pub fn build_aquifer(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    verify!(
        !game.parameters.oceans_maxed(game.settings.ocean_target),
        ErrorCode::PreconditionFailed,
        "All oceans have been placed"
    );
    verify!(
        has_legal_hex(game, TileType::Ocean, player_id),
        ErrorCode::PreconditionFailed,
        "No legal ocean placement"
    );
    pay_credits(game, player_id, AQUIFER_COST)?;
    queue_tile(
        game,
        player_id,
        TileType::Ocean,
        TilePlacementSource::StandardProject(StandardProject::Aquifer),
    )?;
    turns::consume_action(game, player_id)
}

#[instrument(skip(game))]
pub fn build_power_plant(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    pay_credits(game, player_id, POWER_PLANT_COST)?;
    mutations::add_production(
        game,
        player_id,
        BTreeMap::from([(ResourceType::Energy, 1)]),
    )?;
    turns::consume_action(game, player_id)
}

#[instrument(skip(game))]
pub fn launch_asteroid(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    verify!(
        !game.parameters.temperature_maxed(game.settings.temperature_target),
        ErrorCode::PreconditionFailed,
        "Temperature is already at its target"
    );
    pay_credits(game, player_id, ASTEROID_COST)?;
    let applied = mutations::increase_temperature(game, 1)?;
    mutations::gain_terraform_rating(game, player_id, applied)?;
    turns::consume_action(game, player_id)
}

#[instrument(skip(game))]
pub fn plant_greenery(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    verify!(
        has_legal_hex(game, TileType::Greenery, player_id),
        ErrorCode::PreconditionFailed,
        "No legal greenery placement"
    );
    pay_credits(game, player_id, GREENERY_COST)?;
    queue_tile(
        game,
        player_id,
        TileType::Greenery,
        TilePlacementSource::StandardProject(StandardProject::Greenery),
    )?;
    turns::consume_action(game, player_id)
}

/// Converts plants to a queued greenery. The base cost of eight plants may
/// be reduced by registered conversion discounts.
#[instrument(skip(game))]
pub fn convert_plants_to_greenery(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    verify!(
        has_legal_hex(game, TileType::Greenery, player_id),
        ErrorCode::PreconditionFailed,
        "No legal greenery placement"
    );
    let cost = queries::greenery_plant_cost(game.player(player_id)?);
    verify!(
        game.player(player_id)?.resources.plants >= cost,
        ErrorCode::InsufficientResources,
        "Converting requires {cost} plants"
    );
    mutations::add_resources(game, player_id, BTreeMap::from([(ResourceType::Plants, -cost)]))?;
    queue_tile(game, player_id, TileType::Greenery, TilePlacementSource::Conversion)?;
    turns::consume_action(game, player_id)
}

/// Converts heat into one temperature step. Rejected outright when the
/// temperature is at its target; the heat is not consumed.
#[instrument(skip(game))]
pub fn convert_heat_to_temperature(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    verify!(
        !game.parameters.temperature_maxed(game.settings.temperature_target),
        ErrorCode::PreconditionFailed,
        "Temperature is already at its target"
    );
    let cost = queries::heat_conversion_cost(game.player(player_id)?);
    verify!(
        game.player(player_id)?.resources.heat >= cost,
        ErrorCode::InsufficientResources,
        "Converting requires {cost} heat"
    );
    mutations::add_resources(game, player_id, BTreeMap::from([(ResourceType::Heat, -cost)]))?;
    let applied = mutations::increase_temperature(game, 1)?;
    mutations::gain_terraform_rating(game, player_id, applied)?;
    turns::consume_action(game, player_id)
}

/// Phase one of selling patents: opens a card selection over the hand.
/// Does not consume an action; consumption happens at confirmation when at
/// least one card is sold.
#[instrument(skip(game))]
pub fn sell_patents(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    let player = game.player(player_id)?;
    verify!(!player.hand.is_empty(), ErrorCode::PreconditionFailed, "Hand is empty");

    let hand = player.hand.clone();
    let max_cards = hand.len();
    game.player_mut(player_id)?.selection =
        SelectionState::PendingCardSelection(PendingCardSelection {
            available_cards: hand,
            cost_per_card: 0,
            reward_per_card: SELL_PATENT_REWARD,
            min_cards: 0,
            max_cards,
            source: CardSelectionSource::SellPatents,
        });
    Ok(())
}

/// Phase two of selling patents: awards credits and discards the sold
/// cards. Consumes an action only when at least one card was sold.
#[instrument(skip(game))]
pub fn confirm_sell_patents(
    game: &mut GameState,
    player_id: PlayerId,
    card_ids: &[CardId],
) -> Result<()> {
    verify!(
        game.status == GameStatus::Active,
        ErrorCode::WrongPhase,
        "Game is not active"
    );
    let pending = match &game.player(player_id)?.selection {
        SelectionState::PendingCardSelection(pending)
            if pending.source == CardSelectionSource::SellPatents =>
        {
            pending.clone()
        }
        _ => fail!(ErrorCode::PreconditionFailed, "No sell-patents selection"),
    };
    verify!(
        card_ids.len() <= pending.max_cards,
        ErrorCode::InvalidArgument,
        "Cannot sell more cards than are in hand"
    );
    let mut seen = std::collections::BTreeSet::new();
    for card_id in card_ids {
        verify!(
            pending.available_cards.contains(card_id),
            ErrorCode::InvalidArgument,
            "Card {card_id} is not available to sell"
        );
        verify!(
            seen.insert(card_id.clone()),
            ErrorCode::InvalidArgument,
            "Card {card_id} selected twice"
        );
    }

    let sold = card_ids.len() as i32;
    if sold > 0 {
        mutations::remove_cards_from_hand(game, player_id, card_ids)?;
        mutations::discard_cards(game, card_ids.to_vec());
        mutations::add_resources(
            game,
            player_id,
            BTreeMap::from([(ResourceType::Credits, sold * pending.reward_per_card)]),
        )?;
    }
    game.player_mut(player_id)?.selection = SelectionState::None;

    if sold > 0 {
        turns::consume_action(game, player_id)
    } else {
        turns::maybe_advance(game, player_id)
    }
}
