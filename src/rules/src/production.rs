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

//! The production and card-draw phase at the end of each generation.
//!
//! For each player: leftover energy converts to heat, production is added
//! to resources, credit income includes terraform rating, and four project
//! cards are dealt into a buy-any-subset selection. When every player has
//! confirmed their buys the game either starts the next generation or — if
//! all global parameter targets are met — finishes and computes final
//! scores.

use std::collections::BTreeMap;

use constants::{CARD_BUY_COST, PRODUCTION_PHASE_CARD_DRAW};
use core_data::game_primitives::{CardId, GamePhase, GameStatus, PlayerId, ResourceType};
use errors::{fail, verify, ErrorCode, Result};
use game_data::game_state::GameState;
use game_data::selection_data::{ProductionPhase, SelectionState};
use tracing::{debug, instrument};

use crate::{mutations, scoring, turns};

/// Transitions the game into the production phase and processes every
/// player.
#[instrument(skip(game))]
pub fn start(game: &mut GameState) -> Result<()> {
    debug!(generation = game.generation, "Starting production phase");
    game.current_turn = None;
    mutations::set_phase(game, GamePhase::ProductionAndCardDraw);

    for player_id in game.players_in_turn_order() {
        run_for_player(game, player_id)?;
    }

    game.generation += 1;
    Ok(())
}

fn run_for_player(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    let (before, production, rating, energy) = {
        let player = game.player(player_id)?;
        (
            player.resources,
            player.production,
            player.terraform_rating,
            player.resources.energy,
        )
    };

    let credits_income = production.credits + rating;
    let mut deltas: BTreeMap<ResourceType, i32> = BTreeMap::new();
    deltas.insert(ResourceType::Credits, credits_income);
    deltas.insert(ResourceType::Steel, production.steel);
    deltas.insert(ResourceType::Titanium, production.titanium);
    deltas.insert(ResourceType::Plants, production.plants);
    // Leftover energy becomes heat before new energy production arrives.
    deltas.insert(ResourceType::Energy, production.energy - energy);
    deltas.insert(ResourceType::Heat, production.heat + energy);
    mutations::add_resources(game, player_id, deltas)?;

    let available_cards = mutations::reveal_cards(game, PRODUCTION_PHASE_CARD_DRAW)?;
    let player = game.player_mut(player_id)?;
    player.has_passed = false;
    let after = player.resources;
    player.selection = SelectionState::ProductionPhase(ProductionPhase {
        available_cards,
        selection_complete: false,
        before_resources: before,
        after_resources: after,
        energy_converted: energy,
        credits_income,
    });
    Ok(())
}

/// Confirms a player's production-phase card buys. When the last player
/// confirms, the next generation begins (or the game finishes).
pub fn confirm_cards(game: &mut GameState, player_id: PlayerId, card_ids: &[CardId]) -> Result<()> {
    verify!(
        game.phase == GamePhase::ProductionAndCardDraw,
        ErrorCode::WrongPhase,
        "Not in the production phase"
    );

    let pending = match &game.player(player_id)?.selection {
        SelectionState::ProductionPhase(pending) => pending.clone(),
        _ => fail!(ErrorCode::PreconditionFailed, "No production selection"),
    };
    verify!(
        !pending.selection_complete,
        ErrorCode::Conflict,
        "Production cards already confirmed"
    );
    let mut seen = std::collections::BTreeSet::new();
    for card_id in card_ids {
        verify!(
            pending.available_cards.contains(card_id),
            ErrorCode::InvalidArgument,
            "Card {card_id} was not dealt this generation"
        );
        verify!(
            seen.insert(card_id.clone()),
            ErrorCode::InvalidArgument,
            "Card {card_id} selected twice"
        );
    }
    let cost = CARD_BUY_COST * card_ids.len() as i32;
    verify!(
        game.player(player_id)?.resources.credits >= cost,
        ErrorCode::InsufficientCredits,
        "Buying {} cards costs {cost}",
        card_ids.len()
    );

    if cost > 0 {
        mutations::add_resources(
            game,
            player_id,
            BTreeMap::from([(ResourceType::Credits, -cost)]),
        )?;
    }
    mutations::add_cards_to_hand(game, player_id, card_ids.to_vec())?;
    let dropped: Vec<CardId> = pending
        .available_cards
        .iter()
        .filter(|c| !card_ids.contains(c))
        .cloned()
        .collect();
    mutations::discard_cards(game, dropped);

    if let SelectionState::ProductionPhase(pending) =
        &mut game.player_mut(player_id)?.selection
    {
        pending.selection_complete = true;
    }

    let all_complete = game.players.values().all(|p| match &p.selection {
        SelectionState::ProductionPhase(pending) => pending.selection_complete,
        _ => true,
    });
    if all_complete {
        finish_generation(game)?;
    }
    Ok(())
}

/// Ends the production phase: clears selections, then either finishes the
/// game (all parameter targets met) or starts the next generation's Action
/// phase.
fn finish_generation(game: &mut GameState) -> Result<()> {
    for player in game.players.values_mut() {
        player.selection = SelectionState::None;
    }

    let settings = &game.settings;
    if game.parameters.all_targets_met(
        settings.temperature_target,
        settings.oxygen_target,
        settings.ocean_target,
    ) {
        debug!("All global parameters at target, game over");
        game.status = GameStatus::Finished;
        game.current_turn = None;
        game.final_scores = Some(scoring::final_scores(game));
        mutations::set_phase(game, GamePhase::Finished);
        return Ok(());
    }

    turns::enter_action_phase(game)
}
