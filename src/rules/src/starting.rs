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

//! Game start: deck construction, the initial deal, and starting card
//! selection.

use std::collections::BTreeMap;

use constants::{CARD_BUY_COST, STARTING_HAND_CORPORATIONS, STARTING_HAND_PROJECTS};
use core_data::game_primitives::{CardId, GamePhase, GameStatus, PlayerId, ResourceType};
use errors::{fail, verify, ErrorCode, Result};
use game_data::game_state::{CurrentTurn, GameState};
use game_data::selection_data::{SelectStartingCards, SelectionState};
use tracing::{debug, instrument};

use crate::{behaviors, mutations, turns};

/// Starts a lobby game: builds and shuffles the decks, randomizes turn
/// order, and deals each player ten projects and two corporations.
#[instrument(skip(game))]
pub fn start_game(game: &mut GameState) -> Result<()> {
    verify!(game.status == GameStatus::Lobby, ErrorCode::WrongPhase, "Game already started");
    verify!(!game.players.is_empty(), ErrorCode::PreconditionFailed, "No players have joined");

    let mut projects = cards::project_ids(&game.settings.card_packs);
    let mut corporations = cards::corporation_ids(&game.settings.card_packs);
    game.shuffle(&mut projects);
    game.shuffle(&mut corporations);
    game.deck.project_deck = projects.into();
    game.deck.corporation_deck = corporations.into();

    let mut order: Vec<PlayerId> = game.players.keys().copied().collect();
    game.shuffle(&mut order);
    game.turn_order = order.clone();
    debug!(?order, "Turn order randomized");

    game.status = GameStatus::Active;
    for player_id in order.clone() {
        let available_cards = mutations::reveal_cards(game, STARTING_HAND_PROJECTS)?;
        let mut available_corporations = Vec::with_capacity(STARTING_HAND_CORPORATIONS);
        for _ in 0..STARTING_HAND_CORPORATIONS {
            if let Some(corporation) = game.deck.internal_draw_corporation() {
                available_corporations.push(corporation);
            }
        }
        game.player_mut(player_id)?.selection =
            SelectionState::SelectStartingCards(SelectStartingCards {
                available_cards,
                available_corporations,
            });
    }

    mutations::set_phase(game, GamePhase::StartingCardSelection);
    game.current_turn = Some(CurrentTurn { player_id: order[0], actions_remaining: 0 });
    Ok(())
}

/// Applies a player's starting selection: assigns the corporation, grants
/// its starting resources and production, classifies its behaviors, and
/// buys the kept project cards at the standard rate.
pub fn select_starting_cards(
    game: &mut GameState,
    player_id: PlayerId,
    card_ids: &[CardId],
    corporation_id: &CardId,
) -> Result<()> {
    let selection = match &game.player(player_id)?.selection {
        SelectionState::SelectStartingCards(selection) => selection.clone(),
        _ => fail!(ErrorCode::PreconditionFailed, "No starting card selection"),
    };
    verify!(
        game.player(player_id)?.corporation_id.is_none(),
        ErrorCode::Conflict,
        "Corporation already selected"
    );
    verify!(
        selection.available_corporations.contains(corporation_id),
        ErrorCode::InvalidArgument,
        "Corporation {corporation_id} was not offered"
    );
    for card_id in card_ids {
        verify!(
            selection.available_cards.contains(card_id),
            ErrorCode::InvalidArgument,
            "Card {card_id} was not offered"
        );
    }
    let definition = cards::get(corporation_id)?;
    verify!(
        definition.is_corporation(),
        ErrorCode::InvalidArgument,
        "{corporation_id} is not a corporation"
    );

    let card_cost = CARD_BUY_COST * card_ids.len() as i32;
    verify!(
        definition.starting_credits >= card_cost,
        ErrorCode::InsufficientCredits,
        "Starting credits do not cover {} cards",
        card_ids.len()
    );

    assign_corporation(game, player_id, corporation_id)?;

    if card_cost > 0 {
        mutations::add_resources(
            game,
            player_id,
            BTreeMap::from([(ResourceType::Credits, -card_cost)]),
        )?;
    }
    mutations::add_cards_to_hand(game, player_id, card_ids.to_vec())?;
    mutations::discard_cards(
        game,
        selection
            .available_cards
            .iter()
            .filter(|c| !card_ids.contains(c))
            .cloned()
            .collect::<Vec<_>>(),
    );

    game.player_mut(player_id)?.selection = SelectionState::None;
    check_selection_complete(game)
}

/// Grants a corporation's starting credits, resources and production, and
/// classifies its behaviors (effects, actions, conditional listeners).
/// Also used by the admin `set-corporation` command.
pub fn assign_corporation(
    game: &mut GameState,
    player_id: PlayerId,
    corporation_id: &CardId,
) -> Result<()> {
    let definition = cards::get(corporation_id)?;
    verify!(
        definition.is_corporation(),
        ErrorCode::InvalidArgument,
        "{corporation_id} is not a corporation"
    );

    game.player_mut(player_id)?.corporation_id = Some(corporation_id.clone());

    let mut deltas: BTreeMap<ResourceType, i32> = BTreeMap::new();
    deltas.insert(ResourceType::Credits, definition.starting_credits);
    for quantity in &definition.starting_resources {
        *deltas.entry(quantity.resource).or_insert(0) += quantity.amount;
    }
    mutations::add_resources(game, player_id, deltas)?;

    let production = definition
        .starting_production
        .iter()
        .map(|q| (q.resource, q.amount))
        .collect::<BTreeMap<_, _>>();
    mutations::add_production(game, player_id, production)?;

    behaviors::apply_card_behaviors(game, player_id, corporation_id)?;
    debug!(?player_id, %corporation_id, "Corporation assigned");
    Ok(())
}

/// Admin override: forces a corporation onto a player, discarding any open
/// starting selection, then checks whether the game can move on.
pub fn admin_set_corporation(
    game: &mut GameState,
    player_id: PlayerId,
    corporation_id: &CardId,
) -> Result<()> {
    assign_corporation(game, player_id, corporation_id)?;
    let player = game.player_mut(player_id)?;
    if let SelectionState::SelectStartingCards(selection) = player.selection.clone() {
        player.selection = SelectionState::None;
        mutations::discard_cards(game, selection.available_cards);
    }
    check_selection_complete(game)
}

/// When every player has a corporation, the game moves to the Action phase.
fn check_selection_complete(game: &mut GameState) -> Result<()> {
    if game.players.values().all(|p| p.corporation_id.is_some()) {
        debug!("All starting selections complete, entering action phase");
        turns::enter_action_phase(game)?;
    }
    Ok(())
}
