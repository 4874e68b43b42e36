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

//! Playing cards, activating card actions, and confirming card draws.

use core_data::game_primitives::{CardId, CardType, GameStatus, PlayerId};
use errors::{fail, verify, ErrorCode, Result};
use game_data::command_data::Payment;
use game_data::game_state::GameState;
use rules::behaviors::{self, BehaviorContext};
use rules::{card_draw, mutations, payment, queries, requirements, turns};
use tracing::instrument;

/// Plays a card from hand: validates requirements and payment, moves the
/// card to the played area, deducts the payment, applies behaviors, and
/// consumes an action.
#[instrument(skip(game, pay))]
pub fn play_card(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
    pay: &Payment,
) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    let definition = cards::get(card_id)?;
    verify!(
        definition.card_type == CardType::Project,
        ErrorCode::InvalidArgument,
        "{card_id} is not a project card"
    );
    {
        let player = game.player(player_id)?;
        verify!(
            player.has_card_in_hand(card_id),
            ErrorCode::Conflict,
            "Card {card_id} is not in hand"
        );
        requirements::check(game, player_id, definition)?;
        payment::validate(player, definition, pay)?;
    }

    mutations::move_card_to_played(game, player_id, card_id)?;
    mutations::add_resources(game, player_id, payment::deltas(pay))?;
    behaviors::apply_card_behaviors(game, player_id, card_id)?;
    turns::consume_action(game, player_id)
}

/// Activates a manual card action. If the action opens a pending card
/// draw, usage counters and action consumption are deferred to the
/// confirmation; otherwise they apply immediately.
#[instrument(skip(game))]
pub fn use_card_action(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
    behavior_index: usize,
    choice_index: Option<usize>,
    card_storage_target: Option<CardId>,
) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    let definition = cards::get(card_id)?;
    let Some(behavior) = definition.behaviors.get(behavior_index) else {
        fail!(ErrorCode::InvalidArgument, "No behavior {behavior_index} on {card_id}");
    };
    verify!(behavior.is_manual(), ErrorCode::InvalidArgument, "Behavior is not an action");
    {
        let player = game.player(player_id)?;
        let Some(action) = player.card_action(card_id, behavior_index) else {
            fail!(ErrorCode::Conflict, "Action is not registered for this player");
        };
        verify!(
            action.times_used_this_generation == 0,
            ErrorCode::Conflict,
            "Action already used this generation"
        );
    }

    let (inputs, outputs) = if behavior.choices.is_empty() {
        (behavior.inputs.clone(), behavior.outputs.clone())
    } else {
        let Some(index) = choice_index else {
            fail!(ErrorCode::InvalidArgument, "This action requires a choice");
        };
        let Some(choice) = behavior.choices.get(index) else {
            fail!(ErrorCode::InvalidArgument, "Invalid choice index {index}");
        };
        (choice.inputs.clone(), choice.outputs.clone())
    };

    let context = BehaviorContext {
        player_id,
        card_id: card_id.clone(),
        behavior_index,
        storage_target: card_storage_target,
        defer_consumption: true,
    };
    let outcome = behaviors::apply_behavior(game, &context, &inputs, &outputs)?;

    if outcome.created_card_draw {
        // Consumption and usage counters land in the confirm handler.
        return Ok(());
    }

    if let Some(action) = game.player_mut(player_id)?.card_action_mut(card_id, behavior_index) {
        action.times_used_this_generation += 1;
        action.times_used_this_turn += 1;
    }
    turns::consume_action(game, player_id)
}

/// Confirms a pending card draw selection.
#[instrument(skip(game))]
pub fn confirm_card_draw(
    game: &mut GameState,
    player_id: PlayerId,
    cards_to_take: &[CardId],
    cards_to_buy: &[CardId],
) -> Result<()> {
    verify!(
        game.status == GameStatus::Active,
        ErrorCode::WrongPhase,
        "Game is not active"
    );
    card_draw::confirm(game, player_id, cards_to_take, cards_to_buy)
}
