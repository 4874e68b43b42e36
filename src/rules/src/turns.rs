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

//! Turn advancement within the Action phase.
//!
//! Each player gets two actions per rotation (unlimited in solo play). When
//! a player's budget reaches zero with nothing pending, the turn auto-
//! advances to the next non-passed player in turn order. When exactly one
//! non-passed player remains they receive an unlimited budget; when all have
//! passed, the generation moves to production.

use constants::ACTIONS_PER_TURN;
use core_data::game_primitives::{GamePhase, PlayerId, UNLIMITED_ACTIONS};
use errors::{verify, ErrorCode, Result};
use game_data::game_state::{CurrentTurn, GameState};
use tracing::debug;

use crate::{mutations, production};

/// Consumes one action from the current player's budget, auto-advancing the
/// turn when the budget is exhausted and nothing is pending.
pub fn consume_action(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    let Some(turn) = game.current_turn else {
        return Ok(());
    };
    verify!(
        turn.player_id == player_id,
        ErrorCode::Internal,
        "Consuming an action out of turn"
    );
    if turn.actions_remaining == UNLIMITED_ACTIONS {
        return Ok(());
    }
    let remaining = (turn.actions_remaining - 1).max(0);
    game.current_turn = Some(CurrentTurn { player_id, actions_remaining: remaining });
    maybe_advance(game, player_id)
}

/// Advances the turn if the player's budget is exhausted and no sticky
/// selection is pending. Called after actions and after selections resolve.
pub fn maybe_advance(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    let Some(turn) = game.current_turn else {
        return Ok(());
    };
    if turn.player_id != player_id || turn.actions_remaining != 0 {
        return Ok(());
    }
    if game.player(player_id)?.has_blocking_selection() {
        return Ok(());
    }
    advance_turn(game)
}

/// The player skips, forfeiting their remaining actions.
pub fn skip(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    verify!(
        game.is_current_turn(player_id),
        ErrorCode::NotYourTurn,
        "Only the current player may skip"
    );
    debug!(?player_id, "Player skipped");
    game.current_turn = Some(CurrentTurn { player_id, actions_remaining: 0 });
    advance_turn(game)
}

/// The player passes for the rest of the generation.
pub fn pass(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    verify!(
        game.is_current_turn(player_id),
        ErrorCode::NotYourTurn,
        "Only the current player may pass"
    );
    debug!(?player_id, "Player passed");
    game.player_mut(player_id)?.has_passed = true;
    advance_turn(game)
}

/// Moves the turn to the next non-passed player after the current one. The
/// last remaining non-passed player receives an unlimited budget; if
/// everyone has passed, the production phase begins.
pub fn advance_turn(game: &mut GameState) -> Result<()> {
    let order = game.players_in_turn_order();
    let non_passed: Vec<PlayerId> = order
        .iter()
        .copied()
        .filter(|id| game.players.get(id).map(|p| !p.has_passed).unwrap_or(false))
        .collect();

    if non_passed.is_empty() {
        game.current_turn = None;
        return production::start(game);
    }

    let current = game.current_player_id();
    let start = current
        .and_then(|id| order.iter().position(|p| *p == id))
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut next = None;
    for offset in 0..order.len() {
        let candidate = order[(start + offset) % order.len()];
        if non_passed.contains(&candidate) {
            next = Some(candidate);
            break;
        }
    }
    let Some(next) = next else {
        game.current_turn = None;
        return production::start(game);
    };

    let actions_remaining = if non_passed.len() == 1 || game.is_solo() {
        UNLIMITED_ACTIONS
    } else {
        ACTIONS_PER_TURN
    };
    debug!(?next, actions_remaining, "Turn advanced");
    start_turn(game, next, actions_remaining)
}

/// Hands the turn to a player with the given budget, resetting their
/// per-turn action usage.
pub fn start_turn(
    game: &mut GameState,
    player_id: PlayerId,
    actions_remaining: i32,
) -> Result<()> {
    game.current_turn = Some(CurrentTurn { player_id, actions_remaining });
    for action in &mut game.player_mut(player_id)?.actions {
        action.times_used_this_turn = 0;
    }
    Ok(())
}

/// Enters the Action phase at the top of the turn order, resetting
/// per-generation action usage for every player.
pub fn enter_action_phase(game: &mut GameState) -> Result<()> {
    for player in game.players.values_mut() {
        for action in &mut player.actions {
            action.times_used_this_generation = 0;
            action.times_used_this_turn = 0;
        }
    }
    mutations::set_phase(game, GamePhase::Action);

    let order = game.players_in_turn_order();
    let Some(first) = order.first().copied() else {
        return Ok(());
    };
    let budget = if game.is_solo() { UNLIMITED_ACTIONS } else { ACTIONS_PER_TURN };
    start_turn(game, first, budget)
}
