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

use core_data::game_primitives::{GamePhase, GameStatus, UNLIMITED_ACTIONS};
use errors::ErrorCode;
use game_data::command_data::UserCommand;
use game_data::selection_data::SelectionState;
use test_utils::TestGame;

#[test]
fn started_game_enters_action_phase() {
    let game = TestGame::started(2);
    assert_eq!(game.game.status, GameStatus::Active);
    assert_eq!(game.game.phase, GamePhase::Action);
    let turn = game.game.current_turn.unwrap();
    assert_eq!(turn.player_id, game.game.turn_order[0]);
    assert_eq!(turn.actions_remaining, 2);
}

#[test]
fn solo_game_gets_unlimited_actions() {
    let game = TestGame::started(1);
    let turn = game.game.current_turn.unwrap();
    assert_eq!(turn.actions_remaining, UNLIMITED_ACTIONS);
}

#[test]
fn skip_advances_to_next_player() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    let second = 1 - first;

    game.act(first, UserCommand::SkipAction).unwrap();
    let turn = game.game.current_turn.unwrap();
    assert_eq!(turn.player_id, game.players[second]);
    assert_eq!(turn.actions_remaining, 2);
}

#[test]
fn pass_grants_last_player_unlimited_actions() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    let second = 1 - first;

    game.act(first, UserCommand::SkipAction).unwrap();
    game.act(second, UserCommand::Pass).unwrap();

    // The only non-passed player plays out the generation unlimited.
    let turn = game.game.current_turn.unwrap();
    assert_eq!(turn.player_id, game.players[first]);
    assert_eq!(turn.actions_remaining, UNLIMITED_ACTIONS);

    game.act(first, UserCommand::Pass).unwrap();
    assert_eq!(game.game.phase, GamePhase::ProductionAndCardDraw);
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut game = TestGame::started(2);
    let waiting = 1 - game.current_player_index().unwrap();
    let error = game.act(waiting, UserCommand::SkipAction).unwrap_err();
    assert_eq!(error.code, ErrorCode::NotYourTurn);
}

#[test]
fn passed_player_cannot_act_again() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    game.act(first, UserCommand::Pass).unwrap();
    let error = game.act(first, UserCommand::SkipAction).unwrap_err();
    assert_eq!(error.code, ErrorCode::AlreadyPassed);
}

#[test]
fn production_applies_income_and_energy_conversion() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    let second = 1 - first;

    {
        let player = game.player_mut(first);
        player.production.credits = 2;
        player.production.steel = 1;
        player.production.energy = 2;
        player.resources.energy = 3;
    }
    let credits_before = game.player(first).resources.credits;

    game.act(first, UserCommand::Pass).unwrap();
    game.act(second, UserCommand::Pass).unwrap();
    assert_eq!(game.game.phase, GamePhase::ProductionAndCardDraw);

    let player = game.player(first);
    // Income is production plus terraform rating.
    assert_eq!(player.resources.credits, credits_before + 2 + 20);
    assert_eq!(player.resources.steel, 1);
    // Leftover energy became heat; new energy arrived from production.
    assert_eq!(player.resources.energy, 2);
    assert_eq!(player.resources.heat, 3);
    assert!(!player.has_passed);

    match &player.selection {
        SelectionState::ProductionPhase(pending) => {
            assert_eq!(pending.energy_converted, 3);
            assert_eq!(pending.credits_income, 22);
            assert_eq!(pending.available_cards.len(), 4);
            assert!(!pending.selection_complete);
        }
        other => panic!("Expected production selection, got {other:?}"),
    }
}

#[test]
fn generation_advances_after_production_confirms() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    let second = 1 - first;

    game.act(first, UserCommand::Pass).unwrap();
    game.act(second, UserCommand::Pass).unwrap();
    assert_eq!(game.game.generation, 2);

    game.act(first, UserCommand::ConfirmProductionCards { card_ids: vec![] }).unwrap();
    assert_eq!(game.game.phase, GamePhase::ProductionAndCardDraw);
    game.act(second, UserCommand::ConfirmProductionCards { card_ids: vec![] }).unwrap();

    assert_eq!(game.game.phase, GamePhase::Action);
    let turn = game.game.current_turn.unwrap();
    assert_eq!(turn.player_id, game.game.turn_order[0]);
    assert_eq!(turn.actions_remaining, 2);
    assert!(game.game.players.values().all(|p| p.selection.is_none()));
}

#[test]
fn production_buy_deducts_credits() {
    let mut game = TestGame::started(1);
    game.act(0, UserCommand::Pass).unwrap();

    let available = match &game.player(0).selection {
        SelectionState::ProductionPhase(pending) => pending.available_cards.clone(),
        other => panic!("Expected production selection, got {other:?}"),
    };
    let credits_before = game.player(0).resources.credits;
    let buy = vec![available[0].clone(), available[1].clone()];
    game.act(0, UserCommand::ConfirmProductionCards { card_ids: buy.clone() }).unwrap();

    assert_eq!(game.player(0).resources.credits, credits_before - 6);
    assert!(buy.iter().all(|c| game.player(0).hand.contains(c)));
}
