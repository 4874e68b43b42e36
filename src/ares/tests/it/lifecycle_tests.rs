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

use actions::lifecycle;
use core_data::game_primitives::{GamePhase, GameStatus};
use errors::ErrorCode;
use game_data::command_data::UserCommand;
use game_data::selection_data::SelectionState;
use test_utils::TestGame;

#[test]
fn first_player_becomes_host() {
    let game = TestGame::new(3);
    assert_eq!(game.game.host_player_id, Some(game.players[0]));
    assert_eq!(game.game.status, GameStatus::Lobby);
}

#[test]
fn join_with_duplicate_name_is_idempotent() {
    let mut game = TestGame::new(2);
    let existing =
        lifecycle::join_game(&mut game.game, "player-0", None).unwrap();
    assert_eq!(existing, game.players[0]);
    assert_eq!(game.game.players.len(), 2);
}

#[test]
fn join_with_known_id_reconnects() {
    let mut game = TestGame::started(2);
    game.player_mut(0).connected = false;

    let rejoined =
        lifecycle::join_game(&mut game.game, "player-0", Some(game.players[0])).unwrap();
    assert_eq!(rejoined, game.players[0]);
    assert!(game.player(0).connected);
    // No new player was created even though the game is active.
    assert_eq!(game.game.players.len(), 2);
}

#[test]
fn joining_an_active_game_is_rejected() {
    let mut game = TestGame::started(2);
    let error = lifecycle::join_game(&mut game.game, "newcomer", None).unwrap_err();
    assert_eq!(error.code, ErrorCode::WrongPhase);
}

#[test]
fn only_the_host_may_start() {
    let mut game = TestGame::new(2);
    let error = game.act(1, UserCommand::StartGame).unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert_eq!(game.game.status, GameStatus::Lobby);
}

#[test]
fn starting_deals_hands_and_corporations() {
    let mut game = TestGame::new(2);
    game.act(0, UserCommand::StartGame).unwrap();

    assert_eq!(game.game.status, GameStatus::Active);
    assert_eq!(game.game.phase, GamePhase::StartingCardSelection);
    assert_eq!(game.game.turn_order.len(), 2);

    for index in 0..2 {
        match &game.player(index).selection {
            SelectionState::SelectStartingCards(selection) => {
                assert_eq!(selection.available_cards.len(), 10);
                assert_eq!(selection.available_corporations.len(), 2);
            }
            other => panic!("Expected starting selection, got {other:?}"),
        }
    }
    let turn = game.game.current_turn.unwrap();
    assert_eq!(turn.player_id, game.game.turn_order[0]);
    assert_eq!(turn.actions_remaining, 0);
}

#[test]
fn selecting_starting_cards_buys_into_hand() {
    let mut game = TestGame::new(1);
    game.act(0, UserCommand::StartGame).unwrap();

    let (cards, corporation) = match &game.player(0).selection {
        SelectionState::SelectStartingCards(selection) => (
            selection.available_cards[..2].to_vec(),
            selection.available_corporations[0].clone(),
        ),
        other => panic!("Expected starting selection, got {other:?}"),
    };
    let starting_credits = cards::get(&corporation).unwrap().starting_credits;

    game.act(
        0,
        UserCommand::SelectStartingCards {
            card_ids: cards.clone(),
            corporation_id: corporation.clone(),
        },
    )
    .unwrap();

    let player = game.player(0);
    assert_eq!(player.corporation_id.as_ref(), Some(&corporation));
    assert_eq!(player.resources.credits, starting_credits - 6);
    assert_eq!(player.hand, cards);
    assert!(player.selection.is_none());
    // Single player: selection complete moves the game to the action phase.
    assert_eq!(game.game.phase, GamePhase::Action);
}

#[test]
fn selecting_an_unoffered_corporation_is_rejected() {
    let mut game = TestGame::new(1);
    game.act(0, UserCommand::StartGame).unwrap();

    let error = game
        .act(
            0,
            UserCommand::SelectStartingCards {
                card_ids: vec![],
                corporation_id: "not-a-corporation".into(),
            },
        )
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidArgument);
}

#[test]
fn game_full_rejects_additional_players() {
    let mut game = TestGame::new(5);
    let error = lifecycle::join_game(&mut game.game, "sixth", None).unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
}
