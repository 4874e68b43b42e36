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

use errors::{ErrorCode, GameError};
use server::session::SessionStore;
use server::views;
use test_utils::TestGame;
use tokio::sync::mpsc;

#[test]
fn state_frame_is_valid_json() {
    let game = TestGame::started(2);
    let frame = views::state_frame(&game.game);
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();

    assert_eq!(value["type"], "state");
    assert_eq!(value["game"]["players"].as_array().unwrap().len(), 2);
    assert_eq!(value["game"]["status"], "active");
    assert_eq!(value["game"]["phase"], "action");
    assert_eq!(value["game"]["board"].as_array().unwrap().len(), 42);
    assert!(value["game"]["current_turn"].is_object());
}

#[test]
fn error_frame_carries_code_and_category() {
    let error = GameError::new(ErrorCode::NotYourTurn, "wait for your turn");
    let frame = views::error_frame(&error);
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();

    assert_eq!(value["type"], "error");
    assert_eq!(value["code"], "not-your-turn");
    assert_eq!(value["category"], "rules");
    assert_eq!(value["message"], "wait for your turn");
}

#[test]
fn session_broadcasts_once_per_handler() {
    cards::initialize();
    let store = SessionStore::default();
    let (_game_id, session) = store.create(None);

    let player_id = session
        .with_game(|game| actions::lifecycle::join_game(game, "ada", None))
        .unwrap();

    // Register after the join; registration re-sends the current state to
    // just this client.
    let (tx, mut rx) = mpsc::unbounded_channel();
    session.register_client(player_id, tx);
    let frame = rx.try_recv().unwrap();
    assert!(frame.contains("\"type\":\"state\""));
    assert!(rx.try_recv().is_err());

    // A mutating handler produces exactly one broadcast frame.
    session
        .with_game(|game| {
            actions::handle_command(
                game,
                player_id,
                &game_data::command_data::UserCommand::StartGame,
            )
        })
        .unwrap();
    let frame = rx.try_recv().unwrap();
    assert!(frame.contains("starting-card-selection"));
    assert!(rx.try_recv().is_err());
}

#[test]
fn unknown_game_lookup_fails() {
    let store = SessionStore::default();
    let error = store.get(core_data::game_primitives::GameId::generate()).unwrap_err();
    assert_eq!(error.code, ErrorCode::NotFound);
}
