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

//! Contract tests for the event bus: delivery order, depth-first re-entrant
//! publishing, fault isolation, and unsubscription.

use core_data::game_primitives::PlayerId;
use errors::{ErrorCode, GameError, Result};
use game_data::event_data::{GameEvent, GameEventKind, Scope};
use game_data::game_state::GameState;
use test_utils::TestGame;

fn probe_event(player_id: PlayerId) -> GameEvent {
    GameEvent::TerraformRatingChanged { player_id, delta: 0, rating: 20 }
}

fn add_one(game: &mut GameState, scope: &Scope, _event: &GameEvent) -> Result<()> {
    let player_id = scope.player_id().unwrap();
    game.player_mut(player_id)?.resources.credits += 1;
    Ok(())
}

fn add_five(game: &mut GameState, scope: &Scope, _event: &GameEvent) -> Result<()> {
    let player_id = scope.player_id().unwrap();
    game.player_mut(player_id)?.resources.credits += 5;
    Ok(())
}

fn double(game: &mut GameState, scope: &Scope, _event: &GameEvent) -> Result<()> {
    let player_id = scope.player_id().unwrap();
    game.player_mut(player_id)?.resources.credits *= 2;
    Ok(())
}

fn publish_nested(game: &mut GameState, scope: &Scope, _event: &GameEvent) -> Result<()> {
    let player_id = scope.player_id().unwrap();
    dispatcher::publish(game, GameEvent::PlayerEffectsChanged { player_id });
    Ok(())
}

fn failing(_game: &mut GameState, _scope: &Scope, _event: &GameEvent) -> Result<()> {
    Err(GameError::new(ErrorCode::Internal, "deliberate handler fault"))
}

#[test]
fn subscribers_run_in_subscription_order() {
    let mut test_game = TestGame::new(1);
    let player_id = test_game.players[0];
    let game = &mut test_game.game;
    game.player_mut(player_id).unwrap().resources.credits = 0;

    let kind = GameEventKind::TerraformRatingChanged;
    game.event_bus.subscribe(kind, Scope::Player(player_id), add_one);
    game.event_bus.subscribe(kind, Scope::Player(player_id), double);

    dispatcher::publish(game, probe_event(player_id));
    // (0 + 1) * 2, not 0 * 2 + 1.
    assert_eq!(game.player(player_id).unwrap().resources.credits, 2);
}

#[test]
fn nested_publishes_deliver_depth_first() {
    let mut test_game = TestGame::new(1);
    let player_id = test_game.players[0];
    let game = &mut test_game.game;
    game.player_mut(player_id).unwrap().resources.credits = 0;

    let kind = GameEventKind::TerraformRatingChanged;
    game.event_bus.subscribe(kind, Scope::Player(player_id), publish_nested);
    game.event_bus.subscribe(kind, Scope::Player(player_id), double);
    game.event_bus.subscribe(
        GameEventKind::PlayerEffectsChanged,
        Scope::Player(player_id),
        add_five,
    );

    dispatcher::publish(game, probe_event(player_id));
    // The nested event resolves before the second outer subscriber runs:
    // (0 + 5) * 2.
    assert_eq!(game.player(player_id).unwrap().resources.credits, 10);
}

#[test]
fn handler_faults_are_isolated() {
    let mut test_game = TestGame::new(1);
    let player_id = test_game.players[0];
    let game = &mut test_game.game;
    game.player_mut(player_id).unwrap().resources.credits = 0;

    let kind = GameEventKind::TerraformRatingChanged;
    game.event_bus.subscribe(kind, Scope::Player(player_id), failing);
    game.event_bus.subscribe(kind, Scope::Player(player_id), add_one);

    dispatcher::publish(game, probe_event(player_id));
    assert_eq!(game.player(player_id).unwrap().resources.credits, 1);

    // The failing subscription survives its fault.
    dispatcher::publish(game, probe_event(player_id));
    assert_eq!(game.player(player_id).unwrap().resources.credits, 2);
}

#[test]
fn unsubscribed_handlers_stop_receiving_events() {
    let mut test_game = TestGame::new(1);
    let player_id = test_game.players[0];
    let game = &mut test_game.game;
    game.player_mut(player_id).unwrap().resources.credits = 0;

    let kind = GameEventKind::TerraformRatingChanged;
    let token = game.event_bus.subscribe(kind, Scope::Player(player_id), add_one);

    dispatcher::publish(game, probe_event(player_id));
    assert_eq!(game.player(player_id).unwrap().resources.credits, 1);

    game.event_bus.unsubscribe(token);
    dispatcher::publish(game, probe_event(player_id));
    assert_eq!(game.player(player_id).unwrap().resources.credits, 1);
}

#[test]
fn broadcast_marks_the_bus_pending() {
    let mut test_game = TestGame::new(1);
    let game = &mut test_game.game;
    assert!(game.event_bus.pending_broadcast);
    game.event_bus.pending_broadcast = false;

    dispatcher::publish(game, GameEvent::GameStateChanged);
    // The standing relay turns GameStateChanged into a Broadcast.
    assert!(game.event_bus.pending_broadcast);
}
