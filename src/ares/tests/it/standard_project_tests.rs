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

use core_data::game_primitives::{ResourceType, TileType};
use errors::ErrorCode;
use game_data::command_data::UserCommand;
use game_data::selection_data::SelectionState;
use test_utils::TestGame;

#[test]
fn build_aquifer_rejected_when_oceans_full() {
    let mut game = TestGame::started(1);
    game.game.parameters.oceans = 9;
    let credits = game.player(0).resources.credits;

    let error = game.act(0, UserCommand::BuildAquifer).unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert_eq!(game.player(0).resources.credits, credits);
}

#[test]
fn build_aquifer_places_ocean_and_awards_rating() {
    let mut game = TestGame::started(1);
    let credits = game.player(0).resources.credits;

    game.act(0, UserCommand::BuildAquifer).unwrap();
    assert_eq!(game.player(0).resources.credits, credits - 18);

    let pending = game.player(0).pending_tile.clone().unwrap();
    assert_eq!(pending.tile_type, TileType::Ocean);
    let hex = pending
        .available_hexes
        .iter()
        .copied()
        .find(|h| game.game.board.tile(*h).unwrap().bonuses.is_empty())
        .unwrap();
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();

    assert_eq!(game.game.parameters.oceans, 1);
    assert_eq!(game.game.board.ocean_count(), 1);
    assert_eq!(game.player(0).terraform_rating, 21);
    assert!(game.game.board.tile(hex).unwrap().occupant.as_ref().unwrap().owner_id.is_none());
}

#[test]
fn build_city_bumps_credit_production() {
    let mut game = TestGame::started(1);
    game.act(0, UserCommand::BuildCity).unwrap();
    assert_eq!(game.player(0).production.credits, 1);

    let pending = game.player(0).pending_tile.clone().unwrap();
    assert_eq!(pending.tile_type, TileType::City);
    let hex = pending.available_hexes[0];
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();

    // A second city may not be adjacent to the first.
    game.set_resource(0, ResourceType::Credits, 25);
    game.act(0, UserCommand::BuildCity).unwrap();
    let pending = game.player(0).pending_tile.clone().unwrap();
    assert!(pending.available_hexes.iter().all(|h| !h.is_adjacent(hex)));
}

#[test]
fn launch_asteroid_raises_temperature() {
    let mut game = TestGame::started(1);
    game.act(0, UserCommand::LaunchAsteroid).unwrap();
    assert_eq!(game.game.parameters.temperature, -28);
    assert_eq!(game.player(0).terraform_rating, 21);
}

#[test]
fn power_plant_bumps_energy_production() {
    let mut game = TestGame::started(1);
    game.act(0, UserCommand::BuildPowerPlant).unwrap();
    assert_eq!(game.player(0).production.energy, 1);
}

#[test]
fn insufficient_credits_rejected_before_any_mutation() {
    let mut game = TestGame::started(1);
    game.set_resource(0, ResourceType::Credits, 10);
    let error = game.act(0, UserCommand::BuildCity).unwrap_err();
    assert_eq!(error.code, ErrorCode::InsufficientCredits);
    assert_eq!(game.player(0).production.credits, 0);
    assert!(game.player(0).pending_tile.is_none());
}

#[test]
fn sell_patents_two_phase_flow() {
    let mut game = TestGame::started(1);
    game.give_card(0, "mine");
    game.give_card(0, "research");
    let credits = game.player(0).resources.credits;

    game.act(0, UserCommand::SellPatents).unwrap();
    assert!(matches!(
        game.player(0).selection,
        SelectionState::PendingCardSelection(_)
    ));

    // Ordinary actions are blocked while the selection is open.
    let error = game.act(0, UserCommand::BuildPowerPlant).unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);

    game.act(
        0,
        UserCommand::ConfirmSellPatents { card_ids: vec!["mine".into()] },
    )
    .unwrap();
    assert_eq!(game.player(0).resources.credits, credits + 1);
    assert!(!game.player(0).hand.iter().any(|c| c.as_str() == "mine"));
    assert!(game.player(0).hand.iter().any(|c| c.as_str() == "research"));
    assert!(game.player(0).selection.is_none());
}

#[test]
fn sell_patents_requires_cards_in_hand() {
    let mut game = TestGame::started(1);
    let error = game.act(0, UserCommand::SellPatents).unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
}

#[test]
fn selling_nothing_consumes_no_action() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    game.give_card(first, "mine");

    game.act(first, UserCommand::SellPatents).unwrap();
    game.act(first, UserCommand::ConfirmSellPatents { card_ids: vec![] }).unwrap();
    assert_eq!(game.game.current_turn.unwrap().actions_remaining, 2);
}
