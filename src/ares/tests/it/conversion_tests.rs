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

use core_data::game_primitives::{ResourceType, UNLIMITED_ACTIONS};
use core_data::hex::HexCoordinate;
use errors::ErrorCode;
use game_data::command_data::UserCommand;
use test_utils::TestGame;

/// Picks a pending-tile hex whose tile carries no printed bonus, to keep
/// resource assertions clean.
fn bonus_free_hex(game: &TestGame, player_index: usize) -> HexCoordinate {
    let pending = game.player(player_index).pending_tile.clone().expect("no pending tile");
    pending
        .available_hexes
        .iter()
        .copied()
        .find(|hex| game.game.board.tile(*hex).unwrap().bonuses.is_empty())
        .expect("no bonus-free hex available")
}

#[test]
fn solo_heat_conversion_raises_temperature_and_rating() {
    let mut game = TestGame::started(1);
    game.game.parameters.temperature = -4;
    game.set_resource(0, ResourceType::Heat, 10);
    assert_eq!(game.player(0).terraform_rating, 20);

    game.act(0, UserCommand::ConvertHeatToTemperature).unwrap();

    assert_eq!(game.player(0).resources.heat, 2);
    assert_eq!(game.game.parameters.temperature, -2);
    assert_eq!(game.player(0).terraform_rating, 21);
    assert_eq!(game.game.current_turn.unwrap().actions_remaining, UNLIMITED_ACTIONS);
}

#[test]
fn heat_conversion_at_max_temperature_is_rejected() {
    let mut game = TestGame::started(1);
    game.game.parameters.temperature = 8;
    game.set_resource(0, ResourceType::Heat, 10);

    let error = game.act(0, UserCommand::ConvertHeatToTemperature).unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    // The heat is not consumed on rejection.
    assert_eq!(game.player(0).resources.heat, 10);
}

#[test]
fn heat_conversion_requires_eight_heat() {
    let mut game = TestGame::started(1);
    game.set_resource(0, ResourceType::Heat, 7);
    let error = game.act(0, UserCommand::ConvertHeatToTemperature).unwrap_err();
    assert_eq!(error.code, ErrorCode::InsufficientResources);
}

#[test]
fn greenery_conversion_places_tile_and_raises_oxygen() {
    let mut game = TestGame::started(1);
    game.set_resource(0, ResourceType::Plants, 8);

    game.act(0, UserCommand::ConvertPlantsToGreenery).unwrap();
    assert_eq!(game.player(0).resources.plants, 0);
    assert!(game.player(0).pending_tile.is_some());

    let hex = bonus_free_hex(&game, 0);
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();

    assert!(game.player(0).pending_tile.is_none());
    assert_eq!(game.game.parameters.oxygen, 1);
    assert_eq!(game.player(0).terraform_rating, 21);
    let occupant = game.game.board.tile(hex).unwrap().occupant.clone().unwrap();
    assert_eq!(occupant.owner_id, Some(game.players[0]));
}

#[test]
fn greenery_at_oxygen_cap_awards_no_rating() {
    let mut game = TestGame::started(1);
    game.game.parameters.oxygen = 13;
    game.set_resource(0, ResourceType::Plants, 16);

    game.act(0, UserCommand::ConvertPlantsToGreenery).unwrap();
    let hex = bonus_free_hex(&game, 0);
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();
    assert_eq!(game.game.parameters.oxygen, 14);
    assert_eq!(game.player(0).terraform_rating, 21);

    // A second greenery in the same generation: oxygen stays at the cap and
    // no further rating is awarded.
    game.act(0, UserCommand::ConvertPlantsToGreenery).unwrap();
    let hex = bonus_free_hex(&game, 0);
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();
    assert_eq!(game.game.parameters.oxygen, 14);
    assert_eq!(game.player(0).terraform_rating, 21);
}

#[test]
fn ecoline_converts_greeneries_at_a_discount() {
    let mut game = TestGame::started_with_corporation(1, "ecoline");
    // EcoLine starts with three plants and needs only seven per greenery.
    game.set_resource(0, ResourceType::Plants, 7);
    game.act(0, UserCommand::ConvertPlantsToGreenery).unwrap();
    assert_eq!(game.player(0).resources.plants, 0);
    assert!(game.player(0).pending_tile.is_some());
}
