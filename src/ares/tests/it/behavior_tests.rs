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

use core_data::game_primitives::{CardId, ResourceType};
use core_data::hex::HexCoordinate;
use errors::ErrorCode;
use game_data::command_data::{Payment, UserCommand};
use test_utils::TestGame;

fn use_action(card: &str, choice: Option<usize>) -> UserCommand {
    UserCommand::UseCardAction {
        card_id: CardId::new(card),
        behavior_index: 0,
        choice_index: choice,
        card_storage_target: None,
    }
}

fn bonus_free_pending_hex(game: &TestGame, player_index: usize) -> HexCoordinate {
    game.player(player_index)
        .pending_tile
        .clone()
        .expect("no pending tile")
        .available_hexes
        .iter()
        .copied()
        .find(|hex| game.game.board.tile(*hex).unwrap().bonuses.is_empty())
        .expect("no bonus-free hex")
}

#[test]
fn auto_behavior_applies_production_on_play() {
    let mut game = TestGame::started(1);
    game.give_card(0, "mine");
    game.set_resource(0, ResourceType::Credits, 4);

    game.act(
        0,
        UserCommand::PlayCard { card_id: CardId::new("mine"), payment: Payment::credits(4) },
    )
    .unwrap();
    assert_eq!(game.player(0).production.steel, 1);
}

#[test]
fn production_decrease_clamps_at_zero() {
    let mut game = TestGame::started(1);
    // Food Factory trades plant production for credits, but plant
    // production is already zero and clamps there.
    game.force_play(0, "food-factory");
    assert_eq!(game.player(0).production.plants, 0);
    assert_eq!(game.player(0).production.credits, 4);
}

#[test]
fn conditional_effect_fires_on_city_placement() {
    let mut game = TestGame::started(1);
    game.force_play(0, "rover-construction");
    game.set_resource(0, ResourceType::Credits, 30);

    game.act(0, UserCommand::BuildCity).unwrap();
    let hex = bonus_free_pending_hex(&game, 0);
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();

    // 30 - 25 city cost + 2 from the rover effect.
    assert_eq!(game.player(0).resources.credits, 7);
}

#[test]
fn conditional_effect_fires_on_ocean_placement() {
    let mut game = TestGame::started(1);
    game.force_play(0, "arctic-algae");
    assert_eq!(game.player(0).resources.plants, 1);
    game.set_resource(0, ResourceType::Credits, 18);

    game.act(0, UserCommand::BuildAquifer).unwrap();
    let hex = bonus_free_pending_hex(&game, 0);
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();

    assert_eq!(game.player(0).resources.plants, 3);
}

#[test]
fn card_played_trigger_matches_tag_filter() {
    let mut game = TestGame::started(1);
    game.force_play(0, "optimal-aerobraking");
    game.set_resource(0, ResourceType::Credits, 10);
    game.set_resource(0, ResourceType::Heat, 0);

    // A Space card wakes the effect.
    game.give_card(0, "small-asteroid");
    game.act(
        0,
        UserCommand::PlayCard {
            card_id: CardId::new("small-asteroid"),
            payment: Payment::credits(10),
        },
    )
    .unwrap();
    assert_eq!(game.player(0).resources.credits, 2);
    assert_eq!(game.player(0).resources.heat, 2);

    // A non-Space card does not.
    game.give_card(0, "mine");
    game.set_resource(0, ResourceType::Credits, 4);
    game.act(
        0,
        UserCommand::PlayCard { card_id: CardId::new("mine"), payment: Payment::credits(4) },
    )
    .unwrap();
    assert_eq!(game.player(0).resources.heat, 2);
}

#[test]
fn discount_effect_lowers_effective_cost() {
    let mut game = TestGame::started(1);
    game.force_play(0, "space-station");
    game.give_card(0, "small-asteroid");
    game.set_resource(0, ResourceType::Credits, 8);

    // Cost 10 less the Space discount of 2.
    game.act(
        0,
        UserCommand::PlayCard {
            card_id: CardId::new("small-asteroid"),
            payment: Payment::credits(8),
        },
    )
    .unwrap();
    assert_eq!(game.player(0).resources.credits, 0);
}

#[test]
fn storage_action_accumulates_and_scores() {
    let mut game = TestGame::started(1);
    game.force_play(0, "birds");

    game.act(0, use_action("birds", None)).unwrap();
    assert_eq!(game.player(0).stored_on_card(&CardId::new("birds")), 1);

    // Once per generation.
    let error = game.act(0, use_action("birds", None)).unwrap_err();
    assert_eq!(error.code, ErrorCode::Conflict);
}

#[test]
fn choice_actions_resolve_by_index() {
    let mut game = TestGame::started(1);
    game.force_play(0, "nitrite-reducing-bacteria");
    let card = CardId::new("nitrite-reducing-bacteria");

    game.act(0, use_action("nitrite-reducing-bacteria", Some(0))).unwrap();
    assert_eq!(game.player(0).stored_on_card(&card), 1);

    // Arrange three stored microbes and a fresh generation, then cash in.
    game.player_mut(0).card_resources.insert(card.clone(), 3);
    game.player_mut(0)
        .actions
        .iter_mut()
        .for_each(|a| a.times_used_this_generation = 0);
    game.act(0, use_action("nitrite-reducing-bacteria", Some(1))).unwrap();
    assert_eq!(game.player(0).stored_on_card(&card), 0);
    assert_eq!(game.player(0).terraform_rating, 21);
}

#[test]
fn choice_action_requires_choice_index() {
    let mut game = TestGame::started(1);
    game.force_play(0, "nitrite-reducing-bacteria");
    let error = game.act(0, use_action("nitrite-reducing-bacteria", None)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidArgument);
}

#[test]
fn insufficient_inputs_leave_state_untouched() {
    let mut game = TestGame::started(1);
    game.force_play(0, "steelworks");
    game.set_resource(0, ResourceType::Energy, 3);

    let error = game.act(0, use_action("steelworks", None)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InsufficientResources);
    assert_eq!(game.player(0).resources.energy, 3);
    assert_eq!(game.player(0).resources.steel, 0);
    let action = game.player(0).card_action(&CardId::new("steelworks"), 0).unwrap();
    assert_eq!(action.times_used_this_generation, 0);
}

#[test]
fn mining_guild_gains_production_from_placement_bonuses() {
    let mut game = TestGame::started_with_corporation(1, "mining-guild");
    assert_eq!(game.player(0).production.steel, 1);
    game.set_resource(0, ResourceType::Credits, 25);

    game.act(0, UserCommand::BuildCity).unwrap();
    // Pick a hex that carries a printed bonus so the conditional fires.
    let pending = game.player(0).pending_tile.clone().unwrap();
    let hex = pending
        .available_hexes
        .iter()
        .copied()
        .find(|h| !game.game.board.tile(*h).unwrap().bonuses.is_empty())
        .unwrap();
    game.act(0, UserCommand::SelectTile { coordinate: hex }).unwrap();

    assert_eq!(game.player(0).production.steel, 2);
}

#[test]
fn per_tag_outputs_scale_with_played_tags() {
    let mut game = TestGame::started(1);
    game.force_play(0, "lichen");
    game.force_play(0, "heather");
    assert_eq!(game.player(0).production.plants, 2);

    // Insects grants plant production per played Plant tag.
    game.force_play(0, "insects");
    assert_eq!(game.player(0).production.plants, 4);
}

#[test]
fn imported_nitrogen_grants_rating_and_plants() {
    let mut game = TestGame::started(1);
    game.give_card(0, "imported-nitrogen");
    game.set_resource(0, ResourceType::Credits, 23);
    game.set_resource(0, ResourceType::Plants, 0);

    game.act(
        0,
        UserCommand::PlayCard {
            card_id: CardId::new("imported-nitrogen"),
            payment: Payment::credits(23),
        },
    )
    .unwrap();
    assert_eq!(game.player(0).terraform_rating, 21);
    assert_eq!(game.player(0).resources.plants, 4);
}
