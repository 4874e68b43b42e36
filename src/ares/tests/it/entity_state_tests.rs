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

use std::collections::BTreeMap;

use core_data::game_primitives::{
    CardId, MilestoneType, ResourceType, StandardProject,
};
use errors::ErrorCode;
use game_data::command_data::UserCommand;
use game_data::entity_data::EntityKey;
use rules::mutations;
use test_utils::TestGame;

#[test]
fn standard_project_availability_tracks_resources() {
    let mut game = TestGame::started(1);
    let key = EntityKey::StandardProject(StandardProject::PowerPlant);

    let state = game.player(0).entity_states.get(&key).unwrap();
    assert!(state.is_available());
    assert_eq!(state.cost.get(&ResourceType::Credits), Some(&11));

    // Spend down below the project cost; the view reacts to the
    // ResourcesChanged event.
    let credits = game.player(0).resources.credits;
    mutations::add_resources(
        &mut game.game,
        game.players[0],
        BTreeMap::from([(ResourceType::Credits, -(credits - 5))]),
    )
    .unwrap();

    let state = game.player(0).entity_states.get(&key).unwrap();
    assert!(!state.is_available());
    assert_eq!(state.errors[0].code, ErrorCode::InsufficientCredits);
}

#[test]
fn hand_card_views_follow_the_hand() {
    let mut game = TestGame::started(1);
    let key = EntityKey::HandCard(CardId::new("mine"));
    assert!(game.player(0).entity_states.get(&key).is_none());

    game.give_card(0, "mine");
    let state = game.player(0).entity_states.get(&key).unwrap();
    assert!(state.is_available());

    mutations::remove_cards_from_hand(
        &mut game.game,
        game.players[0],
        &[CardId::new("mine")],
    )
    .unwrap();
    assert!(game.player(0).entity_states.get(&key).is_none());
    assert!(!game.player(0).entity_subscriptions.contains_key(&key));
}

#[test]
fn requirement_failures_surface_in_card_views() {
    let mut game = TestGame::started(1);
    // Mangrove needs temperature at least +4.
    game.give_card(0, "mangrove");
    let key = EntityKey::HandCard(CardId::new("mangrove"));

    let state = game.player(0).entity_states.get(&key).unwrap();
    assert!(!state.is_available());
    assert_eq!(state.errors[0].code, ErrorCode::PreconditionFailed);

    // Direct parameter writes do not publish; drive a real change instead.
    game.game.parameters.temperature = 2;
    mutations::increase_temperature(&mut game.game, 1).unwrap();

    let state = game.player(0).entity_states.get(&key).unwrap();
    assert!(state.is_available());
}

#[test]
fn milestone_view_reports_progress() {
    let game = TestGame::started(1);
    let key = EntityKey::Milestone(MilestoneType::Terraformer);
    let state = game.player(0).entity_states.get(&key).unwrap();

    assert!(!state.is_available());
    assert_eq!(state.metadata.get("progress").unwrap(), &serde_json::json!(20));
    assert_eq!(state.metadata.get("threshold").unwrap(), &serde_json::json!(35));
}

#[test]
fn card_action_views_appear_after_play() {
    let mut game = TestGame::started(1);
    game.force_play(0, "birds");
    // Views sync on the next completed command.
    game.act(0, UserCommand::SkipAction).unwrap();
    let key = EntityKey::CardAction { card_id: CardId::new("birds"), behavior_index: 0 };
    assert!(game.player(0).entity_states.get(&key).is_some());
}

#[test]
fn discount_effect_updates_hand_card_cost() {
    let mut game = TestGame::started(1);
    game.give_card(0, "small-asteroid");
    game.force_play(0, "space-station");

    let key = EntityKey::HandCard(CardId::new("small-asteroid"));
    let state = game.player(0).entity_states.get(&key).unwrap();
    assert_eq!(state.cost.get(&ResourceType::Credits), Some(&8));
}
