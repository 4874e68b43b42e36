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
use errors::ErrorCode;
use game_data::command_data::{Payment, UserCommand};
use maplit::btreemap;
use test_utils::TestGame;

fn play(card: &str, payment: Payment) -> UserCommand {
    UserCommand::PlayCard { card_id: CardId::new(card), payment }
}

#[test]
fn steel_covers_building_cards() {
    let mut game = TestGame::started(1);
    game.give_card(0, "food-factory");
    game.set_resource(0, ResourceType::Credits, 8);
    game.set_resource(0, ResourceType::Steel, 2);

    // Cost 12 = 8 credits + 2 steel at value two.
    let payment = Payment { credits: 8, steel: 2, ..Payment::default() };
    game.act(0, play("food-factory", payment)).unwrap();

    assert_eq!(game.player(0).resources.credits, 0);
    assert_eq!(game.player(0).resources.steel, 0);
    assert!(game.player(0).played_cards.iter().any(|c| c.card_id.as_str() == "food-factory"));
    assert!(!game.player(0).hand.iter().any(|c| c.as_str() == "food-factory"));
}

#[test]
fn payment_one_short_is_rejected() {
    let mut game = TestGame::started(1);
    game.give_card(0, "food-factory");
    game.set_resource(0, ResourceType::Credits, 7);
    game.set_resource(0, ResourceType::Steel, 2);

    let payment = Payment { credits: 7, steel: 2, ..Payment::default() };
    let error = game.act(0, play("food-factory", payment)).unwrap_err();
    assert_eq!(error.code, ErrorCode::PaymentInvalid);
    assert_eq!(game.player(0).resources.credits, 7);
    assert!(game.player(0).hand.iter().any(|c| c.as_str() == "food-factory"));
}

#[test]
fn steel_is_rejected_on_non_building_cards() {
    let mut game = TestGame::started(1);
    game.give_card(0, "research");
    game.set_resource(0, ResourceType::Steel, 10);

    let payment = Payment { credits: 3, steel: 4, ..Payment::default() };
    let error = game.act(0, play("research", payment)).unwrap_err();
    assert_eq!(error.code, ErrorCode::PaymentInvalid);
}

#[test]
fn titanium_covers_space_cards() {
    let mut game = TestGame::started(1);
    game.give_card(0, "small-asteroid");
    game.set_resource(0, ResourceType::Credits, 1);
    game.set_resource(0, ResourceType::Titanium, 3);

    // Cost 10 = 1 credit + 3 titanium at value three.
    let payment = Payment { credits: 1, titanium: 3, ..Payment::default() };
    game.act(0, play("small-asteroid", payment)).unwrap();
    assert_eq!(game.player(0).resources.titanium, 0);
    assert_eq!(game.game.parameters.temperature, -28);
    assert_eq!(game.player(0).terraform_rating, 21);
}

#[test]
fn unregistered_substitute_is_rejected() {
    let mut game = TestGame::started(1);
    game.give_card(0, "mine");
    game.set_resource(0, ResourceType::Heat, 10);

    let payment = Payment {
        substitutes: btreemap! { ResourceType::Heat => 4 },
        ..Payment::default()
    };
    let error = game.act(0, play("mine", payment)).unwrap_err();
    assert_eq!(error.code, ErrorCode::PaymentInvalid);
}

#[test]
fn helion_pays_with_heat() {
    let mut game = TestGame::started_with_corporation(1, "helion");
    game.give_card(0, "mine");
    game.set_resource(0, ResourceType::Credits, 0);
    game.set_resource(0, ResourceType::Heat, 5);

    let payment = Payment {
        substitutes: btreemap! { ResourceType::Heat => 4 },
        ..Payment::default()
    };
    game.act(0, play("mine", payment)).unwrap();

    assert_eq!(game.player(0).resources.heat, 1);
    assert_eq!(game.player(0).production.steel, 1);
}

#[test]
fn overpayment_with_exact_cost_accepted() {
    let mut game = TestGame::started(1);
    game.give_card(0, "mine");
    game.set_resource(0, ResourceType::Credits, 4);

    game.act(0, play("mine", Payment::credits(4))).unwrap();
    assert_eq!(game.player(0).resources.credits, 0);
}
