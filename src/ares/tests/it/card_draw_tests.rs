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
use game_data::selection_data::{CardDrawSource, PendingCardDraw, SelectionState};
use test_utils::TestGame;

fn pending_draw(cards: &[&str], free: usize, buy: usize) -> SelectionState {
    SelectionState::PendingCardDraw(PendingCardDraw {
        available_cards: cards.iter().map(|c| CardId::new(*c)).collect(),
        free_take_count: free,
        max_buy_count: buy,
        card_buy_cost: 3,
        source: CardDrawSource::Behavior,
        source_card_id: None,
        source_behavior_index: None,
    })
}

fn confirm(take: &[&str], buy: &[&str]) -> UserCommand {
    UserCommand::ConfirmCardDraw {
        cards_to_take: take.iter().map(|c| CardId::new(*c)).collect(),
        cards_to_buy: buy.iter().map(|c| CardId::new(*c)).collect(),
    }
}

#[test]
fn taking_more_than_free_count_is_rejected() {
    let mut game = TestGame::started(1);
    game.player_mut(0).selection = pending_draw(&["mine", "research", "lichen"], 1, 2);

    let error = game.act(0, confirm(&["mine", "research"], &[])).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidArgument);
}

#[test]
fn buying_unavailable_cards_is_rejected() {
    let mut game = TestGame::started(1);
    game.player_mut(0).selection = pending_draw(&["mine", "research", "lichen"], 1, 2);

    let error = game.act(0, confirm(&["mine"], &["research", "comet"])).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidArgument);
}

#[test]
fn valid_selection_pays_and_fills_hand() {
    let mut game = TestGame::started(1);
    game.player_mut(0).selection = pending_draw(&["mine", "research", "lichen"], 1, 2);
    game.set_resource(0, ResourceType::Credits, 10);

    game.act(0, confirm(&["mine"], &["research", "lichen"])).unwrap();
    assert_eq!(game.player(0).resources.credits, 4);
    for card in ["mine", "research", "lichen"] {
        assert!(game.player(0).hand.iter().any(|c| c.as_str() == card));
    }
    assert!(game.player(0).selection.is_none());
}

#[test]
fn pure_draw_requires_taking_everything() {
    let mut game = TestGame::started(1);
    game.player_mut(0).selection = pending_draw(&["mine", "research"], 2, 0);

    let error = game.act(0, confirm(&["mine"], &[])).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidArgument);
    game.act(0, confirm(&["mine", "research"], &[])).unwrap();
    assert_eq!(game.player(0).hand.len(), 2);
}

#[test]
fn empty_deck_draw_succeeds_trivially() {
    let mut game = TestGame::started(1);
    game.game.deck.project_deck.clear();
    game.game.deck.discard_pile.clear();
    game.force_play(0, "lagrange-observatory");

    // The card's draw-one effect found an empty deck: nothing to take.
    match &game.player(0).selection {
        SelectionState::PendingCardDraw(pending) => {
            assert!(pending.available_cards.is_empty());
            assert_eq!(pending.free_take_count, 0);
        }
        other => panic!("Expected pending card draw, got {other:?}"),
    }
    game.act(0, confirm(&[], &[])).unwrap();
    assert!(game.player(0).selection.is_none());
}

#[test]
fn card_action_draw_defers_consumption_to_confirmation() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    game.force_play(first, "restricted-area");
    game.set_resource(first, ResourceType::Credits, 10);

    game.act(
        first,
        UserCommand::UseCardAction {
            card_id: CardId::new("restricted-area"),
            behavior_index: 0,
            choice_index: None,
            card_storage_target: None,
        },
    )
    .unwrap();

    // Inputs were paid, but the action budget is untouched until the draw
    // confirms.
    assert_eq!(game.player(first).resources.credits, 8);
    assert_eq!(game.game.current_turn.unwrap().actions_remaining, 2);
    let action = game.player(first).card_action(&CardId::new("restricted-area"), 0).unwrap();
    assert_eq!(action.times_used_this_generation, 0);

    let available = match &game.player(first).selection {
        SelectionState::PendingCardDraw(pending) => pending.available_cards.clone(),
        other => panic!("Expected pending card draw, got {other:?}"),
    };
    assert_eq!(available.len(), 1);
    game.act(
        first,
        UserCommand::ConfirmCardDraw {
            cards_to_take: available.clone(),
            cards_to_buy: vec![],
        },
    )
    .unwrap();

    assert_eq!(game.game.current_turn.unwrap().actions_remaining, 1);
    let action = game.player(first).card_action(&CardId::new("restricted-area"), 0).unwrap();
    assert_eq!(action.times_used_this_generation, 1);
    assert!(game.player(first).hand.contains(&available[0]));
}

#[test]
fn peek_and_buy_card_effect() {
    let mut game = TestGame::started(1);
    game.give_card(0, "business-contacts");
    game.set_resource(0, ResourceType::Credits, 7);

    game.act(
        0,
        UserCommand::PlayCard {
            card_id: CardId::new("business-contacts"),
            payment: Payment::credits(7),
        },
    )
    .unwrap();

    match &game.player(0).selection {
        SelectionState::PendingCardDraw(pending) => {
            assert_eq!(pending.available_cards.len(), 4);
            assert_eq!(pending.free_take_count, 2);
            assert_eq!(pending.max_buy_count, 0);
        }
        other => panic!("Expected pending card draw, got {other:?}"),
    }
}
