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

//! Whole-game property checks: the domain invariants must hold after every
//! handler, successful or not.

use core_data::game_primitives::ResourceType;
use game_data::command_data::{Payment, UserCommand};
use game_data::game_state::GameState;
use game_data::selection_data::SelectionState;
use test_utils::TestGame;

struct ParameterWatch {
    temperature: i32,
    oxygen: i32,
    oceans: i32,
}

impl ParameterWatch {
    fn new(game: &GameState) -> Self {
        Self {
            temperature: game.parameters.temperature,
            oxygen: game.parameters.oxygen,
            oceans: game.parameters.oceans,
        }
    }

    /// Global parameters are monotonic non-decreasing for the whole game.
    fn check(&mut self, game: &GameState) {
        assert!(game.parameters.temperature >= self.temperature);
        assert!(game.parameters.oxygen >= self.oxygen);
        assert!(game.parameters.oceans >= self.oceans);
        self.temperature = game.parameters.temperature;
        self.oxygen = game.parameters.oxygen;
        self.oceans = game.parameters.oceans;
    }
}

fn assert_invariants(game: &GameState) {
    for player in game.players.values() {
        let r = &player.resources;
        assert!(r.credits >= 0, "credits went negative");
        assert!(r.steel >= 0 && r.titanium >= 0, "metals went negative");
        assert!(r.plants >= 0 && r.energy >= 0 && r.heat >= 0, "resources went negative");

        let p = &player.production;
        assert!(p.credits >= -5, "credit production below floor");
        assert!(
            p.steel >= 0 && p.titanium >= 0 && p.plants >= 0 && p.energy >= 0 && p.heat >= 0,
            "production went negative"
        );

        // At most one sticky selection structure is active per player.
        assert!(
            !(player.selection.is_blocking() && player.pending_tile.is_some()),
            "selection and tile selection active simultaneously"
        );

        for card_id in &player.hand {
            assert!(
                !player.played_cards.iter().any(|c| c.card_id == *card_id),
                "hand and played cards overlap"
            );
        }
    }

    assert!(game.parameters.oceans <= 9);
    assert_eq!(game.parameters.oceans, game.board.ocean_count());
    assert!(game.milestones.claimed_count() <= 3);
    assert!(game.awards.funded_count() <= 3);
}

/// Plays out a scripted solo generation, checking every invariant after
/// each command, including rejected ones.
#[test]
fn invariants_hold_across_a_scripted_game() {
    let mut game = TestGame::started(1);
    let mut watch = ParameterWatch::new(&game.game);

    let script: Vec<UserCommand> = vec![
        UserCommand::BuildPowerPlant,
        UserCommand::LaunchAsteroid,
        UserCommand::BuildAquifer,
        // Rejected: an aquifer is pending placement, actions are blocked.
        UserCommand::BuildPowerPlant,
    ];
    for command in script {
        let _ = game.act(0, command);
        assert_invariants(&game.game);
        watch.check(&game.game);
    }

    let pending = game.player(0).pending_tile.clone().unwrap();
    game.act(0, UserCommand::SelectTile { coordinate: pending.available_hexes[0] }).unwrap();
    assert_invariants(&game.game);
    watch.check(&game.game);

    game.give_card(0, "mine");
    game.set_resource(0, ResourceType::Credits, 10);
    game.act(
        0,
        UserCommand::PlayCard { card_id: "mine".into(), payment: Payment::credits(4) },
    )
    .unwrap();
    assert_invariants(&game.game);

    game.give_card(0, "research");
    game.act(0, UserCommand::SellPatents).unwrap();
    assert_invariants(&game.game);
    game.act(0, UserCommand::ConfirmSellPatents { card_ids: vec!["research".into()] }).unwrap();
    assert_invariants(&game.game);

    game.act(0, UserCommand::Pass).unwrap();
    assert_invariants(&game.game);
    watch.check(&game.game);

    let available = match &game.player(0).selection {
        SelectionState::ProductionPhase(pending) => pending.available_cards.clone(),
        other => panic!("Expected production selection, got {other:?}"),
    };
    game.act(
        0,
        UserCommand::ConfirmProductionCards { card_ids: available[..1].to_vec() },
    )
    .unwrap();
    assert_invariants(&game.game);
    watch.check(&game.game);
    assert_eq!(game.game.generation, 2);
}

/// The generation round-trip: resources after production equal resources
/// before plus production, terraform-rating income and the energy-to-heat
/// conversion.
#[test]
fn production_round_trip_matches_snapshot() {
    let mut game = TestGame::started(1);
    {
        let player = game.player_mut(0);
        player.production.credits = 3;
        player.production.plants = 2;
        player.production.energy = 1;
        player.resources.energy = 4;
        player.resources.heat = 1;
    }
    game.act(0, UserCommand::Pass).unwrap();

    let (before, after, converted, income) = match &game.player(0).selection {
        SelectionState::ProductionPhase(pending) => (
            pending.before_resources,
            pending.after_resources,
            pending.energy_converted,
            pending.credits_income,
        ),
        other => panic!("Expected production selection, got {other:?}"),
    };

    assert_eq!(converted, 4);
    assert_eq!(income, 3 + 20);
    assert_eq!(after.credits, before.credits + income);
    assert_eq!(after.plants, before.plants + 2);
    assert_eq!(after.energy, 1);
    assert_eq!(after.heat, before.heat + converted);
    assert_eq!(game.player(0).resources, after);
}
