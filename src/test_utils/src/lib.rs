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

//! Test harness driving the real engine: games are created, joined and
//! started through the actual action handlers, and commands route through
//! `actions::handle_command`. Direct field access is reserved for arranging
//! preconditions.

use core_data::game_primitives::{CardId, PlayerId, ResourceType};
use errors::Result;
use game_data::command_data::UserCommand;
use game_data::game_state::{CurrentTurn, GameSettings, GameState};
use game_data::player_state::PlayerState;

pub const TEST_SEED: u64 = 31415926535;

/// A game under test with its players in join order.
pub struct TestGame {
    pub game: GameState,
    pub players: Vec<PlayerId>,
}

impl TestGame {
    /// A lobby game with `player_count` joined players and a deterministic
    /// RNG.
    pub fn new(player_count: usize) -> Self {
        cards::initialize();
        let settings = GameSettings {
            deterministic_seed: Some(TEST_SEED),
            ..GameSettings::default()
        };
        let mut game = actions::lifecycle::create_game(Some(settings));
        let mut players = Vec::with_capacity(player_count);
        for index in 0..player_count {
            let player_id =
                actions::lifecycle::join_game(&mut game, &format!("player-{index}"), None)
                    .expect("join failed");
            players.push(player_id);
        }
        Self { game, players }
    }

    /// A started game in the Action phase: every player has been assigned
    /// the given corporation via the admin command (keeping zero starting
    /// project cards).
    pub fn started_with_corporation(player_count: usize, corporation: &str) -> Self {
        let mut test_game = Self::new(player_count);
        test_game
            .act(0, UserCommand::StartGame)
            .expect("start failed");
        for player_id in test_game.players.clone() {
            let command = UserCommand::SetCorporation {
                player_id,
                corporation_id: CardId::new(corporation),
            };
            test_game.act(0, command).expect("set-corporation failed");
        }
        test_game
    }

    /// A started two-player game with the plain Credicor corporation.
    pub fn started(player_count: usize) -> Self {
        Self::started_with_corporation(player_count, "credicor")
    }

    /// Routes a command through the real handler entry point.
    pub fn act(&mut self, player_index: usize, command: UserCommand) -> Result<()> {
        let player_id = self.players[player_index];
        actions::handle_command(&mut self.game, player_id, &command)
    }

    pub fn player(&self, player_index: usize) -> &PlayerState {
        &self.game.players[&self.players[player_index]]
    }

    pub fn player_mut(&mut self, player_index: usize) -> &mut PlayerState {
        self.game
            .players
            .get_mut(&self.players[player_index])
            .expect("unknown test player")
    }

    /// Arranges a resource level directly. Test setup only.
    pub fn set_resource(&mut self, player_index: usize, resource: ResourceType, amount: i32) {
        let current = self.player(player_index).resources.get(resource);
        self.player_mut(player_index).resources.add(resource, amount - current);
    }

    /// Puts a card into a player's hand through the mutator so the cache
    /// picks it up.
    pub fn give_card(&mut self, player_index: usize, card_id: &str) {
        let player_id = self.players[player_index];
        rules::mutations::add_cards_to_hand(
            &mut self.game,
            player_id,
            vec![CardId::new(card_id)],
        )
        .expect("give_card failed");
    }

    /// Moves a card directly into the played area without paying for it,
    /// applying its behaviors. Test setup only.
    pub fn force_play(&mut self, player_index: usize, card_id: &str) {
        let player_id = self.players[player_index];
        self.give_card(player_index, card_id);
        rules::mutations::move_card_to_played(&mut self.game, player_id, &CardId::new(card_id))
            .expect("force_play move failed");
        rules::behaviors::apply_card_behaviors(&mut self.game, player_id, &CardId::new(card_id))
            .expect("force_play behaviors failed");
    }

    /// Makes `player_index` the current player with the given action
    /// budget. Test setup only.
    pub fn set_turn(&mut self, player_index: usize, actions_remaining: i32) {
        self.game.current_turn =
            Some(CurrentTurn { player_id: self.players[player_index], actions_remaining });
    }

    pub fn current_player_index(&self) -> Option<usize> {
        self.game
            .current_player_id()
            .and_then(|id| self.players.iter().position(|p| *p == id))
    }
}
