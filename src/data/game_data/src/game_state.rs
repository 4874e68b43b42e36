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

//! Core data structures for tracking the state of an ongoing game.

use std::collections::BTreeMap;

use core_data::game_primitives::{
    ActionsRemaining, GameId, GamePhase, GameStatus, Generation, PlayerId,
};
use errors::{fail, ErrorCode, Result};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

use crate::award_data::AwardState;
use crate::board::{self, Board};
use crate::card_definition::CardPack;
use crate::deck::DeckState;
use crate::event_data::EventBus;
use crate::global_parameters::GlobalParameters;
use crate::milestone_data::MilestoneState;
use crate::player_state::PlayerState;

/// Describes options for this game and the set of rules it is using.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    pub max_players: usize,
    pub card_packs: Vec<CardPack>,
    pub temperature_target: i32,
    pub oxygen_target: i32,
    pub ocean_target: i32,
    /// If set, all random choices within this game are made with a seeded
    /// generator. Useful for tests.
    pub deterministic_seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_players: 5,
            card_packs: vec![CardPack::Base, CardPack::Promo],
            temperature_target: constants::MAX_TEMPERATURE,
            oxygen_target: constants::MAX_OXYGEN,
            ocean_target: constants::MAX_OCEANS,
            deterministic_seed: None,
        }
    }
}

/// Whose turn it is and how many turn-budget actions they have left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CurrentTurn {
    pub player_id: PlayerId,
    pub actions_remaining: ActionsRemaining,
}

/// One player's final score, computed when the game finishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalScore {
    pub terraform_rating: i32,
    pub milestones: i32,
    pub awards: i32,
    pub board: i32,
    pub cards: i32,
    pub total: i32,
}

/// Stores the primary state for an ongoing game. The game is the owning
/// aggregate: every entity is reachable from it, and the event bus it owns
/// is torn down with it.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    pub id: GameId,
    pub status: GameStatus,
    pub phase: GamePhase,
    pub generation: Generation,
    pub settings: GameSettings,
    pub host_player_id: Option<PlayerId>,
    pub turn_order: Vec<PlayerId>,
    pub current_turn: Option<CurrentTurn>,
    pub parameters: GlobalParameters,
    pub board: Board,
    pub deck: DeckState,
    pub milestones: MilestoneState,
    pub awards: AwardState,
    pub players: BTreeMap<PlayerId, PlayerState>,
    pub final_scores: Option<BTreeMap<PlayerId, FinalScore>>,
    /// Subscriptions hold function pointers and are not serializable; they
    /// are reinstalled when a game is constructed.
    #[serde(skip)]
    pub event_bus: EventBus,
    /// Seeded generator when `settings.deterministic_seed` is set, otherwise
    /// `rand::thread_rng` is used and behavior is not deterministic.
    pub rng: Option<Xoshiro256StarStar>,
}

impl GameState {
    /// Creates a new game in the Lobby with a generated board.
    pub fn new(id: GameId, settings: GameSettings) -> Self {
        let rng = settings.deterministic_seed.map(Xoshiro256StarStar::seed_from_u64);
        Self {
            id,
            status: GameStatus::Lobby,
            phase: GamePhase::Lobby,
            generation: 1,
            settings,
            host_player_id: None,
            turn_order: vec![],
            current_turn: None,
            parameters: GlobalParameters::initial(),
            board: board::standard_board(),
            deck: DeckState::default(),
            milestones: MilestoneState::default(),
            awards: AwardState::default(),
            players: BTreeMap::new(),
            final_scores: None,
            event_bus: EventBus::default(),
            rng,
        }
    }

    pub fn player(&self, player_id: PlayerId) -> Result<&PlayerState> {
        match self.players.get(&player_id) {
            Some(player) => Ok(player),
            None => fail!(ErrorCode::NotFound, "Player {player_id} is not in game {}", self.id),
        }
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Result<&mut PlayerState> {
        let game_id = self.id;
        match self.players.get_mut(&player_id) {
            Some(player) => Ok(player),
            None => fail!(ErrorCode::NotFound, "Player {player_id} is not in game {game_id}"),
        }
    }

    /// Players in turn order. Before the turn order is randomized (Lobby),
    /// join order applies.
    pub fn players_in_turn_order(&self) -> Vec<PlayerId> {
        if self.turn_order.is_empty() {
            self.players.values().map(|p| p.id).collect()
        } else {
            self.turn_order.clone()
        }
    }

    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_turn.map(|t| t.player_id)
    }

    pub fn is_current_turn(&self, player_id: PlayerId) -> bool {
        self.current_player_id() == Some(player_id)
    }

    pub fn is_solo(&self) -> bool {
        self.players.len() == 1
    }

    pub fn find_player_by_name(&self, name: &str) -> Option<&PlayerState> {
        self.players.values().find(|p| p.name == name)
    }

    /// Shuffles a slice with the game RNG when one is configured, falling
    /// back to the thread RNG.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        match self.rng.as_mut() {
            Some(rng) => items.shuffle(rng),
            None => items.shuffle(&mut ThreadRng::default()),
        }
    }
}
