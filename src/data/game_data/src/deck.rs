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

//! The in-game project and corporation decks. Draws are FIFO from the front
//! of the draw pile; when it runs dry the discard pile is reshuffled in by
//! `rules::mutations::draw_from_deck` (shuffling needs the game RNG, which
//! lives on the game state).

use std::collections::VecDeque;

use core_data::game_primitives::CardId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckState {
    pub project_deck: VecDeque<CardId>,
    pub corporation_deck: VecDeque<CardId>,
    pub discard_pile: Vec<CardId>,
}

impl DeckState {
    /// Cards remaining before a reshuffle would be needed.
    pub fn projects_remaining(&self) -> usize {
        self.project_deck.len()
    }

    /// Pops the next project card, if any. Reshuffling on empty is the
    /// caller's responsibility.
    pub fn internal_draw_project(&mut self) -> Option<CardId> {
        self.project_deck.pop_front()
    }

    pub fn internal_draw_corporation(&mut self) -> Option<CardId> {
        self.corporation_deck.pop_front()
    }

    /// Removes and returns the discard pile for reshuffling.
    pub fn internal_take_discard(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.discard_pile)
    }

    pub fn internal_discard(&mut self, card_id: CardId) {
        self.discard_pile.push(card_id);
    }
}
