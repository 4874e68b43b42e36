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

//! Sticky per-player selection states. While one of these is present the
//! player cannot take ordinary actions; the pending selection must be
//! resolved first.
//!
//! These are plain data rather than callbacks because they must serialize
//! with the game state; the resolution logic lives with the action handlers.

use std::collections::VecDeque;

use core_data::game_primitives::{CardId, StandardProject, TileType};
use core_data::hex::HexCoordinate;
use serde::{Deserialize, Serialize};

use crate::player_state::Resources;

/// Where a pending card draw came from, used to route confirmation back to
/// its source.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardDrawSource {
    /// A card behavior output (on play or card action).
    Behavior,
    /// A card-draw placement bonus on a board hex.
    TileBonus,
}

/// A deferred card draw/peek/buy selection presented to one player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PendingCardDraw {
    pub available_cards: Vec<CardId>,
    /// Number of cards which may (and for pure draws, must) be taken for
    /// free.
    pub free_take_count: usize,
    /// Number of additional cards which may be bought.
    pub max_buy_count: usize,
    pub card_buy_cost: i32,
    pub source: CardDrawSource,
    /// For draws created by a manual card action: the acting card. Usage
    /// counters and action consumption are applied at confirmation time.
    pub source_card_id: Option<CardId>,
    pub source_behavior_index: Option<usize>,
}

impl PendingCardDraw {
    /// A pure card draw: every available card must be taken, nothing may be
    /// bought.
    pub fn must_take_all(&self) -> bool {
        self.max_buy_count == 0 && self.free_take_count >= self.available_cards.len()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardSelectionSource {
    SellPatents,
}

/// A generic pick-N-cards selection (currently only the sell-patents flow).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PendingCardSelection {
    pub available_cards: Vec<CardId>,
    /// Credits charged per selected card.
    pub cost_per_card: i32,
    /// Credits awarded per selected card.
    pub reward_per_card: i32,
    pub min_cards: usize,
    pub max_cards: usize,
    pub source: CardSelectionSource,
}

/// The initial deal: project cards which may be bought and corporations to
/// choose between.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SelectStartingCards {
    pub available_cards: Vec<CardId>,
    pub available_corporations: Vec<CardId>,
}

/// Per-player production phase summary and card-buy selection.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProductionPhase {
    pub available_cards: Vec<CardId>,
    pub selection_complete: bool,
    pub before_resources: Resources,
    pub after_resources: Resources,
    pub energy_converted: i32,
    pub credits_income: i32,
}

/// The mutually-exclusive selection states a player can be in.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionState {
    #[default]
    None,
    SelectStartingCards(SelectStartingCards),
    PendingCardDraw(PendingCardDraw),
    PendingCardSelection(PendingCardSelection),
    ProductionPhase(ProductionPhase),
}

impl SelectionState {
    pub fn is_none(&self) -> bool {
        matches!(self, SelectionState::None)
    }

    /// Whether this selection gates ordinary actions. The production phase
    /// selection is not blocking in the action-phase sense because no turn
    /// exists while it is open.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, SelectionState::None)
    }
}

/// Why a tile ended up in a player's placement queue.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TilePlacementSource {
    StandardProject(StandardProject),
    Behavior { card_id: CardId },
    Conversion,
}

/// A tile selection currently presented to the player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PendingTileSelection {
    pub tile_type: TileType,
    pub available_hexes: Vec<HexCoordinate>,
    pub source: TilePlacementSource,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct QueuedTile {
    pub tile_type: TileType,
    pub source: TilePlacementSource,
}

/// Tiles awaiting placement, drained front-to-back by the tile placement
/// processor.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct TileSelectionQueue {
    pub items: VecDeque<QueuedTile>,
}
