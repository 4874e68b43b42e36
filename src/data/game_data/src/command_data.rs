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

//! User-intent commands as they arrive from the transport layer, and the
//! payment record used when playing cards. Inbound envelopes are
//! `{type, payload}` JSON; the `type` labels below are the closed command
//! set.

use std::collections::BTreeMap;

use core_data::game_primitives::{
    AwardType, CardId, MilestoneType, PlayerId, ResourceType,
};
use core_data::hex::HexCoordinate;
use serde::{Deserialize, Serialize};

use crate::game_state::GameSettings;

/// How a player pays a card's cost. Credits, steel on Building cards,
/// titanium on Space cards, plus any registered payment substitutes.
#[derive(Debug, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub credits: i32,
    #[serde(default)]
    pub steel: i32,
    #[serde(default)]
    pub titanium: i32,
    #[serde(default)]
    pub substitutes: BTreeMap<ResourceType, i32>,
}

impl Payment {
    pub fn credits(amount: i32) -> Self {
        Self { credits: amount, ..Self::default() }
    }
}

/// The closed set of commands a client can issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum UserCommand {
    CreateGame {
        #[serde(default)]
        settings: Option<GameSettings>,
    },
    JoinGame {
        name: String,
        #[serde(default)]
        player_id: Option<PlayerId>,
    },
    StartGame,
    SelectStartingCards {
        card_ids: Vec<CardId>,
        corporation_id: CardId,
    },
    PlayCard {
        card_id: CardId,
        #[serde(default)]
        payment: Payment,
    },
    UseCardAction {
        card_id: CardId,
        behavior_index: usize,
        #[serde(default)]
        choice_index: Option<usize>,
        #[serde(default)]
        card_storage_target: Option<CardId>,
    },
    BuildCity,
    BuildAquifer,
    BuildPowerPlant,
    LaunchAsteroid,
    PlantGreenery,
    ConvertPlantsToGreenery,
    ConvertHeatToTemperature,
    SelectTile {
        coordinate: HexCoordinate,
    },
    ConfirmCardDraw {
        #[serde(default)]
        cards_to_take: Vec<CardId>,
        #[serde(default)]
        cards_to_buy: Vec<CardId>,
    },
    SellPatents,
    ConfirmSellPatents {
        card_ids: Vec<CardId>,
    },
    ClaimMilestone {
        milestone: MilestoneType,
    },
    FundAward {
        award: AwardType,
    },
    SkipAction,
    Pass,
    ConfirmProductionCards {
        #[serde(default)]
        card_ids: Vec<CardId>,
    },
    /// Admin override used by tooling.
    SetCorporation {
        player_id: PlayerId,
        corporation_id: CardId,
    },
}
