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

//! Outbound JSON frames. The state frame is the single broadcast payload;
//! errors are sent point-to-point.

use std::collections::BTreeMap;

use core_data::game_primitives::{
    AwardType, CardId, GamePhase, GameStatus, Generation, MilestoneType, PlayerId,
};
use enum_iterator::all;
use errors::GameError;
use game_data::award_data::AwardState;
use game_data::board::Tile;
use game_data::entity_data::{EntityKey, EntityState};
use game_data::game_state::{CurrentTurn, FinalScore, GameState};
use game_data::global_parameters::GlobalParameters;
use game_data::milestone_data::MilestoneState;
use game_data::player_state::{
    CardAction, CardEffect, PaymentSubstitute, PlayedCard, PlayerState, Production, Resources,
};
use game_data::selection_data::{PendingTileSelection, SelectionState};
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum OutboundFrame<'a> {
    State { game: GameView },
    Error { code: String, category: String, message: &'a str },
}

/// Builds the broadcast state frame for a game.
pub fn state_frame(game: &GameState) -> String {
    let frame = OutboundFrame::State { game: game_view(game) };
    serde_json::to_string(&frame).unwrap_or_else(|_| "{\"type\":\"error\"}".to_string())
}

/// Builds a point-to-point error frame.
pub fn error_frame(error: &GameError) -> String {
    let frame = OutboundFrame::Error {
        code: error.code.to_string(),
        category: error.category().to_string(),
        message: &error.message,
    };
    serde_json::to_string(&frame).unwrap_or_else(|_| "{\"type\":\"error\"}".to_string())
}

#[derive(Serialize)]
pub struct GameView {
    pub id: String,
    pub status: GameStatus,
    pub phase: GamePhase,
    pub generation: Generation,
    pub turn_order: Vec<PlayerId>,
    pub current_turn: Option<CurrentTurn>,
    pub parameters: GlobalParameters,
    pub board: Vec<Tile>,
    pub project_deck_size: usize,
    pub discard_pile_size: usize,
    pub milestones: Vec<MilestoneView>,
    pub awards: Vec<AwardView>,
    pub players: Vec<PlayerView>,
    pub final_scores: Option<BTreeMap<PlayerId, FinalScore>>,
}

#[derive(Serialize)]
pub struct MilestoneView {
    pub milestone: MilestoneType,
    pub claimed_by: Option<PlayerId>,
}

#[derive(Serialize)]
pub struct AwardView {
    pub award: AwardType,
    pub funded_by: Option<PlayerId>,
    pub next_cost: Option<i32>,
}

#[derive(Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub connected: bool,
    pub corporation_id: Option<CardId>,
    pub has_passed: bool,
    pub resources: Resources,
    pub production: Production,
    pub terraform_rating: i32,
    pub hand: Vec<CardId>,
    pub played_cards: Vec<PlayedCard>,
    pub actions: Vec<CardAction>,
    pub effects: Vec<CardEffect>,
    pub card_resources: BTreeMap<CardId, i32>,
    pub payment_substitutes: Vec<PaymentSubstitute>,
    pub selection: SelectionState,
    pub pending_tile: Option<PendingTileSelection>,
    pub entity_states: Vec<EntityStateView>,
}

/// Entity states are keyed by a structured [EntityKey], which cannot be a
/// JSON object key; they go on the wire as a list instead.
#[derive(Serialize)]
pub struct EntityStateView {
    pub entity: EntityKey,
    pub state: EntityState,
}

pub fn game_view(game: &GameState) -> GameView {
    let milestone_types = all::<MilestoneType>().collect::<Vec<_>>();
    let award_types = all::<AwardType>().collect::<Vec<_>>();
    GameView {
        id: game.id.to_string(),
        status: game.status,
        phase: game.phase,
        generation: game.generation,
        turn_order: game.turn_order.clone(),
        current_turn: game.current_turn,
        parameters: game.parameters,
        board: game.board.tiles().cloned().collect(),
        project_deck_size: game.deck.projects_remaining(),
        discard_pile_size: game.deck.discard_pile.len(),
        milestones: milestone_views(&game.milestones, milestone_types),
        awards: award_views(game, &game.awards, award_types),
        players: game
            .players_in_turn_order()
            .iter()
            .filter_map(|id| game.players.get(id))
            .map(player_view)
            .collect(),
        final_scores: game.final_scores.clone(),
    }
}

fn milestone_views(
    milestones: &MilestoneState,
    types: Vec<MilestoneType>,
) -> Vec<MilestoneView> {
    types
        .into_iter()
        .map(|milestone| MilestoneView {
            milestone,
            claimed_by: milestones.claimed_by.get(&milestone).copied(),
        })
        .collect()
}

fn award_views(game: &GameState, awards: &AwardState, types: Vec<AwardType>) -> Vec<AwardView> {
    types
        .into_iter()
        .map(|award| AwardView {
            award,
            funded_by: awards
                .funded
                .iter()
                .find(|f| f.award == award)
                .map(|f| f.funded_by),
            next_cost: rules::awards::next_cost(game),
        })
        .collect()
}

fn player_view(player: &PlayerState) -> PlayerView {
    PlayerView {
        id: player.id,
        name: player.name.clone(),
        connected: player.connected,
        corporation_id: player.corporation_id.clone(),
        has_passed: player.has_passed,
        resources: player.resources,
        production: player.production,
        terraform_rating: player.terraform_rating,
        hand: player.hand.clone(),
        played_cards: player.played_cards.clone(),
        actions: player.actions.clone(),
        effects: player.effects.clone(),
        card_resources: player.card_resources.clone(),
        payment_substitutes: player.payment_substitutes.clone(),
        selection: player.selection.clone(),
        pending_tile: player.pending_tile.clone(),
        entity_states: player
            .entity_states
            .iter()
            .map(|(entity, state)| EntityStateView {
                entity: entity.clone(),
                state: state.clone(),
            })
            .collect(),
    }
}
