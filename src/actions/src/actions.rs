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

//! Action handlers for user-initiated commands. [handle_command] is the
//! primary entry point into the rules engine for an existing game.
//!
//! Every handler validates preconditions, performs domain mutations through
//! the encapsulated mutators, and lets events drive everything else.
//! Handlers never broadcast; a successful command publishes
//! `GameStateChanged`, which the standing subscribers relay to the session
//! runtime as a `Broadcast`.

use core_data::game_primitives::{
    AwardType, GameStatus, MilestoneType, PlayerId, TileType,
};
use core_data::hex::HexCoordinate;
use dispatcher::publish;
use errors::{fail, verify, ErrorCode, Result};
use game_data::command_data::UserCommand;
use game_data::event_data::GameEvent;
use game_data::game_state::GameState;
use rules::{awards, milestones, production, queries, starting, tile_queue, turns};
use tracing::{debug, instrument};

pub mod lifecycle;
pub mod play_card;
pub mod standard_projects;

/// Top-level dispatch mutating a game in response to a user command.
/// `create-game` and `join-game` are resolved by the session layer before a
/// game exists and do not route through here.
pub fn handle_command(
    game: &mut GameState,
    player_id: PlayerId,
    command: &UserCommand,
) -> Result<()> {
    debug!(?player_id, ?command, "Handling command");
    let result = dispatch(game, player_id, command);
    if result.is_ok() {
        publish(game, GameEvent::GameStateChanged);
    }
    result
}

fn dispatch(game: &mut GameState, player_id: PlayerId, command: &UserCommand) -> Result<()> {
    match command {
        UserCommand::CreateGame { .. } | UserCommand::JoinGame { .. } => {
            fail!(ErrorCode::Internal, "Lobby commands are handled by the session layer")
        }
        UserCommand::StartGame => lifecycle::start_game(game, player_id),
        UserCommand::SelectStartingCards { card_ids, corporation_id } => {
            starting::select_starting_cards(game, player_id, card_ids, corporation_id)
        }
        UserCommand::PlayCard { card_id, payment } => {
            play_card::play_card(game, player_id, card_id, payment)
        }
        UserCommand::UseCardAction {
            card_id,
            behavior_index,
            choice_index,
            card_storage_target,
        } => play_card::use_card_action(
            game,
            player_id,
            card_id,
            *behavior_index,
            *choice_index,
            card_storage_target.clone(),
        ),
        UserCommand::BuildCity => standard_projects::build_city(game, player_id),
        UserCommand::BuildAquifer => standard_projects::build_aquifer(game, player_id),
        UserCommand::BuildPowerPlant => standard_projects::build_power_plant(game, player_id),
        UserCommand::LaunchAsteroid => standard_projects::launch_asteroid(game, player_id),
        UserCommand::PlantGreenery => standard_projects::plant_greenery(game, player_id),
        UserCommand::ConvertPlantsToGreenery => {
            standard_projects::convert_plants_to_greenery(game, player_id)
        }
        UserCommand::ConvertHeatToTemperature => {
            standard_projects::convert_heat_to_temperature(game, player_id)
        }
        UserCommand::SelectTile { coordinate } => select_tile(game, player_id, *coordinate),
        UserCommand::ConfirmCardDraw { cards_to_take, cards_to_buy } => {
            play_card::confirm_card_draw(game, player_id, cards_to_take, cards_to_buy)
        }
        UserCommand::SellPatents => standard_projects::sell_patents(game, player_id),
        UserCommand::ConfirmSellPatents { card_ids } => {
            standard_projects::confirm_sell_patents(game, player_id, card_ids)
        }
        UserCommand::ClaimMilestone { milestone } => {
            claim_milestone(game, player_id, *milestone)
        }
        UserCommand::FundAward { award } => fund_award(game, player_id, *award),
        UserCommand::SkipAction => skip_action(game, player_id),
        UserCommand::Pass => pass(game, player_id),
        UserCommand::ConfirmProductionCards { card_ids } => {
            production::confirm_cards(game, player_id, card_ids)
        }
        UserCommand::SetCorporation { player_id: target, corporation_id } => {
            starting::admin_set_corporation(game, *target, corporation_id)
        }
    }
}

/// Resolves a pending tile selection. Does not consume an action; the
/// initiating action already did (or none does, for conversion-driven
/// placements mid-resolution).
#[instrument(skip(game))]
fn select_tile(game: &mut GameState, player_id: PlayerId, coordinate: HexCoordinate) -> Result<()> {
    verify!(
        game.status == GameStatus::Active,
        ErrorCode::WrongPhase,
        "Game is not active"
    );
    tile_queue::apply_tile_selection(game, player_id, coordinate)
}

#[instrument(skip(game))]
fn claim_milestone(
    game: &mut GameState,
    player_id: PlayerId,
    milestone: MilestoneType,
) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    milestones::claim(game, player_id, milestone)?;
    turns::consume_action(game, player_id)
}

#[instrument(skip(game))]
fn fund_award(game: &mut GameState, player_id: PlayerId, award: AwardType) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    awards::fund(game, player_id, award)?;
    turns::consume_action(game, player_id)
}

#[instrument(skip(game))]
fn skip_action(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    turns::skip(game, player_id)
}

#[instrument(skip(game))]
fn pass(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    queries::verify_can_act(game, player_id)?;
    turns::pass(game, player_id)
}

/// Used in handler signatures that queue tiles for placement.
pub(crate) fn has_legal_hex(game: &GameState, tile_type: TileType, player_id: PlayerId) -> bool {
    !game.board.legal_hexes(tile_type, player_id).is_empty()
}
