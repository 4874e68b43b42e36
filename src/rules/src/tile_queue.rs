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

//! The tile placement processor and tile-selection resolution.
//!
//! The processor subscribes to `TileQueueCreated`. On each event it pops
//! the next feasible tile from the player's queue, computes the legal hexes
//! for it, and presents a pending tile selection. After the player selects
//! a hex, re-entry happens automatically because the queue publishes
//! `TileQueueCreated` again while items remain.

use std::collections::BTreeMap;

use core_data::game_primitives::{PlayerId, ResourceType, Tag, TileType};
use core_data::hex::HexCoordinate;
use dispatcher::publish;
use errors::{fail, verify, ErrorCode, Result};
use game_data::board::Occupant;
use game_data::event_data::{GameEvent, Scope};
use game_data::game_state::GameState;
use game_data::selection_data::{CardDrawSource, PendingTileSelection, QueuedTile};
use tracing::debug;

use crate::card_draw::{self, DrawCounts};
use crate::{mutations, queries, turns};

/// Bus handler for `TileQueueCreated`.
pub fn handle_tile_queue_created(
    game: &mut GameState,
    _scope: &Scope,
    event: &GameEvent,
) -> Result<()> {
    let GameEvent::TileQueueCreated { player_id } = event else {
        return Ok(());
    };
    process_next_tile(game, *player_id)
}

/// Pops queued tiles until one is globally feasible and has at least one
/// legal hex, then presents it as the player's pending tile selection.
/// Infeasible tiles (oceans when the ocean track is full, tiles with no
/// legal placement) are dropped.
pub fn process_next_tile(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    {
        let player = game.player(player_id)?;
        if player.pending_tile.is_some() || !player.selection.is_none() {
            // Re-entry happens when the blocking state resolves.
            return Ok(());
        }
    }

    loop {
        let Some(queued) = pop_queue(game, player_id)? else {
            return Ok(());
        };

        if queued.tile_type == TileType::Ocean
            && game.parameters.oceans_maxed(game.settings.ocean_target)
        {
            debug!(?player_id, "Skipping queued ocean, track is full");
            continue;
        }

        let available_hexes = game.board.legal_hexes(queued.tile_type, player_id);
        if available_hexes.is_empty() {
            debug!(?player_id, tile = ?queued.tile_type, "Skipping queued tile, no legal hex");
            continue;
        }

        game.player_mut(player_id)?.pending_tile = Some(PendingTileSelection {
            tile_type: queued.tile_type,
            available_hexes,
            source: queued.source,
        });
        return Ok(());
    }
}

fn pop_queue(game: &mut GameState, player_id: PlayerId) -> Result<Option<QueuedTile>> {
    let player = game.player_mut(player_id)?;
    let Some(queue) = player.tile_queue.as_mut() else {
        return Ok(None);
    };
    let item = queue.items.pop_front();
    if queue.items.is_empty() {
        player.tile_queue = None;
    }
    Ok(item)
}

/// Resolves a tile selection at the given coordinate: places the occupant,
/// awards placement bonuses and ocean-adjacency credits, raises oxygen and
/// terraform rating for greeneries, and awards terraform rating for placed
/// oceans. Finally kicks the queue for the next pending tile.
pub fn apply_tile_selection(
    game: &mut GameState,
    player_id: PlayerId,
    coordinate: HexCoordinate,
) -> Result<()> {
    let Some(pending) = game.player(player_id)?.pending_tile.clone() else {
        fail!(ErrorCode::PreconditionFailed, "No pending tile selection");
    };
    verify!(
        pending.available_hexes.contains(&coordinate),
        ErrorCode::InvalidArgument,
        "{coordinate} is not a legal hex for this tile"
    );

    let tile_type = pending.tile_type;
    let occupant = match tile_type {
        TileType::City => Occupant {
            tile_type,
            tags: vec![Tag::City],
            owner_id: Some(player_id),
        },
        TileType::Greenery => Occupant { tile_type, tags: vec![], owner_id: Some(player_id) },
        TileType::Ocean => Occupant { tile_type, tags: vec![], owner_id: None },
    };

    game.player_mut(player_id)?.pending_tile = None;
    let ocean_steps = mutations::place_tile(
        game,
        Some(player_id),
        coordinate,
        tile_type,
        occupant,
    )?;

    award_placement_bonuses(game, player_id, coordinate)?;

    let adjacent_oceans = game.board.adjacent_ocean_count(coordinate);
    if adjacent_oceans > 0 {
        let per_ocean = queries::ocean_adjacency_credit(game.player(player_id)?);
        mutations::add_resources(
            game,
            player_id,
            BTreeMap::from([(ResourceType::Credits, adjacent_oceans * per_ocean)]),
        )?;
    }

    if tile_type == TileType::Greenery {
        let applied = mutations::increase_oxygen(game, 1)?;
        mutations::gain_terraform_rating(game, player_id, applied)?;
    }
    if ocean_steps > 0 {
        mutations::gain_terraform_rating(game, player_id, ocean_steps)?;
    }

    // Wake the processor for the next queued tile, then let the turn
    // advance if this was the last pending obligation.
    let has_queue = game.player(player_id)?.tile_queue.is_some();
    if has_queue {
        publish(game, GameEvent::TileQueueCreated { player_id });
    }
    turns::maybe_advance(game, player_id)
}

/// Awards a hex's printed bonuses to the placing player. Resource bonuses
/// are added directly; card-draw bonuses open a pending card draw.
fn award_placement_bonuses(
    game: &mut GameState,
    player_id: PlayerId,
    coordinate: HexCoordinate,
) -> Result<()> {
    let bonuses = match game.board.tile(coordinate) {
        Some(tile) => tile.bonuses.clone(),
        None => return Ok(()),
    };

    let mut deltas: BTreeMap<ResourceType, i32> = BTreeMap::new();
    let mut draw_count = 0usize;
    for bonus in bonuses {
        if bonus.resource == ResourceType::CardDraw {
            draw_count += bonus.amount.max(0) as usize;
        } else {
            *deltas.entry(bonus.resource).or_insert(0) += bonus.amount;
        }
    }
    mutations::add_resources(game, player_id, deltas)?;
    if draw_count > 0 {
        let mut counts = DrawCounts::default();
        counts.add(ResourceType::CardDraw, draw_count);
        card_draw::create_pending(game, player_id, counts, CardDrawSource::TileBonus, None)?;
    }
    Ok(())
}
