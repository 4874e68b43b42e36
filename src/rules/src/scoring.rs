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

//! Final scoring, computed once when the game finishes: terraform rating,
//! award placements, claimed milestones, board presence, and card victory
//! points.

use std::collections::BTreeMap;

use constants::{
    AWARD_FIRST_PLACE_POINTS, AWARD_SECOND_PLACE_POINTS, MILESTONE_VICTORY_POINTS,
};
use core_data::game_primitives::{PlayerId, TileType};
use game_data::card_definition::VictoryPoints;
use game_data::game_state::{FinalScore, GameState};
use game_data::player_state::PlayerState;

use crate::{awards, queries};

/// Scores every player. Award placements are skipped in solo play.
pub fn final_scores(game: &GameState) -> BTreeMap<PlayerId, FinalScore> {
    let award_points = award_points(game);
    let mut result = BTreeMap::new();
    for (player_id, player) in &game.players {
        let milestones =
            game.milestones.claimed_by(*player_id).count() as i32 * MILESTONE_VICTORY_POINTS;
        let awards = award_points.get(player_id).copied().unwrap_or(0);
        let board = board_points(game, *player_id);
        let cards = card_points(player);
        let terraform_rating = player.terraform_rating;
        let total = terraform_rating + milestones + awards + board + cards;
        result.insert(
            *player_id,
            FinalScore { terraform_rating, milestones, awards, board, cards, total },
        );
    }
    result
}

/// First place on each funded award is worth five points, second place two.
/// Ties share the higher placement; a tie for first eliminates second place.
fn award_points(game: &GameState) -> BTreeMap<PlayerId, i32> {
    let mut result = BTreeMap::new();
    if game.is_solo() {
        return result;
    }

    for funded in &game.awards.funded {
        let mut measures: Vec<(PlayerId, i32)> = game
            .players
            .keys()
            .filter_map(|id| awards::measure(game, *id, funded.award).ok().map(|m| (*id, m)))
            .collect();
        measures.sort_by_key(|(_, measure)| std::cmp::Reverse(*measure));
        let Some((_, best)) = measures.first().copied() else {
            continue;
        };

        let first_place: Vec<PlayerId> =
            measures.iter().filter(|(_, m)| *m == best).map(|(id, _)| *id).collect();
        for player_id in &first_place {
            *result.entry(*player_id).or_insert(0) += AWARD_FIRST_PLACE_POINTS;
        }
        if first_place.len() == 1 {
            if let Some((_, second_best)) =
                measures.iter().find(|(_, m)| *m < best).copied()
            {
                for (player_id, measure) in &measures {
                    if *measure == second_best {
                        *result.entry(*player_id).or_insert(0) += AWARD_SECOND_PLACE_POINTS;
                    }
                }
            }
        }
    }
    result
}

/// One point per owned greenery, plus one point per greenery adjacent to
/// each owned city.
fn board_points(game: &GameState, player_id: PlayerId) -> i32 {
    let greeneries = queries::greeneries_owned(game, player_id);
    let mut city_points = 0;
    for tile in game.board.tiles_owned_by(player_id) {
        let is_city = tile
            .occupant
            .as_ref()
            .map(|o| o.tile_type == TileType::City)
            .unwrap_or(false);
        if !is_city {
            continue;
        }
        city_points += game
            .board
            .adjacent_tiles(tile.coordinate)
            .iter()
            .filter(|t| {
                t.occupant
                    .as_ref()
                    .map(|o| o.tile_type == TileType::Greenery)
                    .unwrap_or(false)
            })
            .count() as i32;
    }
    greeneries + city_points
}

/// Victory points from played cards.
fn card_points(player: &PlayerState) -> i32 {
    let mut result = 0;
    for played in &player.played_cards {
        let Ok(definition) = cards::get(&played.card_id) else {
            continue;
        };
        for condition in &definition.victory_points {
            result += match condition {
                VictoryPoints::Fixed(points) => *points,
                VictoryPoints::PerStoredResource { per, .. } => {
                    if *per > 0 {
                        player.stored_on_card(&played.card_id) / per
                    } else {
                        0
                    }
                }
                VictoryPoints::PerTag { tag, per } => {
                    if *per > 0 {
                        queries::tag_count(player, *tag) / per
                    } else {
                        0
                    }
                }
            };
        }
    }
    result
}
