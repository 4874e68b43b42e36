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

//! Award funding and measurement. Awards are funded during the game at an
//! escalating cost and scored over all players at game end.

use std::collections::BTreeMap;

use constants::{AWARD_COSTS, MAX_AWARDS_FUNDED};
use core_data::game_primitives::{AwardType, PlayerId, ResourceType, Tag};
use errors::{verify, ErrorCode, Result};
use game_data::game_state::GameState;
use tracing::debug;

use crate::{mutations, queries};

/// The cost of funding the next award.
pub fn next_cost(game: &GameState) -> Option<i32> {
    AWARD_COSTS.get(game.awards.funded_count()).copied()
}

/// A player's measure for an award, used for end-of-game placement.
pub fn measure(game: &GameState, player_id: PlayerId, award: AwardType) -> Result<i32> {
    let player = game.player(player_id)?;
    Ok(match award {
        AwardType::Landlord => game.board.tiles_owned_by(player_id).count() as i32,
        AwardType::Banker => player.production.credits,
        AwardType::Scientist => queries::tag_count(player, Tag::Science),
        AwardType::Thermalist => player.resources.heat,
        AwardType::Miner => player.resources.steel + player.resources.titanium,
    })
}

/// Funds an award: validates eligibility, deducts the escalating cost, and
/// records the funding.
pub fn fund(game: &mut GameState, player_id: PlayerId, award: AwardType) -> Result<()> {
    verify!(
        !game.awards.is_funded(award),
        ErrorCode::Conflict,
        "Award {award} is already funded"
    );
    verify!(
        game.awards.funded_count() < MAX_AWARDS_FUNDED,
        ErrorCode::PreconditionFailed,
        "All {MAX_AWARDS_FUNDED} awards have been funded"
    );
    let cost = AWARD_COSTS[game.awards.funded_count()];
    verify!(
        game.player(player_id)?.resources.credits >= cost,
        ErrorCode::InsufficientCredits,
        "Funding this award costs {cost}"
    );

    mutations::add_resources(
        game,
        player_id,
        BTreeMap::from([(ResourceType::Credits, -cost)]),
    )?;
    mutations::fund_award(game, player_id, award, cost)?;
    debug!(?player_id, ?award, cost, "Award funded");
    Ok(())
}
