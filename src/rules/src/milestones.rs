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

//! Milestone progress and claiming. Progress is measured at claim time;
//! the Builder milestone counts the corporation card's own tags.

use std::collections::BTreeMap;

use constants::{MAX_MILESTONES_CLAIMED, MILESTONE_COST};
use core_data::game_primitives::{MilestoneType, PlayerId, ResourceType, Tag};
use errors::{verify, ErrorCode, Result};
use game_data::game_state::GameState;
use tracing::debug;

use crate::{mutations, queries};

pub fn threshold(milestone: MilestoneType) -> i32 {
    match milestone {
        MilestoneType::Terraformer => 35,
        MilestoneType::Mayor => 3,
        MilestoneType::Gardener => 3,
        MilestoneType::Builder => 8,
        MilestoneType::Planner => 16,
    }
}

/// A player's current progress toward a milestone.
pub fn progress(game: &GameState, player_id: PlayerId, milestone: MilestoneType) -> Result<i32> {
    let player = game.player(player_id)?;
    Ok(match milestone {
        MilestoneType::Terraformer => player.terraform_rating,
        MilestoneType::Mayor => queries::cities_owned(game, player_id),
        MilestoneType::Gardener => queries::greeneries_owned(game, player_id),
        MilestoneType::Builder => queries::tag_count(player, Tag::Building),
        MilestoneType::Planner => player.hand.len() as i32,
    })
}

/// Claims a milestone: validates eligibility, deducts the claim cost, and
/// records the claim.
pub fn claim(game: &mut GameState, player_id: PlayerId, milestone: MilestoneType) -> Result<()> {
    verify!(
        !game.milestones.is_claimed(milestone),
        ErrorCode::Conflict,
        "Milestone {milestone} is already claimed"
    );
    verify!(
        game.milestones.claimed_count() < MAX_MILESTONES_CLAIMED,
        ErrorCode::PreconditionFailed,
        "All {MAX_MILESTONES_CLAIMED} milestones have been claimed"
    );
    verify!(
        progress(game, player_id, milestone)? >= threshold(milestone),
        ErrorCode::PreconditionFailed,
        "Milestone {milestone} threshold not reached"
    );
    verify!(
        game.player(player_id)?.resources.credits >= MILESTONE_COST,
        ErrorCode::InsufficientCredits,
        "Claiming a milestone costs {MILESTONE_COST}"
    );

    mutations::add_resources(
        game,
        player_id,
        BTreeMap::from([(ResourceType::Credits, -MILESTONE_COST)]),
    )?;
    mutations::claim_milestone(game, player_id, milestone)?;
    debug!(?player_id, ?milestone, "Milestone claimed");
    Ok(())
}
