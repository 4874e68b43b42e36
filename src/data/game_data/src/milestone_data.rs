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

//! Claim state for milestones. Progress functions live in
//! `rules::milestones` because they need the card registry.

use std::collections::BTreeMap;

use core_data::game_primitives::{MilestoneType, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilestoneState {
    pub claimed_by: BTreeMap<MilestoneType, PlayerId>,
}

impl MilestoneState {
    pub fn is_claimed(&self, milestone: MilestoneType) -> bool {
        self.claimed_by.contains_key(&milestone)
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed_by.len()
    }

    pub fn claimed_by(&self, player_id: PlayerId) -> impl Iterator<Item = MilestoneType> + '_ {
        self.claimed_by
            .iter()
            .filter(move |(_, p)| **p == player_id)
            .map(|(m, _)| *m)
    }
}
