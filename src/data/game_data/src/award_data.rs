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

//! Funding state for awards. Awards are funded, not claimed; scoring happens
//! at game end over all players (`rules::awards`).

use core_data::game_primitives::{AwardType, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FundedAward {
    pub award: AwardType,
    pub funded_by: PlayerId,
    pub cost_paid: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwardState {
    /// In funding order; the index determines the escalating cost.
    pub funded: Vec<FundedAward>,
}

impl AwardState {
    pub fn is_funded(&self, award: AwardType) -> bool {
        self.funded.iter().any(|f| f.award == award)
    }

    pub fn funded_count(&self) -> usize {
        self.funded.len()
    }
}
