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

//! The three global terraforming parameters. Each increase operation
//! saturates at its target and reports the number of steps actually applied;
//! awarding terraform rating for those steps is the caller's responsibility,
//! not the mutator's.

use constants::{MIN_TEMPERATURE, TEMPERATURE_STEP};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GlobalParameters {
    /// Degrees Celsius, moving in steps of two.
    pub temperature: i32,
    /// Percent, moving in steps of one.
    pub oxygen: i32,
    /// Number of placed ocean tiles.
    pub oceans: i32,
}

impl GlobalParameters {
    pub fn initial() -> Self {
        Self { temperature: MIN_TEMPERATURE, oxygen: 0, oceans: 0 }
    }

    /// Raises temperature by up to `steps` steps, saturating at `target`.
    /// Returns the number of steps actually applied.
    pub fn internal_increase_temperature(&mut self, steps: i32, target: i32) -> i32 {
        let available = (target - self.temperature) / TEMPERATURE_STEP;
        let applied = steps.clamp(0, available.max(0));
        self.temperature += applied * TEMPERATURE_STEP;
        applied
    }

    /// Raises oxygen by up to `steps` percent, saturating at `target`.
    pub fn internal_increase_oxygen(&mut self, steps: i32, target: i32) -> i32 {
        let applied = steps.clamp(0, (target - self.oxygen).max(0));
        self.oxygen += applied;
        applied
    }

    /// Counts newly placed oceans, saturating at `target`.
    pub fn internal_increase_oceans(&mut self, count: i32, target: i32) -> i32 {
        let applied = count.clamp(0, (target - self.oceans).max(0));
        self.oceans += applied;
        applied
    }

    pub fn temperature_maxed(&self, target: i32) -> bool {
        self.temperature >= target
    }

    pub fn oxygen_maxed(&self, target: i32) -> bool {
        self.oxygen >= target
    }

    pub fn oceans_maxed(&self, target: i32) -> bool {
        self.oceans >= target
    }

    /// Whether every parameter has reached its target.
    pub fn all_targets_met(&self, temperature: i32, oxygen: i32, oceans: i32) -> bool {
        self.temperature_maxed(temperature)
            && self.oxygen_maxed(oxygen)
            && self.oceans_maxed(oceans)
    }
}
