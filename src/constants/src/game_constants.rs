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

pub const STARTING_TERRAFORM_RATING: i32 = 20;

pub const ACTIONS_PER_TURN: i32 = 2;

pub const STARTING_HAND_PROJECTS: usize = 10;

pub const STARTING_HAND_CORPORATIONS: usize = 2;

pub const CARD_BUY_COST: i32 = 3;

pub const PRODUCTION_PHASE_CARD_DRAW: usize = 4;

pub const MIN_TEMPERATURE: i32 = -30;

pub const MAX_TEMPERATURE: i32 = 8;

pub const TEMPERATURE_STEP: i32 = 2;

pub const MAX_OXYGEN: i32 = 14;

pub const MAX_OCEANS: i32 = 9;

pub const MIN_CREDITS_PRODUCTION: i32 = -5;

pub const CITY_COST: i32 = 25;

pub const AQUIFER_COST: i32 = 18;

pub const ASTEROID_COST: i32 = 14;

pub const POWER_PLANT_COST: i32 = 11;

pub const GREENERY_COST: i32 = 23;

pub const PLANTS_PER_GREENERY: i32 = 8;

pub const HEAT_PER_TEMPERATURE_STEP: i32 = 8;

pub const SELL_PATENT_REWARD: i32 = 1;

pub const MILESTONE_COST: i32 = 8;

pub const MAX_MILESTONES_CLAIMED: usize = 3;

pub const MILESTONE_VICTORY_POINTS: i32 = 5;

pub const AWARD_COSTS: [i32; 3] = [8, 14, 20];

pub const MAX_AWARDS_FUNDED: usize = 3;

pub const AWARD_FIRST_PLACE_POINTS: i32 = 5;

pub const AWARD_SECOND_PLACE_POINTS: i32 = 2;

pub const STEEL_VALUE: i32 = 2;

pub const TITANIUM_VALUE: i32 = 3;

pub const OCEAN_ADJACENCY_CREDITS: i32 = 2;
