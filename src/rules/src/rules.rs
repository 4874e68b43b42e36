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

//! All game rules: encapsulated mutators, the card behavior engine, payment
//! and requirement validation, the turn & phase controller, and the tile
//! placement processor.

pub mod awards;
pub mod behaviors;
pub mod card_draw;
pub mod milestones;
pub mod mutations;
pub mod payment;
pub mod production;
pub mod queries;
pub mod requirements;
pub mod scoring;
pub mod starting;
pub mod subscriptions;
pub mod tile_queue;
pub mod turns;
