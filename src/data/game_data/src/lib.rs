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

pub mod award_data;
pub mod behavior_data;
pub mod board;
pub mod card_definition;
pub mod command_data;
pub mod deck;
pub mod entity_data;
pub mod event_data;
pub mod game_state;
pub mod global_parameters;
pub mod milestone_data;
pub mod player_state;
pub mod selection_data;
