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

mod behavior_tests;
mod card_draw_tests;
mod conversion_tests;
mod entity_state_tests;
mod event_bus_tests;
mod invariants_tests;
mod lifecycle_tests;
mod milestone_award_tests;
mod payment_tests;
mod scoring_tests;
mod session_views_tests;
mod standard_project_tests;
mod turn_flow_tests;
