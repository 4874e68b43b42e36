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

//! Card requirement checks. Registered requirement-tolerance effects widen
//! global-parameter requirements only; tag, production and resource
//! requirements are exact.

use core_data::game_primitives::PlayerId;
use errors::{fail, ErrorCode, Result};
use game_data::card_definition::{CardDefinition, CardRequirement};
use game_data::game_state::GameState;

use crate::queries;

/// Verifies every requirement on a card. Returns `PreconditionFailed`
/// naming the first unmet requirement.
pub fn check(game: &GameState, player_id: PlayerId, definition: &CardDefinition) -> Result<()> {
    let player = game.player(player_id)?;
    let tolerance = queries::requirement_tolerance(player);

    for requirement in &definition.requirements {
        let met = match requirement {
            CardRequirement::Temperature(comparison) => comparison
                .matches_with_tolerance(
                    game.parameters.temperature,
                    tolerance * constants::TEMPERATURE_STEP,
                ),
            CardRequirement::Oxygen(comparison) => {
                comparison.matches_with_tolerance(game.parameters.oxygen, tolerance)
            }
            CardRequirement::Oceans(comparison) => {
                comparison.matches_with_tolerance(game.parameters.oceans, tolerance)
            }
            CardRequirement::TerraformRating(comparison) => {
                comparison.matches(player.terraform_rating)
            }
            CardRequirement::Tags { tag, comparison } => {
                comparison.matches(queries::tag_count(player, *tag))
            }
            CardRequirement::Production { resource, comparison } => {
                comparison.matches(player.production.get(*resource))
            }
            CardRequirement::Resource { resource, comparison } => {
                comparison.matches(player.resources.get(*resource))
            }
            CardRequirement::CitiesOwned(comparison) => {
                comparison.matches(queries::cities_owned(game, player_id))
            }
            CardRequirement::GreeneriesOwned(comparison) => {
                comparison.matches(queries::greeneries_owned(game, player_id))
            }
        };
        if !met {
            fail!(
                ErrorCode::PreconditionFailed,
                "Requirement not met for {}: {requirement:?}",
                definition.id
            );
        }
    }
    Ok(())
}
