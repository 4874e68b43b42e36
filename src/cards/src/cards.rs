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

//! The process-wide card registry. Initialized once at boot via
//! [initialize] and read-only thereafter; games reference definitions by id
//! through [get].

use std::collections::HashMap;

use core_data::game_primitives::{CardId, CardType};
use errors::{ErrorCode, GameError, Result};
use game_data::card_definition::{CardDefinition, CardPack};
use once_cell::sync::OnceCell;

pub mod card_helpers;
pub mod corporations;
pub mod projects;

static REGISTRY: OnceCell<HashMap<&'static str, CardDefinition>> = OnceCell::new();

/// Populates the registry with the full catalog. Idempotent; must be called
/// before any game is constructed.
pub fn initialize() {
    REGISTRY.get_or_init(|| {
        let mut result = HashMap::new();
        for definition in corporations::all().into_iter().chain(projects::all()) {
            assert!(
                result.insert(definition.id, definition).is_none(),
                "Duplicate card id in catalog"
            );
        }
        result
    });
}

fn registry() -> &'static HashMap<&'static str, CardDefinition> {
    REGISTRY.get().expect("Card registry is not initialized")
}

/// Looks up a card definition by id.
pub fn get(card_id: &CardId) -> Result<&'static CardDefinition> {
    match registry().get(card_id.as_str()) {
        Some(definition) => Ok(definition),
        None => Err(GameError::new(
            ErrorCode::InvalidArgument,
            format!("Unknown card id '{card_id}'"),
        )),
    }
}

pub fn exists(card_id: &CardId) -> bool {
    registry().contains_key(card_id.as_str())
}

/// All project card ids in the given packs, sorted for deterministic deck
/// construction.
pub fn project_ids(packs: &[CardPack]) -> Vec<CardId> {
    let mut result = registry()
        .values()
        .filter(|d| d.card_type == CardType::Project && packs.contains(&d.pack))
        .map(|d| d.card_id())
        .collect::<Vec<_>>();
    result.sort();
    result
}

/// All corporation card ids in the given packs, sorted.
pub fn corporation_ids(packs: &[CardPack]) -> Vec<CardId> {
    let mut result = registry()
        .values()
        .filter(|d| d.card_type == CardType::Corporation && packs.contains(&d.pack))
        .map(|d| d.card_id())
        .collect::<Vec<_>>();
    result.sort();
    result
}
