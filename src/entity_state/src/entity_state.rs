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

//! The entity-state cache: per-player materialized views of "is this card
//! playable / action usable / project buildable / milestone claimable /
//! award fundable".
//!
//! One view exists per entity. Each view holds its own subscription tokens
//! on the event bus; when the entity is destroyed (a card leaves the hand)
//! its subscriptions are released. Recalculation is a pure function over
//! the game state and the card registry, stored back onto the player.

use core_data::game_primitives::{
    AwardType, CardId, MilestoneType, PlayerId, ResourceType, StandardProject, TileType,
};
use enum_iterator::all;
use errors::{ErrorCode, Result};
use game_data::behavior_data::{CardBehavior, ConditionTarget, ResourceCondition};
use game_data::entity_data::{EntityKey, EntityState, StateError};
use game_data::event_data::{GameEvent, GameEventKind, Scope};
use game_data::game_state::GameState;
use game_data::player_state::PlayerState;
use rules::{awards, milestones, queries, requirements};

/// The events that can change any entity's computed state.
const RELEVANT_EVENTS: [GameEventKind; 13] = [
    GameEventKind::ResourcesChanged,
    GameEventKind::TemperatureChanged,
    GameEventKind::OxygenChanged,
    GameEventKind::OceansChanged,
    GameEventKind::CardPlayed,
    GameEventKind::CardHandUpdated,
    GameEventKind::TilePlaced,
    GameEventKind::TerraformRatingChanged,
    GameEventKind::MilestoneClaimed,
    GameEventKind::AwardFunded,
    GameEventKind::GamePhaseChanged,
    GameEventKind::PlayerEffectsChanged,
    GameEventKind::GameStateChanged,
];

/// Installs the cache for a player: one view per current entity, plus a
/// maintenance subscription that creates and destroys views as the hand and
/// played cards change.
pub fn install_player(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    // GameStateChanged is included because card actions register after the
    // CardPlayed event fires; the end-of-command sync picks them up.
    game.event_bus.subscribe_many(
        &[
            GameEventKind::CardHandUpdated,
            GameEventKind::CardPlayed,
            GameEventKind::GameStateChanged,
        ],
        Scope::Player(player_id),
        maintenance_handler,
    );
    sync_entities(game, player_id)
}

fn maintenance_handler(game: &mut GameState, scope: &Scope, event: &GameEvent) -> Result<()> {
    let Some(player_id) = scope.player_id() else {
        return Ok(());
    };
    // Another player's hand or plays never change this player's entity set.
    if matches!(event.player_id(), Some(other) if other != player_id) {
        return Ok(());
    }
    sync_entities(game, player_id)
}

/// Brings the player's view set in line with their current entities:
/// missing views are created and subscribed, stale views are destroyed and
/// their subscriptions released.
fn sync_entities(game: &mut GameState, player_id: PlayerId) -> Result<()> {
    let desired = desired_keys(game.player(player_id)?);

    let existing: Vec<EntityKey> =
        game.player(player_id)?.entity_subscriptions.keys().cloned().collect();
    for stale in existing.iter().filter(|k| !desired.contains(k)) {
        destroy_entity(game, player_id, stale)?;
    }
    for key in desired {
        if !game.player(player_id)?.entity_subscriptions.contains_key(&key) {
            create_entity(game, player_id, key)?;
        }
    }
    Ok(())
}

fn desired_keys(player: &PlayerState) -> Vec<EntityKey> {
    let mut result: Vec<EntityKey> =
        player.hand.iter().map(|card_id| EntityKey::HandCard(card_id.clone())).collect();
    result.extend(player.actions.iter().map(|action| EntityKey::CardAction {
        card_id: action.card_id.clone(),
        behavior_index: action.behavior_index,
    }));
    result.extend(all::<StandardProject>().map(EntityKey::StandardProject));
    result.extend(all::<MilestoneType>().map(EntityKey::Milestone));
    result.extend(all::<AwardType>().map(EntityKey::Award));
    result
}

fn create_entity(game: &mut GameState, player_id: PlayerId, key: EntityKey) -> Result<()> {
    let scope = Scope::Entity { player_id, entity: key.clone() };
    let tokens =
        game.event_bus.subscribe_many(&RELEVANT_EVENTS, scope, recalculate_handler);
    let player = game.player_mut(player_id)?;
    player.entity_subscriptions.insert(key.clone(), tokens);
    store(game, player_id, key)
}

fn destroy_entity(game: &mut GameState, player_id: PlayerId, key: &EntityKey) -> Result<()> {
    let player = game.player_mut(player_id)?;
    let tokens = player.entity_subscriptions.remove(key).unwrap_or_default();
    player.entity_states.remove(key);
    for token in tokens {
        game.event_bus.unsubscribe(token);
    }
    Ok(())
}

fn recalculate_handler(game: &mut GameState, scope: &Scope, _event: &GameEvent) -> Result<()> {
    let Scope::Entity { player_id, entity } = scope else {
        return Ok(());
    };
    // Delivery snapshots mean a handler can run once more after its entity
    // was destroyed mid-event; a destroyed view must not be resurrected.
    if !game.player(*player_id)?.entity_subscriptions.contains_key(entity) {
        return Ok(());
    }
    store(game, *player_id, entity.clone())
}

fn store(game: &mut GameState, player_id: PlayerId, key: EntityKey) -> Result<()> {
    let state = recalculate(game, player_id, &key)?;
    game.player_mut(player_id)?.entity_states.insert(key, state);
    Ok(())
}

/// Recomputes one entity's state. Pure over the game state and registry.
pub fn recalculate(game: &GameState, player_id: PlayerId, key: &EntityKey) -> Result<EntityState> {
    let mut state = EntityState { last_calculated: game.event_bus.sequence, ..Default::default() };
    let player = game.player(player_id)?;

    match key {
        EntityKey::HandCard(card_id) => {
            let definition = cards::get(card_id)?;
            let cost = queries::effective_card_cost(player, definition);
            state.cost.insert(ResourceType::Credits, cost);
            state
                .metadata
                .insert("effective-cost".to_string(), serde_json::json!(cost));
            if let Err(error) = requirements::check(game, player_id, definition) {
                state.errors.push(StateError::new(error.code, error.message));
            }
            if queries::max_payment_value(player, definition) < cost {
                state.errors.push(StateError::new(
                    ErrorCode::InsufficientCredits,
                    "Cannot cover the card cost",
                ));
            }
        }
        EntityKey::CardAction { card_id, behavior_index } => {
            state = recalculate_card_action(player, card_id, *behavior_index, state)?;
        }
        EntityKey::StandardProject(project) => {
            state = recalculate_standard_project(game, player, *project, state);
        }
        EntityKey::Milestone(milestone) => {
            let progress = milestones::progress(game, player_id, *milestone)?;
            state.cost.insert(ResourceType::Credits, constants::MILESTONE_COST);
            state.metadata.insert("progress".to_string(), serde_json::json!(progress));
            state.metadata.insert(
                "threshold".to_string(),
                serde_json::json!(milestones::threshold(*milestone)),
            );
            if game.milestones.is_claimed(*milestone) {
                state
                    .errors
                    .push(StateError::new(ErrorCode::Conflict, "Already claimed"));
            } else if game.milestones.claimed_count() >= constants::MAX_MILESTONES_CLAIMED {
                state.errors.push(StateError::new(
                    ErrorCode::PreconditionFailed,
                    "All milestones have been claimed",
                ));
            }
            if progress < milestones::threshold(*milestone) {
                state.errors.push(StateError::new(
                    ErrorCode::PreconditionFailed,
                    "Threshold not reached",
                ));
            }
            if player.resources.credits < constants::MILESTONE_COST {
                state.errors.push(StateError::new(
                    ErrorCode::InsufficientCredits,
                    "Cannot afford the claim cost",
                ));
            }
        }
        EntityKey::Award(award) => {
            let measure = awards::measure(game, player_id, *award)?;
            state.metadata.insert("measure".to_string(), serde_json::json!(measure));
            match awards::next_cost(game) {
                Some(cost) if !game.awards.is_funded(*award) => {
                    state.cost.insert(ResourceType::Credits, cost);
                    if player.resources.credits < cost {
                        state.errors.push(StateError::new(
                            ErrorCode::InsufficientCredits,
                            "Cannot afford the funding cost",
                        ));
                    }
                }
                Some(_) => {
                    state
                        .errors
                        .push(StateError::new(ErrorCode::Conflict, "Already funded"));
                }
                None => {
                    state.errors.push(StateError::new(
                        ErrorCode::PreconditionFailed,
                        "All awards have been funded",
                    ));
                }
            }
        }
    }
    Ok(state)
}

fn recalculate_card_action(
    player: &PlayerState,
    card_id: &CardId,
    behavior_index: usize,
    mut state: EntityState,
) -> Result<EntityState> {
    let definition = cards::get(card_id)?;
    let Some(behavior) = definition.behaviors.get(behavior_index) else {
        state.errors.push(StateError::new(ErrorCode::Internal, "Unknown behavior"));
        return Ok(state);
    };

    if let Some(action) = player.card_action(card_id, behavior_index) {
        if action.times_used_this_generation > 0 {
            state.errors.push(StateError::new(
                ErrorCode::Conflict,
                "Already used this generation",
            ));
        }
    }

    if !affordable_any_choice(player, card_id, behavior) {
        state.errors.push(StateError::new(
            ErrorCode::InsufficientResources,
            "Cannot pay the action's inputs",
        ));
    }
    Ok(state)
}

/// Whether the player can pay the behavior's inputs, for at least one
/// choice when choices are present.
fn affordable_any_choice(player: &PlayerState, card_id: &CardId, behavior: &CardBehavior) -> bool {
    if behavior.choices.is_empty() {
        return inputs_affordable(player, card_id, &behavior.inputs);
    }
    behavior
        .choices
        .iter()
        .any(|choice| inputs_affordable(player, card_id, &choice.inputs))
}

fn inputs_affordable(
    player: &PlayerState,
    card_id: &CardId,
    inputs: &[ResourceCondition],
) -> bool {
    inputs.iter().all(|input| match (input.target, input.resource) {
        (_, ResourceType::TerraformRating) => player.terraform_rating >= input.amount,
        (ConditionTarget::SelfCard, resource) if resource.is_card_stored() => {
            player.stored_on_card(card_id) >= input.amount
        }
        (ConditionTarget::AnyCard, resource) if resource.is_card_stored() => {
            player.played_cards.iter().any(|played| {
                cards::get(&played.card_id)
                    .map(|d| d.resource_storage == Some(resource))
                    .unwrap_or(false)
                    && player.stored_on_card(&played.card_id) >= input.amount
            })
        }
        (_, resource) if ResourceType::STANDARD.contains(&resource) => {
            player.resources.get(resource) >= input.amount
        }
        _ => false,
    })
}

fn recalculate_standard_project(
    game: &GameState,
    player: &PlayerState,
    project: StandardProject,
    mut state: EntityState,
) -> EntityState {
    match project {
        StandardProject::SellPatents => {
            if player.hand.is_empty() {
                state
                    .errors
                    .push(StateError::new(ErrorCode::PreconditionFailed, "Hand is empty"));
            }
        }
        StandardProject::PowerPlant => {
            require_credits(player, constants::POWER_PLANT_COST, &mut state);
        }
        StandardProject::Asteroid => {
            require_credits(player, constants::ASTEROID_COST, &mut state);
            if game.parameters.temperature_maxed(game.settings.temperature_target) {
                state.errors.push(StateError::new(
                    ErrorCode::PreconditionFailed,
                    "Temperature is at its target",
                ));
            }
        }
        StandardProject::Aquifer => {
            require_credits(player, constants::AQUIFER_COST, &mut state);
            if game.parameters.oceans_maxed(game.settings.ocean_target) {
                state.errors.push(StateError::new(
                    ErrorCode::PreconditionFailed,
                    "All oceans have been placed",
                ));
            } else if game.board.legal_hexes(TileType::Ocean, player.id).is_empty() {
                state.errors.push(StateError::new(
                    ErrorCode::PreconditionFailed,
                    "No legal placement",
                ));
            }
        }
        StandardProject::Greenery => {
            require_credits(player, constants::GREENERY_COST, &mut state);
            if game.board.legal_hexes(TileType::Greenery, player.id).is_empty() {
                state.errors.push(StateError::new(
                    ErrorCode::PreconditionFailed,
                    "No legal placement",
                ));
            }
        }
        StandardProject::City => {
            require_credits(player, constants::CITY_COST, &mut state);
            if game.board.legal_hexes(TileType::City, player.id).is_empty() {
                state.errors.push(StateError::new(
                    ErrorCode::PreconditionFailed,
                    "No legal placement",
                ));
            }
        }
    }
    state
}

fn require_credits(player: &PlayerState, cost: i32, state: &mut EntityState) {
    state.cost.insert(ResourceType::Credits, cost);
    if player.resources.credits < cost {
        state
            .errors
            .push(StateError::new(ErrorCode::InsufficientCredits, "Cannot afford the cost"));
    }
}
