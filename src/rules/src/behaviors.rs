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

//! The card behavior engine.
//!
//! When a card enters play its behaviors are classified: manual behaviors
//! become card actions, persistent effects are registered, conditional
//! behaviors subscribe a listener on the event bus, and plain auto behaviors
//! are applied immediately.
//!
//! Applying a behavior is two-phase: all inputs are validated before any
//! state changes, then inputs are deducted and outputs applied through the
//! mutators in `mutations`.

use std::collections::BTreeMap;

use core_data::game_primitives::{CardId, PlayerId, ResourceType};
use errors::{fail, verify, ErrorCode, Result};
use game_data::behavior_data::{
    ConditionTarget, ResourceCondition, TriggerCondition,
};
use game_data::event_data::{GameEvent, Scope};
use game_data::game_state::GameState;
use game_data::player_state::PlayerState;
use game_data::selection_data::{CardDrawSource, QueuedTile, TilePlacementSource};
use tracing::debug;

use crate::card_draw::{self, DrawCounts};
use crate::{mutations, queries};

/// Identifies the behavior being applied and how storage targets and action
/// consumption resolve.
#[derive(Debug, Clone)]
pub struct BehaviorContext {
    pub player_id: PlayerId,
    pub card_id: CardId,
    pub behavior_index: usize,
    /// Card chosen by the user for `any-card` storage targets.
    pub storage_target: Option<CardId>,
    /// When true, a pending card draw created by this behavior defers action
    /// consumption to its confirmation (manual card actions).
    pub defer_consumption: bool,
}

impl BehaviorContext {
    pub fn on_play(player_id: PlayerId, card_id: CardId, behavior_index: usize) -> Self {
        Self {
            player_id,
            card_id,
            behavior_index,
            storage_target: None,
            defer_consumption: false,
        }
    }
}

/// What applying a behavior produced, beyond its direct mutations.
#[derive(Debug, Default, Copy, Clone)]
pub struct ApplyOutcome {
    /// A `PendingCardDraw` selection was created on the player.
    pub created_card_draw: bool,
}

/// Classifies and registers/applies every behavior of a card entering play.
/// Used both for project cards and for corporation selection.
pub fn apply_card_behaviors(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
) -> Result<ApplyOutcome> {
    let definition = cards::get(card_id)?;
    let mut outcome = ApplyOutcome::default();

    for (index, behavior) in definition.behaviors.iter().enumerate() {
        if behavior.is_manual() {
            mutations::register_card_action(game, player_id, card_id, index)?;
            continue;
        }
        if let Some(condition) = behavior.condition() {
            mutations::register_conditional_effect(game, player_id, card_id, index, condition)?;
            continue;
        }
        if let Some(effect) = behavior.effect.clone() {
            mutations::register_passive_effect(game, player_id, card_id, index, effect)?;
        }
        if !behavior.inputs.is_empty() || !behavior.outputs.is_empty() {
            let context = BehaviorContext::on_play(player_id, card_id.clone(), index);
            let applied =
                apply_behavior(game, &context, &behavior.inputs, &behavior.outputs)?;
            outcome.created_card_draw |= applied.created_card_draw;
        }
    }
    Ok(outcome)
}

/// Applies one behavior: validates and deducts inputs, then applies
/// outputs.
pub fn apply_behavior(
    game: &mut GameState,
    context: &BehaviorContext,
    inputs: &[ResourceCondition],
    outputs: &[ResourceCondition],
) -> Result<ApplyOutcome> {
    apply_inputs(game, context, inputs)?;
    apply_outputs(game, context, outputs)
}

/// Validates all inputs, then deducts them. No state changes happen unless
/// every input is satisfiable.
pub fn apply_inputs(
    game: &mut GameState,
    context: &BehaviorContext,
    inputs: &[ResourceCondition],
) -> Result<()> {
    if inputs.is_empty() {
        return Ok(());
    }

    let mut pool_costs: BTreeMap<ResourceType, i32> = BTreeMap::new();
    let mut storage_costs: Vec<(CardId, ResourceType, i32)> = vec![];
    let mut rating_cost = 0;

    {
        let player = game.player(context.player_id)?;
        for input in inputs {
            let amount = resolved_amount(player, input);
            match (input.target, input.resource) {
                (_, ResourceType::TerraformRating) => rating_cost += amount,
                (ConditionTarget::SelfCard, resource) if resource.is_card_stored() => {
                    storage_costs.push((context.card_id.clone(), resource, amount));
                }
                (ConditionTarget::AnyCard, resource) if resource.is_card_stored() => {
                    let Some(target) = context.storage_target.clone() else {
                        fail!(
                            ErrorCode::InvalidArgument,
                            "A storage card must be chosen for this input"
                        );
                    };
                    verify!(
                        stores_resource(player, &target, resource),
                        ErrorCode::InvalidArgument,
                        "Card {target} does not store {resource}"
                    );
                    storage_costs.push((target, resource, amount));
                }
                (ConditionTarget::SelfPlayer, resource)
                    if ResourceType::STANDARD.contains(&resource) =>
                {
                    *pool_costs.entry(resource).or_insert(0) += amount;
                }
                (target, resource) => {
                    fail!(ErrorCode::Internal, "Unsupported input {resource} for {target:?}")
                }
            }
        }

        // Validation pass: nothing is deducted unless everything is
        // available.
        for (resource, amount) in &pool_costs {
            let available = player.resources.get(*resource);
            if available < *amount {
                let code = if *resource == ResourceType::Credits {
                    ErrorCode::InsufficientCredits
                } else {
                    ErrorCode::InsufficientResources
                };
                fail!(code, "Insufficient {resource} (have {available}, need {amount})");
            }
        }
        let mut per_card: BTreeMap<&CardId, i32> = BTreeMap::new();
        for (card_id, _, amount) in &storage_costs {
            *per_card.entry(card_id).or_insert(0) += amount;
        }
        for (card_id, needed) in per_card {
            let stored = player.stored_on_card(card_id);
            verify!(
                stored >= needed,
                ErrorCode::InsufficientResources,
                "Card {card_id} stores {stored}, need {needed}"
            );
        }
        verify!(
            player.terraform_rating >= rating_cost,
            ErrorCode::InsufficientResources,
            "Insufficient terraform rating"
        );
    }

    mutations::add_resources(
        game,
        context.player_id,
        pool_costs.into_iter().map(|(r, a)| (r, -a)).collect(),
    )?;
    for (card_id, resource, amount) in storage_costs {
        mutations::add_card_resources(game, context.player_id, &card_id, resource, -amount)?;
    }
    mutations::gain_terraform_rating(game, context.player_id, -rating_cost)?;
    Ok(())
}

/// Applies a behavior's outputs: resources, production (clamped), terraform
/// rating, temperature, card-stored resources, tile placements and card-draw
/// effects, in that order.
pub fn apply_outputs(
    game: &mut GameState,
    context: &BehaviorContext,
    outputs: &[ResourceCondition],
) -> Result<ApplyOutcome> {
    let mut resource_deltas: BTreeMap<ResourceType, i32> = BTreeMap::new();
    let mut production_deltas: BTreeMap<ResourceType, i32> = BTreeMap::new();
    let mut storage_gains: Vec<(CardId, ResourceType, i32)> = vec![];
    let mut queued_tiles: Vec<QueuedTile> = vec![];
    let mut draw_counts = DrawCounts::default();
    let mut rating = 0;
    let mut temperature_steps = 0;

    {
        let player = game.player(context.player_id)?;
        for output in outputs {
            let amount = resolved_amount(player, output);
            let resource = output.resource;
            if let Some(base) = resource.production_base() {
                *production_deltas.entry(base).or_insert(0) += amount;
            } else if let Some(tile_type) = resource.tile_placement() {
                for _ in 0..amount {
                    queued_tiles.push(QueuedTile {
                        tile_type,
                        source: TilePlacementSource::Behavior {
                            card_id: context.card_id.clone(),
                        },
                    });
                }
            } else if resource.is_card_draw_primitive() {
                draw_counts.add(resource, amount.max(0) as usize);
            } else if resource == ResourceType::TerraformRating {
                rating += amount;
            } else if resource == ResourceType::Temperature {
                temperature_steps += amount;
            } else if resource.is_card_stored() {
                match output.target {
                    ConditionTarget::AnyCard => {
                        if let Some(target) =
                            resolve_storage_target(player, context, resource)?
                        {
                            storage_gains.push((target, resource, amount));
                        }
                    }
                    _ => storage_gains.push((context.card_id.clone(), resource, amount)),
                }
            } else {
                *resource_deltas.entry(resource).or_insert(0) += amount;
            }
        }

        // Production decreases clamp at the floor rather than failing.
        for (resource, delta) in production_deltas.iter_mut() {
            let current = player.production.get(*resource);
            let floor = if *resource == ResourceType::Credits {
                constants::MIN_CREDITS_PRODUCTION
            } else {
                0
            };
            *delta = (*delta).max(floor - current);
        }
    }

    mutations::add_resources(game, context.player_id, resource_deltas)?;
    mutations::add_production(game, context.player_id, production_deltas)?;
    mutations::gain_terraform_rating(game, context.player_id, rating)?;

    if temperature_steps > 0 {
        let applied = mutations::increase_temperature(game, temperature_steps)?;
        mutations::gain_terraform_rating(game, context.player_id, applied)?;
    }

    for (card_id, resource, amount) in storage_gains {
        mutations::add_card_resources(game, context.player_id, &card_id, resource, amount)?;
    }

    mutations::queue_tiles(game, context.player_id, queued_tiles)?;

    let mut outcome = ApplyOutcome::default();
    if !draw_counts.is_empty() {
        let source_action = context
            .defer_consumption
            .then(|| (context.card_id.clone(), context.behavior_index));
        card_draw::create_pending(
            game,
            context.player_id,
            draw_counts,
            CardDrawSource::Behavior,
            source_action,
        )?;
        outcome.created_card_draw = true;
    }
    Ok(outcome)
}

/// Listener registered for conditional behaviors. Matches the behavior's
/// trigger condition against the incoming event and applies its outputs.
pub fn conditional_effect_handler(
    game: &mut GameState,
    scope: &Scope,
    event: &GameEvent,
) -> Result<()> {
    let Scope::Behavior { player_id, card_id, behavior_index } = scope else {
        fail!(ErrorCode::Internal, "Conditional handler requires a behavior scope");
    };
    let definition = cards::get(card_id)?;
    let Some(behavior) = definition.behaviors.get(*behavior_index) else {
        fail!(ErrorCode::Internal, "No behavior {behavior_index} on {card_id}");
    };
    let Some(condition) = behavior.condition() else {
        return Ok(());
    };

    if !condition_matches(condition, *player_id, event) {
        return Ok(());
    }

    debug!(%card_id, ?condition, "Conditional card effect triggered");
    let context = BehaviorContext {
        player_id: *player_id,
        card_id: card_id.clone(),
        behavior_index: *behavior_index,
        storage_target: None,
        defer_consumption: false,
    };
    apply_outputs(game, &context, &behavior.outputs)?;
    Ok(())
}

/// Trigger-condition matching. Tile and parameter conditions match any
/// player's contribution; placement bonuses and card plays only wake the
/// owning player's effects.
fn condition_matches(condition: TriggerCondition, owner: PlayerId, event: &GameEvent) -> bool {
    match (condition, event) {
        (_, GameEvent::TilePlaced { tile_type, .. }) => condition.matches_tile(*tile_type),
        (TriggerCondition::PlacementBonusGained, GameEvent::PlacementBonusGained { player_id, .. }) => {
            *player_id == owner
        }
        (TriggerCondition::TemperatureChanged, GameEvent::TemperatureChanged { .. }) => true,
        (TriggerCondition::OxygenChanged, GameEvent::OxygenChanged { .. }) => true,
        (TriggerCondition::CardPlayed(filter), GameEvent::CardPlayed { player_id, tags, .. }) => {
            *player_id == owner && filter.map(|tag| tags.contains(&tag)).unwrap_or(true)
        }
        _ => false,
    }
}

fn resolved_amount(player: &PlayerState, condition: &ResourceCondition) -> i32 {
    match condition.modifiers.as_ref().and_then(|m| m.per_tag) {
        Some(tag) => condition.amount * queries::tag_count(player, tag),
        None => condition.amount,
    }
}

/// For `any-card` storage outputs without an explicit target, picks the
/// first played card that stores this resource type. Returns `None` (the
/// output is forfeited) when the player has no eligible card.
fn resolve_storage_target(
    player: &PlayerState,
    context: &BehaviorContext,
    resource: ResourceType,
) -> Result<Option<CardId>> {
    if let Some(target) = context.storage_target.clone() {
        verify!(
            stores_resource(player, &target, resource),
            ErrorCode::InvalidArgument,
            "Card {target} does not store {resource}"
        );
        return Ok(Some(target));
    }
    Ok(player
        .played_cards
        .iter()
        .map(|c| &c.card_id)
        .find(|id| stores_resource(player, id, resource))
        .cloned())
}

fn stores_resource(player: &PlayerState, card_id: &CardId, resource: ResourceType) -> bool {
    player.played_cards.iter().any(|c| c.card_id == *card_id)
        && cards::get(card_id)
            .map(|d| d.resource_storage == Some(resource))
            .unwrap_or(false)
}
