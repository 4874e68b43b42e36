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

//! Core game mutations. Every write to entity state goes through a function
//! in this module, which validates its local invariant, updates state, and
//! publishes the corresponding event.
//!
//! Mutators are minimal and publish-faithful: they do not chain business
//! rules. For example, raising the temperature does not award terraform
//! rating; the caller is responsible for that.

use std::collections::BTreeMap;

use core_data::game_primitives::{
    AwardType, CardId, GamePhase, MilestoneType, PlayerId, ResourceType, TileType,
};
use core_data::hex::HexCoordinate;
use dispatcher::publish;
use errors::{fail, verify, ErrorCode, Result};
use game_data::award_data::FundedAward;
use game_data::behavior_data::{PassiveEffect, RegisteredEffect, TriggerCondition};
use game_data::board::Occupant;
use game_data::event_data::{GameEvent, GameEventKind, Scope};
use game_data::game_state::GameState;
use game_data::player_state::{CardAction, CardEffect, PaymentSubstitute, PlayedCard};
use game_data::selection_data::QueuedTile;
use tracing::debug;

use crate::behaviors;

/// Applies a set of resource deltas to a player's pools. All deltas are
/// validated before any is applied; the resulting pools must be
/// non-negative. Publishes a single `ResourcesChanged`.
pub fn add_resources(
    game: &mut GameState,
    player_id: PlayerId,
    deltas: BTreeMap<ResourceType, i32>,
) -> Result<()> {
    if deltas.is_empty() || deltas.values().all(|d| *d == 0) {
        return Ok(());
    }

    let player = game.player(player_id)?;
    for (resource, delta) in &deltas {
        verify!(
            ResourceType::STANDARD.contains(resource),
            ErrorCode::Internal,
            "{resource:?} is not a standard resource"
        );
        let resulting = player.resources.get(*resource) + delta;
        if resulting < 0 {
            let code = if *resource == ResourceType::Credits {
                ErrorCode::InsufficientCredits
            } else {
                ErrorCode::InsufficientResources
            };
            fail!(code, "Insufficient {resource} (have {}, need {})", resulting - delta, -delta);
        }
    }

    let player = game.player_mut(player_id)?;
    for (resource, delta) in &deltas {
        player.resources.add(*resource, *delta);
    }
    debug!(?player_id, ?deltas, "Resources changed");
    publish(game, GameEvent::ResourcesChanged { player_id, deltas });
    Ok(())
}

/// Convenience wrapper for a single-resource delta.
pub fn add_resource(
    game: &mut GameState,
    player_id: PlayerId,
    resource: ResourceType,
    delta: i32,
) -> Result<()> {
    add_resources(game, player_id, BTreeMap::from([(resource, delta)]))
}

/// Applies production deltas keyed by physical resource. Credit production
/// may not drop below −5, other production not below zero. Publishes a
/// single `ProductionChanged`.
pub fn add_production(
    game: &mut GameState,
    player_id: PlayerId,
    deltas: BTreeMap<ResourceType, i32>,
) -> Result<()> {
    if deltas.is_empty() || deltas.values().all(|d| *d == 0) {
        return Ok(());
    }

    let player = game.player(player_id)?;
    for (resource, delta) in &deltas {
        let resulting = player.production.get(*resource) + delta;
        let floor = if *resource == ResourceType::Credits {
            constants::MIN_CREDITS_PRODUCTION
        } else {
            0
        };
        verify!(
            resulting >= floor,
            ErrorCode::InsufficientProduction,
            "{resource} production cannot drop below {floor}"
        );
    }

    let player = game.player_mut(player_id)?;
    for (resource, delta) in &deltas {
        player.production.add(*resource, *delta);
    }
    debug!(?player_id, ?deltas, "Production changed");
    publish(game, GameEvent::ProductionChanged { player_id, deltas });
    Ok(())
}

/// Changes a player's terraform rating and publishes
/// `TerraformRatingChanged`.
pub fn gain_terraform_rating(game: &mut GameState, player_id: PlayerId, delta: i32) -> Result<()> {
    if delta == 0 {
        return Ok(());
    }
    let player = game.player_mut(player_id)?;
    verify!(
        player.terraform_rating + delta >= 0,
        ErrorCode::Internal,
        "Terraform rating cannot go negative"
    );
    player.terraform_rating += delta;
    let rating = player.terraform_rating;
    publish(game, GameEvent::TerraformRatingChanged { player_id, delta, rating });
    Ok(())
}

/// Raises the temperature by up to `steps` steps, saturating at the game's
/// target. Returns the number of steps actually applied and publishes
/// `TemperatureChanged` only when that number is positive. Terraform rating
/// for the applied steps is the caller's responsibility.
pub fn increase_temperature(game: &mut GameState, steps: i32) -> Result<i32> {
    let target = game.settings.temperature_target;
    let applied = game.parameters.internal_increase_temperature(steps, target);
    if applied > 0 {
        let value = game.parameters.temperature;
        debug!(applied, value, "Temperature increased");
        publish(game, GameEvent::TemperatureChanged { steps: applied, value });
    }
    Ok(applied)
}

/// Raises oxygen by up to `steps` percent, saturating at the game's target.
pub fn increase_oxygen(game: &mut GameState, steps: i32) -> Result<i32> {
    let target = game.settings.oxygen_target;
    let applied = game.parameters.internal_increase_oxygen(steps, target);
    if applied > 0 {
        let value = game.parameters.oxygen;
        debug!(applied, value, "Oxygen increased");
        publish(game, GameEvent::OxygenChanged { steps: applied, value });
    }
    Ok(applied)
}

/// Places a tile occupant on the board, publishing `TilePlaced`, then
/// `OceansChanged` for ocean tiles, then `PlacementBonusGained` when the hex
/// carries bonuses. Returns the number of ocean-counter steps applied (zero
/// for non-ocean tiles).
///
/// Awarding the bonus resources, adjacency credits and terraform rating is
/// the caller's responsibility.
pub fn place_tile(
    game: &mut GameState,
    player_id: Option<PlayerId>,
    coordinate: HexCoordinate,
    tile_type: TileType,
    occupant: Occupant,
) -> Result<i32> {
    let Some(tile) = game.board.tile(coordinate) else {
        fail!(ErrorCode::InvalidArgument, "No hex at {coordinate}");
    };
    verify!(tile.occupant.is_none(), ErrorCode::Internal, "Hex {coordinate} is occupied");
    let bonuses = tile.bonuses.clone();

    game.board.internal_set_occupant(coordinate, occupant);
    debug!(?player_id, %coordinate, ?tile_type, "Tile placed");
    publish(game, GameEvent::TilePlaced { player_id, coordinate, tile_type });

    let mut ocean_steps = 0;
    if tile_type == TileType::Ocean {
        let target = game.settings.ocean_target;
        ocean_steps = game.parameters.internal_increase_oceans(1, target);
        let value = game.parameters.oceans;
        publish(game, GameEvent::OceansChanged { delta: ocean_steps, value });
    }

    if let (Some(owner), false) = (player_id, bonuses.is_empty()) {
        publish(
            game,
            GameEvent::PlacementBonusGained { player_id: owner, coordinate, bonuses },
        );
    }

    Ok(ocean_steps)
}

/// Draws up to `count` cards from the project deck into a player's hand,
/// reshuffling the discard pile when the deck runs dry. Returns the cards
/// drawn, which may be fewer than requested.
pub fn draw_cards(game: &mut GameState, player_id: PlayerId, count: usize) -> Result<Vec<CardId>> {
    let drawn = reveal_cards(game, count)?;
    if !drawn.is_empty() {
        add_cards_to_hand(game, player_id, drawn.clone())?;
    }
    Ok(drawn)
}

/// Removes up to `count` cards from the top of the project deck without
/// adding them to any hand, reshuffling the discard pile when needed. Used
/// for card peeks and the production-phase deal.
pub fn reveal_cards(game: &mut GameState, count: usize) -> Result<Vec<CardId>> {
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        if game.deck.projects_remaining() == 0 {
            let mut discard = game.deck.internal_take_discard();
            if discard.is_empty() {
                break;
            }
            game.shuffle(&mut discard);
            game.deck.project_deck.extend(discard);
        }
        match game.deck.internal_draw_project() {
            Some(card_id) => result.push(card_id),
            None => break,
        }
    }
    Ok(result)
}

/// Adds cards to a player's hand and publishes `CardHandUpdated`.
pub fn add_cards_to_hand(
    game: &mut GameState,
    player_id: PlayerId,
    cards: Vec<CardId>,
) -> Result<()> {
    if cards.is_empty() {
        return Ok(());
    }
    game.player_mut(player_id)?.hand.extend(cards);
    publish(game, GameEvent::CardHandUpdated { player_id });
    Ok(())
}

/// Removes cards from a player's hand and publishes `CardHandUpdated`.
pub fn remove_cards_from_hand(
    game: &mut GameState,
    player_id: PlayerId,
    cards: &[CardId],
) -> Result<()> {
    let player = game.player_mut(player_id)?;
    for card_id in cards {
        verify!(
            player.hand.contains(card_id),
            ErrorCode::Conflict,
            "Card {card_id} is not in hand"
        );
    }
    player.hand.retain(|c| !cards.contains(c));
    publish(game, GameEvent::CardHandUpdated { player_id });
    Ok(())
}

/// Moves cards to the discard pile. No event; discard contents are not
/// observable state.
pub fn discard_cards(game: &mut GameState, cards: impl IntoIterator<Item = CardId>) {
    for card_id in cards {
        game.deck.internal_discard(card_id);
    }
}

/// Moves a card from a player's hand to their played area, publishing
/// `CardPlayed` then `CardHandUpdated`. Conditional effects woken by
/// `CardPlayed` observe the card already in the played list.
pub fn move_card_to_played(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
) -> Result<()> {
    let definition = cards::get(card_id)?;
    let player = game.player_mut(player_id)?;
    verify!(
        player.hand.contains(card_id),
        ErrorCode::Conflict,
        "Card {card_id} is not in hand"
    );
    player.hand.retain(|c| c != card_id);
    player.played_cards.push(PlayedCard {
        card_id: card_id.clone(),
        name: definition.name.to_string(),
        card_type: definition.card_type,
        tags: definition.tags.clone(),
    });
    debug!(?player_id, %card_id, "Card played");
    publish(
        game,
        GameEvent::CardPlayed {
            player_id,
            card_id: card_id.clone(),
            tags: definition.tags.clone(),
        },
    );
    publish(game, GameEvent::CardHandUpdated { player_id });
    Ok(())
}

/// Changes the resource count stored on a card. Publishes
/// `ResourcesChanged` keyed by the stored resource type.
pub fn add_card_resources(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
    resource: ResourceType,
    delta: i32,
) -> Result<()> {
    if delta == 0 {
        return Ok(());
    }
    let player = game.player_mut(player_id)?;
    let current = player.stored_on_card(card_id);
    verify!(
        current + delta >= 0,
        ErrorCode::InsufficientResources,
        "Card {card_id} stores {current} {resource}, cannot remove {}",
        -delta
    );
    player.card_resources.insert(card_id.clone(), current + delta);
    publish(
        game,
        GameEvent::ResourcesChanged { player_id, deltas: BTreeMap::from([(resource, delta)]) },
    );
    Ok(())
}

/// Registers a manual behavior as an activatable card action.
pub fn register_card_action(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
    behavior_index: usize,
) -> Result<()> {
    game.player_mut(player_id)?.actions.push(CardAction::new(card_id.clone(), behavior_index));
    Ok(())
}

/// Registers a passive effect, applying its persistent state (payment
/// substitutes) and publishing `PlayerEffectsChanged`.
pub fn register_passive_effect(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
    behavior_index: usize,
    effect: PassiveEffect,
) -> Result<()> {
    if let PassiveEffect::PaymentSubstitute { resource, rate } = effect {
        game.player_mut(player_id)?
            .payment_substitutes
            .push(PaymentSubstitute { resource, conversion_rate: rate });
    }
    game.player_mut(player_id)?.effects.push(CardEffect {
        card_id: card_id.clone(),
        behavior_index,
        effect: RegisteredEffect::Passive(effect),
    });
    publish(game, GameEvent::PlayerEffectsChanged { player_id });
    Ok(())
}

/// Registers a conditional behavior: records it as a card effect and
/// subscribes a listener that applies the behavior's outputs when a
/// matching event is published.
pub fn register_conditional_effect(
    game: &mut GameState,
    player_id: PlayerId,
    card_id: &CardId,
    behavior_index: usize,
    condition: TriggerCondition,
) -> Result<()> {
    game.player_mut(player_id)?.effects.push(CardEffect {
        card_id: card_id.clone(),
        behavior_index,
        effect: RegisteredEffect::Conditional(condition),
    });

    let scope =
        Scope::Behavior { player_id, card_id: card_id.clone(), behavior_index };
    for kind in condition_event_kinds(condition) {
        game.event_bus.subscribe(kind, scope.clone(), behaviors::conditional_effect_handler);
    }
    publish(game, GameEvent::PlayerEffectsChanged { player_id });
    Ok(())
}

fn condition_event_kinds(condition: TriggerCondition) -> Vec<GameEventKind> {
    match condition {
        TriggerCondition::CityPlaced
        | TriggerCondition::GreeneryPlaced
        | TriggerCondition::OceanPlaced
        | TriggerCondition::AnyTilePlaced => vec![GameEventKind::TilePlaced],
        TriggerCondition::PlacementBonusGained => vec![GameEventKind::PlacementBonusGained],
        TriggerCondition::TemperatureChanged => vec![GameEventKind::TemperatureChanged],
        TriggerCondition::OxygenChanged => vec![GameEventKind::OxygenChanged],
        TriggerCondition::CardPlayed(_) => vec![GameEventKind::CardPlayed],
    }
}

/// Appends tiles to a player's placement queue and publishes
/// `TileQueueCreated`, waking the tile placement processor.
pub fn queue_tiles(
    game: &mut GameState,
    player_id: PlayerId,
    items: Vec<QueuedTile>,
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    let player = game.player_mut(player_id)?;
    player.tile_queue.get_or_insert_with(Default::default).items.extend(items);
    publish(game, GameEvent::TileQueueCreated { player_id });
    Ok(())
}

/// Records a milestone claim and publishes `MilestoneClaimed`.
pub fn claim_milestone(
    game: &mut GameState,
    player_id: PlayerId,
    milestone: MilestoneType,
) -> Result<()> {
    verify!(
        !game.milestones.is_claimed(milestone),
        ErrorCode::Conflict,
        "Milestone {milestone} is already claimed"
    );
    game.milestones.claimed_by.insert(milestone, player_id);
    publish(game, GameEvent::MilestoneClaimed { player_id, milestone });
    Ok(())
}

/// Records an award funding and publishes `AwardFunded`.
pub fn fund_award(
    game: &mut GameState,
    player_id: PlayerId,
    award: AwardType,
    cost_paid: i32,
) -> Result<()> {
    verify!(
        !game.awards.is_funded(award),
        ErrorCode::Conflict,
        "Award {award} is already funded"
    );
    game.awards.funded.push(FundedAward { award, funded_by: player_id, cost_paid });
    publish(game, GameEvent::AwardFunded { player_id, award });
    Ok(())
}

/// Transitions the game phase and publishes `GamePhaseChanged`.
pub fn set_phase(game: &mut GameState, phase: GamePhase) {
    if game.phase == phase {
        return;
    }
    debug!(?phase, "Game phase changed");
    game.phase = phase;
    publish(game, GameEvent::GamePhaseChanged { phase });
}
