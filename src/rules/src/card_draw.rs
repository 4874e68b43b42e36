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

//! Card-draw effects. The four primitive output types (`card-draw`,
//! `card-peek`, `card-take`, `card-buy`) map to one coherent
//! [PendingCardDraw] selection:
//!
//! - `card-draw` alone: draw N from the deck, all must be taken, no buying.
//! - `card-peek` (optionally with the others): peek N; the free take count
//!   is `card-draw + card-take`, the buy limit is `card-buy`, and the buy
//!   cost defaults to the standard three credits.
//! - Any other combination is invalid and fails the action.
//!
//! Resolution is always deferred to the confirm handler.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use constants::CARD_BUY_COST;
use core_data::game_primitives::{CardId, PlayerId, ResourceType};
use dispatcher::publish;
use errors::{fail, verify, ErrorCode, Result};
use game_data::event_data::GameEvent;
use game_data::game_state::GameState;
use game_data::selection_data::{CardDrawSource, PendingCardDraw, SelectionState};
use tracing::debug;

use crate::{mutations, turns};

/// Accumulated card-draw primitive outputs of one behavior.
#[derive(Debug, Default, Copy, Clone)]
pub struct DrawCounts {
    pub draw: usize,
    pub peek: usize,
    pub take: usize,
    pub buy: usize,
}

impl DrawCounts {
    pub fn add(&mut self, resource: ResourceType, amount: usize) {
        match resource {
            ResourceType::CardDraw => self.draw += amount,
            ResourceType::CardPeek => self.peek += amount,
            ResourceType::CardTake => self.take += amount,
            ResourceType::CardBuy => self.buy += amount,
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.draw == 0 && self.peek == 0 && self.take == 0 && self.buy == 0
    }
}

/// Builds a [PendingCardDraw] selection on the player from a behavior's
/// draw primitives or a tile placement bonus. `source_action` is set for
/// manual card actions whose consumption is deferred to confirmation.
pub fn create_pending(
    game: &mut GameState,
    player_id: PlayerId,
    counts: DrawCounts,
    source: CardDrawSource,
    source_action: Option<(CardId, usize)>,
) -> Result<()> {
    let (revealed_count, free_take_count, max_buy_count) = if counts.peek == 0 {
        verify!(
            counts.take == 0 && counts.buy == 0,
            ErrorCode::Internal,
            "card-take/card-buy require card-peek"
        );
        verify!(counts.draw > 0, ErrorCode::Internal, "Empty card draw effect");
        (counts.draw, counts.draw, 0)
    } else {
        (counts.peek, counts.draw + counts.take, counts.buy)
    };

    let player = game.player(player_id)?;
    verify!(
        player.selection.is_none(),
        ErrorCode::Internal,
        "Player already has an active selection"
    );

    let available_cards = mutations::reveal_cards(game, revealed_count)?;
    debug!(?player_id, ?counts, revealed = available_cards.len(), "Created pending card draw");

    let free_take_count = free_take_count.min(available_cards.len());
    game.player_mut(player_id)?.selection = SelectionState::PendingCardDraw(PendingCardDraw {
        available_cards,
        free_take_count,
        max_buy_count,
        card_buy_cost: CARD_BUY_COST,
        source,
        source_card_id: source_action.as_ref().map(|(card_id, _)| card_id.clone()),
        source_behavior_index: source_action.map(|(_, index)| index),
    });
    Ok(())
}

/// Resolves a pending card draw: validates the chosen cards, pays for any
/// buys, moves the selection into the hand and discards the rest.
///
/// When the draw came from a manual card action, that action's usage
/// counters are incremented and the action is consumed here — this is the
/// point where the deferred consumption from `use-card-action` lands.
pub fn confirm(
    game: &mut GameState,
    player_id: PlayerId,
    cards_to_take: &[CardId],
    cards_to_buy: &[CardId],
) -> Result<()> {
    let pending = match &game.player(player_id)?.selection {
        SelectionState::PendingCardDraw(pending) => pending.clone(),
        _ => fail!(ErrorCode::PreconditionFailed, "No pending card draw"),
    };

    verify!(
        cards_to_take.len() <= pending.free_take_count,
        ErrorCode::InvalidArgument,
        "May take at most {} cards for free",
        pending.free_take_count
    );
    verify!(
        cards_to_buy.len() <= pending.max_buy_count,
        ErrorCode::InvalidArgument,
        "May buy at most {} cards",
        pending.max_buy_count
    );
    if pending.must_take_all() {
        verify!(
            cards_to_take.len() == pending.available_cards.len(),
            ErrorCode::InvalidArgument,
            "A pure card draw requires taking every drawn card"
        );
    }

    let mut seen = BTreeSet::new();
    for card_id in cards_to_take.iter().chain(cards_to_buy) {
        verify!(
            pending.available_cards.contains(card_id),
            ErrorCode::InvalidArgument,
            "Card {card_id} is not part of this selection"
        );
        verify!(
            seen.insert(card_id.clone()),
            ErrorCode::InvalidArgument,
            "Card {card_id} selected twice"
        );
    }

    let buy_cost = pending.card_buy_cost * cards_to_buy.len() as i32;
    verify!(
        game.player(player_id)?.resources.credits >= buy_cost,
        ErrorCode::InsufficientCredits,
        "Buying {} cards costs {buy_cost}",
        cards_to_buy.len()
    );

    if buy_cost > 0 {
        mutations::add_resources(
            game,
            player_id,
            BTreeMap::from([(ResourceType::Credits, -buy_cost)]),
        )?;
    }

    let kept: Vec<CardId> = cards_to_take.iter().chain(cards_to_buy).cloned().collect();
    let dropped: Vec<CardId> = pending
        .available_cards
        .iter()
        .filter(|c| !kept.contains(c))
        .cloned()
        .collect();
    mutations::add_cards_to_hand(game, player_id, kept)?;
    mutations::discard_cards(game, dropped);

    game.player_mut(player_id)?.selection = SelectionState::None;
    publish(
        game,
        GameEvent::CardDrawConfirmed {
            player_id,
            taken: cards_to_take.to_vec(),
            bought: cards_to_buy.to_vec(),
            source_card_id: pending.source_card_id.clone(),
            source_behavior_index: pending.source_behavior_index,
        },
    );

    // A queued tile may have been waiting behind this selection. Kick the
    // processor first so a re-presented tile keeps blocking turn
    // advancement.
    let has_queue = game
        .player(player_id)?
        .tile_queue
        .as_ref()
        .map(|q| !q.items.is_empty())
        .unwrap_or(false);
    if has_queue {
        publish(game, GameEvent::TileQueueCreated { player_id });
    }

    if let (Some(card_id), Some(behavior_index)) =
        (pending.source_card_id, pending.source_behavior_index)
    {
        if let Some(action) =
            game.player_mut(player_id)?.card_action_mut(&card_id, behavior_index)
        {
            action.times_used_this_generation += 1;
            action.times_used_this_turn += 1;
        }
        turns::consume_action(game, player_id)?;
    } else {
        turns::maybe_advance(game, player_id)?;
    }
    Ok(())
}
