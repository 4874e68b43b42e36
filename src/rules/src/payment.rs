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

//! Card payment validation. Payment is a plain record validated by a pure
//! function over the payment, the card and the player's registered
//! substitutes; the actual deduction goes through `mutations::add_resources`.

use std::collections::BTreeMap;

use constants::{STEEL_VALUE, TITANIUM_VALUE};
use core_data::game_primitives::{ResourceType, Tag};
use errors::{fail, verify, ErrorCode, Result};
use game_data::card_definition::CardDefinition;
use game_data::command_data::Payment;
use game_data::player_state::PlayerState;

use crate::queries;

/// Total credit value of a payment given the player's substitute rates.
/// Assumes the payment has been validated.
pub fn total_value(player: &PlayerState, definition: &CardDefinition, payment: &Payment) -> i32 {
    let mut value = payment.credits;
    if definition.has_tag(Tag::Building) {
        value += payment.steel * STEEL_VALUE;
    }
    if definition.has_tag(Tag::Space) {
        value += payment.titanium * TITANIUM_VALUE;
    }
    for (resource, amount) in &payment.substitutes {
        if let Some(rate) = player.substitute_rate(*resource) {
            value += amount * rate;
        }
    }
    value
}

/// Validates a payment against a card's effective cost: resources must
/// exist, steel is only usable on Building cards, titanium only on Space
/// cards, substitutes must be registered, and the total value must cover the
/// cost.
pub fn validate(
    player: &PlayerState,
    definition: &CardDefinition,
    payment: &Payment,
) -> Result<()> {
    verify!(
        payment.credits >= 0 && payment.steel >= 0 && payment.titanium >= 0,
        ErrorCode::PaymentInvalid,
        "Payment amounts cannot be negative"
    );
    if payment.steel > 0 {
        verify!(
            definition.has_tag(Tag::Building),
            ErrorCode::PaymentInvalid,
            "Steel can only pay for Building cards"
        );
    }
    if payment.titanium > 0 {
        verify!(
            definition.has_tag(Tag::Space),
            ErrorCode::PaymentInvalid,
            "Titanium can only pay for Space cards"
        );
    }
    for (resource, amount) in &payment.substitutes {
        verify!(*amount >= 0, ErrorCode::PaymentInvalid, "Payment amounts cannot be negative");
        if player.substitute_rate(*resource).is_none() {
            fail!(ErrorCode::PaymentInvalid, "No registered substitute for {resource}");
        }
    }

    verify!(
        player.resources.credits >= payment.credits,
        ErrorCode::InsufficientCredits,
        "Insufficient credits"
    );
    verify!(
        player.resources.steel >= payment.steel,
        ErrorCode::InsufficientResources,
        "Insufficient steel"
    );
    verify!(
        player.resources.titanium >= payment.titanium,
        ErrorCode::InsufficientResources,
        "Insufficient titanium"
    );
    for (resource, amount) in &payment.substitutes {
        verify!(
            player.resources.get(*resource) >= *amount,
            ErrorCode::InsufficientResources,
            "Insufficient {resource}"
        );
    }

    let cost = queries::effective_card_cost(player, definition);
    let value = total_value(player, definition, payment);
    verify!(
        value >= cost,
        ErrorCode::PaymentInvalid,
        "Payment value {value} does not cover cost {cost}"
    );
    Ok(())
}

/// The resource deltas deducting a payment from the payer's pools.
pub fn deltas(payment: &Payment) -> BTreeMap<ResourceType, i32> {
    let mut result = BTreeMap::new();
    let mut spend = |resource: ResourceType, amount: i32| {
        if amount > 0 {
            *result.entry(resource).or_insert(0) -= amount;
        }
    };
    spend(ResourceType::Credits, payment.credits);
    spend(ResourceType::Steel, payment.steel);
    spend(ResourceType::Titanium, payment.titanium);
    for (resource, amount) in &payment.substitutes {
        spend(*resource, *amount);
    }
    result
}
