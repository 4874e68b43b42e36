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

use core_data::game_primitives::{AwardType, MilestoneType};
use errors::ErrorCode;
use game_data::command_data::UserCommand;
use rules::milestones;
use test_utils::TestGame;

#[test]
fn builder_counts_corporation_tags() {
    let mut game = TestGame::started_with_corporation(1, "mining-guild");
    // Six building tags from played cards plus two from the corporation.
    for card in
        ["mine", "solar-power", "deep-well-heating", "food-factory", "rover-construction", "steelworks"]
    {
        game.force_play(0, card);
    }
    assert_eq!(
        milestones::progress(&game.game, game.players[0], MilestoneType::Builder).unwrap(),
        8
    );

    game.act(0, UserCommand::ClaimMilestone { milestone: MilestoneType::Builder }).unwrap();
    assert!(game.game.milestones.is_claimed(MilestoneType::Builder));
}

#[test]
fn milestone_below_threshold_is_rejected() {
    let mut game = TestGame::started(1);
    let error = game
        .act(0, UserCommand::ClaimMilestone { milestone: MilestoneType::Terraformer })
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
}

#[test]
fn claimed_milestone_cannot_be_claimed_again() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    let player_id = game.players[first];
    game.game.milestones.claimed_by.insert(MilestoneType::Terraformer, player_id);

    let error = game
        .act(first, UserCommand::ClaimMilestone { milestone: MilestoneType::Terraformer })
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::Conflict);
}

#[test]
fn at_most_three_milestones_per_game() {
    let mut game = TestGame::started(1);
    let player_id = game.players[0];
    for milestone in [MilestoneType::Terraformer, MilestoneType::Mayor, MilestoneType::Gardener] {
        game.game.milestones.claimed_by.insert(milestone, player_id);
    }
    // Eligible for Planner with a full hand, but the table is closed.
    for index in 0..16 {
        let ids = cards::project_ids(&game.game.settings.card_packs);
        game.give_card(0, ids[index].as_str());
    }
    let error = game
        .act(0, UserCommand::ClaimMilestone { milestone: MilestoneType::Planner })
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
}

#[test]
fn planner_measures_hand_at_claim_time() {
    let mut game = TestGame::started(1);
    let ids = cards::project_ids(&game.game.settings.card_packs);
    for card_id in ids.iter().take(16) {
        game.give_card(0, card_id.as_str());
    }
    assert_eq!(
        milestones::progress(&game.game, game.players[0], MilestoneType::Planner).unwrap(),
        16
    );
    game.act(0, UserCommand::ClaimMilestone { milestone: MilestoneType::Planner }).unwrap();
    assert!(game.game.milestones.is_claimed(MilestoneType::Planner));
}

#[test]
fn award_funding_costs_escalate() {
    let mut game = TestGame::started(1);
    let start = game.player(0).resources.credits;

    game.act(0, UserCommand::FundAward { award: AwardType::Landlord }).unwrap();
    assert_eq!(game.player(0).resources.credits, start - 8);

    game.act(0, UserCommand::FundAward { award: AwardType::Banker }).unwrap();
    assert_eq!(game.player(0).resources.credits, start - 8 - 14);

    game.act(0, UserCommand::FundAward { award: AwardType::Scientist }).unwrap();
    assert_eq!(game.player(0).resources.credits, start - 8 - 14 - 20);

    let error =
        game.act(0, UserCommand::FundAward { award: AwardType::Thermalist }).unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
}

#[test]
fn funded_award_cannot_be_funded_again() {
    let mut game = TestGame::started(1);
    game.act(0, UserCommand::FundAward { award: AwardType::Landlord }).unwrap();
    let error =
        game.act(0, UserCommand::FundAward { award: AwardType::Landlord }).unwrap_err();
    assert_eq!(error.code, ErrorCode::Conflict);
}

#[test]
fn claiming_consumes_an_action() {
    let mut game = TestGame::started(2);
    let first = game.current_player_index().unwrap();
    game.act(first, UserCommand::FundAward { award: AwardType::Landlord }).unwrap();
    assert_eq!(game.game.current_turn.unwrap().actions_remaining, 1);
}
