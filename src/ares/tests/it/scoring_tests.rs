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

use core_data::game_primitives::{
    AwardType, CardId, GamePhase, GameStatus, MilestoneType, Tag, TileType,
};
use core_data::hex::HexCoordinate;
use game_data::award_data::FundedAward;
use game_data::board::Occupant;
use game_data::command_data::UserCommand;
use rules::scoring;
use test_utils::TestGame;

fn occupy(game: &mut TestGame, q: i32, r: i32, tile_type: TileType, owner: usize) {
    let owner_id = game.players[owner];
    game.game.board.internal_set_occupant(
        HexCoordinate::at(q, r),
        Occupant {
            tile_type,
            tags: if tile_type == TileType::City { vec![Tag::City] } else { vec![] },
            owner_id: Some(owner_id),
        },
    );
}

#[test]
fn solo_score_combines_rating_milestones_board_and_cards() {
    let mut game = TestGame::started(1);
    game.game.milestones.claimed_by.insert(MilestoneType::Terraformer, game.players[0]);
    occupy(&mut game, 0, 0, TileType::Greenery, 0);
    occupy(&mut game, 1, 0, TileType::City, 0);
    game.force_play(0, "birds");
    game.player_mut(0).card_resources.insert(CardId::new("birds"), 3);

    let scores = scoring::final_scores(&game.game);
    let score = &scores[&game.players[0]];
    assert_eq!(score.terraform_rating, 20);
    assert_eq!(score.milestones, 5);
    // One greenery point plus one city-adjacency point.
    assert_eq!(score.board, 2);
    // Birds scores one point per stored animal.
    assert_eq!(score.cards, 3);
    // Awards are not scored in solo play.
    assert_eq!(score.awards, 0);
    assert_eq!(score.total, 30);
}

#[test]
fn per_tag_victory_points_count_tags() {
    let mut game = TestGame::started(1);
    game.force_play(0, "asteroid-mining");
    game.force_play(0, "ganymede-colony");

    let scores = scoring::final_scores(&game.game);
    // Asteroid Mining is worth a fixed two; Ganymede Colony scores one per
    // Jovian tag, and both cards carry one.
    assert_eq!(scores[&game.players[0]].cards, 4);
}

#[test]
fn awards_score_first_and_second_place() {
    let mut game = TestGame::started(2);
    game.game.awards.funded.push(FundedAward {
        award: AwardType::Thermalist,
        funded_by: game.players[0],
        cost_paid: 8,
    });
    game.player_mut(0).resources.heat = 12;
    game.player_mut(1).resources.heat = 4;

    let scores = scoring::final_scores(&game.game);
    assert_eq!(scores[&game.players[0]].awards, 5);
    assert_eq!(scores[&game.players[1]].awards, 2);
}

#[test]
fn tied_first_place_shares_five_points() {
    let mut game = TestGame::started(2);
    game.game.awards.funded.push(FundedAward {
        award: AwardType::Thermalist,
        funded_by: game.players[0],
        cost_paid: 8,
    });
    game.player_mut(0).resources.heat = 9;
    game.player_mut(1).resources.heat = 9;

    let scores = scoring::final_scores(&game.game);
    assert_eq!(scores[&game.players[0]].awards, 5);
    assert_eq!(scores[&game.players[1]].awards, 5);
}

#[test]
fn game_finishes_when_all_targets_met_at_generation_end() {
    let mut game = TestGame::started(1);
    game.game.parameters.temperature = 8;
    game.game.parameters.oxygen = 14;
    game.game.parameters.oceans = 9;

    game.act(0, UserCommand::Pass).unwrap();
    assert_eq!(game.game.phase, GamePhase::ProductionAndCardDraw);
    game.act(0, UserCommand::ConfirmProductionCards { card_ids: vec![] }).unwrap();

    assert_eq!(game.game.status, GameStatus::Finished);
    assert_eq!(game.game.phase, GamePhase::Finished);
    assert!(game.game.current_turn.is_none());
    assert!(game.game.final_scores.is_some());

    // No further turns are accepted.
    let error = game.act(0, UserCommand::SkipAction).unwrap_err();
    assert_eq!(error.code, errors::ErrorCode::WrongPhase);
}
