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

//! The hex board in cube coordinates. Placement legality for each tile type
//! is encoded here; occupancy changes go through `rules::mutations` so that
//! the corresponding events are published.

use std::collections::BTreeMap;

use core_data::game_primitives::{PlayerId, ResourceType, Tag, TileType};
use core_data::hex::HexCoordinate;
use serde::{Deserialize, Serialize};

/// A resource bonus awarded when a hex is first occupied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TileBonus {
    pub resource: ResourceType,
    pub amount: i32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseType {
    Land,
    OceanReserved,
}

/// A tile placed on a hex.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub tile_type: TileType,
    pub tags: Vec<Tag>,
    /// Oceans are unowned; city and greenery tiles record their owner.
    pub owner_id: Option<PlayerId>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub coordinate: HexCoordinate,
    pub base: BaseType,
    pub bonuses: Vec<TileBonus>,
    pub occupant: Option<Occupant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    tiles: BTreeMap<HexCoordinate, Tile>,
}

impl Board {
    pub fn tile(&self, coordinate: HexCoordinate) -> Option<&Tile> {
        self.tiles.get(&coordinate)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Sets a hex occupant without publishing events. Use
    /// `rules::mutations::place_tile` instead of calling this directly.
    pub fn internal_set_occupant(&mut self, coordinate: HexCoordinate, occupant: Occupant) {
        if let Some(tile) = self.tiles.get_mut(&coordinate) {
            tile.occupant = Some(occupant);
        }
    }

    pub fn ocean_count(&self) -> i32 {
        self.tiles
            .values()
            .filter(|t| {
                t.occupant.as_ref().map(|o| o.tile_type == TileType::Ocean).unwrap_or(false)
            })
            .count() as i32
    }

    pub fn tiles_owned_by(&self, player_id: PlayerId) -> impl Iterator<Item = &Tile> {
        self.tiles
            .values()
            .filter(move |t| t.occupant.as_ref().and_then(|o| o.owner_id) == Some(player_id))
    }

    pub fn count_owned(&self, tile_type: TileType, player_id: PlayerId) -> usize {
        self.tiles_owned_by(player_id)
            .filter(|t| t.occupant.as_ref().map(|o| o.tile_type) == Some(tile_type))
            .count()
    }

    pub fn adjacent_tiles(&self, coordinate: HexCoordinate) -> Vec<&Tile> {
        coordinate.neighbors().iter().filter_map(|n| self.tiles.get(n)).collect()
    }

    /// Number of placed ocean tiles adjacent to a hex.
    pub fn adjacent_ocean_count(&self, coordinate: HexCoordinate) -> i32 {
        self.adjacent_tiles(coordinate)
            .iter()
            .filter(|t| {
                t.occupant.as_ref().map(|o| o.tile_type == TileType::Ocean).unwrap_or(false)
            })
            .count() as i32
    }

    /// Computes the hexes where the given player may legally place a tile of
    /// the given type. The rule set is closed:
    ///
    /// - Oceans may only go on empty ocean-reserved hexes.
    /// - Cities may only go on empty land hexes not adjacent to another city.
    /// - Greeneries must go on empty land hexes adjacent to one of the
    ///   player's existing tiles, unless the player owns no tiles.
    pub fn legal_hexes(&self, tile_type: TileType, player_id: PlayerId) -> Vec<HexCoordinate> {
        let owns_any = self.tiles_owned_by(player_id).next().is_some();
        self.tiles
            .values()
            .filter(|tile| tile.occupant.is_none())
            .filter(|tile| match tile_type {
                TileType::Ocean => tile.base == BaseType::OceanReserved,
                TileType::City => {
                    tile.base == BaseType::Land && !self.has_adjacent_city(tile.coordinate)
                }
                TileType::Greenery => {
                    tile.base == BaseType::Land
                        && (!owns_any || self.is_adjacent_to_owned(tile.coordinate, player_id))
                }
            })
            .map(|tile| tile.coordinate)
            .collect()
    }

    fn has_adjacent_city(&self, coordinate: HexCoordinate) -> bool {
        self.adjacent_tiles(coordinate).iter().any(|t| {
            t.occupant.as_ref().map(|o| o.tile_type == TileType::City).unwrap_or(false)
        })
    }

    fn is_adjacent_to_owned(&self, coordinate: HexCoordinate, player_id: PlayerId) -> bool {
        self.adjacent_tiles(coordinate)
            .iter()
            .any(|t| t.occupant.as_ref().and_then(|o| o.owner_id) == Some(player_id))
    }
}

fn land(q: i32, r: i32) -> Tile {
    Tile {
        coordinate: HexCoordinate::at(q, r),
        base: BaseType::Land,
        bonuses: vec![],
        occupant: None,
    }
}

fn ocean(q: i32, r: i32) -> Tile {
    Tile {
        coordinate: HexCoordinate::at(q, r),
        base: BaseType::OceanReserved,
        bonuses: vec![],
        occupant: None,
    }
}

fn with_bonus(mut tile: Tile, resource: ResourceType, amount: i32) -> Tile {
    tile.bonuses.push(TileBonus { resource, amount });
    tile
}

/// The standard 42-hex scenario: rows of 6/7/8/8/7/6 hexes, steel in the
/// north-west, plants across the equatorial band, titanium at the rim, and
/// twelve ocean-reserved hexes clustered to the east.
pub fn standard_board() -> Board {
    use ResourceType::{CardDraw, Plants, Steel, Titanium};

    let tiles = vec![
        // northern row, r = -3
        with_bonus(land(0, -3), Steel, 2),
        with_bonus(land(1, -3), Steel, 1),
        land(2, -3),
        land(3, -3),
        ocean(4, -3),
        with_bonus(ocean(5, -3), Titanium, 2),
        // r = -2
        with_bonus(land(-1, -2), Steel, 1),
        with_bonus(land(0, -2), Steel, 2),
        land(1, -2),
        with_bonus(land(2, -2), CardDraw, 1),
        land(3, -2),
        with_bonus(ocean(4, -2), CardDraw, 1),
        ocean(5, -2),
        // r = -1
        land(-2, -1),
        with_bonus(land(-1, -1), Plants, 1),
        with_bonus(land(0, -1), Plants, 2),
        with_bonus(land(1, -1), Plants, 1),
        land(2, -1),
        with_bonus(ocean(3, -1), Plants, 2),
        ocean(4, -1),
        with_bonus(ocean(5, -1), Plants, 1),
        // equatorial row, r = 0
        with_bonus(land(-3, 0), Plants, 1),
        with_bonus(land(-2, 0), Plants, 2),
        with_bonus(land(-1, 0), Plants, 1),
        with_bonus(land(0, 0), Plants, 2),
        with_bonus(land(1, 0), Plants, 1),
        land(2, 0),
        with_bonus(ocean(3, 0), Plants, 2),
        with_bonus(ocean(4, 0), Plants, 1),
        // r = 1
        land(-3, 1),
        land(-2, 1),
        with_bonus(land(-1, 1), CardDraw, 1),
        with_bonus(land(0, 1), Plants, 1),
        land(1, 1),
        ocean(2, 1),
        with_bonus(ocean(3, 1), Plants, 1),
        // southern row, r = 2
        with_bonus(land(-3, 2), Titanium, 1),
        land(-2, 2),
        land(-1, 2),
        with_bonus(land(0, 2), Steel, 1),
        land(1, 2),
        ocean(2, 2),
    ];

    Board { tiles: tiles.into_iter().map(|t| (t.coordinate, t)).collect() }
}
