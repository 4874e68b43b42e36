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

//! Fundamental types and identifiers for the game engine

use std::fmt::{self, Formatter};
use std::str::FromStr;

use errors::{ErrorCode, GameError};
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ulid::Ulid;

pub type Generation = u32;

/// Number of turn-budget actions remaining for the current player.
/// [UNLIMITED_ACTIONS] means no budget applies (solo play, or the last
/// non-passed player of a generation).
pub type ActionsRemaining = i32;

pub const UNLIMITED_ACTIONS: ActionsRemaining = -1;

/// Identifies an ongoing game
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GameId(Ulid);

impl GameId {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    pub fn new(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn new_from_u128(value: u128) -> Self {
        Self(Ulid(value))
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = GameError;

    fn from_str(value: &str) -> Result<Self, GameError> {
        match Ulid::from_string(value) {
            Ok(ulid) => Ok(Self(ulid)),
            Err(_) => {
                Err(GameError::new(ErrorCode::InvalidArgument, format!("Invalid game id '{value}'")))
            }
        }
    }
}

/// Identifies a player within a game. Stable across reconnections.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(Ulid);

impl PlayerId {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    pub fn new(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn new_from_u128(value: u128) -> Self {
        Self(Ulid(value))
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = GameError;

    fn from_str(value: &str) -> Result<Self, GameError> {
        match Ulid::from_string(value) {
            Ok(ulid) => Ok(Self(ulid)),
            Err(_) => Err(GameError::new(
                ErrorCode::InvalidArgument,
                format!("Invalid player id '{value}'"),
            )),
        }
    }
}

/// Identifies a card definition in the registry, e.g. `"helion"`. Card
/// instances in hands, decks and discard piles are referenced by their
/// definition id; decks never contain duplicate gameplay-relevant state
/// beyond the id itself.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// High-level status of a game
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Lobby,
    Active,
    Finished,
}

/// Phase of an [GameStatus::Active] game
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    Lobby,
    StartingCardSelection,
    Action,
    ProductionAndCardDraw,
    Finished,
}

/// The closed set of resource labels used on the wire and in card behavior
/// data. Includes the pseudo-resources used by behavior outputs (card draw
/// primitives, tile placements, parameter increases) and the production
/// variants of the six physical resources.
#[derive(
    Debug,
    Display,
    EnumString,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    Sequence,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResourceType {
    Credits,
    Steel,
    Titanium,
    Plants,
    Energy,
    Heat,
    Animals,
    Microbes,
    Floaters,
    Science,
    Asteroid,
    CardDraw,
    CardPeek,
    CardTake,
    CardBuy,
    CityPlacement,
    GreeneryPlacement,
    OceanPlacement,
    Temperature,
    #[serde(rename = "tr")]
    #[strum(serialize = "tr")]
    TerraformRating,
    CreditsProduction,
    SteelProduction,
    TitaniumProduction,
    PlantsProduction,
    EnergyProduction,
    HeatProduction,
}

impl ResourceType {
    /// The six resource types every player owns a pool of.
    pub const STANDARD: [ResourceType; 6] = [
        ResourceType::Credits,
        ResourceType::Steel,
        ResourceType::Titanium,
        ResourceType::Plants,
        ResourceType::Energy,
        ResourceType::Heat,
    ];

    /// Resource types stored on cards rather than in player pools.
    pub fn is_card_stored(self) -> bool {
        matches!(
            self,
            ResourceType::Animals
                | ResourceType::Microbes
                | ResourceType::Floaters
                | ResourceType::Science
                | ResourceType::Asteroid
        )
    }

    /// For a production pseudo-resource, the physical resource it produces.
    pub fn production_base(self) -> Option<ResourceType> {
        match self {
            ResourceType::CreditsProduction => Some(ResourceType::Credits),
            ResourceType::SteelProduction => Some(ResourceType::Steel),
            ResourceType::TitaniumProduction => Some(ResourceType::Titanium),
            ResourceType::PlantsProduction => Some(ResourceType::Plants),
            ResourceType::EnergyProduction => Some(ResourceType::Energy),
            ResourceType::HeatProduction => Some(ResourceType::Heat),
            _ => None,
        }
    }

    /// The production pseudo-resource for a physical resource.
    pub fn as_production(self) -> Option<ResourceType> {
        match self {
            ResourceType::Credits => Some(ResourceType::CreditsProduction),
            ResourceType::Steel => Some(ResourceType::SteelProduction),
            ResourceType::Titanium => Some(ResourceType::TitaniumProduction),
            ResourceType::Plants => Some(ResourceType::PlantsProduction),
            ResourceType::Energy => Some(ResourceType::EnergyProduction),
            ResourceType::Heat => Some(ResourceType::HeatProduction),
            _ => None,
        }
    }

    pub fn is_card_draw_primitive(self) -> bool {
        matches!(
            self,
            ResourceType::CardDraw
                | ResourceType::CardPeek
                | ResourceType::CardTake
                | ResourceType::CardBuy
        )
    }

    pub fn tile_placement(self) -> Option<TileType> {
        match self {
            ResourceType::CityPlacement => Some(TileType::City),
            ResourceType::GreeneryPlacement => Some(TileType::Greenery),
            ResourceType::OceanPlacement => Some(TileType::Ocean),
            _ => None,
        }
    }
}

/// Card tags referenced by requirements, discounts and milestone progress.
#[derive(
    Debug,
    Display,
    EnumString,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    Sequence,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tag {
    Building,
    Space,
    Science,
    Power,
    Earth,
    Jovian,
    Plant,
    Microbe,
    Animal,
    City,
    Event,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    Project,
    Corporation,
    Prelude,
}

/// Occupant kinds a board hex can hold.
#[derive(
    Debug,
    Display,
    EnumString,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TileType {
    City,
    Greenery,
    Ocean,
}

/// The standard projects every player can always buy.
#[derive(
    Debug,
    Display,
    EnumString,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    Sequence,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StandardProject {
    SellPatents,
    PowerPlant,
    Asteroid,
    Aquifer,
    Greenery,
    City,
}

#[derive(
    Debug,
    Display,
    EnumString,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    Sequence,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MilestoneType {
    Terraformer,
    Mayor,
    Gardener,
    Builder,
    Planner,
}

#[derive(
    Debug,
    Display,
    EnumString,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    Sequence,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AwardType {
    Landlord,
    Banker,
    Scientist,
    Thermalist,
    Miner,
}
