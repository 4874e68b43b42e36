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

//! Cube coordinates for the hex board. All coordinates satisfy q + r + s = 0;
//! the wire format is the string `"q,r,s"`.

use std::fmt::{self, Formatter};
use std::str::FromStr;

use errors::{fail, ErrorCode, GameError, Result};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HexCoordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

/// The six cube-coordinate direction vectors.
const DIRECTIONS: [(i32, i32, i32); 6] =
    [(1, 0, -1), (1, -1, 0), (0, -1, 1), (-1, 0, 1), (-1, 1, 0), (0, 1, -1)];

impl HexCoordinate {
    /// Creates a coordinate, validating the cube invariant.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self> {
        if q + r + s != 0 {
            fail!(ErrorCode::InvalidArgument, "Coordinate ({q},{r},{s}) violates q+r+s=0");
        }
        Ok(Self { q, r, s })
    }

    /// Creates a coordinate from the two free axes.
    pub fn at(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// The six neighboring coordinates, clockwise from the +q direction.
    pub fn neighbors(self) -> [HexCoordinate; 6] {
        DIRECTIONS.map(|(dq, dr, ds)| HexCoordinate {
            q: self.q + dq,
            r: self.r + dr,
            s: self.s + ds,
        })
    }

    pub fn is_adjacent(self, other: HexCoordinate) -> bool {
        self.neighbors().contains(&other)
    }
}

impl fmt::Debug for HexCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q, self.r, self.s)
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q, self.r, self.s)
    }
}

impl FromStr for HexCoordinate {
    type Err = GameError;

    fn from_str(value: &str) -> Result<Self> {
        let parts = value.split(',').collect::<Vec<_>>();
        if parts.len() != 3 {
            fail!(ErrorCode::InvalidArgument, "Expected 'q,r,s' coordinate, got '{value}'");
        }
        let mut axes = [0i32; 3];
        for (i, part) in parts.iter().enumerate() {
            axes[i] = match part.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    fail!(ErrorCode::InvalidArgument, "Invalid coordinate axis '{part}'")
                }
            };
        }
        Self::new(axes[0], axes[1], axes[2])
    }
}

impl Serialize for HexCoordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexCoordinate {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(|e: GameError| D::Error::custom(e.message))
    }
}
