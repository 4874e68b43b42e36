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

//! The closed error taxonomy for the game engine. Every handler failure is a
//! [GameError] carrying one of the [ErrorCode]s below; the transport layer
//! surfaces these to clients as `{code, category, message}`.
//!
//! Use the [verify] and [fail] macros instead of constructing errors by hand.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Machine-readable failure codes returned from action handlers.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorCode {
    /// Game or player is not known.
    NotFound,
    /// The action is not legal in the current game phase.
    WrongPhase,
    /// The acting player does not hold the current turn.
    NotYourTurn,
    /// The acting player has already passed this generation.
    AlreadyPassed,
    /// Malformed coordinate, unknown card id, unknown milestone or award,
    /// invalid choice index.
    InvalidArgument,
    /// Requirements not met, parameter maxed, no legal placement, no pending
    /// selection, or a pending selection of the wrong source.
    PreconditionFailed,
    InsufficientResources,
    InsufficientCredits,
    InsufficientProduction,
    /// Payment does not cover the cost, misuses steel/titanium, or uses an
    /// unregistered substitute.
    PaymentInvalid,
    /// Card not in hand, action already exhausted this generation, milestone
    /// already claimed.
    Conflict,
    /// Invariant violation. Logged and surfaced as an opaque failure.
    Internal,
}

/// Coarse grouping of [ErrorCode]s, surfaced alongside the code.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorCategory {
    /// The request referenced something unknown or was malformed.
    Request,
    /// The request was well-formed but the rules forbid it right now.
    Rules,
    /// The player cannot afford the action.
    Resources,
    Internal,
}

impl ErrorCode {
    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::NotFound | ErrorCode::InvalidArgument => ErrorCategory::Request,
            ErrorCode::WrongPhase
            | ErrorCode::NotYourTurn
            | ErrorCode::AlreadyPassed
            | ErrorCode::PreconditionFailed
            | ErrorCode::Conflict => ErrorCategory::Rules,
            ErrorCode::InsufficientResources
            | ErrorCode::InsufficientCredits
            | ErrorCode::InsufficientProduction
            | ErrorCode::PaymentInvalid => ErrorCategory::Resources,
            ErrorCode::Internal => ErrorCategory::Internal,
        }
    }
}

/// A typed engine failure.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct GameError {
    pub code: ErrorCode,
    pub message: String,
}

impl GameError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Returns a [GameError] with the given [ErrorCode] from the enclosing
/// function.
#[macro_export]
macro_rules! fail {
    ($code:expr, $($arg:tt)*) => {
        return Err($crate::GameError::new($code, format!($($arg)*)))
    };
}

/// Evaluates a boolean expression and fails with the given [ErrorCode] if it
/// is false.
#[macro_export]
macro_rules! verify {
    ($expr:expr, $code:expr, $($arg:tt)*) => {
        if !$expr {
            return Err($crate::GameError::new($code, format!($($arg)*)));
        }
    };
}

/// Trait to annotate `Option` values with a typed error.
pub trait WithCode<T> {
    fn with_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T>;
}

impl<T> WithCode<T> for Option<T> {
    fn with_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(GameError::new(code, message)),
        }
    }
}
