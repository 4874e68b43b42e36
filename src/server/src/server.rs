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

//! WebSocket transport. One endpoint per game; inbound command envelopes
//! are `{type, payload}` JSON. State frames are broadcast on every
//! `Broadcast` event; errors are replied point-to-point.

pub mod session;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Path, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use core_data::game_primitives::{GameId, PlayerId};
use errors::{ErrorCode, GameError};
use futures::{SinkExt, StreamExt};
use game_data::command_data::UserCommand;
use game_data::event_data::GameEvent;
use game_data::game_state::GameSettings;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::session::{GameSession, SessionStore};

/// All live sessions in this process.
static SESSIONS: Lazy<SessionStore> = Lazy::new(SessionStore::default);

/// Runs the server until shutdown.
pub async fn run(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let address = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%address, "Server listening");
    axum::Server::bind(&address)
        .serve(router().into_make_service())
        .await?;
    Ok(())
}

pub fn router() -> Router {
    Router::new()
        .route("/api/games", post(create_game))
        .route("/api/games/:game_id/ws", get(connect))
}

#[derive(Deserialize, Default)]
struct CreateGameRequest {
    settings: Option<GameSettings>,
}

async fn create_game(body: Option<Json<CreateGameRequest>>) -> impl IntoResponse {
    let settings = body.and_then(|Json(request)| request.settings);
    let (game_id, _) = SESSIONS.create(settings);
    Json(json!({ "game_id": game_id.to_string() }))
}

async fn connect(
    Path(game_id): Path<String>,
    upgrade: WebSocketUpgrade,
) -> impl IntoResponse {
    upgrade.on_upgrade(move |socket| handle_socket(socket, game_id))
}

async fn handle_socket(socket: WebSocket, game_id: String) {
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // Per-client writer queue: transport writes never call back into the
    // session.
    let writer = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sink.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
    });

    let session = match game_id.parse::<GameId>().and_then(|id| SESSIONS.get(id)) {
        Ok(session) => session,
        Err(error) => {
            let _ = tx.send(views::error_frame(&error));
            drop(tx);
            let _ = writer.await;
            return;
        }
    };

    let mut player_id: Option<PlayerId> = None;
    while let Some(Ok(message)) = stream.next().await {
        let text = match message {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };
        if let Err(error) = handle_frame(&session, &tx, &mut player_id, &text) {
            let _ = tx.send(views::error_frame(&error));
        }
    }

    if let Some(player_id) = player_id {
        session.remove_client(player_id);
        let result = session.with_game(|game| {
            game.player_mut(player_id)?.connected = false;
            dispatcher::publish(game, GameEvent::GameStateChanged);
            Ok(())
        });
        if let Err(error) = result {
            warn!(%error, "Failed to mark player disconnected");
        }
        debug!(?player_id, "Client disconnected");
    }
    writer.abort();
}

/// Decodes and routes one inbound envelope.
fn handle_frame(
    session: &Arc<GameSession>,
    tx: &mpsc::UnboundedSender<String>,
    player_id: &mut Option<PlayerId>,
    text: &str,
) -> Result<(), GameError> {
    let command: UserCommand = serde_json::from_str(text).map_err(|e| {
        GameError::new(ErrorCode::InvalidArgument, format!("Malformed command: {e}"))
    })?;

    match &command {
        UserCommand::CreateGame { .. } => Err(GameError::new(
            ErrorCode::InvalidArgument,
            "create-game is not available on a game socket",
        )),
        UserCommand::JoinGame { name, player_id: client_player_id } => {
            let joined = session
                .with_game(|game| actions::lifecycle::join_game(game, name, *client_player_id))?;
            *player_id = Some(joined);
            session.register_client(joined, tx.clone());
            Ok(())
        }
        _ => {
            let Some(acting) = *player_id else {
                return Err(GameError::new(
                    ErrorCode::PreconditionFailed,
                    "Join the game before issuing commands",
                ));
            };
            session.with_game(|game| actions::handle_command(game, acting, &command))
        }
    }
}
