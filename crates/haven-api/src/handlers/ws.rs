//! Live channel WebSocket endpoint.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use tracing::debug;
use uuid::Uuid;

use haven_realtime::LiveConnectionRegistry;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// `GET /ws` — authenticated upgrade into the live connection registry.
pub async fn upgrade(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    ws: WebSocketUpgrade,
) -> Response {
    let registry = Arc::clone(&state.registry);
    let user_id = ctx.user_id;
    ws.on_upgrade(move |socket| drive_socket(socket, registry, user_id))
}

/// Pump registry payloads into the socket until either side closes.
///
/// Inbound frames are not part of the protocol and are ignored; the socket
/// is read only to observe closure.
async fn drive_socket(
    mut socket: WebSocket,
    registry: Arc<LiveConnectionRegistry>,
    user_id: Uuid,
) {
    let (handle, mut rx) = registry.register(user_id);

    loop {
        tokio::select! {
            outbound = rx.recv() => {
                match outbound {
                    Some(payload) => {
                        if socket.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(frame)) => {
                        debug!(user_id = %user_id, ?frame, "Ignoring inbound frame");
                    }
                }
            }
        }
    }

    registry.unregister(handle.id);
}
