//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessageContent, RoomId, Username},
    infrastructure::chat::SubscriberChannel,
    infrastructure::dto::websocket::{ClientEvent, EventType, JoinedEvent},
    ui::state::AppState,
};

use serde::Deserialize;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub client_id: String,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // client_id はユーザー名として妥当であること
    if Username::try_from(query.client_id.clone()).is_err() {
        tracing::warn!("Invalid client_id format: '{}'", query.client_id);
        return Err(StatusCode::BAD_REQUEST);
    }

    let client_id = query.client_id;
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, client_id)))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: broadcast events for the
/// rooms this connection subscribed to are sent to the client.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, client_id: String) {
    let (sender, mut receiver) = socket.split();

    // 接続ごとにサーバー側で ConnectionId を割り当てる
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    tracing::info!(
        "Client '{}' connected as connection '{}'",
        client_id,
        connection_id.as_str()
    );

    // Spawn a task to push broadcast events to this client
    let mut send_task = pusher_loop(rx, sender);

    // Spawn a task to receive events from this client
    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();
    let client_id_clone = client_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_event(&state_clone, &connection_id_clone, &tx, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", client_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // 切断はリアルタイムチャンネル唯一の teardown シグナル
    let left_rooms = state
        .disconnect_subscriber_usecase
        .execute(&connection_id)
        .await;
    tracing::info!(
        "Connection '{}' for client '{}' disconnected, removed from {} room(s)",
        connection_id.as_str(),
        client_id,
        left_rooms
    );
}

/// Handle a single client event (join or chat submission).
///
/// The real-time channel has no error surface: invalid payloads are logged
/// and dropped, and message submission never fails toward the sender.
async fn handle_client_event(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    tx: &SubscriberChannel,
    text: &str,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Failed to parse client event as JSON: {}", e);
            return;
        }
    };

    match event {
        ClientEvent::Join { room_id } => {
            let room_id = match RoomId::try_from(room_id) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("Invalid room_id in join event: {}", e);
                    return;
                }
            };

            let joined_at = state
                .join_room_usecase
                .execute(room_id.clone(), connection_id.clone(), tx.clone())
                .await;

            let ack = JoinedEvent {
                r#type: EventType::Joined,
                room_id: room_id.into_string(),
                joined_at: joined_at.value(),
            };
            let ack_json = serde_json::to_string(&ack).unwrap();
            let _ = tx.send(ack_json);
        }
        ClientEvent::Chat {
            room_id,
            sender,
            content,
            attachment,
        } => {
            let room_id_result = RoomId::try_from(room_id);
            let sender_result = Username::try_from(sender);
            let content_result = MessageContent::try_from(content);

            match (room_id_result, sender_result, content_result) {
                (Ok(room_id), Ok(sender), Ok(content)) => {
                    // 送信は best-effort：戻り値のメッセージは配信済み
                    state
                        .send_message_usecase
                        .execute(room_id, sender, content, attachment)
                        .await;
                }
                (Err(e), _, _) => {
                    tracing::warn!("Invalid room_id in chat event: {}", e);
                }
                (_, Err(e), _) => {
                    tracing::warn!("Invalid sender in chat event: {}", e);
                }
                (_, _, Err(e)) => {
                    tracing::warn!("Invalid content in chat event: {}", e);
                }
            }
        }
    }
}
