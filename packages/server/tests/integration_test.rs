//! Integration tests driving the HTTP API and the WebSocket channel end-to-end.
//!
//! Each test builds a fresh application state, serves the router on an
//! ephemeral port and plays the client role with `reqwest` /
//! `tokio-tungstenite`.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::time::{Duration, timeout};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use kakehashi_server::{
    infrastructure::{
        chat::ChatHub,
        repository::{InMemoryChatRoomRepository, InMemoryProjectRepository},
    },
    ui::{AppState, Server},
    usecase::{
        CreateChatRoomUseCase, CreateProjectUseCase, DisconnectSubscriberUseCase,
        GetProjectUseCase, GetRoomHistoryUseCase, JoinRoomUseCase, ListChatRoomsUseCase,
        ListNotificationsUseCase, ListProjectsUseCase, ListTasksUseCase, SendMessageUseCase,
        UpdateProjectUseCase,
    },
};
use kakehashi_shared::time::{Clock, SystemClock};

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

fn build_state() -> Arc<AppState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let projects = Arc::new(InMemoryProjectRepository::new());
    let chat_rooms = Arc::new(InMemoryChatRoomRepository::new());
    let hub = Arc::new(ChatHub::new(clock.clone()));

    Arc::new(AppState {
        create_project_usecase: Arc::new(CreateProjectUseCase::new(projects.clone())),
        get_project_usecase: Arc::new(GetProjectUseCase::new(projects.clone())),
        list_projects_usecase: Arc::new(ListProjectsUseCase::new(projects.clone())),
        update_project_usecase: Arc::new(UpdateProjectUseCase::new(
            projects.clone(),
            chat_rooms.clone(),
        )),
        create_chat_room_usecase: Arc::new(CreateChatRoomUseCase::new(chat_rooms.clone())),
        list_chat_rooms_usecase: Arc::new(ListChatRoomsUseCase::new(chat_rooms.clone())),
        list_tasks_usecase: Arc::new(ListTasksUseCase::new(projects.clone())),
        list_notifications_usecase: Arc::new(ListNotificationsUseCase::new(
            projects.clone(),
            clock.clone(),
        )),
        join_room_usecase: Arc::new(JoinRoomUseCase::new(hub.clone())),
        send_message_usecase: Arc::new(SendMessageUseCase::new(hub.clone())),
        disconnect_subscriber_usecase: Arc::new(DisconnectSubscriberUseCase::new(hub.clone())),
        get_room_history_usecase: Arc::new(GetRoomHistoryUseCase::new(hub.clone())),
    })
}

/// Serve a fresh application on an ephemeral port and return its address
async fn spawn_server() -> String {
    let app = Server::new(build_state()).router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    addr.to_string()
}

async fn create_project(
    client: &reqwest::Client,
    base: &str,
    owner: &str,
    members: Value,
) -> Value {
    let response = client
        .post(format!("http://{base}/api/projects"))
        .json(&json!({
            "name": "proj-42",
            "description": "collaborative tracker",
            "owner": owner,
            "members": members,
        }))
        .send()
        .await
        .expect("Failed to create project");
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.expect("Invalid project response")
}

async fn create_room(client: &reqwest::Client, base: &str, members: Value) -> Value {
    let response = client
        .post(format!("http://{base}/api/rooms"))
        .json(&json!({
            "project_name": "proj-42",
            "members": members,
        }))
        .send()
        .await
        .expect("Failed to create chat room");
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.expect("Invalid room response")
}

/// Read the next text frame from a WebSocket and parse it as JSON
async fn next_json(ws: &mut WsStream) -> Value {
    loop {
        let msg = timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("Timed out waiting for WebSocket event")
            .expect("WebSocket stream ended")
            .expect("WebSocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).expect("Invalid JSON event");
        }
    }
}

async fn join_room(ws: &mut WsStream, room_id: &str) {
    ws.send(Message::Text(
        json!({"type": "join", "room_id": room_id}).to_string().into(),
    ))
    .await
    .expect("Failed to send join event");
    let ack = next_json(ws).await;
    assert_eq!(ack["type"], "joined");
    assert_eq!(ack["room_id"], room_id);
}

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックエンドポイントが ok を返す
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{base}/api/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_project_create_and_fetch() {
    // テスト項目: 作成したプロジェクトを ID で取得でき、未知の ID は 404 になる
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created = create_project(
        &client,
        &base,
        "alice",
        json!([{"name": "alice", "task": "api", "deadline": "2026-09-01"}]),
    )
    .await;
    assert_eq!(created["version"], 1);

    let fetched: Value = client
        .get(format!("http://{base}/api/projects/{}", created["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let missing = client
        .get(format!(
            "http://{base}/api/projects/00000000-0000-4000-8000-000000000000"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn test_update_project_merges_room_membership() {
    // テスト項目: プロジェクト更新で新メンバー名が既存ルームに集合和でマージされる
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created = create_project(
        &client,
        &base,
        "alice",
        json!([{"name": "alice", "task": "design", "deadline": "2026-09-01"}]),
    )
    .await;
    create_room(&client, &base, json!(["alice", "carol"])).await;

    let response = client
        .put(format!("http://{base}/api/projects/{}", created["id"].as_str().unwrap()))
        .json(&json!({
            "username": "alice",
            "name": "proj-42",
            "description": "updated tracker",
            "members": [
                {"name": "alice", "task": "api", "deadline": "2026-09-02"},
                {"name": "bob", "task": "frontend", "deadline": "2026-09-03"},
            ],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["description"], "updated tracker");
    assert_eq!(updated["version"], 2);

    // bob はマージによってルームのメンバーになっている
    let rooms: Value = client
        .get(format!("http://{base}/api/users/bob/rooms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let members = rooms[0]["members"].as_array().unwrap();
    let names: Vec<&str> = members.iter().map(|m| m.as_str().unwrap()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[tokio::test]
async fn test_update_project_by_non_owner_is_forbidden() {
    // テスト項目: 所有者以外の更新は 403 になり、保存済みプロジェクトは不変
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created = create_project(
        &client,
        &base,
        "alice",
        json!([{"name": "alice", "task": "design", "deadline": "2026-09-01"}]),
    )
    .await;
    let project_url = format!("http://{base}/api/projects/{}", created["id"].as_str().unwrap());

    let response = client
        .put(&project_url)
        .json(&json!({
            "username": "mallory",
            "name": "proj-42",
            "description": "hijacked",
            "members": [],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let unchanged: Value = client.get(&project_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn test_tasks_and_notifications_derive_from_memberships() {
    // テスト項目: タスクと通知がメンバーシップから導出され、残り日数は切り上げで計算される
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let deadline = chrono::Utc::now()
        .date_naive()
        .checked_add_days(chrono::Days::new(3))
        .unwrap();
    create_project(
        &client,
        &base,
        "alice",
        json!([
            {"name": "alice", "task": "api", "deadline": deadline.to_string()},
            {"name": "bob", "task": "frontend", "deadline": deadline.to_string()},
        ]),
    )
    .await;

    let tasks: Value = client
        .get(format!("http://{base}/api/users/alice/tasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["task"], "api");

    let notifications: Value = client
        .get(format!("http://{base}/api/users/alice/notifications"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(notifications.as_array().unwrap().len(), 1);
    assert_eq!(notifications[0]["days_remaining"], 3);
}

#[tokio::test]
async fn test_websocket_chat_flow_with_history() {
    // テスト項目: join 済みの全購読者がブロードキャストを受信し、履歴が投稿順で返される
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let room = create_room(&client, &base, json!(["alice", "bob"])).await;
    let room_id = room["id"].as_str().unwrap();

    let (mut alice_ws, _) = connect_async(format!("ws://{base}/ws?client_id=alice"))
        .await
        .expect("Failed to connect alice");
    let (mut bob_ws, _) = connect_async(format!("ws://{base}/ws?client_id=bob"))
        .await
        .expect("Failed to connect bob");

    join_room(&mut alice_ws, room_id).await;
    join_room(&mut bob_ws, room_id).await;

    // alice がメッセージを送信すると、購読者である alice と bob の両方が受信する
    alice_ws
        .send(Message::Text(
            json!({
                "type": "chat",
                "room_id": room_id,
                "sender": "alice",
                "content": "hello from alice",
            })
            .to_string()
            .into(),
        ))
        .await
        .expect("Failed to send chat event");

    for ws in [&mut alice_ws, &mut bob_ws] {
        let event = next_json(ws).await;
        assert_eq!(event["type"], "chat");
        assert_eq!(event["room_id"], room_id);
        assert_eq!(event["sender"], "alice");
        assert_eq!(event["content"], "hello from alice");
        assert!(event["id"].as_str().is_some());
        assert!(event["timestamp"].as_i64().unwrap() > 0);
    }

    let history: Value = client
        .get(format!("http://{base}/api/rooms/{room_id}/messages"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let messages = history.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["sender"], "alice");
    assert_eq!(messages[0]["content"], "hello from alice");
}

#[tokio::test]
async fn test_history_of_unknown_room_is_empty_array() {
    // テスト項目: 未知のルームの履歴取得は空配列を返す（404 ではない）
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!(
            "http://{base}/api/rooms/00000000-0000-4000-8000-000000000000/messages"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_invalid_client_id_is_rejected_on_ws_connect() {
    // テスト項目: 不正な client_id での WebSocket 接続は拒否される
    let base = spawn_server().await;

    let result = connect_async(format!("ws://{base}/ws?client_id=%20")).await;

    assert!(result.is_err());
}
