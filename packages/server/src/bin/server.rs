//! Project collaboration server with a real-time chat layer.
//!
//! Persists project/chat-room records behind optimistic versioning and
//! fans chat messages out to every subscriber of a room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kakehashi-server
//! cargo run --bin kakehashi-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;

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
use kakehashi_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "kakehashi-server")]
#[command(about = "Project collaboration server with real-time chat", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Clock / Repositories / ChatHub
    // 2. UseCases
    // 3. AppState
    // 4. Server

    // 1. Create the clock, the record store adapters and the chat hub
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let projects = Arc::new(InMemoryProjectRepository::new());
    let chat_rooms = Arc::new(InMemoryChatRoomRepository::new());
    let hub = Arc::new(ChatHub::new(clock.clone()));

    // 2. Create UseCases
    let create_project_usecase = Arc::new(CreateProjectUseCase::new(projects.clone()));
    let get_project_usecase = Arc::new(GetProjectUseCase::new(projects.clone()));
    let list_projects_usecase = Arc::new(ListProjectsUseCase::new(projects.clone()));
    let update_project_usecase = Arc::new(UpdateProjectUseCase::new(
        projects.clone(),
        chat_rooms.clone(),
    ));
    let create_chat_room_usecase = Arc::new(CreateChatRoomUseCase::new(chat_rooms.clone()));
    let list_chat_rooms_usecase = Arc::new(ListChatRoomsUseCase::new(chat_rooms.clone()));
    let list_tasks_usecase = Arc::new(ListTasksUseCase::new(projects.clone()));
    let list_notifications_usecase = Arc::new(ListNotificationsUseCase::new(
        projects.clone(),
        clock.clone(),
    ));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(hub.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(hub.clone()));
    let disconnect_subscriber_usecase = Arc::new(DisconnectSubscriberUseCase::new(hub.clone()));
    let get_room_history_usecase = Arc::new(GetRoomHistoryUseCase::new(hub.clone()));

    // 3. Create AppState
    let state = Arc::new(AppState {
        create_project_usecase,
        get_project_usecase,
        list_projects_usecase,
        update_project_usecase,
        create_chat_room_usecase,
        list_chat_rooms_usecase,
        list_tasks_usecase,
        list_notifications_usecase,
        join_room_usecase,
        send_message_usecase,
        disconnect_subscriber_usecase,
        get_room_history_usecase,
    });

    // 4. Create and run the server
    let server = Server::new(state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
