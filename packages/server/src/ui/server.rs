//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{
    handler::{
        create_chat_room, create_project, get_project, get_room_messages, health_check,
        list_user_notifications, list_user_projects, list_user_rooms, list_user_tasks,
        update_project, websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Project collaboration server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// 全ハンドラが共有するアプリケーション状態
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Build the axum router with all routes
    ///
    /// Exposed separately so tests can serve the router on an ephemeral port.
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/projects", post(create_project))
            .route(
                "/api/projects/{project_id}",
                get(get_project).put(update_project),
            )
            .route("/api/rooms", post(create_chat_room))
            .route("/api/rooms/{room_id}/messages", get(get_room_messages))
            .route("/api/users/{username}/projects", get(list_user_projects))
            .route("/api/users/{username}/rooms", get(list_user_rooms))
            .route("/api/users/{username}/tasks", get(list_user_tasks))
            .route(
                "/api/users/{username}/notifications",
                get(list_user_notifications),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the project collaboration server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Project collaboration server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
