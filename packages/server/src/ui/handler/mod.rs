//! Request handlers for the HTTP API and the WebSocket channel.

pub mod http;
pub mod websocket;

pub use http::{
    create_chat_room, create_project, get_project, get_room_messages, health_check,
    list_user_notifications, list_user_projects, list_user_rooms, list_user_tasks, update_project,
};
pub use websocket::websocket_handler;
