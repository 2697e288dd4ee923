//! UseCase 層
//!
//! ドメイン層の Repository trait とチャットハブに依存し、アプリケーション
//! のユースケースを実装します。Infrastructure 層の具体的な Repository
//! 実装には依存しません（依存性の逆転）。

pub mod create_chat_room;
pub mod create_project;
pub mod disconnect_subscriber;
pub mod error;
pub mod get_project;
pub mod get_room_history;
pub mod join_room;
pub mod list_chat_rooms;
pub mod list_notifications;
pub mod list_projects;
pub mod list_tasks;
pub mod retry;
pub mod send_message;
pub mod update_project;

pub use create_chat_room::CreateChatRoomUseCase;
pub use create_project::CreateProjectUseCase;
pub use disconnect_subscriber::DisconnectSubscriberUseCase;
pub use error::UpdateProjectError;
pub use get_project::GetProjectUseCase;
pub use get_room_history::GetRoomHistoryUseCase;
pub use join_room::JoinRoomUseCase;
pub use list_chat_rooms::ListChatRoomsUseCase;
pub use list_notifications::{DeadlineNotification, ListNotificationsUseCase};
pub use list_projects::ListProjectsUseCase;
pub use list_tasks::{ListTasksUseCase, TaskAssignment};
pub use retry::{DEFAULT_MAX_RETRIES, execute_with_retry};
pub use send_message::SendMessageUseCase;
pub use update_project::UpdateProjectUseCase;
