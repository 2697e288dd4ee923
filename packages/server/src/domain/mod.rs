//! ドメイン層
//!
//! プロジェクト・チャットルーム・チャットメッセージのドメインモデルと、
//! データアクセスのインターフェース（Repository trait）を定義します。

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, ChatRoom, Member, Project};
pub use error::{DomainError, RepositoryError};
pub use repository::{ChatRoomRepository, ProjectRepository};
pub use value_object::{
    ConnectionId, MessageContent, MessageId, ProjectId, RoomId, Timestamp, Username,
};
