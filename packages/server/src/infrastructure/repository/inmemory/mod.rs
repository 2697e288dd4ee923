//! InMemory Repository 実装

pub mod chat_room;
pub mod project;

pub use chat_room::InMemoryChatRoomRepository;
pub use project::InMemoryProjectRepository;
