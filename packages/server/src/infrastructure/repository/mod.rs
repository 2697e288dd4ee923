//! Repository 実装
//!
//! 現在はインメモリ実装のみ。将来 PostgreSQL などの DBMS を実装する
//! 場合もこのモジュール配下に追加する。

pub mod inmemory;

pub use inmemory::{InMemoryChatRoomRepository, InMemoryProjectRepository};
