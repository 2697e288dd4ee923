//! InMemory ChatRoom Repository 実装
//!
//! ドメイン層が定義する ChatRoomRepository trait の具体的な実装。
//! 検索キーはプロジェクト名（値参照）で、保存の契約は
//! InMemoryProjectRepository と同じ楽観的バージョニング。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatRoom, ChatRoomRepository, RepositoryError, RoomId, Username};

/// インメモリ ChatRoom Repository 実装
pub struct InMemoryChatRoomRepository {
    rooms: Mutex<HashMap<RoomId, ChatRoom>>,
}

impl InMemoryChatRoomRepository {
    /// 新しい InMemoryChatRoomRepository を作成
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryChatRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRoomRepository for InMemoryChatRoomRepository {
    async fn find_by_project_name(
        &self,
        project_name: &str,
    ) -> Result<ChatRoom, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .values()
            .find(|r| r.project_name == project_name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_member(&self, username: &Username) -> Result<Vec<ChatRoom>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms
            .values()
            .filter(|r| r.has_member(username))
            .cloned()
            .collect())
    }

    async fn save(&self, mut room: ChatRoom) -> Result<ChatRoom, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if let Some(stored) = rooms.get(&room.id) {
            if stored.version != room.version {
                return Err(RepositoryError::VersionConflict {
                    stored: stored.version,
                    given: room.version,
                });
            }
        }
        room.version += 1;
        rooms.insert(room.id.clone(), room.clone());
        Ok(room)
    }
}
