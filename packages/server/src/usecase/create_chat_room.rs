//! UseCase: チャットルーム作成処理

use std::sync::Arc;

use crate::domain::{ChatRoom, ChatRoomRepository, RepositoryError, RoomId, Username};

/// チャットルーム作成のユースケース
pub struct CreateChatRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    chat_rooms: Arc<dyn ChatRoomRepository>,
}

impl CreateChatRoomUseCase {
    /// 新しい CreateChatRoomUseCase を作成
    pub fn new(chat_rooms: Arc<dyn ChatRoomRepository>) -> Self {
        Self { chat_rooms }
    }

    /// チャットルーム作成を実行
    ///
    /// ID はサーバー側で生成する。メンバーの重複は集合として潰れる。
    pub async fn execute(
        &self,
        project_name: String,
        members: Vec<Username>,
    ) -> Result<ChatRoom, RepositoryError> {
        let room = ChatRoom::new(RoomId::generate(), project_name, members);
        self.chat_rooms.save(room).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryChatRoomRepository;

    fn username(value: &str) -> Username {
        Username::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_chat_room_persists_with_version_one() {
        // テスト項目: 作成したチャットルームがバージョン 1 で保存され、プロジェクト名で
        //             取得できる
        // given (前提条件):
        let chat_rooms = Arc::new(InMemoryChatRoomRepository::new());
        let usecase = CreateChatRoomUseCase::new(chat_rooms.clone());

        // when (操作):
        let created = usecase
            .execute(
                "proj-42".to_string(),
                vec![username("alice"), username("alice"), username("bob")],
            )
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(created.version, 1);
        assert_eq!(created.members.len(), 2);
        let found = chat_rooms.find_by_project_name("proj-42").await.unwrap();
        assert_eq!(found, created);
    }
}
