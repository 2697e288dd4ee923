//! UseCase: チャットルーム一覧取得処理

use std::sync::Arc;

use crate::domain::{ChatRoom, ChatRoomRepository, RepositoryError, Username};

/// ユーザーがメンバーであるチャットルームの一覧取得のユースケース
pub struct ListChatRoomsUseCase {
    /// Repository（データアクセス層の抽象化）
    chat_rooms: Arc<dyn ChatRoomRepository>,
}

impl ListChatRoomsUseCase {
    /// 新しい ListChatRoomsUseCase を作成
    pub fn new(chat_rooms: Arc<dyn ChatRoomRepository>) -> Self {
        Self { chat_rooms }
    }

    /// 指定ユーザーがメンバーであるチャットルームを取得
    pub async fn execute(&self, username: &Username) -> Result<Vec<ChatRoom>, RepositoryError> {
        self.chat_rooms.find_by_member(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomId;
    use crate::infrastructure::repository::InMemoryChatRoomRepository;

    fn username(value: &str) -> Username {
        Username::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_list_chat_rooms_returns_only_memberships() {
        // テスト項目: メンバーであるチャットルームだけが返される
        // given (前提条件):
        let chat_rooms = Arc::new(InMemoryChatRoomRepository::new());
        chat_rooms
            .save(ChatRoom::new(
                RoomId::generate(),
                "proj-42".to_string(),
                vec![username("alice"), username("bob")],
            ))
            .await
            .unwrap();
        chat_rooms
            .save(ChatRoom::new(
                RoomId::generate(),
                "proj-43".to_string(),
                vec![username("carol")],
            ))
            .await
            .unwrap();
        let usecase = ListChatRoomsUseCase::new(chat_rooms);

        // when (操作):
        let result = usecase.execute(&username("bob")).await.unwrap();

        // then (期待する結果):
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].project_name, "proj-42");
    }
}
