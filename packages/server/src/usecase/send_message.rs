//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージ送信処理（ログへの追記、全購読者へのブロードキャスト）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：購読者の有無にかかわらずログに残る
//! - ID とタイムスタンプがサーバー側で割り当てられることを確認
//! - 送信は best-effort であり、送信者にエラーが返らないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：購読者への配信
//! - エッジケース：購読者ゼロのルームへの投稿（ログのみ）

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageContent, RoomId, Username};
use crate::infrastructure::chat::ChatHub;

/// メッセージ送信のユースケース
///
/// 送信は best-effort：配信失敗は送信者へ伝播しない。戻り値はログに
/// 追記されたメッセージ（ID とタイムスタンプはサーバーが割り当て済み）。
pub struct SendMessageUseCase {
    /// ChatHub（メッセージログとファンアウト）
    hub: Arc<ChatHub>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(hub: Arc<ChatHub>) -> Self {
        Self { hub }
    }

    /// メッセージ送信を実行
    pub async fn execute(
        &self,
        room_id: RoomId,
        sender: Username,
        content: MessageContent,
        attachment: Option<String>,
    ) -> ChatMessage {
        self.hub.publish(room_id, sender, content, attachment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionId;
    use crate::infrastructure::dto::websocket::ChatBroadcastEvent;
    use kakehashi_shared::time::FixedClock;
    use tokio::sync::mpsc;

    fn username(value: &str) -> Username {
        Username::new(value.to_string()).unwrap()
    }

    fn content(value: &str) -> MessageContent {
        MessageContent::new(value.to_string()).unwrap()
    }

    fn create_test_hub() -> Arc<ChatHub> {
        Arc::new(ChatHub::new(Arc::new(FixedClock::new(5000))))
    }

    #[tokio::test]
    async fn test_send_message_to_empty_room_is_logged_only() {
        // テスト項目: 購読者ゼロのルームへの投稿は履歴にちょうど 1 件残り、
        //             誰にも配信されない
        // given (前提条件):
        let hub = create_test_hub();
        let usecase = SendMessageUseCase::new(hub.clone());
        let room_id = RoomId::generate();

        // when (操作):
        usecase
            .execute(room_id.clone(), username("alice"), content("hello"), None)
            .await;

        // then (期待する結果):
        let history = hub.history(&room_id).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].sender, username("alice"));
        assert_eq!(history[0].content.as_str(), "hello");
        assert_eq!(hub.subscriber_count(&room_id).await, 0);
    }

    #[tokio::test]
    async fn test_send_message_delivers_to_subscriber_with_server_assigned_fields() {
        // テスト項目: 購読者はサーバー割り当ての ID・タイムスタンプ付きの
        //             ブロードキャストイベントを受信する
        // given (前提条件):
        let hub = create_test_hub();
        let usecase = SendMessageUseCase::new(hub.clone());
        let room_id = RoomId::generate();
        let (tx, mut rx) = mpsc::unbounded_channel();
        hub.join(room_id.clone(), ConnectionId::generate(), tx).await;

        // when (操作):
        let message = usecase
            .execute(
                room_id.clone(),
                username("alice"),
                content("hello"),
                Some("files/design.png".to_string()),
            )
            .await;

        // then (期待する結果):
        let delivered = rx.try_recv().unwrap();
        let event: ChatBroadcastEvent = serde_json::from_str(&delivered).unwrap();
        assert_eq!(event.id, message.id.as_str());
        assert_eq!(event.sender, "alice");
        assert_eq!(event.content, "hello");
        assert_eq!(event.attachment, Some("files/design.png".to_string()));
        assert_eq!(event.timestamp, 5000);
    }
}
