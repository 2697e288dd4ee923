//! UseCase: ルーム履歴取得処理

use std::sync::Arc;

use crate::domain::{ChatMessage, RoomId};
use crate::infrastructure::chat::ChatHub;

/// ルームの全メッセージ履歴取得のユースケース
pub struct GetRoomHistoryUseCase {
    /// ChatHub（メッセージログ）
    hub: Arc<ChatHub>,
}

impl GetRoomHistoryUseCase {
    /// 新しい GetRoomHistoryUseCase を作成
    pub fn new(hub: Arc<ChatHub>) -> Self {
        Self { hub }
    }

    /// ルームの全メッセージ履歴を投稿順で取得
    ///
    /// 未知のルームはエラーではなく空のシーケンスを返す。
    pub async fn execute(&self, room_id: &RoomId) -> Vec<ChatMessage> {
        self.hub.history(room_id).await
    }
}
