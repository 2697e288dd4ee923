//! UseCase: ルーム参加処理

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomId, Timestamp};
use crate::infrastructure::chat::{ChatHub, SubscriberChannel};

/// ルーム参加のユースケース
///
/// レジストリのエントリは最初の参加で遅延生成されるため、参加は
/// 失敗しない（リアルタイムチャンネルにエラー面は無い）。
pub struct JoinRoomUseCase {
    /// ChatHub（ルームレジストリとファンアウト）
    hub: Arc<ChatHub>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(hub: Arc<ChatHub>) -> Self {
        Self { hub }
    }

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// 参加時刻のタイムスタンプ
    pub async fn execute(
        &self,
        room_id: RoomId,
        connection_id: ConnectionId,
        sender: SubscriberChannel,
    ) -> Timestamp {
        self.hub.join(room_id, connection_id, sender).await
    }
}
