//! UseCase: 購読者切断処理

use std::sync::Arc;

use crate::domain::ConnectionId;
use crate::infrastructure::chat::ChatHub;

/// 購読者切断のユースケース
///
/// 切断はリアルタイムチャンネル唯一の teardown シグナルであり、
/// best-effort で処理される。メッセージログには影響しない。
pub struct DisconnectSubscriberUseCase {
    /// ChatHub（ルームレジストリ）
    hub: Arc<ChatHub>,
}

impl DisconnectSubscriberUseCase {
    /// 新しい DisconnectSubscriberUseCase を作成
    pub fn new(hub: Arc<ChatHub>) -> Self {
        Self { hub }
    }

    /// 接続を全ルームから取り除く
    ///
    /// # Returns
    ///
    /// 取り除かれたルーム数
    pub async fn execute(&self, connection_id: &ConnectionId) -> usize {
        self.hub.disconnect(connection_id).await
    }
}
