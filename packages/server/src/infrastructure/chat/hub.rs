//! チャットルームレジストリとメッセージのファンアウト
//!
//! ## 責務
//!
//! - ルームごとの購読者集合の管理（join / disconnect）
//! - ルームごとの追記専用メッセージログの管理
//! - メッセージ投稿時の ID・タイムスタンプ割り当てと全購読者への配信
//!
//! ## 設計ノート
//!
//! レジストリとログは単一の Mutex の下に置く。投稿時の「ログへの追記」と
//! 「購読者への配信」が同じクリティカルセクションで行われるため、同一
//! ルーム内のメッセージは投稿順どおりに追記・配信される（マルチスレッド
//! ランタイムでもこの不変条件が保たれる）。ルーム間の順序は保証しない。
//!
//! 配信チャンネルは unbounded であり、送信はブロックしない。配信先の
//! 接続が既に閉じている場合は黙って落とす（リアルタイムチャンネルに
//! エラー面は存在しない）。

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, mpsc};

use kakehashi_shared::time::Clock;

use crate::domain::{
    ChatMessage, ConnectionId, MessageContent, MessageId, RoomId, Timestamp, Username,
};
use crate::infrastructure::dto::websocket::ChatBroadcastEvent;

/// 購読者へのメッセージ送信用チャンネル
pub type SubscriberChannel = mpsc::UnboundedSender<String>;

/// ルームごとのライブ状態（購読者集合とメッセージログ）
#[derive(Default)]
struct RoomChannel {
    /// 現在の購読者（接続 ID → 送信チャンネル）
    subscribers: HashMap<ConnectionId, SubscriberChannel>,
    /// 追記専用のメッセージログ（投稿順）
    messages: Vec<ChatMessage>,
}

/// チャットハブ
///
/// プロセス生成時に一度だけ構築し、全ハンドラへ参照で注入する。
/// ルームのエントリは最初の join または publish で遅延生成され、
/// 購読者がいなくなっても破棄されない。
pub struct ChatHub {
    rooms: Mutex<HashMap<RoomId, RoomChannel>>,
    clock: Arc<dyn Clock>,
}

impl ChatHub {
    /// 新しい ChatHub を作成
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// 接続をルームに参加させる
    ///
    /// ルームのエントリが無ければ生成する。同じ接続が複数のルームに
    /// 参加することもできる（join を複数回発行した場合）。
    pub async fn join(
        &self,
        room_id: RoomId,
        connection_id: ConnectionId,
        sender: SubscriberChannel,
    ) -> Timestamp {
        let joined_at = Timestamp::new(self.clock.now_utc_millis());
        let mut rooms = self.rooms.lock().await;
        let channel = rooms.entry(room_id.clone()).or_default();
        channel.subscribers.insert(connection_id.clone(), sender);
        tracing::info!(
            "Connection '{}' joined room '{}' ({} subscriber(s))",
            connection_id.as_str(),
            room_id.as_str(),
            channel.subscribers.len()
        );
        joined_at
    }

    /// メッセージを投稿する
    ///
    /// サーバー側で ID とタイムスタンプを割り当て、ルームのログに追記した
    /// うえで現在の全購読者に配信する。購読者がいないルームへの投稿は
    /// エラーではなく、ログに残るだけ。
    pub async fn publish(
        &self,
        room_id: RoomId,
        sender: Username,
        content: MessageContent,
        attachment: Option<String>,
    ) -> ChatMessage {
        let mut rooms = self.rooms.lock().await;
        let channel = rooms.entry(room_id.clone()).or_default();

        // タイムスタンプ割り当てもロック内で行い、ログ順と配信順に一致させる
        let message = ChatMessage::new(
            MessageId::generate(),
            room_id.clone(),
            sender,
            content,
            attachment,
            Timestamp::new(self.clock.now_utc_millis()),
        );
        let event = ChatBroadcastEvent::from(message.clone());
        let json = serde_json::to_string(&event).unwrap();

        channel.messages.push(message.clone());

        if channel.subscribers.is_empty() {
            tracing::debug!(
                "No subscribers in room '{}', message logged only",
                room_id.as_str()
            );
        }
        for (connection_id, subscriber) in &channel.subscribers {
            // 閉じた接続への配信失敗は黙って落とす
            if subscriber.send(json.clone()).is_err() {
                tracing::warn!(
                    "Failed to push message to connection '{}', skipping",
                    connection_id.as_str()
                );
            }
        }

        message
    }

    /// 接続を全てのルームから取り除く
    ///
    /// メッセージログには影響しない。購読者がいなくなったルームの
    /// エントリも残したままにする。取り除かれたルーム数を返す。
    pub async fn disconnect(&self, connection_id: &ConnectionId) -> usize {
        let mut rooms = self.rooms.lock().await;
        let mut removed = 0;
        for (room_id, channel) in rooms.iter_mut() {
            if channel.subscribers.remove(connection_id).is_some() {
                removed += 1;
                tracing::info!(
                    "Connection '{}' left room '{}'",
                    connection_id.as_str(),
                    room_id.as_str()
                );
            }
        }
        removed
    }

    /// ルームの全メッセージ履歴を投稿順で返す（未知のルームは空）
    pub async fn history(&self, room_id: &RoomId) -> Vec<ChatMessage> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .map(|channel| channel.messages.clone())
            .unwrap_or_default()
    }

    /// ルームの現在の購読者数を返す（未知のルームは 0）
    pub async fn subscriber_count(&self, room_id: &RoomId) -> usize {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .map(|channel| channel.subscribers.len())
            .unwrap_or(0)
    }

    /// レジストリに存在するルームエントリの数を返す
    pub async fn room_count(&self) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.len()
    }
}
