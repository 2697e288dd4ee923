//! ドメインエンティティ定義
//!
//! Project と ChatRoom は永続化されるレコードで、楽観的バージョン
//! カウンタを持ちます。ChatMessage はルームごとのメッセージログに
//! 追記された後は不変です。

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::value_object::{MessageContent, MessageId, ProjectId, RoomId, Timestamp, Username};

/// プロジェクトメンバー（担当タスクと締め切りを持つ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: Username,
    pub task: String,
    pub deadline: NaiveDate,
}

impl Member {
    pub fn new(name: Username, task: String, deadline: NaiveDate) -> Self {
        Self {
            name,
            task,
            deadline,
        }
    }
}

/// プロジェクトエンティティ
///
/// `version` は保存が成功するたびに Repository 側でインクリメントされる。
/// 並行する書き込みはリトライで調停され、サイレントな上書きは起きない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub members: Vec<Member>,
    pub owner: Username,
    pub version: u64,
}

impl Project {
    /// 新しい Project を作成（バージョンは 0 から始まる）
    pub fn new(
        id: ProjectId,
        name: String,
        description: String,
        members: Vec<Member>,
        owner: Username,
    ) -> Self {
        Self {
            id,
            name,
            description,
            members,
            owner,
            version: 0,
        }
    }

    /// 可変フィールドをリクエスト内容で全置換する（フィールド単位のパッチではない）
    ///
    /// id・owner・version は更新パスでは変更されない。
    pub fn apply_update(&mut self, name: String, description: String, members: Vec<Member>) {
        self.name = name;
        self.description = description;
        self.members = members;
    }

    /// メンバー名の一覧を返す
    pub fn member_names(&self) -> Vec<Username> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }

    /// 指定したユーザーがメンバーかどうか
    pub fn has_member(&self, username: &Username) -> bool {
        self.members.iter().any(|m| &m.name == username)
    }
}

/// チャットルームエンティティ
///
/// プロジェクトとは値（プロジェクト名）で紐づく。メンバーは集合として
/// 保持し、重複は構造上存在しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRoom {
    pub id: RoomId,
    pub project_name: String,
    pub members: BTreeSet<Username>,
    pub version: u64,
}

impl ChatRoom {
    /// 新しい ChatRoom を作成（バージョンは 0 から始まる）
    pub fn new(id: RoomId, project_name: String, members: impl IntoIterator<Item = Username>) -> Self {
        Self {
            id,
            project_name,
            members: members.into_iter().collect(),
            version: 0,
        }
    }

    /// メンバー名の集合和をとる（既存メンバーは保持、重複は潰れる）
    pub fn merge_member_names(&mut self, names: impl IntoIterator<Item = Username>) {
        self.members.extend(names);
    }

    /// 指定したユーザーがメンバーかどうか
    pub fn has_member(&self, username: &Username) -> bool {
        self.members.contains(username)
    }
}

/// チャットメッセージエンティティ
///
/// ID とタイムスタンプは受信時にサーバーが割り当てる。ログに追記された
/// 後は変更も削除もされない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub room_id: RoomId,
    pub sender: Username,
    pub content: MessageContent,
    pub attachment: Option<String>,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        room_id: RoomId,
        sender: Username,
        content: MessageContent,
        attachment: Option<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            room_id,
            sender,
            content,
            attachment,
            timestamp,
        }
    }
}
