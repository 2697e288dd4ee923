//! Value Object 定義
//!
//! ドメイン層の値オブジェクト。コンストラクタで不変条件を検証し、
//! 不正な値を持つインスタンスが存在できないようにします。

use uuid::Uuid;

use super::error::DomainError;

/// ユーザー名（1〜64 文字、前後に空白を含まない）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Username(String);

impl Username {
    pub const MAX_LENGTH: usize = 64;

    /// 新しい Username を作成
    ///
    /// # Errors
    ///
    /// 空文字・空白のみ・64 文字超・前後に空白を含む場合は
    /// `DomainError::InvalidUsername` を返す。
    pub fn new(value: String) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed != value || value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidUsername(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// チャットメッセージ本文（1〜2000 文字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    pub const MAX_LENGTH: usize = 2000;

    /// 新しい MessageContent を作成
    ///
    /// # Errors
    ///
    /// 空文字または 2000 文字を超える場合は
    /// `DomainError::InvalidMessageContent` を返す。
    pub fn new(value: String) -> Result<Self, DomainError> {
        let length = value.chars().count();
        if length == 0 || length > Self::MAX_LENGTH {
            return Err(DomainError::InvalidMessageContent(length));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageContent {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// サーバーが割り当てる Unix タイムスタンプ（UTC、ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// プロジェクト ID（UUID v4）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    /// 新しい ProjectId を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既存の文字列から ProjectId を作成（UUID として解析できること）
    pub fn new(value: String) -> Result<Self, DomainError> {
        match Uuid::parse_str(&value) {
            Ok(_) => Ok(Self(value)),
            Err(_) => Err(DomainError::InvalidId(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ProjectId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// チャットルーム ID（UUID v4）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    /// 新しい RoomId を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既存の文字列から RoomId を作成（UUID として解析できること）
    pub fn new(value: String) -> Result<Self, DomainError> {
        match Uuid::parse_str(&value) {
            Ok(_) => Ok(Self(value)),
            Err(_) => Err(DomainError::InvalidId(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// チャットメッセージ ID（UUID v4、サーバーが割り当てる）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// 新しい MessageId を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// WebSocket 接続 ID（UUID v4、接続ごとにサーバーが割り当てる）
///
/// 購読者の識別子。ユーザー名とは独立しており、同じユーザーが
/// 複数の接続を持つことを許容する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// 新しい ConnectionId を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
