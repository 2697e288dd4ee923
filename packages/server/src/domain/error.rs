//! ドメイン層のエラー定義

use thiserror::Error;

/// Value Object の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// ユーザー名が不正（空・空白のみ・長すぎる・前後に空白）
    #[error("invalid username: '{0}'")]
    InvalidUsername(String),

    /// メッセージ本文が不正（空または長すぎる、実際の文字数を保持）
    #[error("invalid message content (length {0})")]
    InvalidMessageContent(usize),

    /// ID が UUID として解析できない
    #[error("invalid id: '{0}'")]
    InvalidId(String),
}

/// Repository（レコードストア）のエラー
///
/// 楽観的バージョニングの競合はここで表現される。呼び出し側は
/// `VersionConflict` のみをリトライ対象とし、それ以外は即座に伝播する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// 参照したレコードが存在しない
    #[error("record not found")]
    NotFound,

    /// 保存対象のバージョンがストア上のバージョンと一致しない
    #[error("version conflict (stored {stored}, given {given})")]
    VersionConflict { stored: u64, given: u64 },

    /// その他の永続化エラー
    #[error("storage failure: {0}")]
    Storage(String),
}
