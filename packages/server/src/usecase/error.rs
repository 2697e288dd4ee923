//! UseCase 層のエラー定義

use thiserror::Error;

/// プロジェクト更新（マージサービス）のエラー
///
/// NotFound と所有者不一致は呼び出し側で区別できる必要がある
/// （HTTP 層で 404 / 403 に振り分けられる）。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpdateProjectError {
    /// 対象のプロジェクトが存在しない
    #[error("project not found")]
    ProjectNotFound,

    /// プロジェクト名に対応するチャットルームが存在しない
    #[error("chat room not found for project name")]
    ChatRoomNotFound,

    /// リクエスト元がプロジェクトの所有者ではない
    #[error("requester '{0}' is not the project owner")]
    NotOwner(String),

    /// リトライ回数内でバージョン競合を解消できなかった
    #[error("version conflict was not resolved within the retry budget")]
    Conflict,

    /// その他の永続化エラー
    #[error("repository failure: {0}")]
    Repository(String),
}
