//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ChatRoom, Project, ProjectId, RepositoryError, Username};

/// Project Repository trait
///
/// プロジェクトレコードの save / find 契約。`save` は楽観的バージョニングを
/// 実装する：渡されたエンティティのバージョンがストア上のバージョンと
/// 一致しない場合は `RepositoryError::VersionConflict` を返し、一致した
/// 場合はバージョンをインクリメントして保存後のエンティティを返す。
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// ID でプロジェクトを取得
    async fn find_by_id(&self, id: &ProjectId) -> Result<Project, RepositoryError>;

    /// 指定ユーザーがメンバーであるプロジェクトを取得
    async fn find_by_member(&self, username: &Username) -> Result<Vec<Project>, RepositoryError>;

    /// プロジェクトを保存（バージョン競合時は `VersionConflict`）
    async fn save(&self, project: Project) -> Result<Project, RepositoryError>;
}

/// ChatRoom Repository trait
///
/// チャットルームはプロジェクト名（値）で紐づくため、主な検索キーは
/// プロジェクト名になる。保存の契約は ProjectRepository と同じ。
#[async_trait]
pub trait ChatRoomRepository: Send + Sync {
    /// プロジェクト名でチャットルームを取得
    async fn find_by_project_name(&self, project_name: &str)
    -> Result<ChatRoom, RepositoryError>;

    /// 指定ユーザーがメンバーであるチャットルームを取得
    async fn find_by_member(&self, username: &Username) -> Result<Vec<ChatRoom>, RepositoryError>;

    /// チャットルームを保存（バージョン競合時は `VersionConflict`）
    async fn save(&self, room: ChatRoom) -> Result<ChatRoom, RepositoryError>;
}
