//! UseCase: プロジェクト更新とチャットルームメンバーのマージ
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateProjectUseCase::execute() メソッド
//! - 所有者チェック、可変フィールドの全置換、ルームメンバーの集合和、
//!   リトライ付き保存
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：所有者以外の更新は拒否され、ストアは不変
//! - プロジェクトのメンバー名がチャットルームのメンバー集合にマージされる
//!   ことを確認（重複は潰れる）
//! - バージョン競合がリトライで回復し、永続化されるインクリメントが
//!   ちょうど 1 回であることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：更新とマージの成功
//! - 異常系：所有者不一致、プロジェクト未存在、ルーム未存在、競合の
//!   リトライ超過
//! - エッジケース：初回保存が競合し、リトライで成功する

use std::sync::Arc;

use crate::domain::{
    ChatRoomRepository, Member, Project, ProjectId, ProjectRepository, RepositoryError, Username,
};

use super::error::UpdateProjectError;
use super::retry::{DEFAULT_MAX_RETRIES, execute_with_retry};

/// プロジェクト更新のユースケース（マージサービス）
///
/// プロジェクト本体の保存と、対応するチャットルームのメンバー集合和の
/// 書き戻しをそれぞれ独立にリトライ付きで行う。片方の競合がもう片方を
/// ロールバックすることはない（エンティティ横断のトランザクションは
/// 持たない）。
pub struct UpdateProjectUseCase {
    /// Project Repository（データアクセス層の抽象化）
    projects: Arc<dyn ProjectRepository>,
    /// ChatRoom Repository（データアクセス層の抽象化）
    chat_rooms: Arc<dyn ChatRoomRepository>,
}

impl UpdateProjectUseCase {
    /// 新しい UpdateProjectUseCase を作成
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        chat_rooms: Arc<dyn ChatRoomRepository>,
    ) -> Self {
        Self {
            projects,
            chat_rooms,
        }
    }

    /// プロジェクト更新を実行
    ///
    /// # Arguments
    ///
    /// * `project_id` - 更新対象のプロジェクト ID
    /// * `requester` - リクエスト元のユーザー名（所有者と一致すること）
    /// * `name` / `description` / `members` - 置換後の内容（全置換）
    ///
    /// # Returns
    ///
    /// * `Ok(Project)` - 保存後のプロジェクト（バージョンはインクリメント済み）
    /// * `Err(UpdateProjectError)` - 更新失敗
    pub async fn execute(
        &self,
        project_id: ProjectId,
        requester: Username,
        name: String,
        description: String,
        members: Vec<Member>,
    ) -> Result<Project, UpdateProjectError> {
        // 1. 対象プロジェクトを取得
        let mut project = match self.projects.find_by_id(&project_id).await {
            Ok(project) => project,
            Err(RepositoryError::NotFound) => return Err(UpdateProjectError::ProjectNotFound),
            Err(err) => return Err(UpdateProjectError::Repository(err.to_string())),
        };

        // 2. 所有者チェック（不一致ならストアには一切触れない）
        if project.owner != requester {
            return Err(UpdateProjectError::NotOwner(requester.into_string()));
        }

        // 3. 可変フィールドを全置換
        project.apply_update(name, description, members);
        let member_names = project.member_names();

        // 4. リトライ付きでプロジェクトを保存
        let projects = Arc::clone(&self.projects);
        let saved = execute_with_retry(
            project,
            move |p| {
                let projects = Arc::clone(&projects);
                async move { projects.save(p).await }
            },
            DEFAULT_MAX_RETRIES,
        )
        .await
        .map_err(map_save_error)?;

        // 5. プロジェクト名（値参照）でチャットルームを解決
        let mut room = match self.chat_rooms.find_by_project_name(&saved.name).await {
            Ok(room) => room,
            Err(RepositoryError::NotFound) => return Err(UpdateProjectError::ChatRoomNotFound),
            Err(err) => return Err(UpdateProjectError::Repository(err.to_string())),
        };

        // 6. メンバー名の集合和をルームの全メンバーとして書き戻す
        room.merge_member_names(member_names);

        // 7. ルームも独立にリトライ付きで保存（プロジェクト保存は巻き戻さない）
        let chat_rooms = Arc::clone(&self.chat_rooms);
        execute_with_retry(
            room,
            move |r| {
                let chat_rooms = Arc::clone(&chat_rooms);
                async move { chat_rooms.save(r).await }
            },
            DEFAULT_MAX_RETRIES,
        )
        .await
        .map_err(map_save_error)?;

        Ok(saved)
    }
}

fn map_save_error(err: RepositoryError) -> UpdateProjectError {
    match err {
        RepositoryError::VersionConflict { .. } => UpdateProjectError::Conflict,
        other => UpdateProjectError::Repository(other.to_string()),
    }
}
