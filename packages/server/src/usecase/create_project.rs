//! UseCase: プロジェクト作成処理

use std::sync::Arc;

use crate::domain::{Member, Project, ProjectId, ProjectRepository, RepositoryError, Username};

/// プロジェクト作成のユースケース
pub struct CreateProjectUseCase {
    /// Repository（データアクセス層の抽象化）
    projects: Arc<dyn ProjectRepository>,
}

impl CreateProjectUseCase {
    /// 新しい CreateProjectUseCase を作成
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// プロジェクト作成を実行
    ///
    /// ID はサーバー側で生成する。保存後のエンティティ（バージョン 1）を返す。
    pub async fn execute(
        &self,
        name: String,
        description: String,
        owner: Username,
        members: Vec<Member>,
    ) -> Result<Project, RepositoryError> {
        let project = Project::new(ProjectId::generate(), name, description, members, owner);
        self.projects.save(project).await
    }
}
