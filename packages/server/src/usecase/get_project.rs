//! UseCase: プロジェクト取得処理

use std::sync::Arc;

use crate::domain::{Project, ProjectId, ProjectRepository, RepositoryError};

/// プロジェクト取得のユースケース
pub struct GetProjectUseCase {
    /// Repository（データアクセス層の抽象化）
    projects: Arc<dyn ProjectRepository>,
}

impl GetProjectUseCase {
    /// 新しい GetProjectUseCase を作成
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// ID でプロジェクトを取得
    pub async fn execute(&self, project_id: &ProjectId) -> Result<Project, RepositoryError> {
        self.projects.find_by_id(project_id).await
    }
}
