//! UseCase: プロジェクト一覧取得処理

use std::sync::Arc;

use crate::domain::{Project, ProjectRepository, RepositoryError, Username};

/// ユーザーがメンバーであるプロジェクトの一覧取得のユースケース
pub struct ListProjectsUseCase {
    /// Repository（データアクセス層の抽象化）
    projects: Arc<dyn ProjectRepository>,
}

impl ListProjectsUseCase {
    /// 新しい ListProjectsUseCase を作成
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// 指定ユーザーがメンバーであるプロジェクトを取得
    pub async fn execute(&self, username: &Username) -> Result<Vec<Project>, RepositoryError> {
        self.projects.find_by_member(username).await
    }
}
