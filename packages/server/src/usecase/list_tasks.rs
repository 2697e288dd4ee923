//! UseCase: タスク一覧取得処理
//!
//! ユーザーがメンバーであるプロジェクトから、そのユーザーに割り当て
//! られたタスクを導出します。

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{ProjectId, ProjectRepository, RepositoryError, Username};

/// プロジェクトメンバーシップから導出されるタスク割り当て
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAssignment {
    pub project_id: ProjectId,
    pub project_name: String,
    pub task: String,
    pub deadline: NaiveDate,
}

/// タスク一覧取得のユースケース
pub struct ListTasksUseCase {
    /// Repository（データアクセス層の抽象化）
    projects: Arc<dyn ProjectRepository>,
}

impl ListTasksUseCase {
    /// 新しい ListTasksUseCase を作成
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// 指定ユーザーのタスク一覧を取得
    ///
    /// ユーザーがメンバーであるプロジェクトごとに、そのユーザー名の
    /// メンバーエントリからタスクを集める。
    pub async fn execute(
        &self,
        username: &Username,
    ) -> Result<Vec<TaskAssignment>, RepositoryError> {
        let projects = self.projects.find_by_member(username).await?;
        let tasks = projects
            .into_iter()
            .flat_map(|project| {
                let project_id = project.id.clone();
                let project_name = project.name.clone();
                project
                    .members
                    .into_iter()
                    .filter(|member| &member.name == username)
                    .map(move |member| TaskAssignment {
                        project_id: project_id.clone(),
                        project_name: project_name.clone(),
                        task: member.task,
                        deadline: member.deadline,
                    })
            })
            .collect();
        Ok(tasks)
    }
}
