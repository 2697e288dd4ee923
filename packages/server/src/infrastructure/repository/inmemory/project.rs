//! InMemory Project Repository 実装
//!
//! ドメイン層が定義する ProjectRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用し、楽観的バージョニングを
//! `save` で強制します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Project, ProjectId, ProjectRepository, RepositoryError, Username};

/// インメモリ Project Repository 実装
///
/// `save` は渡されたエンティティのバージョンがストア上のバージョンと
/// 一致する場合のみ受け付け、インクリメントしたバージョンで保存する。
/// 一致しない場合は `VersionConflict` を返す（書き込み側はリトライで
/// 調停する）。
pub struct InMemoryProjectRepository {
    projects: Mutex<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    /// 新しい InMemoryProjectRepository を作成
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Project, RepositoryError> {
        let projects = self.projects.lock().await;
        projects.get(id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn find_by_member(&self, username: &Username) -> Result<Vec<Project>, RepositoryError> {
        let projects = self.projects.lock().await;
        Ok(projects
            .values()
            .filter(|p| p.has_member(username))
            .cloned()
            .collect())
    }

    async fn save(&self, mut project: Project) -> Result<Project, RepositoryError> {
        let mut projects = self.projects.lock().await;
        if let Some(stored) = projects.get(&project.id) {
            if stored.version != project.version {
                return Err(RepositoryError::VersionConflict {
                    stored: stored.version,
                    given: project.version,
                });
            }
        }
        project.version += 1;
        projects.insert(project.id.clone(), project.clone());
        Ok(project)
    }
}
