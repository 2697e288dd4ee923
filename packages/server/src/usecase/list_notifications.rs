//! UseCase: 締め切り通知一覧取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ListNotificationsUseCase::execute() メソッド
//! - 残り日数の計算 `ceil((deadline - now) / 1 day)`
//!
//! ### なぜこのテストが必要か
//! - 残り日数は日付境界の扱いを誤りやすい（当日・翌日・超過）
//! - Clock を注入して決定的にテストできることを保証する
//!
//! ### どのような状況を想定しているか
//! - 締め切りが未来・当日・過去のそれぞれ
//! - ちょうど真夜中の境界

use std::sync::Arc;

use chrono::NaiveDate;

use kakehashi_shared::time::Clock;

use crate::domain::{ProjectId, ProjectRepository, RepositoryError, Username};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// プロジェクトメンバーシップから導出される締め切り通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineNotification {
    pub project_id: ProjectId,
    pub project_name: String,
    pub task: String,
    pub deadline: NaiveDate,
    /// ceil((deadline - now) / 1 day)。締め切り超過は負になる
    pub days_remaining: i64,
}

/// 締め切り通知一覧取得のユースケース
pub struct ListNotificationsUseCase {
    /// Repository（データアクセス層の抽象化）
    projects: Arc<dyn ProjectRepository>,
    /// 現在時刻の供給源（テストでは FixedClock を注入する）
    clock: Arc<dyn Clock>,
}

impl ListNotificationsUseCase {
    /// 新しい ListNotificationsUseCase を作成
    pub fn new(projects: Arc<dyn ProjectRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { projects, clock }
    }

    /// 指定ユーザーの締め切り通知一覧を取得
    pub async fn execute(
        &self,
        username: &Username,
    ) -> Result<Vec<DeadlineNotification>, RepositoryError> {
        let now_millis = self.clock.now_utc_millis();
        let projects = self.projects.find_by_member(username).await?;
        let notifications = projects
            .into_iter()
            .flat_map(|project| {
                let project_id = project.id.clone();
                let project_name = project.name.clone();
                project
                    .members
                    .into_iter()
                    .filter(|member| &member.name == username)
                    .map(move |member| DeadlineNotification {
                        project_id: project_id.clone(),
                        project_name: project_name.clone(),
                        task: member.task,
                        deadline: member.deadline,
                        days_remaining: days_remaining(member.deadline, now_millis),
                    })
            })
            .collect();
        Ok(notifications)
    }
}

/// 締め切りまでの残り日数を `ceil((deadline - now) / 1 day)` で計算する
///
/// 締め切りは UTC の真夜中として解釈する。
fn days_remaining(deadline: NaiveDate, now_millis: i64) -> i64 {
    let deadline_millis = deadline
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis();
    let diff = deadline_millis - now_millis;
    (diff + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY)
}
