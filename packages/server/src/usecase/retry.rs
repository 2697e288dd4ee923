//! 競合リトライ実行機
//!
//! 楽観的バージョニングの競合（`RepositoryError::VersionConflict`）に
//! 限って、保存を限定回数リトライします。それ以外の失敗は即座に
//! 伝播します。

use std::future::Future;

use crate::domain::RepositoryError;

/// 保存リトライ回数の既定値
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// 保存操作をバージョン競合時に限りリトライする
///
/// `save_fn` を同じインメモリのエンティティで呼び出し、`VersionConflict`
/// で失敗した場合は最大 `max_retries` 回までリトライする（再読込は
/// 行わない）。リトライ予算を使い切った場合は競合エラーをそのまま
/// 呼び出し元へ返す。他の失敗はリトライせず即座に伝播する。
///
/// 再読込しないため、呼び出し側は再適用しても安全な（冪等な）変異だけを
/// このパスに通すこと。
pub async fn execute_with_retry<T, F, Fut>(
    entity: T,
    save_fn: F,
    max_retries: u32,
) -> Result<T, RepositoryError>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<T, RepositoryError>>,
{
    let mut remaining = max_retries;
    loop {
        match save_fn(entity.clone()).await {
            Ok(saved) => return Ok(saved),
            Err(err @ RepositoryError::VersionConflict { .. }) => {
                if remaining == 0 {
                    return Err(err);
                }
                remaining -= 1;
                tracing::warn!(
                    "Version conflict while saving, retrying ({} attempt(s) left)",
                    remaining
                );
            }
            Err(err) => return Err(err),
        }
    }
}
