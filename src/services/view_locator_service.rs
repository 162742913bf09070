use std::sync::Arc;

use crate::entities::view_record_entity as view_records;
use crate::error::{AppError, AppResult, Code};
use crate::external::{CacheResult, CounterCache};
use crate::models::MsgResponse;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};

/// 访问计数在缓存中的 key
pub fn cache_key(file_path: &str) -> String {
    format!("file_path_{file_path}")
}

/// 校验文件存在且内容为 JSON，记录访问并累加缓存计数。
///
/// 提供两种错误传递方式，行为与结果码一致:
/// - [`ViewLocatorService::locate_file`] 用 `?` 抛出错误，由响应边界统一翻译
/// - [`ViewLocatorService::locate_file_checked`] 每一步就地返回结果码
#[derive(Clone)]
pub struct ViewLocatorService {
    pool: DatabaseConnection,
    cache: Arc<dyn CounterCache>,
}

impl ViewLocatorService {
    pub fn new(pool: DatabaseConnection, cache: Arc<dyn CounterCache>) -> Self {
        Self { pool, cache }
    }

    pub async fn locate_file(&self, file_path: &str) -> AppResult<()> {
        if !Self::file_exists(file_path).await {
            return Err(Code::FileNotFound.into());
        }

        let content = tokio::fs::read(file_path).await?;
        serde_json::from_slice::<serde_json::Value>(&content)?;

        self.record_view(file_path).await?;
        let count = self.bump_counter(file_path).await?;
        log::info!("File located: path={file_path} views={count}");

        Ok(())
    }

    pub async fn locate_file_checked(&self, file_path: &str) -> MsgResponse {
        if !Self::file_exists(file_path).await {
            return Code::FileNotFound.into();
        }

        let content = match tokio::fs::read(file_path).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read {file_path}: {e}");
                return AppError::from(e).translate().into();
            }
        };

        if serde_json::from_slice::<serde_json::Value>(&content).is_err() {
            return Code::FileNotJson.into();
        }

        if let Err(e) = self.record_view(file_path).await {
            log::error!("Failed to record view of {file_path}: {e}");
            return Code::DbError.into();
        }

        match self.bump_counter(file_path).await {
            Ok(count) => {
                log::info!("File located: path={file_path} views={count}");
                Code::Success.into()
            }
            Err(e) => {
                log::error!("Failed to bump view counter of {file_path}: {e}");
                Code::RedisError.into()
            }
        }
    }

    async fn file_exists(file_path: &str) -> bool {
        !file_path.is_empty() && tokio::fs::try_exists(file_path).await.unwrap_or(false)
    }

    async fn record_view(&self, file_path: &str) -> Result<view_records::Model, DbErr> {
        view_records::ActiveModel {
            file_path: Set(file_path.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
    }

    // 不存在时先置 0 再自增
    async fn bump_counter(&self, file_path: &str) -> CacheResult<i64> {
        let key = cache_key(file_path);
        if self.cache.get(&key).await?.is_none() {
            self.cache.set(&key, 0).await?;
        }
        self.cache.incr(&key).await
    }
}
