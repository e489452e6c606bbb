use crate::{user::model::UserAccount, Database};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use std::sync::Arc;
use tracing::info;
use utils::{AppError, AppResult};

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

// 主要用于Service中，表示提供了该Trait功能
#[async_trait]
pub trait UserRepositoryTrait {
    // 按任意身份字段查找账户(username/email/mobile/referral_code/unique_id)
    async fn find_by_field(&self, field: &str, value: &str) -> AppResult<Option<UserAccount>>;

    // 插入新账户，违反唯一索引时返回Conflict(消息中带索引名)
    async fn insert_account(&self, account: UserAccount) -> AppResult<()>;

    // 给推荐人加积分，$inc保证并发推荐下的原子累加
    async fn credit_referral_points(&self, referral_code: &str, amount: i64) -> AppResult<()>;

    // 按unique_id删除账户(仅用于补偿失败的注册)
    async fn delete_by_unique_id(&self, unique_id: &str) -> AppResult<()>;

    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>>;
}

#[async_trait]
impl UserRepositoryTrait for Database {
    async fn find_by_field(&self, field: &str, value: &str) -> AppResult<Option<UserAccount>> {
        let filter = doc! { field: value };
        let account = self.users.find_one(filter, None).await?;

        Ok(account)
    }

    async fn insert_account(&self, account: UserAccount) -> AppResult<()> {
        self.users.insert_one(account, None).await?;

        Ok(())
    }

    async fn credit_referral_points(&self, referral_code: &str, amount: i64) -> AppResult<()> {
        let result = self
            .users
            .update_one(
                doc! { "referral_code": referral_code },
                doc! { "$inc": { "referral_points": amount } },
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Referrer with code {} not found.",
                referral_code
            )));
        }

        Ok(())
    }

    async fn delete_by_unique_id(&self, unique_id: &str) -> AppResult<()> {
        self.users.delete_one(doc! { "unique_id": unique_id }, None).await?;

        Ok(())
    }

    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
        let cursor = self.users.find(None, None).await?;
        let accounts: Vec<UserAccount> = cursor.try_collect().await?;

        Ok(accounts)
    }
}

impl Database {
    /// 用户集合的唯一索引。索引名固定，插入冲突时错误消息会带上索引名，
    /// 上层依赖 `referral_code_1` 识别推荐码碰撞并重试。
    pub(crate) async fn init_user_indexes(&self) -> AppResult<()> {
        let unique_fields = ["username", "email", "mobile", "referral_code", "unique_id"];

        let indexes: Vec<IndexModel> = unique_fields
            .iter()
            .map(|field| {
                IndexModel::builder()
                    .keys(doc! { *field: 1 })
                    .options(
                        IndexOptions::builder()
                            .unique(true)
                            .name(format!("{}_1", field))
                            .build(),
                    )
                    .build()
            })
            .collect();

        self.users.create_indexes(indexes, None).await?;
        info!("🔧 User集合唯一索引初始化完成");

        Ok(())
    }
}
