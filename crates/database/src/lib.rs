////////////////////////////////////////////////////////////////////////
//
// 1. 每个Domain(Entity)单独一个文件夹
// 2. 每个Domain由两部分组成:
//    - model: 定义Schema
//    - repository: 实际的数据库底层操作
//
//////////////////////////////////////////////////////////////////////

use mongodb::{Client, Collection};
use std::sync::Arc;
use tracing::info;
use utils::{AppConfig, AppResult};

pub mod form;
pub mod order;
pub mod product;
pub mod user;

#[derive(Clone, Debug)]
pub struct Database {
    pub users: Collection<user::model::UserAccount>,
    pub orders: Collection<order::model::Order>,
    pub products: Collection<product::model::Product>,
    pub form_submissions: Collection<form::model::FormSubmission>,
}

impl Database {
    pub async fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let db: mongodb::Database = client.database(&config.mongo_db);

        let users = db.collection("User");
        let orders = db.collection("Order");
        let products = db.collection("Product");
        let form_submissions = db.collection("FormData");

        info!("🧱 database({:#}) connected.", &config.mongo_db);

        Ok(Database {
            users,
            orders,
            products,
            form_submissions,
        })
    }

    /// 初始化唯一索引(用户身份字段与推荐码都不允许重复)
    pub async fn init_indexes(&self) -> AppResult<()> {
        self.init_user_indexes().await?;

        info!("✅ 数据库索引初始化完成");
        Ok(())
    }
}
