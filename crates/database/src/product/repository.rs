use crate::{product::model::Product, Database};
use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use std::sync::Arc;
use utils::{AppError, AppResult};

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    // 更新商品价格和规格，返回更新后的文档
    async fn update_price(&self, product_id: &str, new_price: f64, new_quantity: &str) -> AppResult<Option<Product>>;
}

#[async_trait]
impl ProductRepositoryTrait for Database {
    async fn update_price(&self, product_id: &str, new_price: f64, new_quantity: &str) -> AppResult<Option<Product>> {
        let oid = ObjectId::parse_str(product_id)
            .map_err(|_| AppError::BadRequest(format!("Invalid product id: {}", product_id)))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let product = self
            .products
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": { "price": new_price, "quantity": new_quantity } },
                options,
            )
            .await?;

        Ok(product)
    }
}
