use async_trait::async_trait;
use database::product::{model::Product, repository::DynProductRepository};
use std::sync::Arc;
use utils::AppResult;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn update_price(&self, product_id: String, new_price: f64, new_quantity: String)
        -> AppResult<Option<Product>>;
}

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn update_price(
        &self,
        product_id: String,
        new_price: f64,
        new_quantity: String,
    ) -> AppResult<Option<Product>> {
        let product = self.repository.update_price(&product_id, new_price, &new_quantity).await?;

        Ok(product)
    }
}
