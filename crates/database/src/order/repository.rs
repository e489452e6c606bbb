use crate::{order::model::Order, Database};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use std::sync::Arc;
use utils::AppResult;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    // 保存订单，返回带文档ID的订单
    async fn create_order(&self, order: Order) -> AppResult<Order>;

    async fn list_orders(&self) -> AppResult<Vec<Order>>;
}

#[async_trait]
impl OrderRepositoryTrait for Database {
    async fn create_order(&self, mut order: Order) -> AppResult<Order> {
        let result = self.orders.insert_one(&order, None).await?;
        order.id = result.inserted_id.as_object_id();

        Ok(order)
    }

    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let cursor = self.orders.find(None, None).await?;
        let orders: Vec<Order> = cursor.try_collect().await?;

        Ok(orders)
    }
}
