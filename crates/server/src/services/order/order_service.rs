use crate::dtos::order_dto::PlaceOrderDto;
use async_trait::async_trait;
use chrono::Utc;
use database::order::{
    model::{Order, OrderItem},
    repository::DynOrderRepository,
};
use std::sync::Arc;
use utils::AppResult;

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn place_order(&self, req: PlaceOrderDto) -> AppResult<Order>;
    async fn list_orders(&self) -> AppResult<Vec<Order>>;
}

#[derive(Clone)]
pub struct OrderService {
    repository: DynOrderRepository,
}

impl OrderService {
    pub fn new(repository: DynOrderRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn place_order(&self, req: PlaceOrderDto) -> AppResult<Order> {
        let order = Order {
            id: None,
            name: req.name,
            address: req.address,
            pincode: req.pincode,
            mobile: req.mobile,
            items: req
                .items
                .into_iter()
                .map(|item| OrderItem {
                    name: item.name,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            total: req.total,
            timestamp: Utc::now().timestamp() as u64,
        };

        let order = self.repository.create_order(order).await?;

        Ok(order)
    }

    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let orders = self.repository.list_orders().await?;

        Ok(orders)
    }
}
