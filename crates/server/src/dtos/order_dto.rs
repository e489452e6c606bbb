use database::order::model::Order;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct OrderItemDto {
    #[validate(length(min = 1, message = "item name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "item quantity is required"))]
    pub quantity: String,
    #[validate(range(min = 0.0, message = "item price cannot be negative"))]
    pub price: f64,
}

/// 下单请求体(显式schema，替代源站的自由格式订单)
#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PlaceOrderDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "pincode is required"))]
    pub pincode: String,
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "order must contain at least one item"))]
    #[validate]
    pub items: Vec<OrderItemDto>,
    #[validate(range(min = 0.0, message = "total cannot be negative"))]
    pub total: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct OrderResponse {
    pub message: String,
    pub order: Order,
}
