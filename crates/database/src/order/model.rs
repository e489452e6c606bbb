use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 订单商品行
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItem {
    pub name: String,
    /// 规格，如"500g"、"1kg"
    pub quantity: String,
    pub price: f64,
}

/// 订单模型
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Order {
    /// MongoDB文档ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    /// 收件人姓名
    pub name: String,
    pub address: String,
    pub pincode: String,
    pub mobile: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    /// 下单时间戳
    pub timestamp: u64,
}
