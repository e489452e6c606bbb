use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 商品模型
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// MongoDB文档ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: f64,
    /// 规格，如"500g"、"1kg"
    pub quantity: String,
}
