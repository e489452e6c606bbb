use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 商品调价请求体
#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdatePriceDto {
    #[validate(length(min = 1, message = "productId is required"))]
    pub product_id: String,
    #[validate(range(min = 0.0, message = "newPrice cannot be negative"))]
    pub new_price: f64,
    #[validate(length(min = 1, message = "newQuantity is required"))]
    pub new_quantity: String,
}
