use crate::{
    dtos::product_dto::UpdatePriceDto, extractors::validation_extractor::ValidationExtractor, services::Services,
};
use axum::{routing::post, Extension, Json, Router};
use utils::{AppError, AppResult};

pub async fn update_price(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<UpdatePriceDto>,
) -> AppResult<Json<String>> {
    match services
        .product
        .update_price(req.product_id, req.new_price, req.new_quantity)
        .await?
    {
        Some(_) => Ok(Json("Price and quantity updated successfully.".to_string())),
        None => Err(AppError::NotFound("Product not found.".to_string())),
    }
}

pub struct ProductController;
impl ProductController {
    pub fn app() -> Router {
        Router::new().route("/updatePrice", post(update_price))
    }
}
