use crate::{
    dtos::order_dto::{OrderResponse, PlaceOrderDto},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use database::order::model::Order;
use utils::AppResult;

pub async fn place_order(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<PlaceOrderDto>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let order = services.order.place_order(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            message: "Order placed successfully".to_string(),
            order,
        }),
    ))
}

pub async fn list_orders(Extension(services): Extension<Services>) -> AppResult<Json<Vec<Order>>> {
    let orders = services.order.list_orders().await?;

    Ok(Json(orders))
}

pub struct OrderController;
impl OrderController {
    pub fn app() -> Router {
        Router::new()
            .route("/order", post(place_order))
            .route("/orders", get(list_orders))
    }
}
