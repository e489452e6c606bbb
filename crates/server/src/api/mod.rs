pub mod auth_controller;
pub mod form_controller;
pub mod order_controller;
pub mod product_controller;

use axum::routing::{get, Router};

/// 系统健康检查
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "服务器运行正常", body = String)
    ),
    tag = "系统状态"
)]
pub async fn health() -> &'static str {
    "Server is running! 🚀"
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(health))
        .nest(
            "/auth",
            auth_controller::AuthController::app()
                .merge(order_controller::OrderController::app())
                .merge(product_controller::ProductController::app())
                .merge(form_controller::FormController::app()),
        )
}
