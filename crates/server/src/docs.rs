use crate::dtos::auth_dto::{AuthResponse, LoginDto, RegisterDto, UserInfoDto, UserSummaryDto};
use crate::dtos::form_dto::{FormDataResponse, SubmitFormDto};
use crate::dtos::order_dto::{OrderItemDto, OrderResponse, PlaceOrderDto};
use crate::dtos::product_dto::UpdatePriceDto;
use database::form::model::FormSubmission;
use database::order::model::{Order, OrderItem};
use database::product::model::Product;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health,
        crate::api::auth_controller::register,
        crate::api::auth_controller::login,
    ),
    components(schemas(
        RegisterDto,
        LoginDto,
        AuthResponse,
        UserInfoDto,
        UserSummaryDto,
        PlaceOrderDto,
        OrderItemDto,
        OrderResponse,
        Order,
        OrderItem,
        Product,
        UpdatePriceDto,
        SubmitFormDto,
        FormDataResponse,
        FormSubmission,
    )),
    tags(
        (name = "auth", description = "注册登录与推荐积分"),
        (name = "系统状态", description = "健康检查")
    )
)]
pub struct ApiDoc;
