use crate::{
    dtos::auth_dto::{AuthResponse, LoginDto, RegisterDto, UserInfoDto, UserSummaryDto},
    extractors::validation_extractor::ValidationExtractor,
    services::Services,
};
use axum::{
    extract::Path,
    routing::{get, post},
    Extension, Json, Router,
};
use utils::AppResult;

/// 注册新用户(可携带他人推荐码)
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterDto,
    responses(
        (status = 200, description = "注册成功，返回账户公开信息", body = AuthResponse),
        (status = 400, description = "校验失败或推荐码无效"),
        (status = 409, description = "唯一字段写入冲突(并发注册竞争)")
    )
)]
pub async fn register(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<RegisterDto>,
) -> AppResult<Json<AuthResponse>> {
    let account = services.auth.register(req).await?;

    Ok(Json(AuthResponse {
        message: "User registered successfully.".to_string(),
        user_info: UserInfoDto::from(&account),
    }))
}

/// 邮箱密码登录
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginDto,
    responses(
        (status = 200, description = "登录成功", body = AuthResponse),
        (status = 401, description = "邮箱或密码错误")
    )
)]
pub async fn login(
    Extension(services): Extension<Services>,
    ValidationExtractor(req): ValidationExtractor<LoginDto>,
) -> AppResult<Json<AuthResponse>> {
    let account = services.auth.login(req).await?;

    Ok(Json(AuthResponse {
        message: format!("Welcome to this page, {}", account.username),
        user_info: UserInfoDto::from(&account),
    }))
}

pub async fn user_details(
    Extension(services): Extension<Services>,
    Path(username): Path<String>,
) -> AppResult<Json<AuthResponse>> {
    let account = services.auth.get_user_details(username).await?;

    Ok(Json(AuthResponse {
        message: "User details retrieved successfully.".to_string(),
        user_info: UserInfoDto::from(&account),
    }))
}

pub async fn list_users(Extension(services): Extension<Services>) -> AppResult<Json<Vec<UserSummaryDto>>> {
    let accounts = services.auth.list_users().await?;
    let summaries = accounts.iter().map(UserSummaryDto::from).collect();

    Ok(Json(summaries))
}

pub struct AuthController;
impl AuthController {
    pub fn app() -> Router {
        Router::new()
            .route("/register", post(register))
            .route("/login", post(login))
            .route("/user/details/:username", get(user_details))
            .route("/users", get(list_users))
    }
}
