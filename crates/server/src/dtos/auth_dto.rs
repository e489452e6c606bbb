use database::user::model::UserAccount;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 注册请求体。字段名与前端约定一致，未知字段直接拒绝。
#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterDto {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// 他人的推荐码(可选)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referralcode: Option<String>,
}

/// 登录请求体
#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 账户公开信息。永远不包含密码哈希。
#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct UserInfoDto {
    pub username: String,
    pub email: String,
    pub mobile: String,
    #[serde(rename = "referralCode")]
    pub referral_code: String,
    #[serde(rename = "referralPoints")]
    pub referral_points: i64,
    #[serde(rename = "referralLink")]
    pub referral_link: String,
    #[serde(rename = "uniqueID")]
    pub unique_id: String,
}

impl From<&UserAccount> for UserInfoDto {
    fn from(account: &UserAccount) -> Self {
        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            mobile: account.mobile.clone(),
            referral_code: account.referral_code.clone(),
            referral_points: account.referral_points,
            referral_link: account.referral_link.clone(),
            unique_id: account.unique_id.clone(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    #[serde(rename = "userInfo")]
    pub user_info: UserInfoDto,
}

/// 用户列表条目(只暴露用户名和邮箱)
#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct UserSummaryDto {
    pub username: String,
    pub email: String,
}

impl From<&UserAccount> for UserSummaryDto {
    fn from(account: &UserAccount) -> Self {
        Self {
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}
