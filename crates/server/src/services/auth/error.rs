use thiserror::Error;
use utils::AppError;

/// 注册/登录流程的业务错误。校验失败与推荐码查找失败都在本层恢复，
/// 转换成客户端可读的4xx响应；存储错误透传为5xx。
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid name: only letters are allowed.")]
    InvalidName,

    #[error("Invalid mobile number: must be exactly 10 digits.")]
    InvalidMobile,

    #[error("Mobile number is already registered.")]
    DuplicateMobile,

    #[error("Email is already registered.")]
    DuplicateEmail,

    #[error("Invalid email domain: only gmail.com addresses are accepted.")]
    InvalidEmailDomain,

    /// 密码不满足强度要求，携带所有未满足的子规则
    #[error("Weak password: {}.", .0.join(", "))]
    WeakPassword(Vec<String>),

    #[error("Invalid referral code.")]
    InvalidReferralCode,

    #[error("User not found.")]
    NotFound,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidName
            | AuthError::InvalidMobile
            | AuthError::DuplicateMobile
            | AuthError::DuplicateEmail
            | AuthError::InvalidEmailDomain
            | AuthError::WeakPassword(_)
            | AuthError::InvalidReferralCode => AppError::BadRequest(err.to_string()),
            AuthError::NotFound => AppError::NotFound(err.to_string()),
            AuthError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            AuthError::Store(inner) => inner,
        }
    }
}
