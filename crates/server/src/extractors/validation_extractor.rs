use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use utils::AppError;
use validator::Validate;

/// 反序列化并校验请求体。未知字段和缺失字段在这里直接拒绝，
/// 不会进入Service层。
pub struct ValidationExtractor<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidationExtractor<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(ValidationExtractor(value))
    }
}
