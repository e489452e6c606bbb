use database::form::model::FormSubmission;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 活动报名表单请求体
#[derive(Clone, Serialize, Deserialize, Debug, Validate, Default, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SubmitFormDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "pincode is required"))]
    pub pincode: String,
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, ToSchema)]
pub struct FormDataResponse {
    #[serde(rename = "formData")]
    pub form_data: Vec<FormSubmission>,
}
