use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 活动报名表单提交记录
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FormSubmission {
    /// MongoDB文档ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub address: String,
    pub pincode: String,
    pub mobile: String,
    /// 提交时间戳
    pub timestamp: u64,
}
