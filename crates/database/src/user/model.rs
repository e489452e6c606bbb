use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 用户账户模型
///
/// 唯一性约束: username/email/mobile/referral_code/unique_id 均为唯一索引，
/// 由 `Database::init_indexes` 在启动时创建。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserAccount {
    /// MongoDB文档ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    /// 用户名(仅字母)
    pub username: String,
    /// 邮箱(仅支持gmail域)
    pub email: String,
    /// 手机号(10位数字)
    pub mobile: String,
    /// argon2编码的密码哈希，永远不返回给客户端
    pub password_hash: String,
    /// 自己的推荐码，6位[A-Z0-9]，创建后不可变
    pub referral_code: String,
    /// 注册时填写的他人推荐码(注册时校验一次，之后不再校验)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<String>,
    /// 推荐积分，只会通过奖励规则增加
    pub referral_points: i64,
    /// 推荐链接(基础URL + 自己的推荐码)
    pub referral_link: String,
    /// 对外的不透明唯一ID
    pub unique_id: String,
    /// 创建时间戳
    pub timestamp: u64,
}
