pub mod auth_service;
pub mod error;
pub mod referral;
pub mod validation;

#[cfg(test)]
mod auth_service_tests;

use utils::AppConfig;

/// 推荐奖励策略。集中配置，避免奖励数值散落在业务分支里。
#[derive(Clone, Debug)]
pub struct RewardPolicy {
    /// 推荐人获得的积分
    pub referrer_reward_points: i64,
    /// 使用推荐码注册的新用户获得的积分
    pub referee_bonus_points: i64,
    /// 推荐链接的基础URL
    pub referral_link_base: String,
}

impl RewardPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            referrer_reward_points: config.referrer_reward_points,
            referee_bonus_points: config.referee_bonus_points,
            referral_link_base: config.referral_link_base.clone(),
        }
    }
}

#[cfg(test)]
impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            referrer_reward_points: 200,
            referee_bonus_points: 0,
            referral_link_base: "https://pureghee.org.in/register".to_string(),
        }
    }
}
