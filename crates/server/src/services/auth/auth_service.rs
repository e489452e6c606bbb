use super::{error::AuthError, referral, validation, RewardPolicy};
use crate::dtos::auth_dto::{LoginDto, RegisterDto};
use async_trait::async_trait;
use chrono::Utc;
use database::user::{model::UserAccount, repository::DynUserRepository};
use std::sync::Arc;
use tracing::{info, warn};
use utils::{hash_password, verify_password, AppError};
use uuid::Uuid;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

/// 推荐码碰撞时的换码重试上限
const CODE_RETRY_LIMIT: usize = 5;

#[async_trait]
pub trait AuthServiceTrait {
    /// 注册新账户。校验输入、结算推荐奖励并落库。
    async fn register(&self, req: RegisterDto) -> Result<UserAccount, AuthError>;

    /// 按邮箱+密码登录，返回账户记录
    async fn login(&self, req: LoginDto) -> Result<UserAccount, AuthError>;

    async fn get_user_details(&self, username: String) -> Result<UserAccount, AuthError>;

    async fn list_users(&self) -> Result<Vec<UserAccount>, AuthError>;
}

#[derive(Clone)]
pub struct AuthService {
    repository: DynUserRepository,
    policy: RewardPolicy,
}

impl AuthService {
    pub fn new(repository: DynUserRepository, policy: RewardPolicy) -> Self {
        Self { repository, policy }
    }

    /// 校验注册输入。顺序与线上行为保持一致:
    /// 名称/手机号格式 -> 手机号/邮箱查重 -> 邮箱域名 -> 密码强度。
    async fn validate_registration(&self, req: &RegisterDto) -> Result<(), AuthError> {
        validation::validate_name(&req.username)?;
        validation::validate_mobile(&req.mobile)?;

        if self.repository.find_by_field("mobile", &req.mobile).await?.is_some() {
            return Err(AuthError::DuplicateMobile);
        }
        if self.repository.find_by_field("email", &req.email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        validation::validate_email_domain(&req.email)?;
        validation::validate_password(&req.password)?;

        Ok(())
    }

    /// 插入新账户。推荐码碰撞(唯一索引referral_code_1冲突)时换码重试，
    /// 其他唯一索引冲突原样上抛。
    async fn insert_with_fresh_code(
        &self,
        req: &RegisterDto,
        password_hash: String,
        starting_points: i64,
    ) -> Result<UserAccount, AuthError> {
        let unique_id = Uuid::new_v4().to_string();

        for attempt in 1..=CODE_RETRY_LIMIT {
            let referral_code = referral::generate_referral_code();
            let account = UserAccount {
                id: None,
                username: req.username.clone(),
                email: req.email.clone(),
                mobile: req.mobile.clone(),
                password_hash: password_hash.clone(),
                referral_code: referral_code.clone(),
                referred_by: req.referralcode.clone(),
                referral_points: starting_points,
                referral_link: referral::build_referral_link(&self.policy.referral_link_base, &referral_code),
                unique_id: unique_id.clone(),
                timestamp: Utc::now().timestamp() as u64,
            };

            match self.repository.insert_account(account.clone()).await {
                Ok(()) => return Ok(account),
                Err(AppError::Conflict(message)) if message.contains("referral_code") => {
                    warn!(
                        "⚠️ referral code {} collided, regenerating ({}/{})",
                        referral_code, attempt, CODE_RETRY_LIMIT
                    );
                    continue;
                }
                Err(err) => return Err(AuthError::Store(err)),
            }
        }

        Err(AuthError::Store(AppError::Conflict(
            "Could not allocate a unique referral code.".to_string(),
        )))
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, req: RegisterDto) -> Result<UserAccount, AuthError> {
        self.validate_registration(&req).await?;

        // 推荐码在任何写入之前解析，无效则整个注册失败
        let referrer = match req.referralcode.as_deref().filter(|code| !code.is_empty()) {
            Some(code) => Some(
                self.repository
                    .find_by_field("referral_code", code)
                    .await?
                    .ok_or(AuthError::InvalidReferralCode)?,
            ),
            None => None,
        };

        let password_hash = hash_password(&req.password)?;
        let starting_points = if referrer.is_some() {
            self.policy.referee_bonus_points
        } else {
            0
        };

        // 先建号后发奖: 给推荐人加分失败时删除刚建的账户，
        // 保证不会出现"注册没完成但推荐人已拿到积分"的状态。
        let account = self.insert_with_fresh_code(&req, password_hash, starting_points).await?;

        if let Some(referrer) = &referrer {
            if let Err(err) = self
                .repository
                .credit_referral_points(&referrer.referral_code, self.policy.referrer_reward_points)
                .await
            {
                warn!(
                    "⚠️ crediting referrer {} failed, rolling back account {}",
                    referrer.username, account.username
                );
                self.repository.delete_by_unique_id(&account.unique_id).await?;
                return Err(AuthError::Store(err));
            }

            info!(
                "🎁 {} earned {} points for referring {}",
                referrer.username, self.policy.referrer_reward_points, account.username
            );
        }

        info!("🧑 user {} registered with code {}", account.username, account.referral_code);
        Ok(account)
    }

    async fn login(&self, req: LoginDto) -> Result<UserAccount, AuthError> {
        // 未注册邮箱和密码错误返回同一个错误，不暴露账户是否存在
        let account = self
            .repository
            .find_by_field("email", &req.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&account.password_hash, &req.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account)
    }

    async fn get_user_details(&self, username: String) -> Result<UserAccount, AuthError> {
        self.repository
            .find_by_field("username", &username)
            .await?
            .ok_or(AuthError::NotFound)
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>, AuthError> {
        let accounts = self.repository.list_accounts().await?;

        Ok(accounts)
    }
}
