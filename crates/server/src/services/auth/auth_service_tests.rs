use super::auth_service::{AuthService, AuthServiceTrait};
use super::error::AuthError;
use super::RewardPolicy;
use crate::dtos::auth_dto::{LoginDto, RegisterDto};
use async_trait::async_trait;
use database::user::{model::UserAccount, repository::UserRepositoryTrait};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};
use utils::{AppError, AppResult};

/// 内存版用户仓库，模拟User集合的唯一索引行为
#[derive(Default)]
struct InMemoryUserRepository {
    accounts: Mutex<Vec<UserAccount>>,
    // 接下来N次插入强制报推荐码唯一索引冲突
    referral_code_conflicts: AtomicUsize,
    fail_credit: AtomicBool,
}

impl InMemoryUserRepository {
    fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
            ..Default::default()
        }
    }

    fn account(&self, username: &str) -> Option<UserAccount> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn find_by_field(&self, field: &str, value: &str) -> AppResult<Option<UserAccount>> {
        let accounts = self.accounts.lock().unwrap();
        let found = accounts
            .iter()
            .find(|a| match field {
                "username" => a.username == value,
                "email" => a.email == value,
                "mobile" => a.mobile == value,
                "referral_code" => a.referral_code == value,
                "unique_id" => a.unique_id == value,
                _ => false,
            })
            .cloned();

        Ok(found)
    }

    async fn insert_account(&self, account: UserAccount) -> AppResult<()> {
        if self.referral_code_conflicts.load(Ordering::SeqCst) > 0 {
            self.referral_code_conflicts.fetch_sub(1, Ordering::SeqCst);
            return Err(AppError::Conflict(
                "E11000 duplicate key error collection: test.User index: referral_code_1".to_string(),
            ));
        }

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.referral_code == account.referral_code) {
            return Err(AppError::Conflict(
                "E11000 duplicate key error collection: test.User index: referral_code_1".to_string(),
            ));
        }
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(AppError::Conflict(
                "E11000 duplicate key error collection: test.User index: username_1".to_string(),
            ));
        }

        accounts.push(account);
        Ok(())
    }

    async fn credit_referral_points(&self, referral_code: &str, amount: i64) -> AppResult<()> {
        if self.fail_credit.load(Ordering::SeqCst) {
            return Err(AppError::InternalServerErrorWithContext(
                "simulated write failure".to_string(),
            ));
        }

        let mut accounts = self.accounts.lock().unwrap();
        let referrer = accounts
            .iter_mut()
            .find(|a| a.referral_code == referral_code)
            .ok_or_else(|| AppError::NotFound(format!("Referrer with code {} not found.", referral_code)))?;
        referrer.referral_points += amount;

        Ok(())
    }

    async fn delete_by_unique_id(&self, unique_id: &str) -> AppResult<()> {
        self.accounts.lock().unwrap().retain(|a| a.unique_id != unique_id);

        Ok(())
    }

    async fn list_accounts(&self) -> AppResult<Vec<UserAccount>> {
        Ok(self.accounts.lock().unwrap().clone())
    }
}

fn service_with(repository: Arc<InMemoryUserRepository>) -> AuthService {
    AuthService::new(repository, RewardPolicy::default())
}

fn register_dto(username: &str, mobile: &str, email: &str, password: &str, code: Option<&str>) -> RegisterDto {
    RegisterDto {
        username: username.to_string(),
        email: email.to_string(),
        mobile: mobile.to_string(),
        password: password.to_string(),
        referralcode: code.map(|c| c.to_string()),
    }
}

#[tokio::test]
async fn test_register_without_referral_code() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = service_with(repo.clone());

    let account = service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();

    assert_eq!(account.referral_points, 0);
    assert_eq!(account.referral_code.len(), 6);
    assert!(account
        .referral_code
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    assert_eq!(
        account.referral_link,
        format!("https://pureghee.org.in/register?referralcode={}", account.referral_code)
    );
    assert!(!account.unique_id.is_empty());
    // 存的是可校验的哈希，不是明文
    assert_ne!(account.password_hash, "Abc123");
    assert!(utils::verify_password(&account.password_hash, "Abc123").unwrap());
    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn test_register_with_referral_code_credits_referrer_exactly_once() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = service_with(repo.clone());

    let alice = service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();
    let carol = service
        .register(register_dto("carol", "9876543212", "carol@gmail.com", "Cde345", None))
        .await
        .unwrap();

    service
        .register(register_dto(
            "bob",
            "9876543211",
            "bob@gmail.com",
            "Bcd234",
            Some(&alice.referral_code),
        ))
        .await
        .unwrap();

    assert_eq!(repo.account("alice").unwrap().referral_points, 200);
    // 其他账户余额不受影响
    assert_eq!(repo.account("carol").unwrap().referral_points, carol.referral_points);
    // 默认策略下被推荐人不拿积分
    assert_eq!(repo.account("bob").unwrap().referral_points, 0);
}

#[tokio::test]
async fn test_referee_bonus_is_policy_driven() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let policy = RewardPolicy {
        referee_bonus_points: 50,
        ..RewardPolicy::default()
    };
    let service = AuthService::new(repo.clone(), policy);

    let alice = service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();
    let bob = service
        .register(register_dto(
            "bob",
            "9876543211",
            "bob@gmail.com",
            "Bcd234",
            Some(&alice.referral_code),
        ))
        .await
        .unwrap();

    assert_eq!(bob.referral_points, 50);
    assert_eq!(repo.account("alice").unwrap().referral_points, 200);
}

#[tokio::test]
async fn test_register_with_unknown_referral_code_creates_nothing() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = service_with(repo.clone());

    let alice = service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();

    let err = service
        .register(register_dto(
            "bob",
            "9876543211",
            "bob@gmail.com",
            "Bcd234",
            Some("ZZZZZZ"),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidReferralCode));
    // 失败的注册不留下任何痕迹: 没有新账户，也没有积分变动
    assert_eq!(repo.count(), 1);
    assert_eq!(repo.account("alice").unwrap().referral_points, alice.referral_points);
}

#[tokio::test]
async fn test_validation_order_and_rejections() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = service_with(repo.clone());

    service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();

    let err = service
        .register(register_dto("bob42", "9876543211", "bob@gmail.com", "Bcd234", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidName));

    let err = service
        .register(register_dto("bob", "98765", "bob@gmail.com", "Bcd234", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidMobile));

    let err = service
        .register(register_dto("bob", "9876543210", "bob@gmail.com", "Bcd234", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::DuplicateMobile));

    let err = service
        .register(register_dto("bob", "9876543211", "alice@gmail.com", "Bcd234", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::DuplicateEmail));

    let err = service
        .register(register_dto("bob", "9876543211", "alice@yahoo.com", "Bcd234", None))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidEmailDomain));

    let err = service
        .register(register_dto("bob", "9876543211", "bob@gmail.com", "weak", None))
        .await
        .unwrap_err();
    match err {
        AuthError::WeakPassword(violations) => {
            assert!(violations.iter().any(|v| v.contains("between 6 and 100")));
            assert!(violations.iter().any(|v| v.contains("at least one digit")));
            assert!(violations.iter().any(|v| v.contains("at least one uppercase")));
        }
        other => panic!("expected WeakPassword, got {:?}", other),
    }

    assert_eq!(repo.count(), 1);
}

#[tokio::test]
async fn test_referral_code_collision_triggers_regeneration() {
    let repo = Arc::new(InMemoryUserRepository::default());
    repo.referral_code_conflicts.store(2, Ordering::SeqCst);
    let service = service_with(repo.clone());

    let account = service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();

    assert_eq!(account.referral_code.len(), 6);
    assert_eq!(repo.count(), 1);
    assert_eq!(repo.referral_code_conflicts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_referral_code_collision_retries_are_bounded() {
    let repo = Arc::new(InMemoryUserRepository::default());
    repo.referral_code_conflicts.store(10, Ordering::SeqCst);
    let service = service_with(repo.clone());

    let err = service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Store(AppError::Conflict(_))));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn test_failed_credit_rolls_back_new_account() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = service_with(repo.clone());

    let alice = service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();

    repo.fail_credit.store(true, Ordering::SeqCst);

    let err = service
        .register(register_dto(
            "bob",
            "9876543211",
            "bob@gmail.com",
            "Bcd234",
            Some(&alice.referral_code),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Store(_)));
    // 补偿删除: bob不存在，alice积分也没变
    assert!(repo.account("bob").is_none());
    assert_eq!(repo.account("alice").unwrap().referral_points, 0);
}

#[tokio::test]
async fn test_login_verifies_hashed_password() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = service_with(repo.clone());

    service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();

    let account = service
        .login(LoginDto {
            email: "alice@gmail.com".to_string(),
            password: "Abc123".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(account.username, "alice");

    let err = service
        .login(LoginDto {
            email: "alice@gmail.com".to_string(),
            password: "Abc124".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    let err = service
        .login(LoginDto {
            email: "nobody@gmail.com".to_string(),
            password: "Abc123".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_email_is_indistinguishable_from_bad_password() {
    use axum::response::IntoResponse;

    let repo = Arc::new(InMemoryUserRepository::default());
    let service = service_with(repo.clone());

    service
        .register(register_dto("alice", "9876543210", "alice@gmail.com", "Abc123", None))
        .await
        .unwrap();

    let unknown_email = service
        .login(LoginDto {
            email: "nobody@gmail.com".to_string(),
            password: "Abc123".to_string(),
        })
        .await
        .unwrap_err();
    let bad_password = service
        .login(LoginDto {
            email: "alice@gmail.com".to_string(),
            password: "Wrong99".to_string(),
        })
        .await
        .unwrap_err();

    // 两种失败返回同一个消息和状态码，不能用来探测账户是否存在
    assert_eq!(unknown_email.to_string(), bad_password.to_string());
    let status = AppError::from(unknown_email).into_response().status();
    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_details_and_listing() {
    let alice = UserAccount {
        id: None,
        username: "alice".to_string(),
        email: "alice@gmail.com".to_string(),
        mobile: "9876543210".to_string(),
        password_hash: "$argon2i$stub".to_string(),
        referral_code: "AB12CD".to_string(),
        referred_by: None,
        referral_points: 400,
        referral_link: "https://pureghee.org.in/register?referralcode=AB12CD".to_string(),
        unique_id: "uid-alice".to_string(),
        timestamp: 0,
    };
    let repo = Arc::new(InMemoryUserRepository::with_accounts(vec![alice]));
    let service = service_with(repo);

    let details = service.get_user_details("alice".to_string()).await.unwrap();
    assert_eq!(details.referral_points, 400);

    let err = service.get_user_details("ghost".to_string()).await.unwrap_err();
    assert!(matches!(err, AuthError::NotFound));

    let all = service.list_users().await.unwrap();
    assert_eq!(all.len(), 1);
}
