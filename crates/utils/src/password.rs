use crate::{AppError, AppResult};
use rand::RngCore;

/// 密码加盐哈希(argon2编码串，包含盐和参数)
pub fn hash_password(plaintext: &str) -> AppResult<String> {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);

    argon2::hash_encoded(plaintext.as_bytes(), &salt, &argon2::Config::default())
        .map_err(|e| AppError::InternalServerErrorWithContext(format!("password hashing failed: {}", e)))
}

/// 校验明文密码与存储的编码哈希是否匹配
pub fn verify_password(encoded: &str, plaintext: &str) -> AppResult<bool> {
    argon2::verify_encoded(encoded, plaintext.as_bytes())
        .map_err(|e| AppError::InternalServerErrorWithContext(format!("password verification failed: {}", e)))
}
