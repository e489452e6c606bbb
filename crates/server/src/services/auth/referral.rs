use rand::Rng;

/// 推荐码字符集: 36个大写字母和数字
const REFERRAL_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const REFERRAL_CODE_LEN: usize = 6;

/// 生成6位推荐码。不查库去重，碰撞由User集合的唯一索引兜底，
/// 插入冲突时上层会换码重试。
pub fn generate_referral_code() -> String {
    let mut rng = rand::thread_rng();

    (0..REFERRAL_CODE_LEN)
        .map(|_| {
            let index = rng.gen_range(0..REFERRAL_ALPHABET.len());
            REFERRAL_ALPHABET[index] as char
        })
        .collect()
}

pub fn build_referral_link(base: &str, code: &str) -> String {
    format!("{}?referralcode={}", base, code)
}
