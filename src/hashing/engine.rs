//! 哈希引擎实现
//!
//! 提供多算法密码摘要生成和验证的核心功能。

use std::fmt;
use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, DigestError, Error, Result};
use crate::random::{constant_time_compare, generate_salt};

/// PBKDF2 默认迭代次数
///
/// 哈希和验证共用同一常量，迭代次数不嵌入摘要，
/// 修改后旧摘要将无法通过默认引擎验证。
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 65_536;

/// PBKDF2 派生密钥长度（字节），即 256 位
const PBKDF2_KEY_LENGTH: usize = 32;

/// 支持的哈希算法
///
/// 封闭枚举：既用于选择哈希/验证路径，也作为存储记录的算法标签，
/// 验证时据此选择对应的算法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// PBKDF2-HMAC-SHA256，带随机盐，推荐的默认算法
    Pbkdf2,
    /// bcrypt，盐和 cost 自包含在摘要字符串中
    Bcrypt,
    /// SHA-256 单遍摘要，无盐，最弱的选项
    Sha256,
}

impl HashAlgorithm {
    /// 获取算法的存储标签
    ///
    /// 与 [`FromStr`] 互逆，用于持久化记录的算法字段。
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Pbkdf2 => "PBKDF2",
            HashAlgorithm::Bcrypt => "BCRYPT",
            HashAlgorithm::Sha256 => "SHA256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// 从存储标签解析算法
    ///
    /// # Errors
    ///
    /// 标签不在封闭枚举内时返回 [`DigestError::UnsupportedAlgorithm`]
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PBKDF2" => Ok(HashAlgorithm::Pbkdf2),
            "BCRYPT" => Ok(HashAlgorithm::Bcrypt),
            "SHA256" => Ok(HashAlgorithm::Sha256),
            other => Err(DigestError::UnsupportedAlgorithm(other.to_string()).into()),
        }
    }
}

/// 哈希引擎配置
///
/// 无状态：`hash` 和 `verify` 都是输入加随机源上的纯函数，
/// 多个调用方并发使用同一引擎无需加锁。
#[derive(Debug, Clone)]
pub struct HashingEngine {
    /// PBKDF2 迭代次数
    pbkdf2_iterations: u32,

    /// bcrypt 的 cost 参数 (4-31, 默认 12)
    bcrypt_cost: u32,
}

impl Default for HashingEngine {
    fn default() -> Self {
        Self {
            pbkdf2_iterations: DEFAULT_PBKDF2_ITERATIONS,
            bcrypt_cost: 12,
        }
    }
}

impl HashingEngine {
    /// 创建使用默认参数的哈希引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 PBKDF2 迭代次数
    ///
    /// 验证必须使用与生成摘要时相同的迭代次数。
    ///
    /// # Panics
    ///
    /// 迭代次数为零时 panic
    pub fn with_pbkdf2_iterations(mut self, iterations: u32) -> Self {
        assert!(iterations > 0, "PBKDF2 iterations must be greater than zero");
        self.pbkdf2_iterations = iterations;
        self
    }

    /// 设置 bcrypt 的 cost 参数
    ///
    /// # Arguments
    ///
    /// * `cost` - cost 参数，范围 4-31，默认 12
    ///
    /// # Panics
    ///
    /// 如果 cost 不在 4-31 范围内会 panic
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        assert!(
            (4..=31).contains(&cost),
            "bcrypt cost must be between 4 and 31"
        );
        self.bcrypt_cost = cost;
        self
    }

    /// 获取当前配置的 PBKDF2 迭代次数
    pub fn pbkdf2_iterations(&self) -> u32 {
        self.pbkdf2_iterations
    }

    /// 哈希密码
    ///
    /// # Arguments
    ///
    /// * `password` - 要哈希的明文密码
    /// * `algorithm` - 使用的哈希算法
    ///
    /// # Returns
    ///
    /// 返回编码后的摘要字符串：
    ///
    /// - PBKDF2: `base64(盐):base64(派生密钥)`
    /// - bcrypt: 自描述的 `$2b$...` 字符串
    /// - SHA-256: `base64(摘要)`，无盐
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwgenrs::hashing::{HashAlgorithm, HashingEngine};
    ///
    /// let engine = HashingEngine::default();
    /// let digest = engine.hash("my_password", HashAlgorithm::Pbkdf2).unwrap();
    /// assert_eq!(digest.matches(':').count(), 1);
    /// ```
    pub fn hash(&self, password: &str, algorithm: HashAlgorithm) -> Result<String> {
        match algorithm {
            HashAlgorithm::Pbkdf2 => self.hash_pbkdf2(password),
            HashAlgorithm::Bcrypt => self.hash_bcrypt(password),
            HashAlgorithm::Sha256 => Ok(self.hash_sha256(password)),
        }
    }

    /// 验证密码
    ///
    /// # Arguments
    ///
    /// * `password` - 要验证的明文密码
    /// * `digest` - 存储的摘要字符串
    /// * `algorithm` - 生成摘要时使用的算法
    ///
    /// # Returns
    ///
    /// 密码正确返回 `Ok(true)`，密码错误返回 `Ok(false)`。
    /// 摘要本身损坏（缺少分隔符、非法 base64）返回
    /// [`DigestError::Malformed`] 而不是 `Ok(false)`。
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwgenrs::hashing::{HashAlgorithm, HashingEngine};
    ///
    /// let engine = HashingEngine::default();
    /// let digest = engine.hash("my_password", HashAlgorithm::Sha256).unwrap();
    ///
    /// assert!(engine.verify("my_password", &digest, HashAlgorithm::Sha256).unwrap());
    /// assert!(!engine.verify("wrong_password", &digest, HashAlgorithm::Sha256).unwrap());
    /// ```
    pub fn verify(&self, password: &str, digest: &str, algorithm: HashAlgorithm) -> Result<bool> {
        match algorithm {
            HashAlgorithm::Pbkdf2 => self.verify_pbkdf2(password, digest),
            HashAlgorithm::Bcrypt => self.verify_bcrypt(password, digest),
            HashAlgorithm::Sha256 => self.verify_sha256(password, digest),
        }
    }

    // ========================================================================
    // PBKDF2 实现
    // ========================================================================

    fn derive_pbkdf2_key(&self, password: &str, salt: &[u8]) -> [u8; PBKDF2_KEY_LENGTH] {
        let mut key = [0u8; PBKDF2_KEY_LENGTH];
        pbkdf2::pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            salt,
            self.pbkdf2_iterations,
            &mut key,
        );
        key
    }

    fn hash_pbkdf2(&self, password: &str) -> Result<String> {
        let salt = generate_salt()?;
        let key = self.derive_pbkdf2_key(password, &salt);
        Ok(format!("{}:{}", BASE64.encode(salt), BASE64.encode(key)))
    }

    fn verify_pbkdf2(&self, password: &str, digest: &str) -> Result<bool> {
        let parts: Vec<&str> = digest.split(':').collect();
        if parts.len() != 2 {
            return Err(Error::malformed_digest(format!(
                "PBKDF2 digest must have exactly one ':' separator, found {}",
                digest.matches(':').count()
            )));
        }

        let salt = BASE64
            .decode(parts[0])
            .map_err(|e| Error::malformed_digest(format!("invalid base64 salt: {}", e)))?;
        let stored_key = BASE64
            .decode(parts[1])
            .map_err(|e| Error::malformed_digest(format!("invalid base64 key: {}", e)))?;

        let derived_key = self.derive_pbkdf2_key(password, &salt);
        Ok(constant_time_compare(&stored_key, &derived_key))
    }

    // ========================================================================
    // bcrypt 实现
    // ========================================================================

    fn hash_bcrypt(&self, password: &str) -> Result<String> {
        // bcrypt 自行生成盐并把版本、cost、盐编码进摘要
        bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| Error::Crypto(CryptoError::ProviderFailed(format!("bcrypt: {}", e))))
    }

    fn verify_bcrypt(&self, password: &str, digest: &str) -> Result<bool> {
        bcrypt::verify(password, digest)
            .map_err(|e| Error::malformed_digest(format!("invalid bcrypt digest: {}", e)))
    }

    // ========================================================================
    // SHA-256 实现
    // ========================================================================

    fn hash_sha256(&self, password: &str) -> String {
        BASE64.encode(Sha256::digest(password.as_bytes()))
    }

    fn verify_sha256(&self, password: &str, digest: &str) -> Result<bool> {
        let stored = BASE64
            .decode(digest)
            .map_err(|e| Error::malformed_digest(format!("invalid base64 digest: {}", e)))?;

        let recomputed = Sha256::digest(password.as_bytes());
        Ok(constant_time_compare(&stored, recomputed.as_slice()))
    }
}

// ============================================================================
// 便捷函数
// ============================================================================

/// 使用默认引擎参数哈希密码
///
/// # Arguments
///
/// * `password` - 要哈希的明文密码
/// * `algorithm` - 使用的哈希算法
///
/// # Example
///
/// ```rust
/// use pwgenrs::hashing::{HashAlgorithm, hash_password};
///
/// let digest = hash_password("my_secure_password", HashAlgorithm::Bcrypt).unwrap();
/// assert!(digest.starts_with("$2"));
/// ```
pub fn hash_password(password: &str, algorithm: HashAlgorithm) -> Result<String> {
    HashingEngine::default().hash(password, algorithm)
}

/// 使用默认引擎参数验证密码
///
/// # Arguments
///
/// * `password` - 要验证的明文密码
/// * `digest` - 存储的摘要字符串
/// * `algorithm` - 生成摘要时使用的算法
///
/// # Example
///
/// ```rust
/// use pwgenrs::hashing::{HashAlgorithm, hash_password, verify_password};
///
/// let digest = hash_password("my_secure_password", HashAlgorithm::Pbkdf2).unwrap();
///
/// assert!(verify_password("my_secure_password", &digest, HashAlgorithm::Pbkdf2).unwrap());
/// assert!(!verify_password("wrong_password", &digest, HashAlgorithm::Pbkdf2).unwrap());
/// ```
pub fn verify_password(password: &str, digest: &str, algorithm: HashAlgorithm) -> Result<bool> {
    HashingEngine::default().verify(password, digest, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_engine() -> HashingEngine {
        // 低迭代次数和低 cost 加快测试
        HashingEngine::default()
            .with_pbkdf2_iterations(1_000)
            .with_bcrypt_cost(4)
    }

    #[test]
    fn test_pbkdf2_hash_and_verify() {
        let engine = fast_engine();
        let password = "test_password_123";

        let digest = engine.hash(password, HashAlgorithm::Pbkdf2).unwrap();
        assert_eq!(digest.matches(':').count(), 1);

        assert!(engine.verify(password, &digest, HashAlgorithm::Pbkdf2).unwrap());
        assert!(!engine
            .verify("wrong_password", &digest, HashAlgorithm::Pbkdf2)
            .unwrap());
    }

    #[test]
    fn test_bcrypt_hash_and_verify() {
        let engine = fast_engine();
        let password = "test_password_123";

        let digest = engine.hash(password, HashAlgorithm::Bcrypt).unwrap();
        assert!(digest.starts_with("$2"));

        assert!(engine.verify(password, &digest, HashAlgorithm::Bcrypt).unwrap());
        assert!(!engine
            .verify("wrong_password", &digest, HashAlgorithm::Bcrypt)
            .unwrap());
    }

    #[test]
    fn test_sha256_hash_and_verify() {
        let engine = HashingEngine::default();
        let password = "test_password_123";

        let digest = engine.hash(password, HashAlgorithm::Sha256).unwrap();
        assert!(!digest.contains(':'));
        assert!(BASE64.decode(&digest).is_ok());

        assert!(engine.verify(password, &digest, HashAlgorithm::Sha256).unwrap());
        assert!(!engine
            .verify("wrong_password", &digest, HashAlgorithm::Sha256)
            .unwrap());
    }

    #[test]
    fn test_salted_algorithms_produce_fresh_digests() {
        let engine = fast_engine();
        let password = "same_password";

        // 每次调用生成新盐，摘要必须不同
        assert_ne!(
            engine.hash(password, HashAlgorithm::Pbkdf2).unwrap(),
            engine.hash(password, HashAlgorithm::Pbkdf2).unwrap()
        );
        assert_ne!(
            engine.hash(password, HashAlgorithm::Bcrypt).unwrap(),
            engine.hash(password, HashAlgorithm::Bcrypt).unwrap()
        );
    }

    #[test]
    fn test_sha256_is_deterministic() {
        let engine = HashingEngine::default();
        assert_eq!(
            engine.hash("same_password", HashAlgorithm::Sha256).unwrap(),
            engine.hash("same_password", HashAlgorithm::Sha256).unwrap()
        );
    }

    #[test]
    fn test_pbkdf2_missing_separator_is_malformed() {
        let engine = fast_engine();
        let result = engine.verify("password", "no-separator-here", HashAlgorithm::Pbkdf2);
        assert!(matches!(
            result,
            Err(Error::Digest(DigestError::Malformed(_)))
        ));
    }

    #[test]
    fn test_pbkdf2_extra_separator_is_malformed() {
        let engine = fast_engine();
        let result = engine.verify("password", "a:b:c", HashAlgorithm::Pbkdf2);
        assert!(matches!(
            result,
            Err(Error::Digest(DigestError::Malformed(_)))
        ));
    }

    #[test]
    fn test_pbkdf2_invalid_base64_is_malformed() {
        let engine = fast_engine();
        let result = engine.verify("password", "!!invalid!!:also_invalid", HashAlgorithm::Pbkdf2);
        assert!(matches!(
            result,
            Err(Error::Digest(DigestError::Malformed(_)))
        ));
    }

    #[test]
    fn test_sha256_invalid_base64_is_malformed() {
        let engine = HashingEngine::default();
        let result = engine.verify("password", "not valid base64 !!!", HashAlgorithm::Sha256);
        assert!(matches!(
            result,
            Err(Error::Digest(DigestError::Malformed(_)))
        ));
    }

    #[test]
    fn test_pbkdf2_iterations_must_match() {
        let password = "iteration_sensitive";
        let digest = HashingEngine::default()
            .with_pbkdf2_iterations(1_000)
            .hash(password, HashAlgorithm::Pbkdf2)
            .unwrap();

        // 迭代次数不同的引擎派生的密钥不同
        let other = HashingEngine::default().with_pbkdf2_iterations(2_000);
        assert!(!other.verify(password, &digest, HashAlgorithm::Pbkdf2).unwrap());
    }

    #[test]
    fn test_algorithm_tag_round_trip() {
        for algorithm in [
            HashAlgorithm::Pbkdf2,
            HashAlgorithm::Bcrypt,
            HashAlgorithm::Sha256,
        ] {
            let tag = algorithm.as_str();
            assert_eq!(tag.parse::<HashAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_unknown_algorithm_tag_rejected() {
        let result = "MD5".parse::<HashAlgorithm>();
        assert!(matches!(
            result,
            Err(Error::Digest(DigestError::UnsupportedAlgorithm(_)))
        ));
    }

    #[test]
    fn test_empty_password() {
        let engine = fast_engine();

        // 空密码应该也能正常哈希
        for algorithm in [
            HashAlgorithm::Pbkdf2,
            HashAlgorithm::Bcrypt,
            HashAlgorithm::Sha256,
        ] {
            let digest = engine.hash("", algorithm).unwrap();
            assert!(engine.verify("", &digest, algorithm).unwrap());
            assert!(!engine.verify("not_empty", &digest, algorithm).unwrap());
        }
    }

    #[test]
    fn test_unicode_password() {
        let engine = fast_engine();
        let password = "密码测试🔐émoji";

        for algorithm in [
            HashAlgorithm::Pbkdf2,
            HashAlgorithm::Bcrypt,
            HashAlgorithm::Sha256,
        ] {
            let digest = engine.hash(password, algorithm).unwrap();
            assert!(engine.verify(password, &digest, algorithm).unwrap());
            assert!(!engine.verify("wrong", &digest, algorithm).unwrap());
        }
    }

    #[test]
    #[should_panic(expected = "bcrypt cost must be between 4 and 31")]
    fn test_invalid_bcrypt_cost_low() {
        HashingEngine::default().with_bcrypt_cost(3);
    }

    #[test]
    #[should_panic(expected = "bcrypt cost must be between 4 and 31")]
    fn test_invalid_bcrypt_cost_high() {
        HashingEngine::default().with_bcrypt_cost(32);
    }

    #[test]
    #[should_panic(expected = "PBKDF2 iterations must be greater than zero")]
    fn test_zero_pbkdf2_iterations() {
        HashingEngine::default().with_pbkdf2_iterations(0);
    }

    #[test]
    fn test_convenience_functions() {
        let password = "my_secure_password";

        let digest = hash_password(password, HashAlgorithm::Sha256).unwrap();
        assert!(verify_password(password, &digest, HashAlgorithm::Sha256).unwrap());
        assert!(!verify_password("wrong", &digest, HashAlgorithm::Sha256).unwrap());
    }
}
