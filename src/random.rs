//! 安全随机数生成模块
//!
//! 提供密码学安全的随机数生成功能，用于生成盐值等敏感数据，
//! 以及防时序攻击的常量时间比较。

use rand::{TryRngCore, rngs::OsRng};

use crate::error::{CryptoError, Error, Result};

/// PBKDF2 使用的盐长度（字节）
pub const SALT_LENGTH: usize = 16;

/// 生成指定长度的随机字节数组
///
/// 使用操作系统提供的密码学安全随机数生成器 (CSPRNG)
///
/// # Arguments
///
/// * `length` - 要生成的字节数
///
/// # Returns
///
/// 返回包含随机字节的 `Vec<u8>`
///
/// # Example
///
/// ```rust
/// use pwgenrs::random::generate_random_bytes;
///
/// let bytes = generate_random_bytes(32).unwrap();
/// assert_eq!(bytes.len(), 32);
/// ```
pub fn generate_random_bytes(length: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::Crypto(CryptoError::RngFailed(format!("{:?}", e))))?;
    Ok(bytes)
}

/// 生成一个新的随机盐
///
/// 每次哈希调用都必须使用新生成的盐，盐随摘要一起存储。
///
/// # Returns
///
/// 返回 [`SALT_LENGTH`] 字节的随机盐
///
/// # Example
///
/// ```rust
/// use pwgenrs::random::generate_salt;
///
/// let salt = generate_salt().unwrap();
/// assert_eq!(salt.len(), 16);
/// ```
pub fn generate_salt() -> Result<[u8; SALT_LENGTH]> {
    let mut salt = [0u8; SALT_LENGTH];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| Error::Crypto(CryptoError::RngFailed(format!("{:?}", e))))?;
    Ok(salt)
}

/// 常量时间比较两个字节切片
///
/// 用于防止时序攻击：比较耗时不随首个不匹配字节的位置变化。
///
/// # Arguments
///
/// * `a` - 第一个字节切片
/// * `b` - 第二个字节切片
///
/// # Returns
///
/// 如果两个切片相等返回 true
///
/// # Example
///
/// ```rust
/// use pwgenrs::random::constant_time_compare;
///
/// let a = b"derived_key!";
/// let b = b"derived_key!";
/// assert!(constant_time_compare(a, b));
///
/// let c = b"other_key!!!";
/// assert!(!constant_time_compare(a, c));
/// ```
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}

/// 常量时间比较两个字符串
///
/// # Arguments
///
/// * `a` - 第一个字符串
/// * `b` - 第二个字符串
///
/// # Returns
///
/// 如果两个字符串相等返回 true
pub fn constant_time_compare_str(a: &str, b: &str) -> bool {
    constant_time_compare(a.as_bytes(), b.as_bytes())
}
