//! 统一错误类型模块
//!
//! 提供 pwgenrs 库中所有操作的错误类型定义。

use std::fmt;

/// pwgenrs 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// pwgenrs 库的错误类型
#[derive(Debug)]
pub enum Error {
    /// 密码策略错误
    Policy(PolicyError),

    /// 摘要相关错误
    Digest(DigestError),

    /// 加密原语错误
    Crypto(CryptoError),

    /// 其他错误
    Other(String),
}

impl Error {
    /// 创建一个格式错误的摘要错误
    pub fn malformed_digest(msg: impl Into<String>) -> Self {
        Error::Digest(DigestError::Malformed(msg.into()))
    }
}

/// 密码策略相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// 密码长度必须大于零
    InvalidLength(usize),
    /// 所有字符类别都被禁用，可用字符集为空
    EmptyCharacterSet,
}

/// 摘要相关错误
///
/// 区分"密码错误"（`Ok(false)`）与"存储的摘要本身损坏"（返回错误），
/// 避免把运维问题（盐损坏、截断）隐藏在验证布尔值后面。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// 算法选择器不在支持的枚举范围内
    UnsupportedAlgorithm(String),
    /// 摘要格式与其算法的预期编码不匹配
    Malformed(String),
}

/// 加密原语相关错误
///
/// 底层原语不可用或配置错误，视为不可恢复，不做重试。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// 随机数生成失败
    RngFailed(String),
    /// 哈希原语执行失败
    ProviderFailed(String),
}

// ============================================================================
// Display 实现
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Policy(e) => write!(f, "Policy error: {}", e),
            Error::Digest(e) => write!(f, "Digest error: {}", e),
            Error::Crypto(e) => write!(f, "Crypto error: {}", e),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::InvalidLength(actual) => {
                write!(
                    f,
                    "password length must be greater than zero, got {}",
                    actual
                )
            }
            PolicyError::EmptyCharacterSet => {
                write!(f, "no character set enabled for password generation")
            }
        }
    }
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::UnsupportedAlgorithm(alg) => {
                write!(f, "unsupported hash algorithm: {}", alg)
            }
            DigestError::Malformed(msg) => write!(f, "malformed digest: {}", msg),
        }
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::RngFailed(msg) => write!(f, "random number generation failed: {}", msg),
            CryptoError::ProviderFailed(msg) => write!(f, "hash primitive failed: {}", msg),
        }
    }
}

// ============================================================================
// std::error::Error 实现
// ============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::error::Error for PolicyError {}
impl std::error::Error for DigestError {}
impl std::error::Error for CryptoError {}

// ============================================================================
// From 实现 - 方便错误转换
// ============================================================================

impl From<PolicyError> for Error {
    fn from(err: PolicyError) -> Self {
        Error::Policy(err)
    }
}

impl From<DigestError> for Error {
    fn from(err: DigestError) -> Self {
        Error::Digest(err)
    }
}

impl From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        Error::Crypto(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Policy(PolicyError::EmptyCharacterSet);
        assert_eq!(
            err.to_string(),
            "Policy error: no character set enabled for password generation"
        );
    }

    #[test]
    fn test_error_from_policy() {
        let policy_err = PolicyError::InvalidLength(0);
        let err: Error = policy_err.into();
        assert!(matches!(err, Error::Policy(_)));
    }

    #[test]
    fn test_digest_error_display() {
        let err = DigestError::UnsupportedAlgorithm("MD5".to_string());
        assert_eq!(err.to_string(), "unsupported hash algorithm: MD5");
    }

    #[test]
    fn test_malformed_digest_constructor() {
        let err = Error::malformed_digest("missing separator");
        assert!(matches!(err, Error::Digest(DigestError::Malformed(_))));
    }

    #[test]
    fn test_crypto_error_display() {
        let err = CryptoError::RngFailed("os entropy unavailable".to_string());
        assert_eq!(
            err.to_string(),
            "random number generation failed: os entropy unavailable"
        );
    }
}
