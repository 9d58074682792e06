//! # pwgenrs
//!
//! 安全的随机密码生成与多算法密码哈希库。
//!
//! ## 功能特性
//!
//! - **密码策略**: 声明式地配置密码长度和字符类别（大小写字母、数字、特殊字符）
//! - **安全密码生成**: 使用密码学安全的随机源对字符集做独立均匀采样
//! - **多算法哈希**: 支持 PBKDF2-HMAC-SHA256、bcrypt 和 SHA-256 三种可互换的算法
//! - **密码验证**: 根据算法标签重新计算并以常量时间比较摘要
//! - **安全随机数**: 密码学安全的随机字节与盐值生成
//!
//! ## 密码生成示例
//!
//! ```rust
//! use pwgenrs::{PasswordPolicy, SecurePasswordGenerator};
//!
//! // 16 位，包含全部四种字符类别
//! let policy = PasswordPolicy::new(16, true, true, true, true).unwrap();
//! let generator = SecurePasswordGenerator::new(policy).unwrap();
//!
//! let password = generator.generate();
//! assert_eq!(password.chars().count(), 16);
//! ```
//!
//! ## 密码哈希示例
//!
//! ```rust
//! use pwgenrs::{HashAlgorithm, hash_password, verify_password};
//!
//! // 哈希密码
//! let digest = hash_password("my_secure_password", HashAlgorithm::Pbkdf2).unwrap();
//!
//! // 验证密码
//! let is_valid = verify_password("my_secure_password", &digest, HashAlgorithm::Pbkdf2).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## 端到端示例
//!
//! ```rust
//! use pwgenrs::{
//!     HashAlgorithm, HashingEngine, PasswordPolicy, SecurePasswordGenerator,
//! };
//!
//! let policy = PasswordPolicy::default();
//! let generator = SecurePasswordGenerator::new(policy).unwrap();
//! let password = generator.generate();
//!
//! let engine = HashingEngine::default();
//! let digest = engine.hash(&password, HashAlgorithm::Pbkdf2).unwrap();
//!
//! // 存储 (username, digest, algorithm.as_str()) 后，
//! // 验证时用标签恢复算法再调用 verify
//! let algorithm: HashAlgorithm = "PBKDF2".parse().unwrap();
//! assert!(engine.verify(&password, &digest, algorithm).unwrap());
//! ```

pub mod error;
pub mod generator;
pub mod hashing;
pub mod policy;
pub mod random;

pub use error::{CryptoError, DigestError, Error, PolicyError, Result};

// ============================================================================
// 密码策略与生成相关导出
// ============================================================================

pub use generator::{SecurePasswordGenerator, generate_password};
pub use policy::{PasswordPolicy, build_available_characters};

// ============================================================================
// 哈希相关导出
// ============================================================================

pub use hashing::{
    DEFAULT_PBKDF2_ITERATIONS, HashAlgorithm, HashingEngine, hash_password, verify_password,
};

// ============================================================================
// 随机数生成函数导出
// ============================================================================

pub use random::{
    constant_time_compare, constant_time_compare_str, generate_random_bytes, generate_salt,
};
