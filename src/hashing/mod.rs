//! 密码哈希模块
//!
//! 提供密码摘要的生成与验证，支持三种可互换的算法。
//!
//! ## 支持的算法
//!
//! - **PBKDF2** (推荐): PBKDF2-HMAC-SHA256，带随机盐和可配置迭代次数
//! - **bcrypt**: 经典的密码哈希算法，盐和 cost 自包含在摘要中
//! - **SHA-256**: 单遍摘要，无盐无工作因子，仅用于兼容场景
//!
//! SHA-256 是三者中最弱的选项：没有盐也没有工作因子，
//! 选择它的调用方需自行承担字典攻击和彩虹表攻击的风险。
//!
//! ## 示例
//!
//! ### 使用默认引擎
//!
//! ```rust
//! use pwgenrs::hashing::{HashAlgorithm, hash_password, verify_password};
//!
//! let digest = hash_password("my_secure_password", HashAlgorithm::Pbkdf2).unwrap();
//!
//! let is_valid = verify_password("my_secure_password", &digest, HashAlgorithm::Pbkdf2).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ### 使用自定义参数
//!
//! ```rust
//! use pwgenrs::hashing::{HashAlgorithm, HashingEngine};
//!
//! let engine = HashingEngine::default().with_bcrypt_cost(4);
//! let digest = engine.hash("my_password", HashAlgorithm::Bcrypt).unwrap();
//! assert!(engine.verify("my_password", &digest, HashAlgorithm::Bcrypt).unwrap());
//! ```

mod engine;

pub use engine::{
    DEFAULT_PBKDF2_ITERATIONS, HashAlgorithm, HashingEngine, hash_password, verify_password,
};
