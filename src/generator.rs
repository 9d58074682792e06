//! 安全密码生成模块
//!
//! 根据 [`PasswordPolicy`](crate::policy::PasswordPolicy) 构建可用字符集，
//! 并使用密码学安全的随机源独立均匀地采样每个字符。
//!
//! 注意：独立均匀采样不保证每个启用的类别都在结果中出现，
//! 某个类别以 `(1 - 类别权重)^长度` 的概率缺席，长度越短概率越高。
//! 这是接受的设计而非缺陷，调用方无需补偿。
//!
//! ## 示例
//!
//! ```rust
//! use pwgenrs::generator::SecurePasswordGenerator;
//! use pwgenrs::policy::PasswordPolicy;
//!
//! let policy = PasswordPolicy::new(16, true, true, true, true).unwrap();
//! let generator = SecurePasswordGenerator::new(policy).unwrap();
//!
//! let password = generator.generate();
//! assert_eq!(password.chars().count(), 16);
//! ```

use rand::Rng;

use crate::error::{PolicyError, Result};
use crate::policy::{PasswordPolicy, build_available_characters};

/// 安全密码生成器
///
/// 构造时根据策略构建并缓存字符集；空字符集在构造阶段就以
/// [`PolicyError::EmptyCharacterSet`] 报错，`generate` 本身不会失败。
#[derive(Debug, Clone)]
pub struct SecurePasswordGenerator {
    policy: PasswordPolicy,
    available_characters: Vec<char>,
}

impl SecurePasswordGenerator {
    /// 创建密码生成器
    ///
    /// # Arguments
    ///
    /// * `policy` - 密码策略，所有权转移给生成器
    ///
    /// # Errors
    ///
    /// 策略禁用了全部字符类别时返回 [`PolicyError::EmptyCharacterSet`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwgenrs::generator::SecurePasswordGenerator;
    /// use pwgenrs::policy::PasswordPolicy;
    ///
    /// let generator = SecurePasswordGenerator::new(PasswordPolicy::default()).unwrap();
    ///
    /// // 全部类别关闭的策略无法构造生成器
    /// let empty = PasswordPolicy::new(8, false, false, false, false).unwrap();
    /// assert!(SecurePasswordGenerator::new(empty).is_err());
    /// ```
    pub fn new(policy: PasswordPolicy) -> Result<Self> {
        let available_characters: Vec<char> = build_available_characters(&policy).chars().collect();
        if available_characters.is_empty() {
            return Err(PolicyError::EmptyCharacterSet.into());
        }
        Ok(Self {
            policy,
            available_characters,
        })
    }

    /// 生成一个随机密码
    ///
    /// 使用线程本地的密码学安全随机源，每个字符独立均匀地
    /// 从可用字符集中抽取，密码长度等于策略长度。
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwgenrs::generator::SecurePasswordGenerator;
    /// use pwgenrs::policy::PasswordPolicy;
    ///
    /// let policy = PasswordPolicy::new(12, true, true, true, false).unwrap();
    /// let generator = SecurePasswordGenerator::new(policy).unwrap();
    /// assert_eq!(generator.generate().chars().count(), 12);
    /// ```
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }

    /// 使用显式注入的随机源生成密码
    ///
    /// 随机源作为显式参数传入，不依赖任何进程级单例状态。
    /// `random_range` 本身是拒绝采样的均匀区间抽取，没有取模偏差。
    ///
    /// # Arguments
    ///
    /// * `rng` - 密码学安全的随机源
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut password = String::with_capacity(self.policy.length());
        for _ in 0..self.policy.length() {
            let index = rng.random_range(0..self.available_characters.len());
            password.push(self.available_characters[index]);
        }
        password
    }

    /// 获取生成器使用的策略
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// 获取生成器缓存的可用字符集
    pub fn available_characters(&self) -> &[char] {
        &self.available_characters
    }
}

/// 使用给定策略生成一个随机密码
///
/// 便捷函数，等价于构造一次性的 [`SecurePasswordGenerator`] 并调用 `generate`。
///
/// # Errors
///
/// 策略禁用了全部字符类别时返回 [`PolicyError::EmptyCharacterSet`]
///
/// # Example
///
/// ```rust
/// use pwgenrs::generator::generate_password;
/// use pwgenrs::policy::PasswordPolicy;
///
/// let password = generate_password(PasswordPolicy::default()).unwrap();
/// assert_eq!(password.chars().count(), 12);
/// ```
pub fn generate_password(policy: PasswordPolicy) -> Result<String> {
    Ok(SecurePasswordGenerator::new(policy)?.generate())
}
