//! 密码策略模块
//!
//! 定义密码生成策略：期望的密码长度以及允许使用的字符类别。
//! 策略本身不涉及随机性，只负责声明式地描述密码的构成规则，
//! 并据此构建用于采样的字符集。
//!
//! ## 示例
//!
//! ```rust
//! use pwgenrs::policy::{PasswordPolicy, build_available_characters};
//!
//! // 16 位，包含全部四种字符类别
//! let policy = PasswordPolicy::new(16, true, true, true, true).unwrap();
//! let alphabet = build_available_characters(&policy);
//! assert!(alphabet.contains('a') && alphabet.contains('Z') && alphabet.contains('7'));
//!
//! // 长度为 0 的策略无法构造
//! assert!(PasswordPolicy::new(0, true, true, true, true).is_err());
//! ```

use crate::error::{PolicyError, Result};

/// 小写字母字符集
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// 大写字母字符集
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 数字字符集
pub const DIGIT_CHARS: &str = "0123456789";

/// 特殊字符字符集
pub const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>/?";

/// 密码生成策略
///
/// 不变量：`length > 0`。构造和修改长度时都会校验，
/// 非法长度返回 [`PolicyError::InvalidLength`]。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// 密码长度
    length: usize,
    /// 是否包含大写字母
    include_uppercase: bool,
    /// 是否包含小写字母
    include_lowercase: bool,
    /// 是否包含数字
    include_digits: bool,
    /// 是否包含特殊字符
    include_special: bool,
}

impl Default for PasswordPolicy {
    /// 默认策略：12 位，包含大小写字母和数字，不包含特殊字符
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: false,
        }
    }
}

impl PasswordPolicy {
    /// 创建自定义密码策略
    ///
    /// # Arguments
    ///
    /// * `length` - 密码长度，必须大于零
    /// * `include_uppercase` - 是否包含大写字母
    /// * `include_lowercase` - 是否包含小写字母
    /// * `include_digits` - 是否包含数字
    /// * `include_special` - 是否包含特殊字符
    ///
    /// # Errors
    ///
    /// 长度为零时返回 [`PolicyError::InvalidLength`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwgenrs::policy::PasswordPolicy;
    ///
    /// let policy = PasswordPolicy::new(12, true, true, true, false).unwrap();
    /// assert_eq!(policy.length(), 12);
    /// ```
    pub fn new(
        length: usize,
        include_uppercase: bool,
        include_lowercase: bool,
        include_digits: bool,
        include_special: bool,
    ) -> Result<Self> {
        if length == 0 {
            return Err(PolicyError::InvalidLength(length).into());
        }
        Ok(Self {
            length,
            include_uppercase,
            include_lowercase,
            include_digits,
            include_special,
        })
    }

    /// 获取密码长度
    pub fn length(&self) -> usize {
        self.length
    }

    /// 修改密码长度
    ///
    /// # Errors
    ///
    /// 长度为零时返回 [`PolicyError::InvalidLength`]，原值保持不变
    pub fn set_length(&mut self, length: usize) -> Result<()> {
        if length == 0 {
            return Err(PolicyError::InvalidLength(length).into());
        }
        self.length = length;
        Ok(())
    }

    /// 是否包含大写字母
    pub fn include_uppercase(&self) -> bool {
        self.include_uppercase
    }

    /// 设置是否包含大写字母
    pub fn set_include_uppercase(&mut self, include: bool) {
        self.include_uppercase = include;
    }

    /// 是否包含小写字母
    pub fn include_lowercase(&self) -> bool {
        self.include_lowercase
    }

    /// 设置是否包含小写字母
    pub fn set_include_lowercase(&mut self, include: bool) {
        self.include_lowercase = include;
    }

    /// 是否包含数字
    pub fn include_digits(&self) -> bool {
        self.include_digits
    }

    /// 设置是否包含数字
    pub fn set_include_digits(&mut self, include: bool) {
        self.include_digits = include;
    }

    /// 是否包含特殊字符
    pub fn include_special(&self) -> bool {
        self.include_special
    }

    /// 设置是否包含特殊字符
    pub fn set_include_special(&mut self, include: bool) {
        self.include_special = include;
    }
}

/// 根据策略构建可用字符集
///
/// 按固定顺序（小写、大写、数字、特殊字符）拼接所有启用类别的完整字符集，
/// 保证同一策略产出的字符集是确定的。不做去重：四个类别互不重叠。
///
/// 全部类别关闭时返回空字符串，由调用方（生成器）检测并报错。
///
/// # Example
///
/// ```rust
/// use pwgenrs::policy::{PasswordPolicy, build_available_characters};
///
/// let policy = PasswordPolicy::new(8, false, true, false, false).unwrap();
/// assert_eq!(build_available_characters(&policy), "abcdefghijklmnopqrstuvwxyz");
/// ```
pub fn build_available_characters(policy: &PasswordPolicy) -> String {
    let char_sets: [(bool, &str); 4] = [
        (policy.include_lowercase(), LOWERCASE_CHARS),
        (policy.include_uppercase(), UPPERCASE_CHARS),
        (policy.include_digits(), DIGIT_CHARS),
        (policy.include_special(), SPECIAL_CHARS),
    ];

    char_sets
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| *chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_policy() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.length(), 12);
        assert!(policy.include_uppercase());
        assert!(policy.include_lowercase());
        assert!(policy.include_digits());
        assert!(!policy.include_special());
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy::new(20, false, true, false, true).unwrap();
        assert_eq!(policy.length(), 20);
        assert!(!policy.include_uppercase());
        assert!(policy.include_lowercase());
        assert!(!policy.include_digits());
        assert!(policy.include_special());
    }

    #[test]
    fn test_zero_length_rejected() {
        let result = PasswordPolicy::new(0, true, true, true, true);
        assert!(matches!(
            result,
            Err(Error::Policy(PolicyError::InvalidLength(0)))
        ));
    }

    #[test]
    fn test_set_length_validation() {
        let mut policy = PasswordPolicy::default();
        assert!(policy.set_length(32).is_ok());
        assert_eq!(policy.length(), 32);

        // 非法长度不应修改原值
        assert!(policy.set_length(0).is_err());
        assert_eq!(policy.length(), 32);
    }

    #[test]
    fn test_build_all_classes() {
        let policy = PasswordPolicy::new(16, true, true, true, true).unwrap();
        let alphabet = build_available_characters(&policy);

        let expected = format!(
            "{}{}{}{}",
            LOWERCASE_CHARS, UPPERCASE_CHARS, DIGIT_CHARS, SPECIAL_CHARS
        );
        assert_eq!(alphabet, expected);
    }

    #[test]
    fn test_build_preserves_canonical_order() {
        // 小写在大写之前，数字在特殊字符之前
        let policy = PasswordPolicy::new(8, true, true, true, true).unwrap();
        let alphabet = build_available_characters(&policy);
        assert!(alphabet.starts_with(LOWERCASE_CHARS));
        assert!(alphabet.ends_with(SPECIAL_CHARS));
    }

    #[test]
    fn test_build_single_class() {
        let policy = PasswordPolicy::new(8, false, false, true, false).unwrap();
        assert_eq!(build_available_characters(&policy), DIGIT_CHARS);
    }

    #[test]
    fn test_build_empty_when_all_disabled() {
        let policy = PasswordPolicy::new(8, false, false, false, false).unwrap();
        assert!(build_available_characters(&policy).is_empty());
    }

    #[test]
    fn test_character_sets_do_not_overlap() {
        let all = format!(
            "{}{}{}{}",
            LOWERCASE_CHARS, UPPERCASE_CHARS, DIGIT_CHARS, SPECIAL_CHARS
        );
        let unique: std::collections::HashSet<char> = all.chars().collect();
        assert_eq!(unique.len(), all.chars().count());
    }
}
