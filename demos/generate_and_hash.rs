//! 密码生成与哈希示例
//!
//! 展示从策略到密码、再到摘要和验证的完整流程。
//!
//! 运行: cargo run --example generate_and_hash

use pwgenrs::{HashAlgorithm, HashingEngine, PasswordPolicy, SecurePasswordGenerator};

fn main() {
    println!("=== pwgenrs 密码生成与哈希示例 ===\n");

    // 1. 定义密码策略：12 位，包含全部四种字符类别
    let policy = match PasswordPolicy::new(12, true, true, true, true) {
        Ok(p) => p,
        Err(e) => {
            println!("❌ 策略非法: {}", e);
            return;
        }
    };
    println!("📋 密码策略: 长度 {}, 全部字符类别启用\n", policy.length());

    // 2. 生成密码
    let generator = match SecurePasswordGenerator::new(policy) {
        Ok(g) => g,
        Err(e) => {
            println!("❌ 生成器构造失败: {}", e);
            return;
        }
    };
    let password = generator.generate();
    println!("🔑 生成的密码: {}\n", password);

    // 3. 用三种算法分别哈希并验证
    let engine = HashingEngine::default();
    let username = "alice";

    for algorithm in [
        HashAlgorithm::Pbkdf2,
        HashAlgorithm::Bcrypt,
        HashAlgorithm::Sha256,
    ] {
        let digest = match engine.hash(&password, algorithm) {
            Ok(d) => d,
            Err(e) => {
                println!("❌ {} 哈希失败: {}", algorithm, e);
                continue;
            }
        };
        println!("🔒 {} 摘要: {}", algorithm, digest);

        // 持久化记录为 (username, digest, algorithm_tag)，
        // 验证时用标签恢复算法
        let tag = algorithm.as_str();
        let recovered: HashAlgorithm = tag.parse().expect("tag comes from a known algorithm");

        match engine.verify(&password, &digest, recovered) {
            Ok(true) => println!("   ✅ 验证通过: 用户 {}, 算法 {}\n", username, tag),
            Ok(false) => println!("   ❌ 验证失败：密码不匹配\n"),
            Err(e) => println!("   ❌ 验证出错: {}\n", e),
        }
    }

    // 4. 错误的密码无法通过验证
    let digest = engine
        .hash(&password, HashAlgorithm::Pbkdf2)
        .expect("hashing with default parameters");
    match engine.verify("wrong_password", &digest, HashAlgorithm::Pbkdf2) {
        Ok(matched) => println!("🔍 错误密码验证结果: {}", matched),
        Err(e) => println!("🔍 错误密码验证出错: {}", e),
    }

    println!("\n=== 示例结束 ===");
}
