//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::workflow::ConvertReport;

/// 初始化日志订阅器
///
/// 设置了 `RUST_LOG` 时以其为准，否则按 `verbose` 选择 debug 或 info 级别。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题库转换开始: {}", config.title);
    info!("📄 输入文件: {}", config.input_file.display());
    info!("💾 输出文件: {}", config.output_path().display());
    info!("{}", "=".repeat(60));
}

/// 记录题块匹配结果
pub fn log_blocks_found(count: usize) {
    if count == 0 {
        warn!("⚠️ 没有找到任何符合格式的题块");
    } else {
        info!("✓ 找到 {} 个候选题块", count);
    }
}

/// 打印最终统计信息
pub fn log_final_stats(report: &ConvertReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 转换完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目: {}", report.question_count);
    info!("📚 章节: {}", report.chapter_count);
    if !report.invalid_answers.is_empty() {
        warn!(
            "⚠️ 占位答案: {} 道 (题号 {:?})",
            report.invalid_answers.len(),
            report.invalid_answers
        );
    }
    info!("{}", "=".repeat(60));
    info!("已保存至: {}", report.output_path.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("一二三四五六", 3), "一二三...");
    }
}
