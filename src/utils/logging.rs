//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::AnswerRecord;

/// 初始化日志
///
/// 默认级别 info，可通过 RUST_LOG 覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - GMAT 自适应测验");
    info!("📊 总题数: {}", config.total_questions);
    info!("🤖 模型: {} @ {}", config.llm_model_name, config.llm_api_base_url);
    info!("{}", "=".repeat(60));
}

/// 记录单题作答结果
pub fn log_question_result(number: usize, record: &AnswerRecord) {
    if record.is_correct {
        info!(
            "✅ 第 {} 题答对 ({} 难度)，+{} 分",
            number, record.difficulty, record.points
        );
    } else {
        info!(
            "❌ 第 {} 题答错 ({} 难度)，正确答案是 {}",
            number, record.difficulty, record.correct
        );
    }
}

/// 记录测验完成信息
pub fn log_session_complete(score: u32, total: usize, report_file: &str) {
    info!("\n{}", "─".repeat(60));
    info!("🎉 测验完成: 共 {} 题，最终得分 {}", total, score);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("报告已保存至: {}", report_file);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
