//! 出题流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整出题流程
//!
//! 流程顺序：
//! 1. 按当前难度调用 LLM 生成题目原文
//! 2. 解析为结构化题目
//! 3. 解析不合格自动兜底（由解析层保证）

use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Difficulty, Question};
use crate::services::{question_parser, LlmService};
use crate::utils::logging::truncate_text;

/// 出题流程
///
/// - 编排单道题目的生成与解析
/// - 不持有会话状态
/// - 只依赖业务能力（services）
pub struct QuizFlow {
    llm_service: LlmService,
    verbose_logging: bool,
}

impl QuizFlow {
    /// 创建新的出题流程
    pub fn new(config: &Config) -> Self {
        Self {
            llm_service: LlmService::new(config),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 按给定难度出一道题
    ///
    /// 模型传输层错误向上传播；内容不合格由解析层兜底，永不因此报错。
    pub async fn next_question(&self, difficulty: Difficulty) -> AppResult<Question> {
        info!("🤖 正在生成 {} 难度的题目...", difficulty);

        let raw = self.llm_service.generate_question_text(difficulty).await?;

        if self.verbose_logging {
            debug!("模型原始输出:\n{}", raw);
        }

        let question = question_parser::parse_generated(&raw);
        debug!("✓ 题目就绪: {}", truncate_text(&question.prompt, 80));

        Ok(question)
    }
}
