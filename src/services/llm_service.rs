//! LLM 服务 - 业务能力层
//!
//! 只负责"向大模型要一段原始补全"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Azure, Gemini, Doubao 等）

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, LlmError};
use crate::models::Difficulty;

/// 出题用的系统消息
const SYSTEM_MESSAGE: &str = "You are a GMAT question writer. \
    Always reply in exactly the requested format and nothing else.";

/// LLM 服务
///
/// 职责：
/// - 调用 LLM API 生成题目原文
/// - 提供通用的 LLM 调用接口
/// - 只生成单道题目的文本
/// - 不出现 SessionState
/// - 不关心流程顺序
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_completion_tokens: u32,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
            max_completion_tokens: config.max_completion_tokens,
        }
    }

    /// 通用的 LLM 调用函数
    ///
    /// 这是最基础的 LLM 调用接口，其他所有 LLM 相关功能都基于此函数。
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回第一个候选的内容（修剪后的字符串）
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> AppResult<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        let to_llm_err =
            |e: async_openai::error::OpenAIError| AppError::llm_api_failed(&self.model_name, e);

        // 构建消息列表
        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(to_llm_err)?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(to_llm_err)?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .max_tokens(self.max_completion_tokens)
            .build()
            .map_err(to_llm_err)?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AppError::llm_api_failed(&self.model_name, e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let choice = response.choices.first().ok_or_else(|| {
            AppError::Llm(LlmError::EmptyResponse {
                model: self.model_name.clone(),
            })
        })?;

        let content = choice.message.content.clone().ok_or_else(|| {
            AppError::Llm(LlmError::EmptyContent {
                model: self.model_name.clone(),
            })
        })?;

        Ok(content.trim().to_string())
    }

    /// 生成一道指定难度的题目原文
    ///
    /// 只消费第一个候选的文本；结构化解析交给 `question_parser`。
    ///
    /// # 参数
    /// - `difficulty`: 期望的题目难度
    ///
    /// # 返回
    /// 返回模型的原始补全文本
    pub async fn generate_question_text(&self, difficulty: Difficulty) -> AppResult<String> {
        let prompt = format!(
            "Generate a GMAT-style quantitative problem with a {} difficulty level. \
             Provide 5 answer choices labeled A) through E) and indicate the correct answer \
             using 'Correct Answer: [letter]'.",
            difficulty
        );

        self.send_to_llm(&prompt, Some(SYSTEM_MESSAGE)).await
    }
}
