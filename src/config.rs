use std::str::FromStr;

use tracing::warn;

use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 一场测验的总题数
    pub total_questions: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 成绩报告文件
    pub report_file: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 单次生成的最大 token 数
    pub max_completion_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_questions: 10,
            verbose_logging: false,
            report_file: "report.txt".to_string(),
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            max_completion_tokens: 200,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            total_questions: env_parse("TOTAL_QUESTIONS", default.total_questions, "usize"),
            verbose_logging: env_parse("VERBOSE_LOGGING", default.verbose_logging, "bool"),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            max_completion_tokens: env_parse(
                "MAX_COMPLETION_TOKENS",
                default.max_completion_tokens,
                "u32",
            ),
        }
    }
}

/// 读取并解析环境变量，解析失败时记录警告并退回默认值
fn env_parse<T: FromStr>(var_name: &str, default: T, expected_type: &str) -> T {
    match std::env::var(var_name) {
        Ok(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                let err = ConfigError::EnvVarParseFailed {
                    var_name: var_name.to_string(),
                    value,
                    expected_type: expected_type.to_string(),
                };
                warn!("{}，使用默认值", err);
                default
            }
        },
        Err(_) => default,
    }
}
