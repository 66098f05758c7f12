//! 成绩报告写入服务 - 业务能力层
//!
//! 只负责"把一场测验的结果追加写入报告文件"能力，不关心流程
//!
//! 报告是只追加的日志产物，程序不会读回。

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;

use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::AnswerRecord;

/// 成绩报告写入服务
///
/// 职责：
/// - 将一场测验的最终得分和逐题记录追加写入报告文件
/// - 不出现 SessionState
/// - 不关心流程顺序
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    /// 创建新的成绩报告写入服务
    pub fn new(config: &Config) -> Self {
        Self {
            report_file_path: config.report_file.clone(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    /// 追加写入一场测验的完整报告
    ///
    /// # 参数
    /// - `score`: 最终得分
    /// - `answers`: 题号（从 1 开始）→ 作答记录
    pub fn write(&self, score: u32, answers: &BTreeMap<usize, AnswerRecord>) -> AppResult<()> {
        debug!(
            "写入成绩报告: {} | 得分 {} | 共 {} 题",
            self.report_file_path,
            score,
            answers.len()
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.report_file_path)
            .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;

        let header = format!(
            "{}\n测验报告 - {}\n最终得分: {}\n{}\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            score,
            "=".repeat(60)
        );
        file.write_all(header.as_bytes())
            .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;

        for (number, record) in answers {
            let json = serde_json::to_string(record)
                .map_err(|e| AppError::Other(format!("序列化作答记录失败: {}", e)))?;
            let line = format!("题 {} | {}\n", number, json);
            file.write_all(line.as_bytes())
                .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;
        }

        file.write_all(b"\n")
            .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn sample_record() -> AnswerRecord {
        AnswerRecord {
            question: "What is 2 + 2?".to_string(),
            chosen: "B".to_string(),
            correct: "B".to_string(),
            difficulty: Difficulty::Medium,
            points: 2,
            is_correct: true,
        }
    }

    #[test]
    fn test_write_appends_report() {
        let path = std::env::temp_dir().join("gmat_adaptive_test_report.txt");
        let _ = std::fs::remove_file(&path);

        let writer = ReportWriter::with_path(path.to_string_lossy().to_string());
        let answers = BTreeMap::from([(1, sample_record())]);

        writer.write(2, &answers).expect("写报告失败");
        writer.write(2, &answers).expect("第二次写报告失败");

        let content = std::fs::read_to_string(&path).expect("读报告失败");
        assert_eq!(content.matches("最终得分: 2").count(), 2);
        assert!(content.contains("题 1 | "));
        assert!(content.contains("\"chosen\":\"B\""));

        let _ = std::fs::remove_file(&path);
    }
}
