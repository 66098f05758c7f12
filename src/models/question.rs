use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::difficulty::Difficulty;

/// 一道结构化的选择题
///
/// 预期恰好 5 个选项（A–E）。BTreeMap 保证展示时按字母顺序排列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 题干
    pub prompt: String,
    /// 选项字母 → 选项内容
    pub options: BTreeMap<char, String>,
    /// 正确选项字母
    pub correct: String,
}

impl Question {
    /// 兜底题目：模型输出无法通过结构校验时的固定替代
    pub fn fallback() -> Self {
        let options = BTreeMap::from([
            ('A', "3".to_string()),
            ('B', "4".to_string()),
            ('C', "5".to_string()),
            ('D', "6".to_string()),
            ('E', "7".to_string()),
        ]);
        Self {
            prompt: "What is 2 + 2?".to_string(),
            options,
            correct: "B".to_string(),
        }
    }

    /// 判断给定的选项字母是否为正确答案
    pub fn is_correct(&self, chosen: &str) -> bool {
        self.correct == chosen
    }
}

/// 单题作答记录
///
/// 创建后不再变更，按题号（从 1 开始）挂入会话状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// 题干
    pub question: String,
    /// 用户选择的字母
    pub chosen: String,
    /// 正确选项字母
    pub correct: String,
    /// 作答时生效的难度
    pub difficulty: Difficulty,
    /// 本题得分
    pub points: u32,
    /// 是否答对
    pub is_correct: bool,
}
