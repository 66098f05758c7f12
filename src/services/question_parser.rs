//! 题目解析服务 - 业务能力层
//!
//! 只负责"把模型的原始补全解析为结构化题目"能力，不关心流程
//!
//! 模型输出的预期格式：
//!
//! ```text
//! Question: <题干>
//! A) <选项>
//! B) <选项>
//! C) <选项>
//! D) <选项>
//! E) <选项>
//! Correct Answer: <字母>
//! ```
//!
//! 解析永不失败：结构校验不通过时返回固定的兜底题目。

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::Question;

const QUESTION_MARKER: &str = "Question:";
const CORRECT_MARKER: &str = "Correct Answer:";

/// 选项行，如 `A) 选项内容`
fn option_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-E])\)(.*)$").expect("选项行正则不合法"))
}

/// 正确答案字段中的选项字母
fn correct_letter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-E]").expect("选项字母正则不合法"))
}

/// 将模型的原始补全解析为结构化题目
///
/// 逐行扫描：
/// - `Question:` 行设置题干（去掉标记后修剪）
/// - `A)`～`E)` 行设置对应字母的选项（标记后的内容修剪；重复字母后者覆盖前者）
/// - `Correct Answer:` 行设置正确选项字母；模型可能输出 `C`、`[C]`、`C)` 等
///   形式，统一提取其中首个 A–E 字母，提取不到则视为空
/// - 其余行一律忽略
///
/// 校验：题干非空、捕获到至少 5 个选项、正确字母非空，三者缺一即返回兜底题目。
pub fn parse_generated(text: &str) -> Question {
    let mut prompt = String::new();
    let mut options: BTreeMap<char, String> = BTreeMap::new();
    let mut correct = String::new();

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
            prompt = rest.trim().to_string();
        } else if let Some(caps) = option_line_re().captures(line) {
            if let Some(letter) = caps[1].chars().next() {
                options.insert(letter, caps[2].trim().to_string());
            }
        } else if let Some(rest) = line.strip_prefix(CORRECT_MARKER) {
            correct = correct_letter_re()
                .find(rest.trim())
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
        }
    }

    if prompt.is_empty() || options.len() < 5 || correct.is_empty() {
        warn!("⚠️ 模型输出不符合预期格式，使用兜底题目");
        debug!("原始输出: {}", text);
        return Question::fallback();
    }

    Question {
        prompt,
        options,
        correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "Question: If x + 3 = 7, what is x?\n\
                               A) 2\n\
                               B) 3\n\
                               C) 4\n\
                               D) 5\n\
                               E) 6\n\
                               Correct Answer: C";

    #[test]
    fn test_parse_well_formed() {
        let q = parse_generated(WELL_FORMED);
        assert_eq!(q.prompt, "If x + 3 = 7, what is x?");
        assert_eq!(q.correct, "C");
        assert_eq!(q.options.len(), 5);
        assert_eq!(q.options[&'A'], "2");
        assert_eq!(q.options[&'E'], "6");
    }

    #[test]
    fn test_missing_correct_answer_falls_back() {
        let text = "Question: If x + 3 = 7, what is x?\n\
                    A) 2\nB) 3\nC) 4\nD) 5\nE) 6";
        let q = parse_generated(text);
        assert_eq!(q, Question::fallback());
        assert_eq!(q.correct, "B");
    }

    #[test]
    fn test_missing_prompt_falls_back() {
        let text = "A) 2\nB) 3\nC) 4\nD) 5\nE) 6\nCorrect Answer: C";
        assert_eq!(parse_generated(text), Question::fallback());
    }

    #[test]
    fn test_too_few_options_falls_back() {
        let text = "Question: If x + 3 = 7, what is x?\n\
                    A) 2\nB) 3\nC) 4\n\
                    Correct Answer: C";
        assert_eq!(parse_generated(text), Question::fallback());
    }

    #[test]
    fn test_duplicate_option_letter_last_wins() {
        let text = "Question: Pick one.\n\
                    A) old\nA) new\nB) 1\nC) 2\nD) 3\nE) 4\n\
                    Correct Answer: A";
        let q = parse_generated(text);
        assert_eq!(q.options[&'A'], "new");
        assert_eq!(q.options.len(), 5);
    }

    #[test]
    fn test_unrelated_lines_ignored() {
        let text = "Here is your question.\n\
                    Question: Pick one.\n\
                    some preamble\n\
                    A) 1\nB) 2\nC) 3\nD) 4\nE) 5\n\
                    F) not a real option\n\
                    Correct Answer: D\n\
                    Good luck!";
        let q = parse_generated(text);
        assert_eq!(q.correct, "D");
        assert_eq!(q.options.len(), 5);
        assert!(!q.options.contains_key(&'F'));
    }

    #[test]
    fn test_noisy_correct_letter_normalized() {
        for noisy in ["Correct Answer: [C]", "Correct Answer: C)", "Correct Answer: C."] {
            let text = format!("Question: Pick one.\nA) 1\nB) 2\nC) 3\nD) 4\nE) 5\n{}", noisy);
            assert_eq!(parse_generated(&text).correct, "C");
        }
    }

    #[test]
    fn test_correct_line_without_letter_falls_back() {
        let text = "Question: Pick one.\nA) 1\nB) 2\nC) 3\nD) 4\nE) 5\n\
                    Correct Answer: none of the above";
        assert_eq!(parse_generated(text), Question::fallback());
    }
}
