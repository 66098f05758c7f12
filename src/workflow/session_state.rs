//! 测验会话状态 - 流程层
//!
//! 一场测验的全部可变状态与显式状态转移函数。
//!
//! 状态机与任何展示机制解耦：编排层只通过 [`SessionAction`] 驱动状态，
//! 展示层读取状态渲染。单写者，每次用户动作恰好触发一次转移。

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{AnswerRecord, Difficulty, Question};

/// 驱动会话状态机的动作
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// 开始测验
    Start,
    /// 装入一道待作答的题目
    LoadQuestion(Question),
    /// 提交一个选项字母作为答案
    Submit(String),
    /// 重新开始（整体丢弃并重建状态）
    Restart,
}

/// 一场测验的会话状态
///
/// 生命周期：开始时创建，每次提交答案变更一次，重新开始时整体丢弃。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// 测验是否已开始
    pub started: bool,
    /// 已完成的题目数（0..total_questions）
    pub current_question: usize,
    /// 累计得分
    pub score: u32,
    /// 当前难度
    pub current_difficulty: Difficulty,
    /// 题号（从 1 开始）→ 作答记录
    pub answers: BTreeMap<usize, AnswerRecord>,
    /// 正在等待作答的题目
    pub pending: Option<Question>,
    total_questions: usize,
}

impl SessionState {
    /// 创建初始状态：未开始、第 0 题、0 分、难度 medium
    pub fn new(total_questions: usize) -> Self {
        Self {
            started: false,
            current_question: 0,
            score: 0,
            current_difficulty: Difficulty::Medium,
            answers: BTreeMap::new(),
            pending: None,
            total_questions,
        }
    }

    /// 显式状态转移函数：`(state, action) -> state'`
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Start => {
                self.started = true;
            }
            SessionAction::LoadQuestion(question) => {
                if self.pending.is_some() {
                    debug!("已有待作答的题目，忽略装入");
                } else if self.is_complete() {
                    debug!("测验已完成，忽略装入");
                } else {
                    self.pending = Some(question);
                }
            }
            SessionAction::Submit(chosen) => self.submit(chosen),
            SessionAction::Restart => {
                *self = Self::new(self.total_questions);
            }
        }
    }

    /// 提交答案：判分 → 计分 → 记录 → 调整难度 → 推进题号
    ///
    /// 没有待作答的题目或测验已完成时为空操作。
    fn submit(&mut self, chosen: String) {
        if self.is_complete() {
            debug!("测验已完成，忽略提交");
            return;
        }
        let Some(question) = self.pending.take() else {
            debug!("没有待作答的题目，忽略提交");
            return;
        };

        let is_correct = question.is_correct(&chosen);
        // 得分按作答时生效的难度计算
        let difficulty = self.current_difficulty;
        let points = if is_correct { difficulty.points() } else { 0 };
        self.score += points;

        self.answers.insert(
            self.current_question + 1,
            AnswerRecord {
                question: question.prompt,
                chosen,
                correct: question.correct,
                difficulty,
                points,
                is_correct,
            },
        );

        self.current_difficulty = difficulty.adjust(is_correct);
        self.current_question += 1;
    }

    /// 是否已完成全部题目
    pub fn is_complete(&self) -> bool {
        self.current_question >= self.total_questions
    }

    /// 本场测验的总题数
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// 本场测验的最低可能得分（全部按 easy 答对）
    pub fn min_score(&self) -> u32 {
        self.total_questions as u32 * Difficulty::Easy.points()
    }

    /// 本场测验的最高可能得分（全部按 hard 答对）
    pub fn max_score(&self) -> u32 {
        self.total_questions as u32 * Difficulty::Hard.points()
    }
}
