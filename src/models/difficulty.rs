use serde::{Deserialize, Serialize};
use std::fmt;

/// 难度等级
///
/// 固定难度阶梯 easy → medium → hard，按答题对错逐级升降。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 难度阶梯，顺序即全序
    pub const LADDER: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// 根据答题结果调整难度
    ///
    /// 答对升一级（hard 封顶），答错降一级（easy 保底）。
    pub fn adjust(self, correct: bool) -> Difficulty {
        let index = Self::LADDER
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default();
        if correct {
            Self::LADDER[(index + 1).min(Self::LADDER.len() - 1)]
        } else {
            Self::LADDER[index.saturating_sub(1)]
        }
    }

    /// 本难度下答对一题的得分
    pub fn points(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// 小写英文名，直接嵌入出题提示词
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
