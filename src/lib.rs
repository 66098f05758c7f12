//! # GMAT Adaptive Test
//!
//! 一个由大模型出题的自适应 GMAT 测验终端应用
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 领域数据类型
//! - `Difficulty` - 难度阶梯（easy → medium → hard）
//! - `Question` / `AnswerRecord` - 题目与作答记录
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Question
//! - `LlmService` - 大模型出题能力
//! - `question_parser` - 模型输出解析能力（解析失败自动兜底）
//! - `ReportWriter` - 写成绩报告能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一场测验"的状态机和"一道题"的出题流程
//! - `SessionState` / `SessionAction` - 会话状态与显式状态转移
//! - `QuizFlow` - 流程编排（生成 → 解析 → 兜底）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 会话生命周期管理，交互循环，重新开始
//! - `App` - 应用入口，唯一持有终端交互的模块
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerRecord, Difficulty, Question};
pub use orchestrator::App;
pub use services::LlmService;
pub use workflow::{QuizFlow, SessionAction, SessionState};
