//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话生命周期和交互循环，是整个系统的"指挥中心"。
//!
//! ### `app` - 应用编排
//! - 管理应用生命周期（初始化、运行、收尾）
//! - 驱动交互循环（出题 → 展示 → 读答案 → 提交）
//! - 持有终端标准输入输出
//! - 支持测验完成后重新开始
//!
//! ### `summary` - 成绩汇总展示
//! - 渲染逐题明细表
//! - 渲染三柱得分对比图
//!
//! ## 层次关系
//!
//! ```text
//! app (一场测验的交互循环)
//!     ↓
//! workflow::SessionState (状态机) / workflow::QuizFlow (单道题)
//!     ↓
//! services (能力层：llm / parser / report)
//!     ↓
//! models (数据层：Difficulty / Question / AnswerRecord)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：app 管交互循环，summary 管结业展示
//! 2. **单写者**：只有编排层驱动状态转移
//! 3. **向下依赖**：编排层 → workflow → services → models
//! 4. **无业务逻辑**：判分、计分、难度调整全部在状态机内

pub mod app;
pub mod summary;

// 重新导出主要类型
pub use app::App;
