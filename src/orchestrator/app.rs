//! 应用编排 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一场测验的完整生命周期：
//!
//! 1. **开始闸门**：等待用户确认后开始
//! 2. **交互循环**：出题（如缺）→ 展示 → 读答案 → 提交 → 记录结果
//! 3. **收尾**：渲染汇总、写成绩报告
//! 4. **重新开始**：整体重置会话状态后再来一场

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::models::Question;
use crate::orchestrator::summary;
use crate::services::ReportWriter;
use crate::utils::logging::{log_question_result, log_session_complete, log_startup};
use crate::workflow::{QuizFlow, SessionAction, SessionState};

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuizFlow,
    report_writer: ReportWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let flow = QuizFlow::new(&config);
        let report_writer = ReportWriter::new(&config);

        Ok(Self {
            config,
            flow,
            report_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let mut state = SessionState::new(self.config.total_questions);

        loop {
            self.wait_for_start()?;
            state.apply(SessionAction::Start);

            while !state.is_complete() {
                self.run_question_cycle(&mut state).await?;
            }

            self.finish_session(&state)?;

            if !self.ask_restart()? {
                break;
            }
            info!("🔄 重新开始测验");
            state.apply(SessionAction::Restart);
        }

        Ok(())
    }

    /// 单次交互循环
    ///
    /// 每次用户动作恰好触发一次完整的评估周期。
    async fn run_question_cycle(&self, state: &mut SessionState) -> Result<()> {
        // 生成题目（如当前没有待作答的题目）
        if state.pending.is_none() {
            match self.flow.next_question(state.current_difficulty).await {
                Ok(question) => state.apply(SessionAction::LoadQuestion(question)),
                Err(e) => {
                    error!("❌ 题目生成失败: {}，稍后重试", e);
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    return Ok(());
                }
            }
        }

        let Some(question) = state.pending.clone() else {
            return Ok(());
        };

        self.present_question(state, &question);
        let chosen = self.read_answer(&question)?;
        state.apply(SessionAction::Submit(chosen));

        // 刚写入的记录即本题结果
        if let Some(record) = state.answers.get(&state.current_question) {
            log_question_result(state.current_question, record);
        }

        Ok(())
    }

    /// 展示当前题目，选项按字母顺序排列
    fn present_question(&self, state: &SessionState, question: &Question) {
        println!();
        println!(
            "第 {} / {} 题",
            state.current_question + 1,
            state.total_questions()
        );
        println!("{}", question.prompt);
        for (letter, text) in &question.options {
            println!("  {}) {}", letter, text);
        }
    }

    /// 读取一个合法的选项字母，输入不合法时重新提示
    fn read_answer(&self, question: &Question) -> Result<String> {
        loop {
            print!("请输入你的答案 (A-E): ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                anyhow::bail!("标准输入已关闭");
            }

            let chosen = line.trim().to_uppercase();
            if chosen.len() == 1 && question.options.keys().any(|l| l.to_string() == chosen) {
                return Ok(chosen);
            }
            println!("输入无效，请输入题目给出的选项字母。");
        }
    }

    /// 开始闸门：等待用户回车
    fn wait_for_start(&self) -> Result<()> {
        println!();
        println!(
            "GMAT 自适应测验：共 {} 题，按回车开始...",
            self.config.total_questions
        );
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(())
    }

    /// 询问是否重新开始；标准输入关闭时视为否
    fn ask_restart(&self) -> Result<bool> {
        print!("是否重新开始？(y/N): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(matches!(line.trim(), "y" | "Y"))
    }

    /// 测验收尾：渲染汇总、写报告、输出完成日志
    fn finish_session(&self, state: &SessionState) -> Result<()> {
        summary::render_summary(state);
        summary::render_score_chart(state.score, state.min_score(), state.max_score());

        self.report_writer.write(state.score, &state.answers)?;
        log_session_complete(state.score, state.total_questions(), &self.config.report_file);

        Ok(())
    }
}
