//! 成绩汇总展示 - 编排层
//!
//! 终端版的结业报表：逐题明细表 + 三柱得分对比图。

use crate::utils::logging::truncate_text;
use crate::workflow::SessionState;

const CHART_WIDTH: usize = 40;

/// 渲染逐题明细表
pub fn render_summary(state: &SessionState) {
    println!();
    println!("{}", "=".repeat(72));
    println!("作答汇总");
    println!("{}", "─".repeat(72));
    println!(
        "{:<4} {:<8} {:<6} {:<6} {:<4} {:<4} 题目",
        "题号", "难度", "你的答案", "正确答案", "得分", "结果"
    );

    for (number, record) in &state.answers {
        println!(
            "{:<4} {:<8} {:<6} {:<6} {:<4} {:<4} {}",
            number,
            record.difficulty,
            record.chosen,
            record.correct,
            record.points,
            if record.is_correct { "✅" } else { "❌" },
            truncate_text(&record.question, 40)
        );
    }

    println!("{}", "─".repeat(72));
    println!("最终得分: {}", state.score);
    println!("{}", "=".repeat(72));
}

/// 渲染三柱得分对比图（你的得分 / 最低分 / 最高分）
pub fn render_score_chart(score: u32, min_score: u32, max_score: u32) {
    println!();
    println!("得分对比");

    for (label, value) in [
        ("你的得分", score),
        ("最低分", min_score),
        ("最高分", max_score),
    ] {
        println!(
            "{:<8} {:>3} | {}",
            label,
            value,
            "█".repeat(bar_width(value, max_score))
        );
    }
    println!();
}

/// 按最高分等比缩放柱长
fn bar_width(value: u32, max_score: u32) -> usize {
    (value as usize * CHART_WIDTH) / max_score.max(1) as usize
}
