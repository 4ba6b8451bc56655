//! 题目处理上下文
//!
//! 封装"正在处理第几道题"这一信息，用于日志定位

use std::fmt::Display;

/// 题目处理上下文
#[derive(Debug, Clone, Copy)]
pub struct QuestionCtx {
    /// 题目在原文中的序号（从1开始）
    pub question_index: usize,

    /// 本次匹配到的题目总数
    pub total: usize,
}

impl QuestionCtx {
    pub fn new(question_index: usize, total: usize) -> Self {
        Self {
            question_index,
            total,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[题目 {}/{}]", self.question_index, self.total)
    }
}
