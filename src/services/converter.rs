//! 题目转换服务 - 业务能力层
//!
//! 将原始题块映射为输出题目，并汇总章节

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::models::{QuestionRecord, QuizDocument, RawBlock};
use crate::utils::logging::truncate_text;
use crate::workflow::QuestionCtx;

/// 答案字母无法映射到选项时使用的占位答案
pub const ANSWER_SENTINEL: &str = "ERROR - CHECK PDF";

/// 将答案字母映射为选项索引（A=0 ... D=3），大小写不敏感
pub fn answer_index(code: &str) -> Option<usize> {
    let mut chars = code.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }

    match letter {
        'A'..='D' => Some(letter as usize - 'A' as usize),
        _ => None,
    }
}

/// 题目转换器
///
/// 逐题转换并累积章节集合，最后一次性生成文档。
#[derive(Debug, Default)]
pub struct QuizConverter {
    questions: Vec<QuestionRecord>,
    chapters: BTreeSet<String>,
    invalid_answers: Vec<usize>,
}

impl QuizConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 转换单个题块并追加到结果中
    pub fn push(&mut self, block: RawBlock, ctx: &QuestionCtx) {
        debug!("{} 处理中: {}", ctx, truncate_text(&block.question, 40));

        let answer = match answer_index(&block.answer_code) {
            Some(index) => block.options[index].clone(),
            None => {
                warn!(
                    "⚠️ {} 无效的答案字母 '{}'，已使用占位答案",
                    ctx, block.answer_code
                );
                self.invalid_answers.push(ctx.question_index);
                ANSWER_SENTINEL.to_string()
            }
        };

        self.chapters.insert(block.subject.clone());
        self.questions.push(QuestionRecord {
            question: block.question,
            image: None,
            options: block.options,
            answer,
            explanation: None,
            chapter: block.subject,
        });
    }

    /// 答案无效的题目序号（从1开始）
    pub fn invalid_answers(&self) -> &[usize] {
        &self.invalid_answers
    }

    /// 生成最终文档
    pub fn finish(self, title: impl Into<String>) -> QuizDocument {
        QuizDocument {
            title: title.into(),
            chapters: self.chapters.into_iter().collect(),
            questions: self.questions,
        }
    }
}

/// 将全部题块转换为文档，同时返回答案无效的题目序号
pub fn build_document(blocks: Vec<RawBlock>, title: &str) -> (QuizDocument, Vec<usize>) {
    let total = blocks.len();
    let mut converter = QuizConverter::new();

    for (i, block) in blocks.into_iter().enumerate() {
        converter.push(block, &QuestionCtx::new(i + 1, total));
    }

    let invalid = converter.invalid_answers().to_vec();
    (converter.finish(title), invalid)
}
