use serde::{Deserialize, Serialize};

/// 正则匹配出的原始题块（各字段已去除首尾空白）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub question: String,
    /// A-D 四个选项，顺序与原文一致
    pub options: [String; 4],
    /// 原文中的答案标记，未经校验
    pub answer_code: String,
    pub subject: String,
}

/// 输出 JSON 中的单道题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    /// 图片引用，本转换器始终输出 null
    pub image: Option<String>,
    pub options: [String; 4],
    /// 正确选项的完整文本，答案字母无效时为占位文本
    pub answer: String,
    /// 解析，本转换器始终输出 null
    pub explanation: Option<String>,
    pub chapter: String,
}

/// 输出的完整题库文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub title: String,
    /// 去重并排序后的章节列表
    pub chapters: Vec<String>,
    /// 题目，顺序与原文一致
    pub questions: Vec<QuestionRecord>,
}

impl QuizDocument {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
