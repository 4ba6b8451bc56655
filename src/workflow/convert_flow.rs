//! 题库转换流程 - 流程层
//!
//! 核心职责：定义"一次转换"的完整流程
//!
//! 流程顺序：
//! 1. 读取原始文本（失败即中止）
//! 2. 正则提取题块（一个都没有即中止）
//! 3. 逐题转换、汇总章节（答案无效只警告）
//! 4. 写出 JSON（失败即中止）

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::{ConvertError, ConvertResult};
use crate::models::{load_input_text, QuizDocument};
use crate::services::{build_document, JsonWriter, QuestionExtractor};
use crate::utils::logging;

/// 一次成功转换的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// 写入的文件路径
    pub output_path: PathBuf,
    /// 写出的题目数量
    pub question_count: usize,
    /// 不同章节数量
    pub chapter_count: usize,
    /// 使用了占位答案的题目序号（从1开始）
    pub invalid_answers: Vec<usize>,
}

/// 从文本构建题库文档，不涉及任何文件读写
///
/// 没有匹配到题块时返回 `NoQuestionsFound`，`source` 仅用于错误信息。
pub fn parse_quiz(
    text: &str,
    title: &str,
    source: impl Into<PathBuf>,
) -> ConvertResult<(QuizDocument, Vec<usize>)> {
    let extractor = QuestionExtractor::new()?;
    let blocks = extractor.extract(text);
    logging::log_blocks_found(blocks.len());

    if blocks.is_empty() {
        return Err(ConvertError::NoQuestionsFound {
            path: source.into(),
        });
    }

    Ok(build_document(blocks, title))
}

/// 按配置执行完整转换
pub fn convert(config: &Config) -> ConvertResult<ConvertReport> {
    logging::log_startup(config);

    let text = load_input_text(&config.input_file)?;
    let (document, invalid_answers) = parse_quiz(&text, &config.title, &config.input_file)?;

    let writer = JsonWriter::new(&config.output_dir, config.output_file.as_str());
    let output_path = writer.write(&document)?;

    let report = ConvertReport {
        output_path,
        question_count: document.question_count(),
        chapter_count: document.chapters.len(),
        invalid_answers,
    };

    info!("✅ 成功转换 {} 道题目", report.question_count);
    logging::log_final_stats(&report);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_quiz_empty_text() {
        let err = parse_quiz("", "T", "raw.txt").unwrap_err();
        assert!(matches!(err, ConvertError::NoQuestionsFound { .. }));
    }

    #[test]
    fn test_parse_quiz_arithmetic() {
        let text = "Question: What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nAnswer: B\nSubject: Arithmetic\n";
        let (doc, invalid) = parse_quiz(text, "Maths", "raw.txt").unwrap();

        assert_eq!(doc.chapters, vec!["Arithmetic"]);
        assert_eq!(doc.questions[0].answer, "4");
        assert!(invalid.is_empty());
    }
}
