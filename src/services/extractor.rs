//! 题块提取服务 - 业务能力层
//!
//! 只负责"从原始文本中找出题块"，不关心答案映射和输出格式

use regex::{Captures, Regex};

use crate::error::ConvertResult;
use crate::models::RawBlock;

/// 题块匹配正则
///
/// `Question:` 之后是题干，依次跟 `A)`..`D)` 四个选项、`Answer:` 和 `Subject:`。
/// 题干与选项可以跨行（非贪婪匹配到下一个标记为止），科目只取一行。
/// 答案取该行剩余全部内容（可能为空），由转换服务判断是否有效；
/// 答案行不跨行匹配，否则选项 D 会吞掉下一题。
const BLOCK_PATTERN: &str = concat!(
    r"(?s)Question:\s*(.*?)\n",
    r"\s*A\)\s*(.*?)\n",
    r"\s*B\)\s*(.*?)\n",
    r"\s*C\)\s*(.*?)\n",
    r"\s*D\)\s*(.*?)\n",
    r"\s*Answer:[ \t]*([^\n]*?)[ \t\r]*\n",
    r"\s*Subject:[ \t]*([^\n]*)",
);

/// 题块提取器
pub struct QuestionExtractor {
    pattern: Regex,
}

impl QuestionExtractor {
    pub fn new() -> ConvertResult<Self> {
        Ok(Self {
            pattern: Regex::new(BLOCK_PATTERN)?,
        })
    }

    /// 按原文顺序提取所有互不重叠的题块
    pub fn extract(&self, text: &str) -> Vec<RawBlock> {
        self.pattern
            .captures_iter(text)
            .map(|caps| block_from_captures(&caps))
            .collect()
    }
}

fn block_from_captures(caps: &Captures<'_>) -> RawBlock {
    let field = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    RawBlock {
        question: field(1),
        options: [field(2), field(3), field(4), field(5)],
        answer_code: field(6),
        subject: field(7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> QuestionExtractor {
        QuestionExtractor::new().unwrap()
    }

    #[test]
    fn test_single_block() {
        let text = "Question: What is 2+2?\nA) 3\nB) 4\nC) 5\nD) 6\nAnswer: B\nSubject: Arithmetic\n";
        let blocks = extractor().extract(text);

        assert_eq!(
            blocks,
            vec![RawBlock {
                question: "What is 2+2?".to_string(),
                options: ["3", "4", "5", "6"].map(String::from),
                answer_code: "B".to_string(),
                subject: "Arithmetic".to_string(),
            }]
        );
    }

    #[test]
    fn test_multiline_question_and_indented_markers() {
        let text = "\
Question: A steel rod is heated.
Which of the following increases?
   A) Density
   B) Length
   C) Mass
   D) Young's modulus
   Answer: B
   Subject: Thermodynamics
";
        let blocks = extractor().extract(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].question,
            "A steel rod is heated.\nWhich of the following increases?"
        );
        assert_eq!(blocks[0].options[3], "Young's modulus");
        assert_eq!(blocks[0].subject, "Thermodynamics");
    }

    #[test]
    fn test_crlf_input_is_trimmed() {
        let text = "Question: Unit of force?\r\nA) Joule\r\nB) Newton\r\nC) Watt\r\nD) Pascal\r\nAnswer: B\r\nSubject: Mechanics\r\n";
        let blocks = extractor().extract(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].question, "Unit of force?");
        assert_eq!(blocks[0].options, ["Joule", "Newton", "Watt", "Pascal"].map(String::from));
        assert_eq!(blocks[0].answer_code, "B");
        assert_eq!(blocks[0].subject, "Mechanics");
    }

    #[test]
    fn test_blocks_keep_source_order_and_skip_noise() {
        let text = "\
ISRO 2020 paper, page 1

Question: First?
A) a
B) b
C) c
D) d
Answer: A
Subject: One

-- page break --

Question: Second?
A) e
B) f
C) g
D) h
Answer: d
Subject: Two
";
        let blocks = extractor().extract(text);

        let questions: Vec<&str> = blocks.iter().map(|b| b.question.as_str()).collect();
        assert_eq!(questions, vec!["First?", "Second?"]);
        assert_eq!(blocks[1].answer_code, "d");
    }

    #[test]
    fn test_malformed_answer_is_still_captured() {
        let text = "Question: Q?\nA) a\nB) b\nC) c\nD) d\nAnswer: E\nSubject: S\n";
        let blocks = extractor().extract(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].answer_code, "E");
    }

    #[test]
    fn test_blank_answer_does_not_swallow_next_block() {
        let text = "\
Question: First?
A) a
B) b
C) c
D) d
Answer:
Subject: One

Question: Second?
A) e
B) f
C) g
D) h
Answer: C
Subject: Two
";
        let blocks = extractor().extract(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].options[3], "d");
        assert_eq!(blocks[0].answer_code, "");
        assert_eq!(blocks[0].subject, "One");
        assert_eq!(blocks[1].answer_code, "C");
    }

    #[test]
    fn test_answer_with_trailing_text_stays_on_its_line() {
        let text = "\
Question: First?
A) a
B) b
C) c
D) d
Answer: B (2 marks)\r
Subject: One

Question: Second?
A) e
B) f
C) g
D) h
Answer: A
Subject: Two
";
        let blocks = extractor().extract(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].options[3], "d");
        assert_eq!(blocks[0].answer_code, "B (2 marks)");
        assert_eq!(blocks[1].subject, "Two");
    }

    #[test]
    fn test_no_blocks() {
        assert!(extractor().extract("").is_empty());
        assert!(extractor()
            .extract("Question: missing options\nAnswer: A\nSubject: S\n")
            .is_empty());
    }
}
