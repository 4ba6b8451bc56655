//! # Quiz Convert
//!
//! 将纯文本题目导出转换为题库 JSON 的工具
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 原始题块、输出题目与题库文档
//! - `models/loaders` - 读取原始文本
//!
//! ### ② 业务能力层（Services）
//! - `QuestionExtractor` - 正则提取题块
//! - `QuizConverter` - 答案映射、章节汇总
//! - `JsonWriter` - 创建输出目录并写出 JSON
//!
//! ### ③ 流程层（Workflow）
//! - `convert` - 读取 → 提取 → 转换 → 写出，返回 `ConvertReport` 或 `ConvertError`
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{ConvertError, ConvertResult, FatalStage};
pub use models::{QuestionRecord, QuizDocument, RawBlock};
pub use services::ANSWER_SENTINEL;
pub use workflow::{convert, parse_quiz, ConvertReport};
