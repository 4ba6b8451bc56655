pub mod convert_flow;
pub mod question_ctx;

pub use convert_flow::{convert, parse_quiz, ConvertReport};
pub use question_ctx::QuestionCtx;
