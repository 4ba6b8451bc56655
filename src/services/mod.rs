pub mod converter;
pub mod extractor;
pub mod json_writer;

pub use converter::{answer_index, build_document, QuizConverter, ANSWER_SENTINEL};
pub use extractor::QuestionExtractor;
pub use json_writer::JsonWriter;
