pub mod loaders;
pub mod question;

pub use loaders::load_input_text;
pub use question::{QuestionRecord, QuizDocument, RawBlock};
